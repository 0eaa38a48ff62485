//! ヒーローセクション

use crate::browser;
use crate::components::icon::Icon;
use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use portfolio_common::profile::{HOME_LINES, NAME, ROLE};
use portfolio_common::{Content, Section};

#[component]
pub fn Home(content: StoredValue<Content>) -> impl IntoView {
    let scroll_to_about = move || {
        browser::scroll_to_section(Section::About.id(), Section::About.scroll_align());
    };

    view! {
        <section id="home">
            <img
                id="pointing"
                src="/collages/pointing.png"
                alt="Pointing gesture decoration"
                class="collage"
            />

            <div class="collage-container">
                <img id="profile" src="/profile.png" alt=format!("{} profile picture", NAME) />
                <img
                    id="sunburst"
                    src="/collages/sunburst.png"
                    alt="Sunburst decoration"
                    class="collage"
                />
            </div>

            <div class="content">
                <p>{ROLE}</p>
                <h2>{NAME}</h2>
                <div class="description">
                    {HOME_LINES.iter().map(|line| view! { <p>{*line}</p> }).collect_view()}
                </div>
            </div>

            <div
                id="scroll-down"
                role="button"
                tabindex="0"
                aria-label="Scroll to about section"
                on:click=move |_| scroll_to_about()
                on:keydown=move |ev: KeyboardEvent| {
                    if browser::is_activation_key(&ev.key()) {
                        ev.prevent_default();
                        scroll_to_about();
                    }
                }
            >
                <Icon content=content icon_key="scroll-down" />
                <h4>"Scroll Down"</h4>
            </div>
        </section>
    }
}
