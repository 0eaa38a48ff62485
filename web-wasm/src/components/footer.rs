//! フッター

use crate::browser;
use crate::components::icon::Icon;
use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use portfolio_common::profile::{COPYRIGHT, FOOTER_EMAIL, FOOTER_LOCATION, SOCIAL_LINKS};
use portfolio_common::{is_near_bottom, Content};

#[component]
pub fn Footer(content: StoredValue<Content>) -> impl IntoView {
    let (show_back_to_top, set_show_back_to_top) = signal(false);

    browser::listen_window("scroll", move |_| {
        if let Some((scroll_top, client_height, scroll_height)) = browser::scroll_metrics() {
            set_show_back_to_top.set(is_near_bottom(scroll_top, client_height, scroll_height));
        }
    });

    view! {
        <footer>
            <div id="contact-info">
                <h5>{FOOTER_EMAIL}</h5>
                <h5>{FOOTER_LOCATION}</h5>
            </div>

            <div class="svg-flex">
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                href=link.href
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=link.aria_label
                            >
                                <Icon content=content icon_key=link.icon_key />
                            </a>
                        }
                    })
                    .collect_view()}
            </div>

            <p id="copyright">{COPYRIGHT}</p>

            <div
                id="back-to-top"
                class:visible=move || show_back_to_top.get()
                role="button"
                tabindex="0"
                aria-label="Back to top"
                on:click=move |_| browser::scroll_to_top()
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Enter" {
                        browser::scroll_to_top();
                    }
                }
            >
                <Icon content=content icon_key="arrow-up" />
            </div>
        </footer>
    }
}
