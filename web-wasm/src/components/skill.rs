//! スキルセクション

use crate::browser;
use crate::components::icon::Icon;
use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use portfolio_common::profile::SKILL_INFO;
use portfolio_common::{rotation_from_unit, Content, SkillSelection};

#[component]
pub fn Skill(content: StoredValue<Content>) -> impl IntoView {
    let selection = RwSignal::new(SkillSelection::default());
    let groups = content.with_value(|c| c.skills.clone());

    view! {
        <section id="skill">
            <h2>"Skill"</h2>

            <p class="content">{SKILL_INFO}</p>

            <div id="skill-list">
                {groups
                    .into_iter()
                    .map(|group| {
                        view! {
                            <div class="skill-group">
                                {group
                                    .0
                                    .into_iter()
                                    .map(|(name, description)| {
                                        view! {
                                            <SkillIcon
                                                content=content
                                                name=name
                                                description=description
                                                selection=selection
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <img
                id="megaphone"
                src="/collages/megaphone.png"
                alt="Megaphone collage decoration"
                class="collage"
            />

            <SkillDescription selection=selection />
        </section>
    }
}

#[component]
fn SkillIcon(
    content: StoredValue<Content>,
    name: String,
    description: String,
    selection: RwSignal<SkillSelection>,
) -> impl IntoView {
    let is_active = {
        let name = name.clone();
        move || selection.with(|s| s.is_active(&name))
    };

    let select = {
        let name = name.clone();
        move || {
            let rotation = rotation_from_unit(browser::random_unit());
            selection.update(|s| s.select(&name, &description, rotation));
        }
    };

    let is_active_style = is_active.clone();
    let select_on_key = select.clone();

    view! {
        <div class="skill collage-container">
            <img
                src="/collages/pen-marked.png"
                alt="Pen marked collage decoration"
                class="collage"
                class:show=is_active
                style=move || {
                    let rotation = if is_active_style() { selection.with(|s| s.rotation) } else { 0 };
                    format!("transform: rotate({}deg)", rotation)
                }
            />
            <div
                role="button"
                tabindex="0"
                aria-label=format!("Learn about {}", name)
                on:click=move |_| select()
                on:keydown=move |ev: KeyboardEvent| {
                    if browser::is_activation_key(&ev.key()) {
                        ev.prevent_default();
                        select_on_key();
                    }
                }
            >
                <Icon content=content icon_key=name.clone() />
            </div>
            <p>{name}</p>
        </div>
    }
}

#[component]
fn SkillDescription(selection: RwSignal<SkillSelection>) -> impl IntoView {
    let has_selection = move || selection.with(|s| s.name.is_some());

    view! {
        <Show when=has_selection>
            <h3>{move || selection.with(|s| s.name.clone().unwrap_or_default())}</h3>
        </Show>
        <p
            class="content"
            style=move || {
                if has_selection() { "text-align: left" } else { "text-align: center" }
            }
        >
            {move || selection.with(|s| s.description.clone())}
        </p>
    }
}
