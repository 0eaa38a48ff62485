//! ナビゲーションバー
//!
//! 幅が狭い時はハンバーガーボタン + ドロワー、広い時は横並びのバー。

use crate::browser;
use crate::components::icon::Icon;
use leptos::ev::KeyboardEvent;
use leptos::html;
use leptos::prelude::*;
use portfolio_common::nav::SECTION_VISIBILITY_THRESHOLD;
use portfolio_common::profile::SITE_TITLE;
use portfolio_common::{Content, NavState, ScrollAlign, Section};

#[component]
pub fn Menu(nav: RwSignal<NavState>, content: StoredValue<Content>) -> impl IntoView {
    let drawer_ref = NodeRef::<html::Ul>::new();
    let button_ref = NodeRef::<html::Div>::new();

    browser::listen_window("resize", move |_| {
        nav.update(|n| n.on_resize(browser::viewport_width()));
    });

    browser::listen_window("keydown", move |ev| {
        if browser::key_of(ev).as_deref() == Some("Escape") {
            nav.update(|n| n.on_escape());
        }
    });

    browser::listen_document("mousedown", move |ev| {
        if !nav.with_untracked(|n| n.drawer_open) {
            return;
        }
        let inside = browser::event_within(
            ev,
            &[
                drawer_ref.get_untracked().map(Into::into),
                button_ref.get_untracked().map(Into::into),
            ],
        );
        if !inside {
            nav.update(|n| n.on_outside_click());
        }
    });

    // セクション要素はマウント後に揃う
    Effect::new(move |_| {
        browser::observe_sections(SECTION_VISIBILITY_THRESHOLD, move |id| {
            if let Some(section) = Section::from_id(&id) {
                nav.update(|n| n.on_section_visible(section));
            }
        });
    });

    let shows_drawer = move || nav.with(|n| n.shows_drawer());

    view! {
        <div id="nav-bar">
            <h2>{SITE_TITLE}</h2>

            <Show when=shows_drawer>
                <MenuButton nav=nav button_ref=button_ref />
            </Show>

            <nav>
                <ul
                    id=move || if shows_drawer() { "menu-drawer" } else { "menu-bar" }
                    class:open=move || nav.with(|n| n.shows_drawer() && n.drawer_open)
                    node_ref=drawer_ref
                >
                    <For
                        each=move || Section::menu_items(nav.with(|n| n.layout))
                        key=|section| *section
                        let:section
                    >
                        <MenuItem section=section nav=nav />
                    </For>
                    <li>
                        <ThemeButton nav=nav content=content />
                    </li>
                </ul>
            </nav>
        </div>
    }
}

#[component]
fn MenuButton(nav: RwSignal<NavState>, button_ref: NodeRef<html::Div>) -> impl IntoView {
    let is_open = move || nav.with(|n| n.drawer_open);

    view! {
        <div id="menu-container">
            <div
                id="menu-btn"
                class:close=is_open
                node_ref=button_ref
                role="button"
                tabindex="0"
                aria-label="Toggle menu"
                aria-expanded=move || is_open().to_string()
                on:click=move |_| nav.update(|n| n.toggle_drawer())
                on:keydown=move |ev: KeyboardEvent| {
                    if browser::is_activation_key(&ev.key()) {
                        ev.prevent_default();
                        nav.update(|n| n.toggle_drawer());
                    }
                }
            >
                <span></span>
                <span></span>
                <span></span>
            </div>
        </div>
    }
}

#[component]
fn MenuItem(section: Section, nav: RwSignal<NavState>) -> impl IntoView {
    let go = move || {
        let mut align = ScrollAlign::Center;
        nav.update(|n| align = n.navigate(section));
        browser::scroll_to_section(section.id(), align);
    };

    view! {
        <li>
            <a
                class:active=move || nav.with(|n| n.section == section)
                role="button"
                tabindex="0"
                aria-label=format!("Navigate to {} section", section)
                on:click=move |ev| {
                    ev.prevent_default();
                    go();
                }
                on:keydown=move |ev: KeyboardEvent| {
                    if browser::is_activation_key(&ev.key()) {
                        ev.prevent_default();
                        go();
                    }
                }
            >
                {section.id()}
            </a>
        </li>
    }
}

#[component]
fn ThemeButton(nav: RwSignal<NavState>, content: StoredValue<Content>) -> impl IntoView {
    let toggle = move || nav.update(|n| n.toggle_theme());

    view! {
        <div
            id="theme-btn"
            role="button"
            tabindex="0"
            aria-label=move || format!("Switch to {} theme", nav.with(|n| n.theme.toggled()))
            on:click=move |_| toggle()
            on:keydown=move |ev: KeyboardEvent| {
                if browser::is_activation_key(&ev.key()) {
                    ev.prevent_default();
                    toggle();
                }
            }
        >
            {move || {
                let icon_key = nav.with(|n| n.theme.toggle_icon());
                view! { <Icon content=content icon_key=icon_key /> }
            }}
        </div>
    }
}
