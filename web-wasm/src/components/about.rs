//! 自己紹介セクション

use crate::components::icon::Icon;
use leptos::prelude::*;
use portfolio_common::profile::{ABOUT_DESCRIPTION, DOCUMENTS, EDUCATION};
use portfolio_common::Content;

#[component]
pub fn About(content: StoredValue<Content>) -> impl IntoView {
    view! {
        <section id="about">
            <h2>"About Me"</h2>

            <div class="content collage-container">
                <img
                    id="double-quotes"
                    src="/collages/double-quotes.png"
                    alt="Double quotes decoration"
                    class="collage"
                />
                <p>{ABOUT_DESCRIPTION}</p>
                <p>{EDUCATION.sentence()}</p>
                <hr />
            </div>

            <img id="writing" src="/collages/writing.png" alt="Writing decoration" class="collage" />

            <div class="svg-flex">
                {DOCUMENTS
                    .iter()
                    .map(|doc| {
                        view! {
                            <a
                                href=doc.href
                                target="_blank"
                                rel="noreferrer"
                                aria-label=doc.aria_label
                            >
                                <Icon content=content icon_key=doc.icon_key />
                                {doc.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
