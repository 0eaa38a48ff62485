//! お問い合わせフォーム
//!
//! 送信中は入力とボタンを無効化し、結果をステータス行に表示する。

use crate::api::emailjs;
use crate::config;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use portfolio_common::profile::CONTACT_INFO;
use portfolio_common::ContactState;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn Contact() -> impl IntoView {
    let state = RwSignal::new(ContactState::default());
    let is_sending = move || state.with(|s| s.is_sending());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let email_config = config::email_config();
        let request = match state.try_update(|s| s.begin_submit(&email_config)) {
            Some(Ok(request)) => request,
            Some(Err(e)) => {
                log::warn!("Contact form not sent: {}", e);
                return;
            }
            None => return,
        };

        spawn_local(async move {
            let result = emailjs::send(&request).await;
            if let Err(e) = &result {
                log::error!("EmailJS request failed: {}", e);
            }
            state.update(|s| s.finish(result));
        });
    };

    view! {
        <section id="contact">
            <h2>"Contact"</h2>

            <p class="content">{CONTACT_INFO}</p>

            <div class="collage-container">
                <img id="palm-up" src="/collages/palm-up.png" alt="Palm up decoration" class="collage" />
                <img
                    id="reaching-out"
                    src="/collages/reaching-out.png"
                    alt="Reaching out decoration"
                    class="collage"
                />

                <form id="contact-form" on:submit=on_submit>
                    <input
                        type="text"
                        name="name"
                        placeholder="Name"
                        required
                        disabled=is_sending
                        prop:value=move || state.with(|s| s.form.name.clone())
                        on:input=move |ev| state.update(|s| s.form.name = event_target_value(&ev))
                    />
                    <input
                        type="email"
                        name="email"
                        placeholder="Email"
                        required
                        disabled=is_sending
                        prop:value=move || state.with(|s| s.form.email.clone())
                        on:input=move |ev| state.update(|s| s.form.email = event_target_value(&ev))
                    />
                    <input
                        type="text"
                        name="subject"
                        placeholder="Subject"
                        required
                        disabled=is_sending
                        prop:value=move || state.with(|s| s.form.subject.clone())
                        on:input=move |ev| state.update(|s| s.form.subject = event_target_value(&ev))
                    />
                    <textarea
                        name="message"
                        placeholder="Message"
                        rows="6"
                        required
                        disabled=is_sending
                        prop:value=move || state.with(|s| s.form.message.clone())
                        on:input=move |ev| state.update(|s| s.form.message = event_target_value(&ev))
                    ></textarea>

                    <button type="submit" disabled=is_sending>
                        {move || state.with(|s| s.button_label())}
                    </button>

                    {move || {
                        state
                            .with(|s| s.status.message())
                            .map(|message| view! { <p class="status" aria-live="polite">{message}</p> })
                    }}
                </form>
            </div>
        </section>
    }
}
