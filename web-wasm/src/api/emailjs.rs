//! EmailJS REST API連携
//!
//! レスポンス本文は使わず、HTTPの成否だけを見る。

use portfolio_common::contact::EMAILJS_SEND_URL;
use portfolio_common::EmailRequest;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// 送信失敗の理由
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("JavaScript error: {0}")]
    Js(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("EmailJS returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("window is not available")]
    NoWindow,
}

impl From<JsValue> for RelayError {
    fn from(value: JsValue) -> Self {
        RelayError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// メールを送信
pub async fn send(request: &EmailRequest) -> Result<(), RelayError> {
    let body = serde_json::to_string(request)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let http_request = Request::new_with_str_and_init(EMAILJS_SEND_URL, &opts)?;
    http_request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or(RelayError::NoWindow)?;
    let resp_value = JsFuture::from(window.fetch_with_request(&http_request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        let body = match resp.text() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };
        return Err(RelayError::Status {
            status: resp.status(),
            body,
        });
    }

    log::info!("EmailJS accepted the message ({})", resp.status());
    Ok(())
}
