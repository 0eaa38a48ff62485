//! ビルド時設定
//!
//! EmailJSの識別子はビルド時の環境変数から埋め込む。未設定なら空文字になり、
//! 送信時に「未設定」として扱われる。

use portfolio_common::EmailConfig;

pub fn email_config() -> EmailConfig {
    EmailConfig::new(
        option_env!("EMAILJS_SERVICE_ID").unwrap_or_default(),
        option_env!("EMAILJS_TEMPLATE_ID").unwrap_or_default(),
        option_env!("EMAILJS_PUBLIC_KEY").unwrap_or_default(),
    )
}
