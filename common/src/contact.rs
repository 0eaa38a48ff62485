//! お問い合わせフォームの送信状態
//!
//! idle → sending → (success | failed)。送信中は次の送信を受け付けない。
//! 実際の送信はメール中継サービス（EmailJS）側で行い、ここでは
//! 送信リクエストの組み立てと結果の反映だけを扱う。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// EmailJS REST エンドポイント
pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

pub const BUTTON_IDLE: &str = "Send Message";
pub const BUTTON_SENDING: &str = "Sending...";

/// フォーム入力値
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.subject.is_empty()
            && self.message.is_empty()
    }
}

/// メール中継サービスの識別子
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailConfig {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
        }
    }

    /// 3つの識別子がすべて設定されているか（空白だけの値は設定済み扱い）
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("service_id", &self.service_id),
            ("template_id", &self.template_id),
            ("public_key", &self.public_key),
        ];
        for (name, value) in fields {
            if value.is_empty() {
                return Err(Error::MissingEmailConfig(name));
            }
        }
        Ok(())
    }
}

/// EmailJS 送信リクエスト
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: ContactForm,
}

/// 送信ステータス
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Failed,
    MissingConfig,
}

impl ContactStatus {
    /// 画面に出すメッセージ（無ければNone）
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ContactStatus::Idle | ContactStatus::Sending => None,
            ContactStatus::Success => Some("✅ Sent Successfully!"),
            ContactStatus::Failed => Some("❌ Failed to send message."),
            ContactStatus::MissingConfig => Some("❌ Email service not configured."),
        }
    }
}

/// フォーム全体の状態
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactState {
    pub form: ContactForm,
    pub status: ContactStatus,
}

impl ContactState {
    pub fn is_sending(&self) -> bool {
        self.status == ContactStatus::Sending
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_sending() {
            BUTTON_SENDING
        } else {
            BUTTON_IDLE
        }
    }

    /// 送信開始
    ///
    /// # Returns
    /// * `Ok(EmailRequest)` - 送信すべきリクエスト（状態はSendingになる）
    /// * `Err(SubmissionInFlight)` - 送信中のため無視（状態は変わらない）
    /// * `Err(MissingEmailConfig)` - 設定不足（状態はMissingConfig、リクエストは作らない）
    pub fn begin_submit(&mut self, config: &EmailConfig) -> Result<EmailRequest> {
        if self.is_sending() {
            return Err(Error::SubmissionInFlight);
        }
        if let Err(e) = config.validate() {
            self.status = ContactStatus::MissingConfig;
            return Err(e);
        }

        self.status = ContactStatus::Sending;
        Ok(EmailRequest {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.public_key.clone(),
            template_params: self.form.clone(),
        })
    }

    /// 送信結果を反映（成功時のみ入力をクリア）
    pub fn finish<E>(&mut self, result: std::result::Result<(), E>) {
        match result {
            Ok(()) => {
                self.form.clear();
                self.status = ContactStatus::Success;
            }
            Err(_) => {
                self.status = ContactStatus::Failed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Nice portfolio".to_string(),
        }
    }

    fn config() -> EmailConfig {
        EmailConfig::new("service_x", "template_y", "public_z")
    }

    /// 呼び出し回数を数えるだけの中継
    struct CountingRelay {
        calls: Cell<usize>,
        succeed: bool,
    }

    impl CountingRelay {
        fn new(succeed: bool) -> Self {
            Self { calls: Cell::new(0), succeed }
        }

        async fn send(&self, _request: &EmailRequest) -> std::result::Result<(), String> {
            self.calls.set(self.calls.get() + 1);
            if self.succeed {
                Ok(())
            } else {
                Err("relay rejected".to_string())
            }
        }
    }

    /// 画面側と同じ手順で送信
    fn submit(state: &mut ContactState, config: &EmailConfig, relay: &CountingRelay) {
        if let Ok(request) = state.begin_submit(config) {
            let result = block_on(relay.send(&request));
            state.finish(result);
        }
    }

    // =============================================
    // 設定チェック
    // =============================================

    #[test]
    fn test_missing_config_never_sends() {
        let cases = [
            EmailConfig::new("", "t", "p"),
            EmailConfig::new("s", "", "p"),
            EmailConfig::new("s", "t", ""),
        ];

        for config in cases {
            let relay = CountingRelay::new(true);
            let mut state = ContactState {
                form: filled_form(),
                ..Default::default()
            };
            submit(&mut state, &config, &relay);

            assert_eq!(relay.calls.get(), 0);
            assert_eq!(state.status, ContactStatus::MissingConfig);
            assert_eq!(state.status.message(), Some("❌ Email service not configured."));
            assert_eq!(state.form, filled_form());
            assert!(!state.is_sending());
        }
    }

    #[test]
    fn test_whitespace_config_counts_as_set() {
        let config = EmailConfig::new(" ", "t", "p");
        assert!(config.validate().is_ok());

        let mut state = ContactState {
            form: filled_form(),
            ..Default::default()
        };
        let request = state.begin_submit(&config).unwrap();
        assert_eq!(request.service_id, " ");
        assert_eq!(state.status, ContactStatus::Sending);
    }

    #[test]
    fn test_missing_config_names_field() {
        let err = EmailConfig::new("s", "", "p").validate().unwrap_err();
        assert!(matches!(err, Error::MissingEmailConfig("template_id")));
    }

    // =============================================
    // 送信フロー
    // =============================================

    #[test]
    fn test_success_clears_fields() {
        let relay = CountingRelay::new(true);
        let mut state = ContactState {
            form: filled_form(),
            ..Default::default()
        };
        submit(&mut state, &config(), &relay);

        assert_eq!(relay.calls.get(), 1);
        assert_eq!(state.status, ContactStatus::Success);
        assert!(state.form.is_empty());
        assert!(!state.is_sending());
        assert_eq!(state.button_label(), BUTTON_IDLE);
    }

    #[test]
    fn test_failure_keeps_fields() {
        let relay = CountingRelay::new(false);
        let mut state = ContactState {
            form: filled_form(),
            ..Default::default()
        };
        submit(&mut state, &config(), &relay);

        assert_eq!(relay.calls.get(), 1);
        assert_eq!(state.status, ContactStatus::Failed);
        assert_eq!(state.status.message(), Some("❌ Failed to send message."));
        assert_eq!(state.form, filled_form());
        assert!(!state.is_sending());
    }

    #[test]
    fn test_second_submit_rejected_while_sending() {
        let mut state = ContactState {
            form: filled_form(),
            ..Default::default()
        };
        state.begin_submit(&config()).unwrap();
        assert!(state.is_sending());
        assert_eq!(state.button_label(), BUTTON_SENDING);

        let err = state.begin_submit(&config()).unwrap_err();
        assert!(matches!(err, Error::SubmissionInFlight));
        assert_eq!(state.status, ContactStatus::Sending);

        state.finish::<()>(Ok(()));
        assert!(state.begin_submit(&config()).is_ok());
    }

    #[test]
    fn test_request_payload() {
        let mut state = ContactState {
            form: filled_form(),
            ..Default::default()
        };
        let request = state.begin_submit(&config()).unwrap();
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["service_id"], "service_x");
        assert_eq!(json["template_id"], "template_y");
        assert_eq!(json["user_id"], "public_z");
        assert_eq!(json["template_params"]["name"], "Ada");
        assert_eq!(json["template_params"]["email"], "ada@example.com");
        assert_eq!(json["template_params"]["subject"], "Hello");
        assert_eq!(json["template_params"]["message"], "Nice portfolio");
    }

    #[test]
    fn test_retry_after_failure() {
        let mut state = ContactState {
            form: filled_form(),
            ..Default::default()
        };
        submit(&mut state, &config(), &CountingRelay::new(false));
        submit(&mut state, &config(), &CountingRelay::new(true));
        assert_eq!(state.status, ContactStatus::Success);
        assert!(state.form.is_empty());
    }

    #[test]
    fn test_idle_and_sending_have_no_message() {
        assert_eq!(ContactStatus::Idle.message(), None);
        assert_eq!(ContactStatus::Sending.message(), None);
    }
}
