//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Project index {index} out of range ({len} projects)")]
    ProjectOutOfRange { index: usize, len: usize },

    #[error("Image index {index} out of range ({len} images)")]
    ImageOutOfRange { index: usize, len: usize },

    #[error("No project is open")]
    NoProjectOpen,

    #[error("Email service not configured: {0} is empty")]
    MissingEmailConfig(&'static str),

    #[error("A message is already being sent")]
    SubmissionInFlight,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
