use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("データフォルダが見つかりません: {0}")]
    DataDirNotFound(String),

    #[error("プロジェクトが見つかりません: {0}")]
    ProjectNotFound(String),

    #[error("コンテンツに{0}件の問題があります")]
    InvalidContent(usize),

    #[error("環境変数が設定されていません: {0}")]
    MissingEnv(&'static str),

    #[error(transparent)]
    Common(#[from] portfolio_common::Error),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
