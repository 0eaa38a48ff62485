//! ポートフォリオサイトのコンテンツ検証ツール

pub mod cli;
pub mod error;
pub mod report;
