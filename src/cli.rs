use clap::{Parser, Subcommand};
use portfolio_common::Category;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "ポートフォリオサイトのコンテンツ検証・プレビューツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// コンテンツJSONを読み込んで不備を検査
    Check {
        /// データフォルダ（icons.json / projects.json / skills.json）
        #[arg(short, long, default_value = "data")]
        data: PathBuf,
    },

    /// プロジェクト一覧を表示
    List {
        /// カテゴリで絞り込み (website/mobile/design)
        #[arg(short, long)]
        category: Option<Category>,

        /// データフォルダ
        #[arg(short, long, default_value = "data")]
        data: PathBuf,
    },

    /// プロジェクト説明文を整形してHTMLで表示
    Preview {
        /// プロジェクトのタイトル（大文字小文字は区別しない）
        #[arg(required = true)]
        title: String,

        /// データフォルダ
        #[arg(short, long, default_value = "data")]
        data: PathBuf,
    },

    /// 指定時刻の初期テーマを表示
    Theme {
        /// 時 (0-23)。省略時は現在時刻
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
        hour: Option<u32>,
    },

    /// EmailJSのビルド用環境変数を確認
    Env,
}
