use anyhow::{Context, Result};
use chrono::Timelike;
use clap::Parser;
use portfolio_site::cli::{Cli, Commands};
use portfolio_site::error::PortfolioError;
use portfolio_site::report;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { data } => {
            println!("🔍 portfolio - コンテンツ検査\n");

            println!("[1/2] コンテンツを読み込み中...");
            let content = report::load_content(&data)
                .with_context(|| format!("{} の読み込みに失敗", data.display()))?;
            println!(
                "✔ プロジェクト{}件 / スキルグループ{}件 / アイコン{}件\n",
                content.projects.len(),
                content.skills.len(),
                content.icons.len()
            );

            println!("[2/2] 検査中...");
            let issues = content.validate();
            if !issues.is_empty() {
                for line in report::issue_lines(&issues) {
                    println!("{}", line);
                }
                return Err(PortfolioError::InvalidContent(issues.len()).into());
            }

            println!("\n✅ 問題はありません");
        }

        Commands::List { category, data } => {
            let content = report::load_content(&data)
                .with_context(|| format!("{} の読み込みに失敗", data.display()))?;
            let lines = report::list_projects(&content, category);

            if cli.verbose {
                match category {
                    Some(c) => println!("カテゴリ: {} ({}件)", c, lines.len()),
                    None => println!("全カテゴリ ({}件)", lines.len()),
                }
            }
            for line in lines {
                println!("- {}", line);
            }
        }

        Commands::Preview { title, data } => {
            let content = report::load_content(&data)
                .with_context(|| format!("{} の読み込みに失敗", data.display()))?;
            let html = report::preview_project(&content, &title)?;
            println!("{}", html);
        }

        Commands::Theme { hour } => {
            let hour = hour.unwrap_or_else(|| chrono::Local::now().hour());
            println!("{}", report::theme_summary(hour));
        }

        Commands::Env => {
            let config = report::email_config_from_env(|name| std::env::var(name).ok());
            if cli.verbose {
                for name in report::EMAILJS_ENV_VARS {
                    let state = if std::env::var(name).map_or(false, |v| !v.is_empty()) {
                        "設定済み"
                    } else {
                        "未設定"
                    };
                    println!("  {}: {}", name, state);
                }
            }
            report::check_email_config(&config)?;
            println!("✔ EmailJSの設定は揃っています");
        }
    }

    Ok(())
}
