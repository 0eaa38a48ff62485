//! 各サブコマンドの出力を組み立てる
//!
//! 表示文字列はここで作り、main.rs は出力するだけにする。

use crate::error::{PortfolioError, Result};
use portfolio_common::{
    format_description, segments_to_html, Category, Content, ContentIssue, EmailConfig, Error,
    ProjectRecord, Theme,
};
use std::path::Path;

/// ビルド時に読まれる環境変数（EmailConfigのフィールド順）
pub const EMAILJS_ENV_VARS: [&str; 3] = [
    "EMAILJS_SERVICE_ID",
    "EMAILJS_TEMPLATE_ID",
    "EMAILJS_PUBLIC_KEY",
];

/// データフォルダからコンテンツを読み込む
pub fn load_content(dir: &Path) -> Result<Content> {
    if !dir.is_dir() {
        return Err(PortfolioError::DataDirNotFound(dir.display().to_string()));
    }
    Ok(Content::load_dir(dir)?)
}

/// 検査結果の行
pub fn issue_lines(issues: &[ContentIssue]) -> Vec<String> {
    issues.iter().map(|issue| format!("  ✗ {}", issue)).collect()
}

/// 一覧表示用の1行
pub fn project_line(project: &ProjectRecord) -> String {
    let mut line = format!(
        "{} [{}] 画像{}枚",
        project.title,
        project.category,
        project.image_count()
    );
    if project.demo_link().is_some() {
        line.push_str(" demo");
    }
    if project.repo_link().is_some() {
        line.push_str(" repo");
    }
    line
}

/// カテゴリ指定があればその順、無ければ全件を元の順序で
pub fn list_projects(content: &Content, category: Option<Category>) -> Vec<String> {
    content
        .projects
        .iter()
        .filter(|p| category.map_or(true, |c| p.category == c))
        .map(project_line)
        .collect()
}

/// 説明文を詳細ビューと同じ規則で整形したHTML
pub fn preview_project(content: &Content, title: &str) -> Result<String> {
    let (_, project) = content
        .find_project(title)
        .ok_or_else(|| PortfolioError::ProjectNotFound(title.to_string()))?;
    Ok(segments_to_html(&format_description(&project.description)))
}

pub fn theme_summary(hour: u32) -> String {
    let theme = Theme::from_hour(hour);
    format!(
        "{}時 → {} (切替アイコン: {})",
        hour,
        theme.as_class(),
        theme.toggle_icon()
    )
}

/// 環境変数からEmailJS設定を組み立てる
pub fn email_config_from_env<F>(lookup: F) -> EmailConfig
where
    F: Fn(&str) -> Option<String>,
{
    let [service, template, public_key] = EMAILJS_ENV_VARS.map(|name| lookup(name).unwrap_or_default());
    EmailConfig::new(service, template, public_key)
}

/// 未設定の識別子を環境変数名で返す
pub fn check_email_config(config: &EmailConfig) -> Result<()> {
    match config.validate() {
        Ok(()) => Ok(()),
        Err(Error::MissingEmailConfig(field)) => Err(PortfolioError::MissingEnv(env_var_for(field))),
        Err(e) => Err(e.into()),
    }
}

fn env_var_for(field: &str) -> &'static str {
    match field {
        "service_id" => EMAILJS_ENV_VARS[0],
        "template_id" => EMAILJS_ENV_VARS[1],
        _ => EMAILJS_ENV_VARS[2],
    }
}
