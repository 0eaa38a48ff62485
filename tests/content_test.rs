//! データフォルダの読み込み・検査テスト
//!
//! tempdirに書いたJSONで check / list / preview の動作を検証

use portfolio_common::{Category, ContentIssue};
use portfolio_site::error::PortfolioError;
use portfolio_site::report;
use std::path::Path;
use tempfile::tempdir;

const REPO_DATA: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");

fn write_data(dir: &Path, projects: &str, skills: &str) {
    let icons = std::fs::read_to_string(Path::new(REPO_DATA).join("icons.json"))
        .expect("icons.json読み込み失敗");
    std::fs::write(dir.join("icons.json"), icons).unwrap();
    std::fs::write(dir.join("projects.json"), projects).unwrap();
    std::fs::write(dir.join("skills.json"), skills).unwrap();
}

/// リポジトリ同梱のデータは問題なし
#[test]
fn test_repo_data_is_valid() {
    let content = report::load_content(Path::new(REPO_DATA)).expect("読み込み失敗");
    assert!(content.validate().is_empty());
}

/// 存在しないフォルダ
#[test]
fn test_missing_data_dir() {
    let err = report::load_content(Path::new("/nonexistent/portfolio/data")).unwrap_err();
    assert!(matches!(err, PortfolioError::DataDirNotFound(_)));
}

/// JSONが壊れている場合は共通エラーになる
#[test]
fn test_broken_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_data(dir.path(), "[{", "[]");

    let err = report::load_content(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        PortfolioError::Common(portfolio_common::Error::Json(_))
    ));
}

/// ファイルが欠けている場合
#[test]
fn test_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("icons.json"), "{}").unwrap();

    let err = report::load_content(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        PortfolioError::Common(portfolio_common::Error::Io(_))
    ));
}

/// 不備の検出と表示
#[test]
fn test_check_reports_issues() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_data(
        dir.path(),
        r#"[{"title": "Lonely", "category": "design", "images": [], "iconkey": ["nope"]}]"#,
        r#"[{"html": "Markup"}]"#,
    );

    let content = report::load_content(dir.path()).unwrap();
    let issues = content.validate();
    assert_eq!(issues.len(), 2);
    assert!(issues.contains(&ContentIssue::NoImages {
        project: "Lonely".to_string()
    }));

    let lines = report::issue_lines(&issues);
    assert!(lines.iter().any(|l| l.contains("unknown icon \"nope\"")));
    assert!(lines.iter().all(|l| l.starts_with("  ✗ ")));
}

/// カテゴリ指定の一覧は元の順序を保つ
#[test]
fn test_list_by_category() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_data(
        dir.path(),
        r#"[
            {"title": "B", "category": "mobile", "images": ["/b.png"]},
            {"title": "Site", "category": "website", "images": ["/s.png"], "demolink": "https://s.test"},
            {"title": "A", "category": "mobile", "images": ["/a1.png", "/a2.png"], "gitrepo": "https://git.test/a"}
        ]"#,
        "[]",
    );

    let content = report::load_content(dir.path()).unwrap();

    let mobile = report::list_projects(&content, Some(Category::Mobile));
    assert_eq!(
        mobile,
        vec![
            "B [mobile] 画像1枚".to_string(),
            "A [mobile] 画像2枚 repo".to_string(),
        ]
    );

    let all = report::list_projects(&content, None);
    assert_eq!(all.len(), 3);
    assert_eq!(all[1], "Site [website] 画像1枚 demo");
}

/// 説明文のプレビュー
#[test]
fn test_preview_formats_description() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_data(
        dir.path(),
        r#"[{"title": "Shop", "category": "website", "images": ["/x.png"],
             "description": "Built with [Rust]\nSee {docs[https://docs.test]}"}]"#,
        "[]",
    );

    let content = report::load_content(dir.path()).unwrap();
    let html = report::preview_project(&content, "shop").unwrap();

    assert!(html.starts_with("Built with <strong>Rust</strong><br/>See "));
    assert!(html.contains("href=\"https://docs.test\""));
    assert!(html.contains(">docs</a>"));
}

#[test]
fn test_preview_unknown_project() {
    let content = report::load_content(Path::new(REPO_DATA)).unwrap();
    let err = report::preview_project(&content, "no such project").unwrap_err();
    assert!(matches!(err, PortfolioError::ProjectNotFound(_)));
    assert_eq!(err.to_string(), "プロジェクトが見つかりません: no such project");
}
