//! エラーケーステスト

use portfolio_site::error::PortfolioError;

/// PortfolioErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        PortfolioError::DataDirNotFound("/path/to/data".to_string()),
        PortfolioError::ProjectNotFound("Shop".to_string()),
        PortfolioError::InvalidContent(3),
        PortfolioError::MissingEnv("EMAILJS_SERVICE_ID"),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "Error display should not be empty");
    }

    assert_eq!(
        PortfolioError::InvalidContent(3).to_string(),
        "コンテンツに3件の問題があります"
    );
}

/// 共通ライブラリのエラーはそのまま表示される
#[test]
fn test_common_error_is_transparent() {
    let inner = portfolio_common::Error::UnknownCategory("games".to_string());
    let expected = inner.to_string();
    let err: PortfolioError = inner.into();
    assert_eq!(err.to_string(), expected);
}

/// カテゴリの解析失敗
#[test]
fn test_unknown_category() {
    let err = "games".parse::<portfolio_common::Category>().unwrap_err();
    assert!(matches!(err, portfolio_common::Error::UnknownCategory(_)));
}
