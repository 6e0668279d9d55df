use gitee_client::error::AppError;
use reqwest::StatusCode;

#[test]
fn test_app_error_display_api() {
    let error = AppError::Api {
        status: StatusCode::NOT_FOUND,
        message: r#"{"message":"Not Found Project"}"#.to_string(),
    };
    assert_eq!(
        error.to_string(),
        r#"api error (404 Not Found): {"message":"Not Found Project"}"#
    );
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("owner must not be empty".to_string());
    assert_eq!(error.to_string(), "invalid input: owner must not be empty");
}

#[test]
fn test_app_error_display_repo_not_empty() {
    let error = AppError::RepoNotEmpty("acme/demo".to_string());
    assert_eq!(
        error.to_string(),
        "repository acme/demo already exists and is not empty"
    );
}

#[test]
fn test_app_error_display_config() {
    let error = AppError::Config("bad timeout".to_string());
    assert_eq!(error.to_string(), "configuration error: bad timeout");
}

#[test]
fn test_app_error_from_json_error() {
    let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error: AppError = json_error.into();
    assert!(matches!(error, AppError::Json(_)));
    assert!(error.to_string().starts_with("json error:"));
}

#[test]
fn test_app_error_status() {
    let error = AppError::Api {
        status: StatusCode::NOT_FOUND,
        message: String::new(),
    };
    assert_eq!(error.status(), Some(StatusCode::NOT_FOUND));
    assert!(error.is_not_found());

    let error = AppError::Api {
        status: StatusCode::UNAUTHORIZED,
        message: String::new(),
    };
    assert!(!error.is_not_found());

    let error = AppError::InvalidInput("x".to_string());
    assert_eq!(error.status(), None);
    assert!(!error.is_not_found());
}
