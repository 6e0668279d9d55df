use gitee_client::config::Config;
use gitee_client::utils::config::{get_env_or_default, get_env_or_none};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("GITEE_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("GITEE_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("GITEE_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("GITEE_MISSING_VAR");
        let result: String = get_env_or_default("GITEE_MISSING_VAR", "default".to_string());
        assert_eq!(result, "default");
    }
}

#[test]
fn test_get_env_or_default_trims_value() {
    unsafe {
        env::set_var("GITEE_TEST_VAR_PADDED", "  42 ");
        let result: u32 = get_env_or_default("GITEE_TEST_VAR_PADDED", 0);
        assert_eq!(result, 42);
        env::remove_var("GITEE_TEST_VAR_PADDED");
    }
}

#[test]
fn test_get_env_or_default_blank_is_missing() {
    unsafe {
        env::set_var("GITEE_TEST_VAR_BLANK", "   ");
        let result: String = get_env_or_default("GITEE_TEST_VAR_BLANK", "default".to_string());
        assert_eq!(result, "default");
        env::remove_var("GITEE_TEST_VAR_BLANK");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("GITEE_TEST_VAR_INVALID", "not_a_number");
        let result: u64 = get_env_or_default("GITEE_TEST_VAR_INVALID", 30);
        assert_eq!(result, 30);
        env::remove_var("GITEE_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("GITEE_TEST_VAR_OPTION", "desc");
        let result: Option<String> = get_env_or_none("GITEE_TEST_VAR_OPTION");
        assert_eq!(result.as_deref(), Some("desc"));
        env::remove_var("GITEE_TEST_VAR_OPTION");

        let result: Option<String> = get_env_or_none("GITEE_TEST_VAR_OPTION");
        assert_eq!(result, None);
    }
}

#[test]
fn test_config_with_token_uses_defaults() {
    let config = Config::with_token("abc", "http://127.0.0.1:1234/");
    assert_eq!(config.credentials.access_token, "abc");
    assert_eq!(config.rest_api.base_url, "http://127.0.0.1:1234");
    assert_eq!(config.rest_api.web_url, "https://gitee.com");
    assert_eq!(config.rest_api.timeout, 30);
    assert_eq!(config.list.per_page, 100);
    assert!(config.list.sort.is_none());
}
