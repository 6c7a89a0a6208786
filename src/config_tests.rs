#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.worksheet, "Transactions");
    assert_eq!(config.histogram_buckets, 30);
    assert!(config.sheet_id.is_empty());
    assert!(config.api_key.is_empty());
}

#[test]
fn test_partial_file_keeps_defaults_for_missing_fields() {
    let config: Config = serde_json::from_str(r#"{ "sheet_id": "abc123" }"#).unwrap();
    assert_eq!(config.sheet_id, "abc123");
    assert_eq!(config.worksheet, "Transactions");
    assert_eq!(config.histogram_buckets, 30);
}

#[test]
fn test_full_file() {
    let config: Config = serde_json::from_str(
        r#"{
            "sheet_id": "abc123",
            "worksheet": "History Transactions",
            "api_key": "key456",
            "histogram_buckets": 12
        }"#,
    )
    .unwrap();
    assert_eq!(config.worksheet, "History Transactions");
    assert_eq!(config.histogram_buckets, 12);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_requires_sheet_id() {
    let config = Config {
        api_key: "key".into(),
        ..Config::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("sheet id"));
}

#[test]
fn test_validate_requires_api_key() {
    let config = Config {
        sheet_id: "abc".into(),
        ..Config::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("API key"));
}

#[test]
fn test_env_overrides() {
    let mut config = Config {
        sheet_id: "from-file".into(),
        ..Config::default()
    };
    std::env::set_var("SPENDDASH_SHEET_ID", "from-env");
    config.apply_env();
    std::env::remove_var("SPENDDASH_SHEET_ID");
    assert_eq!(config.sheet_id, "from-env");
}
