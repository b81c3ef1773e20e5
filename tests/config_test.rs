use iftar_countdown::config::{Config, load_from_path, save_to_path};
use std::io::Write;
use tempfile::{NamedTempFile, tempdir};

#[test]
fn test_load_config_valid() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let config_content = r#"
        default_city = "Konya"

        [api]
        key = "abc123"
        base_url = "http://localhost:9999"
        max_retries = 0

        [countdown]
        tick_millis = 500
    "#;
    temp_file.write_all(config_content.as_bytes()).unwrap();

    let config = load_from_path(temp_file.path()).expect("Failed to load valid config");

    assert_eq!(config.default_city, "Konya");
    assert_eq!(config.api.key.as_deref(), Some("abc123"));
    assert_eq!(config.api.base_url, "http://localhost:9999");
    assert_eq!(config.api.max_retries, 0);
    assert_eq!(config.countdown.tick_millis, 500);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_config_uses_defaults() {
    let temp_file = NamedTempFile::new().unwrap();

    let config = load_from_path(temp_file.path()).expect("Empty config should load");

    assert_eq!(config.default_city, "Istanbul");
    assert_eq!(config.api.base_url, "https://api.collectapi.com");
    assert_eq!(config.api.max_retries, 2);
    assert_eq!(config.countdown.tick_millis, 1000);
    assert!(config.api.key.is_none());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(load_from_path(dir.path().join("nope.toml")).is_err());
}

#[test]
fn test_invalid_values_fail_validation() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"default_city = \"Narnia\"\n[countdown]\ntick_millis = 0\n")
        .unwrap();

    let config = load_from_path(temp_file.path()).unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn test_save_and_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.default_city = "Trabzon".to_string();
    save_to_path(&config, &path).unwrap();

    let reloaded = load_from_path(&path).unwrap();
    assert_eq!(reloaded.default_city, "Trabzon");
}
