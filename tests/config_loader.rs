use std::fs;

use kiosk::config::{ApiConfig, Config, ConfigError, UiConfig};
use tempfile::TempDir;

#[test]
fn default_values() {
    let config = Config::default();

    assert_eq!(config.api.base_url, "http://127.0.0.1:8081/api");
    assert_eq!(config.api.assets_url, "http://127.0.0.1:8081/content");
    assert_eq!(config.api.timeout_seconds, 10);
    assert_eq!(config.ui.tick_ms, 250);
}

#[test]
fn config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("kiosk/config.toml"));
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");

    let config = Config::load_from(&path).expect("missing file should not be an error");
    assert_eq!(config.api.base_url, Config::default().api.base_url);
}

#[test]
fn partial_file_keeps_defaults_for_omitted_fields() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[api]
base_url = "https://store.example/api"
"#,
    )
    .expect("Failed to write config");

    let config = Config::load_from(&path).expect("config should load");
    assert_eq!(config.api.base_url, "https://store.example/api");
    assert_eq!(config.api.assets_url, "http://127.0.0.1:8081/content");
    assert_eq!(config.ui.tick_ms, 250);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[api\nbase_url = ").expect("Failed to write config");

    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => {
            assert_eq!(reported, path);
        }
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn empty_base_url_fails_validation() {
    let config = Config {
        api: ApiConfig {
            base_url: String::new(),
            ..ApiConfig::default()
        },
        ui: UiConfig::default(),
    };

    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("base_url"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn zero_timeout_fails_validation() {
    let config = Config {
        api: ApiConfig {
            timeout_seconds: 0,
            ..ApiConfig::default()
        },
        ui: UiConfig::default(),
    };

    assert!(config.validate().is_err());
}
