// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Pulse configuration system.

use pulse_config::diagnostic::{suggest_key, ConfigError};
use pulse_config::model::ClassifierMode;
use pulse_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_pulse_config() {
    let toml = r#"
[service]
name = "pulse-test"
log_level = "debug"

[server]
host = "0.0.0.0"
port = 9090

[storage]
database_path = "/tmp/pulse-test.db"
wal_mode = false

[classifier]
mode = "provider"

[provider]
api_key = "sk-test-123"
model = "gpt-4.1-nano"
base_url = "https://provider.example/v1/chat/completions"

[topics]
labels = ["product quality", "delivery", "other"]
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.service.name, "pulse-test");
    assert_eq!(config.service.log_level, "debug");
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.storage.database_path, "/tmp/pulse-test.db");
    assert!(!config.storage.wal_mode);
    assert_eq!(config.classifier.mode, ClassifierMode::Provider);
    assert_eq!(config.provider.api_key.as_deref(), Some("sk-test-123"));
    assert_eq!(
        config.provider.base_url,
        "https://provider.example/v1/chat/completions"
    );
    assert_eq!(config.topics.labels.len(), 3);
}

/// Unknown field in a section produces an error mentioning the bad key.
#[test]
fn unknown_field_produces_error() {
    let toml = r#"
[classifier]
mdoe = "offline"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("mdoe"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// load_and_validate_str converts figment errors to ConfigError diagnostics.
#[test]
fn unknown_field_becomes_unknown_key_diagnostic() {
    let toml = r#"
[storage]
databse_path = "/tmp/x.db"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject typo");
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::UnknownKey { key, suggestion, .. }
            if key == "databse_path" && suggestion.as_deref() == Some("database_path")
    )));
}

/// Validation errors surface through load_and_validate_str.
#[test]
fn provider_mode_without_key_becomes_validation_diagnostic() {
    let toml = r#"
[classifier]
mode = "provider"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject missing api key");
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::Validation { message } if message.contains("provider.api_key")
    )));
}

/// Defaults pass the full load-and-validate path.
#[test]
fn defaults_load_and_validate() {
    let config = load_and_validate_str("").expect("defaults should validate");
    assert_eq!(config.classifier.mode, ClassifierMode::Offline);
    assert_eq!(
        config.topics.labels,
        vec![
            "product quality",
            "delivery",
            "pricing",
            "customer service",
            "other"
        ]
    );
}

/// Suggestion quality: close typos map to the intended key.
#[test]
fn suggestions_catch_section_key_typos() {
    assert_eq!(
        suggest_key("log_lvel", &["name", "log_level"]),
        Some("log_level".to_string())
    );
    assert_eq!(suggest_key("completely_wrong", &["name", "log_level"]), None);
}
