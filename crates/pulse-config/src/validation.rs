// SPDX-FileCopyrightText: 2026 Pulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as valid bind addresses, non-empty paths, and a usable
//! topic vocabulary.

use crate::diagnostic::ConfigError;
use crate::model::{ClassifierMode, PulseConfig};

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &PulseConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let host = config.server.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.host must not be empty".to_string(),
        });
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("server.host `{host}` is not a valid IP address or hostname"),
            });
        }
    }

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    if config.topics.labels.is_empty() {
        errors.push(ConfigError::Validation {
            message: "topics.labels must contain at least one label".to_string(),
        });
    }
    for (i, label) in config.topics.labels.iter().enumerate() {
        if label.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("topics.labels[{i}] must not be empty"),
            });
        }
    }

    // Provider mode needs a credential at startup rather than a failed call
    // at first classification.
    if config.classifier.mode == ClassifierMode::Provider {
        let key_missing = config
            .provider
            .api_key
            .as_deref()
            .is_none_or(|k| k.trim().is_empty());
        if key_missing {
            errors.push(ConfigError::Validation {
                message: "classifier.mode is `provider` but provider.api_key is not set \
                          (set it in pulse.toml or via PULSE_PROVIDER_API_KEY)"
                    .to_string(),
            });
        }
        if config.provider.model.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: "provider.model must not be empty".to_string(),
            });
        }
        if config.provider.base_url.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: "provider.base_url must not be empty".to_string(),
            });
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = PulseConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn empty_database_path_fails_validation() {
        let mut config = PulseConfig::default();
        config.storage.database_path = "".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("database_path"))));
    }

    #[test]
    fn empty_topic_vocabulary_fails_validation() {
        let mut config = PulseConfig::default();
        config.topics.labels.clear();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("topics.labels"))));
    }

    #[test]
    fn blank_topic_label_fails_validation() {
        let mut config = PulseConfig::default();
        config.topics.labels.push("   ".to_string());
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("labels[5]"))));
    }

    #[test]
    fn provider_mode_without_api_key_fails_validation() {
        let mut config = PulseConfig::default();
        config.classifier.mode = ClassifierMode::Provider;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("api_key"))));
    }

    #[test]
    fn provider_mode_with_api_key_validates() {
        let mut config = PulseConfig::default();
        config.classifier.mode = ClassifierMode::Provider;
        config.provider.api_key = Some("sk-test".to_string());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn offline_mode_does_not_require_api_key() {
        let config = PulseConfig::default();
        assert!(config.provider.api_key.is_none());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn invalid_host_fails_validation() {
        let mut config = PulseConfig::default();
        config.server.host = "not a host!".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("server.host"))));
    }
}
