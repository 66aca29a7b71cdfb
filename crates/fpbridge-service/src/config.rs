//! Service configuration.
//!
//! Read from an optional JSON file. Every field has a default, so a partial
//! file (or no file at all) is valid.
//!
//! ```json
//! {
//!   "effects": { "illumination": "/sys/kernel/oppo_display/dimlayer_bl_en" },
//!   "effect_backend": "sysfs",
//!   "connector": { "max_attempts": 10, "retry_delay_secs": 10 },
//!   "unknown_code_policy": "benign",
//!   "log_level": "info"
//! }
//! ```

use anyhow::{Context, Result};
use fpbridge_biometric::{ConnectorConfig, UnknownCodePolicy};
use fpbridge_hardware::SysfsPaths;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Where effect writes go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectBackend {
    /// Display driver nodes at `effects`.
    #[default]
    Sysfs,
    /// Log only; for hosts without the display driver.
    Log,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub effects: SysfsPaths,
    pub effect_backend: EffectBackend,
    pub connector: ConnectorConfig,
    pub unknown_code_policy: UnknownCodePolicy,
    /// Filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            effects: SysfsPaths::default(),
            effect_backend: EffectBackend::default(),
            connector: ConnectorConfig::default(),
            unknown_code_policy: UnknownCodePolicy::default(),
            log_level: "info".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Load from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing config {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn test_defaults_without_file() {
        let config = ServiceConfig::load(None).unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.connector.max_attempts, 10);
        assert_eq!(config.unknown_code_policy, UnknownCodePolicy::Benign);
        assert_eq!(config.effect_backend, EffectBackend::Sysfs);
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "effects": {{ "illumination": "/tmp/illum" }},
                "effect_backend": "log",
                "connector": {{ "retry_delay_secs": 1 }},
                "unknown_code_policy": "surface"
            }}"#
        )
        .unwrap();

        let config = ServiceConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.effects.illumination, PathBuf::from("/tmp/illum"));
        assert_eq!(
            config.effects.contact_notify,
            SysfsPaths::default().contact_notify
        );
        assert_eq!(config.effect_backend, EffectBackend::Log);
        assert_eq!(config.connector.retry_delay_secs, 1);
        assert_eq!(config.connector.max_attempts, 10);
        assert_eq!(config.unknown_code_policy, UnknownCodePolicy::Surface);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ServiceConfig::load(Some(&dir.path().join("absent.json"))).unwrap_err();
        assert!(err.to_string().starts_with("reading config"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = ServiceConfig::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().starts_with("parsing config"));
    }
}
