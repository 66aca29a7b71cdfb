//! Startup connection to the vendor service.
//!
//! The vendor service may still be starting when the adapter comes up, so
//! the lookup is retried a bounded number of times with a fixed delay.

use fpbridge_core::constants::{
    DEFAULT_CONNECT_ATTEMPTS, DEFAULT_CONNECT_RETRY_DELAY_SECS, DEFAULT_VENDOR_INSTANCE,
};
use fpbridge_hardware::traits::{ServiceLookup, VendorFingerprint};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info, warn};

/// Connection retry settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectorConfig {
    /// Instance name the vendor service is registered under.
    pub instance: String,
    /// Total lookups before giving up.
    pub max_attempts: u32,
    /// Delay between failed lookups, in seconds.
    pub retry_delay_secs: u64,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            instance: DEFAULT_VENDOR_INSTANCE.to_string(),
            max_attempts: DEFAULT_CONNECT_ATTEMPTS,
            retry_delay_secs: DEFAULT_CONNECT_RETRY_DELAY_SECS,
        }
    }
}

impl ConnectorConfig {
    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }
}

#[derive(Error, Debug)]
pub enum ConnectError {
    #[error("vendor service '{instance}' unavailable after {attempts} attempts")]
    Exhausted { instance: String, attempts: u32 },
}

/// Look up the vendor service, retrying until it appears.
///
/// Sleeps between attempts but not after the last one. A lookup error from
/// the registry counts as a failed attempt.
///
/// # Errors
///
/// Returns [`ConnectError::Exhausted`] once every attempt failed.
pub async fn connect<L>(
    lookup: &L,
    config: &ConnectorConfig,
) -> Result<Arc<dyn VendorFingerprint>, ConnectError>
where
    L: ServiceLookup + ?Sized,
{
    let delay = config.retry_delay();

    for attempt in 1..=config.max_attempts {
        match lookup.get_service(&config.instance) {
            Ok(Some(service)) => {
                info!(instance = %config.instance, attempt, "Connected to vendor service");
                return Ok(service);
            }
            Ok(None) => {
                warn!(
                    instance = %config.instance,
                    attempt,
                    max_attempts = config.max_attempts,
                    "Vendor service not available yet"
                );
            }
            Err(e) => {
                warn!(
                    instance = %config.instance,
                    attempt,
                    error = %e,
                    "Service lookup failed"
                );
            }
        }

        if attempt < config.max_attempts {
            tokio::time::sleep(delay).await;
        }
    }

    error!(
        instance = %config.instance,
        attempts = config.max_attempts,
        "Giving up on vendor service"
    );
    Err(ConnectError::Exhausted {
        instance: config.instance.clone(),
        attempts: config.max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fpbridge_hardware::mock::{MockServiceLookup, MockVendor};
    use tokio::time::Instant;

    fn config(max_attempts: u32) -> ConnectorConfig {
        ConnectorConfig {
            max_attempts,
            ..ConnectorConfig::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = ConnectorConfig::default();
        assert_eq!(config.instance, "default");
        assert_eq!(config.max_attempts, 10);
        assert_eq!(config.retry_delay(), Duration::from_secs(10));
    }

    #[test]
    fn test_config_partial_json() {
        let config: ConnectorConfig = serde_json::from_str(r#"{"max_attempts": 3}"#).unwrap();
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.retry_delay_secs, 10);
    }

    #[tokio::test(start_paused = true)]
    async fn test_connect_first_attempt() {
        let (vendor, _handle) = MockVendor::new(1);
        let lookup = MockServiceLookup::new(Arc::new(vendor), 0);
        let start = Instant::now();

        assert!(connect(&lookup, &config(10)).await.is_ok());
        assert_eq!(lookup.attempts(), 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_connect_after_retries() {
        let (vendor, _handle) = MockVendor::new(1);
        let lookup = MockServiceLookup::new(Arc::new(vendor), 3);
        let start = Instant::now();

        assert!(connect(&lookup, &config(10)).await.is_ok());
        assert_eq!(lookup.attempts(), 4);
        assert_eq!(start.elapsed(), Duration::from_secs(30));
    }

    #[tokio::test(start_paused = true)]
    async fn test_connect_exhausted() {
        let lookup = MockServiceLookup::unavailable();
        let start = Instant::now();

        let err = connect(&lookup, &config(10)).await.err().unwrap();

        assert!(matches!(err, ConnectError::Exhausted { attempts: 10, .. }));
        assert_eq!(lookup.attempts(), 10);
        // No delay after the final attempt.
        assert_eq!(start.elapsed(), Duration::from_secs(90));
    }

    #[tokio::test(start_paused = true)]
    async fn test_registry_errors_are_retried() {
        let lookup = MockServiceLookup::registry_down();

        let err = connect(&lookup, &config(3)).await.err().unwrap();

        assert_eq!(
            err.to_string(),
            "vendor service 'default' unavailable after 3 attempts"
        );
        assert_eq!(lookup.attempts(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_attempts_fails_immediately() {
        let lookup = MockServiceLookup::unavailable();

        assert!(connect(&lookup, &config(0)).await.is_err());
        assert_eq!(lookup.attempts(), 0);
    }
}
