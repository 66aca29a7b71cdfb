//! Error types for service and effect-channel operations.
//!
//! These errors describe failures below the contract vocabulary: an IPC
//! transaction that never reached the vendor, a service that went away, or a
//! display node that refused a write. Contract-level failures are statuses,
//! not errors, and never appear here.

use std::path::PathBuf;

/// Result type alias for hardware operations.
pub type Result<T> = std::result::Result<T, HardwareError>;

/// Errors that can occur while talking to the vendor service or the display.
#[derive(Debug, thiserror::Error)]
pub enum HardwareError {
    /// Service is not registered or has died.
    #[error("Service disconnected: {service}")]
    Disconnected { service: String },

    /// IPC transaction failed before a status could be returned.
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// Write to an effect node failed.
    #[error("Effect write to {} failed: {source}", path.display())]
    EffectWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic error with custom message.
    #[error("{0}")]
    Other(String),
}

impl HardwareError {
    /// Create a new disconnected error.
    pub fn disconnected(service: impl Into<String>) -> Self {
        Self::Disconnected {
            service: service.into(),
        }
    }

    /// Create a new transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new effect write error.
    pub fn effect_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::EffectWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a generic error with custom message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disconnected_error() {
        let error = HardwareError::disconnected("vendor.fingerprint/default");
        assert!(matches!(error, HardwareError::Disconnected { .. }));
        assert_eq!(
            error.to_string(),
            "Service disconnected: vendor.fingerprint/default"
        );
    }

    #[test]
    fn test_transport_error() {
        let error = HardwareError::transport("dead object");
        assert!(matches!(error, HardwareError::Transport { .. }));
        assert_eq!(error.to_string(), "Transport error: dead object");
    }

    #[test]
    fn test_effect_write_error() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = HardwareError::effect_write("/sys/kernel/node", source);
        assert!(matches!(error, HardwareError::EffectWrite { .. }));
        assert_eq!(
            error.to_string(),
            "Effect write to /sys/kernel/node failed: denied"
        );
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_error_display() {
        let errors = vec![
            HardwareError::disconnected("service"),
            HardwareError::transport("failed"),
            HardwareError::other("something"),
        ];

        for error in errors {
            let _ = format!("{}", error);
            let _ = format!("{:?}", error);
        }
    }
}
