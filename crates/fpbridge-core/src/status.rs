//! Standardized contract vocabulary.
//!
//! These are the status, error and acquisition-quality enumerations the
//! platform understands. Discriminants match the wire values of the
//! standardized contract.

use crate::{Result, error::Error};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Synchronous result of a command on the standardized contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum RequestStatus {
    SysUnknown = 1,
    SysOk = 0,
    SysEnoent = -2,
    SysEintr = -4,
    SysEio = -5,
    SysEagain = -11,
    SysEnomem = -12,
    SysEacces = -13,
    SysEfault = -14,
    SysEbusy = -16,
    SysEinval = -22,
    SysEnospc = -28,
    SysEtimedout = -110,
}

impl RequestStatus {
    /// All members, in contract declaration order.
    pub const ALL: [RequestStatus; 13] = [
        Self::SysUnknown,
        Self::SysOk,
        Self::SysEnoent,
        Self::SysEintr,
        Self::SysEio,
        Self::SysEagain,
        Self::SysEnomem,
        Self::SysEacces,
        Self::SysEfault,
        Self::SysEbusy,
        Self::SysEinval,
        Self::SysEnospc,
        Self::SysEtimedout,
    ];

    /// Returns `true` for `SysOk`.
    #[inline]
    #[must_use]
    pub fn is_ok(self) -> bool {
        matches!(self, Self::SysOk)
    }

    /// Wire value of this status.
    #[inline]
    #[must_use]
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    /// Parse a wire value.
    ///
    /// # Errors
    /// Returns `Error::UnknownCode` for values outside the contract.
    pub fn from_raw(code: i32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_raw() == code)
            .ok_or(Error::UnknownCode {
                vocabulary: "request status",
                code,
            })
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::SysUnknown => "SYS_UNKNOWN",
            Self::SysOk => "SYS_OK",
            Self::SysEnoent => "SYS_ENOENT",
            Self::SysEintr => "SYS_EINTR",
            Self::SysEio => "SYS_EIO",
            Self::SysEagain => "SYS_EAGAIN",
            Self::SysEnomem => "SYS_ENOMEM",
            Self::SysEacces => "SYS_EACCES",
            Self::SysEfault => "SYS_EFAULT",
            Self::SysEbusy => "SYS_EBUSY",
            Self::SysEinval => "SYS_EINVAL",
            Self::SysEnospc => "SYS_ENOSPC",
            Self::SysEtimedout => "SYS_ETIMEDOUT",
        };
        f.write_str(name)
    }
}

/// Error reported asynchronously through the client callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum FingerprintError {
    NoError = 0,
    HwUnavailable = 1,
    UnableToProcess = 2,
    Timeout = 3,
    NoSpace = 4,
    Canceled = 5,
    UnableToRemove = 6,
    Lockout = 7,
    Vendor = 8,
}

impl FingerprintError {
    /// All members, in contract declaration order.
    pub const ALL: [FingerprintError; 9] = [
        Self::NoError,
        Self::HwUnavailable,
        Self::UnableToProcess,
        Self::Timeout,
        Self::NoSpace,
        Self::Canceled,
        Self::UnableToRemove,
        Self::Lockout,
        Self::Vendor,
    ];

    /// Wire value of this error.
    #[inline]
    #[must_use]
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    /// Parse a wire value.
    ///
    /// # Errors
    /// Returns `Error::UnknownCode` for values outside the contract.
    pub fn from_raw(code: i32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|error| error.as_raw() == code)
            .ok_or(Error::UnknownCode {
                vocabulary: "fingerprint error",
                code,
            })
    }
}

impl fmt::Display for FingerprintError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::NoError => "ERROR_NO_ERROR",
            Self::HwUnavailable => "ERROR_HW_UNAVAILABLE",
            Self::UnableToProcess => "ERROR_UNABLE_TO_PROCESS",
            Self::Timeout => "ERROR_TIMEOUT",
            Self::NoSpace => "ERROR_NO_SPACE",
            Self::Canceled => "ERROR_CANCELED",
            Self::UnableToRemove => "ERROR_UNABLE_TO_REMOVE",
            Self::Lockout => "ERROR_LOCKOUT",
            Self::Vendor => "ERROR_VENDOR",
        };
        f.write_str(name)
    }
}

/// Quality of an image acquired by the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum AcquiredInfo {
    Good = 0,
    Partial = 1,
    Insufficient = 2,
    ImagerDirty = 3,
    TooSlow = 4,
    TooFast = 5,
    Vendor = 6,
}

impl AcquiredInfo {
    /// All members, in contract declaration order.
    pub const ALL: [AcquiredInfo; 7] = [
        Self::Good,
        Self::Partial,
        Self::Insufficient,
        Self::ImagerDirty,
        Self::TooSlow,
        Self::TooFast,
        Self::Vendor,
    ];

    /// Wire value of this acquisition result.
    #[inline]
    #[must_use]
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    /// Parse a wire value.
    ///
    /// # Errors
    /// Returns `Error::UnknownCode` for values outside the contract.
    pub fn from_raw(code: i32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|info| info.as_raw() == code)
            .ok_or(Error::UnknownCode {
                vocabulary: "acquired info",
                code,
            })
    }
}

impl fmt::Display for AcquiredInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Good => "ACQUIRED_GOOD",
            Self::Partial => "ACQUIRED_PARTIAL",
            Self::Insufficient => "ACQUIRED_INSUFFICIENT",
            Self::ImagerDirty => "ACQUIRED_IMAGER_DIRTY",
            Self::TooSlow => "ACQUIRED_TOO_SLOW",
            Self::TooFast => "ACQUIRED_TOO_FAST",
            Self::Vendor => "ACQUIRED_VENDOR",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, RequestStatus::SysOk)]
    #[case(1, RequestStatus::SysUnknown)]
    #[case(-16, RequestStatus::SysEbusy)]
    #[case(-110, RequestStatus::SysEtimedout)]
    fn test_request_status_from_raw(#[case] code: i32, #[case] expected: RequestStatus) {
        assert_eq!(RequestStatus::from_raw(code).unwrap(), expected);
        assert_eq!(expected.as_raw(), code);
    }

    #[rstest]
    #[case(2)]
    #[case(-1)]
    #[case(i32::MIN)]
    fn test_request_status_from_raw_unknown(#[case] code: i32) {
        assert!(matches!(
            RequestStatus::from_raw(code),
            Err(Error::UnknownCode { code: c, .. }) if c == code
        ));
    }

    #[test]
    fn test_request_status_is_ok() {
        assert!(RequestStatus::SysOk.is_ok());
        assert!(!RequestStatus::SysUnknown.is_ok());
        assert!(!RequestStatus::SysEbusy.is_ok());
    }

    #[test]
    fn test_fingerprint_error_raw_values_are_sequential() {
        for (index, error) in FingerprintError::ALL.iter().enumerate() {
            assert_eq!(error.as_raw(), index as i32);
        }
        assert!(FingerprintError::from_raw(9).is_err());
    }

    #[test]
    fn test_acquired_info_raw_values_are_sequential() {
        for (index, info) in AcquiredInfo::ALL.iter().enumerate() {
            assert_eq!(info.as_raw(), index as i32);
        }
        assert!(AcquiredInfo::from_raw(7).is_err());
    }

    #[test]
    fn test_display_uses_contract_names() {
        assert_eq!(RequestStatus::SysEnospc.to_string(), "SYS_ENOSPC");
        assert_eq!(FingerprintError::Canceled.to_string(), "ERROR_CANCELED");
        assert_eq!(AcquiredInfo::ImagerDirty.to_string(), "ACQUIRED_IMAGER_DIRTY");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&FingerprintError::UnableToRemove).unwrap();
        assert_eq!(json, "\"UNABLE_TO_REMOVE\"");
        let status: RequestStatus = serde_json::from_str("\"SYS_EINVAL\"").unwrap();
        assert_eq!(status, RequestStatus::SysEinval);
    }
}
