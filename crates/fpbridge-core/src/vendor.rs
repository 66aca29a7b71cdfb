//! Vendor contract vocabulary.
//!
//! The vendor service speaks an older revision of the fingerprint contract.
//! Its enumerations carry the same members as the standardized ones, but
//! values arrive as raw integers and the vendor is free to send codes the
//! contract never declared. Every vendor enum therefore has an
//! `Unrecognized` member holding the raw value, and parsing never fails.

use serde::{Deserialize, Serialize};

/// Synchronous result of a command on the vendor contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VendorRequestStatus {
    SysUnknown,
    SysOk,
    SysEnoent,
    SysEintr,
    SysEio,
    SysEagain,
    SysEnomem,
    SysEacces,
    SysEfault,
    SysEbusy,
    SysEinval,
    SysEnospc,
    SysEtimedout,
    /// A value outside the vendor contract.
    Unrecognized(i32),
}

impl VendorRequestStatus {
    /// Interpret a raw vendor status.
    #[must_use]
    pub fn from_raw(code: i32) -> Self {
        match code {
            1 => Self::SysUnknown,
            0 => Self::SysOk,
            -2 => Self::SysEnoent,
            -4 => Self::SysEintr,
            -5 => Self::SysEio,
            -11 => Self::SysEagain,
            -12 => Self::SysEnomem,
            -13 => Self::SysEacces,
            -14 => Self::SysEfault,
            -16 => Self::SysEbusy,
            -22 => Self::SysEinval,
            -28 => Self::SysEnospc,
            -110 => Self::SysEtimedout,
            other => Self::Unrecognized(other),
        }
    }

    /// Raw vendor value.
    #[must_use]
    pub fn as_raw(self) -> i32 {
        match self {
            Self::SysUnknown => 1,
            Self::SysOk => 0,
            Self::SysEnoent => -2,
            Self::SysEintr => -4,
            Self::SysEio => -5,
            Self::SysEagain => -11,
            Self::SysEnomem => -12,
            Self::SysEacces => -13,
            Self::SysEfault => -14,
            Self::SysEbusy => -16,
            Self::SysEinval => -22,
            Self::SysEnospc => -28,
            Self::SysEtimedout => -110,
            Self::Unrecognized(code) => code,
        }
    }
}

/// Error reported by the vendor through its client callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VendorError {
    NoError,
    HwUnavailable,
    UnableToProcess,
    Timeout,
    NoSpace,
    Canceled,
    UnableToRemove,
    Lockout,
    Vendor,
    /// A value outside the vendor contract.
    Unrecognized(i32),
}

impl VendorError {
    /// Interpret a raw vendor error.
    #[must_use]
    pub fn from_raw(code: i32) -> Self {
        match code {
            0 => Self::NoError,
            1 => Self::HwUnavailable,
            2 => Self::UnableToProcess,
            3 => Self::Timeout,
            4 => Self::NoSpace,
            5 => Self::Canceled,
            6 => Self::UnableToRemove,
            7 => Self::Lockout,
            8 => Self::Vendor,
            other => Self::Unrecognized(other),
        }
    }

    /// Raw vendor value.
    #[must_use]
    pub fn as_raw(self) -> i32 {
        match self {
            Self::NoError => 0,
            Self::HwUnavailable => 1,
            Self::UnableToProcess => 2,
            Self::Timeout => 3,
            Self::NoSpace => 4,
            Self::Canceled => 5,
            Self::UnableToRemove => 6,
            Self::Lockout => 7,
            Self::Vendor => 8,
            Self::Unrecognized(code) => code,
        }
    }
}

/// Quality of an image acquired by the vendor sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VendorAcquiredInfo {
    Good,
    Partial,
    Insufficient,
    ImagerDirty,
    TooSlow,
    TooFast,
    Vendor,
    /// A value outside the vendor contract.
    Unrecognized(i32),
}

impl VendorAcquiredInfo {
    /// Interpret a raw vendor acquisition result.
    #[must_use]
    pub fn from_raw(code: i32) -> Self {
        match code {
            0 => Self::Good,
            1 => Self::Partial,
            2 => Self::Insufficient,
            3 => Self::ImagerDirty,
            4 => Self::TooSlow,
            5 => Self::TooFast,
            6 => Self::Vendor,
            other => Self::Unrecognized(other),
        }
    }

    /// Raw vendor value.
    #[must_use]
    pub fn as_raw(self) -> i32 {
        match self {
            Self::Good => 0,
            Self::Partial => 1,
            Self::Insufficient => 2,
            Self::ImagerDirty => 3,
            Self::TooSlow => 4,
            Self::TooFast => 5,
            Self::Vendor => 6,
            Self::Unrecognized(code) => code,
        }
    }
}
