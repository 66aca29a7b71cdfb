//! Translation from vendor vocabulary to the standardized contract.
//!
//! Every vendor member maps to the standardized member of the same name.
//! Values the vendor contract never declared are resolved by an
//! [`UnknownCodePolicy`] instead of failing, so an unexpected code can never
//! break the channel back to the platform. Each such value is logged.

use fpbridge_core::{
    AcquiredInfo, FingerprintError, RequestStatus, VendorAcquiredInfo, VendorError,
    VendorRequestStatus,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// How unrecognized vendor error and acquisition codes are reported.
///
/// Unrecognized request statuses always become `SYS_UNKNOWN`, which is
/// already distinguishable from every real status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownCodePolicy {
    /// Report the benign member: `ERROR_NO_ERROR` and `ACQUIRED_GOOD`.
    #[default]
    Benign,

    /// Report the vendor-specific member: `ERROR_VENDOR` and
    /// `ACQUIRED_VENDOR`. The raw code still travels in `vendor_code`.
    Surface,
}

/// Maps vendor statuses, errors and acquisition results to the
/// standardized contract.
///
/// # Examples
///
/// ```
/// use fpbridge_biometric::translate::{StatusTranslator, UnknownCodePolicy};
/// use fpbridge_core::{FingerprintError, VendorError};
///
/// let translator = StatusTranslator::new(UnknownCodePolicy::Surface);
/// assert_eq!(translator.error(VendorError::Canceled), FingerprintError::Canceled);
/// assert_eq!(translator.error(VendorError::Unrecognized(77)), FingerprintError::Vendor);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusTranslator {
    policy: UnknownCodePolicy,
}

impl StatusTranslator {
    pub fn new(policy: UnknownCodePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> UnknownCodePolicy {
        self.policy
    }

    /// Translate the result of a vendor command.
    pub fn request_status(&self, status: VendorRequestStatus) -> RequestStatus {
        match status {
            VendorRequestStatus::SysUnknown => RequestStatus::SysUnknown,
            VendorRequestStatus::SysOk => RequestStatus::SysOk,
            VendorRequestStatus::SysEnoent => RequestStatus::SysEnoent,
            VendorRequestStatus::SysEintr => RequestStatus::SysEintr,
            VendorRequestStatus::SysEio => RequestStatus::SysEio,
            VendorRequestStatus::SysEagain => RequestStatus::SysEagain,
            VendorRequestStatus::SysEnomem => RequestStatus::SysEnomem,
            VendorRequestStatus::SysEacces => RequestStatus::SysEacces,
            VendorRequestStatus::SysEfault => RequestStatus::SysEfault,
            VendorRequestStatus::SysEbusy => RequestStatus::SysEbusy,
            VendorRequestStatus::SysEinval => RequestStatus::SysEinval,
            VendorRequestStatus::SysEnospc => RequestStatus::SysEnospc,
            VendorRequestStatus::SysEtimedout => RequestStatus::SysEtimedout,
            VendorRequestStatus::Unrecognized(code) => {
                warn!(code, "Unrecognized vendor request status");
                RequestStatus::SysUnknown
            }
        }
    }

    /// Translate an error reported through the vendor callback.
    pub fn error(&self, error: VendorError) -> FingerprintError {
        match error {
            VendorError::NoError => FingerprintError::NoError,
            VendorError::HwUnavailable => FingerprintError::HwUnavailable,
            VendorError::UnableToProcess => FingerprintError::UnableToProcess,
            VendorError::Timeout => FingerprintError::Timeout,
            VendorError::NoSpace => FingerprintError::NoSpace,
            VendorError::Canceled => FingerprintError::Canceled,
            VendorError::UnableToRemove => FingerprintError::UnableToRemove,
            VendorError::Lockout => FingerprintError::Lockout,
            VendorError::Vendor => FingerprintError::Vendor,
            VendorError::Unrecognized(code) => {
                let translated = match self.policy {
                    UnknownCodePolicy::Benign => FingerprintError::NoError,
                    UnknownCodePolicy::Surface => FingerprintError::Vendor,
                };
                warn!(code, %translated, "Unrecognized vendor error");
                translated
            }
        }
    }

    /// Translate the quality of an acquired image.
    pub fn acquired_info(&self, info: VendorAcquiredInfo) -> AcquiredInfo {
        match info {
            VendorAcquiredInfo::Good => AcquiredInfo::Good,
            VendorAcquiredInfo::Partial => AcquiredInfo::Partial,
            VendorAcquiredInfo::Insufficient => AcquiredInfo::Insufficient,
            VendorAcquiredInfo::ImagerDirty => AcquiredInfo::ImagerDirty,
            VendorAcquiredInfo::TooSlow => AcquiredInfo::TooSlow,
            VendorAcquiredInfo::TooFast => AcquiredInfo::TooFast,
            VendorAcquiredInfo::Vendor => AcquiredInfo::Vendor,
            VendorAcquiredInfo::Unrecognized(code) => {
                let translated = match self.policy {
                    UnknownCodePolicy::Benign => AcquiredInfo::Good,
                    UnknownCodePolicy::Surface => AcquiredInfo::Vendor,
                };
                warn!(code, %translated, "Unrecognized vendor acquisition info");
                translated
            }
        }
    }
}
