//! Shared vocabulary for the fingerprint bridge.
//!
//! Two generations of the fingerprint service contract meet in this
//! workspace: the standardized contract the platform speaks, and the older
//! vendor contract the sensor service implements. This crate holds the value
//! types of both so that the hardware and adapter crates agree on them.

pub mod constants;
pub mod error;
pub mod status;
pub mod types;
pub mod vendor;

pub use error::{Error, Result};
pub use status::{AcquiredInfo, FingerprintError, RequestStatus};
pub use types::*;
pub use vendor::{VendorAcquiredInfo, VendorError, VendorRequestStatus};

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
