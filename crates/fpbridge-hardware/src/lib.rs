//! Service and device abstraction layer for the fingerprint bridge.
//!
//! This crate defines the contracts on both sides of the bridge as traits,
//! together with the display effect channel and mock implementations of
//! everything, so the adapter can be exercised without a vendor service or a
//! display driver.
//!
//! # Design Philosophy
//!
//! - **Synchronous**: every call models a binder transaction and returns once
//!   the other side has answered. A vendor may call back into its registered
//!   callback before a command returns.
//! - **Object-safe**: services and callbacks are shared as `Arc<dyn Trait>`.
//! - **Thread-safe**: all traits require `Send + Sync`; callbacks may arrive
//!   on a different thread from the one issuing commands.
//! - **Status vs error**: a command the vendor refused is a status value; an
//!   `Err` means the transaction itself failed.
//!
//! # Contracts
//!
//! ```no_run
//! use std::sync::Arc;
//! use fpbridge_hardware::mock::MockVendor;
//! use fpbridge_hardware::traits::VendorFingerprint;
//!
//! # fn example(callback: Arc<dyn fpbridge_hardware::traits::VendorClientCallback>)
//! # -> fpbridge_hardware::Result<()> {
//! let (vendor, _handle) = MockVendor::new(1);
//! let device_id = vendor.set_notify(callback)?;
//! let status = vendor.enumerate()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All operations return [`Result<T>`][error::Result] using [`HardwareError`].

pub mod effect;
pub mod error;
pub mod events;
pub mod mock;
pub mod traits;
pub mod types;

// Re-export commonly used types for convenience
pub use effect::{LoggingEffectChannel, SysfsEffectChannel, SysfsPaths};
pub use error::{HardwareError, Result};
pub use events::{ClientEvent, VendorEvent};
pub use traits::{
    BiometricsFingerprint, ClientCallback, EffectChannel, ServiceLookup, VendorClientCallback,
    VendorFingerprint,
};
pub use types::{Effect, EffectState};
