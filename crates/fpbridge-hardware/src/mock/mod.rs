//! Mock implementations for testing and development.
//!
//! This module provides simulated services, callbacks and effect channels
//! that can be controlled programmatically without a vendor service or a
//! display driver.

pub mod client;
pub mod effect;
pub mod lookup;
pub mod vendor;

// Re-export commonly used types
pub use client::RecordingClient;
pub use effect::MockEffectChannel;
pub use lookup::MockServiceLookup;
pub use vendor::{MockVendor, MockVendorHandle, VendorCall, VendorCommand};
