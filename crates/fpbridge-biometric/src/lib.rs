//! Fingerprint adapter exposing the standardized contract over a vendor
//! service.
//!
//! The adapter is split along the two directions of traffic:
//!
//! - [`forwarder::RequestForwarder`] takes platform commands, forwards them
//!   to the vendor and translates the returned status. It also compensates
//!   for vendors that never answer `enumerate` and never confirm `cancel`.
//! - [`bridge::CallbackBridge`] is registered with the vendor and re-emits
//!   its events to the platform, keeps the template registry current and
//!   drives the display effects on touch.
//!
//! [`connector::connect`] obtains the vendor service at startup.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use fpbridge_biometric::{CallbackBridge, RequestForwarder, StatusTranslator};
//! use fpbridge_hardware::events::VendorEvent;
//! use fpbridge_hardware::mock::{MockEffectChannel, MockVendor, RecordingClient};
//! use fpbridge_hardware::traits::BiometricsFingerprint;
//!
//! let (vendor, handle) = MockVendor::new(3);
//! let bridge = Arc::new(CallbackBridge::new(
//!     StatusTranslator::default(),
//!     Arc::new(MockEffectChannel::new()),
//! ));
//! let service = RequestForwarder::new(Arc::new(vendor), bridge);
//!
//! let client = Arc::new(RecordingClient::new());
//! service.set_notify(Some(client.clone()))?;
//! handle.emit(VendorEvent::SyncTemplates {
//!     device_id: 3,
//!     template_ids: vec![11, 12],
//!     remaining: 0,
//! });
//!
//! service.enumerate()?;
//! assert_eq!(client.enumerations(), vec![(3, 11, 0, 1), (3, 12, 0, 0)]);
//! # Ok::<(), fpbridge_hardware::HardwareError>(())
//! ```

pub mod bridge;
pub mod compensation;
pub mod connector;
pub mod forwarder;
pub mod registry;
pub mod translate;

pub use bridge::CallbackBridge;
pub use compensation::{EnumerateRecord, synthesize_enumeration};
pub use connector::{ConnectError, ConnectorConfig, connect};
pub use forwarder::RequestForwarder;
pub use registry::TemplateRegistry;
pub use translate::{StatusTranslator, UnknownCodePolicy};

pub use fpbridge_hardware::{HardwareError, Result};
