//! Mock service registry.

use crate::error::{HardwareError, Result};
use crate::traits::{ServiceLookup, VendorFingerprint};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// [`ServiceLookup`] that only starts returning its service after a number
/// of failed lookups, modelling a vendor service that is still booting.
pub struct MockServiceLookup {
    service: Option<Arc<dyn VendorFingerprint>>,
    available_after: u32,
    registry_down: bool,
    attempts: AtomicU32,
}

impl MockServiceLookup {
    /// Lookup returning `service` from attempt `available_after + 1` on.
    pub fn new(service: Arc<dyn VendorFingerprint>, available_after: u32) -> Self {
        Self {
            service: Some(service),
            available_after,
            registry_down: false,
            attempts: AtomicU32::new(0),
        }
    }

    /// Lookup that never finds a service.
    pub fn unavailable() -> Self {
        Self {
            service: None,
            available_after: 0,
            registry_down: false,
            attempts: AtomicU32::new(0),
        }
    }

    /// Lookup whose registry cannot be reached at all.
    pub fn registry_down() -> Self {
        Self {
            registry_down: true,
            ..Self::unavailable()
        }
    }

    /// Number of lookups performed so far.
    pub fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl ServiceLookup for MockServiceLookup {
    fn get_service(&self, instance: &str) -> Result<Option<Arc<dyn VendorFingerprint>>> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        if self.registry_down {
            return Err(HardwareError::disconnected(format!(
                "service registry ({})",
                instance
            )));
        }
        if attempt <= self.available_after {
            return Ok(None);
        }
        Ok(self.service.clone())
    }
}

impl std::fmt::Debug for MockServiceLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockServiceLookup")
            .field("available_after", &self.available_after)
            .field("attempts", &self.attempts())
            .finish()
    }
}
