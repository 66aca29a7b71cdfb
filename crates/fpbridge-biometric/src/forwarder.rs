//! Standardized command contract on top of the vendor service.
//!
//! Most commands are forwarded unchanged with their status translated. Two
//! commands compensate for vendor gaps:
//!
//! - `enumerate`: if the vendor accepts the command but reports nothing
//!   before returning, the bridge replays the last template sync.
//! - `cancel`: a successful cancel is always followed by a `CANCELED` error
//!   to the platform, which some vendor builds never send.

use crate::bridge::CallbackBridge;
use fpbridge_core::{
    AuthToken, DeviceId, GroupId, RequestStatus, TemplateId, VendorError, VendorRequestStatus,
};
use fpbridge_hardware::Result;
use fpbridge_hardware::traits::{
    BiometricsFingerprint, ClientCallback, VendorClientCallback, VendorFingerprint,
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Standardized fingerprint service backed by a vendor service.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use fpbridge_biometric::bridge::CallbackBridge;
/// use fpbridge_biometric::forwarder::RequestForwarder;
/// use fpbridge_biometric::translate::StatusTranslator;
/// use fpbridge_core::RequestStatus;
/// use fpbridge_hardware::mock::{MockEffectChannel, MockVendor, RecordingClient};
/// use fpbridge_hardware::traits::BiometricsFingerprint;
///
/// let (vendor, _handle) = MockVendor::new(1);
/// let bridge = Arc::new(CallbackBridge::new(
///     StatusTranslator::default(),
///     Arc::new(MockEffectChannel::new()),
/// ));
/// let service = RequestForwarder::new(Arc::new(vendor), bridge);
///
/// let client = Arc::new(RecordingClient::new());
/// service.set_notify(Some(client.clone()))?;
///
/// // The mock vendor never answers enumerate; the bridge does.
/// assert_eq!(service.enumerate()?, RequestStatus::SysOk);
/// assert_eq!(client.enumerations(), vec![(0, 0, 0, 0)]);
/// # Ok::<(), fpbridge_hardware::HardwareError>(())
/// ```
pub struct RequestForwarder {
    vendor: Arc<dyn VendorFingerprint>,
    bridge: Arc<CallbackBridge>,
}

impl RequestForwarder {
    pub fn new(vendor: Arc<dyn VendorFingerprint>, bridge: Arc<CallbackBridge>) -> Self {
        Self { vendor, bridge }
    }

    pub fn bridge(&self) -> &Arc<CallbackBridge> {
        &self.bridge
    }

    fn vendor_callback(&self) -> Arc<dyn VendorClientCallback> {
        self.bridge.clone()
    }

    /// Translate a vendor command result, logging transport failures.
    fn translate(
        &self,
        command: &'static str,
        result: Result<VendorRequestStatus>,
    ) -> Result<RequestStatus> {
        match result {
            Ok(status) => {
                let status = self.bridge.translator().request_status(status);
                debug!(command, %status, "Vendor command returned");
                Ok(status)
            }
            Err(e) => {
                error!(command, error = %e, "Vendor command failed");
                Err(e)
            }
        }
    }
}

impl std::fmt::Debug for RequestForwarder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestForwarder")
            .field("bridge", &self.bridge)
            .finish_non_exhaustive()
    }
}

impl BiometricsFingerprint for RequestForwarder {
    fn set_notify(&self, callback: Option<Arc<dyn ClientCallback>>) -> Result<DeviceId> {
        // A failed registration keeps the previous client bound.
        let device_id = self.vendor.set_notify(self.vendor_callback())?;
        self.bridge.bind_client(callback);
        info!(device_id, "Client callback registered");
        Ok(device_id)
    }

    fn pre_enroll(&self) -> Result<u64> {
        debug!("preEnroll");
        self.vendor.pre_enroll()
    }

    fn enroll(
        &self,
        token: &AuthToken,
        group_id: GroupId,
        timeout_secs: u32,
    ) -> Result<RequestStatus> {
        debug!(group_id, timeout_secs, "enroll");
        self.translate("enroll", self.vendor.enroll(token, group_id, timeout_secs))
    }

    fn post_enroll(&self) -> Result<RequestStatus> {
        self.translate("postEnroll", self.vendor.post_enroll())
    }

    fn get_authenticator_id(&self) -> Result<u64> {
        debug!("getAuthenticatorId");
        self.vendor.get_authenticator_id()
    }

    fn cancel(&self) -> Result<RequestStatus> {
        self.bridge.begin_cancel();
        let status = self.translate("cancel", self.vendor.cancel())?;
        if !status.is_ok() {
            return Ok(status);
        }

        // Re-registering yields the device id currently in use.
        let device_id = match self.vendor.set_notify(self.vendor_callback()) {
            Ok(device_id) => device_id,
            Err(e) => {
                let fallback = self.bridge.device_id();
                warn!(error = %e, fallback, "Re-registration after cancel failed");
                fallback
            }
        };
        debug!(
            device_id,
            vendor_reported = self.bridge.cancel_received(),
            "Synthesizing cancel error"
        );
        self.bridge.on_error(device_id, VendorError::Canceled, 0);

        Ok(status)
    }

    fn enumerate(&self) -> Result<RequestStatus> {
        self.bridge.begin_enumerate();
        let status = self.translate("enumerate", self.vendor.enumerate())?;

        if status.is_ok() && !self.bridge.enumerate_received() {
            let count = self.bridge.synthesize_enumeration();
            debug!(count, "Vendor sent no enumeration, replayed template sync");
        }

        Ok(status)
    }

    fn remove(&self, group_id: GroupId, template_id: TemplateId) -> Result<RequestStatus> {
        debug!(group_id, template_id, "remove");
        self.translate("remove", self.vendor.remove(group_id, template_id))
    }

    fn set_active_group(&self, group_id: GroupId, store_path: &str) -> Result<RequestStatus> {
        debug!(group_id, store_path, "setActiveGroup");
        self.translate(
            "setActiveGroup",
            self.vendor.set_active_group(group_id, store_path),
        )
    }

    fn authenticate(&self, operation_id: u64, group_id: GroupId) -> Result<RequestStatus> {
        debug!(operation_id, group_id, "authenticate");
        self.translate(
            "authenticate",
            self.vendor.authenticate(operation_id, group_id),
        )
    }

    fn is_udfps(&self, _sensor_id: u32) -> bool {
        true
    }

    // Touch is driven by the vendor's own touch events, which arrive before
    // the platform's.
    fn on_finger_down(&self, _x: u32, _y: u32, _minor: f32, _major: f32) {}

    fn on_finger_up(&self) {}

    fn on_show_udfps_overlay(&self) {}

    fn on_hide_udfps_overlay(&self) {}
}
