//! Contract trait definitions.
//!
//! This module defines the interfaces at every seam of the bridge:
//!
//! - [`BiometricsFingerprint`]: the standardized command contract the
//!   platform calls.
//! - [`ClientCallback`]: the standardized callback contract the platform
//!   registers to receive asynchronous results.
//! - [`VendorFingerprint`]: the vendor's command contract.
//! - [`VendorClientCallback`]: the vendor's extended callback contract.
//! - [`EffectChannel`]: the display side channels.
//! - [`ServiceLookup`]: how a handle to the vendor service is obtained.
//!
//! All calls are synchronous, mirroring the binder transactions they model.
//! A vendor may invoke its registered callback from inside a command call,
//! so implementations must not hold locks across calls into the other side.
//!
//! All traits are object-safe and require `Send + Sync`; services and
//! callbacks are shared as `Arc<dyn Trait>`.

use crate::error::Result;
use crate::types::{Effect, EffectState};
use fpbridge_core::{
    AcquiredInfo, AuthToken, DeviceId, FingerprintError, GroupId, RequestStatus, TemplateId,
    VendorAcquiredInfo, VendorError, VendorRequestStatus,
};
use std::sync::Arc;

/// Standardized callback contract, implemented by the platform.
///
/// Callbacks return nothing; a platform that fails to process an event has
/// no way to report it back.
pub trait ClientCallback: Send + Sync {
    /// Progress of an enrollment; `remaining` steps until completion.
    fn on_enroll_result(
        &self,
        device_id: DeviceId,
        template_id: TemplateId,
        group_id: GroupId,
        remaining: u32,
    );

    /// An image was captured with the given quality.
    fn on_acquired(&self, device_id: DeviceId, info: AcquiredInfo, vendor_code: i32);

    /// A finger was matched; `token` is the signed authentication token.
    fn on_authenticated(
        &self,
        device_id: DeviceId,
        template_id: TemplateId,
        group_id: GroupId,
        token: &[u8],
    );

    /// An operation ended in error.
    fn on_error(&self, device_id: DeviceId, error: FingerprintError, vendor_code: i32);

    /// A template was removed.
    fn on_removed(
        &self,
        device_id: DeviceId,
        template_id: TemplateId,
        group_id: GroupId,
        remaining: u32,
    );

    /// One entry of an enumeration; the final entry reports `remaining == 0`.
    fn on_enumerate(
        &self,
        device_id: DeviceId,
        template_id: TemplateId,
        group_id: GroupId,
        remaining: u32,
    );
}

/// Standardized command contract, called by the platform.
///
/// Commands return `Err` only when the request could not be carried out at
/// the transport level. A vendor that refused a request reports it through
/// the returned [`RequestStatus`].
pub trait BiometricsFingerprint: Send + Sync {
    /// Register the callback that receives asynchronous results.
    ///
    /// A new registration replaces the previous one. Returns the device id.
    fn set_notify(&self, callback: Option<Arc<dyn ClientCallback>>) -> Result<DeviceId>;

    /// Generate a challenge for the next enrollment.
    fn pre_enroll(&self) -> Result<u64>;

    /// Start enrolling a finger into `group_id`.
    fn enroll(
        &self,
        token: &AuthToken,
        group_id: GroupId,
        timeout_secs: u32,
    ) -> Result<RequestStatus>;

    /// Finish enrollment and invalidate the challenge.
    fn post_enroll(&self) -> Result<RequestStatus>;

    /// Identifier of the current set of enrolled templates.
    fn get_authenticator_id(&self) -> Result<u64>;

    /// Abort the operation in progress.
    fn cancel(&self) -> Result<RequestStatus>;

    /// List enrolled templates through [`ClientCallback::on_enumerate`].
    fn enumerate(&self) -> Result<RequestStatus>;

    /// Remove a template.
    fn remove(&self, group_id: GroupId, template_id: TemplateId) -> Result<RequestStatus>;

    /// Select the active group and its template storage directory.
    fn set_active_group(&self, group_id: GroupId, store_path: &str) -> Result<RequestStatus>;

    /// Start authenticating against `group_id`.
    fn authenticate(&self, operation_id: u64, group_id: GroupId) -> Result<RequestStatus>;

    /// Whether the sensor sits under the display.
    fn is_udfps(&self, sensor_id: u32) -> bool;

    /// The platform saw a finger on the sensor area.
    fn on_finger_down(&self, x: u32, y: u32, minor: f32, major: f32);

    /// The platform saw the finger leave the sensor area.
    fn on_finger_up(&self);

    /// The sensor overlay became visible.
    fn on_show_udfps_overlay(&self);

    /// The sensor overlay was hidden.
    fn on_hide_udfps_overlay(&self);
}

/// Vendor callback contract, implemented by the bridge.
///
/// Carries the same events as [`ClientCallback`] in vendor vocabulary, plus
/// touch, template synchronization and diagnostic events that have no
/// standardized counterpart.
pub trait VendorClientCallback: Send + Sync {
    fn on_enroll_result(
        &self,
        device_id: DeviceId,
        template_id: TemplateId,
        group_id: GroupId,
        remaining: u32,
    );

    fn on_acquired(&self, device_id: DeviceId, info: VendorAcquiredInfo, vendor_code: i32);

    fn on_authenticated(
        &self,
        device_id: DeviceId,
        template_id: TemplateId,
        group_id: GroupId,
        token: &[u8],
    );

    fn on_error(&self, device_id: DeviceId, error: VendorError, vendor_code: i32);

    fn on_removed(
        &self,
        device_id: DeviceId,
        template_id: TemplateId,
        group_id: GroupId,
        remaining: u32,
    );

    fn on_enumerate(
        &self,
        device_id: DeviceId,
        template_id: TemplateId,
        group_id: GroupId,
        remaining: u32,
    );

    /// A finger touched the sensor.
    fn on_touch_down(&self, device_id: DeviceId);

    /// The finger left the sensor.
    fn on_touch_up(&self, device_id: DeviceId);

    /// The vendor's full list of enrolled templates.
    fn on_sync_templates(&self, device_id: DeviceId, template_ids: &[TemplateId], remaining: u32);

    fn on_fingerprint_cmd(&self, cmd_id: i32, result: &[u32], length: u32);

    fn on_image_info_acquired(&self, kind: u32, quality: u32, match_score: u32);

    fn on_monitor_event_triggered(&self, kind: u32, data: &str);

    fn on_engineering_info_updated(&self, length: u32, keys: &[u32], values: &[String]);

    fn on_ui_ready(&self, device_id: i64);
}

/// Vendor command contract.
pub trait VendorFingerprint: Send + Sync {
    /// Register the vendor callback. Returns the device id.
    fn set_notify(&self, callback: Arc<dyn VendorClientCallback>) -> Result<DeviceId>;

    fn pre_enroll(&self) -> Result<u64>;

    fn enroll(
        &self,
        token: &AuthToken,
        group_id: GroupId,
        timeout_secs: u32,
    ) -> Result<VendorRequestStatus>;

    fn post_enroll(&self) -> Result<VendorRequestStatus>;

    fn get_authenticator_id(&self) -> Result<u64>;

    fn cancel(&self) -> Result<VendorRequestStatus>;

    fn enumerate(&self) -> Result<VendorRequestStatus>;

    fn remove(&self, group_id: GroupId, template_id: TemplateId) -> Result<VendorRequestStatus>;

    fn set_active_group(&self, group_id: GroupId, store_path: &str)
    -> Result<VendorRequestStatus>;

    fn authenticate(&self, operation_id: u64, group_id: GroupId) -> Result<VendorRequestStatus>;
}

/// Display side channels coordinating illumination with finger contact.
///
/// Writes are fire-and-forget from the caller's point of view: there is no
/// read-back, and a failed write is reported but never retried.
pub trait EffectChannel: Send + Sync {
    /// Switch `effect` to `state`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying node rejected the write.
    fn set(&self, effect: Effect, state: EffectState) -> Result<()>;
}

/// Lookup of a registered vendor service instance.
pub trait ServiceLookup: Send + Sync {
    /// Return the service registered under `instance`, or `None` if it is
    /// not (yet) available.
    ///
    /// # Errors
    ///
    /// Returns an error if the service registry itself could not be reached.
    fn get_service(&self, instance: &str) -> Result<Option<Arc<dyn VendorFingerprint>>>;
}
