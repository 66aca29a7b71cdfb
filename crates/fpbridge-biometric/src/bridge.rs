//! Vendor callback bridge.
//!
//! The [`CallbackBridge`] is the callback the adapter registers with the
//! vendor service. It re-emits vendor events on the standardized client
//! callback, keeps the template state needed to answer `enumerate` when the
//! vendor does not, and drives the display effects from touch events.
//!
//! # Event handling
//!
//! | Vendor event         | Forwarded as                 | Side effect |
//! |----------------------|------------------------------|-------------|
//! | enroll result        | `on_enroll_result`           | - |
//! | acquired             | `on_acquired` (translated)   | - |
//! | authenticated        | `on_authenticated`           | contact-notify OFF, illumination OFF |
//! | error                | `on_error` (translated)      | cancel flag when `CANCELED` |
//! | removed              | `on_removed`                 | - |
//! | enumerate            | `on_enumerate`               | enumerate flag |
//! | template sync        | not forwarded                | registry replaced |
//! | touch down           | not forwarded                | illumination ON, contact-notify ON |
//! | touch up             | not forwarded                | contact-notify OFF, illumination OFF |
//! | diagnostics          | dropped                      | - |
//!
//! Events arriving before a client is bound are dropped.
//!
//! # Locking
//!
//! The vendor may deliver events from inside a command call, on the thread
//! that issued the command. No lock in this module is held while calling the
//! client or the effect channel, and the command path never holds one while
//! calling the vendor.

use crate::compensation::{EnumerateRecord, synthesize_enumeration};
use crate::registry::TemplateRegistry;
use crate::translate::StatusTranslator;
use fpbridge_core::{
    DeviceId, FingerprintError, GroupId, TemplateId, VendorAcquiredInfo, VendorError,
};
use fpbridge_hardware::traits::{ClientCallback, EffectChannel, VendorClientCallback};
use fpbridge_hardware::types::{Effect, EffectState};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, RwLock};
use tracing::{debug, trace, warn};

/// Effect writes for a finger landing on the sensor. Illumination first:
/// the display gates pressure handling on it.
const TOUCH_DOWN_EFFECTS: [(Effect, EffectState); 2] = [
    (Effect::Illumination, EffectState::On),
    (Effect::ContactNotify, EffectState::On),
];

/// Effect writes ending an illumination session.
const TOUCH_RELEASE_EFFECTS: [(Effect, EffectState); 2] = [
    (Effect::ContactNotify, EffectState::Off),
    (Effect::Illumination, EffectState::Off),
];

/// Vendor callback that translates events for the platform.
///
/// One bridge lives for the whole service; re-registering a client replaces
/// the binding but keeps the template registry.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use fpbridge_biometric::bridge::CallbackBridge;
/// use fpbridge_biometric::translate::StatusTranslator;
/// use fpbridge_hardware::mock::{MockEffectChannel, RecordingClient};
/// use fpbridge_hardware::traits::VendorClientCallback;
///
/// let client = Arc::new(RecordingClient::new());
/// let bridge = CallbackBridge::new(StatusTranslator::default(), Arc::new(MockEffectChannel::new()));
/// bridge.bind_client(Some(client.clone()));
///
/// bridge.on_sync_templates(7, &[1, 2], 0);
/// assert_eq!(bridge.synthesize_enumeration(), 2);
/// assert_eq!(client.enumerations(), vec![(7, 1, 0, 1), (7, 2, 0, 0)]);
/// ```
pub struct CallbackBridge {
    /// Platform callback; `None` until `setNotify`.
    client: RwLock<Option<Arc<dyn ClientCallback>>>,

    /// Template state from the last sync event.
    registry: Mutex<TemplateRegistry>,

    /// Set when the vendor delivered an enumerate event.
    enumerate_received: AtomicBool,

    /// Set when the vendor delivered a `CANCELED` error.
    cancel_received: AtomicBool,

    translator: StatusTranslator,

    effects: Arc<dyn EffectChannel>,
}

impl CallbackBridge {
    pub fn new(translator: StatusTranslator, effects: Arc<dyn EffectChannel>) -> Self {
        Self {
            client: RwLock::new(None),
            registry: Mutex::new(TemplateRegistry::new()),
            enumerate_received: AtomicBool::new(false),
            cancel_received: AtomicBool::new(false),
            translator,
            effects,
        }
    }

    /// Replace the platform callback.
    pub fn bind_client(&self, client: Option<Arc<dyn ClientCallback>>) {
        debug!(bound = client.is_some(), "Binding client callback");
        *self
            .client
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = client;
    }

    /// Currently bound platform callback.
    pub fn client(&self) -> Option<Arc<dyn ClientCallback>> {
        self.client
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn translator(&self) -> &StatusTranslator {
        &self.translator
    }

    fn registry(&self) -> MutexGuard<'_, TemplateRegistry> {
        self.registry
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Copy of the current template registry.
    pub fn registry_snapshot(&self) -> TemplateRegistry {
        self.registry().clone()
    }

    /// Device id from the last template sync.
    pub fn device_id(&self) -> DeviceId {
        self.registry().device_id()
    }

    /// Clear the enumerate flag before issuing `enumerate` to the vendor.
    pub fn begin_enumerate(&self) {
        self.enumerate_received.store(false, Ordering::SeqCst);
    }

    /// Whether the vendor delivered an enumerate event since the last
    /// [`begin_enumerate`](Self::begin_enumerate).
    pub fn enumerate_received(&self) -> bool {
        self.enumerate_received.load(Ordering::SeqCst)
    }

    /// Clear the cancel flag before issuing `cancel` to the vendor.
    pub fn begin_cancel(&self) {
        self.cancel_received.store(false, Ordering::SeqCst);
    }

    /// Whether a `CANCELED` error passed through the bridge since the last
    /// [`begin_cancel`](Self::begin_cancel).
    pub fn cancel_received(&self) -> bool {
        self.cancel_received.load(Ordering::SeqCst)
    }

    /// Replay the registry to the client as an enumeration.
    ///
    /// Returns the number of events synthesized. Events are built even when
    /// no client is bound, in which case they are dropped.
    pub fn synthesize_enumeration(&self) -> usize {
        let records = synthesize_enumeration(&self.registry());
        let count = records.len();

        match self.client() {
            Some(client) => {
                for EnumerateRecord {
                    device_id,
                    template_id,
                    group_id,
                    remaining,
                } in records
                {
                    debug!(
                        device_id,
                        template_id,
                        group_id,
                        remaining,
                        "Synthesized onEnumerate"
                    );
                    client.on_enumerate(device_id, template_id, group_id, remaining);
                }
            }
            None => debug!(count, "No client bound, dropping synthesized enumeration"),
        }

        count
    }

    fn notify(&self, event: &'static str, deliver: impl FnOnce(&dyn ClientCallback)) {
        match self.client() {
            Some(client) => deliver(client.as_ref()),
            None => trace!(event, "No client bound, dropping event"),
        }
    }

    fn apply_effects(&self, effects: &[(Effect, EffectState)]) {
        for &(effect, state) in effects {
            if let Err(e) = self.effects.set(effect, state) {
                warn!(%effect, %state, error = %e, "Effect write failed");
            }
        }
    }
}

impl std::fmt::Debug for CallbackBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackBridge")
            .field("client_bound", &self.client().is_some())
            .field("registry", &*self.registry())
            .field("enumerate_received", &self.enumerate_received())
            .field("cancel_received", &self.cancel_received())
            .field("translator", &self.translator)
            .finish_non_exhaustive()
    }
}

impl VendorClientCallback for CallbackBridge {
    fn on_enroll_result(
        &self,
        device_id: DeviceId,
        template_id: TemplateId,
        group_id: GroupId,
        remaining: u32,
    ) {
        debug!(device_id, template_id, group_id, remaining, "onEnrollResult");
        self.notify("enroll_result", |client| {
            client.on_enroll_result(device_id, template_id, group_id, remaining)
        });
    }

    fn on_acquired(&self, device_id: DeviceId, info: VendorAcquiredInfo, vendor_code: i32) {
        debug!(device_id, ?info, vendor_code, "onAcquired");
        let info = self.translator.acquired_info(info);
        self.notify("acquired", |client| {
            client.on_acquired(device_id, info, vendor_code)
        });
    }

    fn on_authenticated(
        &self,
        device_id: DeviceId,
        template_id: TemplateId,
        group_id: GroupId,
        token: &[u8],
    ) {
        debug!(device_id, template_id, group_id, "onAuthenticated");
        self.notify("authenticated", |client| {
            client.on_authenticated(device_id, template_id, group_id, token)
        });
        self.apply_effects(&TOUCH_RELEASE_EFFECTS);
    }

    fn on_error(&self, device_id: DeviceId, error: VendorError, vendor_code: i32) {
        debug!(device_id, ?error, vendor_code, "onError");
        let error = self.translator.error(error);
        if error == FingerprintError::Canceled {
            self.cancel_received.store(true, Ordering::SeqCst);
        }
        self.notify("error", |client| {
            client.on_error(device_id, error, vendor_code)
        });
    }

    fn on_removed(
        &self,
        device_id: DeviceId,
        template_id: TemplateId,
        group_id: GroupId,
        remaining: u32,
    ) {
        debug!(device_id, template_id, group_id, remaining, "onRemoved");
        self.notify("removed", |client| {
            client.on_removed(device_id, template_id, group_id, remaining)
        });
    }

    fn on_enumerate(
        &self,
        device_id: DeviceId,
        template_id: TemplateId,
        group_id: GroupId,
        remaining: u32,
    ) {
        self.enumerate_received.store(true, Ordering::SeqCst);
        debug!(device_id, template_id, group_id, remaining, "onEnumerate");
        self.notify("enumerate", |client| {
            client.on_enumerate(device_id, template_id, group_id, remaining)
        });
    }

    fn on_touch_down(&self, device_id: DeviceId) {
        trace!(device_id, "onTouchDown");
        self.apply_effects(&TOUCH_DOWN_EFFECTS);
    }

    fn on_touch_up(&self, device_id: DeviceId) {
        trace!(device_id, "onTouchUp");
        self.apply_effects(&TOUCH_RELEASE_EFFECTS);
    }

    fn on_sync_templates(&self, device_id: DeviceId, template_ids: &[TemplateId], remaining: u32) {
        debug!(
            device_id,
            count = template_ids.len(),
            remaining,
            templates = ?template_ids,
            "onSyncTemplates"
        );
        self.registry().sync(device_id, template_ids);
    }

    fn on_fingerprint_cmd(&self, cmd_id: i32, _result: &[u32], _length: u32) {
        trace!(cmd_id, "Ignoring onFingerprintCmd");
    }

    fn on_image_info_acquired(&self, kind: u32, quality: u32, match_score: u32) {
        trace!(kind, quality, match_score, "Ignoring onImageInfoAcquired");
    }

    fn on_monitor_event_triggered(&self, kind: u32, _data: &str) {
        trace!(kind, "Ignoring onMonitorEventTriggered");
    }

    fn on_engineering_info_updated(&self, length: u32, _keys: &[u32], _values: &[String]) {
        trace!(length, "Ignoring onEngineeringInfoUpdated");
    }

    fn on_ui_ready(&self, device_id: i64) {
        trace!(device_id, "Ignoring onUIReady");
    }
}
