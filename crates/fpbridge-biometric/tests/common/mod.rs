//! Common test utilities for adapter integration tests.
//!
//! [`Fixture`] wires a [`RequestForwarder`] to a scripted [`MockVendor`], a
//! [`RecordingClient`] and a [`MockEffectChannel`], with the client already
//! registered. Tests drive the vendor side through `fixture.vendor` and
//! inspect what reached the platform through `fixture.client`.

#![allow(dead_code)]

use fpbridge_biometric::{CallbackBridge, RequestForwarder, StatusTranslator, UnknownCodePolicy};
use fpbridge_core::{DeviceId, TemplateId};
use fpbridge_hardware::events::VendorEvent;
use fpbridge_hardware::mock::{MockEffectChannel, MockVendor, MockVendorHandle, RecordingClient};
use fpbridge_hardware::traits::BiometricsFingerprint;
use fpbridge_hardware::types::{Effect, EffectState};
use std::sync::Arc;

/// Device id reported by the mock vendor unless a test changes it.
pub const TEST_DEVICE_ID: DeviceId = 0x7a3c_0001;

pub struct Fixture {
    pub service: RequestForwarder,
    pub vendor: MockVendorHandle,
    pub client: Arc<RecordingClient>,
    pub effects: Arc<MockEffectChannel>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_policy(UnknownCodePolicy::default())
    }

    pub fn with_policy(policy: UnknownCodePolicy) -> Self {
        let (vendor, handle) = MockVendor::new(TEST_DEVICE_ID);
        let effects = Arc::new(MockEffectChannel::new());
        let bridge = Arc::new(CallbackBridge::new(
            StatusTranslator::new(policy),
            effects.clone(),
        ));
        let service = RequestForwarder::new(Arc::new(vendor), bridge);

        let client = Arc::new(RecordingClient::new());
        service
            .set_notify(Some(client.clone()))
            .expect("mock vendor accepts registration");

        Self {
            service,
            vendor: handle,
            client,
            effects,
        }
    }

    /// Deliver a template sync from the vendor outside any command.
    pub fn sync_templates(&self, template_ids: &[TemplateId]) {
        assert!(self.vendor.emit(VendorEvent::SyncTemplates {
            device_id: TEST_DEVICE_ID,
            template_ids: template_ids.to_vec(),
            remaining: 0,
        }));
    }

    /// Deliver an arbitrary vendor event outside any command.
    pub fn emit(&self, event: VendorEvent) {
        assert!(self.vendor.emit(event), "vendor callback not registered");
    }
}

/// Expected enumeration for `templates` on [`TEST_DEVICE_ID`], group 0.
pub fn expected_enumeration(templates: &[TemplateId]) -> Vec<(DeviceId, TemplateId, u32, u32)> {
    let n = templates.len() as u32;
    templates
        .iter()
        .enumerate()
        .map(|(i, &template_id)| (TEST_DEVICE_ID, template_id, 0, n - 1 - i as u32))
        .collect()
}

/// Assert both effects are in `state`.
pub fn assert_effects(effects: &MockEffectChannel, state: EffectState) {
    assert_eq!(
        effects.state(Effect::Illumination),
        state,
        "illumination should be {}",
        state
    );
    assert_eq!(
        effects.state(Effect::ContactNotify),
        state,
        "contact notify should be {}",
        state
    );
}
