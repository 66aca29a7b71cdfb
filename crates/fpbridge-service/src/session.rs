//! Scripted session against the emulated vendor.
//!
//! Drives the adapter through the sequence the platform issues on boot, on
//! enrollment and on an unlock: register, select the group, enroll a finger,
//! list templates, authenticate, cancel. The emulated vendor never answers
//! `enumerate` and never confirms `cancel`, so both compensation paths run.

use anyhow::Result;
use fpbridge_core::constants::AUTH_TOKEN_LEN;
use fpbridge_core::{
    AcquiredInfo, AuthToken, DeviceId, FingerprintError, GroupId, TemplateId, VendorAcquiredInfo,
    VendorError,
};
use fpbridge_hardware::events::VendorEvent;
use fpbridge_hardware::mock::{MockVendorHandle, VendorCommand};
use fpbridge_hardware::traits::{BiometricsFingerprint, ClientCallback};
use std::sync::Arc;
use tracing::info;

/// Device id the emulated vendor reports.
pub const EMULATED_DEVICE_ID: DeviceId = 1;

const GROUP_ID: GroupId = 0;
const STORE_PATH: &str = "/data/vendor_de/0/fpdata";
const ENROLLED: TemplateId = 0x1001;
const NEW_TEMPLATE: TemplateId = 0x1002;
const ENROLL_TIMEOUT_SECS: u32 = 60;

/// `HW_AUTH_FINGERPRINT` authenticator type.
const HW_AUTH_FINGERPRINT: u32 = 1 << 1;

// Raw codes the emulated sensor reports, as they arrive from the vendor.
const RAW_ACQUIRED_GOOD: i32 = 0;
const RAW_ACQUIRED_PARTIAL: i32 = 1;
const RAW_ACQUIRED_INSUFFICIENT: i32 = 2;
const RAW_ERROR_TIMEOUT: i32 = 3;

/// Hardware auth token bytes as the platform's gatekeeper hands them over.
///
/// Layout: version, challenge, user id, authenticator id, authenticator
/// type (big endian), timestamp (big endian), HMAC. The HMAC is left zeroed.
fn hardware_auth_token(challenge: u64, authenticator_id: u64) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(AUTH_TOKEN_LEN);
    bytes.push(0);
    bytes.extend_from_slice(&challenge.to_le_bytes());
    bytes.extend_from_slice(&0u64.to_le_bytes());
    bytes.extend_from_slice(&authenticator_id.to_le_bytes());
    bytes.extend_from_slice(&HW_AUTH_FINGERPRINT.to_be_bytes());
    bytes.extend_from_slice(&0u64.to_be_bytes());
    bytes.extend_from_slice(&[0; 32]);
    bytes
}

fn acquired(device_id: DeviceId, raw: i32) -> VendorEvent {
    VendorEvent::Acquired {
        device_id,
        info: VendorAcquiredInfo::from_raw(raw),
        vendor_code: 0,
    }
}

/// Platform callback that logs every event it receives.
#[derive(Debug, Default)]
pub struct LoggingClient;

impl ClientCallback for LoggingClient {
    fn on_enroll_result(
        &self,
        device_id: DeviceId,
        template_id: TemplateId,
        group_id: GroupId,
        remaining: u32,
    ) {
        info!(device_id, template_id, group_id, remaining, "onEnrollResult");
    }

    fn on_acquired(&self, device_id: DeviceId, info: AcquiredInfo, vendor_code: i32) {
        info!(device_id, %info, vendor_code, "onAcquired");
    }

    fn on_authenticated(
        &self,
        device_id: DeviceId,
        template_id: TemplateId,
        group_id: GroupId,
        token: &[u8],
    ) {
        info!(
            device_id,
            template_id,
            group_id,
            token_len = token.len(),
            "onAuthenticated"
        );
    }

    fn on_error(&self, device_id: DeviceId, error: FingerprintError, vendor_code: i32) {
        info!(device_id, %error, vendor_code, "onError");
    }

    fn on_removed(
        &self,
        device_id: DeviceId,
        template_id: TemplateId,
        group_id: GroupId,
        remaining: u32,
    ) {
        info!(device_id, template_id, group_id, remaining, "onRemoved");
    }

    fn on_enumerate(
        &self,
        device_id: DeviceId,
        template_id: TemplateId,
        group_id: GroupId,
        remaining: u32,
    ) {
        info!(device_id, template_id, group_id, remaining, "onEnumerate");
    }
}

/// Run the scripted session.
pub fn run(
    service: &dyn BiometricsFingerprint,
    vendor: &MockVendorHandle,
    client: Arc<dyn ClientCallback>,
) -> Result<()> {
    let device_id = service.set_notify(Some(client))?;
    info!(device_id, "Registered platform callback");

    let status = service.set_active_group(GROUP_ID, STORE_PATH)?;
    info!(%status, "setActiveGroup");

    vendor.emit(VendorEvent::SyncTemplates {
        device_id,
        template_ids: vec![ENROLLED],
        remaining: 0,
    });

    // Enroll a second finger.
    let challenge = service.pre_enroll()?;
    let authenticator_id = service.get_authenticator_id()?;
    let token = AuthToken::from_slice(&hardware_auth_token(challenge, authenticator_id))?;
    vendor.emit_during(
        VendorCommand::Enroll,
        vec![
            acquired(device_id, RAW_ACQUIRED_PARTIAL),
            VendorEvent::EnrollResult {
                device_id,
                template_id: NEW_TEMPLATE,
                group_id: GROUP_ID,
                remaining: 1,
            },
            acquired(device_id, RAW_ACQUIRED_GOOD),
            VendorEvent::EnrollResult {
                device_id,
                template_id: NEW_TEMPLATE,
                group_id: GROUP_ID,
                remaining: 0,
            },
            VendorEvent::SyncTemplates {
                device_id,
                template_ids: vec![ENROLLED, NEW_TEMPLATE],
                remaining: 0,
            },
        ],
    );
    let status = service.enroll(&token, GROUP_ID, ENROLL_TIMEOUT_SECS)?;
    info!(%status, challenge, "enroll");
    let status = service.post_enroll()?;
    info!(%status, "postEnroll");

    let status = service.enumerate()?;
    info!(%status, "enumerate");

    // First touch is too short and times out, the second one matches.
    vendor.emit_during(
        VendorCommand::Authenticate,
        vec![
            VendorEvent::TouchDown { device_id },
            acquired(device_id, RAW_ACQUIRED_INSUFFICIENT),
            VendorEvent::TouchUp { device_id },
            VendorEvent::Error {
                device_id,
                error: VendorError::from_raw(RAW_ERROR_TIMEOUT),
                vendor_code: 0,
            },
        ],
    );
    vendor.emit_during(
        VendorCommand::Authenticate,
        vec![
            VendorEvent::TouchDown { device_id },
            acquired(device_id, RAW_ACQUIRED_GOOD),
            VendorEvent::Authenticated {
                device_id,
                template_id: ENROLLED,
                group_id: GROUP_ID,
                token: vec![0; AUTH_TOKEN_LEN],
            },
        ],
    );
    for _ in 0..2 {
        let status = service.authenticate(challenge, GROUP_ID)?;
        info!(%status, "authenticate");
    }

    let status = service.cancel()?;
    info!(%status, "cancel");

    Ok(())
}
