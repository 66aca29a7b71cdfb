//! Tagged payloads for callback events.
//!
//! Both callback contracts are traits with one method per event kind. The
//! enums in this module carry the same events as values, so that an event can
//! be queued, recorded, compared in a test, and later delivered through the
//! trait with `deliver`.

use crate::traits::{ClientCallback, VendorClientCallback};
use fpbridge_core::{
    AcquiredInfo, DeviceId, FingerprintError, GroupId, TemplateId, VendorAcquiredInfo,
    VendorError,
};
use serde::{Deserialize, Serialize};

/// Event emitted by the vendor service.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VendorEvent {
    EnrollResult {
        device_id: DeviceId,
        template_id: TemplateId,
        group_id: GroupId,
        remaining: u32,
    },
    Acquired {
        device_id: DeviceId,
        info: VendorAcquiredInfo,
        vendor_code: i32,
    },
    Authenticated {
        device_id: DeviceId,
        template_id: TemplateId,
        group_id: GroupId,
        token: Vec<u8>,
    },
    Error {
        device_id: DeviceId,
        error: VendorError,
        vendor_code: i32,
    },
    Removed {
        device_id: DeviceId,
        template_id: TemplateId,
        group_id: GroupId,
        remaining: u32,
    },
    Enumerate {
        device_id: DeviceId,
        template_id: TemplateId,
        group_id: GroupId,
        remaining: u32,
    },
    TouchDown {
        device_id: DeviceId,
    },
    TouchUp {
        device_id: DeviceId,
    },
    SyncTemplates {
        device_id: DeviceId,
        template_ids: Vec<TemplateId>,
        remaining: u32,
    },
    FingerprintCmd {
        cmd_id: i32,
        result: Vec<u32>,
        length: u32,
    },
    ImageInfoAcquired {
        kind: u32,
        quality: u32,
        match_score: u32,
    },
    MonitorEventTriggered {
        kind: u32,
        data: String,
    },
    EngineeringInfoUpdated {
        length: u32,
        keys: Vec<u32>,
        values: Vec<String>,
    },
    UiReady {
        device_id: i64,
    },
}

impl VendorEvent {
    /// Deliver this event through the matching callback method.
    pub fn deliver(&self, callback: &dyn VendorClientCallback) {
        match self {
            Self::EnrollResult {
                device_id,
                template_id,
                group_id,
                remaining,
            } => callback.on_enroll_result(*device_id, *template_id, *group_id, *remaining),
            Self::Acquired {
                device_id,
                info,
                vendor_code,
            } => callback.on_acquired(*device_id, *info, *vendor_code),
            Self::Authenticated {
                device_id,
                template_id,
                group_id,
                token,
            } => callback.on_authenticated(*device_id, *template_id, *group_id, token),
            Self::Error {
                device_id,
                error,
                vendor_code,
            } => callback.on_error(*device_id, *error, *vendor_code),
            Self::Removed {
                device_id,
                template_id,
                group_id,
                remaining,
            } => callback.on_removed(*device_id, *template_id, *group_id, *remaining),
            Self::Enumerate {
                device_id,
                template_id,
                group_id,
                remaining,
            } => callback.on_enumerate(*device_id, *template_id, *group_id, *remaining),
            Self::TouchDown { device_id } => callback.on_touch_down(*device_id),
            Self::TouchUp { device_id } => callback.on_touch_up(*device_id),
            Self::SyncTemplates {
                device_id,
                template_ids,
                remaining,
            } => callback.on_sync_templates(*device_id, template_ids, *remaining),
            Self::FingerprintCmd {
                cmd_id,
                result,
                length,
            } => callback.on_fingerprint_cmd(*cmd_id, result, *length),
            Self::ImageInfoAcquired {
                kind,
                quality,
                match_score,
            } => callback.on_image_info_acquired(*kind, *quality, *match_score),
            Self::MonitorEventTriggered { kind, data } => {
                callback.on_monitor_event_triggered(*kind, data)
            }
            Self::EngineeringInfoUpdated {
                length,
                keys,
                values,
            } => callback.on_engineering_info_updated(*length, keys, values),
            Self::UiReady { device_id } => callback.on_ui_ready(*device_id),
        }
    }
}

/// Event delivered to the platform on the standardized contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ClientEvent {
    EnrollResult {
        device_id: DeviceId,
        template_id: TemplateId,
        group_id: GroupId,
        remaining: u32,
    },
    Acquired {
        device_id: DeviceId,
        info: AcquiredInfo,
        vendor_code: i32,
    },
    Authenticated {
        device_id: DeviceId,
        template_id: TemplateId,
        group_id: GroupId,
        token: Vec<u8>,
    },
    Error {
        device_id: DeviceId,
        error: FingerprintError,
        vendor_code: i32,
    },
    Removed {
        device_id: DeviceId,
        template_id: TemplateId,
        group_id: GroupId,
        remaining: u32,
    },
    Enumerate {
        device_id: DeviceId,
        template_id: TemplateId,
        group_id: GroupId,
        remaining: u32,
    },
}

impl ClientEvent {
    /// Deliver this event through the matching callback method.
    pub fn deliver(&self, callback: &dyn ClientCallback) {
        match self {
            Self::EnrollResult {
                device_id,
                template_id,
                group_id,
                remaining,
            } => callback.on_enroll_result(*device_id, *template_id, *group_id, *remaining),
            Self::Acquired {
                device_id,
                info,
                vendor_code,
            } => callback.on_acquired(*device_id, *info, *vendor_code),
            Self::Authenticated {
                device_id,
                template_id,
                group_id,
                token,
            } => callback.on_authenticated(*device_id, *template_id, *group_id, token),
            Self::Error {
                device_id,
                error,
                vendor_code,
            } => callback.on_error(*device_id, *error, *vendor_code),
            Self::Removed {
                device_id,
                template_id,
                group_id,
                remaining,
            } => callback.on_removed(*device_id, *template_id, *group_id, *remaining),
            Self::Enumerate {
                device_id,
                template_id,
                group_id,
                remaining,
            } => callback.on_enumerate(*device_id, *template_id, *group_id, *remaining),
        }
    }
}
