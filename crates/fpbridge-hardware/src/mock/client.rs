//! Recording platform callback.

use crate::events::ClientEvent;
use crate::traits::ClientCallback;
use fpbridge_core::{AcquiredInfo, DeviceId, FingerprintError, GroupId, TemplateId};
use std::sync::Mutex;

/// [`ClientCallback`] that records every event it receives.
///
/// # Examples
///
/// ```
/// use fpbridge_core::FingerprintError;
/// use fpbridge_hardware::mock::RecordingClient;
/// use fpbridge_hardware::traits::ClientCallback;
///
/// let client = RecordingClient::new();
/// client.on_error(1, FingerprintError::Timeout, 0);
///
/// assert_eq!(client.len(), 1);
/// assert_eq!(client.errors(), vec![FingerprintError::Timeout]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingClient {
    events: Mutex<Vec<ClientEvent>>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, event: ClientEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event);
    }

    /// Snapshot of all events received so far.
    pub fn events(&self) -> Vec<ClientEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Remove and return all events received so far.
    pub fn take(&self) -> Vec<ClientEvent> {
        std::mem::take(
            &mut *self
                .events
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner()),
        )
    }

    pub fn len(&self) -> usize {
        self.events().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Enumerate events as `(device_id, template_id, group_id, remaining)`.
    pub fn enumerations(&self) -> Vec<(DeviceId, TemplateId, GroupId, u32)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ClientEvent::Enumerate {
                    device_id,
                    template_id,
                    group_id,
                    remaining,
                } => Some((device_id, template_id, group_id, remaining)),
                _ => None,
            })
            .collect()
    }

    /// Errors received, in order.
    pub fn errors(&self) -> Vec<FingerprintError> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ClientEvent::Error { error, .. } => Some(error),
                _ => None,
            })
            .collect()
    }
}

impl ClientCallback for RecordingClient {
    fn on_enroll_result(
        &self,
        device_id: DeviceId,
        template_id: TemplateId,
        group_id: GroupId,
        remaining: u32,
    ) {
        self.record(ClientEvent::EnrollResult {
            device_id,
            template_id,
            group_id,
            remaining,
        });
    }

    fn on_acquired(&self, device_id: DeviceId, info: AcquiredInfo, vendor_code: i32) {
        self.record(ClientEvent::Acquired {
            device_id,
            info,
            vendor_code,
        });
    }

    fn on_authenticated(
        &self,
        device_id: DeviceId,
        template_id: TemplateId,
        group_id: GroupId,
        token: &[u8],
    ) {
        self.record(ClientEvent::Authenticated {
            device_id,
            template_id,
            group_id,
            token: token.to_vec(),
        });
    }

    fn on_error(&self, device_id: DeviceId, error: FingerprintError, vendor_code: i32) {
        self.record(ClientEvent::Error {
            device_id,
            error,
            vendor_code,
        });
    }

    fn on_removed(
        &self,
        device_id: DeviceId,
        template_id: TemplateId,
        group_id: GroupId,
        remaining: u32,
    ) {
        self.record(ClientEvent::Removed {
            device_id,
            template_id,
            group_id,
            remaining,
        });
    }

    fn on_enumerate(
        &self,
        device_id: DeviceId,
        template_id: TemplateId,
        group_id: GroupId,
        remaining: u32,
    ) {
        self.record(ClientEvent::Enumerate {
            device_id,
            template_id,
            group_id,
            remaining,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_client_filters() {
        let client = RecordingClient::new();
        client.on_enumerate(1, 10, 0, 1);
        client.on_error(1, FingerprintError::Canceled, 0);
        client.on_enumerate(1, 11, 0, 0);

        assert_eq!(client.enumerations(), vec![(1, 10, 0, 1), (1, 11, 0, 0)]);
        assert_eq!(client.errors(), vec![FingerprintError::Canceled]);
    }

    #[test]
    fn test_recording_client_take_drains() {
        let client = RecordingClient::new();
        client.on_acquired(1, AcquiredInfo::Partial, 0);

        assert_eq!(client.take().len(), 1);
        assert!(client.is_empty());
    }
}
