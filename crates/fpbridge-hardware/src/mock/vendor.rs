//! Mock vendor service.
//!
//! The mock models the behaviors the bridge has to cope with: commands that
//! succeed with or without emitting their callback, commands that fail with a
//! status, and transactions that fail at the transport level.

use crate::error::{HardwareError, Result};
use crate::events::VendorEvent;
use crate::traits::{VendorClientCallback, VendorFingerprint};
use fpbridge_core::{AuthToken, DeviceId, GroupId, TemplateId, VendorRequestStatus};
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

/// Command of the vendor contract, used as a key for scripted behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VendorCommand {
    SetNotify,
    PreEnroll,
    Enroll,
    PostEnroll,
    GetAuthenticatorId,
    Cancel,
    Enumerate,
    Remove,
    SetActiveGroup,
    Authenticate,
}

/// A recorded call with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VendorCall {
    SetNotify,
    PreEnroll,
    Enroll {
        group_id: GroupId,
        timeout_secs: u32,
    },
    PostEnroll,
    GetAuthenticatorId,
    Cancel,
    Enumerate,
    Remove {
        group_id: GroupId,
        template_id: TemplateId,
    },
    SetActiveGroup {
        group_id: GroupId,
        store_path: String,
    },
    Authenticate {
        operation_id: u64,
        group_id: GroupId,
    },
}

impl VendorCall {
    /// Command this call invoked.
    pub fn command(&self) -> VendorCommand {
        match self {
            Self::SetNotify => VendorCommand::SetNotify,
            Self::PreEnroll => VendorCommand::PreEnroll,
            Self::Enroll { .. } => VendorCommand::Enroll,
            Self::PostEnroll => VendorCommand::PostEnroll,
            Self::GetAuthenticatorId => VendorCommand::GetAuthenticatorId,
            Self::Cancel => VendorCommand::Cancel,
            Self::Enumerate => VendorCommand::Enumerate,
            Self::Remove { .. } => VendorCommand::Remove,
            Self::SetActiveGroup { .. } => VendorCommand::SetActiveGroup,
            Self::Authenticate { .. } => VendorCommand::Authenticate,
        }
    }
}

#[derive(Default)]
struct MockVendorState {
    callback: Option<Arc<dyn VendorClientCallback>>,
    device_id: DeviceId,
    challenge: u64,
    authenticator_id: u64,
    /// Scripted statuses as raw wire values.
    statuses: HashMap<VendorCommand, i32>,
    scripted: HashMap<VendorCommand, VecDeque<Vec<VendorEvent>>>,
    transport_failures: HashSet<VendorCommand>,
    calls: Vec<VendorCall>,
}

fn lock(state: &Mutex<MockVendorState>) -> MutexGuard<'_, MockVendorState> {
    // A panicking test callback must not poison later assertions.
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Mock vendor fingerprint service.
///
/// Every command returns `SysOk` and emits nothing unless told otherwise
/// through the [`MockVendorHandle`].
///
/// # Examples
///
/// ```
/// use fpbridge_core::VendorRequestStatus;
/// use fpbridge_hardware::mock::{MockVendor, VendorCommand};
/// use fpbridge_hardware::traits::VendorFingerprint;
///
/// let (vendor, handle) = MockVendor::new(7);
/// handle.set_status(VendorCommand::Enumerate, VendorRequestStatus::SysEbusy);
///
/// assert_eq!(vendor.enumerate().unwrap(), VendorRequestStatus::SysEbusy);
/// assert_eq!(handle.call_count(VendorCommand::Enumerate), 1);
/// ```
pub struct MockVendor {
    state: Arc<Mutex<MockVendorState>>,
}

impl MockVendor {
    /// Create a mock vendor reporting `device_id` from `set_notify`.
    ///
    /// Returns the service together with a handle used to script it.
    pub fn new(device_id: DeviceId) -> (Self, MockVendorHandle) {
        let state = Arc::new(Mutex::new(MockVendorState {
            device_id,
            ..MockVendorState::default()
        }));

        let vendor = Self {
            state: Arc::clone(&state),
        };
        let handle = MockVendorHandle { state };

        (vendor, handle)
    }

    /// Record `call`, then resolve its scripted status and events.
    ///
    /// Scripted events are delivered to the registered callback before the
    /// status is returned, the way a vendor that responds synchronously
    /// behaves. The state lock is released before delivery.
    fn run(&self, call: VendorCall) -> Result<VendorRequestStatus> {
        let command = call.command();
        let (status, events, callback) = {
            let mut state = self.check_transport(call)?;
            let status = state
                .statuses
                .get(&command)
                .copied()
                .map_or(VendorRequestStatus::SysOk, VendorRequestStatus::from_raw);
            let events = state
                .scripted
                .get_mut(&command)
                .and_then(VecDeque::pop_front)
                .unwrap_or_default();
            (status, events, state.callback.clone())
        };

        if let Some(callback) = callback {
            for event in &events {
                event.deliver(callback.as_ref());
            }
        }

        Ok(status)
    }

    fn check_transport(&self, call: VendorCall) -> Result<MutexGuard<'_, MockVendorState>> {
        let command = call.command();
        let mut state = lock(&self.state);
        state.calls.push(call);
        if state.transport_failures.contains(&command) {
            return Err(HardwareError::transport(format!(
                "{:?} transaction failed",
                command
            )));
        }
        Ok(state)
    }
}

impl std::fmt::Debug for MockVendor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = lock(&self.state);
        f.debug_struct("MockVendor")
            .field("device_id", &state.device_id)
            .field("callback_registered", &state.callback.is_some())
            .field("calls", &state.calls.len())
            .finish()
    }
}

impl VendorFingerprint for MockVendor {
    fn set_notify(&self, callback: Arc<dyn VendorClientCallback>) -> Result<DeviceId> {
        let mut state = self.check_transport(VendorCall::SetNotify)?;
        state.callback = Some(callback);
        Ok(state.device_id)
    }

    fn pre_enroll(&self) -> Result<u64> {
        let mut state = self.check_transport(VendorCall::PreEnroll)?;
        state.challenge = state.challenge.wrapping_add(1);
        Ok(state.challenge)
    }

    fn enroll(
        &self,
        _token: &AuthToken,
        group_id: GroupId,
        timeout_secs: u32,
    ) -> Result<VendorRequestStatus> {
        self.run(VendorCall::Enroll {
            group_id,
            timeout_secs,
        })
    }

    fn post_enroll(&self) -> Result<VendorRequestStatus> {
        self.run(VendorCall::PostEnroll)
    }

    fn get_authenticator_id(&self) -> Result<u64> {
        let state = self.check_transport(VendorCall::GetAuthenticatorId)?;
        Ok(state.authenticator_id)
    }

    fn cancel(&self) -> Result<VendorRequestStatus> {
        self.run(VendorCall::Cancel)
    }

    fn enumerate(&self) -> Result<VendorRequestStatus> {
        self.run(VendorCall::Enumerate)
    }

    fn remove(&self, group_id: GroupId, template_id: TemplateId) -> Result<VendorRequestStatus> {
        self.run(VendorCall::Remove {
            group_id,
            template_id,
        })
    }

    fn set_active_group(
        &self,
        group_id: GroupId,
        store_path: &str,
    ) -> Result<VendorRequestStatus> {
        self.run(VendorCall::SetActiveGroup {
            group_id,
            store_path: store_path.to_string(),
        })
    }

    fn authenticate(&self, operation_id: u64, group_id: GroupId) -> Result<VendorRequestStatus> {
        self.run(VendorCall::Authenticate {
            operation_id,
            group_id,
        })
    }
}

/// Handle for scripting and inspecting a [`MockVendor`].
#[derive(Clone)]
pub struct MockVendorHandle {
    state: Arc<Mutex<MockVendorState>>,
}

impl MockVendorHandle {
    /// Status returned by every later call of `command`.
    pub fn set_status(&self, command: VendorCommand, status: VendorRequestStatus) {
        self.set_raw_status(command, status.as_raw());
    }

    /// Raw status code returned by every later call of `command`, decoded
    /// the way a status read off the wire is.
    pub fn set_raw_status(&self, command: VendorCommand, code: i32) {
        lock(&self.state).statuses.insert(command, code);
    }

    /// Events delivered during the next call of `command`.
    ///
    /// Each call consumes one queued batch; calls with nothing queued emit
    /// nothing.
    pub fn emit_during(&self, command: VendorCommand, events: Vec<VendorEvent>) {
        lock(&self.state)
            .scripted
            .entry(command)
            .or_default()
            .push_back(events);
    }

    /// Make every later call of `command` fail at the transport level.
    pub fn fail_transport(&self, command: VendorCommand) {
        lock(&self.state).transport_failures.insert(command);
    }

    /// Change the device id reported by later `set_notify` calls.
    pub fn set_device_id(&self, device_id: DeviceId) {
        lock(&self.state).device_id = device_id;
    }

    /// Value returned by `get_authenticator_id`.
    pub fn set_authenticator_id(&self, authenticator_id: u64) {
        lock(&self.state).authenticator_id = authenticator_id;
    }

    /// Deliver `event` to the registered callback right now, outside any
    /// command, the way asynchronous vendor events arrive.
    ///
    /// Returns `false` if no callback is registered.
    pub fn emit(&self, event: VendorEvent) -> bool {
        let callback = lock(&self.state).callback.clone();
        match callback {
            Some(callback) => {
                event.deliver(callback.as_ref());
                true
            }
            None => false,
        }
    }

    /// Whether a callback has been registered.
    pub fn callback_registered(&self) -> bool {
        lock(&self.state).callback.is_some()
    }

    /// All calls received so far, in order.
    pub fn calls(&self) -> Vec<VendorCall> {
        lock(&self.state).calls.clone()
    }

    /// Number of calls of `command` received so far.
    pub fn call_count(&self, command: VendorCommand) -> usize {
        lock(&self.state)
            .calls
            .iter()
            .filter(|call| call.command() == command)
            .count()
    }
}

impl std::fmt::Debug for MockVendorHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockVendorHandle").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fpbridge_core::{VendorAcquiredInfo, VendorError};
    use std::sync::Mutex as StdMutex;

    #[derive(Default)]
    struct Collector {
        enumerations: StdMutex<Vec<(TemplateId, u32)>>,
        errors: StdMutex<Vec<VendorError>>,
    }

    impl VendorClientCallback for Collector {
        fn on_enroll_result(&self, _: DeviceId, _: TemplateId, _: GroupId, _: u32) {}
        fn on_acquired(&self, _: DeviceId, _: VendorAcquiredInfo, _: i32) {}
        fn on_authenticated(&self, _: DeviceId, _: TemplateId, _: GroupId, _: &[u8]) {}
        fn on_error(&self, _: DeviceId, error: VendorError, _: i32) {
            self.errors.lock().unwrap().push(error);
        }
        fn on_removed(&self, _: DeviceId, _: TemplateId, _: GroupId, _: u32) {}
        fn on_enumerate(&self, _: DeviceId, template_id: TemplateId, _: GroupId, remaining: u32) {
            self.enumerations
                .lock()
                .unwrap()
                .push((template_id, remaining));
        }
        fn on_touch_down(&self, _: DeviceId) {}
        fn on_touch_up(&self, _: DeviceId) {}
        fn on_sync_templates(&self, _: DeviceId, _: &[TemplateId], _: u32) {}
        fn on_fingerprint_cmd(&self, _: i32, _: &[u32], _: u32) {}
        fn on_image_info_acquired(&self, _: u32, _: u32, _: u32) {}
        fn on_monitor_event_triggered(&self, _: u32, _: &str) {}
        fn on_engineering_info_updated(&self, _: u32, _: &[u32], _: &[String]) {}
        fn on_ui_ready(&self, _: i64) {}
    }

    #[test]
    fn test_set_notify_returns_device_id() {
        let (vendor, handle) = MockVendor::new(42);
        assert!(!handle.callback_registered());

        let device_id = vendor.set_notify(Arc::new(Collector::default())).unwrap();

        assert_eq!(device_id, 42);
        assert!(handle.callback_registered());
    }

    #[test]
    fn test_default_status_is_ok() {
        let (vendor, handle) = MockVendor::new(1);

        assert_eq!(vendor.enumerate().unwrap(), VendorRequestStatus::SysOk);
        assert_eq!(
            vendor.remove(0, 5).unwrap(),
            VendorRequestStatus::SysOk
        );
        assert_eq!(
            handle.calls(),
            vec![
                VendorCall::Enumerate,
                VendorCall::Remove {
                    group_id: 0,
                    template_id: 5
                }
            ]
        );
    }

    #[test]
    fn test_raw_status_decoded_on_return() {
        let (vendor, handle) = MockVendor::new(1);
        handle.set_raw_status(VendorCommand::Authenticate, -16);
        handle.set_raw_status(VendorCommand::Remove, 1234);

        assert_eq!(
            vendor.authenticate(7, 0).unwrap(),
            VendorRequestStatus::SysEbusy
        );
        assert_eq!(
            vendor.remove(0, 1).unwrap(),
            VendorRequestStatus::Unrecognized(1234)
        );
    }

    #[test]
    fn test_scripted_events_delivered_once_during_command() {
        let (vendor, handle) = MockVendor::new(1);
        let collector = Arc::new(Collector::default());
        vendor.set_notify(collector.clone()).unwrap();

        handle.emit_during(
            VendorCommand::Enumerate,
            vec![VendorEvent::Enumerate {
                device_id: 1,
                template_id: 9,
                group_id: 0,
                remaining: 0,
            }],
        );

        vendor.enumerate().unwrap();
        vendor.enumerate().unwrap();

        assert_eq!(*collector.enumerations.lock().unwrap(), vec![(9, 0)]);
    }

    #[test]
    fn test_transport_failure() {
        let (vendor, handle) = MockVendor::new(1);
        handle.fail_transport(VendorCommand::Cancel);

        let result = vendor.cancel();

        assert!(matches!(result, Err(HardwareError::Transport { .. })));
        assert_eq!(handle.call_count(VendorCommand::Cancel), 1);
    }

    #[test]
    fn test_emit_without_callback() {
        let (_vendor, handle) = MockVendor::new(1);
        assert!(!handle.emit(VendorEvent::TouchDown { device_id: 1 }));
    }

    #[test]
    fn test_emit_with_callback() {
        let (vendor, handle) = MockVendor::new(1);
        let collector = Arc::new(Collector::default());
        vendor.set_notify(collector.clone()).unwrap();

        assert!(handle.emit(VendorEvent::Error {
            device_id: 1,
            error: VendorError::Lockout,
            vendor_code: 0,
        }));
        assert_eq!(*collector.errors.lock().unwrap(), vec![VendorError::Lockout]);
    }

    #[test]
    fn test_pre_enroll_challenges_change() {
        let (vendor, handle) = MockVendor::new(1);
        handle.set_authenticator_id(0xfeed);

        let first = vendor.pre_enroll().unwrap();
        let second = vendor.pre_enroll().unwrap();

        assert_ne!(first, second);
        assert_eq!(vendor.get_authenticator_id().unwrap(), 0xfeed);
    }
}
