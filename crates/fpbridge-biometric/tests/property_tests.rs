//! Property-based tests for status translation and enumerate compensation.

mod common;

use common::{Fixture, TEST_DEVICE_ID};
use fpbridge_biometric::{
    StatusTranslator, TemplateRegistry, UnknownCodePolicy, synthesize_enumeration,
};
use fpbridge_core::{
    AcquiredInfo, FingerprintError, RequestStatus, VendorAcquiredInfo, VendorError,
    VendorRequestStatus,
};
use fpbridge_hardware::traits::BiometricsFingerprint;
use proptest::prelude::*;

fn policy() -> impl Strategy<Value = UnknownCodePolicy> {
    prop_oneof![
        Just(UnknownCodePolicy::Benign),
        Just(UnknownCodePolicy::Surface)
    ]
}

fn template_ids() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(any::<u32>(), 0..40)
}

proptest! {
    /// Every raw vendor status translates to a standardized status, and
    /// statuses that exist on both sides keep their wire value.
    #[test]
    fn prop_request_status_total(raw in any::<i32>(), policy in policy()) {
        let translator = StatusTranslator::new(policy);
        let status = translator.request_status(VendorRequestStatus::from_raw(raw));

        match RequestStatus::from_raw(raw) {
            Ok(known) => prop_assert_eq!(status, known),
            Err(_) => prop_assert_eq!(status, RequestStatus::SysUnknown),
        }
    }

    /// Unknown vendor errors map to the policy default; known ones keep
    /// their value.
    #[test]
    fn prop_error_total(raw in any::<i32>(), policy in policy()) {
        let translator = StatusTranslator::new(policy);
        let error = translator.error(VendorError::from_raw(raw));

        let fallback = match policy {
            UnknownCodePolicy::Benign => FingerprintError::NoError,
            UnknownCodePolicy::Surface => FingerprintError::Vendor,
        };
        prop_assert_eq!(error, FingerprintError::from_raw(raw).unwrap_or(fallback));
    }

    #[test]
    fn prop_acquired_info_total(raw in any::<i32>(), policy in policy()) {
        let translator = StatusTranslator::new(policy);
        let info = translator.acquired_info(VendorAcquiredInfo::from_raw(raw));

        let fallback = match policy {
            UnknownCodePolicy::Benign => AcquiredInfo::Good,
            UnknownCodePolicy::Surface => AcquiredInfo::Vendor,
        };
        prop_assert_eq!(info, AcquiredInfo::from_raw(raw).unwrap_or(fallback));
    }

    /// Synthesized enumeration lists the registry in order, counts down to
    /// zero and never comes back empty.
    #[test]
    fn prop_enumeration_shape(device_id in any::<u64>(), templates in template_ids()) {
        let mut registry = TemplateRegistry::new();
        registry.sync(device_id, &templates);

        let records = synthesize_enumeration(&registry);

        prop_assert_eq!(records.len(), templates.len().max(1));
        prop_assert_eq!(records.last().map(|r| r.remaining), Some(0));
        for (i, record) in records.iter().enumerate() {
            prop_assert_eq!(record.device_id, device_id);
            prop_assert_eq!(record.group_id, 0);
            prop_assert_eq!(record.remaining as usize, records.len() - 1 - i);
        }
        if templates.is_empty() {
            prop_assert_eq!(records[0].template_id, 0);
        } else {
            let ids: Vec<u32> = records.iter().map(|r| r.template_id).collect();
            prop_assert_eq!(ids, templates);
        }
    }

    /// Only the most recent sync is visible to a silent enumerate.
    #[test]
    fn prop_latest_sync_wins(history in prop::collection::vec(template_ids(), 1..5)) {
        let fx = Fixture::new();
        for templates in &history {
            fx.sync_templates(templates);
        }

        fx.service.enumerate().unwrap();

        let latest = history.last().unwrap();
        let ids: Vec<u32> = fx.client.enumerations().iter().map(|e| e.1).collect();
        if latest.is_empty() {
            prop_assert_eq!(ids, vec![0]);
        } else {
            prop_assert_eq!(&ids, latest);
        }
        prop_assert!(fx.client.enumerations().iter().all(|e| e.0 == TEST_DEVICE_ID));
    }
}
