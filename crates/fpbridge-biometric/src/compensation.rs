//! Synthesized enumeration.
//!
//! The standardized contract promises at least one enumerate callback per
//! `enumerate` command, even with nothing enrolled. Some vendor builds accept
//! the command and never answer; the bridge then replays the last template
//! sync as an enumeration.

use crate::registry::TemplateRegistry;
use fpbridge_core::constants::{EMPTY_ENUMERATION_TEMPLATE_ID, SYNTHESIZED_GROUP_ID};
use fpbridge_core::{DeviceId, GroupId, TemplateId};

/// One synthesized enumerate event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumerateRecord {
    pub device_id: DeviceId,
    pub template_id: TemplateId,
    pub group_id: GroupId,
    pub remaining: u32,
}

/// Enumerate events reconstructing `registry`.
///
/// With `n` templates this yields `n` records counting `remaining` down from
/// `n - 1` to 0. With none it yields a single sentinel record with template,
/// group and remaining all 0.
pub fn synthesize_enumeration(registry: &TemplateRegistry) -> Vec<EnumerateRecord> {
    let device_id = registry.device_id();

    if registry.is_empty() {
        return vec![EnumerateRecord {
            device_id,
            template_id: EMPTY_ENUMERATION_TEMPLATE_ID,
            group_id: SYNTHESIZED_GROUP_ID,
            remaining: 0,
        }];
    }

    let count = registry.len();
    registry
        .templates()
        .iter()
        .enumerate()
        .map(|(index, &template_id)| EnumerateRecord {
            device_id,
            template_id,
            group_id: SYNTHESIZED_GROUP_ID,
            remaining: u32::try_from(count - 1 - index).unwrap_or(u32::MAX),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry_yields_sentinel() {
        let mut registry = TemplateRegistry::new();
        registry.sync(99, &[]);

        let records = synthesize_enumeration(&registry);

        assert_eq!(
            records,
            vec![EnumerateRecord {
                device_id: 99,
                template_id: 0,
                group_id: 0,
                remaining: 0
            }]
        );
    }

    #[test]
    fn test_remaining_counts_down_to_zero() {
        let mut registry = TemplateRegistry::new();
        registry.sync(5, &[101, 202, 303]);

        let records = synthesize_enumeration(&registry);

        let summary: Vec<_> = records
            .iter()
            .map(|r| (r.device_id, r.template_id, r.group_id, r.remaining))
            .collect();
        assert_eq!(
            summary,
            vec![(5, 101, 0, 2), (5, 202, 0, 1), (5, 303, 0, 0)]
        );
    }

    #[test]
    fn test_single_template() {
        let mut registry = TemplateRegistry::new();
        registry.sync(5, &[42]);

        let records = synthesize_enumeration(&registry);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].template_id, 42);
        assert_eq!(records[0].remaining, 0);
    }

    #[test]
    fn test_never_synced_uses_zero_device() {
        let records = synthesize_enumeration(&TemplateRegistry::new());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].device_id, 0);
    }
}
