//! Last known template state reported by the vendor.

use fpbridge_core::{DeviceId, TemplateId};

/// Device id and enrolled templates from the most recent template sync.
///
/// The registry trusts the vendor: each sync replaces the previous state
/// wholesale, without merging or validating it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateRegistry {
    device_id: DeviceId,
    templates: Vec<TemplateId>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the registry contents with a sync payload.
    pub fn sync(&mut self, device_id: DeviceId, templates: &[TemplateId]) {
        self.device_id = device_id;
        self.templates.clear();
        self.templates.extend_from_slice(templates);
    }

    /// Device id from the last sync, or 0 before any sync.
    pub fn device_id(&self) -> DeviceId {
        self.device_id
    }

    /// Templates from the last sync, in vendor order.
    pub fn templates(&self) -> &[TemplateId] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
