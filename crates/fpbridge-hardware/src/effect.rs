//! Effect channel backed by display driver nodes.
//!
//! Each effect is a single sysfs node that accepts `1` or `0`. The node is
//! opened, truncated and written on every call; nothing is cached and
//! nothing is read back.

use crate::error::{HardwareError, Result};
use crate::traits::EffectChannel;
use crate::types::{Effect, EffectState};
use fpbridge_core::constants::{DEFAULT_CONTACT_NOTIFY_PATH, DEFAULT_ILLUMINATION_PATH};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, trace};

/// Locations of the effect nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SysfsPaths {
    /// Node receiving finger pressure notifications.
    pub contact_notify: PathBuf,

    /// Node enabling the illumination layer.
    pub illumination: PathBuf,
}

impl Default for SysfsPaths {
    fn default() -> Self {
        Self {
            contact_notify: PathBuf::from(DEFAULT_CONTACT_NOTIFY_PATH),
            illumination: PathBuf::from(DEFAULT_ILLUMINATION_PATH),
        }
    }
}

impl SysfsPaths {
    /// Node backing `effect`.
    pub fn path_for(&self, effect: Effect) -> &Path {
        match effect {
            Effect::ContactNotify => &self.contact_notify,
            Effect::Illumination => &self.illumination,
        }
    }
}

/// [`EffectChannel`] writing to sysfs nodes.
///
/// # Examples
///
/// ```no_run
/// use fpbridge_hardware::effect::{SysfsEffectChannel, SysfsPaths};
/// use fpbridge_hardware::traits::EffectChannel;
/// use fpbridge_hardware::types::{Effect, EffectState};
///
/// let channel = SysfsEffectChannel::new(SysfsPaths::default());
/// channel.set(Effect::Illumination, EffectState::On)?;
/// # Ok::<(), fpbridge_hardware::HardwareError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SysfsEffectChannel {
    paths: SysfsPaths,
}

impl SysfsEffectChannel {
    pub fn new(paths: SysfsPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &SysfsPaths {
        &self.paths
    }
}

impl EffectChannel for SysfsEffectChannel {
    fn set(&self, effect: Effect, state: EffectState) -> Result<()> {
        let path = self.paths.path_for(effect);
        trace!(%effect, %state, path = %path.display(), "Writing effect node");
        std::fs::write(path, state.as_node_value())
            .map_err(|e| HardwareError::effect_write(path, e))
    }
}

/// [`EffectChannel`] that only logs, for hosts without the display nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingEffectChannel;

impl EffectChannel for LoggingEffectChannel {
    fn set(&self, effect: Effect, state: EffectState) -> Result<()> {
        info!(%effect, %state, "Effect switched");
        Ok(())
    }
}
