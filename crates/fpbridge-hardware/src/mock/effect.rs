//! Mock effect channel.

use crate::error::{HardwareError, Result};
use crate::traits::EffectChannel;
use crate::types::{Effect, EffectState};
use std::sync::Mutex;

#[derive(Debug, Default)]
struct EffectLog {
    contact_notify: EffectState,
    illumination: EffectState,
    writes: Vec<(Effect, EffectState)>,
    failing: bool,
}

/// [`EffectChannel`] that keeps the current state of both effects in memory
/// and records every write in order.
///
/// # Examples
///
/// ```
/// use fpbridge_hardware::mock::MockEffectChannel;
/// use fpbridge_hardware::traits::EffectChannel;
/// use fpbridge_hardware::types::{Effect, EffectState};
///
/// let effects = MockEffectChannel::new();
/// effects.set(Effect::Illumination, EffectState::On).unwrap();
///
/// assert_eq!(effects.state(Effect::Illumination), EffectState::On);
/// assert_eq!(effects.state(Effect::ContactNotify), EffectState::Off);
/// ```
#[derive(Debug, Default)]
pub struct MockEffectChannel {
    log: Mutex<EffectLog>,
}

impl MockEffectChannel {
    /// Create a channel with both effects off.
    pub fn new() -> Self {
        Self::default()
    }

    fn log(&self) -> std::sync::MutexGuard<'_, EffectLog> {
        self.log
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Current state of `effect`.
    pub fn state(&self, effect: Effect) -> EffectState {
        let log = self.log();
        match effect {
            Effect::ContactNotify => log.contact_notify,
            Effect::Illumination => log.illumination,
        }
    }

    /// All writes so far, in order, including failed ones.
    pub fn writes(&self) -> Vec<(Effect, EffectState)> {
        self.log().writes.clone()
    }

    /// Make later writes fail without changing state.
    pub fn set_failing(&self, failing: bool) {
        self.log().failing = failing;
    }
}

impl EffectChannel for MockEffectChannel {
    fn set(&self, effect: Effect, state: EffectState) -> Result<()> {
        let mut log = self.log();
        log.writes.push((effect, state));
        if log.failing {
            return Err(HardwareError::other(format!("{} node unavailable", effect)));
        }
        match effect {
            Effect::ContactNotify => log.contact_notify = state,
            Effect::Illumination => log.illumination = state,
        }
        Ok(())
    }
}
