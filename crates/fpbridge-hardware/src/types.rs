//! Common types shared across service and effect implementations.

use fpbridge_core::constants::{EFFECT_OFF, EFFECT_ON};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two display side channels driven by finger contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// Tells the display a finger is pressing the sensor area.
    ContactNotify,

    /// Enables the illumination layer under the sensor.
    Illumination,
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContactNotify => write!(f, "contact-notify"),
            Self::Illumination => write!(f, "illumination"),
        }
    }
}

/// Binary state of an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectState {
    On,
    #[default]
    Off,
}

impl EffectState {
    /// Value written to an effect node for this state.
    #[must_use]
    pub fn as_node_value(self) -> &'static str {
        match self {
            Self::On => EFFECT_ON,
            Self::Off => EFFECT_OFF,
        }
    }
}

impl fmt::Display for EffectState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => write!(f, "ON"),
            Self::Off => write!(f, "OFF"),
        }
    }
}
