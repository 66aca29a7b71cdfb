//! Constants shared by the fingerprint bridge crates.
//!
//! # Effect nodes
//!
//! The display driver exposes two write-only nodes that coordinate the
//! under-display sensor with the panel:
//!
//! | Node | Meaning |
//! |------|---------|
//! | [`DEFAULT_CONTACT_NOTIFY_PATH`] | finger pressure is being reported to the display |
//! | [`DEFAULT_ILLUMINATION_PATH`] | the sensor illumination layer is enabled |
//!
//! Each node accepts [`EFFECT_ON`] or [`EFFECT_OFF`].

// ============================================================================
// Contract sizes
// ============================================================================

/// Length in bytes of a hardware authentication token passed to `enroll`.
pub const AUTH_TOKEN_LEN: usize = 69;

// ============================================================================
// Enumerate compensation
// ============================================================================

/// Group id reported on every synthesized enumerate event.
///
/// The template registry does not track groups, so synthesized events always
/// report the default group.
pub const SYNTHESIZED_GROUP_ID: u32 = 0;

/// Template id of the sentinel event reporting "no enrolled templates".
pub const EMPTY_ENUMERATION_TEMPLATE_ID: u32 = 0;

// ============================================================================
// Vendor connection
// ============================================================================

/// Number of attempts made to obtain the vendor service before giving up.
pub const DEFAULT_CONNECT_ATTEMPTS: u32 = 10;

/// Delay between vendor service lookups, in seconds.
pub const DEFAULT_CONNECT_RETRY_DELAY_SECS: u64 = 10;

/// Instance name the vendor service registers under.
pub const DEFAULT_VENDOR_INSTANCE: &str = "default";

// ============================================================================
// Effect nodes
// ============================================================================

/// Node notifying the display that a finger is pressing the sensor.
pub const DEFAULT_CONTACT_NOTIFY_PATH: &str = "/sys/kernel/oppo_display/oppo_notify_fppress";

/// Node enabling the sensor illumination layer.
pub const DEFAULT_ILLUMINATION_PATH: &str = "/sys/kernel/oppo_display/dimlayer_bl_en";

/// Value written to an effect node to switch it on.
pub const EFFECT_ON: &str = "1";

/// Value written to an effect node to switch it off.
pub const EFFECT_OFF: &str = "0";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_values_are_distinct() {
        assert_ne!(EFFECT_ON, EFFECT_OFF);
    }

    #[test]
    fn test_sentinel_matches_default_group() {
        assert_eq!(EMPTY_ENUMERATION_TEMPLATE_ID, SYNTHESIZED_GROUP_ID);
    }
}
