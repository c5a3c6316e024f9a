//=========================================================================
// Rotation Configuration
//=========================================================================
//
// Bounds and reporting options for a RotationTracker.
//
// Configuration may change between gestures. Changes made mid-gesture are
// picked up at the next accumulation step; nothing is re-applied to the
// current value retroactively.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::angle::{clamp_range, wrap_cycle, FULL_TURN};

//=== RotationConfig ======================================================

/// Tracker options.
///
/// # Default Values
///
/// - **cycle_enabled**: `true`
/// - **start_angle / end_angle**: `0` / `360` (only used when cycling is off)
/// - **offset_angle**: `0`
/// - **inertia_enabled**: `false`
///
/// No validation is performed. With cycling off, `start_angle > end_angle`
/// is a caller error and pins the output to `start_angle` whenever the value
/// drops below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationConfig {
    /// Wrap around a full turn instead of clamping to the range.
    pub cycle_enabled: bool,

    /// Lower bound when cycling is off.
    pub start_angle: i32,

    /// Upper bound when cycling is off.
    pub end_angle: i32,

    /// Added to the reported angle only; never bounded.
    pub offset_angle: i32,

    /// Reserved for inertial rotation after lift-off. Forwarded to the
    /// lift-off hook, no effect on output.
    pub inertia_enabled: bool,
}

impl RotationConfig {
    /// Applies the wrap or clamp policy to an accumulated value.
    pub fn bound(&self, angle: i32) -> i32 {
        if self.cycle_enabled {
            wrap_cycle(angle)
        } else {
            clamp_range(angle, self.start_angle, self.end_angle)
        }
    }

    /// Value reported to the listener for an accumulated angle.
    pub fn report(&self, accumulated: i32) -> i32 {
        accumulated.saturating_add(self.offset_angle)
    }

    /// `true` when clamping is active over an empty range.
    pub fn has_inverted_range(&self) -> bool {
        !self.cycle_enabled && self.start_angle > self.end_angle
    }
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            cycle_enabled: true,
            start_angle: 0,
            end_angle: FULL_TURN,
            offset_angle: 0,
            inertia_enabled: false,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RotationConfig::default();
        assert!(config.cycle_enabled);
        assert_eq!(config.start_angle, 0);
        assert_eq!(config.end_angle, 360);
        assert_eq!(config.offset_angle, 0);
        assert!(!config.inertia_enabled);
    }

    #[test]
    fn bound_wraps_when_cycling() {
        let config = RotationConfig::default();
        assert_eq!(config.bound(370), 10);
        assert_eq!(config.bound(-10), 350);
    }

    #[test]
    fn bound_clamps_when_not_cycling() {
        let config = RotationConfig {
            cycle_enabled: false,
            start_angle: 60,
            end_angle: 300,
            ..Default::default()
        };
        assert_eq!(config.bound(10), 60);
        assert_eq!(config.bound(400), 300);
        assert_eq!(config.bound(200), 200);
    }

    #[test]
    fn range_ignored_while_cycling() {
        let config = RotationConfig {
            start_angle: 60,
            end_angle: 300,
            ..Default::default()
        };
        assert_eq!(config.bound(10), 10);
    }

    #[test]
    fn report_adds_offset_without_bounding() {
        let config = RotationConfig {
            cycle_enabled: false,
            start_angle: 0,
            end_angle: 10,
            offset_angle: 10,
            ..Default::default()
        };
        assert_eq!(config.report(5), 15);
    }

    #[test]
    fn inverted_range_detection() {
        let mut config = RotationConfig {
            cycle_enabled: false,
            start_angle: 200,
            end_angle: 100,
            ..Default::default()
        };
        assert!(config.has_inverted_range());

        config.cycle_enabled = true;
        assert!(!config.has_inverted_range());
    }
}
