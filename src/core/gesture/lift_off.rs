//=========================================================================
// Lift-Off Hook
//=========================================================================
//
// Extension seam invoked when a contact leaves mid-sequence or the
// sequence is cancelled. The default does nothing; an inertial rotation
// strategy can be plugged in without changing the tracker.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::event::Pivot;

//=== LiftOff =============================================================

/// Snapshot handed to a [`LiftOffHook`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiftOff {
    /// Pivot of the event that triggered the lift-off.
    pub pivot: Pivot,

    /// Accumulated angle at lift-off, before offset.
    pub accumulated_angle: i32,

    /// Mirrors [`RotationConfig::inertia_enabled`](super::RotationConfig).
    pub inertia_enabled: bool,
}

//=== LiftOffHook =========================================================

/// Strategy called on `SecondaryEnd` and `Cancel`.
///
/// Any `FnMut(&LiftOff)` closure is a hook:
///
/// ```
/// use rotate_gesture::core::gesture::{LiftOff, RotationTracker};
///
/// let mut tracker = RotationTracker::new();
/// tracker.set_lift_off_hook(|lift_off: &LiftOff| {
///     if lift_off.inertia_enabled {
///         // start a fling from lift_off.accumulated_angle
///     }
/// });
/// ```
pub trait LiftOffHook {
    fn on_lift_off(&mut self, lift_off: &LiftOff);
}

impl<F> LiftOffHook for F
where
    F: FnMut(&LiftOff),
{
    fn on_lift_off(&mut self, lift_off: &LiftOff) {
        self(lift_off)
    }
}

//=== NoInertia ===========================================================

/// Default hook: rotation stops where the contacts left it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInertia;

impl LiftOffHook for NoInertia {
    fn on_lift_off(&mut self, _lift_off: &LiftOff) {}
}
