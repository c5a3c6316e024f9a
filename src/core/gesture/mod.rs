//=========================================================================
// Rotation Gesture
//
// Host-agnostic gesture-to-angle state machine.
//
// Responsibilities:
// - Measure one- or two-contact touch events as a pivot and raw angle
// - Filter spurious single-event jumps
// - Accumulate a running angle under a wrap or clamp policy
// - Notify a rotate listener on every Move
//
// Notes:
// The tracker owns no notion of a surface. Hosts pass the pivot used for
// single-contact gestures with each event.
//
//=========================================================================

//=== Submodules ==========================================================
pub mod angle;
mod config;
mod event;
mod lift_off;
mod tracker;

//=== Public API ==========================================================
pub use config::RotationConfig;
pub use event::{EventStatus, GesturePhase, Pivot, Point};
pub use lift_off::{LiftOff, LiftOffHook, NoInertia};
pub use tracker::{RotateListener, RotationTracker, RotationTrackerBuilder};
