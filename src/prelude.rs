//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use rotate_gesture::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// App facade
pub use crate::app::{RotateApp, RotateAppBuilder};
pub use crate::platform::PlatformError;

// Gesture tracking
pub use crate::core::gesture::{
    EventStatus, GesturePhase, LiftOff, LiftOffHook, NoInertia, Pivot, Point, RotationConfig,
    RotationTracker, RotationTrackerBuilder,
};

// Update hand-off
pub use crate::core::bridge::{channel_listener, RotationUpdate};
