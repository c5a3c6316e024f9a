//=========================================================================
// Core Systems
//
// Host-independent logic of the crate.
//
// Responsibilities:
// - `gesture`: the rotation state machine and its configuration
// - `bridge`: hand-off of rotation updates to another thread
//
// Notes:
// Nothing under `core` depends on winit. Any host able to report contact
// coordinates and a lifecycle phase can drive a `RotationTracker`.
//
//=========================================================================

//=== Submodules ==========================================================
pub mod bridge;
pub mod gesture;
