//=========================================================================
// Rotate Gesture — Library Root
//
// Turns one- and two-finger touch gestures into a bounded rotation angle
// plus pivot, reported to a listener after every move.
//
// Responsibilities:
// - Expose the host-agnostic tracker (`core::gesture`)
// - Expose the cross-thread hand-off of updates (`core::bridge`)
// - Provide a Winit-backed reference host (`RotateApp`) while keeping the
//   platform glue itself private
//
// Typical usage:
// ```no_run
// use rotate_gesture::prelude::*;
//
// fn main() {
//     RotateAppBuilder::new()
//         .build()
//         .run(|update| println!("{}°", update.angle))
//         .unwrap();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the rotation state machine and its configuration.
// It has no windowing dependency and can be driven by any event source.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the Winit integration (window, touch and mouse
// translation) and is kept private, as it is not part of the public API
// surface.
//
// `app` wires the platform, the tracker and the consumer thread together.
//
mod app;
mod platform;

//--- Public Exports ------------------------------------------------------
//
// Re-exports the app facade so hosts can simply
// `use rotate_gesture::RotateAppBuilder;`.
//
pub use app::{RotateApp, RotateAppBuilder};
pub use platform::PlatformError;
