//=========================================================================
// Rotate Window Demo
//
// Opens a window and reports the rotation of a dial limited to 60°..=300°.
// Drag with one finger (or the left mouse button) around the window
// center, or twist two fingers anywhere.
//
// Run with:
//   RUST_LOG=info cargo run --example rotate_window
//
//=========================================================================

use log::info;
use rotate_gesture::prelude::*;

fn main() -> Result<(), PlatformError> {
    env_logger::init();

    let config = RotationConfig {
        cycle_enabled: false,
        start_angle: 60,
        end_angle: 300,
        ..Default::default()
    };

    RotateAppBuilder::new()
        .with_title("Rotate Gesture Demo")
        .with_size(600, 600)
        .with_config(config)
        .build()
        .run(|update| {
            info!(
                "Dial at {}° (pivot {}, {})",
                update.angle, update.pivot_x, update.pivot_y
            );
        })
}
