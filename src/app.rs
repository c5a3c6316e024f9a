//=========================================================================
// Rotate App
//
// Reference host: a window whose touch input drives a RotationTracker,
// with rotation updates handled on a dedicated consumer thread.
//
// Architecture:
// ```text
//     RotateAppBuilder  ──build()──>  RotateApp  ──run(handler)──>  [Runtime]
//         │                              │
//         ├─ with_title()                ├─ spawns consumer thread
//         ├─ with_size()                 └─ runs platform event loop
//         ├─ with_channel_capacity()        blocks until window closes
//         ├─ with_config()
//         └─ with_lift_off_hook()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};
use std::thread;
use winit::dpi::PhysicalSize;
use winit::window::WindowAttributes;

//=== Internal Dependencies ===============================================

use crate::core::bridge::{channel_listener, RotationUpdate};
use crate::core::gesture::{LiftOffHook, RotationConfig, RotationTracker, RotationTrackerBuilder};
use crate::platform::{Platform, PlatformError};

//=== RotateAppBuilder ====================================================

/// Builder for configuring and constructing a [`RotateApp`].
///
/// # Default Values
///
/// - **Title**: "Rotate Gesture"
/// - **Size**: 800x600 physical pixels
/// - **Channel capacity**: 128 updates
/// - **Config**: [`RotationConfig::default`]
/// - **Lift-off hook**: [`NoInertia`](crate::core::gesture::NoInertia)
///
/// # Examples
///
/// A dial limited to 60°..=300°:
/// ```no_run
/// use rotate_gesture::prelude::*;
///
/// let config = RotationConfig {
///     cycle_enabled: false,
///     start_angle: 60,
///     end_angle: 300,
///     ..Default::default()
/// };
///
/// RotateAppBuilder::new()
///     .with_title("Dial")
///     .with_config(config)
///     .build()
///     .run(|update| println!("rotate to {}°", update.angle))
///     .expect("event loop failed");
/// ```
pub struct RotateAppBuilder {
    title: String,
    size: PhysicalSize<u32>,
    channel_capacity: usize,
    tracker: RotationTrackerBuilder,
}

impl RotateAppBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            title: String::from("Rotate Gesture"),
            size: PhysicalSize::new(800, 600),
            channel_capacity: 128,
            tracker: RotationTracker::builder(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial inner size in physical pixels.
    ///
    /// Also seeds the single-contact pivot until the window reports its
    /// real size.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be non-zero, got {}x{}", width, height);
        self.size = PhysicalSize::new(width, height);
        self
    }

    /// Sets the capacity of the tracker → consumer channel.
    ///
    /// When the channel is full the oldest queued update is evicted to make
    /// room, so the event loop never stalls and the consumer always ends up
    /// with the latest angle.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    pub fn with_config(mut self, config: RotationConfig) -> Self {
        self.tracker = self.tracker.with_config(config);
        self
    }

    /// Replaces the hook run when a contact lifts mid-gesture or the
    /// gesture is cancelled. Runs on the event-loop thread.
    pub fn with_lift_off_hook<H>(mut self, hook: H) -> Self
    where
        H: LiftOffHook + 'static,
    {
        self.tracker = self.tracker.with_lift_off_hook(hook);
        self
    }

    /// Builds the app instance.
    pub fn build(self) -> RotateApp {
        info!(
            "Building rotate app ({}x{}, channel: {})",
            self.size.width, self.size.height, self.channel_capacity
        );

        RotateApp {
            title: self.title,
            size: self.size,
            channel_capacity: self.channel_capacity,
            tracker: self.tracker.build(),
        }
    }
}

impl Default for RotateAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== RotateApp ===========================================================

/// Window + rotation tracker runtime.
///
/// # Architecture
///
/// ```text
/// RotateApp (Main Thread)
///   ├─► Consumer thread
///   │     └─► handler(RotationUpdate); oldest queued updates are evicted
///   │         when it falls behind, the latest angle always arrives
///   │
///   └─► Platform (Event Loop)
///         └─► Window, TouchProcessor, RotationTracker
///
/// Communication: bounded crossbeam channel (RotationUpdate)
/// ```
pub struct RotateApp {
    title: String,
    size: PhysicalSize<u32>,
    channel_capacity: usize,
    tracker: RotationTracker,
}

impl RotateApp {
    /// Starts the runtime and blocks until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the bounded channel for tracker → consumer updates
    /// 2. Spawns the consumer thread running `handler`
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On window close: tracker dropped → channel disconnects →
    ///    consumer drains and exits → joined
    ///
    /// # Errors
    ///
    /// Returns the [`PlatformError`] if the event loop failed. The consumer
    /// thread is still joined first.
    pub fn run<F>(self, handler: F) -> Result<(), PlatformError>
    where
        F: FnMut(RotationUpdate) + Send + 'static,
    {
        info!("Starting rotate app runtime");

        //--- 1. Create communication channel -----------------------------
        let (tx, rx): (Sender<RotationUpdate>, Receiver<RotationUpdate>) =
            bounded(self.channel_capacity);

        info!("Update channel created (capacity: {})", self.channel_capacity);

        //--- 2. Spawn the consumer thread ---------------------------------
        let evict = rx.clone();
        let consumer_handle = spawn_consumer(rx, handler);
        info!("Consumer thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let mut tracker = self.tracker;
        tracker.set_on_rotate_listener(channel_listener(tx, evict));

        let attributes = WindowAttributes::default()
            .with_title(self.title)
            .with_inner_size(self.size);

        let platform = Platform::new(tracker, attributes, self.size);
        info!("Platform initialized, entering event loop");

        let result = platform.run();
        if let Err(e) = &result {
            error!("Platform error: {}", e);
        }

        info!("Platform event loop exited");

        //--- 4. Cleanup: Wait for consumer thread to terminate ------------
        match consumer_handle.join() {
            Ok(()) => {
                info!("Consumer thread terminated cleanly");
            }
            Err(e) => {
                error!("Consumer thread panicked: {:?}", e);
            }
        }

        info!("Rotate app shutdown complete");
        result
    }
}

//=== Consumer Thread =====================================================

/// Runs `handler` for every update until all senders are dropped.
fn spawn_consumer<F>(receiver: Receiver<RotationUpdate>, mut handler: F) -> thread::JoinHandle<()>
where
    F: FnMut(RotationUpdate) + Send + 'static,
{
    thread::spawn(move || {
        for update in receiver.iter() {
            handler(update);
        }
        info!("Update channel closed, consumer exiting");
    })
}

//=========================================================================
// Unit Tests
//=========================================================================
