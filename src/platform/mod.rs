//=========================================================================
// Platform Subsystem
//
// Attaches a RotationTracker to a Winit window's touch source.
//
// Architecture:
// ```text
//  Main Thread:                          Consumer Thread:
//  ┌───────────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop             │    │  App handler     │
//  │   ↓                           │    │                  │
//  │  TouchProcessor               │    │  FnMut(Rotation- │
//  │   ├─ per-finger → frames      │    │        Update)   │
//  │   └─ mouse drag emulation     │    │                  │
//  │   ↓                           │    └──────────────────┘
//  │  RotationTracker              │             ↑
//  │   ↓ on_rotate                 │             │
//  │  channel_listener ────────────┼─────────────┘
//  └───────────────────────────────┘    RotationUpdate
// ```
//
// Key Design Decisions:
// - **Tracker on the event-loop thread**: touch delivery is already
//   sequential there, so the tracker needs no locking
// - **Pivot from window size**: single-finger gestures rotate about the
//   center of the window's inner size, refreshed on every resize
// - **Main thread requirement**: Winit mandates main thread on macOS/iOS,
//   so this runs on the thread that called `RotateApp::run()`
//
// Responsibilities:
// - Create and manage the OS window
// - Convert Winit touch / mouse events into tracker frames
// - Supply the surface pivot for single-contact gestures
// - Cancel contacts whose release is lost (focus change, destroy)
//
//=========================================================================

//=== Submodules ==========================================================

mod contact_buffer;
mod touch_processor;

//=== External Crates =====================================================

use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::core::gesture::{Pivot, Point, RotationTracker};
use touch_processor::{TouchFrame, TouchProcessor};

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are typically fatal - if the event loop can't be created,
/// no touch input will ever arrive.
#[derive(Debug)]
pub enum PlatformError {
    /// Failed to create event loop (rare, indicates OS-level issue).
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop execution error (rare, indicates corruption).
    EventLoopExecution(winit::error::EventLoopError),
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EventLoopCreation(e) | Self::EventLoopExecution(e) => Some(e),
        }
    }
}

//=== Platform ============================================================

/// Window owner and touch-to-tracker adapter.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(tracker, attributes, initial_size)`
/// 2. **Execution**: `platform.run()` - blocks in the event loop
/// 3. **Event processing**: Winit calls `ApplicationHandler` methods
/// 4. **Shutdown**: window closed → loop exits → tracker (and its
///    listener) dropped
///
/// # Thread Safety
///
/// Not Send/Sync - it must remain on the main thread. The tracker's
/// listener is the only way updates leave this thread.
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    /// Requested window attributes (title, initial size).
    attributes: WindowAttributes,

    /// Inner size used for the single-contact pivot.
    surface_size: PhysicalSize<u32>,

    /// Converts Winit events to tracker frames.
    touch_processor: TouchProcessor,

    /// Gesture state machine fed by `touch_processor`.
    tracker: RotationTracker,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates a platform around a configured tracker.
    ///
    /// `initial_size` seeds the pivot until the window reports its real
    /// inner size. The window itself is created lazily in `resumed()`.
    pub fn new(
        tracker: RotationTracker,
        attributes: WindowAttributes,
        initial_size: PhysicalSize<u32>,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            attributes,
            surface_size: initial_size,
            touch_processor: TouchProcessor::new(),
            tracker,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the Winit event loop until the window is closed.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// terminates abnormally.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (macOS/iOS Winit requirement).
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Pivot for single-contact gestures: center of the surface.
    fn surface_pivot(&self) -> Pivot {
        Pivot::center_of(self.surface_size.width, self.surface_size.height)
    }

    /// Feeds a frame (if any) to the tracker.
    fn dispatch(&mut self, frame: Option<TouchFrame>) {
        let Some(frame) = frame else {
            return;
        };

        trace!(
            target: "platform::touch",
            "{:?} with {} contact(s)",
            frame.phase,
            frame.contacts.len()
        );

        let pivot = self.surface_pivot();
        let status = self.tracker.handle_event(frame.phase, &frame.contacts, pivot);
        if !status.is_handled() {
            trace!(target: "platform::touch", "Frame ignored by tracker");
        }
    }

    fn cancel_contacts(&mut self) {
        let frame = self.touch_processor.cancel_all();
        if frame.is_some() {
            debug!(target: "platform::touch", "Input lost, cancelling active contacts");
        }
        self.dispatch(frame);
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        debug!(target: "platform", "Surface resized to {}x{}", size.width, size.height);
        self.surface_size = size;
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn tracker(&self) -> &RotationTracker {
        &self.tracker
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when app becomes active (startup or mobile resume).
    ///
    /// Creates the window if it doesn't exist yet. On mobile, this may be
    /// called multiple times (suspend/resume cycle).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        match event_loop.create_window(self.attributes.clone()) {
            Ok(window) => {
                let size = window.inner_size();
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    size.width,
                    size.height,
                    window.scale_factor()
                );
                self.surface_size = size;
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                event_loop.exit();
            }
        }
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => self.resize(size),

            WindowEvent::Touch(touch) => {
                let point = Point::new(touch.location.x as f32, touch.location.y as f32);
                let frame = self.touch_processor.process_touch(touch.id, touch.phase, point);
                self.dispatch(frame);
            }

            WindowEvent::CursorMoved { position, .. } => {
                let frame = self
                    .touch_processor
                    .process_cursor_moved(position.x as f32, position.y as f32);
                self.dispatch(frame);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let frame = self.touch_processor.process_mouse_button(button, state);
                self.dispatch(frame);
            }

            // Releases for contacts down at this point may never arrive
            WindowEvent::Focused(false) | WindowEvent::Destroyed => self.cancel_contacts(),

            _ => {
                // Ignore: keyboard, focus, redraw, etc. (not needed for rotation)
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
