//=========================================================================
// Rotation Tracker
//=========================================================================
//
// Gesture-to-angle state machine.
//
// Architecture:
//   (phase, contacts) → measure() → phase dispatch → accumulate() → listener
//
// State survives across gestures: a new Begin only resets the delta
// baseline, never the accumulated angle.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, trace, warn};

//=== Internal Dependencies ===============================================

use super::angle::{jump_clamp, measure};
use super::config::RotationConfig;
use super::event::{EventStatus, GesturePhase, Pivot, Point};
use super::lift_off::{LiftOff, LiftOffHook, NoInertia};

//=== RotateListener ======================================================

/// Callback receiving `(angle, pivot_x, pivot_y)` on every Move.
///
/// `angle` already has the offset added and the bounds policy applied.
pub type RotateListener = Box<dyn FnMut(i32, i32, i32)>;

//=== RotationTrackerBuilder ==============================================

/// Builder for a configured [`RotationTracker`].
///
/// # Examples
///
/// ```
/// use rotate_gesture::core::gesture::RotationTracker;
///
/// let tracker = RotationTracker::builder()
///     .with_cycle(false)
///     .with_start_angle(60)
///     .with_end_angle(300)
///     .on_rotate(|angle, _pivot_x, _pivot_y| println!("rotate to {angle}"))
///     .build();
///
/// assert!(!tracker.config().cycle_enabled);
/// ```
pub struct RotationTrackerBuilder {
    config: RotationConfig,
    listener: Option<RotateListener>,
    lift_off_hook: Box<dyn LiftOffHook>,
}

impl RotationTrackerBuilder {
    /// Creates a builder with [`RotationConfig::default`].
    pub fn new() -> Self {
        Self {
            config: RotationConfig::default(),
            listener: None,
            lift_off_hook: Box::new(NoInertia),
        }
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: RotationConfig) -> Self {
        self.config = config;
        self
    }

    /// Reserved for inertial rotation; forwarded to the lift-off hook.
    pub fn with_inertia(mut self, inertia: bool) -> Self {
        self.config.inertia_enabled = inertia;
        self
    }

    /// Wrap around a full turn (`true`) or clamp to the range (`false`).
    pub fn with_cycle(mut self, cycle: bool) -> Self {
        self.config.cycle_enabled = cycle;
        self
    }

    pub fn with_offset_angle(mut self, offset_angle: i32) -> Self {
        self.config.offset_angle = offset_angle;
        self
    }

    pub fn with_start_angle(mut self, start_angle: i32) -> Self {
        self.config.start_angle = start_angle;
        self
    }

    pub fn with_end_angle(mut self, end_angle: i32) -> Self {
        self.config.end_angle = end_angle;
        self
    }

    pub fn with_lift_off_hook<H>(mut self, hook: H) -> Self
    where
        H: LiftOffHook + 'static,
    {
        self.lift_off_hook = Box::new(hook);
        self
    }

    /// Registers the rotate listener.
    pub fn on_rotate<F>(mut self, listener: F) -> Self
    where
        F: FnMut(i32, i32, i32) + 'static,
    {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn build(self) -> RotationTracker {
        warn_on_inverted_range(&self.config);
        RotationTracker {
            config: self.config,
            accumulated_angle: 0,
            last_raw_angle: 0,
            is_active_drag: false,
            listener: self.listener,
            lift_off_hook: self.lift_off_hook,
        }
    }
}

impl Default for RotationTrackerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== RotationTracker =====================================================

/// Converts a touch-event stream into an angle stream.
///
/// One instance per tracked surface. Events must be delivered sequentially;
/// the listener runs synchronously inside [`handle_event`](Self::handle_event).
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use rotate_gesture::core::gesture::{GesturePhase, Pivot, Point, RotationTracker};
///
/// let reported = Rc::new(Cell::new(None));
/// let sink = reported.clone();
///
/// let mut tracker = RotationTracker::new();
/// tracker.set_on_rotate_listener(move |angle, _, _| sink.set(Some(angle)));
///
/// let center = Pivot::new(100, 100);
/// tracker.handle_event(GesturePhase::Begin, &[Point::new(150.0, 100.0)], center);
/// tracker.handle_event(GesturePhase::Move, &[Point::new(150.0, 120.0)], center);
///
/// // atan2(20, 50) ≈ 22°
/// assert_eq!(reported.get(), Some(22));
/// ```
pub struct RotationTracker {
    //--- Configuration ----------------------------------------------------
    config: RotationConfig,

    //--- Gesture State ----------------------------------------------------
    accumulated_angle: i32,
    last_raw_angle: i32,
    is_active_drag: bool,

    //--- Outputs ----------------------------------------------------------
    listener: Option<RotateListener>,
    lift_off_hook: Box<dyn LiftOffHook>,
}

impl RotationTracker {
    //--- Construction -----------------------------------------------------

    /// Creates a tracker with default configuration and no listener.
    pub fn new() -> Self {
        RotationTrackerBuilder::new().build()
    }

    pub fn with_config(config: RotationConfig) -> Self {
        RotationTrackerBuilder::new().with_config(config).build()
    }

    pub fn builder() -> RotationTrackerBuilder {
        RotationTrackerBuilder::new()
    }

    //--- Configuration ----------------------------------------------------

    pub fn set_inertia(&mut self, inertia: bool) -> &mut Self {
        self.config.inertia_enabled = inertia;
        self
    }

    pub fn set_cycle(&mut self, cycle: bool) -> &mut Self {
        self.config.cycle_enabled = cycle;
        self
    }

    pub fn set_offset_angle(&mut self, offset_angle: i32) -> &mut Self {
        self.config.offset_angle = offset_angle;
        self
    }

    /// Takes effect at the next accumulation step.
    pub fn set_start_angle(&mut self, start_angle: i32) -> &mut Self {
        self.config.start_angle = start_angle;
        self
    }

    /// Takes effect at the next accumulation step.
    pub fn set_end_angle(&mut self, end_angle: i32) -> &mut Self {
        self.config.end_angle = end_angle;
        self
    }

    /// Replaces the whole configuration at once.
    pub fn set_config(&mut self, config: RotationConfig) -> &mut Self {
        warn_on_inverted_range(&config);
        self.config = config;
        self
    }

    pub fn set_on_rotate_listener<F>(&mut self, listener: F) -> &mut Self
    where
        F: FnMut(i32, i32, i32) + 'static,
    {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Drops the current listener, if any.
    pub fn clear_on_rotate_listener(&mut self) -> &mut Self {
        self.listener = None;
        self
    }

    pub fn set_lift_off_hook<H>(&mut self, hook: H) -> &mut Self
    where
        H: LiftOffHook + 'static,
    {
        self.lift_off_hook = Box::new(hook);
        self
    }

    //--- Event Ingestion --------------------------------------------------

    /// Feeds one touch-sequence event.
    ///
    /// `surface_pivot` is used only when a single contact is active; two
    /// contacts pivot on their own midpoint. Contact counts other than one
    /// or two are ignored without touching state.
    pub fn handle_event(
        &mut self,
        phase: GesturePhase,
        contacts: &[Point],
        surface_pivot: Pivot,
    ) -> EventStatus {
        let Some(measurement) = measure(contacts, surface_pivot) else {
            trace!(
                target: "gesture",
                "Ignoring {:?} with {} contacts",
                phase,
                contacts.len()
            );
            return EventStatus::Ignored;
        };

        let raw_angle = measurement.raw_angle;
        let pivot = measurement.pivot;

        match phase {
            GesturePhase::Begin | GesturePhase::SecondaryBegin => {
                debug!(target: "gesture", "{:?}: baseline {}°", phase, raw_angle);
                self.last_raw_angle = raw_angle;
                self.is_active_drag = false;
            }

            GesturePhase::End => {
                debug!(target: "gesture", "End at {}°", self.accumulated_angle);
                self.is_active_drag = false;
            }

            GesturePhase::SecondaryEnd | GesturePhase::Cancel => {
                debug!(target: "gesture", "{:?}: baseline {}°", phase, raw_angle);
                self.is_active_drag = false;
                self.lift_off(pivot);
                self.last_raw_angle = raw_angle;
            }

            GesturePhase::Move => {
                self.is_active_drag = true;
                let delta = raw_angle - self.last_raw_angle;
                let step = jump_clamp(delta);
                if step != delta {
                    trace!(target: "gesture", "Jump of {}° replaced by {}°", delta, step);
                }
                self.accumulate(step, pivot);
                self.last_raw_angle = raw_angle;
            }
        }

        EventStatus::Handled
    }

    /// Adds `delta` degrees, applies the bounds policy and notifies the
    /// listener with the offset value.
    ///
    /// Wrapping is single-pass: a delta that overshoots by more than a full
    /// turn is only corrected by one turn.
    pub fn accumulate(&mut self, delta: i32, pivot: Pivot) {
        let unbounded = self.accumulated_angle.saturating_add(delta);
        self.accumulated_angle = self.config.bound(unbounded);

        let angle = self.config.report(self.accumulated_angle);
        trace!(
            target: "gesture",
            "Rotate {:+}° → {}° (reported {}°) about ({}, {})",
            delta,
            self.accumulated_angle,
            angle,
            pivot.x,
            pivot.y
        );

        if let Some(listener) = self.listener.as_mut() {
            listener(angle, pivot.x, pivot.y);
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn config(&self) -> &RotationConfig {
        &self.config
    }

    /// Running value before offset.
    pub fn accumulated_angle(&self) -> i32 {
        self.accumulated_angle
    }

    /// Value the listener would receive right now.
    pub fn reported_angle(&self) -> i32 {
        self.config.report(self.accumulated_angle)
    }

    pub fn last_raw_angle(&self) -> i32 {
        self.last_raw_angle
    }

    /// `true` between a Move and the next non-Move event.
    pub fn is_active_drag(&self) -> bool {
        self.is_active_drag
    }

    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    //--- Internal Helpers -------------------------------------------------

    fn lift_off(&mut self, pivot: Pivot) {
        let lift_off = LiftOff {
            pivot,
            accumulated_angle: self.accumulated_angle,
            inertia_enabled: self.config.inertia_enabled,
        };
        self.lift_off_hook.on_lift_off(&lift_off);
    }
}

//--- Trait Implementations -----------------------------------------------

impl Default for RotationTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RotationTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotationTracker")
            .field("config", &self.config)
            .field("accumulated_angle", &self.accumulated_angle)
            .field("last_raw_angle", &self.last_raw_angle)
            .field("is_active_drag", &self.is_active_drag)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

fn warn_on_inverted_range(config: &RotationConfig) {
    if config.has_inverted_range() {
        warn!(
            target: "gesture",
            "Start angle {}° exceeds end angle {}°; output will pin to the start angle",
            config.start_angle,
            config.end_angle
        );
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
