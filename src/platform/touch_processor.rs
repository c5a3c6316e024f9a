//=========================================================================
// Touch Processor
//=========================================================================
//
// Converts per-finger Winit touch events (and left-button mouse drags)
// into whole-gesture frames for the rotation tracker.
//
// Architecture:
//   Winit Touch / Mouse → TouchProcessor → TouchFrame { phase, contacts }
//
// Winit reports each finger separately; the tracker wants one event per
// change carrying every active contact. The processor keeps the active
// set and picks the sequence phase from its size:
//
//   Started   → Begin (first contact) | SecondaryBegin (others)
//   Moved     → Move
//   Ended     → End (last contact)    | SecondaryEnd (others)
//   Cancelled → Cancel, whole set cleared
//   cancel_all (focus lost / window destroyed) → Cancel, whole set cleared
//
// Ended and Cancelled frames still include the leaving contact. Events
// for ids that are not down are filtered (returns None).
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::event::{ElementState, MouseButton, TouchPhase};

//=== Internal Dependencies ===============================================

use super::contact_buffer::ContactBuffer;
use crate::core::gesture::{GesturePhase, Point};

//=== Constants ===========================================================

/// Touch id reserved for the emulated mouse contact.
pub(crate) const MOUSE_CONTACT_ID: u64 = u64::MAX;

//=== TouchFrame ==========================================================

/// One tracker event: phase plus every contact in touch-down order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TouchFrame {
    pub phase: GesturePhase,
    pub contacts: Vec<Point>,
}

//=== TouchProcessor ======================================================

/// Aggregates per-finger events into gesture frames.
pub(crate) struct TouchProcessor {
    contacts: ContactBuffer,
    cursor: Point,
}

impl TouchProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self {
            contacts: ContactBuffer::new(),
            cursor: Point::default(),
        }
    }

    //--- Touch Processing -------------------------------------------------

    /// Converts one finger's event into a frame (filters unknown ids).
    pub(crate) fn process_touch(
        &mut self,
        id: u64,
        phase: TouchPhase,
        point: Point,
    ) -> Option<TouchFrame> {
        match phase {
            TouchPhase::Started => {
                if self.contacts.contains(id) {
                    // Repeated start for a finger already down
                    self.contacts.update(id, point);
                    return Some(self.frame(GesturePhase::Move));
                }
                self.contacts.insert(id, point);
                let phase = if self.contacts.len() == 1 {
                    GesturePhase::Begin
                } else {
                    GesturePhase::SecondaryBegin
                };
                Some(self.frame(phase))
            }

            TouchPhase::Moved => {
                if !self.contacts.update(id, point) {
                    return None;
                }
                Some(self.frame(GesturePhase::Move))
            }

            TouchPhase::Ended => {
                if !self.contacts.update(id, point) {
                    return None;
                }
                let phase = if self.contacts.len() == 1 {
                    GesturePhase::End
                } else {
                    GesturePhase::SecondaryEnd
                };
                let frame = self.frame(phase);
                self.contacts.remove(id);
                Some(frame)
            }

            TouchPhase::Cancelled => {
                if !self.contacts.update(id, point) {
                    return None;
                }
                let frame = self.frame(GesturePhase::Cancel);
                self.contacts.clear();
                Some(frame)
            }
        }
    }

    /// Abandons every active contact, e.g. when focus is lost and the
    /// matching releases will never arrive. `None` if nothing is down.
    pub(crate) fn cancel_all(&mut self) -> Option<TouchFrame> {
        if self.contacts.is_empty() {
            return None;
        }
        let frame = self.frame(GesturePhase::Cancel);
        self.contacts.clear();
        Some(frame)
    }

    //--- Mouse Emulation --------------------------------------------------

    /// Left button press/release acts as a single touch at the cursor.
    pub(crate) fn process_mouse_button(
        &mut self,
        button: MouseButton,
        state: ElementState,
    ) -> Option<TouchFrame> {
        if button != MouseButton::Left {
            return None;
        }

        let phase = match state {
            ElementState::Pressed => TouchPhase::Started,
            ElementState::Released => TouchPhase::Ended,
        };
        self.process_touch(MOUSE_CONTACT_ID, phase, self.cursor)
    }

    /// Tracks the cursor; produces a Move only while the left button is held.
    pub(crate) fn process_cursor_moved(&mut self, x: f32, y: f32) -> Option<TouchFrame> {
        self.cursor = Point::new(x, y);
        if !self.contacts.contains(MOUSE_CONTACT_ID) {
            return None;
        }
        self.process_touch(MOUSE_CONTACT_ID, TouchPhase::Moved, self.cursor)
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn active_contacts(&self) -> usize {
        self.contacts.len()
    }

    //--- Internal Helpers -------------------------------------------------

    fn frame(&self, phase: GesturePhase) -> TouchFrame {
        TouchFrame {
            phase,
            contacts: self.contacts.points(),
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
