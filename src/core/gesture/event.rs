//=========================================================================
// Gesture Event Types
//
// Host-agnostic representation of a touch sequence as seen by the
// rotation tracker.
//
// Responsibilities:
// - Represent contact coordinates and the rotation pivot
// - Enumerate touch-sequence lifecycle phases
// - Report whether an event was consumed by the tracker
//
// Event Flow:
// ```text
// Host (winit touch / mouse)
//         ↓
//    GesturePhase + [Point] (this module)
//         ↓
//    RotationTracker
//         ↓
//    on_rotate(angle, pivot_x, pivot_y)
// ```
//
//=========================================================================

//=== Point ===============================================================

/// Screen coordinate of one active contact (pixels, top-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

//=== Pivot ===============================================================

/// Integer point the rotation is measured about and reported with.
///
/// For a single contact the host supplies it (conventionally the center of
/// the rotated surface). For two contacts it is their midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pivot {
    pub x: i32,
    pub y: i32,
}

impl Pivot {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Center of a surface of the given size (`width / 2`, `height / 2`).
    pub fn center_of(width: u32, height: u32) -> Self {
        Self {
            x: (width / 2) as i32,
            y: (height / 2) as i32,
        }
    }
}

//=== GesturePhase ========================================================

/// Lifecycle stage of a touch sequence.
///
/// ```text
/// Begin ──► Move* ──► End
///   │
///   └─► SecondaryBegin ──► Move* ──► SecondaryEnd ──► Move* ──► End
///
/// Cancel may arrive at any point and terminates the sequence.
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// First contact touched down.
    Begin,

    /// One or more active contacts moved.
    Move,

    /// Last contact lifted.
    End,

    /// A second contact joined an ongoing sequence.
    SecondaryBegin,

    /// A contact lifted while another remains down.
    SecondaryEnd,

    /// The source aborted the sequence.
    Cancel,
}

//=== EventStatus =========================================================

/// Outcome of feeding one event to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    /// One or two contacts were present and the event was processed.
    Handled,

    /// Contact count outside {1, 2}; state untouched.
    Ignored,
}

impl EventStatus {
    pub fn is_handled(self) -> bool {
        matches!(self, Self::Handled)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pivot_center_uses_integer_halves() {
        assert_eq!(Pivot::center_of(200, 200), Pivot::new(100, 100));
        assert_eq!(Pivot::center_of(801, 599), Pivot::new(400, 299));
    }

    #[test]
    fn point_from_tuple() {
        let p: Point = (1.5, -2.0).into();
        assert_eq!(p, Point::new(1.5, -2.0));
    }

    #[test]
    fn event_status_is_handled() {
        assert!(EventStatus::Handled.is_handled());
        assert!(!EventStatus::Ignored.is_handled());
    }
}
