//=========================================================================
// Angle Geometry
//=========================================================================
//
// Pure functions turning contacts into (pivot, raw angle) measurements and
// applying the step filters used by the tracker.
//
// Pipeline per event:
//   contacts → measure() → raw angle
//   raw − last → jump_clamp() → step
//   accumulated + step → wrap_cycle() | clamp_range()
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::event::{Pivot, Point};

//=== Constants ===========================================================

/// Largest per-event delta accepted as genuine motion (degrees).
pub const JUMP_THRESHOLD: i32 = 45;

/// Fixed nudge substituted for a delta beyond [`JUMP_THRESHOLD`] (degrees).
pub const JUMP_STEP: i32 = 5;

/// One full turn (degrees).
pub const FULL_TURN: i32 = 360;

//=== Measurement =========================================================

/// Pivot and raw angle computed from one event's contacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub pivot: Pivot,
    pub raw_angle: i32,
}

/// Measures a contact set.
///
/// One contact is measured against `surface_pivot`; two contacts against
/// each other, pivoting on their midpoint. Any other count yields `None`.
pub fn measure(contacts: &[Point], surface_pivot: Pivot) -> Option<Measurement> {
    match contacts {
        [single] => Some(Measurement {
            pivot: surface_pivot,
            raw_angle: raw_angle(
                single.x - surface_pivot.x as f32,
                single.y - surface_pivot.y as f32,
            ),
        }),
        [first, second] => Some(Measurement {
            pivot: midpoint(*first, *second),
            raw_angle: raw_angle(first.x - second.x, first.y - second.y),
        }),
        _ => None,
    }
}

/// Midpoint of two contacts: the float sum is truncated before halving.
pub fn midpoint(a: Point, b: Point) -> Pivot {
    Pivot {
        x: (a.x + b.x) as i32 / 2,
        y: (a.y + b.y) as i32 / 2,
    }
}

/// `atan2(dy, dx)` in whole degrees, in (−180, 180].
///
/// Halves round towards positive infinity (−90.5 → −90).
pub fn raw_angle(dx: f32, dy: f32) -> i32 {
    let degrees = (dy as f64).atan2(dx as f64).to_degrees();
    (degrees + 0.5).floor() as i32
}

//=== Step Filters ========================================================

/// Suppresses spurious jumps from the ±180° seam of `atan2`.
///
/// A delta above the threshold becomes a fixed step the *opposite* way; this
/// is a heuristic, not a wrap-around correction.
pub fn jump_clamp(delta: i32) -> i32 {
    if delta > JUMP_THRESHOLD {
        -JUMP_STEP
    } else if delta < -JUMP_THRESHOLD {
        JUMP_STEP
    } else {
        delta
    }
}

/// Single-pass wrap used when cycling is enabled.
///
/// Values more than one turn out of range are only corrected by one turn,
/// and exactly 360 is left untouched.
pub fn wrap_cycle(angle: i32) -> i32 {
    if angle > FULL_TURN {
        angle - FULL_TURN
    } else if angle < 0 {
        angle + FULL_TURN
    } else {
        angle
    }
}

/// Clamp used when cycling is disabled.
///
/// Unlike `i32::clamp` this tolerates `start > end`: anything below `start`
/// pins to `start` first.
pub fn clamp_range(angle: i32, start: i32, end: i32) -> i32 {
    if angle < start {
        start
    } else if angle > end {
        end
    } else {
        angle
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // Raw Angle Tests
    //=====================================================================

    #[test]
    fn raw_angle_cardinal_directions() {
        assert_eq!(raw_angle(50.0, 0.0), 0);
        assert_eq!(raw_angle(0.0, 50.0), 90);
        assert_eq!(raw_angle(-100.0, 0.0), 180);
        assert_eq!(raw_angle(0.0, -50.0), -90);
    }

    #[test]
    fn raw_angle_rounds_to_nearest_degree() {
        // atan2(1, 2) ≈ 26.565°
        assert_eq!(raw_angle(2.0, 1.0), 27);
        // atan2(1, 3) ≈ 18.435°
        assert_eq!(raw_angle(3.0, 1.0), 18);
    }

    //=====================================================================
    // Measurement Tests
    //=====================================================================

    #[test]
    fn single_contact_measured_against_surface_pivot() {
        let m = measure(&[Point::new(150.0, 100.0)], Pivot::new(100, 100)).unwrap();
        assert_eq!(m.pivot, Pivot::new(100, 100));
        assert_eq!(m.raw_angle, 0);

        let m = measure(&[Point::new(100.0, 150.0)], Pivot::new(100, 100)).unwrap();
        assert_eq!(m.raw_angle, 90);
    }

    #[test]
    fn two_contacts_pivot_on_midpoint() {
        let contacts = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
        let m = measure(&contacts, Pivot::new(999, 999)).unwrap();
        assert_eq!(m.pivot, Pivot::new(50, 0));
        assert_eq!(m.raw_angle, 180);
    }

    #[test]
    fn two_contacts_order_flips_angle() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(100.0, 100.0);
        let forward = measure(&[a, b], Pivot::default()).unwrap();
        let reverse = measure(&[b, a], Pivot::default()).unwrap();
        assert_eq!(forward.raw_angle, -135);
        assert_eq!(reverse.raw_angle, 45);
        assert_eq!(forward.pivot, reverse.pivot);
    }

    #[test]
    fn midpoint_truncates_sum_before_halving() {
        assert_eq!(midpoint(Point::new(1.6, 0.0), Point::new(1.6, 0.0)), Pivot::new(1, 0));
        assert_eq!(midpoint(Point::new(10.0, 21.0), Point::new(11.0, 0.0)), Pivot::new(10, 10));
    }

    #[test]
    fn other_contact_counts_not_measured() {
        assert!(measure(&[], Pivot::default()).is_none());
        let three = [Point::default(); 3];
        assert!(measure(&three, Pivot::default()).is_none());
    }

    //=====================================================================
    // Step Filter Tests
    //=====================================================================

    #[test]
    fn jump_clamp_substitutes_fixed_step() {
        assert_eq!(jump_clamp(50), -5);
        assert_eq!(jump_clamp(-50), 5);
        assert_eq!(jump_clamp(30), 30);
    }

    #[test]
    fn jump_clamp_threshold_is_inclusive() {
        assert_eq!(jump_clamp(45), 45);
        assert_eq!(jump_clamp(-45), -45);
        assert_eq!(jump_clamp(46), -5);
        assert_eq!(jump_clamp(-46), 5);
    }

    #[test]
    fn wrap_cycle_single_pass() {
        assert_eq!(wrap_cycle(365), 5);
        assert_eq!(wrap_cycle(-5), 355);
        assert_eq!(wrap_cycle(360), 360);
        assert_eq!(wrap_cycle(0), 0);
        // Known limitation: only one turn is removed.
        assert_eq!(wrap_cycle(800), 440);
        assert_eq!(wrap_cycle(-400), -40);
    }

    #[test]
    fn clamp_range_bounds() {
        assert_eq!(clamp_range(50, 60, 300), 60);
        assert_eq!(clamp_range(310, 60, 300), 300);
        assert_eq!(clamp_range(120, 60, 300), 120);
    }

    #[test]
    fn clamp_range_inverted_does_not_panic() {
        assert_eq!(clamp_range(0, 200, 100), 200);
        assert_eq!(clamp_range(150, 200, 100), 200);
        assert_eq!(clamp_range(250, 200, 100), 100);
    }
}
