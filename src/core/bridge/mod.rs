//=========================================================================
// Rotation Bridge
//=========================================================================
//
// Hands rotation updates from the thread running the tracker (the UI /
// event-loop thread) to a consumer thread over a crossbeam channel.
//
// Architecture:
//   RotationTracker → channel_listener() → Sender ─┬─► Receiver → consumer
//                                                  │
//                                            full  ├─► oldest evicted, resent
//                                    disconnected  └─► warn!, update dropped
//
// The sending side never blocks: stalling the event loop would stall
// touch delivery itself. Updates carry absolute angles, so when the
// consumer falls behind the stale end of the queue is discarded and the
// newest update always gets through.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, Sender, TrySendError};
use log::{debug, warn};

//=== RotationUpdate ======================================================

/// One `on_rotate` notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RotationUpdate {
    /// Reported angle (offset and bounds already applied).
    pub angle: i32,
    pub pivot_x: i32,
    pub pivot_y: i32,
}

impl RotationUpdate {
    pub const fn new(angle: i32, pivot_x: i32, pivot_y: i32) -> Self {
        Self { angle, pivot_x, pivot_y }
    }
}

//=== channel_listener ====================================================

/// Builds a rotate listener forwarding every update into `sender`.
///
/// `evict` is a clone of the consumer's receiver. When the channel is
/// full the oldest queued update is pulled out through it so the newest
/// one always fits; the consumer may miss intermediate angles but never
/// the final one. A zero-capacity channel with nobody receiving, or a
/// disconnected one, drops the update with a warning. The caller is
/// never blocked.
///
/// # Examples
///
/// ```
/// use crossbeam_channel::bounded;
/// use rotate_gesture::core::bridge::{channel_listener, RotationUpdate};
/// use rotate_gesture::core::gesture::{Pivot, RotationTracker};
///
/// let (tx, rx) = bounded(1);
/// let mut tracker = RotationTracker::new();
/// tracker.set_on_rotate_listener(channel_listener(tx, rx.clone()));
///
/// tracker.accumulate(30, Pivot::new(10, 20));
/// tracker.accumulate(15, Pivot::new(10, 20));
/// assert_eq!(rx.try_recv(), Ok(RotationUpdate::new(45, 10, 20)));
/// ```
pub fn channel_listener(
    sender: Sender<RotationUpdate>,
    evict: Receiver<RotationUpdate>,
) -> impl FnMut(i32, i32, i32) + 'static {
    move |angle, pivot_x, pivot_y| {
        let mut update = RotationUpdate::new(angle, pivot_x, pivot_y);
        loop {
            match sender.try_send(update) {
                Ok(()) => return,
                Err(TrySendError::Full(pending)) => match evict.try_recv() {
                    Ok(stale) => {
                        debug!(target: "bridge", "Channel full, evicting {:?}", stale);
                        update = pending;
                    }
                    Err(_) => {
                        // Zero-capacity channel with no receiver waiting
                        warn!(target: "bridge", "Channel has no room, dropping {:?}", pending);
                        return;
                    }
                },
                Err(TrySendError::Disconnected(pending)) => {
                    warn!(target: "bridge", "Channel disconnected, dropping {:?}", pending);
                    return;
                }
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gesture::{Pivot, RotationTracker};
    use crossbeam_channel::{bounded, unbounded};

    #[test]
    fn forwards_updates_in_order() {
        let (tx, rx) = unbounded();
        let mut listener = channel_listener(tx, rx.clone());

        listener(10, 1, 2);
        listener(20, 3, 4);

        assert_eq!(rx.try_recv(), Ok(RotationUpdate::new(10, 1, 2)));
        assert_eq!(rx.try_recv(), Ok(RotationUpdate::new(20, 3, 4)));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn full_channel_evicts_oldest() {
        let (tx, rx) = bounded(1);
        let mut listener = channel_listener(tx, rx.clone());

        listener(10, 0, 0);
        listener(20, 0, 0); // evicts 10, must not block

        assert_eq!(rx.try_recv(), Ok(RotationUpdate::new(20, 0, 0)));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn consumer_behind_still_sees_final_angle() {
        let (tx, rx) = bounded(2);
        let mut tracker = RotationTracker::new();
        tracker.set_on_rotate_listener(channel_listener(tx, rx.clone()));

        for _ in 0..5 {
            tracker.accumulate(10, Pivot::new(0, 0));
        }

        let seen: Vec<i32> = rx.try_iter().map(|update| update.angle).collect();
        assert_eq!(seen, vec![40, 50]);
        assert_eq!(seen.last().copied(), Some(tracker.reported_angle()));
    }

    #[test]
    fn zero_capacity_channel_does_not_block() {
        let (tx, rx) = bounded(0);
        let mut listener = channel_listener(tx, rx.clone());

        listener(10, 0, 0);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn update_is_copy_and_debug() {
        let update = RotationUpdate::new(90, 5, 6);
        let copy = update;
        assert_eq!(update, copy);
        assert!(format!("{:?}", update).contains("angle: 90"));
    }
}
