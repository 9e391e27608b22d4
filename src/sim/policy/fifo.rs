//! FIFO (First-In-First-Out) replacement policy.

use std::collections::VecDeque;

use crate::common::FrameId;

/// Evicts the slot that has held its current occupant longest.
///
/// Every placement appends the slot to the back of the queue, whether the
/// slot was empty or just had its occupant evicted. Hits never touch the
/// queue, which is what lets more frames produce more faults (Belady's
/// anomaly).
#[derive(Debug, Clone, Default)]
pub struct FifoPolicy {
    /// Slot ids in placement order (front = oldest).
    queue: VecDeque<FrameId>,
}

impl FifoPolicy {
    /// Create a FIFO policy for `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
        }
    }

    /// Record that a page was placed into `frame_id`.
    pub fn record_placement(&mut self, frame_id: FrameId) {
        self.queue.push_back(frame_id);
    }

    /// Select the victim slot: the front of the queue.
    ///
    /// The slot is removed from the queue; the following placement into it
    /// re-appends it at the back.
    pub fn evict(&mut self) -> Option<FrameId> {
        self.queue.pop_front()
    }
}
