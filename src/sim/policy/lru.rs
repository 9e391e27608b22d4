//! LRU (Least Recently Used) replacement policy.

use std::collections::HashMap;
use std::hash::Hash;

use crate::common::FrameId;
use crate::sim::FrameSet;

/// Evicts the resident page whose most recent reference is oldest.
///
/// Keeps a map from resident page to the time index of its last reference.
/// Entries are written on every hit and every placement and removed when
/// the page is evicted.
#[derive(Debug, Clone)]
pub struct LruPolicy<P> {
    last_used: HashMap<P, usize>,
}

impl<P: Clone + Eq + Hash> LruPolicy<P> {
    /// Create an LRU policy for `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            last_used: HashMap::with_capacity(capacity),
        }
    }

    /// Record a reference to `page` at `time` (hit or placement).
    pub fn record_access(&mut self, page: &P, time: usize) {
        self.last_used.insert(page.clone(), time);
    }

    /// Forget an evicted page.
    pub fn remove(&mut self, page: &P) {
        self.last_used.remove(page);
    }

    /// Last recorded reference time of `page`.
    pub fn last_used(&self, page: &P) -> Option<usize> {
        self.last_used.get(page).copied()
    }

    /// Select the victim slot.
    ///
    /// Smallest last-used time wins; equal times go to the lowest slot. A
    /// resident page without an entry counts as older than any recorded one.
    pub fn victim(&self, frames: &FrameSet<P>) -> Option<FrameId> {
        frames
            .occupied()
            .min_by_key(|&(frame_id, page)| (self.last_used(page), frame_id))
            .map(|(frame_id, _)| frame_id)
    }
}
