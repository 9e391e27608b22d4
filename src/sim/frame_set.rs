//! FrameSet - the resident set shared by every policy.
//!
//! A [`FrameSet`] is a fixed number of slots, each holding one page or
//! nothing. Slot positions carry no meaning beyond giving eviction a stable
//! identity, which is what makes tie-breaking deterministic.

use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::common::{Error, FrameId, Result};

/// Fixed-capacity ordered collection of optional pages.
///
/// # Invariant
/// No page occupies more than one slot. Slots are written only by the
/// policy that owns the set, and only after [`find`](Self::find) reports the
/// page is not resident.
///
/// `Clone` is a deep copy, so a cloned `FrameSet` is an independent snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameSet<P> {
    slots: Vec<Option<P>>,
}

impl<P: Clone + Eq + Hash> FrameSet<P> {
    /// Create a frame set with `capacity` empty slots.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self {
            slots: vec![None; capacity],
        })
    }

    /// Slot holding `page`, if it is resident.
    pub fn find(&self, page: &P) -> Option<FrameId> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref() == Some(page))
            .map(FrameId::new)
    }

    /// Lowest-indexed unoccupied slot.
    pub fn first_empty(&self) -> Option<FrameId> {
        self.slots.iter().position(Option::is_none).map(FrameId::new)
    }

    /// Put `page` into `frame_id`, returning the previous occupant.
    ///
    /// Only the run's own policy places pages, after [`find`](Self::find)
    /// reported `page` absent.
    ///
    /// # Panics
    /// Panics if `frame_id` is out of range.
    pub(crate) fn replace(&mut self, frame_id: FrameId, page: P) -> Option<P> {
        debug_assert!(
            !matches!(self.find(&page), Some(f) if f != frame_id),
            "page already resident in another slot"
        );
        self.slots[frame_id.0].replace(page)
    }
}

impl<P> FrameSet<P> {
    /// Number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Occupant of `frame_id`.
    #[inline]
    pub fn get(&self, frame_id: FrameId) -> Option<&P> {
        self.slots.get(frame_id.0).and_then(Option::as_ref)
    }

    /// Occupied slots in slot-index order.
    pub fn occupied(&self) -> impl Iterator<Item = (FrameId, &P)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|p| (FrameId::new(i), p)))
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// True if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// All slots in order, empty ones included.
    #[inline]
    pub fn as_slice(&self) -> &[Option<P>] {
        &self.slots
    }
}
