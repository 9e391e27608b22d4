//! Optimal (Belady's MIN) replacement policy.
//!
//! Evicts the resident page whose next reference lies furthest in the
//! future. Needs the whole reference stream up front, so it is only usable
//! offline, where it gives the lower bound on faults for a capacity.
//!
//! Two ways to answer "when is this page used next":
//! - [`Lookahead::Scan`] rescans the remaining stream on every capacity
//!   fault, O(N) per decision.
//! - [`Lookahead::Table`] builds a [`NextUseTable`] with one backward pass
//!   and tracks the next use of each slot's occupant as it goes.
//!
//! Both pick the same victims.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::common::FrameId;
use crate::sim::FrameSet;

/// Next-use index of a page that is never referenced again.
pub const NEVER: usize = usize::MAX;

/// How the Optimal policy looks ahead in the stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lookahead {
    /// Rescan the remaining stream for every victim decision.
    Scan,
    /// Precompute next occurrences once per stream.
    #[default]
    Table,
}

/// For every position `i`, the next index `j > i` holding the same page.
///
/// # Example
/// ```
/// use pagesim::sim::policy::{NextUseTable, NEVER};
///
/// let table = NextUseTable::build(&[1, 2, 1, 3]);
/// assert_eq!(table.next_after(0), 2);
/// assert_eq!(table.next_after(1), NEVER);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextUseTable {
    next: Vec<usize>,
}

impl NextUseTable {
    /// Build the table in a single backward pass.
    pub fn build<P: Eq + Hash>(refs: &[P]) -> Self {
        let mut seen: HashMap<&P, usize> = HashMap::new();
        let mut next = vec![NEVER; refs.len()];

        for (i, page) in refs.iter().enumerate().rev() {
            if let Some(later) = seen.insert(page, i) {
                next[i] = later;
            }
        }

        Self { next }
    }

    /// Next index after `time` referencing the same page as `time`.
    #[inline]
    pub fn next_after(&self, time: usize) -> usize {
        self.next.get(time).copied().unwrap_or(NEVER)
    }

    pub fn len(&self) -> usize {
        self.next.len()
    }

    pub fn is_empty(&self) -> bool {
        self.next.is_empty()
    }
}

/// Belady's MIN over a borrowed reference stream.
#[derive(Debug, Clone)]
pub struct OptimalPolicy<'a, P> {
    refs: &'a [P],
    strategy: Strategy,
}

#[derive(Debug, Clone)]
enum Strategy {
    Scan,
    Table {
        table: NextUseTable,
        /// Next use of each slot's current occupant.
        slot_next: Vec<usize>,
    },
}

impl<'a, P: Clone + Eq + Hash> OptimalPolicy<'a, P> {
    /// Create an Optimal policy over `refs` for `capacity` slots.
    pub fn new(refs: &'a [P], capacity: usize, lookahead: Lookahead) -> Self {
        let strategy = match lookahead {
            Lookahead::Scan => Strategy::Scan,
            Lookahead::Table => Strategy::Table {
                table: NextUseTable::build(refs),
                slot_next: vec![NEVER; capacity],
            },
        };
        Self { refs, strategy }
    }

    /// Record that the page referenced at `time` now sits in `frame_id`.
    ///
    /// Called for hits and placements alike.
    pub fn record_access(&mut self, frame_id: FrameId, time: usize) {
        if let Strategy::Table { table, slot_next } = &mut self.strategy {
            if let Some(next) = slot_next.get_mut(frame_id.0) {
                *next = table.next_after(time);
            }
        }
    }

    /// Index of the first reference to `page` strictly after `time`.
    pub fn next_use(&self, frame_id: FrameId, page: &P, time: usize) -> usize {
        match &self.strategy {
            Strategy::Scan => self
                .refs
                .iter()
                .enumerate()
                .skip(time + 1)
                .find(|(_, r)| *r == page)
                .map_or(NEVER, |(i, _)| i),
            Strategy::Table { slot_next, .. } => {
                slot_next.get(frame_id.0).copied().unwrap_or(NEVER)
            }
        }
    }

    /// Select the victim slot at `time`.
    ///
    /// Largest next-use index wins; equal indices (including several pages
    /// that never recur) go to the lowest slot.
    pub fn victim(&self, frames: &FrameSet<P>, time: usize) -> Option<FrameId> {
        frames
            .occupied()
            .max_by_key(|&(frame_id, page)| (self.next_use(frame_id, page, time), Reverse(frame_id)))
            .map(|(frame_id, _)| frame_id)
    }
}
