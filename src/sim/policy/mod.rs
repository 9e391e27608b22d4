//! Replacement policies.
//!
//! Implements:
//! - FIFO - evict the slot filled longest ago
//! - LRU - evict the least recently referenced page
//! - Optimal - evict the page needed furthest in the future
//!
//! `Policy` closes over the three, owns the run's frame set and the
//! hit/fault contract they share; the variants only differ in bookkeeping
//! and victim choice.

mod fifo;
mod lru;
mod optimal;

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::{Error, FrameId, Result};
use crate::sim::FrameSet;

pub use optimal::{Lookahead, NextUseTable, NEVER};

use fifo::FifoPolicy;
use lru::LruPolicy;
use optimal::OptimalPolicy;

/// Which replacement policy to simulate.
///
/// Ordered FIFO, LRU, Optimal, which is also the order results are listed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PolicyKind {
    #[serde(rename = "FIFO")]
    Fifo,
    #[serde(rename = "LRU")]
    Lru,
    Optimal,
}

impl PolicyKind {
    /// Every policy, in display order.
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Fifo, PolicyKind::Lru, PolicyKind::Optimal];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::Optimal => "Optimal",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    /// Case-insensitive; accepts `opt` and `min` for Optimal.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" => Ok(PolicyKind::Fifo),
            "lru" => Ok(PolicyKind::Lru),
            "optimal" | "opt" | "min" => Ok(PolicyKind::Optimal),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

/// Classification of a single reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Page already resident.
    Hit,
    /// Page placed into an empty slot.
    CompulsoryFault,
    /// Page replaced a victim.
    CapacityFault,
}

impl StepKind {
    #[inline]
    pub fn is_fault(&self) -> bool {
        !matches!(self, StepKind::Hit)
    }
}

/// What one [`Policy::step`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StepOutcome<P> {
    pub kind: StepKind,
    /// Slot that holds the referenced page after the step.
    pub frame_id: FrameId,
    /// Page displaced by a capacity fault.
    pub evicted: Option<P>,
}

/// Per-variant bookkeeping and victim choice.
#[derive(Debug, Clone)]
enum Replacer<'a, P> {
    Fifo(FifoPolicy),
    Lru(LruPolicy<P>),
    Optimal(OptimalPolicy<'a, P>),
}

/// A replacement policy together with the frame set it manages.
///
/// Created fresh for each run and dropped with it; nothing is shared between
/// runs. The frame set is built here from the same capacity as the policy's
/// bookkeeping and only mutated through [`step`](Self::step).
#[derive(Debug, Clone)]
pub(crate) struct Policy<'a, P> {
    frames: FrameSet<P>,
    replacer: Replacer<'a, P>,
}

impl<'a, P: Clone + Eq + Hash> Policy<'a, P> {
    /// Create the policy `kind` for a run over `refs` with `capacity` slots.
    ///
    /// `lookahead` only matters for [`PolicyKind::Optimal`].
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    pub fn new(
        kind: PolicyKind,
        refs: &'a [P],
        capacity: usize,
        lookahead: Lookahead,
    ) -> Result<Self> {
        let frames = FrameSet::new(capacity)?;
        let replacer = match kind {
            PolicyKind::Fifo => Replacer::Fifo(FifoPolicy::new(capacity)),
            PolicyKind::Lru => Replacer::Lru(LruPolicy::new(capacity)),
            PolicyKind::Optimal => {
                Replacer::Optimal(OptimalPolicy::new(refs, capacity, lookahead))
            }
        };
        Ok(Self { frames, replacer })
    }

    /// Current residents.
    #[inline]
    pub fn frames(&self) -> &FrameSet<P> {
        &self.frames
    }

    /// Apply the reference to `page` at `time`.
    ///
    /// Hit if resident; otherwise fill the lowest empty slot; otherwise evict
    /// the policy's victim. Victim selection never runs while a slot is
    /// empty.
    ///
    /// # Errors
    /// - `Error::NoVictim` if the frame set is full and the policy has no
    ///   candidate
    pub fn step(&mut self, time: usize, page: &P) -> Result<StepOutcome<P>> {
        if let Some(frame_id) = self.frames.find(page) {
            self.record_hit(frame_id, page, time);
            return Ok(StepOutcome {
                kind: StepKind::Hit,
                frame_id,
                evicted: None,
            });
        }

        if let Some(frame_id) = self.frames.first_empty() {
            self.frames.replace(frame_id, page.clone());
            self.record_placement(frame_id, page, time);
            return Ok(StepOutcome {
                kind: StepKind::CompulsoryFault,
                frame_id,
                evicted: None,
            });
        }

        let frame_id = self.select_victim(time).ok_or(Error::NoVictim)?;
        let evicted = self.frames.replace(frame_id, page.clone());
        if let Some(old) = &evicted {
            self.record_eviction(old);
        }
        self.record_placement(frame_id, page, time);

        Ok(StepOutcome {
            kind: StepKind::CapacityFault,
            frame_id,
            evicted,
        })
    }

    fn record_hit(&mut self, frame_id: FrameId, page: &P, time: usize) {
        match &mut self.replacer {
            // Hits never reorder FIFO
            Replacer::Fifo(_) => {}
            Replacer::Lru(lru) => lru.record_access(page, time),
            Replacer::Optimal(opt) => opt.record_access(frame_id, time),
        }
    }

    fn record_placement(&mut self, frame_id: FrameId, page: &P, time: usize) {
        match &mut self.replacer {
            Replacer::Fifo(fifo) => fifo.record_placement(frame_id),
            Replacer::Lru(lru) => lru.record_access(page, time),
            Replacer::Optimal(opt) => opt.record_access(frame_id, time),
        }
    }

    fn record_eviction(&mut self, page: &P) {
        if let Replacer::Lru(lru) = &mut self.replacer {
            lru.remove(page);
        }
    }

    fn select_victim(&mut self, time: usize) -> Option<FrameId> {
        match &mut self.replacer {
            Replacer::Fifo(fifo) => fifo.evict(),
            Replacer::Lru(lru) => lru.victim(&self.frames),
            Replacer::Optimal(opt) => opt.victim(&self.frames, time),
        }
    }
}
