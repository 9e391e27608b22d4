//! Simulation output: one [`SimulationStep`] per reference, collected into a
//! [`SimulationResult`].

use std::fmt;

use serde::Serialize;

use crate::common::Result;
use crate::sim::policy::{PolicyKind, StepKind};
use crate::sim::FrameSet;

/// The state of a run right after one reference.
///
/// `frames` is a copy of the frame set, so later steps never change it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationStep<P> {
    /// Position in the reference stream.
    pub time: usize,
    /// Page referenced at `time`.
    pub page: P,
    pub hit: bool,
    pub kind: StepKind,
    /// Victim of a capacity fault.
    pub evicted: Option<P>,
    /// Frame contents at the end of the step.
    pub frames: FrameSet<P>,
}

/// Fault count and full trace of one policy over one stream.
///
/// # Example
/// ```
/// use pagesim::sim::{simulate, PolicyKind};
///
/// let result = simulate(PolicyKind::Fifo, &[1, 2, 1, 3], 2).unwrap();
/// assert_eq!(result.fault_count, 3);
/// assert_eq!(result.hit_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationResult<P> {
    pub policy: PolicyKind,
    pub capacity: usize,
    pub fault_count: usize,
    pub steps: Vec<SimulationStep<P>>,
}

impl<P> SimulationResult<P> {
    /// Number of references replayed.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// `len() - fault_count`.
    #[inline]
    pub fn hit_count(&self) -> usize {
        self.steps.len() - self.fault_count
    }

    /// Faults that filled an empty frame.
    pub fn compulsory_faults(&self) -> usize {
        self.count(StepKind::CompulsoryFault)
    }

    /// Faults that evicted a victim.
    pub fn evictions(&self) -> usize {
        self.count(StepKind::CapacityFault)
    }

    /// Hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.steps.is_empty() {
            0.0
        } else {
            self.hit_count() as f64 / self.steps.len() as f64
        }
    }

    fn count(&self, kind: StepKind) -> usize {
        self.steps.iter().filter(|step| step.kind == kind).count()
    }
}

impl<P: Serialize> SimulationResult<P> {
    /// CRC32 of the JSON encoding of the whole result.
    ///
    /// Two runs with identical output have identical checksums.
    pub fn checksum(&self) -> Result<u32> {
        let bytes = serde_json::to_vec(self)?;
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&bytes);
        Ok(hasher.finalize())
    }
}

impl<P> fmt::Display for SimulationResult<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {{ faults: {}, hits: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.policy,
            self.fault_count,
            self.hit_count(),
            self.evictions(),
            self.hit_rate() * 100.0
        )
    }
}
