//! Simulation engine - replays a reference stream under one policy.

use std::hash::Hash;

use crate::common::{Error, Result};
use crate::sim::policy::{Lookahead, Policy, PolicyKind};
use crate::sim::{CancelToken, SimulationResult, SimulationStep};

/// Replays a borrowed reference stream against a fixed frame capacity.
///
/// Inputs are validated once in [`new`](Self::new); every run after that
/// builds its own frame set and policy state, so one engine can run any
/// number of policies, from any number of threads.
///
/// # Usage
/// ```
/// use pagesim::sim::{PolicyKind, SimulationEngine};
///
/// let refs = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2];
/// let engine = SimulationEngine::new(&refs, 3).unwrap();
///
/// assert_eq!(engine.run(PolicyKind::Fifo).unwrap().fault_count, 10);
/// assert_eq!(engine.run(PolicyKind::Lru).unwrap().fault_count, 9);
/// assert_eq!(engine.run(PolicyKind::Optimal).unwrap().fault_count, 7);
/// ```
#[derive(Debug)]
pub struct SimulationEngine<'a, P> {
    refs: &'a [P],
    capacity: usize,
    lookahead: Lookahead,
}

// Only holds a borrow, so copying never requires `P: Copy`.
impl<P> Clone for SimulationEngine<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for SimulationEngine<'_, P> {}

impl<'a, P: Clone + Eq + Hash> SimulationEngine<'a, P> {
    /// Create an engine for `refs` with `capacity` frames.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    /// - `Error::EmptyStream` if `refs` is empty
    pub fn new(refs: &'a [P], capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        if refs.is_empty() {
            return Err(Error::EmptyStream);
        }
        Ok(Self {
            refs,
            capacity,
            lookahead: Lookahead::default(),
        })
    }

    /// Choose how the Optimal policy looks ahead.
    pub fn with_lookahead(mut self, lookahead: Lookahead) -> Self {
        self.lookahead = lookahead;
        self
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn references(&self) -> &'a [P] {
        self.refs
    }

    #[inline]
    pub fn lookahead(&self) -> Lookahead {
        self.lookahead
    }

    /// Replay the whole stream under `kind`.
    ///
    /// Inputs were validated in `new`; an error here means a policy broke
    /// its own bookkeeping.
    pub fn run(&self, kind: PolicyKind) -> Result<SimulationResult<P>> {
        self.replay(kind, None)
    }

    /// Like [`run`](Self::run), but stops between steps once `cancel` fires.
    ///
    /// # Errors
    /// - `Error::Cancelled` if the token was cancelled before the last step.
    ///   The partial trace is dropped.
    pub fn run_cancellable(
        &self,
        kind: PolicyKind,
        cancel: &CancelToken,
    ) -> Result<SimulationResult<P>> {
        self.replay(kind, Some(cancel))
    }

    pub(crate) fn replay(
        &self,
        kind: PolicyKind,
        cancel: Option<&CancelToken>,
    ) -> Result<SimulationResult<P>> {
        let mut policy = Policy::new(kind, self.refs, self.capacity, self.lookahead)?;
        let mut steps = Vec::with_capacity(self.refs.len());
        let mut fault_count = 0;

        for (time, page) in self.refs.iter().enumerate() {
            if cancel.is_some_and(CancelToken::is_cancelled) {
                return Err(Error::Cancelled);
            }

            let outcome = policy.step(time, page)?;
            if outcome.kind.is_fault() {
                fault_count += 1;
            }

            steps.push(SimulationStep {
                time,
                page: page.clone(),
                hit: !outcome.kind.is_fault(),
                kind: outcome.kind,
                evicted: outcome.evicted,
                frames: policy.frames().clone(),
            });
        }

        Ok(SimulationResult {
            policy: kind,
            capacity: self.capacity,
            fault_count,
            steps,
        })
    }
}

/// Run a single policy over `refs` with `capacity` frames.
///
/// Shorthand for [`SimulationEngine::new`] followed by
/// [`SimulationEngine::run`].
pub fn simulate<P: Clone + Eq + Hash>(
    kind: PolicyKind,
    refs: &[P],
    capacity: usize,
) -> Result<SimulationResult<P>> {
    SimulationEngine::new(refs, capacity)?.run(kind)
}
