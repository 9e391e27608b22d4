//! Runner - compares several policies on the same input.

use std::collections::{BTreeMap, BTreeSet};
use std::hash::Hash;
use std::thread;

use parking_lot::Mutex;
use serde::Serialize;

use crate::common::{Error, Result};
use crate::sim::policy::{Lookahead, PolicyKind};
use crate::sim::{CancelToken, SimulationEngine, SimulationResult};

/// Results of several policies over one stream and capacity, keyed by policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison<P> {
    pub capacity: usize,
    pub references: usize,
    pub results: BTreeMap<PolicyKind, SimulationResult<P>>,
}

impl<P> Comparison<P> {
    pub fn get(&self, kind: PolicyKind) -> Option<&SimulationResult<P>> {
        self.results.get(&kind)
    }

    /// Fault count of `kind`, if it was run.
    pub fn faults(&self, kind: PolicyKind) -> Option<usize> {
        self.get(kind).map(|r| r.fault_count)
    }

    /// Results in policy order (FIFO, LRU, Optimal).
    pub fn iter(&self) -> impl Iterator<Item = &SimulationResult<P>> {
        self.results.values()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Highest fault count among the results.
    pub fn max_faults(&self) -> usize {
        self.iter().map(|r| r.fault_count).max().unwrap_or(0)
    }

    /// Policy with the fewest faults; the earlier policy wins a tie.
    pub fn best(&self) -> Option<PolicyKind> {
        self.iter()
            .min_by_key(|r| r.fault_count)
            .map(|r| r.policy)
    }
}

/// Runs a set of policies over one validated input.
///
/// Each policy gets its own [`SimulationEngine::run`]; runs share only the
/// read-only stream, so they can go sequentially or one thread each with the
/// same outcome.
///
/// # Usage
/// ```
/// use pagesim::sim::{PolicyKind, Runner};
///
/// let refs = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];
/// let runner = Runner::new(&refs, 3).unwrap();
/// let comparison = runner.run(&PolicyKind::ALL).unwrap();
///
/// assert_eq!(comparison.faults(PolicyKind::Fifo), Some(9));
/// assert_eq!(comparison.best(), Some(PolicyKind::Optimal));
/// ```
#[derive(Debug, Clone)]
pub struct Runner<'a, P> {
    engine: SimulationEngine<'a, P>,
}

impl<'a, P: Clone + Eq + Hash> Runner<'a, P> {
    /// Create a runner for `refs` with `capacity` frames.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is 0
    /// - `Error::EmptyStream` if `refs` is empty
    pub fn new(refs: &'a [P], capacity: usize) -> Result<Self> {
        Ok(Self {
            engine: SimulationEngine::new(refs, capacity)?,
        })
    }

    /// Choose how the Optimal policy looks ahead.
    pub fn with_lookahead(self, lookahead: Lookahead) -> Self {
        Self {
            engine: self.engine.with_lookahead(lookahead),
        }
    }

    pub fn engine(&self) -> &SimulationEngine<'a, P> {
        &self.engine
    }

    /// Run every policy in `policies` one after another.
    ///
    /// Duplicates are run once.
    ///
    /// # Errors
    /// - `Error::NoPolicySelected` if `policies` is empty
    pub fn run(&self, policies: &[PolicyKind]) -> Result<Comparison<P>> {
        let kinds = Self::select(policies)?;

        let results = kinds
            .into_iter()
            .map(|kind| Ok((kind, self.engine.run(kind)?)))
            .collect::<Result<BTreeMap<_, _>>>()?;

        Ok(self.comparison(results))
    }

    fn comparison(&self, results: BTreeMap<PolicyKind, SimulationResult<P>>) -> Comparison<P> {
        Comparison {
            capacity: self.engine.capacity(),
            references: self.engine.references().len(),
            results,
        }
    }

    fn select(policies: &[PolicyKind]) -> Result<BTreeSet<PolicyKind>> {
        if policies.is_empty() {
            return Err(Error::NoPolicySelected);
        }
        Ok(policies.iter().copied().collect())
    }
}

impl<'a, P: Clone + Eq + Hash + Send + Sync> Runner<'a, P> {
    /// Run every policy in `policies` on its own scoped thread.
    ///
    /// Produces the same [`Comparison`] as [`run`](Self::run).
    ///
    /// # Errors
    /// - `Error::NoPolicySelected` if `policies` is empty
    pub fn run_parallel(&self, policies: &[PolicyKind]) -> Result<Comparison<P>> {
        self.run_threads(policies, None)
    }

    /// Like [`run_parallel`](Self::run_parallel), checking `cancel` between
    /// steps of every run.
    ///
    /// # Errors
    /// - `Error::NoPolicySelected` if `policies` is empty
    /// - `Error::Cancelled` if any run observed the cancellation; no results
    ///   are returned in that case
    pub fn run_parallel_cancellable(
        &self,
        policies: &[PolicyKind],
        cancel: &CancelToken,
    ) -> Result<Comparison<P>> {
        self.run_threads(policies, Some(cancel))
    }

    fn run_threads(
        &self,
        policies: &[PolicyKind],
        cancel: Option<&CancelToken>,
    ) -> Result<Comparison<P>> {
        let kinds = Self::select(policies)?;
        let collected = Mutex::new(BTreeMap::new());

        thread::scope(|scope| {
            for kind in kinds {
                let engine = &self.engine;
                let collected = &collected;
                scope.spawn(move || {
                    let outcome = engine.replay(kind, cancel);
                    collected.lock().insert(kind, outcome);
                });
            }
        });

        let results = collected
            .into_inner()
            .into_iter()
            .map(|(kind, outcome)| outcome.map(|result| (kind, result)))
            .collect::<Result<BTreeMap<_, _>>>()?;

        Ok(self.comparison(results))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFS: [i32; 13] = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2];

    #[test]
    fn test_no_policy_selected() {
        let runner = Runner::new(&REFS, 3).unwrap();
        assert!(matches!(runner.run(&[]), Err(Error::NoPolicySelected)));
        assert!(matches!(
            runner.run_parallel(&[]),
            Err(Error::NoPolicySelected)
        ));
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            Runner::new(&REFS, 0),
            Err(Error::InvalidCapacity(0))
        ));
        assert!(matches!(
            Runner::<i32>::new(&[], 3),
            Err(Error::EmptyStream)
        ));
    }

    #[test]
    fn test_subset_and_duplicates() {
        let runner = Runner::new(&REFS, 3).unwrap();
        let comparison = runner
            .run(&[PolicyKind::Lru, PolicyKind::Lru, PolicyKind::Fifo])
            .unwrap();

        assert_eq!(comparison.len(), 2);
        assert!(comparison.get(PolicyKind::Optimal).is_none());
        assert_eq!(comparison.faults(PolicyKind::Lru), Some(9));
        assert_eq!(comparison.references, REFS.len());
        assert_eq!(comparison.capacity, 3);
    }

    #[test]
    fn test_results_in_policy_order() {
        let runner = Runner::new(&REFS, 3).unwrap();
        let comparison = runner
            .run(&[PolicyKind::Optimal, PolicyKind::Fifo, PolicyKind::Lru])
            .unwrap();

        let order: Vec<_> = comparison.iter().map(|r| r.policy).collect();
        assert_eq!(order, PolicyKind::ALL.to_vec());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let runner = Runner::new(&REFS, 3).unwrap();
        let sequential = runner.run(&PolicyKind::ALL).unwrap();
        let parallel = runner.run_parallel(&PolicyKind::ALL).unwrap();

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_parallel_cancelled() {
        let runner = Runner::new(&REFS, 3).unwrap();
        let token = CancelToken::new();
        token.cancel();

        let err = runner
            .run_parallel_cancellable(&PolicyKind::ALL, &token)
            .unwrap_err();
        assert!(matches!(err, Error::Cancelled));
    }

    #[test]
    fn test_max_and_best() {
        let runner = Runner::new(&REFS, 3).unwrap();
        let comparison = runner.run(&PolicyKind::ALL).unwrap();

        assert_eq!(comparison.max_faults(), 10);
        assert_eq!(comparison.best(), Some(PolicyKind::Optimal));
    }

    #[test]
    fn test_best_tie_prefers_earlier_policy() {
        // One frame: every policy faults on every change
        let runner = Runner::new(&[1, 2, 2, 1], 1).unwrap();
        let comparison = runner.run(&PolicyKind::ALL).unwrap();

        assert_eq!(comparison.best(), Some(PolicyKind::Fifo));
    }
}
