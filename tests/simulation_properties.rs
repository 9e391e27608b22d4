//! Property tests over random reference streams.

use std::collections::HashSet;

use pagesim::sim::{simulate, Lookahead, PolicyKind, Runner, SimulationEngine, StepKind};
use proptest::prelude::*;

/// Streams over a small page universe so hits and evictions both happen.
fn stream() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..8, 1..64)
}

fn policy() -> impl Strategy<Value = PolicyKind> {
    prop::sample::select(PolicyKind::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_faults_plus_hits_is_length(refs in stream(), capacity in 1usize..8, kind in policy()) {
        let result = simulate(kind, &refs, capacity).unwrap();

        prop_assert_eq!(result.steps.len(), refs.len());
        prop_assert_eq!(result.fault_count + result.hit_count(), refs.len());
        let hits = result.steps.iter().filter(|s| s.hit).count();
        prop_assert_eq!(hits, result.hit_count());
    }

    #[test]
    fn prop_faults_at_least_distinct_pages(refs in stream(), capacity in 1usize..8, kind in policy()) {
        let distinct = refs.iter().collect::<HashSet<_>>().len();
        let result = simulate(kind, &refs, capacity).unwrap();

        prop_assert!(result.fault_count >= distinct);
    }

    #[test]
    fn prop_optimal_is_lower_bound(refs in stream(), capacity in 1usize..8) {
        let comparison = Runner::new(&refs, capacity).unwrap().run(&PolicyKind::ALL).unwrap();
        let opt = comparison.faults(PolicyKind::Optimal).unwrap();

        prop_assert!(opt <= comparison.faults(PolicyKind::Fifo).unwrap());
        prop_assert!(opt <= comparison.faults(PolicyKind::Lru).unwrap());
    }

    #[test]
    fn prop_single_frame_faults_on_change(refs in stream()) {
        let expected: Vec<bool> = refs
            .iter()
            .enumerate()
            .map(|(t, page)| t == 0 || refs[t - 1] != *page)
            .collect();

        for kind in PolicyKind::ALL {
            let result = simulate(kind, &refs, 1).unwrap();
            let faults: Vec<bool> = result.steps.iter().map(|s| !s.hit).collect();
            prop_assert_eq!(&faults, &expected);
        }
    }

    #[test]
    fn prop_lru_and_optimal_monotonic(refs in stream()) {
        for kind in [PolicyKind::Lru, PolicyKind::Optimal] {
            let mut previous = usize::MAX;
            for capacity in 1..=refs.len() {
                let faults = simulate(kind, &refs, capacity).unwrap().fault_count;
                prop_assert!(faults <= previous, "{} rose at capacity {}", kind, capacity);
                previous = faults;
            }
        }
    }

    #[test]
    fn prop_replay_is_identical(refs in stream(), capacity in 1usize..8, kind in policy()) {
        let a = simulate(kind, &refs, capacity).unwrap();
        let b = simulate(kind, &refs, capacity).unwrap();

        prop_assert_eq!(a.checksum().unwrap(), b.checksum().unwrap());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_lookahead_strategies_identical(refs in stream(), capacity in 1usize..8) {
        let table = SimulationEngine::new(&refs, capacity).unwrap();
        let scan = table.with_lookahead(Lookahead::Scan);

        prop_assert_eq!(
            table.run(PolicyKind::Optimal).unwrap(),
            scan.run(PolicyKind::Optimal).unwrap()
        );
    }

    #[test]
    fn prop_parallel_matches_sequential(refs in stream(), capacity in 1usize..8) {
        let runner = Runner::new(&refs, capacity).unwrap();

        prop_assert_eq!(
            runner.run(&PolicyKind::ALL).unwrap(),
            runner.run_parallel(&PolicyKind::ALL).unwrap()
        );
    }

    #[test]
    fn prop_frames_never_hold_duplicates(refs in stream(), capacity in 1usize..8, kind in policy()) {
        let result = simulate(kind, &refs, capacity).unwrap();

        for step in &result.steps {
            let resident: Vec<_> = step.frames.occupied().map(|(_, p)| *p).collect();
            let unique: HashSet<_> = resident.iter().collect();
            prop_assert_eq!(unique.len(), resident.len());
            prop_assert!(resident.contains(&step.page));
        }
    }

    #[test]
    fn prop_evictions_only_when_full(refs in stream(), capacity in 1usize..8, kind in policy()) {
        let result = simulate(kind, &refs, capacity).unwrap();

        let mut previous_len = 0;
        for step in &result.steps {
            match step.kind {
                StepKind::CapacityFault => {
                    prop_assert_eq!(previous_len, capacity);
                    prop_assert!(step.evicted.is_some());
                }
                StepKind::CompulsoryFault => {
                    prop_assert!(previous_len < capacity);
                    prop_assert!(step.evicted.is_none());
                }
                StepKind::Hit => prop_assert!(step.evicted.is_none()),
            }
            previous_len = step.frames.len();
        }
    }
}
