//! Reference scenarios for the three replacement policies.
//!
//! Textbook reference strings with hand-checked traces.

use pagesim::adapter::parse_stream;
use pagesim::sim::{simulate, Lookahead, PolicyKind, Runner, SimulationEngine, StepKind};
use pagesim::{Error, PageId};

const TEXTBOOK: [i64; 13] = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2];
const BELADY: [i64; 12] = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];

fn pages(refs: &[i64]) -> Vec<PageId> {
    refs.iter().copied().map(PageId::new).collect()
}

fn victims(kind: PolicyKind, refs: &[i64], capacity: usize) -> Vec<Option<i64>> {
    simulate(kind, refs, capacity)
        .unwrap()
        .steps
        .iter()
        .map(|s| s.evicted)
        .collect()
}

// ============================================================================
// Textbook string, three frames
// ============================================================================

#[test]
fn test_textbook_fault_counts() {
    let refs = pages(&TEXTBOOK);
    let comparison = Runner::new(&refs, 3).unwrap().run(&PolicyKind::ALL).unwrap();

    assert_eq!(comparison.faults(PolicyKind::Fifo), Some(10));
    assert_eq!(comparison.faults(PolicyKind::Lru), Some(9));
    assert_eq!(comparison.faults(PolicyKind::Optimal), Some(7));
}

#[test]
fn test_textbook_first_three_compulsory() {
    for kind in PolicyKind::ALL {
        let result = simulate(kind, &TEXTBOOK, 3).unwrap();
        for step in &result.steps[..3] {
            assert_eq!(step.kind, StepKind::CompulsoryFault, "{} t={}", kind, step.time);
            assert!(!step.hit);
            assert_eq!(step.evicted, None);
        }
        assert_eq!(result.compulsory_faults(), 3);
        assert_eq!(
            result.steps[2].frames.as_slice(),
            &[Some(7), Some(0), Some(1)]
        );
    }
}

#[test]
fn test_textbook_fifo_victims() {
    assert_eq!(
        victims(PolicyKind::Fifo, &TEXTBOOK, 3),
        vec![
            None,
            None,
            None,
            Some(7),
            None,
            Some(0),
            Some(1),
            Some(2),
            Some(3),
            Some(0),
            Some(4),
            None,
            None,
        ]
    );
}

#[test]
fn test_textbook_lru_victims() {
    assert_eq!(
        victims(PolicyKind::Lru, &TEXTBOOK, 3),
        vec![
            None,
            None,
            None,
            Some(7),
            None,
            Some(1),
            None,
            Some(2),
            Some(3),
            Some(0),
            Some(4),
            None,
            None,
        ]
    );
}

#[test]
fn test_textbook_optimal_victims() {
    assert_eq!(
        victims(PolicyKind::Optimal, &TEXTBOOK, 3),
        vec![
            None,
            None,
            None,
            Some(7),
            None,
            Some(1),
            None,
            Some(0),
            None,
            None,
            Some(4),
            None,
            None,
        ]
    );
}

#[test]
fn test_textbook_final_frames() {
    let fifo = simulate(PolicyKind::Fifo, &TEXTBOOK, 3).unwrap();
    let lru = simulate(PolicyKind::Lru, &TEXTBOOK, 3).unwrap();
    let opt = simulate(PolicyKind::Optimal, &TEXTBOOK, 3).unwrap();

    assert_eq!(
        fifo.steps.last().unwrap().frames.as_slice(),
        &[Some(0), Some(2), Some(3)]
    );
    assert_eq!(
        lru.steps.last().unwrap().frames.as_slice(),
        &[Some(0), Some(3), Some(2)]
    );
    assert_eq!(
        opt.steps.last().unwrap().frames.as_slice(),
        &[Some(2), Some(0), Some(3)]
    );
}

// ============================================================================
// Belady's anomaly
// ============================================================================

#[test]
fn test_belady_anomaly_fifo() {
    let three = simulate(PolicyKind::Fifo, &BELADY, 3).unwrap();
    let four = simulate(PolicyKind::Fifo, &BELADY, 4).unwrap();

    assert_eq!(three.fault_count, 9);
    assert_eq!(four.fault_count, 10);
}

#[test]
fn test_belady_stack_policies_monotonic() {
    for kind in [PolicyKind::Lru, PolicyKind::Optimal] {
        let faults: Vec<usize> = (1..=BELADY.len())
            .map(|c| simulate(kind, &BELADY, c).unwrap().fault_count)
            .collect();
        for pair in faults.windows(2) {
            assert!(pair[1] <= pair[0], "{} faults {:?}", kind, faults);
        }
    }
}

// ============================================================================
// Input validation
// ============================================================================

#[test]
fn test_invalid_capacity() {
    for kind in PolicyKind::ALL {
        assert!(matches!(
            simulate(kind, &TEXTBOOK, 0),
            Err(Error::InvalidCapacity(0))
        ));
    }
}

#[test]
fn test_empty_stream() {
    assert!(matches!(
        simulate::<i64>(PolicyKind::Lru, &[], 3),
        Err(Error::EmptyStream)
    ));
    assert!(matches!(parse_stream("no numbers"), Err(Error::EmptyStream)));
}

#[test]
fn test_no_policy_selected() {
    let runner = Runner::new(&TEXTBOOK, 3).unwrap();
    assert!(matches!(runner.run(&[]), Err(Error::NoPolicySelected)));
}

// ============================================================================
// End to end from text
// ============================================================================

#[test]
fn test_parsed_text_matches_literal() {
    let stream = parse_stream("7,0,1,2,0,3,0,4,2,3,0,3,2").unwrap();
    let from_text = Runner::new(stream.as_slice(), 3)
        .unwrap()
        .run(&PolicyKind::ALL)
        .unwrap();

    for kind in PolicyKind::ALL {
        let literal = simulate(kind, &TEXTBOOK, 3).unwrap();
        assert_eq!(from_text.faults(kind), Some(literal.fault_count));
    }
}

#[test]
fn test_naive_lookahead_same_trace() {
    let refs = pages(&TEXTBOOK);
    let table = SimulationEngine::new(&refs, 3).unwrap();
    let scan = table.with_lookahead(Lookahead::Scan);

    let a = table.run(PolicyKind::Optimal).unwrap();
    let b = scan.run(PolicyKind::Optimal).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.checksum().unwrap(), b.checksum().unwrap());
}
