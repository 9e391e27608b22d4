//! pagesim - a page replacement simulator comparing FIFO, LRU and Optimal.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Adapters (adapter/)                      │   │
//! │  │   input parsing · random workloads · report · store      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Runner (sim/runner)                      │   │
//! │  │      one run per requested policy, sequential or         │   │
//! │  │      one scoped thread each                              │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            SimulationEngine (sim/engine)                 │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │      Policies: FIFO | LRU | Optimal (MIN)       │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │          FrameSet + SimulationStep trace                 │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`sim`] - Frame set, replacement policies, engine and runner
//! - [`adapter`] - Text input, random workloads, rendering and persistence
//!
//! # Quick Start
//! ```
//! use pagesim::adapter::parse_stream;
//! use pagesim::sim::{PolicyKind, Runner};
//!
//! let stream = parse_stream("1 2 3 4 1 2 5 1 2 3 4 5").unwrap();
//!
//! let three = Runner::new(stream.as_slice(), 3).unwrap().run(&[PolicyKind::Fifo]).unwrap();
//! let four = Runner::new(stream.as_slice(), 4).unwrap().run(&[PolicyKind::Fifo]).unwrap();
//!
//! // Belady's anomaly: one more frame, one more fault
//! assert_eq!(three.faults(PolicyKind::Fifo), Some(9));
//! assert_eq!(four.faults(PolicyKind::Fifo), Some(10));
//! ```

pub mod adapter;
pub mod common;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, FrameId, PageId, Result};

pub use sim::{
    simulate, CancelToken, Comparison, FrameSet, Lookahead, PolicyKind, ReferenceStream, Runner,
    SimulationEngine, SimulationResult, SimulationStep, StepKind,
};
