//! Page replacement simulation.
//!
//! Replays an ordered stream of page references against a fixed number of
//! frames and records, for every reference, whether it hit or faulted, what
//! was evicted and what the frames held afterwards.
//!
//! # Components
//! - [`FrameSet`] - The resident set, a fixed row of optional pages
//! - [`policy`] - FIFO, LRU and Optimal victim selection
//! - [`SimulationEngine`] - Drives one policy across a stream
//! - [`Runner`] - Runs several policies over the same input for comparison
//!
//! Nothing in here logs, does I/O or keeps state between runs.

mod cancel;
mod engine;
mod frame_set;
pub mod policy;
mod result;
mod runner;
mod stream;

pub use cancel::CancelToken;
pub use engine::{simulate, SimulationEngine};
pub use frame_set::FrameSet;
pub use policy::{Lookahead, PolicyKind, StepKind};
pub use result::{SimulationResult, SimulationStep};
pub use runner::{Comparison, Runner};
pub use stream::ReferenceStream;
