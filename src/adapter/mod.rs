//! Adapters between text and the simulation core.
//!
//! The core takes clean typed input and returns typed results. This layer
//! does everything around that:
//! - [`input`] - Parse reference strings and clamp frame counts
//! - [`workload`] - Random demo workloads
//! - [`report`] - Summary bars, step tables and JSON
//! - [`store`] - Remember the last input and pick the next run's input

pub mod input;
pub mod report;
pub mod store;
pub mod workload;

pub use input::{clamp_frames, parse_references, parse_stream};
pub use report::{render_json, render_steps, render_summary};
pub use store::{resolve_input, InputRequest, InputSource, LastInput, ResolvedInput};
pub use workload::{random_workload, Workload};
