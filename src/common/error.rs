//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// The first five variants come from the simulation core and are fatal to
/// the requested run: no partial result is ever returned alongside them.
/// The rest belong to the adapter layer.
#[derive(Debug, Error)]
pub enum Error {
    /// Frame capacity below one.
    #[error("Invalid capacity {0}: at least one frame is required")]
    InvalidCapacity(usize),

    /// The reference stream has no elements.
    #[error("Reference stream is empty")]
    EmptyStream,

    /// The runner was asked to compare zero policies.
    #[error("No replacement policy selected")]
    NoPolicySelected,

    /// A full frame set produced no eviction candidate.
    #[error("No victim available in a full frame set")]
    NoVictim,

    /// A cancellation token fired between two simulation steps.
    #[error("Simulation cancelled")]
    Cancelled,

    /// A policy name that is not one of fifo, lru or optimal.
    #[error("Unknown policy: {0}")]
    UnknownPolicy(String),

    /// I/O error while persisting or loading the last input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
