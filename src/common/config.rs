//! Configuration constants for pagesim.

use std::ops::RangeInclusive;

/// Frame count used when the caller does not pick one.
pub const DEFAULT_FRAMES: usize = 3;

/// Smallest frame count accepted from user input.
pub const MIN_FRAMES: usize = 1;

/// Largest frame count accepted from user input.
///
/// The simulation core only requires at least one frame. This bound is
/// applied by the input adapter so that rendered step tables stay readable.
pub const MAX_FRAMES: usize = 50;

/// Reference string shown when there is no saved input.
pub const DEFAULT_REFERENCES: &str = "7 0 1 2 0 3 0 4 2 3 0 3 2";

/// Length of a randomly generated reference string.
pub const RANDOM_LENGTH: RangeInclusive<usize> = 12..=21;

/// Page identifiers drawn for a random reference string.
pub const RANDOM_PAGES: RangeInclusive<i64> = 0..=9;

/// Frame count drawn for a random workload.
pub const RANDOM_FRAMES: RangeInclusive<usize> = 2..=7;

/// File name of the persisted last input.
pub const STATE_FILE_NAME: &str = "pagesim-last.json";
