//! Persistence of the last input, and choosing the input of the next run.
//!
//! Keeps the most recent reference string and frame count in a small JSON
//! file so the next invocation without arguments replays it.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::adapter::Workload;
use crate::common::config::{DEFAULT_FRAMES, DEFAULT_REFERENCES};
use crate::common::Result;

/// The input of the last successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastInput {
    /// Reference string as the user typed it.
    pub references: String,
    pub frames: usize,
}

impl LastInput {
    pub fn new(references: impl Into<String>, frames: usize) -> Self {
        Self {
            references: references.into(),
            frames,
        }
    }

    /// Load from `path`.
    ///
    /// Returns `Ok(None)` if the file does not exist.
    ///
    /// # Errors
    /// - `Error::Io` if the file exists but cannot be read
    /// - `Error::Serialization` if it is not a valid saved input
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no saved input at {}", path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let input = serde_json::from_slice(&bytes)?;
        log::debug!("restored last input from {}", path.display());
        Ok(Some(input))
    }

    /// Save to `path`, replacing any previous file.
    ///
    /// Writes a sibling temp file and renames it over `path`, so a crash
    /// mid-write leaves the old input intact.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let tmp = path.with_extension("tmp");

        fs::write(&tmp, serde_json::to_vec_pretty(self)?)?;
        fs::rename(&tmp, path)?;

        log::debug!("saved last input to {}", path.display());
        Ok(())
    }
}

/// Where a run's reference string came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Random,
    Arguments,
    Saved,
    Demo,
}

/// What the caller asked for; every field is optional.
#[derive(Debug, Clone, Default)]
pub struct InputRequest<'a> {
    /// Reference string given on the command line.
    pub references: Option<&'a str>,
    /// Explicit frame count, before clamping.
    pub frames: Option<i64>,
    /// Freshly drawn random workload.
    pub random: Option<Workload>,
    /// Saved-input file to fall back on; `None` disables restoring.
    pub state: Option<&'a Path>,
}

/// Reference string and requested (unclamped) frame count of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInput {
    pub references: String,
    pub frames: i64,
    pub source: InputSource,
}

/// Pick the input of the next run.
///
/// Order: random workload, then the given string, then the saved last
/// input, then the built-in demo string. An explicit frame count always
/// wins over the one the source brings. An unreadable state file is logged
/// and skipped.
pub fn resolve_input(request: &InputRequest<'_>) -> ResolvedInput {
    let resolved = |references: String, frames: usize, source| ResolvedInput {
        references,
        frames: request.frames.unwrap_or(frames as i64),
        source,
    };

    if let Some(workload) = &request.random {
        return resolved(workload.reference_string(), workload.frames, InputSource::Random);
    }

    if let Some(references) = request.references {
        return resolved(references.to_string(), DEFAULT_FRAMES, InputSource::Arguments);
    }

    if let Some(path) = request.state {
        match LastInput::load(path) {
            Ok(Some(last)) => return resolved(last.references, last.frames, InputSource::Saved),
            Ok(None) => {}
            Err(e) => log::warn!("ignoring saved input at {}: {}", path.display(), e),
        }
    }

    resolved(DEFAULT_REFERENCES.to_string(), DEFAULT_FRAMES, InputSource::Demo)
}
