//! Random demo workloads.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::common::config::{RANDOM_FRAMES, RANDOM_LENGTH, RANDOM_PAGES};
use crate::common::PageId;

/// A reference string plus the frame count to replay it with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    pub references: Vec<PageId>,
    pub frames: usize,
}

impl Workload {
    /// Space-separated reference string, the form the parser reads back.
    pub fn reference_string(&self) -> String {
        self.references
            .iter()
            .map(PageId::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Draw a workload small enough to read as a step table.
///
/// Pass a seeded `StdRng` for reproducible output.
///
/// # Example
/// ```
/// use pagesim::adapter::random_workload;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let a = random_workload(&mut StdRng::seed_from_u64(7));
/// let b = random_workload(&mut StdRng::seed_from_u64(7));
/// assert_eq!(a, b);
/// ```
pub fn random_workload<R: Rng>(rng: &mut R) -> Workload {
    let len = rng.gen_range(RANDOM_LENGTH);
    let references = (0..len)
        .map(|_| PageId::new(rng.gen_range(RANDOM_PAGES)))
        .collect();
    let frames = rng.gen_range(RANDOM_FRAMES);

    Workload { references, frames }
}
