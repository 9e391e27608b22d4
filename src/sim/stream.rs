//! Reference stream - the ordered page references a run replays.

use std::collections::HashSet;
use std::hash::Hash;

use serde::Serialize;

use crate::common::{Error, Result};

/// Ordered, non-empty sequence of page references.
///
/// Position `i` is time `i`. The stream is immutable once built; runs borrow
/// it as a slice.
///
/// # Example
/// ```
/// use pagesim::sim::ReferenceStream;
///
/// let stream = ReferenceStream::new(vec![1, 2, 1]).unwrap();
/// assert_eq!(stream.len(), 3);
/// assert_eq!(stream.distinct_pages(), 2);
/// assert!(ReferenceStream::<u32>::new(vec![]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReferenceStream<P> {
    refs: Vec<P>,
}

impl<P: Eq + Hash> ReferenceStream<P> {
    /// Wrap `refs`.
    ///
    /// # Errors
    /// - `Error::EmptyStream` if `refs` is empty
    pub fn new(refs: Vec<P>) -> Result<Self> {
        if refs.is_empty() {
            return Err(Error::EmptyStream);
        }
        Ok(Self { refs })
    }

    #[inline]
    pub fn as_slice(&self) -> &[P] {
        &self.refs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.refs.len()
    }

    /// True if the stream holds no references.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    /// Number of distinct pages, the floor for any policy's fault count.
    pub fn distinct_pages(&self) -> usize {
        self.refs.iter().collect::<HashSet<_>>().len()
    }
}

impl<P> AsRef<[P]> for ReferenceStream<P> {
    fn as_ref(&self) -> &[P] {
        &self.refs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(
            ReferenceStream::<i64>::new(Vec::new()),
            Err(Error::EmptyStream)
        ));
    }

    #[test]
    fn test_distinct_pages() {
        let stream = ReferenceStream::new(vec![7, 0, 1, 2, 0, 3, 0]).unwrap();
        assert_eq!(stream.distinct_pages(), 5);
        assert_eq!(stream.as_slice()[3], 2);
    }
}
