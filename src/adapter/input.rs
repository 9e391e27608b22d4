//! Reference string parsing.
//!
//! Accepts anything a person might paste: `1 2 3`, `1,2,3`, `[1; 2; 3]`.
//! Every run of digits, optionally preceded by `-`, becomes one page in
//! order. Everything else is a separator.

use crate::common::config::{MAX_FRAMES, MIN_FRAMES};
use crate::common::{PageId, Result};
use crate::sim::ReferenceStream;

/// Extract page references from free-form text.
///
/// Numbers too large for `i64` are skipped with a warning.
///
/// # Example
/// ```
/// use pagesim::adapter::parse_references;
/// use pagesim::PageId;
///
/// let refs = parse_references("7, 0 ,1;x2 -3");
/// let ids: Vec<i64> = refs.iter().map(|p| p.0).collect();
/// assert_eq!(ids, vec![7, 0, 1, 2, -3]);
/// ```
pub fn parse_references(text: &str) -> Vec<PageId> {
    let bytes = text.as_bytes();
    let mut refs = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let start = i;
        if bytes[i] == b'-' && bytes.get(i + 1).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        if !bytes[i].is_ascii_digit() {
            i = start + 1;
            continue;
        }
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }

        // Token is ASCII, so slicing on these byte offsets is valid UTF-8
        let token = &text[start..i];
        match token.parse::<i64>() {
            Ok(id) => refs.push(PageId::new(id)),
            Err(e) => log::warn!("skipping reference {}: {}", token, e),
        }
    }

    refs
}

/// Parse `text` into a non-empty stream.
///
/// # Errors
/// - `Error::EmptyStream` if no number was found
pub fn parse_stream(text: &str) -> Result<ReferenceStream<PageId>> {
    ReferenceStream::new(parse_references(text))
}

/// Clamp a requested frame count into `MIN_FRAMES..=MAX_FRAMES`.
pub fn clamp_frames(requested: i64) -> usize {
    let clamped = requested.clamp(MIN_FRAMES as i64, MAX_FRAMES as i64);
    if clamped != requested {
        log::debug!("frame count {} clamped to {}", requested, clamped);
    }
    clamped as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;

    fn ids(text: &str) -> Vec<i64> {
        parse_references(text).into_iter().map(|p| p.0).collect()
    }

    #[test]
    fn test_space_and_comma_separated() {
        assert_eq!(ids("7 0 1 2 0 3"), vec![7, 0, 1, 2, 0, 3]);
        assert_eq!(ids("1,2,3,4,1,2,5"), vec![1, 2, 3, 4, 1, 2, 5]);
    }

    #[test]
    fn test_signed_and_embedded() {
        assert_eq!(ids("-4 x5y 6-7"), vec![-4, 5, 6, -7]);
        assert_eq!(ids("--8"), vec![-8]);
    }

    #[test]
    fn test_lone_minus_ignored() {
        assert_eq!(ids("- 1 -"), vec![1]);
    }

    #[test]
    fn test_multibyte_separators() {
        assert_eq!(ids("1 • 2 → 3"), vec![1, 2, 3]);
    }

    #[test]
    fn test_overflow_skipped() {
        assert_eq!(ids("1 99999999999999999999 2"), vec![1, 2]);
    }

    #[test]
    fn test_no_numbers() {
        assert!(ids("abc, def").is_empty());
        assert!(matches!(parse_stream("  "), Err(Error::EmptyStream)));
    }

    #[test]
    fn test_parse_stream() {
        let stream = parse_stream("1 2 1").unwrap();
        assert_eq!(stream.len(), 3);
    }

    #[test]
    fn test_clamp_frames() {
        assert_eq!(clamp_frames(0), 1);
        assert_eq!(clamp_frames(-5), 1);
        assert_eq!(clamp_frames(3), 3);
        assert_eq!(clamp_frames(500), 50);
    }
}
