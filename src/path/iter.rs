//! A forward-only cursor over path segments.

use crate::error::Error;

/// A cursor over the raw segments of a split path.
///
/// The cursor starts on the first segment. [`value`](SegmentIter::value)
/// returns the segment under the cursor and fails once the cursor has
/// moved past the last one; [`advance`](SegmentIter::advance) always
/// succeeds, so walking off the end is legal and only later `value`
/// calls report it.
///
/// # Example
///
/// ```
/// use nestmap::path::{split, SegmentIter};
///
/// let segments = split("/a/b");
/// let mut iter = SegmentIter::new(&segments);
///
/// assert_eq!(iter.value().unwrap(), "a");
/// assert!(iter.has_next());
/// iter.advance();
///
/// assert_eq!(iter.value().unwrap(), "b");
/// assert!(!iter.has_next());
/// iter.advance();
///
/// assert!(iter.value().is_err());
/// ```
#[derive(Debug)]
pub struct SegmentIter<'a> {
    segments: &'a [String],
    position: usize,
}

impl<'a> SegmentIter<'a> {
    /// Creates a cursor positioned on the first segment.
    pub fn new(segments: &'a [String]) -> Self {
        Self {
            segments,
            position: 0,
        }
    }

    /// The segment under the cursor.
    ///
    /// Fails with an out-of-range error when the cursor has advanced
    /// past the last segment, or when the path had no segments at all.
    pub fn value(&self) -> Result<&'a str, Error> {
        match self.segments.get(self.position) {
            Some(segment) => Ok(segment),
            None => Err(Error::OutOfRange {
                index: self.position,
                len: self.segments.len(),
            }),
        }
    }

    /// Whether a further segment exists beyond the current one.
    pub fn has_next(&self) -> bool {
        self.position + 1 < self.segments.len()
    }

    /// Moves the cursor forward by one segment.
    pub fn advance(&mut self) {
        self.position += 1;
    }

    /// The index of the segment the cursor is on.
    pub fn position(&self) -> usize {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_walk_three_segments() {
        let segs = segments(&["A", "B", "C"]);
        let mut iter = SegmentIter::new(&segs);

        assert_eq!(iter.value().unwrap(), "A");
        assert!(iter.has_next());
        iter.advance();

        assert_eq!(iter.value().unwrap(), "B");
        assert!(iter.has_next());
        iter.advance();

        assert_eq!(iter.value().unwrap(), "C");
        assert!(!iter.has_next());
        iter.advance();

        assert!(matches!(iter.value(), Err(Error::OutOfRange { .. })));
        assert!(!iter.has_next());
    }

    #[test]
    fn test_advance_past_end_is_legal() {
        let segs = segments(&["A"]);
        let mut iter = SegmentIter::new(&segs);
        iter.advance();
        iter.advance();
        iter.advance();
        assert!(iter.value().is_err());
    }

    #[test]
    fn test_empty_path_has_no_value() {
        let segs: Vec<String> = vec![];
        let iter = SegmentIter::new(&segs);
        assert!(!iter.has_next());
        assert_eq!(
            iter.value(),
            Err(Error::OutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_single_segment() {
        let segs = segments(&["only"]);
        let iter = SegmentIter::new(&segs);
        assert_eq!(iter.value().unwrap(), "only");
        assert!(!iter.has_next());
        assert_eq!(iter.position(), 0);
    }
}
