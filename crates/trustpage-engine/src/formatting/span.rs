/// A byte range `[start, end)` into the text being formatted.
///
/// Paragraphs and inline nodes store spans rather than copied text; slicing
/// the source with a span reproduces the exact characters it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Slices `s` with this span.
    ///
    /// `base` is the absolute offset at which `s` begins, so spans produced
    /// against a larger buffer can be resolved against a sub-slice of it.
    pub fn slice<'a>(self, s: &'a str, base: usize) -> &'a str {
        &s[self.start - base..self.end - base]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_span() {
        assert!(Span::new(4, 4).is_empty());
        assert!(Span::new(5, 4).is_empty());
        assert_eq!(Span::new(5, 4).len(), 0);
    }

    #[test]
    fn slice_with_base_offset() {
        let s = "world";
        assert_eq!(Span::new(6, 11).slice(s, 6), "world");
        assert_eq!(Span::new(7, 9).slice(s, 6), "or");
    }
}
