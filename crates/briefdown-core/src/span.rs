//! Source location tracking for AST nodes.
//!
//! Every node carries a `Span` giving its byte range in the input string.
//! Spans survive the parse, so a caller can always map a rendered block
//! back to the exact slice of model output it came from.

/// A byte range in the source text, `[start, end)`.
///
/// Offsets are bytes, not characters. The parser only ever cuts at ASCII
/// delimiters (newlines, fences, markers), so every span boundary is a
/// valid UTF-8 char boundary.
///
/// # Example
///
/// ```rust
/// use briefdown_core::span::Span;
///
/// let span = Span::new(4, 12);
/// assert_eq!(span.len(), 8);
/// assert!(span.contains(4));
/// assert!(!span.contains(12));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Starting byte offset (inclusive).
    pub start: u32,
    /// Ending byte offset (exclusive).
    pub end: u32,
}

impl Span {
    /// Create a new span from byte offsets.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Length of this span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Whether this span covers no bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether `offset` falls inside this span.
    #[inline]
    pub const fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Smallest span covering both `self` and `other`.
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}
