//! Line-based lexer over one prose region.
//!
//! The lexer splits a prose region into lines and groups them into
//! blank-line-delimited chunks for the block parser. It uses `memchr` for
//! newline detection (SIMD on supported platforms).
//!
//! Regions are slices of a larger document, so the lexer carries the
//! region's absolute byte offset and every `Line` span is absolute in the
//! full input.

use crate::span::Span;
use memchr::memchr;

/// A single line from the region with its absolute source span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The line text (without trailing newline).
    pub text: &'a str,
    /// Byte span in the original full input.
    pub span: Span,
}

impl<'a> Line<'a> {
    /// Check if this line contains only whitespace.
    #[inline(always)]
    pub fn is_blank(&self) -> bool {
        self.text.bytes().all(|b| b == b' ' || b == b'\t')
    }

    /// Get the line text with leading/trailing whitespace removed.
    #[inline(always)]
    pub fn trimmed(&self) -> &'a str {
        self.text.trim()
    }

    /// Absolute offset of the first non-whitespace byte.
    ///
    /// This is where inline spans inside the trimmed text begin.
    #[inline(always)]
    pub fn trimmed_start(&self) -> u32 {
        let leading = self.text.len() - self.text.trim_start().len();
        self.span.start + leading as u32
    }
}

/// A blank-line-delimited run of non-blank lines.
///
/// One chunk maps to exactly one block. Runs of two or more line breaks
/// separate chunks; longer runs behave identically to two.
#[derive(Debug, Clone)]
pub struct Chunk<'a> {
    /// The lines of the chunk, in order, none blank.
    pub lines: Vec<Line<'a>>,
    /// Span from the first line's start to the last line's end.
    pub span: Span,
}

impl<'a> Chunk<'a> {
    /// First line of the chunk. Chunks are never empty.
    #[inline]
    pub fn first(&self) -> &Line<'a> {
        &self.lines[0]
    }
}

/// Line lexer for the block parser.
pub struct Lexer<'a> {
    /// The prose region text.
    region: &'a str,
    /// Region as bytes for efficient scanning.
    bytes: &'a [u8],
    /// Current byte offset, relative to the region.
    offset: usize,
    /// Absolute offset of the region within the full input.
    base: u32,
    /// Peeked line (for lookahead).
    peeked: Option<Line<'a>>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer for a region starting at absolute offset `base`.
    #[inline]
    pub fn new(region: &'a str, base: u32) -> Self {
        Self {
            region,
            bytes: region.as_bytes(),
            offset: 0,
            base,
            peeked: None,
        }
    }

    /// Check if all input has been consumed.
    #[inline(always)]
    pub fn is_eof(&self) -> bool {
        self.peeked.is_none() && self.offset >= self.bytes.len()
    }

    /// Peek at the next line without consuming it.
    #[inline]
    pub fn peek_line(&mut self) -> Option<&Line<'a>> {
        if self.peeked.is_none() {
            self.peeked = self.read_line();
        }
        self.peeked.as_ref()
    }

    /// Consume and return the next line.
    #[inline]
    pub fn next_line(&mut self) -> Option<Line<'a>> {
        if let Some(line) = self.peeked.take() {
            return Some(line);
        }
        self.read_line()
    }

    /// Skip blank lines and return the count skipped.
    #[inline]
    pub fn skip_blank_lines(&mut self) -> usize {
        let mut count = 0;
        while let Some(line) = self.peek_line() {
            if !line.is_blank() {
                break;
            }
            self.next_line();
            count += 1;
        }
        count
    }

    /// Collect the next blank-line-delimited chunk.
    ///
    /// Leading blank lines are skipped; the chunk ends at the next blank
    /// line or end of region. Returns `None` once only blank lines remain.
    pub fn next_chunk(&mut self) -> Option<Chunk<'a>> {
        self.skip_blank_lines();

        let first = self.next_line()?;
        let mut span = first.span;
        let mut lines = vec![first];

        while let Some(line) = self.peek_line() {
            if line.is_blank() {
                break;
            }
            let line = self.next_line().unwrap();
            span = span.merge(line.span);
            lines.push(line);
        }

        Some(Chunk { lines, span })
    }

    /// Read the next line from the region.
    #[inline(always)]
    fn read_line(&mut self) -> Option<Line<'a>> {
        if self.offset >= self.bytes.len() {
            return None;
        }

        let start = self.offset;

        let end = match memchr(b'\n', &self.bytes[start..]) {
            Some(pos) => start + pos,
            None => self.bytes.len(),
        };

        // CRLF: drop the CR before the newline
        let text_end = if end > start && self.bytes[end - 1] == b'\r' {
            end - 1
        } else {
            end
        };

        // Advance past newline
        self.offset = if end < self.bytes.len() { end + 1 } else { end };

        Some(Line {
            text: &self.region[start..text_end],
            span: Span::new(self.base + start as u32, self.base + text_end as u32),
        })
    }
}
