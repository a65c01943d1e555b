//! Block parser for report documents.
//!
//! Two passes, both zero-copy:
//!
//! 1. Fragment segmentation: ```` ```svg ```` fences split the input into
//!    alternating prose regions and raw SVG payloads.
//! 2. Block segmentation: each prose region is cut into chunks on
//!    blank-line boundaries and each chunk classified as exactly one of
//!    heading, table, list, or paragraph; first match wins.
//!
//! Malformed input degrades to a best-effort classification rather than
//! failing; the two conditions worth reporting (unterminated fence,
//! executable content in a fragment) are collected as recoverable errors.

use std::borrow::Cow;

use memchr::memmem;

use crate::ast::{
    Block, Document, Heading, Inline, List, ListKind, Paragraph, ProseRegion, Segment,
    SvgFragment, Table,
};
use crate::error::{ParseError, ParseErrors};
use crate::inline::parse_inlines;
use crate::lexer::{Chunk, Lexer, Line};
use crate::span::Span;
use crate::svg;

/// Opening fence marker for an embedded SVG fragment.
const FENCE_OPEN: &[u8] = b"```svg";
/// Closing fence marker; the first one after an opener terminates it.
const FENCE_CLOSE: &[u8] = b"```";

/// Result type for parsing that includes recovered errors.
#[derive(Debug)]
pub struct ParseResult<'a> {
    /// The parsed document (complete even if errors occurred).
    pub document: Document<'a>,
    /// Errors encountered during parsing.
    pub errors: ParseErrors,
}

impl<'a> ParseResult<'a> {
    /// Check if parsing completed without errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check if any fatal errors occurred.
    pub fn has_fatal_errors(&self) -> bool {
        self.errors.has_fatal()
    }
}

/// Report document parser with error recovery.
///
/// The parser holds no per-document state; one instance can parse any
/// number of inputs, and parsing the same input twice yields structurally
/// identical documents.
pub struct Parser {
    /// Errors collected during parsing (for recovery mode).
    errors: ParseErrors,
    /// Whether to scan SVG payloads for executable content.
    scan_fragments: bool,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Create a new parser.
    #[inline]
    pub fn new() -> Self {
        Self {
            errors: ParseErrors::new(),
            scan_fragments: true,
        }
    }

    /// Enable or disable the executable-content scan on SVG payloads.
    ///
    /// Enabled by default. Disable only when a later stage sanitizes
    /// fragments itself; the payload is embedded verbatim downstream.
    pub fn with_fragment_scan(mut self, scan: bool) -> Self {
        self.scan_fragments = scan;
        self
    }

    /// Parse with error recovery, returning both document and errors.
    #[inline]
    pub fn parse_with_recovery<'a>(&mut self, input: &'a str) -> ParseResult<'a> {
        self.errors = ParseErrors::new();
        let document = self.parse_internal(input);
        ParseResult {
            document,
            errors: std::mem::take(&mut self.errors),
        }
    }

    /// Parse the input, returning an error on first failure.
    #[inline]
    pub fn parse<'a>(&mut self, input: &'a str) -> Result<Document<'a>, ParseError> {
        self.errors = ParseErrors::new();
        let document = self.parse_internal(input);
        if self.errors.is_empty() {
            Ok(document)
        } else {
            // Return the first error
            Err(self.errors.iter().next().unwrap().clone())
        }
    }

    /// Record an error during parsing.
    #[inline]
    fn record_error(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    // ------------------------------------------------------------------
    // Pass 1: fragment segmentation
    // ------------------------------------------------------------------

    fn parse_internal<'a>(&mut self, input: &'a str) -> Document<'a> {
        let bytes = input.as_bytes();
        let mut segments = Vec::with_capacity(4);
        let mut cursor = 0usize;

        while let Some(found) = memmem::find(&bytes[cursor..], FENCE_OPEN) {
            let open = cursor + found;

            if let Some(region) = self.parse_prose_region(input, cursor, open) {
                segments.push(Segment::Prose(region));
            }

            // Payload starts after the marker; a newline hugging the
            // marker belongs to the fence, not the payload.
            let mut payload_start = open + FENCE_OPEN.len();
            if bytes.get(payload_start) == Some(&b'\r') {
                payload_start += 1;
            }
            if bytes.get(payload_start) == Some(&b'\n') {
                payload_start += 1;
            }

            match memmem::find(&bytes[payload_start..], FENCE_CLOSE) {
                Some(found_close) => {
                    let close = payload_start + found_close;
                    let end = close + FENCE_CLOSE.len();
                    segments.push(self.make_fragment(input, open, payload_start, close, end));
                    cursor = end;
                }
                None => {
                    // Unterminated fence: the remainder of the document is
                    // the payload, and the malformation is reported.
                    let marker_span =
                        Span::new(open as u32, (open + FENCE_OPEN.len()) as u32);
                    self.record_error(ParseError::unclosed_fence(Some(marker_span)));
                    segments.push(self.make_fragment(
                        input,
                        open,
                        payload_start,
                        input.len(),
                        input.len(),
                    ));
                    cursor = input.len();
                }
            }
        }

        if let Some(region) = self.parse_prose_region(input, cursor, input.len()) {
            segments.push(Segment::Prose(region));
        }

        Document {
            segments,
            span: Span::new(0, input.len() as u32),
        }
    }

    fn make_fragment<'a>(
        &mut self,
        input: &'a str,
        open: usize,
        payload_start: usize,
        payload_end: usize,
        end: usize,
    ) -> Segment<'a> {
        let content = &input[payload_start..payload_end];
        let span = Span::new(open as u32, end as u32);

        if self.scan_fragments {
            if let Err(construct) = svg::check(content) {
                self.record_error(ParseError::unsafe_fragment(construct, Some(span)));
            }
        }

        Segment::Svg(SvgFragment {
            content: Cow::Borrowed(content),
            span,
        })
    }

    // ------------------------------------------------------------------
    // Pass 2: block segmentation within a prose region
    // ------------------------------------------------------------------

    fn parse_prose_region<'a>(
        &mut self,
        input: &'a str,
        start: usize,
        end: usize,
    ) -> Option<ProseRegion<'a>> {
        if start >= end {
            return None;
        }

        let mut lexer = Lexer::new(&input[start..end], start as u32);
        let mut blocks = Vec::with_capacity(8);

        while let Some(chunk) = lexer.next_chunk() {
            blocks.push(self.parse_chunk(&chunk));
        }

        if blocks.is_empty() {
            return None;
        }

        Some(ProseRegion {
            blocks,
            span: Span::new(start as u32, end as u32),
        })
    }

    /// Classify one chunk. Precedence: heading, table, list, paragraph;
    /// first match wins, paragraph is the default.
    fn parse_chunk<'a>(&mut self, chunk: &Chunk<'a>) -> Block<'a> {
        if let Some(block) = self.try_heading(chunk) {
            return block;
        }
        if let Some(block) = self.try_table(chunk) {
            return block;
        }
        if let Some(block) = self.try_list(chunk) {
            return block;
        }
        self.parse_paragraph(chunk)
    }

    /// `^#{1,6}` + whitespace on the first line. Seven or more markers,
    /// or no whitespace after them, is not a heading.
    fn try_heading<'a>(&mut self, chunk: &Chunk<'a>) -> Option<Block<'a>> {
        let line = chunk.first();
        let trimmed = line.trimmed();

        let level = trimmed.bytes().take_while(|&b| b == b'#').count();
        if level == 0 || level > 6 {
            return None;
        }

        let rest = &trimmed[level..];
        if !rest.starts_with([' ', '\t']) {
            return None;
        }

        // Content is the remainder of the first line only; the upstream
        // generator always isolates headings with blank lines.
        let content_text = rest.trim_start();
        let content_offset = line.trimmed_start() + (trimmed.len() - content_text.len()) as u32;

        Some(Block::Heading(Heading {
            level: level as u8,
            content: parse_inlines(content_text, content_offset),
            span: chunk.span,
        }))
    }

    /// A chunk is a table when it contains a pipe, one of its lines is a
    /// separator row, and at least two lines contain pipes. The second
    /// pipe line is assumed to be the separator and discarded.
    fn try_table<'a>(&mut self, chunk: &Chunk<'a>) -> Option<Block<'a>> {
        let has_separator = chunk.lines.iter().any(|l| is_separator_row(l.trimmed()));
        if !has_separator {
            return None;
        }

        let pipe_lines: Vec<&Line<'a>> = chunk
            .lines
            .iter()
            .filter(|l| l.text.contains('|'))
            .collect();
        if pipe_lines.len() < 2 {
            return None;
        }

        let headers = parse_table_row(pipe_lines[0]);
        let rows = pipe_lines[2..]
            .iter()
            .map(|line| parse_table_row(line))
            .filter(|row| !row.is_empty())
            .collect();

        Some(Block::Table(Table {
            headers,
            rows,
            span: chunk.span,
        }))
    }

    /// First line starts with `- `, `* `, or an ordinal like `3. `.
    /// The first line alone decides the kind; every line is one item.
    fn try_list<'a>(&mut self, chunk: &Chunk<'a>) -> Option<Block<'a>> {
        let first = chunk.first().trimmed();

        let kind = if starts_with_ordinal(first) {
            ListKind::Ordered
        } else if first.starts_with("- ") || first.starts_with("* ") {
            ListKind::Unordered
        } else {
            return None;
        };

        let items = chunk
            .lines
            .iter()
            .map(|line| {
                let trimmed = line.trimmed();
                let item = strip_list_marker(trimmed);
                let offset = line.trimmed_start() + (trimmed.len() - item.len()) as u32;
                parse_inlines(item, offset)
            })
            .collect();

        Some(Block::List(List {
            kind,
            items,
            span: chunk.span,
        }))
    }

    /// Default classification. Line breaks inside the chunk are forced
    /// breaks, one `lines` entry per source line.
    fn parse_paragraph<'a>(&mut self, chunk: &Chunk<'a>) -> Block<'a> {
        let lines = chunk
            .lines
            .iter()
            .map(|line| parse_inlines(line.trimmed(), line.trimmed_start()))
            .collect();

        Block::Paragraph(Paragraph {
            lines,
            span: chunk.span,
        })
    }
}

/// Separator row: pipe-delimited cells of hyphens with optional leading
/// or trailing colon, e.g. `|---|:---:|` or `-|-`.
fn is_separator_row(line: &str) -> bool {
    if !line.contains('|') {
        return false;
    }

    let mut cells: Vec<&str> = line.split('|').collect();
    if cells.first().is_some_and(|c| c.trim().is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|c| c.trim().is_empty()) {
        cells.pop();
    }
    if cells.is_empty() {
        return false;
    }

    cells.iter().all(|cell| {
        let cell = cell.trim();
        let cell = cell.strip_prefix(':').unwrap_or(cell);
        let cell = cell.strip_suffix(':').unwrap_or(cell);
        !cell.is_empty() && cell.bytes().all(|b| b == b'-')
    })
}

/// Split a row on `|`, drop one leading and one trailing empty cell
/// (from outer pipes), trim the rest, and inline-parse each cell.
fn parse_table_row<'a>(line: &Line<'a>) -> Vec<Vec<Inline<'a>>> {
    let mut cells: Vec<(u32, &str)> = Vec::with_capacity(8);
    let mut offset = line.span.start;

    for part in line.text.split('|') {
        cells.push((offset, part));
        offset += part.len() as u32 + 1;
    }

    if cells.first().is_some_and(|(_, c)| c.trim().is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|(_, c)| c.trim().is_empty()) {
        cells.pop();
    }

    cells
        .into_iter()
        .map(|(cell_offset, cell)| {
            let trimmed = cell.trim();
            let leading = cell.len() - cell.trim_start().len();
            parse_inlines(trimmed, cell_offset + leading as u32)
        })
        .collect()
}

/// `^\d+\.\s`: one or more digits, a dot, then whitespace.
fn starts_with_ordinal(line: &str) -> bool {
    let digits = line.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return false;
    }
    let rest = &line[digits..];
    rest.starts_with('.') && rest[1..].starts_with(char::is_whitespace)
}

/// Strip a leading `- `, `* `, or `N. ` marker.
///
/// The strips cascade in that order, matching the original renderer: an
/// item `- 1. go` loses both markers.
fn strip_list_marker(line: &str) -> &str {
    let line = match line.strip_prefix(['-', '*']) {
        Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
        _ => line,
    };

    let digits = line.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits > 0 {
        if let Some(rest) = line[digits..].strip_prefix('.') {
            if rest.starts_with(char::is_whitespace) {
                return rest.trim_start();
            }
        }
    }

    line
}
