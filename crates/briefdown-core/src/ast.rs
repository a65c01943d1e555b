//! Abstract Syntax Tree for report documents.
//!
//! The tree mirrors the structure of the dialect itself:
//!
//! - A [`Document`] is an alternating sequence of prose regions and raw
//!   SVG fragments.
//! - A prose region is a list of [`Block`]s cut on blank-line boundaries.
//! - A block's text content is a sequence of [`Inline`] spans.
//!
//! All string content is `Cow<'a, str>` borrowing from the input, and every
//! node carries its source [`Span`].

use crate::span::Span;

/// Borrowed or owned string type for zero-copy parsing.
pub type CowStr<'a> = std::borrow::Cow<'a, str>;

/// A parsed report document.
///
/// Segments appear in document order and cover the entire input with no
/// gaps or overlaps. An empty input produces an empty segment list.
#[derive(Debug, Clone, PartialEq)]
pub struct Document<'a> {
    /// Prose regions and SVG fragments, alternating, in document order.
    pub segments: Vec<Segment<'a>>,
    /// Source span covering the entire document.
    pub span: Span,
}

impl<'a> Document<'a> {
    /// Iterate over all blocks across prose regions, in document order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block<'a>> {
        self.segments.iter().flat_map(|segment| match segment {
            Segment::Prose(region) => Some(region.blocks.iter()),
            Segment::Svg(_) => None,
        })
        .flatten()
    }

    /// Whether the document holds no renderable content.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// One top-level piece of the document.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment<'a> {
    /// Text outside any fence, parsed into blocks.
    Prose(ProseRegion<'a>),
    /// Raw vector-graphic payload from a ```` ```svg ```` fence.
    Svg(SvgFragment<'a>),
}

/// A run of prose split into blocks on blank-line boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct ProseRegion<'a> {
    /// Blocks in source order; empty chunks are dropped, never represented.
    pub blocks: Vec<Block<'a>>,
    /// Source span of the region (fence markers excluded).
    pub span: Span,
}

/// An embedded SVG fragment, kept verbatim.
///
/// The payload is never touched by block or inline parsing. Whether it is
/// safe to hand to a display surface is a separate question; see
/// [`crate::svg::check`].
#[derive(Debug, Clone, PartialEq)]
pub struct SvgFragment<'a> {
    /// Raw markup between the fence lines, exclusive of the markers.
    pub content: CowStr<'a>,
    /// Source span including the fence markers.
    pub span: Span,
}

/// Block-level AST nodes.
///
/// Every blank-line-delimited chunk of prose maps to exactly one block.
/// Blocks are produced in document order and never reordered.
#[derive(Debug, Clone, PartialEq)]
pub enum Block<'a> {
    /// Section heading (levels 1-6).
    Heading(Heading<'a>),
    /// Pipe-delimited table with a header row and data rows.
    Table(Table<'a>),
    /// Ordered or unordered list.
    List(List<'a>),
    /// Text paragraph with forced line breaks preserved.
    Paragraph(Paragraph<'a>),
}

impl Block<'_> {
    /// Source span of this block.
    pub fn span(&self) -> Span {
        match self {
            Block::Heading(h) => h.span,
            Block::Table(t) => t.span,
            Block::List(l) => l.span,
            Block::Paragraph(p) => p.span,
        }
    }
}

/// Section heading with level and inline content.
///
/// Levels 5 and 6 are preserved here; the HTML renderer collapses them
/// into the level-4 visual class.
#[derive(Debug, Clone, PartialEq)]
pub struct Heading<'a> {
    /// Heading level (1-6), the number of `#` markers.
    pub level: u8,
    /// Inline content of the heading line.
    pub content: Vec<Inline<'a>>,
    /// Source span.
    pub span: Span,
}

/// A data table.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<'a> {
    /// Header cells from the first pipe-containing line.
    pub headers: Vec<Vec<Inline<'a>>>,
    /// Data rows; rows that parse to zero cells are dropped.
    pub rows: Vec<Vec<Vec<Inline<'a>>>>,
    /// Source span.
    pub span: Span,
}

/// List ordering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Numbered list (`1.` `2.` `3.`).
    Ordered,
    /// Bulleted list (`-` or `*`).
    Unordered,
}

/// A list block.
///
/// The kind is decided by the chunk's first line alone; mixed markers in
/// one chunk stay in one list.
#[derive(Debug, Clone, PartialEq)]
pub struct List<'a> {
    /// Ordered or unordered.
    pub kind: ListKind,
    /// One item per source line, marker stripped.
    pub items: Vec<Vec<Inline<'a>>>,
    /// Source span.
    pub span: Span,
}

/// Text paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph<'a> {
    /// One entry per source line; single line breaks inside a chunk are
    /// forced breaks, not flowed text.
    pub lines: Vec<Vec<Inline<'a>>>,
    /// Source span.
    pub span: Span,
}

/// Inline-level AST nodes within a single line.
///
/// A parsed line is an ordered sequence of these, covering the line with
/// no gaps. There is no nesting: strong and emphasis content is plain
/// text that may not itself contain `*`.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline<'a> {
    /// Plain text, including any Markdown-significant characters that did
    /// not pair into a construct.
    Text(Text<'a>),
    /// Hyperlink `[label](url)`.
    Link(Link<'a>),
    /// Strong text `**bold**`.
    Strong(Strong<'a>),
    /// Emphasized text `*italic*`.
    Emphasis(Emphasis<'a>),
}

/// Plain text content.
#[derive(Debug, Clone, PartialEq)]
pub struct Text<'a> {
    /// The text content, verbatim.
    pub content: CowStr<'a>,
    /// Source span.
    pub span: Span,
}

/// Hyperlink with label and destination.
#[derive(Debug, Clone, PartialEq)]
pub struct Link<'a> {
    /// Link text (plain, no nested formatting in this dialect).
    pub label: CowStr<'a>,
    /// Link destination URL, verbatim.
    pub url: CowStr<'a>,
    /// Source span.
    pub span: Span,
}

/// Strong (bold) text.
#[derive(Debug, Clone, PartialEq)]
pub struct Strong<'a> {
    /// Content between the `**` delimiters; contains no `*`.
    pub content: CowStr<'a>,
    /// Source span.
    pub span: Span,
}

/// Emphasized (italic) text.
#[derive(Debug, Clone, PartialEq)]
pub struct Emphasis<'a> {
    /// Content between the `*` delimiters; contains no `*`.
    pub content: CowStr<'a>,
    /// Source span.
    pub span: Span,
}
