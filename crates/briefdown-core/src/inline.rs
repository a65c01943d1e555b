//! Zero-allocation inline parser for one line of prose.
//!
//! Greedy, left-to-right, single pass, no backtracking. At each position
//! the first matching alternative wins: link, then strong, then emphasis.
//! Anything that does not pair into a construct (a lone `*`, a stray
//! `[`, a literal `|`) passes through verbatim as text. There is no
//! escaping mechanism in this dialect.

use std::borrow::Cow;

use memchr::{memchr, memchr2};

use crate::ast::{Emphasis, Inline, Link, Strong, Text};
use crate::span::Span;

/// Parse inline spans from one line of text.
///
/// `base_offset` is the absolute byte offset of `text` in the full input;
/// all produced spans are absolute. The result covers the line with no
/// gaps.
#[inline]
pub fn parse_inlines<'a>(text: &'a str, base_offset: u32) -> Vec<Inline<'a>> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut parser = InlineParser::new(text, base_offset);
    parser.parse()
}

struct InlineParser<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
    base_offset: u32,
}

impl<'a> InlineParser<'a> {
    #[inline]
    fn new(text: &'a str, base_offset: u32) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
            base_offset,
        }
    }

    fn parse(&mut self) -> Vec<Inline<'a>> {
        let mut inlines = Vec::with_capacity(4);
        let mut text_start = 0;

        while self.pos < self.bytes.len() {
            let next_special = self.find_next_special();

            if next_special >= self.bytes.len() {
                break;
            }

            self.pos = next_special;
            let parsed = match self.bytes[self.pos] {
                b'[' => self.try_parse_link(&mut inlines, &mut text_start),
                b'*' => self.try_parse_asterisk(&mut inlines, &mut text_start),
                _ => false,
            };

            if !parsed {
                self.pos += 1;
            }
        }

        // Flush remaining text
        if text_start < self.bytes.len() {
            inlines.push(self.make_text_borrowed(text_start, self.bytes.len()));
        }

        inlines
    }

    #[inline(always)]
    fn find_next_special(&self) -> usize {
        match memchr2(b'[', b'*', &self.bytes[self.pos..]) {
            Some(offset) => self.pos + offset,
            None => self.bytes.len(),
        }
    }

    /// Create a text node borrowing directly from the input.
    #[inline(always)]
    fn make_text_borrowed(&self, start: usize, end: usize) -> Inline<'a> {
        Inline::Text(Text {
            content: Cow::Borrowed(&self.text[start..end]),
            span: Span::new(
                self.base_offset + start as u32,
                self.base_offset + end as u32,
            ),
        })
    }

    #[inline(always)]
    fn flush_text(&self, inlines: &mut Vec<Inline<'a>>, text_start: &mut usize) {
        if *text_start < self.pos {
            inlines.push(self.make_text_borrowed(*text_start, self.pos));
        }
        *text_start = self.pos;
    }

    /// `[label](url)`: label non-empty without `]`, url non-empty
    /// without `)`, and the `](` must be adjacent.
    #[inline]
    fn try_parse_link(&mut self, inlines: &mut Vec<Inline<'a>>, text_start: &mut usize) -> bool {
        let start = self.pos;
        let label_start = start + 1;

        let close_bracket = match memchr(b']', &self.bytes[label_start..]) {
            Some(offset) => label_start + offset,
            None => return false,
        };

        if close_bracket == label_start {
            return false;
        }
        if self.bytes.get(close_bracket + 1) != Some(&b'(') {
            return false;
        }

        let url_start = close_bracket + 2;
        let close_paren = match memchr(b')', &self.bytes[url_start..]) {
            Some(offset) => url_start + offset,
            None => return false,
        };

        if close_paren == url_start {
            return false;
        }

        self.flush_text(inlines, text_start);

        inlines.push(Inline::Link(Link {
            label: Cow::Borrowed(&self.text[label_start..close_bracket]),
            url: Cow::Borrowed(&self.text[url_start..close_paren]),
            span: Span::new(
                self.base_offset + start as u32,
                self.base_offset + close_paren as u32 + 1,
            ),
        }));

        self.pos = close_paren + 1;
        *text_start = self.pos;
        true
    }

    #[inline]
    fn try_parse_asterisk(
        &mut self,
        inlines: &mut Vec<Inline<'a>>,
        text_start: &mut usize,
    ) -> bool {
        if self.pos + 1 < self.bytes.len() && self.bytes[self.pos + 1] == b'*' {
            self.try_parse_strong(inlines, text_start)
        } else {
            self.try_parse_emphasis(inlines, text_start)
        }
    }

    /// `**text**`: content non-empty and free of `*`, so the first `*`
    /// after the opener must be the closer and must be doubled. No
    /// second chance if it is not; the opener falls through as text.
    #[inline]
    fn try_parse_strong(&mut self, inlines: &mut Vec<Inline<'a>>, text_start: &mut usize) -> bool {
        let start = self.pos;
        let content_start = start + 2;

        let close = match memchr(b'*', &self.bytes[content_start..]) {
            Some(offset) => content_start + offset,
            None => return false,
        };

        if close == content_start {
            return false;
        }
        if self.bytes.get(close + 1) != Some(&b'*') {
            return false;
        }

        self.flush_text(inlines, text_start);

        inlines.push(Inline::Strong(Strong {
            content: Cow::Borrowed(&self.text[content_start..close]),
            span: Span::new(
                self.base_offset + start as u32,
                self.base_offset + close as u32 + 2,
            ),
        }));

        self.pos = close + 2;
        *text_start = self.pos;
        true
    }

    /// `*text*`: content non-empty and free of `*`.
    #[inline]
    fn try_parse_emphasis(
        &mut self,
        inlines: &mut Vec<Inline<'a>>,
        text_start: &mut usize,
    ) -> bool {
        let start = self.pos;
        let content_start = start + 1;

        let close = match memchr(b'*', &self.bytes[content_start..]) {
            Some(offset) => content_start + offset,
            None => return false,
        };

        if close == content_start {
            return false;
        }

        self.flush_text(inlines, text_start);

        inlines.push(Inline::Emphasis(Emphasis {
            content: Cow::Borrowed(&self.text[content_start..close]),
            span: Span::new(
                self.base_offset + start as u32,
                self.base_offset + close as u32 + 1,
            ),
        }));

        self.pos = close + 1;
        *text_start = self.pos;
        true
    }
}
