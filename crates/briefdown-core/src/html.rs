//! HTML rendering of a parsed document.
//!
//! One renderable node per block, in document order. Heading levels 5 and
//! 6 collapse into the level-4 visual class; paragraph line breaks become
//! `<br />`. Text content is escaped. SVG payloads are embedded verbatim
//! only when the safety scan passes; flagged fragments are replaced by a
//! comment so the surrounding report still renders.

use crate::ast::{Block, Document, Inline, ListKind, Segment};
use crate::svg;

/// Render a document to an HTML string.
pub fn render(document: &Document) -> String {
    let mut out = String::with_capacity(document.span.len() as usize * 2);

    for segment in &document.segments {
        match segment {
            Segment::Prose(region) => {
                for block in &region.blocks {
                    render_block(block, &mut out);
                }
            }
            Segment::Svg(fragment) => match svg::check(&fragment.content) {
                Ok(()) => {
                    out.push_str("<div class=\"bd-figure\">");
                    out.push_str(&fragment.content);
                    out.push_str("</div>\n");
                }
                Err(construct) => {
                    out.push_str("<!-- svg fragment withheld: ");
                    out.push_str(construct);
                    out.push_str(" -->\n");
                }
            },
        }
    }

    out
}

fn render_block(block: &Block, out: &mut String) {
    match block {
        Block::Heading(heading) => {
            // Levels 5 and 6 share the level-4 style
            let level = heading.level.min(4);
            out.push_str("<h");
            out.push((b'0' + level) as char);
            out.push_str(" class=\"bd-h");
            out.push((b'0' + level) as char);
            out.push_str("\">");
            render_inlines(&heading.content, out);
            out.push_str("</h");
            out.push((b'0' + level) as char);
            out.push_str(">\n");
        }
        Block::Table(table) => {
            out.push_str("<div class=\"bd-table\"><table><thead><tr>");
            for header in &table.headers {
                out.push_str("<th>");
                render_inlines(header, out);
                out.push_str("</th>");
            }
            out.push_str("</tr></thead><tbody>");
            for row in &table.rows {
                out.push_str("<tr>");
                for cell in row {
                    out.push_str("<td>");
                    render_inlines(cell, out);
                    out.push_str("</td>");
                }
                out.push_str("</tr>");
            }
            out.push_str("</tbody></table></div>\n");
        }
        Block::List(list) => {
            let tag = match list.kind {
                ListKind::Ordered => "ol",
                ListKind::Unordered => "ul",
            };
            out.push('<');
            out.push_str(tag);
            out.push_str(" class=\"bd-list\">");
            for item in &list.items {
                out.push_str("<li>");
                render_inlines(item, out);
                out.push_str("</li>");
            }
            out.push_str("</");
            out.push_str(tag);
            out.push_str(">\n");
        }
        Block::Paragraph(paragraph) => {
            out.push_str("<p>");
            for (i, line) in paragraph.lines.iter().enumerate() {
                if i > 0 {
                    out.push_str("<br />");
                }
                render_inlines(line, out);
            }
            out.push_str("</p>\n");
        }
    }
}

fn render_inlines(inlines: &[Inline], out: &mut String) {
    for inline in inlines {
        match inline {
            Inline::Text(text) => escape_into(&text.content, out),
            Inline::Link(link) => {
                out.push_str("<a href=\"");
                escape_into(&link.url, out);
                out.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\">");
                escape_into(&link.label, out);
                out.push_str("</a>");
            }
            Inline::Strong(strong) => {
                out.push_str("<strong>");
                escape_into(&strong.content, out);
                out.push_str("</strong>");
            }
            Inline::Emphasis(emphasis) => {
                out.push_str("<em>");
                escape_into(&emphasis.content, out);
                out.push_str("</em>");
            }
        }
    }
}

/// Minimal HTML escape for text and attribute positions.
fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
