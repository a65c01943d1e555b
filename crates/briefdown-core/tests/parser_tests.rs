//! Integration tests for the Briefdown parser and HTML renderer

use briefdown_core::ast::{ListKind, Segment};
use briefdown_core::error::ParseErrorKind;
use briefdown_core::{html, svg, Block, Document, Inline, Parser};

fn parse(input: &str) -> Document<'_> {
    let mut parser = Parser::new();
    parser.parse(input).unwrap()
}

/// Concatenate the plain-text rendering of an inline sequence.
fn inline_text(inlines: &[Inline]) -> String {
    let mut out = String::new();
    for inline in inlines {
        match inline {
            Inline::Text(t) => out.push_str(&t.content),
            Inline::Link(l) => out.push_str(&l.label),
            Inline::Strong(s) => out.push_str(&s.content),
            Inline::Emphasis(e) => out.push_str(&e.content),
        }
    }
    out
}

// ============================================================================
// Fragment Segmentation Tests
// ============================================================================

#[test]
fn test_parse_prose_only() {
    let doc = parse("Just a paragraph.");
    assert_eq!(doc.segments.len(), 1);
    assert!(matches!(doc.segments[0], Segment::Prose(_)));
}

#[test]
fn test_parse_svg_fence_basic() {
    let input = "Before.\n\n```svg\n<svg></svg>\n```\n\nAfter.";
    let doc = parse(input);

    assert_eq!(doc.segments.len(), 3);
    assert!(matches!(doc.segments[0], Segment::Prose(_)));
    assert!(matches!(doc.segments[2], Segment::Prose(_)));

    if let Segment::Svg(fragment) = &doc.segments[1] {
        assert_eq!(fragment.content, "<svg></svg>\n");
    } else {
        panic!("Expected svg fragment, got {:?}", doc.segments[1]);
    }
}

#[test]
fn test_parse_svg_payload_verbatim() {
    // Fragment payloads are never block- or inline-parsed
    let input = "```svg\n# not a heading\n**not bold**\n```";
    let doc = parse(input);

    assert_eq!(doc.segments.len(), 1);
    if let Segment::Svg(fragment) = &doc.segments[0] {
        assert_eq!(fragment.content, "# not a heading\n**not bold**\n");
    } else {
        panic!("Expected svg fragment");
    }
    assert_eq!(doc.blocks().count(), 0);
}

#[test]
fn test_parse_multiple_fences() {
    let input = "Intro\n\n```svg\n<svg a=\"1\"/>\n```\n\nMiddle\n\n```svg\n<svg b=\"2\"/>\n```\n\nEnd";
    let doc = parse(input);

    assert_eq!(doc.segments.len(), 5);
    let svg_count = doc
        .segments
        .iter()
        .filter(|s| matches!(s, Segment::Svg(_)))
        .count();
    assert_eq!(svg_count, 2);
}

#[test]
fn test_parse_adjacent_fences() {
    let input = "```svg\n<svg/>\n```\n```svg\n<svg/>\n```";
    let doc = parse(input);

    // The prose between fences is only a newline, so no region is emitted
    assert_eq!(doc.segments.len(), 2);
    assert!(doc.segments.iter().all(|s| matches!(s, Segment::Svg(_))));
}

#[test]
fn test_parse_unclosed_fence_is_error() {
    let input = "Before.\n\n```svg\n<svg>";
    let mut parser = Parser::new();

    let err = parser.parse(input).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnclosedFence);
    assert!(err.recoverable);
}

#[test]
fn test_parse_unclosed_fence_recovery() {
    let input = "Before.\n\n```svg\n<svg>\n<circle r=\"4\"/>";
    let mut parser = Parser::new();
    let result = parser.parse_with_recovery(input);

    assert_eq!(result.errors.len(), 1);
    assert!(!result.has_fatal_errors());

    // The remainder of the document becomes the payload
    assert_eq!(result.document.segments.len(), 2);
    if let Segment::Svg(fragment) = &result.document.segments[1] {
        assert_eq!(fragment.content, "<svg>\n<circle r=\"4\"/>");
    } else {
        panic!("Expected svg fragment");
    }
}

#[test]
fn test_parse_fence_span_includes_markers() {
    let input = "```svg\nx\n```";
    let doc = parse(input);

    if let Segment::Svg(fragment) = &doc.segments[0] {
        assert_eq!(fragment.span.start, 0);
        assert_eq!(fragment.span.end, input.len() as u32);
    } else {
        panic!("Expected svg fragment");
    }
}

// ============================================================================
// Heading Tests
// ============================================================================

#[test]
fn test_parse_heading_levels() {
    for level in 1..=6u8 {
        let input = format!("{} Title", "#".repeat(level as usize));
        let doc = parse(&input);
        let blocks: Vec<_> = doc.blocks().collect();

        assert_eq!(blocks.len(), 1);
        if let Block::Heading(h) = blocks[0] {
            assert_eq!(h.level, level);
            assert_eq!(inline_text(&h.content), "Title");
        } else {
            panic!("Expected heading, got {:?}", blocks[0]);
        }
    }
}

#[test]
fn test_parse_heading_requires_space() {
    let doc = parse("#NoSpace");
    let blocks: Vec<_> = doc.blocks().collect();
    assert!(matches!(blocks[0], Block::Paragraph(_)));
}

#[test]
fn test_parse_heading_seven_markers_is_paragraph() {
    let doc = parse("####### Too deep");
    let blocks: Vec<_> = doc.blocks().collect();
    assert!(matches!(blocks[0], Block::Paragraph(_)));
}

#[test]
fn test_parse_heading_tab_after_markers() {
    let doc = parse("##\tIndented");
    let blocks: Vec<_> = doc.blocks().collect();

    if let Block::Heading(h) = blocks[0] {
        assert_eq!(h.level, 2);
        assert_eq!(inline_text(&h.content), "Indented");
    } else {
        panic!("Expected heading, got {:?}", blocks[0]);
    }
}

#[test]
fn test_parse_heading_with_inline_formatting() {
    let doc = parse("## **Q3** results");
    let blocks: Vec<_> = doc.blocks().collect();

    if let Block::Heading(h) = blocks[0] {
        assert_eq!(h.content.len(), 2);
        assert!(matches!(&h.content[0], Inline::Strong(s) if s.content == "Q3"));
        assert!(matches!(&h.content[1], Inline::Text(t) if t.content == " results"));
    } else {
        panic!("Expected heading, got {:?}", blocks[0]);
    }
}

#[test]
fn test_parse_heading_then_paragraph() {
    let doc = parse("# Title\n\nBody text.");
    let blocks: Vec<_> = doc.blocks().collect();

    assert_eq!(blocks.len(), 2);
    assert!(matches!(blocks[0], Block::Heading(h) if h.level == 1));
    assert!(matches!(blocks[1], Block::Paragraph(_)));
}

// ============================================================================
// Table Tests
// ============================================================================

#[test]
fn test_parse_table_basic() {
    let doc = parse("A | B\n-|-\n1 | 2");
    let blocks: Vec<_> = doc.blocks().collect();

    assert_eq!(blocks.len(), 1);
    if let Block::Table(t) = blocks[0] {
        assert_eq!(t.headers.len(), 2);
        assert_eq!(inline_text(&t.headers[0]), "A");
        assert_eq!(inline_text(&t.headers[1]), "B");
        assert_eq!(t.rows.len(), 1);
        assert_eq!(inline_text(&t.rows[0][0]), "1");
        assert_eq!(inline_text(&t.rows[0][1]), "2");
    } else {
        panic!("Expected table, got {:?}", blocks[0]);
    }
}

#[test]
fn test_parse_table_outer_pipes() {
    let input = "| Name | Value |\n| --- | --- |\n| cpu | 93% |\n| mem | 41% |";
    let doc = parse(input);
    let blocks: Vec<_> = doc.blocks().collect();

    if let Block::Table(t) = blocks[0] {
        assert_eq!(t.headers.len(), 2);
        assert_eq!(inline_text(&t.headers[0]), "Name");
        assert_eq!(t.rows.len(), 2);
        assert_eq!(inline_text(&t.rows[1][0]), "mem");
        assert_eq!(inline_text(&t.rows[1][1]), "41%");
    } else {
        panic!("Expected table, got {:?}", blocks[0]);
    }
}

#[test]
fn test_parse_table_alignment_colons() {
    let input = "| L | C | R |\n|:---|:---:|---:|\n| a | b | c |";
    let doc = parse(input);
    let blocks: Vec<_> = doc.blocks().collect();

    if let Block::Table(t) = blocks[0] {
        assert_eq!(t.headers.len(), 3);
        assert_eq!(t.rows.len(), 1);
    } else {
        panic!("Expected table, got {:?}", blocks[0]);
    }
}

#[test]
fn test_parse_pipes_without_separator_is_paragraph() {
    let doc = parse("a | b\nc | d");
    let blocks: Vec<_> = doc.blocks().collect();
    assert!(matches!(blocks[0], Block::Paragraph(_)));
}

#[test]
fn test_parse_table_cell_formatting() {
    let input = "Metric | Value\n--- | ---\n**p99** | [47ms](http://dash)";
    let doc = parse(input);
    let blocks: Vec<_> = doc.blocks().collect();

    if let Block::Table(t) = blocks[0] {
        assert!(matches!(&t.rows[0][0][0], Inline::Strong(s) if s.content == "p99"));
        assert!(matches!(&t.rows[0][1][0], Inline::Link(l) if l.url == "http://dash"));
    } else {
        panic!("Expected table, got {:?}", blocks[0]);
    }
}

// ============================================================================
// List Tests
// ============================================================================

#[test]
fn test_parse_unordered_list_dash() {
    let doc = parse("- one\n- two\n- three");
    let blocks: Vec<_> = doc.blocks().collect();

    if let Block::List(l) = blocks[0] {
        assert_eq!(l.kind, ListKind::Unordered);
        assert_eq!(l.items.len(), 3);
        assert_eq!(inline_text(&l.items[0]), "one");
        assert_eq!(inline_text(&l.items[2]), "three");
    } else {
        panic!("Expected list, got {:?}", blocks[0]);
    }
}

#[test]
fn test_parse_unordered_list_asterisk() {
    let doc = parse("* alpha\n* beta");
    let blocks: Vec<_> = doc.blocks().collect();

    if let Block::List(l) = blocks[0] {
        assert_eq!(l.kind, ListKind::Unordered);
        assert_eq!(inline_text(&l.items[1]), "beta");
    } else {
        panic!("Expected list, got {:?}", blocks[0]);
    }
}

#[test]
fn test_parse_ordered_list() {
    let doc = parse("1. first\n2. second\n10. tenth");
    let blocks: Vec<_> = doc.blocks().collect();

    if let Block::List(l) = blocks[0] {
        assert_eq!(l.kind, ListKind::Ordered);
        assert_eq!(l.items.len(), 3);
        assert_eq!(inline_text(&l.items[2]), "tenth");
    } else {
        panic!("Expected list, got {:?}", blocks[0]);
    }
}

#[test]
fn test_parse_list_kind_from_first_line() {
    // Mixed markers stay in one list; the first line decides the kind
    let doc = parse("- a\n* b\n1. c");
    let blocks: Vec<_> = doc.blocks().collect();

    assert_eq!(blocks.len(), 1);
    if let Block::List(l) = blocks[0] {
        assert_eq!(l.kind, ListKind::Unordered);
        assert_eq!(l.items.len(), 3);
        assert_eq!(inline_text(&l.items[2]), "c");
    } else {
        panic!("Expected list, got {:?}", blocks[0]);
    }
}

#[test]
fn test_parse_list_marker_strips_cascade() {
    // A bullet followed by an ordinal loses both markers
    let doc = parse("- 1. nested marker");
    let blocks: Vec<_> = doc.blocks().collect();

    if let Block::List(l) = blocks[0] {
        assert_eq!(inline_text(&l.items[0]), "nested marker");
    } else {
        panic!("Expected list, got {:?}", blocks[0]);
    }
}

#[test]
fn test_parse_dash_without_space_is_paragraph() {
    let doc = parse("-not a list");
    let blocks: Vec<_> = doc.blocks().collect();
    assert!(matches!(blocks[0], Block::Paragraph(_)));
}

#[test]
fn test_parse_list_item_formatting() {
    let doc = parse("- **done**: ship it\n- *pending*: review");
    let blocks: Vec<_> = doc.blocks().collect();

    if let Block::List(l) = blocks[0] {
        assert!(matches!(&l.items[0][0], Inline::Strong(s) if s.content == "done"));
        assert!(matches!(&l.items[1][0], Inline::Emphasis(e) if e.content == "pending"));
    } else {
        panic!("Expected list, got {:?}", blocks[0]);
    }
}

// ============================================================================
// Paragraph Tests
// ============================================================================

#[test]
fn test_parse_paragraph_single_line() {
    let doc = parse("A simple sentence.");
    let blocks: Vec<_> = doc.blocks().collect();

    if let Block::Paragraph(p) = blocks[0] {
        assert_eq!(p.lines.len(), 1);
        assert_eq!(inline_text(&p.lines[0]), "A simple sentence.");
    } else {
        panic!("Expected paragraph, got {:?}", blocks[0]);
    }
}

#[test]
fn test_parse_paragraph_forced_breaks() {
    // Single newlines within a chunk are forced line breaks
    let doc = parse("line one\nline two\nline three");
    let blocks: Vec<_> = doc.blocks().collect();

    assert_eq!(blocks.len(), 1);
    if let Block::Paragraph(p) = blocks[0] {
        assert_eq!(p.lines.len(), 3);
        assert_eq!(inline_text(&p.lines[1]), "line two");
    } else {
        panic!("Expected paragraph, got {:?}", blocks[0]);
    }
}

#[test]
fn test_parse_blank_line_splits_paragraphs() {
    let doc = parse("First.\n\nSecond.");
    let blocks: Vec<_> = doc.blocks().collect();

    assert_eq!(blocks.len(), 2);
    assert!(blocks.iter().all(|b| matches!(b, Block::Paragraph(_))));
}

#[test]
fn test_parse_extra_blank_lines_collapse() {
    let two = parse("First.\n\nSecond.");
    let many = parse("First.\n\n\n\n\nSecond.");

    let two_blocks: Vec<_> = two.blocks().collect();
    let many_blocks: Vec<_> = many.blocks().collect();
    assert_eq!(two_blocks.len(), many_blocks.len());

    for (a, b) in two_blocks.iter().zip(many_blocks.iter()) {
        if let (Block::Paragraph(pa), Block::Paragraph(pb)) = (a, b) {
            assert_eq!(inline_text(&pa.lines[0]), inline_text(&pb.lines[0]));
        } else {
            panic!("Expected paragraphs");
        }
    }
}

// ============================================================================
// Inline Parsing Tests
// ============================================================================

#[test]
fn test_parse_inline_link() {
    let doc = parse("See [the docs](https://example.com) for details.");
    let blocks: Vec<_> = doc.blocks().collect();

    if let Block::Paragraph(p) = blocks[0] {
        assert_eq!(p.lines[0].len(), 3);
        assert!(matches!(&p.lines[0][0], Inline::Text(t) if t.content == "See "));
        if let Inline::Link(l) = &p.lines[0][1] {
            assert_eq!(l.label, "the docs");
            assert_eq!(l.url, "https://example.com");
        } else {
            panic!("Expected link, got {:?}", p.lines[0][1]);
        }
        assert!(matches!(&p.lines[0][2], Inline::Text(t) if t.content == " for details."));
    } else {
        panic!("Expected paragraph");
    }
}

#[test]
fn test_parse_inline_precedence_order() {
    let doc = parse("[x](http://y) **b** *i*");
    let blocks: Vec<_> = doc.blocks().collect();

    if let Block::Paragraph(p) = blocks[0] {
        let line = &p.lines[0];
        assert_eq!(line.len(), 5);
        assert!(matches!(&line[0], Inline::Link(_)));
        assert!(matches!(&line[1], Inline::Text(t) if t.content == " "));
        assert!(matches!(&line[2], Inline::Strong(s) if s.content == "b"));
        assert!(matches!(&line[3], Inline::Text(t) if t.content == " "));
        assert!(matches!(&line[4], Inline::Emphasis(e) if e.content == "i"));
    } else {
        panic!("Expected paragraph");
    }
}

#[test]
fn test_parse_inline_unmatched_bracket_is_text() {
    let doc = parse("just [a bracket");
    let blocks: Vec<_> = doc.blocks().collect();

    if let Block::Paragraph(p) = blocks[0] {
        assert_eq!(p.lines[0].len(), 1);
        assert!(matches!(&p.lines[0][0], Inline::Text(t) if t.content == "just [a bracket"));
    } else {
        panic!("Expected paragraph");
    }
}

#[test]
fn test_parse_inline_empty_label_is_text() {
    let doc = parse("[](http://x)");
    let blocks: Vec<_> = doc.blocks().collect();

    if let Block::Paragraph(p) = blocks[0] {
        assert!(p.lines[0].iter().all(|i| matches!(i, Inline::Text(_))));
    } else {
        panic!("Expected paragraph");
    }
}

#[test]
fn test_parse_inline_lone_asterisk_is_text() {
    let doc = parse("a * b");
    let blocks: Vec<_> = doc.blocks().collect();

    if let Block::Paragraph(p) = blocks[0] {
        assert_eq!(inline_text(&p.lines[0]), "a * b");
        assert!(p.lines[0].iter().all(|i| matches!(i, Inline::Text(_))));
    } else {
        panic!("Expected paragraph");
    }
}

#[test]
fn test_parse_inline_strong_rejects_inner_asterisk() {
    // The closer after strong content must be doubled; here it is not,
    // so the opener falls through and the inner run becomes emphasis
    let doc = parse("**a*b**");
    let blocks: Vec<_> = doc.blocks().collect();

    if let Block::Paragraph(p) = blocks[0] {
        let line = &p.lines[0];
        assert_eq!(line.len(), 3);
        assert!(matches!(&line[0], Inline::Text(t) if t.content == "*"));
        assert!(matches!(&line[1], Inline::Emphasis(e) if e.content == "a"));
        assert!(matches!(&line[2], Inline::Text(t) if t.content == "b**"));
    } else {
        panic!("Expected paragraph");
    }
}

#[test]
fn test_parse_inline_adjacent_emphasis() {
    let doc = parse("*a**b*");
    let blocks: Vec<_> = doc.blocks().collect();

    if let Block::Paragraph(p) = blocks[0] {
        let line = &p.lines[0];
        assert_eq!(line.len(), 2);
        assert!(matches!(&line[0], Inline::Emphasis(e) if e.content == "a"));
        assert!(matches!(&line[1], Inline::Emphasis(e) if e.content == "b"));
    } else {
        panic!("Expected paragraph");
    }
}

#[test]
fn test_parse_inline_link_span_is_absolute() {
    let doc = parse("See [docs](http://x)");
    let blocks: Vec<_> = doc.blocks().collect();

    if let Block::Paragraph(p) = blocks[0] {
        if let Inline::Link(l) = &p.lines[0][1] {
            assert_eq!(l.span.start, 4);
            assert_eq!(l.span.end, 20);
        } else {
            panic!("Expected link");
        }
    } else {
        panic!("Expected paragraph");
    }
}

// ============================================================================
// Fragment Safety Tests
// ============================================================================

#[test]
fn test_svg_check_rejects_script() {
    assert!(svg::check("<svg><script>alert(1)</script></svg>").is_err());
    assert!(svg::check("<svg><SCRIPT>alert(1)</SCRIPT></svg>").is_err());
}

#[test]
fn test_svg_check_rejects_event_handler() {
    assert!(svg::check("<svg onload=\"steal()\"></svg>").is_err());
    assert!(svg::check("<rect onclick = \"x()\"/>").is_err());
}

#[test]
fn test_svg_check_rejects_javascript_url() {
    assert!(svg::check("<a href=\"javascript:alert(1)\">go</a>").is_err());
}

#[test]
fn test_svg_check_rejects_foreign_object() {
    assert!(svg::check("<svg><foreignObject><body/></foreignObject></svg>").is_err());
}

#[test]
fn test_svg_check_accepts_plain_markup() {
    let payload = "<svg viewBox=\"0 0 100 100\"><rect x=\"10\" width=\"80\"/>\
                   <text y=\"50\">Revenue</text><polygon points=\"0,0 50,50\"/></svg>";
    assert!(svg::check(payload).is_ok());
}

#[test]
fn test_parse_unsafe_fragment_reported() {
    let input = "```svg\n<svg onload=\"pwn()\"></svg>\n```";
    let mut parser = Parser::new();
    let result = parser.parse_with_recovery(input);

    assert_eq!(result.errors.len(), 1);
    let err = result.errors.iter().next().unwrap();
    assert_eq!(err.kind, ParseErrorKind::UnsafeFragment);

    // The fragment is still present in the tree, verbatim
    assert!(matches!(&result.document.segments[0], Segment::Svg(f) if f.content.contains("onload")));
}

#[test]
fn test_parse_fragment_scan_disabled() {
    let input = "```svg\n<script>x</script>\n```";
    let mut parser = Parser::new().with_fragment_scan(false);
    let result = parser.parse_with_recovery(input);

    assert!(result.is_ok());
}

// ============================================================================
// HTML Rendering Tests
// ============================================================================

#[test]
fn test_render_heading() {
    let doc = parse("## Summary");
    assert_eq!(html::render(&doc), "<h2 class=\"bd-h2\">Summary</h2>\n");
}

#[test]
fn test_render_deep_headings_collapse() {
    let doc = parse("##### Five\n\n###### Six");
    let out = html::render(&doc);
    assert_eq!(
        out,
        "<h4 class=\"bd-h4\">Five</h4>\n<h4 class=\"bd-h4\">Six</h4>\n"
    );
}

#[test]
fn test_render_escapes_text() {
    let doc = parse("a < b & c");
    assert_eq!(html::render(&doc), "<p>a &lt; b &amp; c</p>\n");
}

#[test]
fn test_render_link_attributes() {
    let doc = parse("[x](http://y)");
    assert_eq!(
        html::render(&doc),
        "<p><a href=\"http://y\" target=\"_blank\" rel=\"noopener noreferrer\">x</a></p>\n"
    );
}

#[test]
fn test_render_paragraph_line_breaks() {
    let doc = parse("one\ntwo");
    assert_eq!(html::render(&doc), "<p>one<br />two</p>\n");
}

#[test]
fn test_render_ordered_list() {
    let doc = parse("1. a\n2. b");
    assert_eq!(
        html::render(&doc),
        "<ol class=\"bd-list\"><li>a</li><li>b</li></ol>\n"
    );
}

#[test]
fn test_render_table() {
    let doc = parse("A | B\n-|-\n1 | 2");
    assert_eq!(
        html::render(&doc),
        "<div class=\"bd-table\"><table><thead><tr><th>A</th><th>B</th></tr></thead>\
         <tbody><tr><td>1</td><td>2</td></tr></tbody></table></div>\n"
    );
}

#[test]
fn test_render_safe_fragment_embedded() {
    let doc = parse("```svg\n<svg viewBox=\"0 0 10 10\"></svg>\n```");
    assert_eq!(
        html::render(&doc),
        "<div class=\"bd-figure\"><svg viewBox=\"0 0 10 10\"></svg>\n</div>\n"
    );
}

#[test]
fn test_render_unsafe_fragment_withheld() {
    let input = "```svg\n<script>x</script>\n```";
    let mut parser = Parser::new();
    let result = parser.parse_with_recovery(input);

    let out = html::render(&result.document);
    assert!(out.starts_with("<!-- svg fragment withheld:"));
    assert!(!out.contains("<script>"));
}

// ============================================================================
// Document Properties
// ============================================================================

#[test]
fn test_parse_empty_input() {
    let doc = parse("");
    assert!(doc.is_empty());
    assert_eq!(doc.blocks().count(), 0);
}

#[test]
fn test_parse_whitespace_only_input() {
    let doc = parse("  \n\n   \n");
    assert!(doc.is_empty());
}

#[test]
fn test_parse_is_deterministic() {
    let input = "# Report\n\n- a\n- b\n\n```svg\n<svg/>\n```\n\nA | B\n-|-\n1 | 2";
    let mut parser = Parser::new();
    let first = parser.parse(input).unwrap();
    let second = parser.parse(input).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_parse_block_spans_are_ordered() {
    let input = "# Title\n\npara one\n\n- item\n\npara two";
    let doc = parse(input);

    let spans: Vec<_> = doc.blocks().map(|b| b.span()).collect();
    assert_eq!(spans.len(), 4);
    for pair in spans.windows(2) {
        assert!(pair[0].end <= pair[1].start);
    }
    assert!(spans.last().unwrap().end <= doc.span.end);
}

#[test]
fn test_parse_mixed_document() {
    let input = "# Q3 Report\n\nRevenue grew **12%** this quarter.\n\n\
                 | Region | Growth |\n| --- | --- |\n| EMEA | 8% |\n| APAC | 15% |\n\n\
                 ```svg\n<svg viewBox=\"0 0 100 40\"><rect width=\"12\"/></svg>\n```\n\n\
                 Next steps:\n\n1. Expand APAC coverage\n2. Review EMEA pricing";
    let doc = parse(input);

    assert_eq!(doc.segments.len(), 3);
    let blocks: Vec<_> = doc.blocks().collect();
    assert_eq!(blocks.len(), 5);
    assert!(matches!(blocks[0], Block::Heading(_)));
    assert!(matches!(blocks[1], Block::Paragraph(_)));
    assert!(matches!(blocks[2], Block::Table(_)));
    assert!(matches!(blocks[3], Block::Paragraph(_)));
    assert!(matches!(blocks[4], Block::List(_)));
}
