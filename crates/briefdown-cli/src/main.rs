//! Briefdown CLI - Parse, validate, and render report documents
//!
//! Usage:
//!   bdcli [OPTIONS] <FILE>
//!
//! Commands:
//!   parse     Parse and display document structure (default)
//!   validate  Check document for errors
//!   html      Render document to HTML on stdout
//!   stats     Show document statistics

use std::env;
use std::fs;
use std::process;

use briefdown_core::{ast, html, Block, Document, Inline, ListKind, Parser, Segment};
use serde::Serialize;

fn main() {
    let args: Vec<String> = env::args().collect();

    match run(&args) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let config = parse_args(args)?;

    let input = fs::read_to_string(&config.file)
        .map_err(|e| format!("failed to read '{}': {}", config.file, e))?;

    let mut parser = Parser::new();

    match config.command {
        Command::Parse => cmd_parse(&mut parser, &input, &config),
        Command::Validate => cmd_validate(&mut parser, &input, &config),
        Command::Html => cmd_html(&mut parser, &input),
        Command::Stats => cmd_stats(&mut parser, &input),
    }
}

#[derive(Debug)]
struct Config {
    command: Command,
    file: String,
    format: OutputFormat,
    verbose: bool,
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Parse,
    Validate,
    Html,
    Stats,
}

#[derive(Debug, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_args(args: &[String]) -> Result<Config, String> {
    let mut command = Command::Parse;
    let mut format = OutputFormat::Text;
    let mut verbose = false;
    let mut file = None;

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            "-V" | "--version" => {
                println!("bdcli {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
            "-v" | "--verbose" => verbose = true,
            "-j" | "--json" => format = OutputFormat::Json,
            "parse" => command = Command::Parse,
            "validate" => command = Command::Validate,
            "html" => command = Command::Html,
            "stats" => command = Command::Stats,
            _ if arg.starts_with('-') => {
                return Err(format!("unknown option: {}", arg));
            }
            _ => {
                if file.is_some() {
                    return Err("multiple files specified".to_string());
                }
                file = Some(arg.clone());
            }
        }
        i += 1;
    }

    let file = file.ok_or_else(|| "no input file specified".to_string())?;

    Ok(Config {
        command,
        file,
        format,
        verbose,
    })
}

fn print_help() {
    eprintln!(
        r#"bdcli - report document parser and renderer

USAGE:
    bdcli [OPTIONS] [COMMAND] <FILE>

COMMANDS:
    parse       Parse and display document structure (default)
    validate    Check document for errors without output
    html        Render document to HTML on stdout
    stats       Show document statistics

OPTIONS:
    -v, --verbose    Show detailed AST structure
    -j, --json       Output in JSON format
    -h, --help       Print help information
    -V, --version    Print version information

EXAMPLES:
    bdcli report.md           Parse a report document
    bdcli -v report.md        Parse with verbose output
    bdcli -j report.md        Output AST as JSON
    bdcli validate report.md  Validate without output
    bdcli html report.md      Render to HTML
    bdcli stats report.md     Show document statistics
"#
    );
}

// =============================================================================
// Parse Command
// =============================================================================

fn cmd_parse(parser: &mut Parser, input: &str, config: &Config) -> Result<(), String> {
    let result = parser.parse_with_recovery(input);

    // Report any errors
    for error in result.errors.iter() {
        eprintln!("warning: {}", error);
    }

    match config.format {
        OutputFormat::Json => print_json(&result.document),
        OutputFormat::Text => {
            if config.verbose {
                print_document_verbose(&result.document);
            } else {
                print_document_summary(&result.document);
            }
        }
    }

    Ok(())
}

// =============================================================================
// Validate Command
// =============================================================================

fn cmd_validate(parser: &mut Parser, input: &str, config: &Config) -> Result<(), String> {
    let result = parser.parse_with_recovery(input);

    if result.errors.is_empty() {
        if !matches!(config.format, OutputFormat::Json) {
            println!("Valid: no errors found");
        } else {
            println!(r#"{{"valid": true, "errors": []}}"#);
        }
        Ok(())
    } else {
        if matches!(config.format, OutputFormat::Json) {
            let errors: Vec<_> = result
                .errors
                .iter()
                .map(|e| {
                    serde_json::json!({
                        "message": e.message,
                        "span": e.span.map(|s| serde_json::json!({"start": s.start, "end": s.end})),
                        "recoverable": e.recoverable
                    })
                })
                .collect();
            println!("{}", serde_json::json!({"valid": false, "errors": errors}));
        } else {
            eprintln!("Invalid: {} error(s) found", result.errors.len());
            for error in result.errors.iter() {
                eprintln!("  - {}", error);
            }
        }
        Err(format!("{} error(s) found", result.errors.len()))
    }
}

// =============================================================================
// Html Command
// =============================================================================

fn cmd_html(parser: &mut Parser, input: &str) -> Result<(), String> {
    let result = parser.parse_with_recovery(input);

    for error in result.errors.iter() {
        eprintln!("warning: {}", error);
    }

    print!("{}", html::render(&result.document));
    Ok(())
}

// =============================================================================
// Stats Command
// =============================================================================

fn cmd_stats(parser: &mut Parser, input: &str) -> Result<(), String> {
    let result = parser.parse_with_recovery(input);
    let doc = &result.document;

    let stats = DocumentStats::from_document(doc, input);

    println!("Document Statistics");
    println!("-------------------");
    println!("Segments:       {}", doc.segments.len());
    println!("SVG fragments:  {}", stats.svg_fragments);
    println!();
    println!("Content:");
    println!("  Total blocks:   {}", stats.total_blocks);
    println!("  Headings:       {}", stats.headings);
    println!("  Paragraphs:     {}", stats.paragraphs);
    println!("  Lists:          {}", stats.lists);
    println!("  Tables:         {}", stats.tables);
    println!();
    println!("Size:");
    println!("  Characters:     {}", stats.chars);
    println!("  Words (est.):   {}", stats.words);
    println!("  Lines:          {}", stats.lines);
    println!();
    println!("Errors:         {}", result.errors.len());

    Ok(())
}

struct DocumentStats {
    total_blocks: usize,
    headings: usize,
    paragraphs: usize,
    lists: usize,
    tables: usize,
    svg_fragments: usize,
    chars: usize,
    words: usize,
    lines: usize,
}

impl DocumentStats {
    fn from_document(doc: &Document, input: &str) -> Self {
        let mut stats = Self {
            total_blocks: 0,
            headings: 0,
            paragraphs: 0,
            lists: 0,
            tables: 0,
            svg_fragments: 0,
            chars: input.len(),
            words: input.split_whitespace().count(),
            lines: input.lines().count(),
        };

        for segment in &doc.segments {
            if let Segment::Svg(_) = segment {
                stats.svg_fragments += 1;
            }
        }

        for block in doc.blocks() {
            stats.total_blocks += 1;
            match block {
                Block::Heading(_) => stats.headings += 1,
                Block::Paragraph(_) => stats.paragraphs += 1,
                Block::List(_) => stats.lists += 1,
                Block::Table(_) => stats.tables += 1,
            }
        }

        stats
    }
}

// =============================================================================
// JSON Output
// =============================================================================

#[derive(Serialize)]
struct JsonDocument<'a> {
    segments: Vec<JsonSegment<'a>>,
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum JsonSegment<'a> {
    Prose { blocks: Vec<JsonBlock<'a>> },
    Svg { content: &'a str },
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum JsonBlock<'a> {
    Heading {
        level: u8,
        content: Vec<JsonInline<'a>>,
    },
    Table {
        headers: Vec<Vec<JsonInline<'a>>>,
        rows: Vec<Vec<Vec<JsonInline<'a>>>>,
    },
    List {
        kind: &'a str,
        items: Vec<Vec<JsonInline<'a>>>,
    },
    Paragraph {
        lines: Vec<Vec<JsonInline<'a>>>,
    },
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum JsonInline<'a> {
    Text { content: &'a str },
    Link { label: &'a str, url: &'a str },
    Strong { content: &'a str },
    Emphasis { content: &'a str },
}

fn print_json(doc: &Document) {
    let json_doc = convert_document(doc);
    println!("{}", serde_json::to_string_pretty(&json_doc).unwrap());
}

fn convert_document<'a>(doc: &'a Document) -> JsonDocument<'a> {
    JsonDocument {
        segments: doc
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Prose(region) => JsonSegment::Prose {
                    blocks: region.blocks.iter().map(convert_block).collect(),
                },
                Segment::Svg(fragment) => JsonSegment::Svg {
                    content: &fragment.content,
                },
            })
            .collect(),
    }
}

fn convert_block<'a>(block: &'a Block) -> JsonBlock<'a> {
    match block {
        Block::Heading(h) => JsonBlock::Heading {
            level: h.level,
            content: h.content.iter().map(convert_inline).collect(),
        },
        Block::Table(t) => JsonBlock::Table {
            headers: t
                .headers
                .iter()
                .map(|cell| cell.iter().map(convert_inline).collect())
                .collect(),
            rows: t
                .rows
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|cell| cell.iter().map(convert_inline).collect())
                        .collect()
                })
                .collect(),
        },
        Block::List(l) => JsonBlock::List {
            kind: match l.kind {
                ListKind::Ordered => "ordered",
                ListKind::Unordered => "unordered",
            },
            items: l
                .items
                .iter()
                .map(|item| item.iter().map(convert_inline).collect())
                .collect(),
        },
        Block::Paragraph(p) => JsonBlock::Paragraph {
            lines: p
                .lines
                .iter()
                .map(|line| line.iter().map(convert_inline).collect())
                .collect(),
        },
    }
}

fn convert_inline<'a>(inline: &'a Inline) -> JsonInline<'a> {
    match inline {
        Inline::Text(t) => JsonInline::Text {
            content: &t.content,
        },
        Inline::Link(l) => JsonInline::Link {
            label: &l.label,
            url: &l.url,
        },
        Inline::Strong(s) => JsonInline::Strong {
            content: &s.content,
        },
        Inline::Emphasis(e) => JsonInline::Emphasis {
            content: &e.content,
        },
    }
}

// =============================================================================
// Text Output
// =============================================================================

fn print_document_summary(doc: &Document) {
    println!("Segments: {}", doc.segments.len());

    let mut index = 0;
    for segment in &doc.segments {
        match segment {
            Segment::Prose(region) => {
                for block in &region.blocks {
                    index += 1;
                    println!("  [{}] {}", index, describe_block(block));
                }
            }
            Segment::Svg(fragment) => {
                index += 1;
                println!("  [{}] SvgFragment ({} bytes)", index, fragment.content.len());
            }
        }
    }
}

fn print_document_verbose(doc: &Document) {
    println!("=== Briefdown AST ===");
    println!();
    println!("Span: {}..{}", doc.span.start, doc.span.end);
    println!("Segments: {}", doc.segments.len());

    let mut index = 0;
    for segment in &doc.segments {
        match segment {
            Segment::Prose(region) => {
                for block in &region.blocks {
                    index += 1;
                    println!();
                    println!("[{}] {}", index, describe_block(block));
                    print_block_verbose(block, 1);
                }
            }
            Segment::Svg(fragment) => {
                index += 1;
                println!();
                println!("[{}] SvgFragment ({} bytes)", index, fragment.content.len());
                let preview: String = fragment.content.chars().take(60).collect();
                let ellipsis = if fragment.content.len() > 60 { "..." } else { "" };
                println!("  Content: {}{}", preview.replace('\n', "\\n"), ellipsis);
            }
        }
    }
}

fn describe_block(block: &Block) -> String {
    match block {
        Block::Heading(h) => format!("Heading (level {})", h.level),
        Block::Table(t) => format!(
            "Table ({} columns, {} rows)",
            t.headers.len(),
            t.rows.len()
        ),
        Block::List(l) => format!("List ({:?}, {} items)", l.kind, l.items.len()),
        Block::Paragraph(p) => format!("Paragraph ({} lines)", p.lines.len()),
    }
}

fn print_block_verbose(block: &Block, indent: usize) {
    let prefix = "  ".repeat(indent);

    match block {
        Block::Heading(h) => {
            println!("{}Content: {}", prefix, format_inlines(&h.content));
        }
        Block::Table(t) => {
            let headers: Vec<String> = t.headers.iter().map(|c| format_inlines(c)).collect();
            println!("{}Headers: {}", prefix, headers.join(" | "));
            for (i, row) in t.rows.iter().enumerate() {
                let cells: Vec<String> = row.iter().map(|c| format_inlines(c)).collect();
                println!("{}Row {}: {}", prefix, i + 1, cells.join(" | "));
            }
        }
        Block::List(l) => {
            for (i, item) in l.items.iter().enumerate() {
                println!("{}Item {}: {}", prefix, i + 1, format_inlines(item));
            }
        }
        Block::Paragraph(p) => {
            for line in &p.lines {
                println!("{}Line: {}", prefix, format_inlines(line));
            }
        }
    }
}

fn format_inlines(inlines: &[ast::Inline]) -> String {
    let mut result = String::new();
    for inline in inlines {
        match inline {
            Inline::Text(t) => result.push_str(&t.content),
            Inline::Link(l) => {
                result.push('[');
                result.push_str(&l.label);
                result.push_str("](");
                result.push_str(&l.url);
                result.push(')');
            }
            Inline::Strong(s) => {
                result.push_str("**");
                result.push_str(&s.content);
                result.push_str("**");
            }
            Inline::Emphasis(e) => {
                result.push('*');
                result.push_str(&e.content);
                result.push('*');
            }
        }
    }
    result
}
