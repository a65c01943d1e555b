//! # Briefdown Core
//!
//! A renderer for the constrained Markdown dialect emitted by LLM report
//! generators: headings, pipe tables, flat lists, paragraphs with forced
//! line breaks, and raw SVG charts embedded in ```` ```svg ```` fences.
//!
//! Parsing is pure and synchronous: one input string in, one typed block
//! tree out. No state survives between calls, so the same input always
//! produces a structurally identical document.
//!
//! ## Quick Start
//!
//! ```rust
//! use briefdown_core::Parser;
//!
//! let input = "# Q3 Findings\n\nRevenue is **down** 12%.";
//! let mut parser = Parser::new();
//! let doc = parser.parse(input).unwrap();
//!
//! println!("Parsed {} blocks", doc.blocks().count());
//! ```
//!
//! ## Error Recovery
//!
//! Malformed input never fails outright; the degraded document and the
//! reasons are returned together:
//!
//! ```rust
//! use briefdown_core::Parser;
//!
//! let input = "Before the chart.\n\n```svg\n<svg viewBox=\"0 0 1 1\"></svg>";
//! let mut parser = Parser::new();
//! let result = parser.parse_with_recovery(input);
//!
//! // The unterminated fence consumed the rest of the input, and was reported
//! assert_eq!(result.errors.len(), 1);
//! ```
//!
//! ## HTML Output
//!
//! [`html::render`] reproduces the display layer: one HTML node per
//! block, with unsafe SVG payloads withheld.

pub mod ast;
pub mod error;
pub mod html;
pub mod inline;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod svg;

pub use ast::{Block, Document, Inline, ListKind, Segment};
pub use error::{ParseError, ParseErrorKind, ParseErrors};
pub use parser::{ParseResult, Parser};
