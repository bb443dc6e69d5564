//! YAML stream prologue parser.
//!
//! Splits a YAML stream into documents and validates everything that comes
//! before each document's node content: `%YAML` and `%TAG` directives and
//! the `---` / `...` boundary markers. Node content itself is handed over
//! as raw text for a node parser to consume.
//!
//! # Parsing Pipeline
//!
//! The parser operates in three phases:
//!
//! 1. **Scanner**: Validates the stream's character set and strips a
//!    leading byte order mark.
//!
//! 2. **Lexer**: Wraps the validated text in a forward-only character
//!    cursor that tracks line and column.
//!
//! 3. **Document Driver**: Walks the cursor, dispatching to the directive
//!    parser and the boundary handler, and collects documents.

mod boundary;
mod directive;
mod document;
mod error;
mod lexer;
mod scanner;
mod state;

pub use boundary::{document_marker, skip_document_separator, DocumentMarker};
pub use directive::parse_directive;
pub use document::{describe, parse_documents, Document};
pub use error::{ParseContext, ParseError, Result};
pub use lexer::Lexer;
pub use state::{ParserState, TagHandles, YamlVersion};

/// Parse a YAML stream into documents.
///
/// # Example
///
/// ```
/// use libyamldoc::parse;
///
/// let docs = parse("%TAG !e! tag:example.com,2000:\n---\n!e!foo bar\n").unwrap();
/// assert_eq!(docs[0].tag_prefix("!e!"), Some("tag:example.com,2000:"));
/// ```
pub fn parse(input: &str) -> Result<Vec<Document>> {
    parse_with_filename(input, None)
}

/// Parse a YAML stream with a filename for error messages.
pub fn parse_with_filename(input: &str, filename: Option<&str>) -> Result<Vec<Document>> {
    let ctx = ParseContext::new(filename);

    // Phase 1: Validate the stream
    let body = scanner::scan(input, &ctx)?;

    // Phase 2: Position a cursor at the start
    let mut lexer = Lexer::new(body);

    // Phase 3: Split into documents
    parse_documents(&mut lexer, &ctx)
}
