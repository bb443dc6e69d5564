//! Document boundary markers
//!
//! `---` opens a document and `...` closes one. Both must start a line and
//! may only be followed on that line by whitespace and an optional comment.

use log::debug;

use crate::error::{ParseContext, ParseError, Result};
use crate::lexer::Lexer;

/// A document boundary marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentMarker {
    /// `---`
    Start,
    /// `...`
    End,
}

impl DocumentMarker {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentMarker::Start => "---",
            DocumentMarker::End => "...",
        }
    }
}

/// Recognize a marker under the cursor without consuming it.
///
/// The cursor must be at the start of a line, and the three marker
/// characters must be followed by whitespace, a line break or end of input.
/// `---foo` is content, not a marker.
pub fn document_marker(lexer: &Lexer) -> Option<DocumentMarker> {
    if !lexer.at_line_start() {
        return None;
    }
    let marker = if lexer.starts_with("---") {
        DocumentMarker::Start
    } else if lexer.starts_with("...") {
        DocumentMarker::End
    } else {
        return None;
    };
    match lexer.peek_nth(3) {
        None => Some(marker),
        Some(c) if Lexer::is_whitespace(c) || Lexer::is_line_break(c) => Some(marker),
        Some(_) => None,
    }
}

/// Consume a marker line. The cursor must be at a line beginning with `---`
/// or `...`.
///
/// A cursor that is not at a marker, or anything after the marker other
/// than whitespace and a comment, is rejected with `InvalidDocumentStructure`.
pub fn skip_document_separator(lexer: &mut Lexer, ctx: &ParseContext) -> Result<DocumentMarker> {
    let Some(marker) = document_marker(lexer) else {
        return Err(ParseError::InvalidDocumentStructure(String::new()).with_location(
            ctx,
            lexer.line(),
            lexer.col(),
        ));
    };
    debug!("document marker {} on line {}", marker.as_str(), lexer.line() + 1);
    for _ in 0..3 {
        lexer.advance_char();
    }

    lexer.skip_whitespace();
    match lexer.peek() {
        None => {}
        Some(c) if Lexer::is_line_break(c) => {}
        Some('#') => lexer.skip_to_end_of_line(),
        Some(_) => {
            return Err(ParseError::InvalidDocumentStructure(String::new()).with_location(
                ctx,
                lexer.line(),
                lexer.col(),
            ));
        }
    }
    lexer.skip_line_break();
    Ok(marker)
}
