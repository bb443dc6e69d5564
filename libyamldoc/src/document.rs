//! Document driver
//!
//! The driver walks a YAML stream line by line and splits it into
//! documents. Before a document's content starts it alternates between:
//! - Directives (`%` at the start of a line)
//! - Boundary markers (`---` and `...`)
//! - Node content, which is handed over as raw lines
//!
//! Blank lines and whole-line comments between these are skipped.

use std::fmt::Write;
use std::mem;

use log::debug;

use crate::boundary::{document_marker, skip_document_separator, DocumentMarker};
use crate::directive::parse_directive;
use crate::error::{ParseContext, ParseError, Result};
use crate::lexer::Lexer;
use crate::state::{ParserState, TagHandles, YamlVersion};

/// One document of a YAML stream together with its prologue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Version from the `%YAML` directive, if any.
    pub version: Option<YamlVersion>,
    /// Bindings from `%TAG` directives.
    pub tag_handles: TagHandles,
    /// Opened by `---`.
    pub explicit_start: bool,
    /// Closed by `...`.
    pub explicit_end: bool,
    /// Raw node content, lines joined with `\n`, trailing blank lines removed.
    pub content: String,
}

impl Document {
    /// The prefix bound to `handle` by this document's `%TAG` directives.
    pub fn tag_prefix(&self, handle: &str) -> Option<&str> {
        self.tag_handles.get(handle)
    }

    /// Whether the document has no node content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Split the stream under the cursor into documents.
pub fn parse_documents(lexer: &mut Lexer, ctx: &ParseContext) -> Result<Vec<Document>> {
    let mut state = ParserState::new();
    let mut content: Vec<&str> = Vec::new();
    let mut documents = Vec::new();

    loop {
        skip_blank_lines(lexer);
        if lexer.is_eof() {
            break;
        }

        if lexer.peek() == Some('%') {
            if state.has_document_content {
                return Err(ParseError::DirectiveAfterContent(String::new()).with_location(
                    ctx,
                    lexer.line(),
                    lexer.col(),
                ));
            }
            // A directive after a bare `---` belongs to the next document.
            if state.explicit_start {
                documents.push(close_document(&mut state, &mut content, false));
            }
            parse_directive(lexer, &mut state, ctx)?;
            continue;
        }

        if document_marker(lexer).is_some() {
            let (line, col) = (lexer.line(), lexer.col());
            match skip_document_separator(lexer, ctx)? {
                DocumentMarker::Start => {
                    if state.document_open() {
                        documents.push(close_document(&mut state, &mut content, false));
                    }
                    state.explicit_start = true;
                }
                DocumentMarker::End => {
                    if state.document_open() {
                        documents.push(close_document(&mut state, &mut content, true));
                    } else if state.has_directives {
                        return Err(missing_document(ctx, line, col));
                    }
                }
            }
            continue;
        }

        state.has_document_content = true;
        read_content(lexer, &mut content);
    }

    if state.document_open() {
        documents.push(close_document(&mut state, &mut content, false));
    } else if state.has_directives {
        return Err(missing_document(ctx, lexer.line(), lexer.col()));
    }
    Ok(documents)
}

/// Directives that no document follows.
fn missing_document(ctx: &ParseContext, line: usize, col: usize) -> ParseError {
    debug!("directives without a document before line {}", line + 1);
    ParseError::InvalidDocumentStructure(String::new()).with_location(ctx, line, col)
}

/// Consume lines that hold only whitespace or a comment.
fn skip_blank_lines(lexer: &mut Lexer) {
    while !lexer.is_eof() {
        let rest = lexer.rest_of_line().trim_start_matches([' ', '\t']);
        if !rest.is_empty() && !rest.starts_with('#') {
            break;
        }
        lexer.skip_to_end_of_line();
        lexer.skip_line_break();
    }
}

/// Consume content lines up to the next directive or marker line.
fn read_content<'a>(lexer: &mut Lexer<'a>, lines: &mut Vec<&'a str>) {
    loop {
        let start = lexer.pos();
        lexer.skip_to_end_of_line();
        lines.push(lexer.slice(start, lexer.pos()));
        lexer.skip_line_break();
        if lexer.is_eof() || lexer.peek() == Some('%') || document_marker(lexer).is_some() {
            break;
        }
    }
}

fn close_document(
    state: &mut ParserState,
    lines: &mut Vec<&str>,
    explicit_end: bool,
) -> Document {
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    let document = Document {
        version: state.version,
        tag_handles: mem::take(&mut state.tag_handles),
        explicit_start: state.explicit_start,
        explicit_end,
        content: lines.join("\n"),
    };
    debug!(
        "closed document: {} content lines, {} tag handles",
        lines.len(),
        document.tag_handles.len()
    );
    lines.clear();
    state.reset();
    document
}

/// Render a prologue report, one block per document.
pub fn describe(documents: &[Document]) -> String {
    let mut out = String::new();
    for (i, doc) in documents.iter().enumerate() {
        let _ = writeln!(out, "# document {}", i + 1);
        if let Some(version) = doc.version {
            let _ = writeln!(out, "%YAML {}", version);
        }
        for (handle, prefix) in doc.tag_handles.iter() {
            let _ = writeln!(out, "%TAG {} {}", handle, prefix);
        }
        if doc.explicit_start {
            out.push_str("---\n");
        }
        match doc.content.lines().count() {
            0 => out.push_str("content: empty\n"),
            1 => out.push_str("content: 1 line\n"),
            n => {
                let _ = writeln!(out, "content: {} lines", n);
            }
        }
        if doc.explicit_end {
            out.push_str("...\n");
        }
    }
    out
}
