//! Error types for YAML prologue parsing.

use thiserror::Error;

/// Result type for prologue parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Parse context carrying filename for error reporting.
#[derive(Clone, Debug, Default)]
pub struct ParseContext {
    pub filename: Option<String>,
}

impl ParseContext {
    /// Create a new parse context.
    pub fn new(filename: Option<&str>) -> Self {
        Self {
            filename: filename.map(String::from),
        }
    }

    /// Format a location suffix for error messages.
    pub fn loc_suffix(&self, line: usize, col: usize) -> String {
        match &self.filename {
            Some(name) => format!(" at {}:{} of <{}>", line + 1, col + 1, name),
            None => String::new(),
        }
    }
}

/// Error type for YAML prologue parsing.
///
/// Every error is terminal for the whole stream.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A second `%YAML` directive in the same document.
    #[error("Duplicate %YAML directive{0}")]
    DuplicateYamlDirective(String),

    /// `%YAML` version other than 1.1 or 1.2.
    #[error("Unsupported YAML version \"{0}\"{1}")]
    UnsupportedYamlVersion(String, String),

    /// Malformed `%YAML` line.
    #[error("Invalid directive{0}")]
    InvalidDirective(String),

    /// Directive after the document content has started.
    #[error("Directive after document content{0}")]
    DirectiveAfterContent(String),

    /// Non-comment content on a `---` or `...` marker line.
    #[error("Invalid document structure{0}")]
    InvalidDocumentStructure(String),

    /// Character outside the printable YAML set.
    #[error("Forbidden code point U+{0:04X}{1}")]
    ForbiddenCodePoint(u32, String),
}

impl ParseError {
    /// Create an error with location information.
    pub fn with_location(self, ctx: &ParseContext, line: usize, col: usize) -> Self {
        let suffix = ctx.loc_suffix(line, col);
        match self {
            ParseError::DuplicateYamlDirective(_) => ParseError::DuplicateYamlDirective(suffix),
            ParseError::UnsupportedYamlVersion(version, _) => {
                ParseError::UnsupportedYamlVersion(version, suffix)
            }
            ParseError::InvalidDirective(_) => ParseError::InvalidDirective(suffix),
            ParseError::DirectiveAfterContent(_) => ParseError::DirectiveAfterContent(suffix),
            ParseError::InvalidDocumentStructure(_) => ParseError::InvalidDocumentStructure(suffix),
            ParseError::ForbiddenCodePoint(cp, _) => ParseError::ForbiddenCodePoint(cp, suffix),
        }
    }

    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::DuplicateYamlDirective(_) => "DuplicateYamlDirective",
            ParseError::UnsupportedYamlVersion(..) => "UnsupportedYamlVersion",
            ParseError::InvalidDirective(_) => "InvalidDirective",
            ParseError::DirectiveAfterContent(_) => "DirectiveAfterContent",
            ParseError::InvalidDocumentStructure(_) => "InvalidDocumentStructure",
            ParseError::ForbiddenCodePoint(..) => "ForbiddenCodePoint",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_suffix_with_filename() {
        let ctx = ParseContext::new(Some("doc.yaml"));
        let err = ParseError::InvalidDirective(String::new()).with_location(&ctx, 0, 9);
        assert_eq!(err.to_string(), "Invalid directive at 1:10 of <doc.yaml>");
    }

    #[test]
    fn test_location_suffix_without_filename() {
        let ctx = ParseContext::new(None);
        let err = ParseError::UnsupportedYamlVersion("1.3".to_string(), String::new())
            .with_location(&ctx, 4, 2);
        assert_eq!(err.to_string(), "Unsupported YAML version \"1.3\"");
        assert_eq!(err.kind(), "UnsupportedYamlVersion");
    }
}
