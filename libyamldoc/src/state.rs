//! Per-document parser state.

use std::collections::BTreeMap;
use std::fmt;

/// A YAML version accepted by the `%YAML` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YamlVersion {
    V1_1,
    V1_2,
}

impl YamlVersion {
    /// Match a version token exactly. Anything but `1.1` and `1.2` is `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "1.1" => Some(YamlVersion::V1_1),
            "1.2" => Some(YamlVersion::V1_2),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            YamlVersion::V1_1 => "1.1",
            YamlVersion::V1_2 => "1.2",
        }
    }
}

impl fmt::Display for YamlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tag handle bindings declared by `%TAG` directives.
///
/// Keys are handles such as `!`, `!!` or `!e!`; values are prefixes. Later
/// bindings for the same handle replace earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagHandles(BTreeMap<String, String>);

impl TagHandles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `handle` to `prefix`, returning the previous prefix if any.
    pub fn insert(&mut self, handle: &str, prefix: &str) -> Option<String> {
        self.0.insert(handle.to_string(), prefix.to_string())
    }

    /// The prefix bound to `handle`.
    pub fn get(&self, handle: &str) -> Option<&str> {
        self.0.get(handle).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Bindings in handle order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(h, p)| (h.as_str(), p.as_str()))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// State shared by the directive parser, the boundary handler and the
/// document driver. Its lifetime is exactly one document.
#[derive(Debug, Clone, Default)]
pub struct ParserState {
    /// A `%YAML` directive has been accepted for the current document.
    pub has_yaml_directive: bool,
    /// At least one directive, known or not, has been read.
    pub has_directives: bool,
    /// Node content has started; directives are no longer allowed.
    pub has_document_content: bool,
    /// A `---` marker opened the current document.
    pub explicit_start: bool,
    /// Version declared by the accepted `%YAML` directive.
    pub version: Option<YamlVersion>,
    pub tag_handles: TagHandles,
}

impl ParserState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a document has been opened, either by `---` or by content.
    pub fn document_open(&self) -> bool {
        self.explicit_start || self.has_document_content
    }

    /// Forget everything about the current document.
    pub fn reset(&mut self) {
        self.has_yaml_directive = false;
        self.has_directives = false;
        self.has_document_content = false;
        self.explicit_start = false;
        self.version = None;
        self.tag_handles.clear();
    }
}
