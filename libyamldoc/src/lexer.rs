//! Character cursor
//!
//! The lexer is a forward-only cursor over an immutable input buffer. It
//! never backtracks, so callers must validate each character at the moment
//! it is seen. Positions are byte offsets into the input; line and column
//! are tracked alongside for error reporting.

/// Forward-only character cursor.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    col: usize,
}

impl<'a> Lexer<'a> {
    /// Create a cursor at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 0,
            col: 0,
        }
    }

    /// The character under the cursor, or `None` at end of input.
    pub fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Move past the character under the cursor.
    pub fn advance_char(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
            // A "\r\n" pair counts as one line break.
            if c == '\n' || (c == '\r' && self.peek() != Some('\n')) {
                self.line += 1;
                self.col = 0;
            } else {
                self.col += 1;
            }
        }
    }

    /// Whether the cursor has consumed the whole input.
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Byte offset of the cursor.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Zero-based line of the cursor.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Zero-based column of the cursor, in characters.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Whether the cursor sits at the first column of a line.
    pub fn at_line_start(&self) -> bool {
        self.col == 0
    }

    /// Borrow a span of the input between two byte offsets.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.input[start..end]
    }

    /// Lookahead: whether the unconsumed input begins with `s`.
    pub fn starts_with(&self, s: &str) -> bool {
        self.input[self.pos..].starts_with(s)
    }

    /// Lookahead: the unconsumed part of the current line, without its
    /// line break.
    pub fn rest_of_line(&self) -> &'a str {
        let rest = &self.input[self.pos..];
        match rest.find(['\n', '\r']) {
            Some(end) => &rest[..end],
            None => rest,
        }
    }

    /// Lookahead: the character `n` positions past the cursor.
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(n)
    }

    /// Separator whitespace: space or tab.
    pub fn is_whitespace(c: char) -> bool {
        c == ' ' || c == '\t'
    }

    pub fn is_line_break(c: char) -> bool {
        c == '\n' || c == '\r'
    }

    /// Whether the cursor is at a line break or end of input.
    pub fn at_line_end(&self) -> bool {
        self.peek().map_or(true, Self::is_line_break)
    }

    /// Consume spaces and tabs.
    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(Self::is_whitespace) {
            self.advance_char();
        }
    }

    /// Consume everything up to, but not including, the next line break.
    pub fn skip_to_end_of_line(&mut self) {
        while !self.at_line_end() {
            self.advance_char();
        }
    }

    /// Consume one line break (`\n`, `\r\n` or `\r`). Returns false if the
    /// cursor was not at a line break.
    pub fn skip_line_break(&mut self) -> bool {
        match self.peek() {
            Some('\r') => {
                self.advance_char();
                if self.peek() == Some('\n') {
                    self.advance_char();
                }
                true
            }
            Some('\n') => {
                self.advance_char();
                true
            }
            _ => false,
        }
    }
}
