//! Directive parsing
//!
//! A directive is a `%`-prefixed line in a document prologue. `%YAML` and
//! `%TAG` are validated strictly; any other directive name is reserved for
//! future use and skipped without complaint.

use log::debug;

use crate::error::{ParseContext, ParseError, Result};
use crate::lexer::Lexer;
use crate::state::{ParserState, YamlVersion};

/// Parse one directive line. The cursor must be at `%`.
///
/// On success the whole line, including its line break, has been consumed.
pub fn parse_directive(
    lexer: &mut Lexer,
    state: &mut ParserState,
    ctx: &ParseContext,
) -> Result<()> {
    let (line, col) = (lexer.line(), lexer.col());
    lexer.advance_char();
    state.has_directives = true;

    let name_start = lexer.pos();
    while lexer
        .peek()
        .is_some_and(|c| !Lexer::is_whitespace(c) && !Lexer::is_line_break(c))
    {
        lexer.advance_char();
    }
    let name = lexer.slice(name_start, lexer.pos());

    match name {
        "YAML" => parse_yaml_directive(lexer, state, ctx, line, col)?,
        "TAG" => parse_tag_directive(lexer, state),
        _ => debug!("ignoring unknown directive %{} on line {}", name, line + 1),
    }

    lexer.skip_to_end_of_line();
    lexer.skip_line_break();
    Ok(())
}

fn parse_yaml_directive(
    lexer: &mut Lexer,
    state: &mut ParserState,
    ctx: &ParseContext,
    line: usize,
    col: usize,
) -> Result<()> {
    if state.has_yaml_directive {
        return Err(
            ParseError::DuplicateYamlDirective(String::new()).with_location(ctx, line, col)
        );
    }
    state.has_yaml_directive = true;

    lexer.skip_whitespace();
    let (version_line, version_col) = (lexer.line(), lexer.col());
    let version_start = lexer.pos();
    while lexer
        .peek()
        .is_some_and(|c| !Lexer::is_whitespace(c) && !Lexer::is_line_break(c) && c != '#')
    {
        lexer.advance_char();
    }
    let version = lexer.slice(version_start, lexer.pos());

    // A comment must be separated from the version by whitespace.
    if lexer.peek() == Some('#') {
        return Err(ParseError::InvalidDirective(String::new()).with_location(
            ctx,
            lexer.line(),
            lexer.col(),
        ));
    }

    lexer.skip_whitespace();
    if !lexer.at_line_end() && lexer.peek() != Some('#') {
        return Err(ParseError::InvalidDirective(String::new()).with_location(
            ctx,
            lexer.line(),
            lexer.col(),
        ));
    }

    let Some(parsed) = YamlVersion::from_token(version) else {
        return Err(
            ParseError::UnsupportedYamlVersion(version.to_string(), String::new()).with_location(
                ctx,
                version_line,
                version_col,
            ),
        );
    };
    debug!("accepted %YAML {}", parsed);
    state.version = Some(parsed);
    Ok(())
}

fn parse_tag_directive(lexer: &mut Lexer, state: &mut ParserState) {
    lexer.skip_whitespace();

    // Handle: `!`, `!!` or `!name!`. A missing closing `!` is tolerated.
    let handle_start = lexer.pos();
    if lexer.peek() == Some('!') {
        lexer.advance_char();
        while lexer
            .peek()
            .is_some_and(|c| !Lexer::is_whitespace(c) && !Lexer::is_line_break(c) && c != '!')
        {
            lexer.advance_char();
        }
        if lexer.peek() == Some('!') {
            lexer.advance_char();
        }
    }
    let handle = lexer.slice(handle_start, lexer.pos());

    lexer.skip_whitespace();
    let prefix_start = lexer.pos();
    while lexer
        .peek()
        .is_some_and(|c| !Lexer::is_whitespace(c) && !Lexer::is_line_break(c) && c != '#')
    {
        lexer.advance_char();
    }
    let prefix = lexer.slice(prefix_start, lexer.pos());

    debug!("binding tag handle {} to {}", handle, prefix);
    state.tag_handles.insert(handle, prefix);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> (Result<()>, ParserState) {
        let ctx = ParseContext::new(None);
        let mut state = ParserState::new();
        let mut lexer = Lexer::new(input);
        let result = parse_directive(&mut lexer, &mut state, &ctx);
        (result, state)
    }

    #[test]
    fn test_yaml_versions_accepted() {
        for input in ["%YAML 1.1", "%YAML 1.2\n", "%YAML\t1.2\t\n", "%YAML 1.2 # note\n"] {
            let (result, state) = run(input);
            assert!(result.is_ok(), "{input:?}: {result:?}");
            assert!(state.has_yaml_directive);
        }
        let (_, state) = run("%YAML 1.1\n");
        assert_eq!(state.version, Some(YamlVersion::V1_1));
    }

    #[test]
    fn test_yaml_unsupported_version() {
        for (input, version) in [("%YAML 1.3\n", "1.3"), ("%YAML 2.0", "2.0"), ("%YAML\n", "")] {
            let (result, _) = run(input);
            assert_eq!(
                result,
                Err(ParseError::UnsupportedYamlVersion(
                    version.to_string(),
                    String::new()
                ))
            );
        }
    }

    #[test]
    fn test_yaml_comment_needs_whitespace() {
        let (result, _) = run("%YAML 1.2#comment\n");
        assert_eq!(result, Err(ParseError::InvalidDirective(String::new())));
        let (result, _) = run("%YAML 1.2 #comment\n");
        assert!(result.is_ok());
    }

    #[test]
    fn test_yaml_trailing_content() {
        let (result, _) = run("%YAML 1.2 foo\n");
        assert_eq!(result, Err(ParseError::InvalidDirective(String::new())));
    }

    #[test]
    fn test_yaml_duplicate() {
        let ctx = ParseContext::new(Some("dup.yaml"));
        let mut state = ParserState::new();
        let mut lexer = Lexer::new("%YAML 1.2\n%YAML 1.2\n");
        parse_directive(&mut lexer, &mut state, &ctx).unwrap();
        let err = parse_directive(&mut lexer, &mut state, &ctx).unwrap_err();
        assert_eq!(err.to_string(), "Duplicate %YAML directive at 2:1 of <dup.yaml>");
    }

    #[test]
    fn test_tag_binding() {
        let (result, state) = run("%TAG !e! tag:example.com,2000:\n");
        assert!(result.is_ok());
        assert_eq!(state.tag_handles.get("!e!"), Some("tag:example.com,2000:"));
    }

    #[test]
    fn test_tag_primary_and_secondary_handles() {
        let (_, state) = run("%TAG ! tag:local,2024:\n");
        assert_eq!(state.tag_handles.get("!"), Some("tag:local,2024:"));
        let (_, state) = run("%TAG !! tag:yaml.org,2002: # core\n");
        assert_eq!(state.tag_handles.get("!!"), Some("tag:yaml.org,2002:"));
    }

    #[test]
    fn test_tag_handle_without_closing_bang() {
        let (result, state) = run("%TAG !e tag:example.com,2000:\n");
        assert!(result.is_ok());
        assert_eq!(state.tag_handles.get("!e"), Some("tag:example.com,2000:"));
    }

    #[test]
    fn test_unknown_directive_ignored() {
        let mut lexer = Lexer::new("%FOO bar baz\nnext");
        let mut state = ParserState::new();
        let ctx = ParseContext::new(None);
        parse_directive(&mut lexer, &mut state, &ctx).unwrap();
        assert!(!state.has_yaml_directive);
        assert!(state.has_directives);
        assert!(state.tag_handles.is_empty());
        assert!(lexer.starts_with("next"));
    }

    #[test]
    fn test_consumes_line_break() {
        let mut lexer = Lexer::new("%TAG ! x:\r\n---");
        let mut state = ParserState::new();
        let ctx = ParseContext::new(None);
        parse_directive(&mut lexer, &mut state, &ctx).unwrap();
        assert!(lexer.at_line_start());
        assert!(lexer.starts_with("---"));
    }
}
