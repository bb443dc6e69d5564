//! Stream pre-validation
//!
//! Before any directive or marker is looked at, the scanner checks the raw
//! stream. It performs:
//! - Byte order mark stripping (one leading U+FEFF)
//! - Printable character validation

use crate::error::{ParseContext, ParseError, Result};

const BOM: char = '\u{FEFF}';

/// Validate the source and return it without its leading byte order mark.
pub fn scan<'a>(source: &'a str, ctx: &ParseContext) -> Result<&'a str> {
    let body = source.strip_prefix(BOM).unwrap_or(source);
    validate_code_points(body, ctx)?;
    Ok(body)
}

/// Check whether a code point is in the printable YAML character set.
fn is_printable(cp: u32) -> bool {
    cp == 0x09
        || cp == 0x0A
        || cp == 0x0D
        || (0x20..=0x7E).contains(&cp)
        || cp == 0x85
        || (0xA0..=0xD7FF).contains(&cp)
        || ((0xE000..=0xFFFD).contains(&cp) && cp != 0xFEFF)
        || (0x10000..=0x10FFFF).contains(&cp)
}

fn validate_code_points(source: &str, ctx: &ParseContext) -> Result<()> {
    let mut line = 0;
    let mut col = 0;
    let mut chars = source.chars().peekable();
    while let Some(ch) = chars.next() {
        let cp = ch as u32;
        if !is_printable(cp) {
            return Err(
                ParseError::ForbiddenCodePoint(cp, String::new()).with_location(ctx, line, col)
            );
        }
        // A "\r\n" pair counts once, at its '\n'.
        if ch == '\n' || (ch == '\r' && chars.peek() != Some(&'\n')) {
            line += 1;
            col = 0;
        } else {
            col += 1;
        }
    }
    Ok(())
}
