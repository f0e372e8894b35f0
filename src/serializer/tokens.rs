use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, MK_TOKEN,
};

/// Width of the kind column in a token dump.
const KIND_WIDTH: usize = 15;

lazy_static! {
    static ref TOKEN_LINE: Regex = Regex::new(r"^\s*(\d+)\s+(\d+)\s+(\S+)(.*)$").unwrap();
}

/// Formats a single token as one dump line, without the line terminator.
pub fn serialize_token(token: &Token) -> String {
    let mut line = format!(
        "{:>5}  {:>5} {:<width$}",
        token.pos.line,
        token.pos.column,
        token.kind.name(),
        width = KIND_WIDTH
    );

    if token.kind.has_value() {
        line.push(' ');
        line.push_str(&token.value);
    }

    line
}

/// Writes a token list in the dump format, one line per token.
pub fn serialize_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&serialize_token(token));
        out.push('\n');
    }

    tracing::debug!(tokens = tokens.len(), bytes = out.len(), "serialized tokens");
    out
}

/// Reads a token dump back into tokens.
///
/// Blank lines are skipped. Errors are positioned at the dump line with
/// column 0, since they do not point into any source program.
pub fn deserialize_tokens(text: &str) -> Result<Vec<Token>, Error> {
    let mut tokens = Vec::new();

    // only `\n` ends a line, a `\r` belongs to the value before it
    for (index, line) in text.split('\n').enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        tokens.push(deserialize_token(line, index as u32 + 1)?);
    }

    tracing::debug!(tokens = tokens.len(), "deserialized tokens");
    Ok(tokens)
}

fn deserialize_token(line: &str, dump_line: u32) -> Result<Token, Error> {
    let malformed = || {
        Error::new(
            ErrorImpl::MalformedTokenLine {
                line: line.to_string(),
            },
            Position::new(dump_line, 0),
        )
    };

    let captures = TOKEN_LINE.captures(line).ok_or_else(malformed)?;

    let source_line: u32 = captures[1].parse().map_err(|_| malformed())?;
    let source_column: u32 = captures[2].parse().map_err(|_| malformed())?;

    let name = &captures[3];
    let kind = TokenKind::from_name(name).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnknownTokenKind {
                name: name.to_string(),
            },
            Position::new(dump_line, 0),
        )
    })?;

    let rest = captures.get(4).map_or("", |m| m.as_str());
    let value = match kind {
        TokenKind::String => strip_kind_padding(rest, name).to_string(),
        TokenKind::Identifier | TokenKind::Integer => {
            let value = rest.trim();
            if value.is_empty() {
                return Err(malformed());
            }
            value.to_string()
        }
        _ => {
            if !rest.trim().is_empty() {
                return Err(malformed());
            }
            String::new()
        }
    };

    Ok(MK_TOKEN!(kind, value, Position::new(source_line, source_column)))
}

/// Drops the padding that follows the kind name plus the single separator.
///
/// String payloads may start with spaces, so only the exact padding is
/// removed. A line whose padding was altered falls back to trimming.
fn strip_kind_padding<'a>(rest: &'a str, name: &str) -> &'a str {
    let width = KIND_WIDTH.saturating_sub(name.len()) + 1;

    match rest.get(..width) {
        Some(padding) if padding.chars().all(|c| c == ' ') => &rest[width..],
        _ => rest.trim_start(),
    }
}
