#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod serializer;

pub use ast::ast::Node;
pub use errors::errors::ErrorKind;
pub use lexer::lexer::tokenize;
pub use lexer::tokens::{Token, TokenKind};
pub use parser::parser::parse;
pub use serializer::ast::{deserialize_ast, serialize_ast};
pub use serializer::tokens::{deserialize_tokens, serialize_tokens};

/// A location in the source text. Lines and columns both start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns the text of the given 1-based line, without its line terminator.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth((line - 1) as usize)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}


/// Renders an error the way the driver prints it:
///
/// ```text
/// Error: UnrecognisedCharacter (unrecognized character: (64) '@')
/// -> count.t:20:9
///    |
/// 20 | x = #;
///    | ----^
/// ```
///
/// The source excerpt is omitted when the position does not point into `source`.
pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    let position = error.get_position();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}:{}\n", file, position));

    let Some(line_text) = get_line_at_position(source, position.line) else {
        return out;
    };
    if position.column == 0 {
        return out;
    }

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    let arrows = (position.column as usize).saturating_sub(removed_whitespace).max(1);

    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
