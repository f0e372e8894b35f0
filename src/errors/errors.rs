use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// Which stage of the front end rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Raised by the lexer while scanning source text.
    Lexical,
    /// Raised by the parser on a malformed token sequence.
    Syntax,
    /// Raised while reading a token dump or AST dump.
    Format,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} in line {line}, column {column}", line = .position.line, column = .position.column)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnterminatedString
            | ErrorImpl::NewlineInString
            | ErrorImpl::UnterminatedComment
            | ErrorImpl::UnterminatedCharacter
            | ErrorImpl::UnknownEscape { .. }
            | ErrorImpl::MultiCharacterConstant
            | ErrorImpl::EmptyCharacterConstant
            | ErrorImpl::UnrecognisedCharacter { .. }
            | ErrorImpl::InvalidToken { .. } => ErrorKind::Lexical,
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::ExpectedExpression { .. }
            | ErrorImpl::ExpectedStatement { .. }
            | ErrorImpl::NestingTooDeep { .. } => ErrorKind::Syntax,
            ErrorImpl::UnknownTokenKind { .. }
            | ErrorImpl::MalformedTokenLine { .. }
            | ErrorImpl::UnknownNodeKind { .. }
            | ErrorImpl::MalformedAst { .. } => ErrorKind::Format,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::NewlineInString => "NewlineInString",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::UnterminatedCharacter => "UnterminatedCharacter",
            ErrorImpl::UnknownEscape { .. } => "UnknownEscape",
            ErrorImpl::MultiCharacterConstant => "MultiCharacterConstant",
            ErrorImpl::EmptyCharacterConstant => "EmptyCharacterConstant",
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::InvalidToken { .. } => "InvalidToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedExpression { .. } => "ExpectedExpression",
            ErrorImpl::ExpectedStatement { .. } => "ExpectedStatement",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::UnknownTokenKind { .. } => "UnknownTokenKind",
            ErrorImpl::MalformedTokenLine { .. } => "MalformedTokenLine",
            ErrorImpl::UnknownNodeKind { .. } => "UnknownNodeKind",
            ErrorImpl::MalformedAst { .. } => "MalformedAst",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("string literal is never closed, add a `\"`"))
            }
            ErrorImpl::NewlineInString => ErrorTip::Suggestion(String::from(
                "string literals cannot span lines, close it before the newline",
            )),
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("block comment is never closed, add a `*/`"))
            }
            ErrorImpl::UnknownEscape { escape } => ErrorTip::Suggestion(format!(
                "unknown escape sequence `\\{}`, only `\\n` and `\\\\` are supported",
                escape
            )),
            ErrorImpl::MultiCharacterConstant => ErrorTip::Suggestion(String::from(
                "a character literal holds exactly one character, use a string instead",
            )),
            ErrorImpl::ExpectedStatement { found } => ErrorTip::Suggestion(format!(
                "`{}` cannot start a statement, expected `if`, `while`, `print`, `putc` or an assignment",
                found
            )),
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "split the expression or block into smaller statements using temporary variables",
            )),
            ErrorImpl::UnexpectedToken { expected, found } if expected == "Semicolon" => {
                ErrorTip::Suggestion(format!(
                    "Unexpected token: `{}`, did you miss a semicolon?",
                    found
                ))
            }
            other => ErrorTip::Suggestion(other.to_string()),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("end of input in string literal")]
    UnterminatedString,
    #[error("newline in string literal")]
    NewlineInString,
    #[error("end of input in comment")]
    UnterminatedComment,
    #[error("end of input in character literal")]
    UnterminatedCharacter,
    #[error("unknown escape sequence \\{escape}")]
    UnknownEscape { escape: char },
    #[error("multi-character constant")]
    MultiCharacterConstant,
    #[error("empty character constant")]
    EmptyCharacterConstant,
    #[error("unrecognized character: ({code}) '{character}'")]
    UnrecognisedCharacter { character: char, code: u32 },
    #[error("invalid token: {token:?}")]
    InvalidToken { token: String },
    #[error("expecting {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },
    #[error("expecting an expression, found {found}")]
    ExpectedExpression { found: String },
    #[error("expecting a statement, found {found}")]
    ExpectedStatement { found: String },
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
    #[error("token kind not found: {name:?}")]
    UnknownTokenKind { name: String },
    #[error("malformed token line: {line:?}")]
    MalformedTokenLine { line: String },
    #[error("node kind not found: {name:?}")]
    UnknownNodeKind { name: String },
    #[error("malformed AST dump: {message}")]
    MalformedAst { message: String },
}
