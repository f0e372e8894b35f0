use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("print", TokenKind::Print);
        map.insert("putc", TokenKind::Putc);
        map
    };

    /// Canonical dump name -> kind, used when reading token dumps back in.
    pub static ref TOKEN_NAME_LOOKUP: HashMap<&'static str, TokenKind> = TokenKind::ALL
        .iter()
        .map(|kind| (kind.name(), *kind))
        .collect();
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EndOfInput,

    Multiply,
    Divide,
    Mod,
    Add,
    Subtract,
    Negate,
    Not,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Equal,    // ==
    NotEqual, // !=
    Assign,   // =
    And,
    Or,

    // Reserved
    If,
    Else,
    While,
    Print,
    Putc,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    Semicolon,
    Comma,

    Identifier,
    Integer,
    String,
}

impl TokenKind {
    pub const ALL: [TokenKind; 31] = [
        TokenKind::EndOfInput,
        TokenKind::Multiply,
        TokenKind::Divide,
        TokenKind::Mod,
        TokenKind::Add,
        TokenKind::Subtract,
        TokenKind::Negate,
        TokenKind::Not,
        TokenKind::Less,
        TokenKind::LessEqual,
        TokenKind::Greater,
        TokenKind::GreaterEqual,
        TokenKind::Equal,
        TokenKind::NotEqual,
        TokenKind::Assign,
        TokenKind::And,
        TokenKind::Or,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::While,
        TokenKind::Print,
        TokenKind::Putc,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::OpenCurly,
        TokenKind::CloseCurly,
        TokenKind::Semicolon,
        TokenKind::Comma,
        TokenKind::Identifier,
        TokenKind::Integer,
        TokenKind::String,
    ];

    /// The name this kind carries in token dumps.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::EndOfInput => "End_of_input",
            TokenKind::Multiply => "Op_multiply",
            TokenKind::Divide => "Op_divide",
            TokenKind::Mod => "Op_mod",
            TokenKind::Add => "Op_add",
            TokenKind::Subtract => "Op_subtract",
            TokenKind::Negate => "Op_negate",
            TokenKind::Not => "Op_not",
            TokenKind::Less => "Op_less",
            TokenKind::LessEqual => "Op_lessequal",
            TokenKind::Greater => "Op_greater",
            TokenKind::GreaterEqual => "Op_greaterequal",
            TokenKind::Equal => "Op_equal",
            TokenKind::NotEqual => "Op_notequal",
            TokenKind::Assign => "Op_assign",
            TokenKind::And => "Op_and",
            TokenKind::Or => "Op_or",
            TokenKind::If => "Keyword_if",
            TokenKind::Else => "Keyword_else",
            TokenKind::While => "Keyword_while",
            TokenKind::Print => "Keyword_print",
            TokenKind::Putc => "Keyword_putc",
            TokenKind::OpenParen => "LeftParen",
            TokenKind::CloseParen => "RightParen",
            TokenKind::OpenCurly => "LeftBrace",
            TokenKind::CloseCurly => "RightBrace",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Comma => "Comma",
            TokenKind::Identifier => "Identifier",
            TokenKind::Integer => "Integer",
            TokenKind::String => "String",
        }
    }

    pub fn from_name(name: &str) -> Option<TokenKind> {
        TOKEN_NAME_LOOKUP.get(name).copied()
    }

    /// Only identifiers and literals carry a payload.
    pub fn has_value(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::Integer | TokenKind::String
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub pos: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind.has_value() {
            write!(f, "{} ({}) at {}", self.kind, self.value, self.pos)
        } else {
            write!(f, "{} at {}", self.kind, self.pos)
        }
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
