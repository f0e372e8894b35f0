use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::{ast::ast::{Node, NodeKind}, errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

/// Precedence assigned to tokens that are not operators. Lower than every
/// real operator, so the expression loop always stops on them.
pub const NO_PRECEDENCE: i32 = -1;

/// Floor passed when parsing an operand of a unary operator.
pub const UNARY_PRECEDENCE: i32 = 14;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Associativity {
    Left,
    Right,
}

/// Static facts about a token kind when it appears in an expression.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct OperatorInfo {
    pub precedence: i32,
    pub associativity: Associativity,
    pub is_binary: bool,
    pub is_unary: bool,
    pub node_kind: Option<NodeKind>,
}

impl OperatorInfo {
    const fn binary(precedence: i32, node_kind: NodeKind) -> Self {
        OperatorInfo {
            precedence,
            associativity: Associativity::Left,
            is_binary: true,
            is_unary: false,
            node_kind: Some(node_kind),
        }
    }

    const fn unary(node_kind: NodeKind) -> Self {
        OperatorInfo {
            precedence: UNARY_PRECEDENCE,
            associativity: Associativity::Left,
            is_binary: false,
            is_unary: true,
            node_kind: Some(node_kind),
        }
    }

    const fn operand(node_kind: Option<NodeKind>) -> Self {
        OperatorInfo {
            precedence: NO_PRECEDENCE,
            associativity: Associativity::Left,
            is_binary: false,
            is_unary: false,
            node_kind,
        }
    }

    /// The floor used for the right-hand side once this operator is consumed.
    pub fn right_floor(&self) -> i32 {
        match self.associativity {
            Associativity::Left => self.precedence,
            Associativity::Right => self.precedence - 1,
        }
    }
}

pub type StmtHandler = fn(&mut Parser) -> Result<Node, Error>;

// Lookup tables are static so every parser shares them
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type OperatorLookup = HashMap<TokenKind, OperatorInfo>;

lazy_static! {
    pub static ref OPERATOR_LOOKUP: OperatorLookup = {
        let mut map = HashMap::new();

        // Multiplicative and additive
        map.insert(TokenKind::Multiply, OperatorInfo::binary(13, NodeKind::Mul));
        map.insert(TokenKind::Divide, OperatorInfo::binary(13, NodeKind::Div));
        map.insert(TokenKind::Mod, OperatorInfo::binary(13, NodeKind::Mod));
        map.insert(TokenKind::Add, OperatorInfo::binary(12, NodeKind::Add));
        map.insert(TokenKind::Subtract, OperatorInfo::binary(12, NodeKind::Sub));

        // Unary
        map.insert(TokenKind::Negate, OperatorInfo::unary(NodeKind::Negate));
        map.insert(TokenKind::Not, OperatorInfo::unary(NodeKind::Not));

        // Relational
        map.insert(TokenKind::Less, OperatorInfo::binary(10, NodeKind::Lss));
        map.insert(TokenKind::LessEqual, OperatorInfo::binary(10, NodeKind::Leq));
        map.insert(TokenKind::Greater, OperatorInfo::binary(10, NodeKind::Gtr));
        map.insert(TokenKind::GreaterEqual, OperatorInfo::binary(10, NodeKind::Geq));
        map.insert(TokenKind::Equal, OperatorInfo::binary(9, NodeKind::Eql));
        map.insert(TokenKind::NotEqual, OperatorInfo::binary(9, NodeKind::Neq));

        // Logical
        map.insert(TokenKind::And, OperatorInfo::binary(5, NodeKind::And));
        map.insert(TokenKind::Or, OperatorInfo::binary(4, NodeKind::Or));

        // Tokens that map to a node but never act as an infix operator
        map.insert(TokenKind::Assign, OperatorInfo::operand(Some(NodeKind::Assign)));
        map.insert(TokenKind::If, OperatorInfo::operand(Some(NodeKind::If)));
        map.insert(TokenKind::While, OperatorInfo::operand(Some(NodeKind::While)));
        map.insert(TokenKind::Identifier, OperatorInfo::operand(Some(NodeKind::Ident)));
        map.insert(TokenKind::Integer, OperatorInfo::operand(Some(NodeKind::Integer)));
        map.insert(TokenKind::String, OperatorInfo::operand(Some(NodeKind::String)));

        map
    };

    pub static ref STMT_LOOKUP: StmtLookup = {
        let mut map: StmtLookup = HashMap::new();
        map.insert(TokenKind::If, parse_if_stmt);
        map.insert(TokenKind::While, parse_while_stmt);
        map.insert(TokenKind::Identifier, parse_assign_stmt);
        map.insert(TokenKind::Putc, parse_putc_stmt);
        map.insert(TokenKind::Print, parse_print_stmt);
        map
    };
}

const NOT_AN_OPERATOR: OperatorInfo = OperatorInfo::operand(None);

/// Operator facts for `kind`; kinds without an entry get a neutral record
/// that never binds.
pub fn operator_info(kind: TokenKind) -> OperatorInfo {
    OPERATOR_LOOKUP.get(&kind).copied().unwrap_or(NOT_AN_OPERATOR)
}
