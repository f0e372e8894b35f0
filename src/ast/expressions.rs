use std::fmt::Display;

use super::ast::NodeKind;

/// Operators that combine two expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Multiply,
    Divide,
    Mod,
    Add,
    Subtract,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Equal,
    NotEqual,
    And,
    Or,
}

impl BinaryOp {
    pub fn node_kind(&self) -> NodeKind {
        match self {
            BinaryOp::Multiply => NodeKind::Mul,
            BinaryOp::Divide => NodeKind::Div,
            BinaryOp::Mod => NodeKind::Mod,
            BinaryOp::Add => NodeKind::Add,
            BinaryOp::Subtract => NodeKind::Sub,
            BinaryOp::Less => NodeKind::Lss,
            BinaryOp::LessEqual => NodeKind::Leq,
            BinaryOp::Greater => NodeKind::Gtr,
            BinaryOp::GreaterEqual => NodeKind::Geq,
            BinaryOp::Equal => NodeKind::Eql,
            BinaryOp::NotEqual => NodeKind::Neq,
            BinaryOp::And => NodeKind::And,
            BinaryOp::Or => NodeKind::Or,
        }
    }

    pub fn from_node_kind(kind: NodeKind) -> Option<BinaryOp> {
        match kind {
            NodeKind::Mul => Some(BinaryOp::Multiply),
            NodeKind::Div => Some(BinaryOp::Divide),
            NodeKind::Mod => Some(BinaryOp::Mod),
            NodeKind::Add => Some(BinaryOp::Add),
            NodeKind::Sub => Some(BinaryOp::Subtract),
            NodeKind::Lss => Some(BinaryOp::Less),
            NodeKind::Leq => Some(BinaryOp::LessEqual),
            NodeKind::Gtr => Some(BinaryOp::Greater),
            NodeKind::Geq => Some(BinaryOp::GreaterEqual),
            NodeKind::Eql => Some(BinaryOp::Equal),
            NodeKind::Neq => Some(BinaryOp::NotEqual),
            NodeKind::And => Some(BinaryOp::And),
            NodeKind::Or => Some(BinaryOp::Or),
            _ => None,
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.node_kind())
    }
}

/// Operators applied to a single expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Negate,
    Not,
}

impl UnaryOp {
    pub fn node_kind(&self) -> NodeKind {
        match self {
            UnaryOp::Negate => NodeKind::Negate,
            UnaryOp::Not => NodeKind::Not,
        }
    }

    pub fn from_node_kind(kind: NodeKind) -> Option<UnaryOp> {
        match kind {
            NodeKind::Negate => Some(UnaryOp::Negate),
            NodeKind::Not => Some(UnaryOp::Not),
            _ => None,
        }
    }
}

impl Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.node_kind())
    }
}
