use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use super::expressions::{BinaryOp, UnaryOp};

lazy_static! {
    /// Dump name -> kind, used when reading AST dumps back in.
    pub static ref NODE_NAME_LOOKUP: HashMap<&'static str, NodeKind> = NodeKind::ALL
        .iter()
        .map(|kind| (kind.name(), *kind))
        .collect();
}

/// Node Kinds
///
/// One entry per line shape in an AST dump. Several [`Node`] variants share a
/// shape (every binary operator is a `Node::Binary`), so this is finer grained
/// than the enum itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Ident,
    String,
    Integer,
    Sequence,
    If,
    Prtc,
    Prts,
    While,
    Assign,
    Negate,
    Not,
    Mul,
    Div,
    Mod,
    Add,
    Sub,
    Lss,
    Leq,
    Gtr,
    Geq,
    Eql,
    Neq,
    And,
    Or,
}

impl NodeKind {
    pub const ALL: [NodeKind; 24] = [
        NodeKind::Ident,
        NodeKind::String,
        NodeKind::Integer,
        NodeKind::Sequence,
        NodeKind::If,
        NodeKind::Prtc,
        NodeKind::Prts,
        NodeKind::While,
        NodeKind::Assign,
        NodeKind::Negate,
        NodeKind::Not,
        NodeKind::Mul,
        NodeKind::Div,
        NodeKind::Mod,
        NodeKind::Add,
        NodeKind::Sub,
        NodeKind::Lss,
        NodeKind::Leq,
        NodeKind::Gtr,
        NodeKind::Geq,
        NodeKind::Eql,
        NodeKind::Neq,
        NodeKind::And,
        NodeKind::Or,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Ident => "Identifier",
            NodeKind::String => "String",
            NodeKind::Integer => "Integer",
            NodeKind::Sequence => "Sequence",
            NodeKind::If => "If",
            NodeKind::Prtc => "Prtc",
            NodeKind::Prts => "Prts",
            NodeKind::While => "While",
            NodeKind::Assign => "Assign",
            NodeKind::Negate => "Negate",
            NodeKind::Not => "Not",
            NodeKind::Mul => "Multiply",
            NodeKind::Div => "Divide",
            NodeKind::Mod => "Mod",
            NodeKind::Add => "Add",
            NodeKind::Sub => "Subtract",
            NodeKind::Lss => "Less",
            NodeKind::Leq => "LessEqual",
            NodeKind::Gtr => "Greater",
            NodeKind::Geq => "GreaterEqual",
            NodeKind::Eql => "Equal",
            NodeKind::Neq => "NotEqual",
            NodeKind::And => "And",
            NodeKind::Or => "Or",
        }
    }

    pub fn from_name(name: &str) -> Option<NodeKind> {
        NODE_NAME_LOOKUP.get(name).copied()
    }

    /// Leaves print their value on the same line and have no children.
    pub fn is_leaf(&self) -> bool {
        matches!(self, NodeKind::Ident | NodeKind::String | NodeKind::Integer)
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A node of the syntax tree.
///
/// Each variant names its children. The only optional child is the else
/// branch of an `If`; every other slot always holds a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Ident(String),
    Integer(String),
    String(String),
    Binary {
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    Assign {
        target: Box<Node>,
        value: Box<Node>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Node>,
    },
    If {
        condition: Box<Node>,
        then_branch: Box<Node>,
        else_branch: Option<Box<Node>>,
    },
    While {
        condition: Box<Node>,
        body: Box<Node>,
    },
    /// `putc(expr);`
    Prtc(Box<Node>),
    /// `print(expr);`
    Prts(Box<Node>),
    /// Statements in program order.
    Sequence(Vec<Node>),
}

impl Node {
    pub fn binary(op: BinaryOp, left: Node, right: Node) -> Node {
        Node::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(op: UnaryOp, operand: Node) -> Node {
        Node::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn assign(target: Node, value: Node) -> Node {
        Node::Assign {
            target: Box::new(target),
            value: Box::new(value),
        }
    }

    pub fn if_stmt(condition: Node, then_branch: Node, else_branch: Option<Node>) -> Node {
        Node::If {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
        }
    }

    pub fn while_stmt(condition: Node, body: Node) -> Node {
        Node::While {
            condition: Box::new(condition),
            body: Box::new(body),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Ident(_) => NodeKind::Ident,
            Node::Integer(_) => NodeKind::Integer,
            Node::String(_) => NodeKind::String,
            Node::Binary { op, .. } => op.node_kind(),
            Node::Assign { .. } => NodeKind::Assign,
            Node::Unary { op, .. } => op.node_kind(),
            Node::If { .. } => NodeKind::If,
            Node::While { .. } => NodeKind::While,
            Node::Prtc(_) => NodeKind::Prtc,
            Node::Prts(_) => NodeKind::Prts,
            Node::Sequence(_) => NodeKind::Sequence,
        }
    }

    /// The payload of an identifier or literal leaf.
    pub fn leaf_value(&self) -> Option<&str> {
        match self {
            Node::Ident(value) | Node::Integer(value) | Node::String(value) => Some(value),
            _ => None,
        }
    }
}
