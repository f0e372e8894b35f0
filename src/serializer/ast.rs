use std::fmt::{Display, Write};

use crate::{
    ast::{
        ast::{Node, NodeKind},
        expressions::{BinaryOp, UnaryOp},
    },
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// Marker line for an absent child.
const NONE_MARKER: &str = ";";

/// Pre-order AST dump, one line per node.
///
/// ```text
/// Sequence
/// ;
/// Assign
/// Identifier x
/// Integer 1
/// ```
impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_node(f, self)
    }
}

fn write_none<W: Write>(out: &mut W) -> std::fmt::Result {
    writeln!(out, "{}", NONE_MARKER)
}

fn write_node<W: Write>(out: &mut W, node: &Node) -> std::fmt::Result {
    match node {
        Node::Ident(value) | Node::Integer(value) | Node::String(value) => {
            writeln!(out, "{} {}", node.kind(), value)
        }
        Node::Binary { left, right, .. } => {
            writeln!(out, "{}", node.kind())?;
            write_node(out, left)?;
            write_node(out, right)
        }
        Node::Assign { target, value } => {
            writeln!(out, "{}", node.kind())?;
            write_node(out, target)?;
            write_node(out, value)
        }
        Node::Unary { operand: child, .. } | Node::Prtc(child) | Node::Prts(child) => {
            writeln!(out, "{}", node.kind())?;
            write_node(out, child)?;
            write_none(out)
        }
        Node::If {
            condition,
            then_branch,
            else_branch,
        } => {
            writeln!(out, "{}", NodeKind::If)?;
            write_node(out, condition)?;
            writeln!(out, "{}", NodeKind::If)?;
            write_node(out, then_branch)?;
            match else_branch {
                Some(else_branch) => write_node(out, else_branch),
                None => write_none(out),
            }
        }
        Node::While { condition, body } => {
            writeln!(out, "{}", node.kind())?;
            write_node(out, condition)?;
            write_node(out, body)
        }
        Node::Sequence(items) => write_sequence(out, items),
    }
}

/// A sequence is a left-leaning chain: `Sequence(Sequence(;, a), b)` for
/// `[a, b]`. Written flat: every `Sequence` header first, then `;`, then
/// the items in order.
fn write_sequence<W: Write>(out: &mut W, items: &[Node]) -> std::fmt::Result {
    for _ in items {
        writeln!(out, "{}", NodeKind::Sequence)?;
    }
    write_none(out)?;
    for item in items {
        write_node(out, item)?;
    }
    Ok(())
}

/// Writes a tree in the AST dump format.
pub fn serialize_ast(node: &Node) -> String {
    let out = node.to_string();
    tracing::debug!(lines = out.lines().count(), "serialized ast");
    out
}

/// Reads an AST dump back into a tree.
///
/// A dump that is just `;` is the empty program.
pub fn deserialize_ast(text: &str) -> Result<Node, Error> {
    let mut reader = AstReader::new(text);

    let root = reader.read_node()?.unwrap_or(Node::Sequence(vec![]));

    if let Some((line_number, _)) = reader.peek() {
        return Err(reader.malformed_at(line_number, "trailing lines after the root node"));
    }

    tracing::debug!(kind = %root.kind(), "deserialized ast");
    Ok(root)
}

/// Deepest node nesting `deserialize_ast` accepts. Well above anything the
/// parser can produce.
pub const MAX_AST_DEPTH: usize = 512;

/// Cursor over the non-blank lines of an AST dump.
struct AstReader<'a> {
    lines: Vec<(u32, &'a str)>,
    pos: usize,
    depth: usize,
}

impl<'a> AstReader<'a> {
    fn new(text: &'a str) -> Self {
        // only `\n` ends a line, a `\r` belongs to the value before it
        let lines = text
            .split('\n')
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| (index as u32 + 1, line))
            .collect();

        AstReader {
            lines,
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<(u32, &'a str)> {
        self.lines.get(self.pos).copied()
    }

    fn next_line(&mut self) -> Result<(u32, &'a str), Error> {
        match self.peek() {
            Some(line) => {
                self.pos += 1;
                Ok(line)
            }
            None => Err(self.malformed("unexpected end of dump")),
        }
    }

    fn end_line(&self) -> u32 {
        self.lines.last().map_or(1, |(line_number, _)| line_number + 1)
    }

    fn malformed(&self, message: &str) -> Error {
        let line_number = self.peek().map_or(self.end_line(), |(line_number, _)| line_number);
        self.malformed_at(line_number, message)
    }

    fn malformed_at(&self, line_number: u32, message: &str) -> Error {
        Error::new(
            ErrorImpl::MalformedAst {
                message: message.to_string(),
            },
            Position::new(line_number, 0),
        )
    }

    /// Reads one node, or `None` for the absent-child marker.
    fn read_node(&mut self) -> Result<Option<Node>, Error> {
        if self.depth >= MAX_AST_DEPTH {
            return Err(self.malformed(&format!("nesting deeper than {} levels", MAX_AST_DEPTH)));
        }

        self.depth += 1;
        let node = self.read_node_inner();
        self.depth -= 1;
        node
    }

    fn read_node_inner(&mut self) -> Result<Option<Node>, Error> {
        let (line_number, line) = self.next_line()?;
        if line.trim() == NONE_MARKER {
            return Ok(None);
        }

        let (name, value) = match line.split_once(' ') {
            Some((name, value)) => (name, Some(value)),
            None => (line.trim_end(), None),
        };

        let kind = NodeKind::from_name(name).ok_or_else(|| {
            Error::new(
                ErrorImpl::UnknownNodeKind {
                    name: name.to_string(),
                },
                Position::new(line_number, 0),
            )
        })?;

        if kind.is_leaf() {
            return self.read_leaf(kind, value, line_number).map(Some);
        }
        if value.is_some_and(|value| !value.trim().is_empty()) {
            return Err(self.malformed_at(line_number, &format!("{} takes no value", kind)));
        }

        let node = match kind {
            NodeKind::Sequence => self.read_sequence()?,
            NodeKind::If => {
                let condition = self.read_required("If condition")?;

                let (pair_line, pair) = self.next_line()?;
                if pair.trim() != NodeKind::If.name() {
                    return Err(self.malformed_at(pair_line, "expected the If branch pair"));
                }
                let then_branch = self.read_node()?.unwrap_or(Node::Sequence(vec![]));
                let else_branch = self.read_node()?;

                Node::if_stmt(condition, then_branch, else_branch)
            }
            NodeKind::While => {
                let condition = self.read_required("While condition")?;
                let body = self.read_node()?.unwrap_or(Node::Sequence(vec![]));

                Node::while_stmt(condition, body)
            }
            NodeKind::Assign => {
                let target = self.read_required("Assign target")?;
                let value = self.read_required("Assign value")?;

                Node::assign(target, value)
            }
            NodeKind::Prtc => Node::Prtc(Box::new(self.read_single_child("Prtc")?)),
            NodeKind::Prts => Node::Prts(Box::new(self.read_single_child("Prts")?)),
            _ => {
                if let Some(op) = UnaryOp::from_node_kind(kind) {
                    Node::unary(op, self.read_single_child(kind.name())?)
                } else if let Some(op) = BinaryOp::from_node_kind(kind) {
                    let left = self.read_required("left operand")?;
                    let right = self.read_required("right operand")?;

                    Node::binary(op, left, right)
                } else {
                    return Err(self.malformed_at(line_number, &format!("unexpected {}", kind)));
                }
            }
        };

        Ok(Some(node))
    }

    fn read_leaf(&self, kind: NodeKind, value: Option<&str>, line_number: u32) -> Result<Node, Error> {
        match kind {
            NodeKind::String => Ok(Node::String(value.unwrap_or("").to_string())),
            NodeKind::Ident | NodeKind::Integer => {
                let value = value.map(str::trim).unwrap_or("");
                if value.is_empty() {
                    return Err(self.malformed_at(line_number, &format!("{} without a value", kind)));
                }

                if kind == NodeKind::Ident {
                    Ok(Node::Ident(value.to_string()))
                } else {
                    Ok(Node::Integer(value.to_string()))
                }
            }
            _ => Err(self.malformed_at(line_number, &format!("{} is not a leaf", kind))),
        }
    }

    fn read_required(&mut self, what: &str) -> Result<Node, Error> {
        let line_number = self.peek().map_or(self.end_line(), |(line_number, _)| line_number);

        self.read_node()?
            .ok_or_else(|| self.malformed_at(line_number, &format!("missing {}", what)))
    }

    /// Operand followed by the `;` that fills the unused right slot.
    fn read_single_child(&mut self, owner: &str) -> Result<Node, Error> {
        let child = self.read_required(&format!("{} operand", owner))?;

        let (line_number, line) = self.next_line()?;
        if line.trim() != NONE_MARKER {
            return Err(self.malformed_at(
                line_number,
                &format!("{} has no right child, found {}", owner, line.trim()),
            ));
        }

        Ok(child)
    }

    /// Reads the rest of a sequence chain whose first `Sequence` line was
    /// already consumed.
    ///
    /// Consecutive `Sequence` headers are counted first so a long program
    /// does not recurse once per statement.
    fn read_sequence(&mut self) -> Result<Node, Error> {
        let mut depth = 1;
        while let Some((_, line)) = self.peek() {
            if line.trim() != NodeKind::Sequence.name() {
                break;
            }
            self.pos += 1;
            depth += 1;
        }

        let mut items = match self.read_node()? {
            None => vec![],
            Some(Node::Sequence(items)) => items,
            Some(item) => vec![item],
        };

        for _ in 0..depth {
            if let Some(item) = self.read_node()? {
                items.push(item);
            }
        }

        Ok(Node::Sequence(items))
    }
}
