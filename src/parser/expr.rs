use crate::{
    ast::{ast::Node, expressions::{BinaryOp, UnaryOp}},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::{operator_info, UNARY_PRECEDENCE}, parser::Parser};

/// Precedence climbing.
///
/// Parses a primary, then keeps folding in binary operators whose precedence
/// is strictly above `min_precedence`. Each right-hand side is parsed with the
/// operator's own floor, so equal precedences associate to the left.
///
/// Every call and every folded operator counts as one nesting level, so the
/// depth of the resulting tree stays bounded.
pub fn parse_expr(parser: &mut Parser, min_precedence: i32) -> Result<Node, Error> {
    parser.enter()?;
    let mut left = parse_primary_expr(parser)?;
    let mut folds = 0;

    loop {
        let info = operator_info(parser.current_token_kind());
        if !info.is_binary || info.precedence <= min_precedence {
            break;
        }
        let Some(op) = info.node_kind.and_then(BinaryOp::from_node_kind) else {
            break;
        };

        parser.advance();
        parser.enter()?;
        folds += 1;

        let right = parse_expr(parser, info.right_floor())?;
        left = Node::binary(op, left, right);
    }

    parser.leave(folds + 1);
    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Node, Error> {
    match parser.current_token_kind() {
        TokenKind::OpenParen => parse_paren_expr(parser),
        TokenKind::Add => {
            parser.advance();
            parse_expr(parser, UNARY_PRECEDENCE)
        }
        // A `-` the lexer saw as subtraction can still start an operand in a
        // hand-written token dump.
        TokenKind::Negate | TokenKind::Subtract => parse_prefix_expr(parser, UnaryOp::Negate),
        TokenKind::Not => parse_prefix_expr(parser, UnaryOp::Not),
        TokenKind::Identifier => Ok(Node::Ident(parser.advance().value.clone())),
        TokenKind::Integer => Ok(Node::Integer(parser.advance().value.clone())),
        TokenKind::String => Ok(Node::String(parser.advance().value.clone())),
        _ => Err(Error::new(
            ErrorImpl::ExpectedExpression {
                found: parser.current_token_kind().to_string(),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_prefix_expr(parser: &mut Parser, op: UnaryOp) -> Result<Node, Error> {
    parser.advance();
    let operand = parse_expr(parser, UNARY_PRECEDENCE)?;

    Ok(Node::unary(op, operand))
}

pub fn parse_paren_expr(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let expr = parse_expr(parser, 0)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}
