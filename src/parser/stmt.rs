use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::expr::{parse_expr, parse_paren_expr},
};

use super::{lookups::STMT_LOOKUP, parser::Parser};

pub fn parse_stmt(parser: &mut Parser) -> Result<Node, Error> {
    match STMT_LOOKUP.get(&parser.current_token_kind()) {
        Some(handler) => handler(parser),
        None => Err(Error::new(
            ErrorImpl::ExpectedStatement {
                found: parser.current_token_kind().to_string(),
            },
            parser.get_position(),
        )),
    }
}

/// `{ stmt* }`
///
/// One statement comes back as itself; zero or several come back as a
/// `Sequence`.
pub fn parse_block(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect(TokenKind::OpenCurly)?;
    parser.enter()?;

    let mut statements = Vec::new();
    while !parser
        .current_token()
        .is_one_of_many(&[TokenKind::CloseCurly, TokenKind::EndOfInput])
    {
        statements.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;
    parser.leave(1);

    if statements.len() == 1 {
        Ok(statements.remove(0))
    } else {
        Ok(Node::Sequence(statements))
    }
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.advance();
    // `else if` chains nest without a block in between
    parser.enter()?;

    let condition = parse_expr(parser, 0)?;
    let then_branch = parse_block(parser)?;

    let else_branch = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        if parser.current_token_kind() == TokenKind::OpenCurly {
            Some(parse_block(parser)?)
        } else {
            Some(parse_stmt(parser)?)
        }
    } else {
        None
    };

    parser.leave(1);
    Ok(Node::if_stmt(condition, then_branch, else_branch))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.advance();

    let condition = parse_expr(parser, 0)?;
    let body = parse_block(parser)?;

    Ok(Node::while_stmt(condition, body))
}

pub fn parse_assign_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let target = Node::Ident(parser.advance().value.clone());

    parser.expect(TokenKind::Assign)?;
    let value = parse_expr(parser, 0)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Node::assign(target, value))
}

pub fn parse_putc_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.advance();

    let expr = parse_paren_expr(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Node::Prtc(Box::new(expr)))
}

pub fn parse_print_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.advance();

    let expr = parse_paren_expr(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Node::Prts(Box::new(expr)))
}
