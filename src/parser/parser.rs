//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! Expressions are parsed by precedence climbing (see `expr`) and
//! statements by recursive descent through the statement lookup table
//! (see `stmt` and `lookups`).

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, MK_TOKEN,
};

use super::stmt::parse_stmt;

/// How deep blocks, `if` chains, groupings, unary operators and operator
/// chains may nest before the parse is rejected. Bounds both the recursion
/// here and the depth of the tree handed to the serializer.
pub const MAX_NESTING_DEPTH: usize = 128;

/// The main parser structure that maintains parsing state.
///
/// Holds the token stream and a cursor into it. The stream always ends in an
/// `End_of_input` token, and the cursor never moves past it.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Current nesting depth, see [`MAX_NESTING_DEPTH`]
    depth: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// A stream that does not end in `End_of_input` (for example a truncated
    /// token dump) gets one appended at the position of its last token.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        let needs_end = tokens
            .last()
            .map_or(true, |token| token.kind != TokenKind::EndOfInput);

        if needs_end {
            let pos = tokens.last().map_or(Position::new(1, 1), |token| token.pos);
            tokens.push(MK_TOKEN!(TokenKind::EndOfInput, String::new(), pos));
        }

        Parser {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> &Token {
        let previous = self.pos;
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[previous]
    }

    /// Expects a token of the specified kind and consumes it.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise returns an Error.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind.to_string(),
                    found: token.kind.to_string(),
                },
                token.pos,
            ));
        }

        Ok(self.advance().clone())
    }

    /// Goes one nesting level deeper, failing past [`MAX_NESTING_DEPTH`].
    ///
    /// Errors abandon the whole parse, so only successful paths call
    /// [`Parser::leave`].
    pub fn enter(&mut self) -> Result<(), Error> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }
        Ok(())
    }

    pub fn leave(&mut self, levels: usize) {
        self.depth = self.depth.saturating_sub(levels);
    }

    /// Checks if there are more tokens to parse.
    ///
    /// # Returns
    ///
    /// Returns true if the current token is not `End_of_input`.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EndOfInput
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().pos
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It parses statements until
/// `End_of_input` and returns them as one `Sequence`, or the first error.
///
/// # Arguments
///
/// * `tokens` - Tokens from the lexer or from a token dump
pub fn parse(tokens: Vec<Token>) -> Result<Node, Error> {
    let mut parser = Parser::new(tokens);

    let mut body = vec![];

    while parser.has_tokens() {
        let stmt = parse_stmt(&mut parser)?;
        tracing::trace!(kind = %stmt.kind(), "parsed statement");
        body.push(stmt);
    }

    tracing::debug!(statements = body.len(), "parsed program");
    Ok(Node::Sequence(body))
}
