use crate::{errors::errors::{Error, ErrorImpl}, Position, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Scanner over an in-memory source string.
///
/// Hands out one token per [`Lexer::next_token`] call. Besides the cursor it
/// remembers the last significant character it consumed, which decides whether
/// a `-` is a subtraction or a negation.
#[derive(Clone)]
pub struct Lexer {
    source: Vec<char>,
    pos: usize,
    line: u32,
    column: u32,
    last_significant: Option<char>,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            source: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            last_significant: None,
        }
    }

    pub fn at(&self) -> Option<char> {
        self.source.get(self.pos).copied()
    }

    pub fn peek(&self) -> Option<char> {
        self.source.get(self.pos + 1).copied()
    }

    pub fn advance(&mut self) -> Option<char> {
        let c = self.at()?;
        self.pos += 1;

        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(c)
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Scans the next token. Once `End_of_input` has been returned the caller
    /// must stop; further calls keep returning `End_of_input`.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        loop {
            self.skip_whitespace();

            let start = self.position();
            let Some(c) = self.at() else {
                return Ok(MK_TOKEN!(TokenKind::EndOfInput, String::new(), start));
            };

            let token = match c {
                '(' => self.single(TokenKind::OpenParen, start),
                ')' => self.single(TokenKind::CloseParen, start),
                '{' => self.single(TokenKind::OpenCurly, start),
                '}' => self.single(TokenKind::CloseCurly, start),
                ';' => self.single(TokenKind::Semicolon, start),
                ',' => self.single(TokenKind::Comma, start),
                '*' => self.single(TokenKind::Multiply, start),
                '%' => self.single(TokenKind::Mod, start),
                '+' => self.single(TokenKind::Add, start),
                '-' => {
                    let kind = match self.last_significant {
                        Some(last) if is_word_char(last) => TokenKind::Subtract,
                        _ => TokenKind::Negate,
                    };
                    self.single(kind, start)
                }
                '<' => self.follow('=', TokenKind::LessEqual, TokenKind::Less, start),
                '>' => self.follow('=', TokenKind::GreaterEqual, TokenKind::Greater, start),
                '!' => self.follow('=', TokenKind::NotEqual, TokenKind::Not, start),
                '=' => self.follow('=', TokenKind::Equal, TokenKind::Assign, start),
                '&' => self.double_or_char_code('&', TokenKind::And, start)?,
                '|' => self.double_or_char_code('|', TokenKind::Or, start)?,
                '/' => match self.peek() {
                    Some('/') => {
                        self.skip_line_comment();
                        continue;
                    }
                    Some('*') => {
                        self.skip_block_comment(start)?;
                        continue;
                    }
                    _ => self.single(TokenKind::Divide, start),
                },
                '\'' => self.char_literal(start)?,
                '"' => self.string_literal(start)?,
                c if is_word_char(c) => self.identifier_or_integer(start)?,
                other => {
                    return Err(Error::new(
                        ErrorImpl::UnrecognisedCharacter {
                            character: other,
                            code: other as u32,
                        },
                        start,
                    ))
                }
            };

            tracing::trace!(
                kind = %token.kind,
                value = %token.value,
                line = token.pos.line,
                column = token.pos.column,
                "scanned token"
            );

            return Ok(token);
        }
    }

    /// Builds a token from everything consumed since `start` and records the
    /// last consumed character for `-` disambiguation.
    fn make_token(&mut self, kind: TokenKind, value: String, start: Position) -> Token {
        self.last_significant = self
            .pos
            .checked_sub(1)
            .and_then(|index| self.source.get(index))
            .copied();

        MK_TOKEN!(kind, value, start)
    }

    fn single(&mut self, kind: TokenKind, start: Position) -> Token {
        self.advance();
        self.make_token(kind, String::new(), start)
    }

    fn follow(&mut self, expect: char, if_yes: TokenKind, if_no: TokenKind, start: Position) -> Token {
        self.advance();

        if self.at() == Some(expect) {
            self.advance();
            self.make_token(if_yes, String::new(), start)
        } else {
            self.make_token(if_no, String::new(), start)
        }
    }

    fn double_or_char_code(&mut self, c: char, doubled: TokenKind, start: Position) -> Result<Token, Error> {
        self.advance();

        if self.at() == Some(c) {
            self.advance();
            return Ok(self.make_token(doubled, String::new(), start));
        }

        // A lone `&` or `|` is not an operator. It reads the character right
        // after it and yields that character's code as an integer, so `&A`
        // scans as Integer 65. Old programs rely on this.
        match self.advance() {
            Some(next) => Ok(self.make_token(TokenKind::Integer, (next as u32).to_string(), start)),
            None => Err(Error::new(
                ErrorImpl::UnrecognisedCharacter {
                    character: c,
                    code: c as u32,
                },
                start,
            )),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\n' | '\r') = self.at() {
            self.advance();
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.at() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn skip_block_comment(&mut self, start: Position) -> Result<(), Error> {
        // opening `/*`
        self.advance();
        self.advance();

        loop {
            match self.advance() {
                None => return Err(Error::new(ErrorImpl::UnterminatedComment, start)),
                Some('*') if self.at() == Some('/') => {
                    self.advance();
                    return Ok(());
                }
                Some(_) => {}
            }
        }
    }

    fn char_literal(&mut self, start: Position) -> Result<Token, Error> {
        self.advance();

        let code = match self.advance() {
            None => return Err(Error::new(ErrorImpl::UnterminatedCharacter, start)),
            Some('\'') => return Err(Error::new(ErrorImpl::EmptyCharacterConstant, start)),
            Some('\\') => match self.advance() {
                Some('n') => 10,
                Some('\\') => '\\' as u32,
                Some(escape) => return Err(Error::new(ErrorImpl::UnknownEscape { escape }, start)),
                None => return Err(Error::new(ErrorImpl::UnterminatedCharacter, start)),
            },
            Some(c) => c as u32,
        };

        if self.at() != Some('\'') {
            return Err(Error::new(ErrorImpl::MultiCharacterConstant, start));
        }
        self.advance();

        Ok(self.make_token(TokenKind::Integer, code.to_string(), start))
    }

    fn string_literal(&mut self, start: Position) -> Result<Token, Error> {
        self.advance();

        let mut text = String::new();
        loop {
            match self.advance() {
                None => return Err(Error::new(ErrorImpl::UnterminatedString, start)),
                Some('\n') => return Err(Error::new(ErrorImpl::NewlineInString, start)),
                Some('"') => break,
                Some(c) => text.push(c),
            }
        }

        Ok(self.make_token(TokenKind::String, text, start))
    }

    fn identifier_or_integer(&mut self, start: Position) -> Result<Token, Error> {
        let mut text = String::new();
        while let Some(c) = self.at() {
            if !is_word_char(c) {
                break;
            }
            text.push(c);
            self.advance();
        }

        if text.chars().all(|c| c.is_ascii_digit()) {
            return Ok(self.make_token(TokenKind::Integer, text, start));
        }

        if text.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(Error::new(ErrorImpl::InvalidToken { token: text }, start));
        }

        if let Some(kind) = RESERVED_LOOKUP.get(text.as_str()) {
            Ok(self.make_token(*kind, String::new(), start))
        } else {
            Ok(self.make_token(TokenKind::Identifier, text, start))
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Scans the whole source, returning every token including the final
/// `End_of_input`.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token()?;
        let done = token.kind == TokenKind::EndOfInput;
        tokens.push(token);

        if done {
            break;
        }
    }

    tracing::debug!(tokens = tokens.len(), "tokenized source");
    Ok(tokens)
}
