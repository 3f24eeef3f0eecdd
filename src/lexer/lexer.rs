use lazy_static::lazy_static;
use regex::Regex;

use crate::MK_TOKEN;

use super::tokens::{lookup_identifier, Token, TokenKind};

lazy_static! {
    static ref IDENTIFIER_PATTERN: Regex =
        Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").expect("identifier pattern is valid");
    static ref INTEGER_PATTERN: Regex = Regex::new("^[0-9]+").expect("integer pattern is valid");
}

/// Pull-based tokenizer over a source buffer.
///
/// The cursor only ever moves forward; lexing the same text again means
/// building a new `Lexer`.
#[derive(Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer { source, pos: 0 }
    }

    /// Byte offset one past the last byte consumed.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn at(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    fn peek_byte(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos + 1).copied()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn advance_n(&mut self, n: usize) -> &'a str {
        let literal = &self.source[self.pos..self.pos + n];
        self.pos += n;
        literal
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.at(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    fn single(&mut self, kind: TokenKind) -> Token {
        MK_TOKEN!(kind, self.advance_n(1))
    }

    // `!` and `=` become `!=` / `==` when directly followed by `=`.
    fn either(&mut self, matched: TokenKind, unmatched: TokenKind) -> Token {
        if self.peek_byte() == Some(b'=') {
            MK_TOKEN!(matched, self.advance_n(2))
        } else {
            self.single(unmatched)
        }
    }

    fn read_run(&mut self, pattern: &Regex) -> &'a str {
        let len = pattern.find(self.remainder()).map_or(1, |m| m.end());
        self.advance_n(len)
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(byte) = self.at() else {
            return Token::end_of_input();
        };

        match byte {
            b';' => self.single(TokenKind::Semicolon),
            b'(' => self.single(TokenKind::LParen),
            b')' => self.single(TokenKind::RParen),
            b',' => self.single(TokenKind::Comma),
            b'+' => self.single(TokenKind::Plus),
            b'{' => self.single(TokenKind::LBrace),
            b'}' => self.single(TokenKind::RBrace),
            b'-' => self.single(TokenKind::Minus),
            b'/' => self.single(TokenKind::Slash),
            b'*' => self.single(TokenKind::Asterisk),
            b'<' => self.single(TokenKind::LessThan),
            b'>' => self.single(TokenKind::GreaterThan),
            b'!' => self.either(TokenKind::NotEqual, TokenKind::Bang),
            b'=' => self.either(TokenKind::Equal, TokenKind::Assign),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => {
                let word = self.read_run(&IDENTIFIER_PATTERN);
                MK_TOKEN!(lookup_identifier(word), word)
            }
            b'0'..=b'9' => {
                let digits = self.read_run(&INTEGER_PATTERN);
                MK_TOKEN!(TokenKind::Integer, digits)
            }
            _ => {
                // Keep the literal a valid slice: take the whole character.
                let width = self.remainder().chars().next().map_or(1, char::len_utf8);
                MK_TOKEN!(TokenKind::Illegal, self.advance_n(width))
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens up to, but not including, `EndOfInput`.
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is(TokenKind::EndOfInput) {
            None
        } else {
            Some(token)
        }
    }
}

/// Drains a fresh lexer over `source`, ending with the `EndOfInput` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens: Vec<Token> = lex.by_ref().collect();
    tokens.push(lex.next_token());
    tokens
}
