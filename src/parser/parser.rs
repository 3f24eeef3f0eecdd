//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program entry point.
//! The parser keeps exactly two tokens of state, `current` and `peek`, and
//! pulls a fresh token from the lexer each time it advances.
//!
//! It maintains lookup tables for:
//! - Prefix handlers, for tokens that start an expression
//! - Infix handlers, for operator tokens that continue one
//! - Operator precedences

use std::collections::HashMap;

use log::{debug, trace};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, InfixHandler, InfixLookup, Precedence, PrecedenceLookup,
        PrefixHandler, PrefixLookup,
    },
    stmt::parse_stmt,
};

/// Deepest expression nesting the parser descends into before giving up.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
///
/// Instances are single-use: build one per input with `Parser::new`.
pub struct Parser<'a> {
    /// Token source
    lexer: Lexer<'a>,
    /// The token being parsed
    current_token: Token,
    /// One token of lookahead
    peek_token: Token,
    /// Diagnostics recorded so far, in order
    errors: Vec<Error>,
    /// Lookup table for prefix expression handlers
    prefix_lookup: PrefixLookup,
    /// Lookup table for infix expression handlers
    infix_lookup: InfixLookup,
    /// Lookup table for operator precedences
    precedence_lookup: PrecedenceLookup,
    /// Expressions currently being parsed, innermost included
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser over `lexer`.
    ///
    /// Pulls two tokens to fill `current` and `peek`, then registers the
    /// fixed handler tables.
    pub fn new(lexer: Lexer<'a>) -> Self {
        let mut parser = Parser {
            lexer,
            current_token: Token::end_of_input(),
            peek_token: Token::end_of_input(),
            errors: Vec::new(),
            prefix_lookup: HashMap::new(),
            infix_lookup: HashMap::new(),
            precedence_lookup: HashMap::new(),
            depth: 0,
        };
        parser.advance();
        parser.advance();
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    /// Returns the lookahead token.
    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current_token.is(kind)
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.is(kind)
    }

    /// Moves `peek` into `current` and pulls a new `peek` from the lexer.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current_token = std::mem::replace(&mut self.peek_token, next);
        trace!(
            "advance: current {} peek {}",
            self.current_token,
            self.peek_token
        );
    }

    /// Advances onto the lookahead if it is a `kind` token.
    ///
    /// Otherwise records an `UnexpectedToken` error and leaves the
    /// cursor where it is.
    pub fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.advance();
            true
        } else {
            let found = self.peek_token.clone();
            self.record_error(
                ErrorImpl::UnexpectedToken {
                    expected: kind,
                    found: found.kind,
                },
                found,
            );
            false
        }
    }

    /// Enters one more level of expression nesting.
    ///
    /// Records `NestingTooDeep` at the current token and returns false
    /// once `MAX_NESTING_DEPTH` levels are open.
    pub fn enter_nesting(&mut self) -> bool {
        if self.depth >= MAX_NESTING_DEPTH {
            let token = self.current_token.clone();
            self.record_error(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                token,
            );
            return false;
        }
        self.depth += 1;
        true
    }

    pub fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn nesting_depth(&self) -> usize {
        self.depth
    }

    pub fn record_error(&mut self, error_impl: ErrorImpl, token: Token) {
        let error = Error::new(error_impl, token);
        debug!("parse error: {}", error);
        self.errors.push(error);
    }

    /// Precedence of the lookahead token; unlisted kinds are `Lowest`.
    pub fn peek_precedence(&self) -> Precedence {
        self.precedence_of(self.peek_token.kind)
    }

    /// Precedence of the current token; unlisted kinds are `Lowest`.
    pub fn current_precedence(&self) -> Precedence {
        self.precedence_of(self.current_token.kind)
    }

    fn precedence_of(&self, kind: TokenKind) -> Precedence {
        self.precedence_lookup
            .get(&kind)
            .copied()
            .unwrap_or(Precedence::Lowest)
    }

    pub fn get_prefix_handler(&self, kind: TokenKind) -> Option<PrefixHandler> {
        self.prefix_lookup.get(&kind).copied()
    }

    pub fn get_infix_handler(&self, kind: TokenKind) -> Option<InfixHandler> {
        self.infix_lookup.get(&kind).copied()
    }

    /// Registers an infix handler and the precedence of its operator.
    pub fn infix(&mut self, kind: TokenKind, precedence: Precedence, infix_fn: InfixHandler) {
        self.precedence_lookup.insert(kind, precedence);
        self.infix_lookup.insert(kind, infix_fn);
    }

    /// Registers a prefix handler.
    pub fn prefix(&mut self, kind: TokenKind, prefix_fn: PrefixHandler) {
        self.prefix_lookup.insert(kind, prefix_fn);
    }

    /// Parses statements until `EndOfInput`.
    ///
    /// Always returns a program; statements that failed outright are
    /// dropped and their diagnostics are available through `errors`.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_token_is(TokenKind::EndOfInput) {
            if let Some(stmt) = parse_stmt(self) {
                program.statements.push(stmt);
            }
            self.advance();
        }

        debug!(
            "parsed program: {} statement(s), {} error(s)",
            program.len(),
            self.errors.len()
        );
        program
    }

    /// The recorded diagnostics as messages, in the order they occurred.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// The recorded diagnostics.
    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }
}

/// Parses `source` with a fresh lexer and parser.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (with its recorded diagnostics)
/// - The parsed Program
pub fn parse(source: &str) -> (Parser<'_>, Program) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    (parser, program)
}
