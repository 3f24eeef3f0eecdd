use std::collections::HashMap;

use crate::{ast::ast::Expression, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

/// Operator precedence, weakest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Precedence {
    Lowest,
    Equals,      // == !=
    LessGreater, // < >
    Sum,         // + -
    Product,     // * /
    Prefix,      // !x -x
    /// Reserved for call expressions; no call syntax is parsed yet.
    Call,
}

pub type PrefixHandler = for<'p, 'a> fn(&'p mut Parser<'a>) -> Option<Expression>;
pub type InfixHandler = for<'p, 'a> fn(&'p mut Parser<'a>, Option<Expression>) -> Expression;

pub fn create_token_lookups(parser: &mut Parser<'_>) {
    // Equality and comparison
    parser.infix(TokenKind::Equal, Precedence::Equals, parse_infix_expr);
    parser.infix(TokenKind::NotEqual, Precedence::Equals, parse_infix_expr);
    parser.infix(TokenKind::LessThan, Precedence::LessGreater, parse_infix_expr);
    parser.infix(TokenKind::GreaterThan, Precedence::LessGreater, parse_infix_expr);

    // Additive and multiplicative
    parser.infix(TokenKind::Plus, Precedence::Sum, parse_infix_expr);
    parser.infix(TokenKind::Minus, Precedence::Sum, parse_infix_expr);
    parser.infix(TokenKind::Asterisk, Precedence::Product, parse_infix_expr);
    parser.infix(TokenKind::Slash, Precedence::Product, parse_infix_expr);

    // Literals and symbols
    parser.prefix(TokenKind::Identifier, parse_identifier);
    parser.prefix(TokenKind::Integer, parse_integer_literal);
    parser.prefix(TokenKind::True, parse_boolean);
    parser.prefix(TokenKind::False, parse_boolean);
    parser.prefix(TokenKind::Bang, parse_prefix_expr);
    parser.prefix(TokenKind::Minus, parse_prefix_expr);
    parser.prefix(TokenKind::LParen, parse_grouped_expr);

    // Compound expressions
    parser.prefix(TokenKind::If, parse_if_expr);
    parser.prefix(TokenKind::Function, parse_function_literal);
}

// Lookup tables inside parser struct, filled once by `create_token_lookups`
pub type PrefixLookup = HashMap<TokenKind, PrefixHandler>;
pub type InfixLookup = HashMap<TokenKind, InfixHandler>;
pub type PrecedenceLookup = HashMap<TokenKind, Precedence>;
