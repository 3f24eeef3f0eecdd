//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that pulls tokens from a `Lexer`
//! and assembles a `Program`. It uses a Pratt parser for expressions
//! with operator precedence and handles:
//!
//! - Statement parsing (let, return, expression and block statements)
//! - Expression parsing (prefix and infix operators, grouping, literals,
//!   if-expressions and function literals)
//! - Error accumulation: failures are recorded and parsing carries on
//!
//! Prefix handlers are keyed by the token that starts an expression and
//! infix handlers by the operator token that continues one; the same
//! precedence table drives both the loop test and the right operand.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
