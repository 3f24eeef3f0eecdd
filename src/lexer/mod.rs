//! Lexical analysis module for the front-end.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Single and double character operators and delimiters
//! - Recognition of keywords, identifiers and integer literals
//! - Whitespace skipping
//! - Unrecognised characters, which become `Illegal` tokens instead of errors

pub mod lexer;
pub mod tokens;
