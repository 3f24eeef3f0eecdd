use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, lookups::Precedence, parser::Parser};

pub fn parse_stmt(parser: &mut Parser<'_>) -> Option<Statement> {
    match parser.current_token_kind() {
        TokenKind::Let => parse_let_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        _ => parse_expression_stmt(parser),
    }
}

/// `let <identifier> = ... ;`
///
/// The bound value is skipped, not parsed: the cursor moves to the
/// terminating `;` and `value` is left unset.
pub fn parse_let_stmt(parser: &mut Parser<'_>) -> Option<Statement> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::Identifier) {
        return None;
    }
    let name = Identifier::new(parser.current_token().clone());

    if !parser.expect_peek(TokenKind::Assign) {
        return None;
    }
    parser.advance();

    while !parser.current_token_is(TokenKind::Semicolon)
        && !parser.current_token_is(TokenKind::EndOfInput)
    {
        parser.advance();
    }

    Some(Statement::Let(LetStmt {
        token,
        name,
        value: None,
    }))
}

/// `return ...`
///
/// Steps over at most one token after `return`; no return value is built.
pub fn parse_return_stmt(parser: &mut Parser<'_>) -> Option<Statement> {
    let token = parser.current_token().clone();

    parser.advance();
    if !parser.current_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(Statement::Return(ReturnStmt {
        token,
        return_value: None,
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser<'_>) -> Option<Statement> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, Precedence::Lowest);

    // Semicolons are optional terminators
    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(Statement::Expression(ExpressionStmt { token, expression }))
}

/// Parses statements from the `{` token up to the matching `}`.
///
/// Stops early at `EndOfInput` when the block is never closed.
pub fn parse_block_stmt(parser: &mut Parser<'_>) -> BlockStmt {
    let token = parser.current_token().clone();
    parser.advance();

    let mut statements = Vec::new();
    while !parser.current_token_is(TokenKind::RBrace)
        && !parser.current_token_is(TokenKind::EndOfInput)
    {
        if let Some(stmt) = parse_stmt(parser) {
            statements.push(stmt);
        }
        parser.advance();
    }

    BlockStmt { token, statements }
}
