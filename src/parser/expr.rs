use crate::{
    ast::{
        ast::Expression,
        expressions::{
            BooleanLiteral, FunctionLiteral, Identifier, IfExpr, InfixExpr, IntegerLiteral,
            PrefixExpr,
        },
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
};

use super::{lookups::Precedence, parser::Parser, stmt::parse_block_stmt};

/// Parses an expression binding tighter than `precedence`.
///
/// Nesting is capped at `MAX_NESTING_DEPTH`; deeper input is reported
/// and yields no expression.
pub fn parse_expr(parser: &mut Parser<'_>, precedence: Precedence) -> Option<Expression> {
    if !parser.enter_nesting() {
        return None;
    }
    let expr = parse_pratt(parser, precedence);
    parser.leave_nesting();
    expr
}

fn parse_pratt(parser: &mut Parser<'_>, precedence: Precedence) -> Option<Expression> {
    // First parse the prefix
    let kind = parser.current_token_kind();
    let Some(prefix) = parser.get_prefix_handler(kind) else {
        let token = parser.current_token().clone();
        parser.record_error(ErrorImpl::NoPrefixParseFn { kind }, token);
        return None;
    };

    let mut left = prefix(parser);

    // While the next operator binds tighter than `precedence`, fold it into the lhs
    while !parser.peek_token_is(TokenKind::Semicolon) && precedence < parser.peek_precedence() {
        let Some(infix) = parser.get_infix_handler(parser.peek_token_kind()) else {
            return left;
        };

        parser.advance();
        left = Some(infix(parser, left));
    }

    left
}

pub fn parse_identifier(parser: &mut Parser<'_>) -> Option<Expression> {
    Some(Expression::Identifier(Identifier::new(
        parser.current_token().clone(),
    )))
}

pub fn parse_integer_literal(parser: &mut Parser<'_>) -> Option<Expression> {
    let token = parser.current_token().clone();

    match token.literal.parse::<i64>() {
        Ok(value) => Some(Expression::Integer(IntegerLiteral { token, value })),
        Err(_) => {
            let literal = token.literal.clone();
            parser.record_error(ErrorImpl::IntegerParse { literal }, token);
            None
        }
    }
}

pub fn parse_boolean(parser: &mut Parser<'_>) -> Option<Expression> {
    Some(Expression::Boolean(BooleanLiteral {
        value: parser.current_token_is(TokenKind::True),
        token: parser.current_token().clone(),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser<'_>) -> Option<Expression> {
    let operator_token = parser.current_token().clone();
    parser.advance();
    let right = parse_expr(parser, Precedence::Prefix);

    Some(Expression::Prefix(PrefixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        right: right.map(Box::new),
    }))
}

pub fn parse_grouped_expr(parser: &mut Parser<'_>) -> Option<Expression> {
    parser.advance();
    let expr = parse_expr(parser, Precedence::Lowest);

    if !parser.expect_peek(TokenKind::RParen) {
        return None;
    }

    expr
}

/// `if (<condition>) { ... }` with an optional `else { ... }`.
pub fn parse_if_expr(parser: &mut Parser<'_>) -> Option<Expression> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::LParen) {
        return None;
    }
    parser.advance();
    let condition = parse_expr(parser, Precedence::Lowest);

    if !parser.expect_peek(TokenKind::RParen) {
        return None;
    }
    if !parser.expect_peek(TokenKind::LBrace) {
        return None;
    }
    let consequence = parse_block_stmt(parser);

    let alternative = if parser.peek_token_is(TokenKind::Else) {
        parser.advance();
        if !parser.expect_peek(TokenKind::LBrace) {
            return None;
        }
        Some(parse_block_stmt(parser))
    } else {
        None
    };

    Some(Expression::If(IfExpr {
        token,
        condition: condition.map(Box::new),
        consequence,
        alternative,
    }))
}

/// `fn(<params>) { ... }`
pub fn parse_function_literal(parser: &mut Parser<'_>) -> Option<Expression> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::LParen) {
        return None;
    }
    let parameters = parse_function_parameters(parser)?;

    if !parser.expect_peek(TokenKind::LBrace) {
        return None;
    }
    let body = parse_block_stmt(parser);

    Some(Expression::Function(FunctionLiteral {
        token,
        parameters,
        body,
    }))
}

/// Parses `a, b, c)` starting on the `(` token; ends on the `)`.
pub fn parse_function_parameters(parser: &mut Parser<'_>) -> Option<Vec<Identifier>> {
    let mut parameters = Vec::new();

    if parser.peek_token_is(TokenKind::RParen) {
        parser.advance();
        return Some(parameters);
    }

    if !parser.expect_peek(TokenKind::Identifier) {
        return None;
    }
    parameters.push(Identifier::new(parser.current_token().clone()));

    while parser.peek_token_is(TokenKind::Comma) {
        parser.advance();
        if !parser.expect_peek(TokenKind::Identifier) {
            return None;
        }
        parameters.push(Identifier::new(parser.current_token().clone()));
    }

    if !parser.expect_peek(TokenKind::RParen) {
        return None;
    }

    Some(parameters)
}

pub fn parse_infix_expr(parser: &mut Parser<'_>, left: Option<Expression>) -> Expression {
    let operator_token = parser.current_token().clone();
    let precedence = parser.current_precedence();

    parser.advance();
    let right = parse_expr(parser, precedence);

    Expression::Infix(InfixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        left: left.map(Box::new),
        right: right.map(Box::new),
    })
}
