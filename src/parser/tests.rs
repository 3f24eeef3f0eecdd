//! Unit tests for the parser module.
//!
//! This module contains tests for parsing various language constructs including:
//! - Let and return statements
//! - Prefix and infix expressions, precedence and grouping
//! - If-expressions, blocks and function literals
//! - Error accumulation

use crate::{
    ast::{
        ast::{Expression, Node, Program, Statement},
        expressions::Identifier,
    },
    lexer::lexer::Lexer,
};

use super::{
    lookups::Precedence,
    parser::{parse, Parser, MAX_NESTING_DEPTH},
};

fn parse_checked(source: &str) -> Program {
    let (parser, program) = parse(source);
    assert!(
        parser.errors().is_empty(),
        "parser errors for {:?}: {:?}",
        source,
        parser.errors()
    );
    program
}

fn single_expression(program: &Program) -> &Expression {
    assert_eq!(program.len(), 1, "program: {:?}", program);
    match &program.statements[0] {
        Statement::Expression(stmt) => stmt
            .expression
            .as_ref()
            .expect("expression statement has an expression"),
        other => panic!("expected an expression statement, got {:?}", other),
    }
}

fn names(parameters: &[Identifier]) -> Vec<&str> {
    parameters.iter().map(|param| param.value.as_str()).collect()
}

#[test]
fn test_parse_empty_program() {
    let program = parse_checked("");

    assert!(program.is_empty());
    assert_eq!(program.token_literal(), "");
    assert_eq!(program.to_string(), "");
}

#[test]
fn test_parser_primes_two_tokens() {
    let parser = Parser::new(Lexer::new("let x"));

    assert_eq!(parser.current_token().literal, "let");
    assert_eq!(parser.peek_token().literal, "x");
}

#[test]
fn test_parse_let_statements() {
    let program = parse_checked("let x = 5;\nlet y = 10;\nlet foobar = 838383;");

    assert_eq!(program.len(), 3);
    for (stmt, name) in program.iter().zip(["x", "y", "foobar"]) {
        assert_eq!(stmt.token_literal(), "let");
        match stmt {
            Statement::Let(let_stmt) => {
                assert_eq!(let_stmt.name.value, name);
                assert_eq!(let_stmt.name.token_literal(), name);
                assert!(let_stmt.value.is_none());
            }
            other => panic!("expected a let statement, got {:?}", other),
        }
    }
    assert_eq!(program.statements[0].to_string(), "let x = ;");
}

#[test]
fn test_let_skips_value_up_to_semicolon() {
    let program = parse_checked("let x = 1 + 2 * foo; y");

    assert_eq!(program.len(), 2);
    assert!(matches!(program.statements[0], Statement::Let(_)));
    assert_eq!(program.statements[1].to_string(), "y");
}

#[test]
fn test_let_without_semicolon_stops_at_end_of_input() {
    let program = parse_checked("let x = 5");

    assert_eq!(program.len(), 1);
    assert!(matches!(program.statements[0], Statement::Let(_)));
}

#[test]
fn test_let_errors() {
    let (parser, _) = parse("let = 5;");
    assert_eq!(
        parser.errors()[0],
        "expected next token to be Identifier, got Assign instead"
    );

    let (parser, program) = parse("let x 5;");
    assert_eq!(
        parser.errors()[0],
        "expected next token to be Assign, got Integer instead"
    );
    assert!(program.iter().all(|stmt| !matches!(stmt, Statement::Let(_))));
}

#[test]
fn test_errors_do_not_stop_the_parse() {
    let (parser, program) = parse("let = 5; let y = 10;");

    assert_eq!(
        parser.errors(),
        vec![
            "expected next token to be Identifier, got Assign instead".to_string(),
            "no prefix parse function for Assign".to_string(),
        ]
    );
    match program.statements.last() {
        Some(Statement::Let(stmt)) => assert_eq!(stmt.name.value, "y"),
        other => panic!("expected the trailing let statement, got {:?}", other),
    }
}

#[test]
fn test_parse_return_statements() {
    let program = parse_checked("return 5;\nreturn 10;\nreturn 993322;");

    assert_eq!(program.len(), 3);
    for stmt in program.iter() {
        assert_eq!(stmt.token_literal(), "return");
        match stmt {
            Statement::Return(ret) => assert!(ret.return_value.is_none()),
            other => panic!("expected a return statement, got {:?}", other),
        }
    }
    assert_eq!(program.statements[0].to_string(), "return ;");
}

#[test]
fn test_bare_return() {
    let program = parse_checked("return;");

    assert_eq!(program.len(), 1);
    assert!(matches!(program.statements[0], Statement::Return(_)));
}

#[test]
fn test_return_steps_over_one_token_only() {
    // `return` consumes `a` and lands on `+`; `b` is parsed on its own.
    let program = parse_checked("return a + b;");

    assert_eq!(program.len(), 2);
    assert!(matches!(program.statements[0], Statement::Return(_)));
    assert_eq!(program.statements[1].to_string(), "b");
}

#[test]
fn test_parse_identifier_expression() {
    let program = parse_checked("foobar;");

    match single_expression(&program) {
        Expression::Identifier(ident) => {
            assert_eq!(ident.value, "foobar");
            assert_eq!(ident.token_literal(), "foobar");
        }
        other => panic!("expected an identifier, got {:?}", other),
    }
}

#[test]
fn test_parse_integer_literal() {
    let program = parse_checked("5;");

    match single_expression(&program) {
        Expression::Integer(int) => {
            assert_eq!(int.value, 5);
            assert_eq!(int.token_literal(), "5");
        }
        other => panic!("expected an integer literal, got {:?}", other),
    }
}

#[test]
fn test_parse_max_integer() {
    let program = parse_checked("9223372036854775807");

    match single_expression(&program) {
        Expression::Integer(int) => assert_eq!(int.value, i64::MAX),
        other => panic!("expected an integer literal, got {:?}", other),
    }
}

#[test]
fn test_parse_boolean_expressions() {
    for (source, expected) in [("true;", true), ("false;", false)] {
        let program = parse_checked(source);
        match single_expression(&program) {
            Expression::Boolean(boolean) => assert_eq!(boolean.value, expected),
            other => panic!("expected a boolean, got {:?}", other),
        }
    }
}

#[test]
fn test_parse_prefix_expressions() {
    let cases = [
        ("!5;", "!", "5"),
        ("-15;", "-", "15"),
        ("!true;", "!", "true"),
        ("!false;", "!", "false"),
        ("-a", "-", "a"),
    ];

    for (source, operator, right) in cases {
        let program = parse_checked(source);
        match single_expression(&program) {
            Expression::Prefix(prefix) => {
                assert_eq!(prefix.operator, operator);
                assert_eq!(
                    prefix.right.as_ref().map(|expr| expr.to_string()),
                    Some(right.to_string())
                );
            }
            other => panic!("expected a prefix expression, got {:?}", other),
        }
    }
}

#[test]
fn test_parse_infix_expressions() {
    let cases = [
        ("5 + 5;", "5", "+", "5"),
        ("5 - 5;", "5", "-", "5"),
        ("5 * 5;", "5", "*", "5"),
        ("5 / 5;", "5", "/", "5"),
        ("5 > 5;", "5", ">", "5"),
        ("5 < 5;", "5", "<", "5"),
        ("5 == 5;", "5", "==", "5"),
        ("5 != 5;", "5", "!=", "5"),
        ("true == true", "true", "==", "true"),
        ("true != false", "true", "!=", "false"),
        ("alice * bob", "alice", "*", "bob"),
    ];

    for (source, left, operator, right) in cases {
        let program = parse_checked(source);
        match single_expression(&program) {
            Expression::Infix(infix) => {
                assert_eq!(infix.operator, operator);
                assert_eq!(infix.token_literal(), operator);
                assert_eq!(infix.left.as_ref().map(|e| e.to_string()), Some(left.to_string()));
                assert_eq!(infix.right.as_ref().map(|e| e.to_string()), Some(right.to_string()));
            }
            other => panic!("expected an infix expression, got {:?}", other),
        }
    }
}

#[test]
fn test_operator_precedence_rendering() {
    let cases = [
        ("-a * b", "((-a) * b)"),
        ("!-a", "(!(-a))"),
        ("a + b + c", "((a + b) + c)"),
        ("a + b - c", "((a + b) - c)"),
        ("a * b * c", "((a * b) * c)"),
        ("a * b / c", "((a * b) / c)"),
        ("a + b / c", "(a + (b / c))"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
        ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
        ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
        (
            "3 + 4 * 5 == 3 * 1 + 4 * 5",
            "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
        ),
        ("true", "true"),
        ("false", "false"),
        ("3 > 5 == false", "((3 > 5) == false)"),
        ("3 < 5 == true", "((3 < 5) == true)"),
        ("1 + 2 * 3 + 4", "((1 + (2 * 3)) + 4)"),
        ("1 - 2 - 3", "((1 - 2) - 3)"),
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
        ("(5 + 5) * 2", "((5 + 5) * 2)"),
        ("(1 + 2) * 3", "((1 + 2) * 3)"),
        ("2 / (5 + 5)", "(2 / (5 + 5))"),
        ("-(5 + 5)", "(-(5 + 5))"),
        ("!(true == true)", "(!(true == true))"),
        ("((a))", "a"),
    ];

    for (source, expected) in cases {
        let program = parse_checked(source);
        assert_eq!(program.to_string(), expected, "rendering {:?}", source);
    }
}

#[test]
fn test_precedence_ordering() {
    assert!(Precedence::Lowest < Precedence::Equals);
    assert!(Precedence::Equals < Precedence::LessGreater);
    assert!(Precedence::LessGreater < Precedence::Sum);
    assert!(Precedence::Sum < Precedence::Product);
    assert!(Precedence::Product < Precedence::Prefix);
    assert!(Precedence::Prefix < Precedence::Call);
}

#[test]
fn test_parse_if_expression() {
    let program = parse_checked("if (x < y) { x }");

    match single_expression(&program) {
        Expression::If(if_expr) => {
            assert_eq!(if_expr.token_literal(), "if");
            assert_eq!(
                if_expr.condition.as_ref().map(|c| c.to_string()),
                Some("(x < y)".to_string())
            );
            assert_eq!(if_expr.consequence.len(), 1);
            match &if_expr.consequence.statements[0] {
                Statement::Expression(stmt) => match &stmt.expression {
                    Some(Expression::Identifier(ident)) => assert_eq!(ident.value, "x"),
                    other => panic!("expected identifier `x`, got {:?}", other),
                },
                other => panic!("expected an expression statement, got {:?}", other),
            }
            assert!(if_expr.alternative.is_none());
        }
        other => panic!("expected an if expression, got {:?}", other),
    }
    assert_eq!(program.to_string(), "if(x < y) x");
}

#[test]
fn test_parse_if_else_expression() {
    let program = parse_checked("if (x < y) { x } else { y }");

    match single_expression(&program) {
        Expression::If(if_expr) => {
            assert_eq!(if_expr.consequence.to_string(), "x");
            let alternative = if_expr.alternative.as_ref().expect("else branch");
            assert_eq!(alternative.len(), 1);
            assert_eq!(alternative.to_string(), "y");
        }
        other => panic!("expected an if expression, got {:?}", other),
    }
    assert_eq!(program.to_string(), "if(x < y) xelsey");
}

#[test]
fn test_block_ends_at_closing_brace() {
    let program = parse_checked("if (x) { a; b } c");

    assert_eq!(program.len(), 2);
    match &program.statements[0] {
        Statement::Expression(stmt) => match &stmt.expression {
            Some(Expression::If(if_expr)) => {
                assert_eq!(if_expr.consequence.len(), 2);
                assert_eq!(if_expr.consequence.token_literal(), "{");
            }
            other => panic!("expected an if expression, got {:?}", other),
        },
        other => panic!("expected an expression statement, got {:?}", other),
    }
    assert_eq!(program.statements[1].to_string(), "c");
}

#[test]
fn test_nested_blocks_close_independently() {
    let program = parse_checked("if (a) { if (b) { c } d }");

    match single_expression(&program) {
        Expression::If(outer) => {
            assert_eq!(outer.consequence.len(), 2);
            assert!(matches!(
                &outer.consequence.statements[0],
                Statement::Expression(stmt) if matches!(stmt.expression, Some(Expression::If(_)))
            ));
            assert_eq!(outer.consequence.statements[1].to_string(), "d");
        }
        other => panic!("expected an if expression, got {:?}", other),
    }
}

#[test]
fn test_unclosed_block_stops_at_end_of_input() {
    let program = parse_checked("if (x) { a");

    match single_expression(&program) {
        Expression::If(if_expr) => assert_eq!(if_expr.consequence.to_string(), "a"),
        other => panic!("expected an if expression, got {:?}", other),
    }
}

#[test]
fn test_parse_function_literal() {
    let program = parse_checked("fn(x, y) { x + y; }");

    match single_expression(&program) {
        Expression::Function(function) => {
            assert_eq!(function.token_literal(), "fn");
            assert_eq!(names(&function.parameters), vec!["x", "y"]);
            assert_eq!(function.body.len(), 1);
            assert_eq!(function.body.statements[0].to_string(), "(x + y)");
        }
        other => panic!("expected a function literal, got {:?}", other),
    }
    assert_eq!(program.to_string(), "fn(x, y) (x + y)");
}

#[test]
fn test_function_parameters() {
    let cases: [(&str, Vec<&str>); 3] = [
        ("fn() {};", vec![]),
        ("fn(x) {};", vec!["x"]),
        ("fn(one, two, three) { one; }", vec!["one", "two", "three"]),
    ];

    for (source, expected) in cases {
        let program = parse_checked(source);
        match single_expression(&program) {
            Expression::Function(function) => {
                assert_eq!(names(&function.parameters), expected, "parameters of {:?}", source)
            }
            other => panic!("expected a function literal, got {:?}", other),
        }
    }
}

#[test]
fn test_function_parameters_must_be_identifiers() {
    let cases = [
        ("fn(1) {}", "expected next token to be Identifier, got Integer instead"),
        ("fn(x,) {}", "expected next token to be Identifier, got RParen instead"),
        ("fn(1, +) { x }", "expected next token to be Identifier, got Integer instead"),
        ("fn(x, +) { x }", "expected next token to be Identifier, got Plus instead"),
    ];

    for (source, expected) in cases {
        let (parser, program) = parse(source);

        assert_eq!(parser.errors()[0], expected, "errors for {:?}", source);
        assert!(
            !program.iter().any(|stmt| stmt.to_string().starts_with("fn(")),
            "no function literal for {:?}: {}",
            source,
            program
        );
    }
}

#[test]
fn test_function_with_if_body() {
    let program = parse_checked("fn(a, b) { if (a > b) { a } else { b } }");

    assert_eq!(program.to_string(), "fn(a, b) if(a > b) aelseb");
}

#[test]
fn test_no_prefix_parse_function() {
    let (parser, program) = parse("+;");

    assert_eq!(parser.errors(), vec!["no prefix parse function for Plus".to_string()]);
    assert_eq!(program.len(), 1);
    match &program.statements[0] {
        Statement::Expression(stmt) => assert!(stmt.expression.is_none()),
        other => panic!("expected an expression statement, got {:?}", other),
    }
    assert_eq!(program.to_string(), "");
}

#[test]
fn test_illegal_token_has_no_prefix_parse_function() {
    let (parser, _) = parse("@");

    assert_eq!(parser.errors(), vec!["no prefix parse function for Illegal".to_string()]);
    assert_eq!(parser.diagnostics()[0].get_token().literal, "@");
}

#[test]
fn test_missing_prefix_operand() {
    let (parser, program) = parse("-");

    assert_eq!(
        parser.errors(),
        vec!["no prefix parse function for EndOfInput".to_string()]
    );
    assert_eq!(program.to_string(), "(-)");
}

#[test]
fn test_integer_overflow() {
    let (parser, program) = parse("99999999999999999999;");

    assert_eq!(
        parser.errors(),
        vec!["could not parse 99999999999999999999 as integer".to_string()]
    );
    assert_eq!(program.len(), 1);
    assert_eq!(program.to_string(), "");
}

#[test]
fn test_integer_overflow_keeps_operator() {
    let (parser, program) = parse("99999999999999999999 + 1");

    assert_eq!(parser.errors().len(), 1);
    assert_eq!(program.len(), 1);
    assert_eq!(program.to_string(), "( + 1)");
}

#[test]
fn test_leading_operator_has_no_left_operand() {
    let (parser, program) = parse("+ 1");

    assert_eq!(parser.errors(), vec!["no prefix parse function for Plus".to_string()]);
    assert_eq!(program.len(), 2);
    assert_eq!(program.to_string(), "1");
}

#[test]
fn test_unclosed_group() {
    let (parser, _) = parse("(1 + 2");

    assert_eq!(
        parser.errors(),
        vec!["expected next token to be RParen, got EndOfInput instead".to_string()]
    );
}

#[test]
fn test_if_requires_parentheses() {
    let (parser, _) = parse("if x { y }");

    assert_eq!(
        parser.errors()[0],
        "expected next token to be LParen, got Identifier instead"
    );
}

#[test]
fn test_function_requires_body() {
    let (parser, _) = parse("fn(x) x");

    assert_eq!(
        parser.errors()[0],
        "expected next token to be LBrace, got Identifier instead"
    );
}

#[test]
fn test_nesting_up_to_the_limit() {
    let source = format!("{}1", "-".repeat(MAX_NESTING_DEPTH - 1));
    let program = parse_checked(&source);

    assert_eq!(program.len(), 1);
    assert!(program.to_string().starts_with("(-(-"));
    assert!(program.to_string().contains("(-1)"));
}

#[test]
fn test_nesting_past_the_limit() {
    let source = format!("{}1", "-".repeat(MAX_NESTING_DEPTH));
    let (parser, _) = parse(&source);

    assert_eq!(
        parser.errors(),
        vec![format!("expression nesting exceeds {} levels", MAX_NESTING_DEPTH)]
    );
    assert_eq!(parser.diagnostics()[0].get_token().literal, "1");
}

#[test]
fn test_nesting_depth_is_released() {
    let nested = format!("{}1;", "-".repeat(MAX_NESTING_DEPTH - 1));
    let source = nested.repeat(3);
    let (parser, program) = parse(&source);

    assert!(parser.errors().is_empty(), "errors: {:?}", parser.errors());
    assert_eq!(program.len(), 3);
    assert_eq!(parser.nesting_depth(), 0);
}

#[test]
fn test_long_prefix_chain_does_not_overflow() {
    let source = format!("{}1", "-".repeat(100_000));
    let (parser, _) = parse(&source);

    let message = format!("expression nesting exceeds {} levels", MAX_NESTING_DEPTH);
    assert!(parser.errors().contains(&message));
    assert_eq!(parser.nesting_depth(), 0);
}

#[test]
fn test_long_group_chain_does_not_overflow() {
    let source = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    let (parser, _) = parse(&source);

    let message = format!("expression nesting exceeds {} levels", MAX_NESTING_DEPTH);
    assert!(parser.errors().contains(&message));
    assert_eq!(parser.nesting_depth(), 0);
}
