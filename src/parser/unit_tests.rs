use super::api::MapParser;
use super::api::Rule;
use super::api::{parse_to_ast, parse_to_pairs};
use super::ast::{Expr, Literal};

use pest::consumes_to;
use pest::parses_to;

#[test]
fn test_function_call_no_args() {
    parses_to! {
        parser: MapParser,
        input: "greeting()",
        rule: Rule::function_call,
        tokens: [
            function_call(0, 10, [
                identifier(0, 8)
            ])
        ]
    };
}

#[test]
fn test_function_call_with_args() {
    parses_to! {
        parser: MapParser,
        input: "pad(3, \"x\")",
        rule: Rule::function_call,
        tokens: [
            function_call(0, 11, [
                identifier(0, 3),
                argument_list(4, 10, [
                    literal(4, 5, [
                        numeric_literal(4, 5)
                    ]),
                    literal(7, 10, [
                        string_literal(7, 10, [
                            string_inner(8, 9)
                        ])
                    ])
                ])
            ])
        ]
    };
}

#[test]
fn test_method_chain() {
    parses_to! {
        parser: MapParser,
        input: "greeting().shout()",
        rule: Rule::query,
        tokens: [
            query(0, 18, [
                primary(0, 10, [
                    function_call(0, 10, [
                        identifier(0, 8)
                    ])
                ]),
                method_call(10, 18, [
                    identifier(11, 16)
                ])
            ])
        ]
    };
}

#[test]
fn test_numeric_literal_integer() {
    parses_to! {
        parser: MapParser,
        input: "10",
        rule: Rule::numeric_literal,
        tokens: [
            numeric_literal(0, 2)
        ]
    };
}

#[test]
fn test_numeric_literal_fraction() {
    parses_to! {
        parser: MapParser,
        input: "10.25",
        rule: Rule::numeric_literal,
        tokens: [
            numeric_literal(0, 5)
        ]
    };
}

#[test]
fn test_string_literal_tokens() {
    parses_to! {
        parser: MapParser,
        input: "\"hello\"",
        rule: Rule::string_literal,
        tokens: [
            string_literal(0, 7, [
                string_inner(1, 6)
            ])
        ]
    };
}

#[test]
fn test_literal_boolean() {
    parses_to! {
        parser: MapParser,
        input: "true",
        rule: Rule::literal,
        tokens: [
            literal(0, 4, [
                boolean_literal(0, 4)
            ])
        ]
    };
}

// ── AST construction ─────────────────────────────────────────────────

#[test]
fn test_ast_method_chain() {
    let ast = parse_to_ast("greeting().shout()").unwrap();
    assert_eq!(
        ast,
        Expr::MethodCall {
            target: Box::new(Expr::FunctionCall {
                name: "greeting".to_string(),
                args: vec![],
            }),
            name: "shout".to_string(),
            args: vec![],
        }
    );
}

#[test]
fn test_ast_literal_arguments() {
    let ast = parse_to_ast("pad(3, \"x\", true, null, 1.5)").unwrap();
    assert_eq!(
        ast,
        Expr::FunctionCall {
            name: "pad".to_string(),
            args: vec![
                Literal::Integer(3),
                Literal::String("x".to_string()),
                Literal::Bool(true),
                Literal::Null,
                Literal::Float(1.5),
            ],
        }
    );
}

#[test]
fn test_ast_bare_literal() {
    let ast = parse_to_ast("\"he said \\\"hi\\\"\"").unwrap();
    assert_eq!(
        ast,
        Expr::Literal(Literal::String("he said \"hi\"".to_string()))
    );
}

#[test]
fn test_ast_whitespace_tolerated() {
    let ast = parse_to_ast("greeting()\n  .shout()").unwrap();
    match ast {
        Expr::MethodCall { name, .. } => assert_eq!(name, "shout"),
        other => panic!("expected a method call, got {:?}", other),
    }
}

#[test]
fn test_unclosed_call_rejected() {
    assert!(parse_to_pairs("greeting(").is_err());
}

#[test]
fn test_trailing_garbage_rejected() {
    assert!(parse_to_pairs("greeting() extra").is_err());
}

#[test]
fn test_method_without_target_rejected() {
    assert!(parse_to_pairs(".shout()").is_err());
}

#[test]
fn test_non_literal_argument_rejected() {
    // Nested calls are not statically resolvable, so they are not
    // valid arguments.
    assert!(parse_to_pairs("pad(greeting())").is_err());
}
