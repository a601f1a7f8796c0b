use pest::error::{Error, ErrorVariant};
use pest::iterators::{Pair, Pairs};
use pest::Parser;
use pest_derive::Parser;

use super::ast::{Expr, Literal};
use super::util::{get_unexpected_error, unescape_string};

#[derive(Parser)]
#[grammar = "parser/map_grammar.pest"] // relative to src
pub struct MapParser;

/// Parses mapping source into the raw pest pair tree. Mainly useful for
/// debugging the grammar; `parse_to_ast` is the production entry point.
pub fn parse_to_pairs(mapping: &str) -> Result<Pairs<Rule>, Error<Rule>> {
    MapParser::parse(Rule::mapping, mapping)
}

/// Parses mapping source into a query expression AST.
pub fn parse_to_ast(mapping: &str) -> Result<Expr, Error<Rule>> {
    let mut pairs = MapParser::parse(Rule::mapping, mapping)?;
    let root = match pairs.next() {
        Some(pair) => pair,
        None => return Err(empty_mapping_error(mapping)),
    };
    for pair in root.into_inner() {
        if let Rule::query = pair.as_rule() {
            return build_ast_from_query(pair);
        }
    }
    Err(empty_mapping_error(mapping))
}

fn empty_mapping_error(mapping: &str) -> Error<Rule> {
    Error::new_from_pos(
        ErrorVariant::CustomError {
            message: "Mapping contains no query expression".to_string(),
        },
        pest::Position::from_start(mapping),
    )
}

fn build_ast_from_query(pair: Pair<Rule>) -> Result<Expr, Error<Rule>> {
    let span = pair.as_span();
    let mut expr: Option<Expr> = None;
    for child in pair.into_inner() {
        match child.as_rule() {
            Rule::primary => {
                expr = Some(build_ast_from_primary(child)?);
            }
            Rule::method_call => {
                let target = match expr.take() {
                    Some(e) => e,
                    None => {
                        return Err(Error::new_from_span(
                            ErrorVariant::CustomError {
                                message: "Method call without a target".to_string(),
                            },
                            span,
                        ))
                    }
                };
                let (name, args) = build_call_parts(child)?;
                expr = Some(Expr::MethodCall {
                    target: Box::new(target),
                    name,
                    args,
                });
            }
            _ => return Err(get_unexpected_error(1, &child)),
        }
    }
    match expr {
        Some(e) => Ok(e),
        None => Err(Error::new_from_span(
            ErrorVariant::CustomError {
                message: "Query expression is empty".to_string(),
            },
            span,
        )),
    }
}

fn build_ast_from_primary(pair: Pair<Rule>) -> Result<Expr, Error<Rule>> {
    for child in pair.into_inner() {
        return match child.as_rule() {
            Rule::function_call => {
                let (name, args) = build_call_parts(child)?;
                Ok(Expr::FunctionCall { name, args })
            }
            Rule::literal => Ok(Expr::Literal(build_ast_from_literal(child)?)),
            _ => Err(get_unexpected_error(2, &child)),
        };
    }
    unreachable!("primary always has exactly one child rule")
}

/// Extracts the identifier and literal argument list shared by function and
/// method call rules.
fn build_call_parts(pair: Pair<Rule>) -> Result<(String, Vec<Literal>), Error<Rule>> {
    let mut name = String::new();
    let mut args = vec![];
    for child in pair.into_inner() {
        match child.as_rule() {
            Rule::identifier => name = child.as_str().to_string(),
            Rule::argument_list => {
                for arg in child.into_inner() {
                    match arg.as_rule() {
                        Rule::literal => args.push(build_ast_from_literal(arg)?),
                        _ => return Err(get_unexpected_error(3, &arg)),
                    }
                }
            }
            _ => return Err(get_unexpected_error(4, &child)),
        }
    }
    Ok((name, args))
}

fn build_ast_from_literal(pair: Pair<Rule>) -> Result<Literal, Error<Rule>> {
    for child in pair.into_inner() {
        return match child.as_rule() {
            Rule::null_literal => Ok(Literal::Null),
            Rule::boolean_literal => Ok(Literal::Bool(child.as_str() == "true")),
            Rule::numeric_literal => build_numeric_literal(child),
            Rule::string_literal => build_string_literal(child),
            _ => Err(get_unexpected_error(5, &child)),
        };
    }
    unreachable!("literal always has exactly one child rule")
}

fn build_numeric_literal(pair: Pair<Rule>) -> Result<Literal, Error<Rule>> {
    let raw = pair.as_str();
    let parsed = if raw.contains('.') {
        raw.parse::<f64>().map(Literal::Float)
    } else {
        // Integers overflowing i64 degrade to floats rather than failing
        // the whole parse.
        raw.parse::<i64>()
            .map(Literal::Integer)
            .or_else(|_| raw.parse::<f64>().map(Literal::Float))
    };
    parsed.map_err(|e| {
        Error::new_from_span(
            ErrorVariant::CustomError {
                message: format!("Invalid numeric literal: {}", e),
            },
            pair.as_span(),
        )
    })
}

fn build_string_literal(pair: Pair<Rule>) -> Result<Literal, Error<Rule>> {
    let span = pair.as_span();
    for child in pair.into_inner() {
        if let Rule::string_inner = child.as_rule() {
            return Ok(Literal::String(unescape_string(child.as_str())));
        }
    }
    // An empty string literal still produces a string_inner pair, so this
    // only fires on a grammar regression.
    Err(Error::new_from_span(
        ErrorVariant::CustomError {
            message: "String literal without a body".to_string(),
        },
        span,
    ))
}
