//! Compilation of a parsed mapping AST into a query tree.

use log::debug;

use crate::parser;
use crate::parser::ast::{Expr, Literal};
use crate::runner::api::Executor;
use crate::runner::ds::error::CompileError;
use crate::runner::ds::value::Value;
use crate::runner::plugin::registry::{FunctionSet, MethodSet};
use crate::runner::query::{literal_node, NodeRef};

/// Parses and compiles mapping source against the given vocabularies.
pub(crate) fn parse_with(
    mapping: &str,
    functions: &FunctionSet,
    methods: &MethodSet,
) -> Result<Executor, CompileError> {
    debug!("compiling mapping ({} bytes)", mapping.len());
    let ast =
        parser::parse_to_ast(mapping).map_err(|e| CompileError::SyntaxError(e.to_string()))?;
    let root = compile_query(&ast, functions, methods)?;
    Ok(Executor::new(root))
}

/// Compiles one AST expression, resolving vocabulary names against the
/// given registries. Each function/method occurrence invokes its
/// registered constructor exactly once, here.
pub(crate) fn compile_query(
    expr: &Expr,
    functions: &FunctionSet,
    methods: &MethodSet,
) -> Result<NodeRef, CompileError> {
    match expr {
        Expr::Literal(lit) => Ok(literal_node(literal_value(lit))),
        Expr::FunctionCall { name, args } => {
            let entry = functions
                .lookup(name)
                .ok_or_else(|| CompileError::UnknownFunction(name.clone()))?;
            let args = resolve_literals(args);
            (entry.ctor())(&args)
        }
        Expr::MethodCall { target, name, args } => {
            let target = compile_query(target, functions, methods)?;
            let entry = methods
                .lookup(name)
                .ok_or_else(|| CompileError::UnknownMethod(name.clone()))?;
            let args = resolve_literals(args);
            (entry.ctor())(target, &args)
        }
    }
}

fn literal_value(lit: &Literal) -> Value {
    match lit {
        Literal::Null => Value::Null,
        Literal::Bool(b) => Value::Bool(*b),
        Literal::Integer(i) => Value::Integer(*i),
        Literal::Float(n) => Value::Float(*n),
        Literal::String(s) => Value::String(s.clone()),
    }
}

fn resolve_literals(lits: &[Literal]) -> Vec<Value> {
    lits.iter().map(literal_value).collect()
}
