//! # rill - Record Mapping DSL Engine
//!
//! An extensible mapping/query language for transforming structured records
//! inside a stream-processing pipeline, featuring:
//! - PEG parser for mapping expressions
//! - Closure-based query trees with no inheritance hierarchies
//! - Name-keyed, pluggable function and method vocabularies
//! - Isolated environments for sandboxing what a mapping may do
//!
//! ## Quick Start
//!
//! ### Parsing a Mapping Expression
//!
//! ```
//! use rill::parser::parse_to_ast;
//!
//! let ast = parse_to_ast("greeting().shout()").unwrap();
//! println!("parsed: {:?}", ast);
//! ```
//!
//! ### Registering Vocabulary and Executing
//!
//! ```
//! use rill::runner::ds::context::EvalContext;
//! use rill::runner::ds::value::Value;
//! use rill::runner::environment::Environment;
//! use rill::runner::plugin::types::PluginFunction;
//!
//! let mut env = Environment::new();
//! env.register_function("answer", |_args: &[Value]| {
//!     let f: PluginFunction = Box::new(|| Ok(Value::Integer(42)));
//!     Ok(f)
//! })
//! .unwrap();
//!
//! let executor = env.parse("answer()").unwrap();
//!
//! // One executor, many records.
//! for _ in 0..3 {
//!     let ctx = EvalContext::new(Value::Null);
//!     assert_eq!(executor.execute(&ctx).unwrap(), Value::Integer(42));
//! }
//! ```
//!
//! ## Environment Isolation
//!
//! The process-wide default vocabulary (populated through
//! [`runner::api::register_function`] and [`runner::api::register_method`])
//! is never handed out directly. Every [`runner::environment::Environment`]
//! starts as an independent snapshot of it, and restricted environments are
//! derived by filtering:
//!
//! ```text
//! Vocabulary visibility:
//!   global default ──snapshot──▶ Environment::new()
//!                                    │
//!                                    └──without_methods(["shout"])──▶ sandbox
//! ```
//!
//! A registration on an environment never reaches the default or any other
//! environment; a global registration never reaches environments that
//! already exist. A sandbox therefore holds exactly the capabilities it was
//! created with.
//!
//! ## Architecture
//!
//! - **[`parser`]** - PEG grammar and AST for mapping expressions
//! - **[`runner`]** - Compilation and execution
//!   - **[`runner::plugin`]** - Vocabulary registries and closure adapters
//!   - **[`runner::environment`]** - Isolated environments
//!   - **[`runner::api`]** - Executor and the global facade
//!   - **[`runner::ds`]** - Values, contexts, and error types

#[macro_use]
extern crate lazy_static;

pub mod parser;
pub mod runner;
