//! Plugin architecture: vocabulary registries and closure adapters.
//!
//! This module is how host- and plugin-supplied logic enters the language
//! without the engine knowing any concrete implementation types.
//!
//! ## Vocabulary Registries
//!
//! The words of the mapping language live in two name-keyed registries per
//! [`Environment`](crate::runner::environment::Environment):
//!
//! - a [`FunctionSet`] for zero-input leaf expressions (`greeting()`), and
//! - a [`MethodSet`] for one-input chained transforms (`.shout()`).
//!
//! Each entry pairs an immutable specification (name, category,
//! description) with a constructor. Constructors run once per occurrence
//! in a mapping, at compile time, with the occurrence's literal arguments
//! already resolved:
//!
//! ```text
//! Mapping source:  greeting().shout()
//!      ↓ parse
//! AST:             MethodCall { target: FunctionCall("greeting"), name: "shout" }
//!      ↓ compile (one constructor call per occurrence)
//! Query tree:      shout-node ── wraps ──▶ greeting-node
//!      ↓ execute (many times, one per record)
//! Value:           "HELLO"
//! ```
//!
//! ## Registration Flow
//!
//! A plugin registers a constructor; registration wraps it through the
//! closure adapters in [`adapter`] so the registries store one uniform
//! shape (arguments in, query tree node out). Method wrapping preserves
//! two guarantees the pipeline relies on: a failing target short-circuits
//! past the method body with its error intact, and the wrapped node
//! declares exactly its target's context read-targets.
//!
//! ## The Process-Wide Default
//!
//! One default vocabulary pair exists per process, behind the registries'
//! `RwLock`ed statics. It is never handed out by reference: every
//! [`Environment::new`](crate::runner::environment::Environment::new)
//! snapshots it, so a sandboxed environment can neither observe later
//! global registrations nor leak its own entries back.

pub(crate) mod adapter;
pub mod registry;
pub mod spec;
pub mod types;

pub use registry::{FunctionEntry, FunctionSet, MethodEntry, MethodSet};
pub use spec::{FunctionCategory, FunctionSpec, MethodCategory, MethodSpec};
pub use types::{FunctionConstructor, MethodConstructor, PluginFunction, PluginMethod};
