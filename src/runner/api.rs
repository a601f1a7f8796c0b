//! The compiled-mapping executor and the global registration facade.
//!
//! The functions here operate on the process-wide default vocabulary
//! directly. Entries registered through them become visible to the global
//! [`parse`] and to every [`Environment`](crate::runner::environment::Environment)
//! created afterwards; environments that already exist keep their snapshot.

use std::sync::Arc;

use crate::runner::compile::parse_with;
use crate::runner::ds::context::EvalContext;
use crate::runner::ds::error::{CompileError, RegistryError, RuntimeError};
use crate::runner::ds::value::Value;
use crate::runner::plugin::adapter::{function_node_ctor, method_node_ctor};
use crate::runner::plugin::registry::{ALL_FUNCTIONS, ALL_METHODS};
use crate::runner::plugin::spec::{FunctionCategory, FunctionSpec, MethodCategory, MethodSpec};
use crate::runner::plugin::types::{PluginFunction, PluginMethod};
use crate::runner::query::{NodeRef, TargetPath};

/// A compiled, reusable query tree.
///
/// An executor holds no mutable state: one instance can be executed any
/// number of times, from any number of threads, each call against its own
/// per-record context. A record-level failure is returned from that call
/// alone and leaves the executor intact.
pub struct Executor {
    root: NodeRef,
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor").finish_non_exhaustive()
    }
}

impl Executor {
    pub(crate) fn new(root: NodeRef) -> Self {
        Executor { root }
    }

    /// Executes the mapping against one record's context.
    pub fn execute(&self, ctx: &EvalContext) -> Result<Value, RuntimeError> {
        self.root.eval(ctx)
    }

    /// The context read-targets declared by the mapping's root node,
    /// passed through for the pipeline's planning.
    pub fn query_targets(&self) -> &[TargetPath] {
        self.root.query_targets()
    }
}

/// Compiles mapping source against the process-wide default vocabulary
/// directly, without snapshotting it into an environment.
pub fn parse(mapping: &str) -> Result<Executor, CompileError> {
    let functions = ALL_FUNCTIONS.read().unwrap();
    let methods = ALL_METHODS.read().unwrap();
    parse_with(mapping, &functions, &methods)
}

/// Registers a function in the process-wide default vocabulary.
pub fn register_function<C>(name: &str, ctor: C) -> Result<(), RegistryError>
where
    C: Fn(&[Value]) -> Result<PluginFunction, String> + Send + Sync + 'static,
{
    let spec = FunctionSpec::new(FunctionCategory::Plugin, name, "");
    ALL_FUNCTIONS
        .write()
        .unwrap()
        .add(spec, function_node_ctor(name, Arc::new(ctor)), false)
}

/// Registers a method in the process-wide default vocabulary.
pub fn register_method<C>(name: &str, ctor: C) -> Result<(), RegistryError>
where
    C: Fn(&[Value]) -> Result<PluginMethod, String> + Send + Sync + 'static,
{
    let spec = MethodSpec::new(name, "").in_category(MethodCategory::Plugin, "");
    ALL_METHODS
        .write()
        .unwrap()
        .add(spec, method_node_ctor(name, Arc::new(ctor)), false)
}
