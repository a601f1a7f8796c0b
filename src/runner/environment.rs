//! Isolated mapping environments.
//!
//! An environment pairs one function registry with one method registry and
//! is the unit of isolation: a mapping compiled through an environment can
//! only see that environment's vocabulary.
//!
//! A fresh environment starts as an independent snapshot of the
//! process-wide default vocabulary. It is worth using one whenever some
//! mappings must be trusted less than others: derive an environment with
//! the risky capabilities filtered out and compile the untrusted mappings
//! there, without removing those capabilities for everyone.
//!
//! ```
//! use rill::runner::ds::context::EvalContext;
//! use rill::runner::ds::value::Value;
//! use rill::runner::environment::Environment;
//! use rill::runner::plugin::types::{PluginFunction, PluginMethod};
//!
//! let mut env = Environment::new();
//! env.register_function("greeting", |_args: &[Value]| {
//!     let f: PluginFunction = Box::new(|| Ok(Value::String("hello".to_string())));
//!     Ok(f)
//! })
//! .unwrap();
//! env.register_method("shout", |_args: &[Value]| {
//!     let m: PluginMethod = Box::new(|v: Value| match v {
//!         Value::String(s) => Ok(Value::String(s.to_uppercase())),
//!         other => Err(rill::runner::ds::error::RuntimeError::TypeError(format!(
//!             "expected string, got {}",
//!             other.type_name()
//!         ))),
//!     });
//!     Ok(m)
//! })
//! .unwrap();
//!
//! let executor = env.parse("greeting().shout()").unwrap();
//! let result = executor.execute(&EvalContext::default()).unwrap();
//! assert_eq!(result, Value::String("HELLO".to_string()));
//! ```

use std::sync::Arc;

use crate::runner::api::Executor;
use crate::runner::compile::parse_with;
use crate::runner::ds::error::{CompileError, RegistryError};
use crate::runner::ds::value::Value;
use crate::runner::plugin::adapter::{function_node_ctor, method_node_ctor};
use crate::runner::plugin::registry::{FunctionSet, MethodSet, ALL_FUNCTIONS, ALL_METHODS};
use crate::runner::plugin::spec::{FunctionCategory, FunctionSpec, MethodCategory, MethodSpec};
use crate::runner::plugin::types::{PluginFunction, PluginMethod};

/// An isolated pairing of a function vocabulary and a method vocabulary.
pub struct Environment {
    functions: FunctionSet,
    methods: MethodSet,
}

impl Environment {
    /// Creates a fresh environment holding an independent snapshot of the
    /// process-wide default vocabulary.
    ///
    /// The snapshot is taken now: entries registered globally after this
    /// call are not visible here, and entries registered here are never
    /// visible globally.
    pub fn new() -> Self {
        Environment {
            functions: ALL_FUNCTIONS.read().unwrap().without(&[]),
            methods: ALL_METHODS.read().unwrap().without(&[]),
        }
    }

    /// Derives an environment with the named functions removed. The
    /// receiver is not changed.
    pub fn without_functions(&self, names: &[&str]) -> Environment {
        Environment {
            functions: self.functions.without(names),
            methods: self.methods.without(&[]),
        }
    }

    /// Derives an environment with the named methods removed. The
    /// receiver is not changed.
    pub fn without_methods(&self, names: &[&str]) -> Environment {
        Environment {
            functions: self.functions.without(&[]),
            methods: self.methods.without(names),
        }
    }

    /// Compiles mapping source using this environment's vocabulary. The
    /// returned executor is immutable and reusable for any number of
    /// records.
    pub fn parse(&self, mapping: &str) -> Result<Executor, CompileError> {
        parse_with(mapping, &self.functions, &self.methods)
    }

    /// Registers a function in this environment only. Neither the
    /// process-wide default nor any other environment is affected.
    pub fn register_function<C>(&mut self, name: &str, ctor: C) -> Result<(), RegistryError>
    where
        C: Fn(&[Value]) -> Result<PluginFunction, String> + Send + Sync + 'static,
    {
        let spec = FunctionSpec::new(FunctionCategory::Plugin, name, "");
        self.functions
            .add(spec, function_node_ctor(name, Arc::new(ctor)), false)
    }

    /// Registers a method in this environment only.
    pub fn register_method<C>(&mut self, name: &str, ctor: C) -> Result<(), RegistryError>
    where
        C: Fn(&[Value]) -> Result<PluginMethod, String> + Send + Sync + 'static,
    {
        let spec = MethodSpec::new(name, "").in_category(MethodCategory::Plugin, "");
        self.methods
            .add(spec, method_node_ctor(name, Arc::new(ctor)), false)
    }

    /// This environment's function vocabulary.
    pub fn functions(&self) -> &FunctionSet {
        &self.functions
    }

    /// This environment's method vocabulary.
    pub fn methods(&self) -> &MethodSet {
        &self.methods
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new()
    }
}
