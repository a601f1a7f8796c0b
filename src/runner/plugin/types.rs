//! Callable types for the plugin architecture.

use std::sync::Arc;

use crate::runner::ds::error::{CompileError, RuntimeError};
use crate::runner::ds::value::Value;
use crate::runner::query::NodeRef;

/// A bound zero-input function, produced by a [`FunctionConstructor`] once
/// its arguments have been resolved. Yields a leaf value per execution.
pub type PluginFunction = Box<dyn Fn() -> Result<Value, RuntimeError> + Send + Sync>;

/// A bound one-input transform, produced by a [`MethodConstructor`].
/// Receives the result of whatever node the method is chained after.
pub type PluginMethod = Box<dyn Fn(Value) -> Result<Value, RuntimeError> + Send + Sync>;

/// A plugin-supplied function constructor. Runs exactly once per occurrence
/// in a compiled mapping, at compile time, with the statically-resolved
/// literal arguments. Returns the reason string when the arguments are
/// invalid for this entry.
pub type FunctionConstructor =
    Arc<dyn Fn(&[Value]) -> Result<PluginFunction, String> + Send + Sync>;

/// A plugin-supplied method constructor. Same contract as
/// [`FunctionConstructor`], producing a one-input transform instead.
pub type MethodConstructor = Arc<dyn Fn(&[Value]) -> Result<PluginMethod, String> + Send + Sync>;

/// The registry-internal form of a function entry: arguments in, query
/// tree node out.
pub type FunctionNodeCtor = Arc<dyn Fn(&[Value]) -> Result<NodeRef, CompileError> + Send + Sync>;

/// The registry-internal form of a method entry: a target node plus
/// arguments in, query tree node out.
pub type MethodNodeCtor =
    Arc<dyn Fn(NodeRef, &[Value]) -> Result<NodeRef, CompileError> + Send + Sync>;
