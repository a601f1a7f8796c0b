//! The query tree - the uniform execution unit a mapping compiles into.
//!
//! Every node in a compiled mapping exposes the same minimal capability:
//! evaluate against a per-record context, and declare which parts of that
//! context it may read. There is no node hierarchy; a single closure
//! adapter ([`closure_node`]) stores and invokes a plain callable, so
//! arbitrary host logic can be injected into a tree without the evaluator
//! knowing any concrete types.

use std::sync::Arc;

use crate::runner::ds::context::EvalContext;
use crate::runner::ds::error::RuntimeError;
use crate::runner::ds::value::Value;

/// Which part of the execution context a target path points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// The record's root value.
    Value,
    /// The record's metadata.
    Metadata,
}

/// A static declaration that a node may read one path of the execution
/// context. The engine core never interprets these; it only propagates
/// them so the surrounding pipeline can plan around them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPath {
    kind: TargetKind,
    path: Vec<String>,
}

impl TargetPath {
    pub fn new(kind: TargetKind, path: Vec<String>) -> Self {
        TargetPath { kind, path }
    }

    pub fn kind(&self) -> TargetKind {
        self.kind
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }
}

/// A node of a compiled query tree.
///
/// Nodes are immutable once constructed and must be shareable across the
/// pipeline's worker threads, hence the `Send + Sync` bound.
pub trait QueryNode: Send + Sync {
    /// Evaluates this node against one record's context.
    fn eval(&self, ctx: &EvalContext) -> Result<Value, RuntimeError>;

    /// The context paths this node declares it may read.
    fn query_targets(&self) -> &[TargetPath];
}

/// A shared handle to a query tree node.
pub type NodeRef = Arc<dyn QueryNode>;

struct ClosureNode<F>
where
    F: Fn(&EvalContext) -> Result<Value, RuntimeError> + Send + Sync,
{
    run: F,
    targets: Vec<TargetPath>,
}

impl<F> QueryNode for ClosureNode<F>
where
    F: Fn(&EvalContext) -> Result<Value, RuntimeError> + Send + Sync,
{
    fn eval(&self, ctx: &EvalContext) -> Result<Value, RuntimeError> {
        (self.run)(ctx)
    }

    fn query_targets(&self) -> &[TargetPath] {
        &self.targets
    }
}

/// Wraps a plain callable into a query tree node declaring the given
/// context targets.
pub fn closure_node<F>(run: F, targets: Vec<TargetPath>) -> NodeRef
where
    F: Fn(&EvalContext) -> Result<Value, RuntimeError> + Send + Sync + 'static,
{
    Arc::new(ClosureNode { run, targets })
}

/// A node yielding a constant value, ignoring the context entirely.
pub(crate) fn literal_node(value: Value) -> NodeRef {
    closure_node(move |_ctx| Ok(value.clone()), vec![])
}
