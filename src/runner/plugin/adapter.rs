//! Closure adapters wrapping plugin constructors into node constructors.
//!
//! Registration stores these adapted forms in the registries, so the
//! compiler only ever deals in one shape: arguments in, query tree node
//! out. The adapters pin down the evaluation contract:
//!
//! - the plugin constructor runs once, at compile time; rejection fails
//!   the compile with `BadArguments`;
//! - a function node ignores the per-record context and declares no
//!   context targets;
//! - a method node first evaluates its target, propagates a target error
//!   unchanged without invoking the method body, and declares exactly the
//!   target's context targets.

use crate::runner::ds::error::CompileError;
use crate::runner::plugin::types::{
    FunctionConstructor, FunctionNodeCtor, MethodConstructor, MethodNodeCtor,
};
use crate::runner::query::{closure_node, NodeRef};

use std::sync::Arc;

pub(crate) fn function_node_ctor(name: &str, ctor: FunctionConstructor) -> FunctionNodeCtor {
    let name = name.to_string();
    Arc::new(move |args| {
        let bound = ctor(args).map_err(|reason| CompileError::BadArguments {
            name: name.clone(),
            reason,
        })?;
        Ok(closure_node(move |_ctx| bound(), vec![]))
    })
}

pub(crate) fn method_node_ctor(name: &str, ctor: MethodConstructor) -> MethodNodeCtor {
    let name = name.to_string();
    Arc::new(move |target: NodeRef, args| {
        let bound = ctor(args).map_err(|reason| CompileError::BadArguments {
            name: name.clone(),
            reason,
        })?;
        let targets = target.query_targets().to_vec();
        Ok(closure_node(
            move |ctx| {
                let input = target.eval(ctx)?;
                bound(input)
            },
            targets,
        ))
    })
}
