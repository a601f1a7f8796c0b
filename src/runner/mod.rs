//! Execution side of the engine: the query tree, vocabulary registries,
//! environments, and the compiled-mapping executor.

pub mod api;
pub(crate) mod compile;
pub mod ds;
pub mod environment;
pub mod plugin;
pub mod query;
