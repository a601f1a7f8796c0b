//! Data structures shared across the runner: record values, the per-record
//! execution context, and the engine's error types.

pub mod context;
pub mod error;
pub mod value;
