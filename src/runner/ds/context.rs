//! Per-record execution context.
//!
//! The context's shape is owned by the surrounding pipeline: the engine core
//! never reads its fields, it only hands the context through to whatever
//! vocabulary implementations the pipeline and its plugins agreed on.

use std::collections::HashMap;

use crate::runner::ds::value::Value;

/// The execution context for one in-flight record.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalContext {
    value: Value,
    metadata: HashMap<String, Value>,
}

impl EvalContext {
    /// Creates a context for a record with the given root value.
    pub fn new(value: Value) -> Self {
        EvalContext {
            value,
            metadata: HashMap::new(),
        }
    }

    /// The record's root value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// A metadata field attached to the record, if present.
    pub fn metadata(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    /// Attaches a metadata field to the record.
    pub fn set_metadata(&mut self, key: impl Into<String>, value: Value) {
        self.metadata.insert(key.into(), value);
    }
}

impl Default for EvalContext {
    fn default() -> Self {
        EvalContext::new(Value::Null)
    }
}
