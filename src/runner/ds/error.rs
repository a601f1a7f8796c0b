use std::fmt;
use std::fmt::{Display, Formatter};

/// Error raised while executing a compiled mapping against one record.
///
/// These are confined to the single `execute` call that produced them; the
/// executor itself stays valid for further records.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeError {
    /// A value of the wrong type reached a function or method.
    TypeError(String),
    /// A value of the right type but an unusable content.
    ValueError(String),
    /// A failure raised directly by a vocabulary implementation.
    Failed(String),
}

impl Display for RuntimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::TypeError(m) => write!(f, "type error: {}", m),
            RuntimeError::ValueError(m) => write!(f, "value error: {}", m),
            RuntimeError::Failed(m) => write!(f, "failed: {}", m),
        }
    }
}

impl std::error::Error for RuntimeError {}

/// Error raised while registering a vocabulary entry.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// The name is already taken in the target registry. Registration
    /// never overwrites; a later plugin must not silently hijack an
    /// earlier one's name.
    DuplicateName(String),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateName(name) => {
                write!(f, "vocabulary entry '{}' already exists", name)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Error raised while compiling mapping source into an executor.
///
/// All variants are fail-fast: a failed parse leaves no partially compiled
/// state behind.
#[derive(Debug, Clone, PartialEq)]
pub enum CompileError {
    /// The source did not match the mapping grammar.
    SyntaxError(String),
    /// A function name not present in the compiling environment's
    /// function registry.
    UnknownFunction(String),
    /// A method name not present in the compiling environment's method
    /// registry.
    UnknownMethod(String),
    /// A constructor rejected its statically-resolved arguments.
    BadArguments { name: String, reason: String },
}

impl Display for CompileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::SyntaxError(m) => write!(f, "syntax error: {}", m),
            CompileError::UnknownFunction(name) => {
                write!(f, "unknown function '{}'", name)
            }
            CompileError::UnknownMethod(name) => {
                write!(f, "unknown method '{}'", name)
            }
            CompileError::BadArguments { name, reason } => {
                write!(f, "invalid arguments for '{}': {}", name, reason)
            }
        }
    }
}

impl std::error::Error for CompileError {}
