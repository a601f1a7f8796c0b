//! Vocabulary entry metadata.

/// Classification of a function entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionCategory {
    /// General-purpose built-ins.
    General,
    /// Functions reading host process state (environment variables,
    /// clocks). These are the usual candidates for sandbox exclusion.
    Environment,
    /// Host- or plugin-registered entries.
    Plugin,
}

/// Classification of a method entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodCategory {
    General,
    Strings,
    Plugin,
}

/// Immutable metadata for one function vocabulary entry. The name is the
/// entry's identity within a registry.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSpec {
    name: String,
    category: FunctionCategory,
    description: String,
}

impl FunctionSpec {
    pub fn new(
        category: FunctionCategory,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        FunctionSpec {
            name: name.into(),
            category,
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> FunctionCategory {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Immutable metadata for one method vocabulary entry. Methods can appear
/// in several categories, each with its own descriptive note.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSpec {
    name: String,
    description: String,
    categories: Vec<(MethodCategory, String)>,
}

impl MethodSpec {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        MethodSpec {
            name: name.into(),
            description: description.into(),
            categories: vec![],
        }
    }

    pub fn in_category(mut self, category: MethodCategory, note: impl Into<String>) -> Self {
        self.categories.push((category, note.into()));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn categories(&self) -> &[(MethodCategory, String)] {
        &self.categories
    }
}
