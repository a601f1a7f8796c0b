//! Name-keyed vocabulary registries and the process-wide defaults.
//!
//! A registry maps an entry name to its specification and (adapted)
//! constructor. Registries are append-only: entries can be added, never
//! replaced or removed in place. Restriction happens by derivation —
//! `without` builds a new, independent registry missing the named entries,
//! leaving the source untouched.
//!
//! The process-wide default registries (`ALL_FUNCTIONS` / `ALL_METHODS`)
//! hold the vocabulary every new [`Environment`](crate::runner::environment::Environment)
//! starts from. They sit behind `RwLock`s since plugin registration can
//! race from multiple initialization paths; compiles only take read locks.

use std::collections::HashMap;
use std::sync::RwLock;

use log::debug;

use crate::runner::ds::error::RegistryError;
use crate::runner::plugin::spec::{FunctionSpec, MethodSpec};
use crate::runner::plugin::types::{FunctionNodeCtor, MethodNodeCtor};

/// One registered function entry: specification plus node constructor.
#[derive(Clone)]
pub struct FunctionEntry {
    spec: FunctionSpec,
    ctor: FunctionNodeCtor,
}

impl FunctionEntry {
    pub fn spec(&self) -> &FunctionSpec {
        &self.spec
    }

    pub fn ctor(&self) -> &FunctionNodeCtor {
        &self.ctor
    }
}

/// One registered method entry: specification plus node constructor.
#[derive(Clone)]
pub struct MethodEntry {
    spec: MethodSpec,
    ctor: MethodNodeCtor,
}

impl MethodEntry {
    pub fn spec(&self) -> &MethodSpec {
        &self.spec
    }

    pub fn ctor(&self) -> &MethodNodeCtor {
        &self.ctor
    }
}

/// A name-keyed registry of function vocabulary entries.
pub struct FunctionSet {
    entries: HashMap<String, FunctionEntry>,
}

impl FunctionSet {
    /// Creates an empty registry.
    pub fn new() -> Self {
        FunctionSet {
            entries: HashMap::new(),
        }
    }

    /// Inserts a new entry. Fails with [`RegistryError::DuplicateName`]
    /// when the name is already taken, in this registry or (when
    /// propagating) in the process-wide default; either failure leaves
    /// both registries unchanged.
    ///
    /// With `propagate_globally` the entry is also written into the
    /// process-wide default registry, making it visible to environments
    /// created afterwards. Must not be used on the default registry
    /// itself; the global facade adds to it directly.
    pub fn add(
        &mut self,
        spec: FunctionSpec,
        ctor: FunctionNodeCtor,
        propagate_globally: bool,
    ) -> Result<(), RegistryError> {
        if self.entries.contains_key(spec.name()) {
            return Err(RegistryError::DuplicateName(spec.name().to_string()));
        }
        if propagate_globally {
            ALL_FUNCTIONS
                .write()
                .unwrap()
                .add(spec.clone(), ctor.clone(), false)?;
        }
        debug!("registered function '{}'", spec.name());
        self.entries
            .insert(spec.name().to_string(), FunctionEntry { spec, ctor });
        Ok(())
    }

    /// Derives a new, independent registry containing every entry of this
    /// one except those named. The receiver is not mutated.
    pub fn without(&self, names: &[&str]) -> FunctionSet {
        FunctionSet {
            entries: self
                .entries
                .iter()
                .filter(|(name, _)| !names.contains(&name.as_str()))
                .map(|(name, entry)| (name.clone(), entry.clone()))
                .collect(),
        }
    }

    /// Looks up an entry by name.
    pub fn lookup(&self, name: &str) -> Option<&FunctionEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The specifications of every entry, sorted by name.
    pub fn specs(&self) -> Vec<&FunctionSpec> {
        let mut specs: Vec<&FunctionSpec> = self.entries.values().map(|e| e.spec()).collect();
        specs.sort_by_key(|s| s.name().to_string());
        specs
    }
}

impl Default for FunctionSet {
    fn default() -> Self {
        FunctionSet::new()
    }
}

/// A name-keyed registry of method vocabulary entries.
pub struct MethodSet {
    entries: HashMap<String, MethodEntry>,
}

impl MethodSet {
    /// Creates an empty registry.
    pub fn new() -> Self {
        MethodSet {
            entries: HashMap::new(),
        }
    }

    /// Inserts a new entry; see [`FunctionSet::add`] for the duplicate and
    /// propagation rules.
    pub fn add(
        &mut self,
        spec: MethodSpec,
        ctor: MethodNodeCtor,
        propagate_globally: bool,
    ) -> Result<(), RegistryError> {
        if self.entries.contains_key(spec.name()) {
            return Err(RegistryError::DuplicateName(spec.name().to_string()));
        }
        if propagate_globally {
            ALL_METHODS
                .write()
                .unwrap()
                .add(spec.clone(), ctor.clone(), false)?;
        }
        debug!("registered method '{}'", spec.name());
        self.entries
            .insert(spec.name().to_string(), MethodEntry { spec, ctor });
        Ok(())
    }

    /// Derives a new, independent registry missing the named entries.
    pub fn without(&self, names: &[&str]) -> MethodSet {
        MethodSet {
            entries: self
                .entries
                .iter()
                .filter(|(name, _)| !names.contains(&name.as_str()))
                .map(|(name, entry)| (name.clone(), entry.clone()))
                .collect(),
        }
    }

    /// Looks up an entry by name.
    pub fn lookup(&self, name: &str) -> Option<&MethodEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The specifications of every entry, sorted by name.
    pub fn specs(&self) -> Vec<&MethodSpec> {
        let mut specs: Vec<&MethodSpec> = self.entries.values().map(|e| e.spec()).collect();
        specs.sort_by_key(|s| s.name().to_string());
        specs
    }
}

impl Default for MethodSet {
    fn default() -> Self {
        MethodSet::new()
    }
}

lazy_static! {
    /// The process-wide default function vocabulary. Starts empty; the host
    /// process populates it through the global registration facade.
    pub(crate) static ref ALL_FUNCTIONS: RwLock<FunctionSet> = RwLock::new(FunctionSet::new());

    /// The process-wide default method vocabulary.
    pub(crate) static ref ALL_METHODS: RwLock<MethodSet> = RwLock::new(MethodSet::new());
}
