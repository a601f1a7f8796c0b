extern crate rill;

use std::sync::Arc;

use rill::runner::api;
use rill::runner::ds::context::EvalContext;
use rill::runner::ds::error::RegistryError;
use rill::runner::ds::value::Value;
use rill::runner::environment::Environment;
use rill::runner::plugin::registry::FunctionSet;
use rill::runner::plugin::spec::{FunctionCategory, FunctionSpec};
use rill::runner::plugin::types::{FunctionNodeCtor, PluginFunction};
use rill::runner::query::closure_node;

/// Helper building a node constructor that always yields the given string.
fn const_fn_ctor(value: &str) -> FunctionNodeCtor {
    let value = Value::String(value.to_string());
    Arc::new(move |_args: &[Value]| {
        let value = value.clone();
        Ok(closure_node(move |_ctx: &EvalContext| Ok(value.clone()), vec![]))
    })
}

fn spec(name: &str) -> FunctionSpec {
    FunctionSpec::new(FunctionCategory::General, name, "test entry")
}

// ── Name uniqueness ──────────────────────────────────────────────────

#[test]
fn test_duplicate_function_name_rejected() {
    let mut set = FunctionSet::new();
    set.add(spec("dup_fn"), const_fn_ctor("a"), false).unwrap();
    let err = set
        .add(spec("dup_fn"), const_fn_ctor("b"), false)
        .unwrap_err();
    assert_eq!(err, RegistryError::DuplicateName("dup_fn".to_string()));
    // The first registration is still the one in place.
    assert_eq!(set.len(), 1);
    let node = (set.lookup("dup_fn").unwrap().ctor())(&[]).unwrap();
    assert_eq!(
        node.eval(&EvalContext::default()).unwrap(),
        Value::String("a".to_string())
    );
}

#[test]
fn test_duplicate_method_name_rejected_via_environment() {
    let mut env = Environment::new();
    env.register_method("reg_dup_method", |_args: &[Value]| {
        let m: rill::runner::plugin::types::PluginMethod = Box::new(|v: Value| Ok(v));
        Ok(m)
    })
    .unwrap();
    let err = env
        .register_method("reg_dup_method", |_args: &[Value]| {
            let m: rill::runner::plugin::types::PluginMethod = Box::new(|v: Value| Ok(v));
            Ok(m)
        })
        .unwrap_err();
    assert_eq!(
        err,
        RegistryError::DuplicateName("reg_dup_method".to_string())
    );
}

// ── Derivation ───────────────────────────────────────────────────────

#[test]
fn test_without_excludes_named_entries() {
    let mut set = FunctionSet::new();
    set.add(spec("keep_me"), const_fn_ctor("x"), false).unwrap();
    set.add(spec("drop_me"), const_fn_ctor("y"), false).unwrap();

    let derived = set.without(&["drop_me"]);
    assert!(derived.contains("keep_me"));
    assert!(!derived.contains("drop_me"));

    // Deriving never mutates the source.
    assert!(set.contains("drop_me"));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_without_empty_set_is_independent_copy() {
    let mut set = FunctionSet::new();
    set.add(spec("original_fn"), const_fn_ctor("x"), false)
        .unwrap();

    let mut derived = set.without(&[]);
    assert_eq!(derived.len(), 1);

    derived
        .add(spec("derived_only_fn"), const_fn_ctor("y"), false)
        .unwrap();
    assert!(derived.contains("derived_only_fn"));
    assert!(!set.contains("derived_only_fn"));
}

// ── Lookup ───────────────────────────────────────────────────────────

#[test]
fn test_lookup_returns_spec_and_constructor() {
    let mut set = FunctionSet::new();
    set.add(spec("lookup_fn"), const_fn_ctor("found"), false)
        .unwrap();

    let entry = set.lookup("lookup_fn").unwrap();
    assert_eq!(entry.spec().name(), "lookup_fn");
    assert_eq!(entry.spec().category(), FunctionCategory::General);
    assert_eq!(entry.spec().description(), "test entry");

    let node = (entry.ctor())(&[]).unwrap();
    assert_eq!(
        node.eval(&EvalContext::default()).unwrap(),
        Value::String("found".to_string())
    );
}

#[test]
fn test_lookup_missing_name() {
    let set = FunctionSet::new();
    assert!(set.lookup("no_such_fn").is_none());
    assert!(!set.contains("no_such_fn"));
}

#[test]
fn test_specs_sorted_by_name() {
    let mut set = FunctionSet::new();
    set.add(spec("zeta_fn"), const_fn_ctor("z"), false).unwrap();
    set.add(spec("alpha_fn"), const_fn_ctor("a"), false).unwrap();
    set.add(spec("mid_fn"), const_fn_ctor("m"), false).unwrap();

    let names: Vec<&str> = set.specs().iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["alpha_fn", "mid_fn", "zeta_fn"]);
}

// ── Global propagation ───────────────────────────────────────────────

#[test]
fn test_add_with_propagation_reaches_global_default() {
    let mut set = FunctionSet::new();
    set.add(spec("prop_visible_fn"), const_fn_ctor("here"), true)
        .unwrap();

    // Locally present.
    assert!(set.contains("prop_visible_fn"));
    // And visible through the global facade's parse.
    let executor = api::parse("prop_visible_fn()").unwrap();
    assert_eq!(
        executor.execute(&EvalContext::default()).unwrap(),
        Value::String("here".to_string())
    );
}

#[test]
fn test_propagation_conflict_leaves_no_partial_state() {
    // Take the name globally first.
    api::register_function("prop_conflict_fn", |_args: &[Value]| {
        let f: PluginFunction = Box::new(|| Ok(Value::Null));
        Ok(f)
    })
    .unwrap();

    let mut set = FunctionSet::new();
    let err = set
        .add(spec("prop_conflict_fn"), const_fn_ctor("x"), true)
        .unwrap_err();
    assert_eq!(
        err,
        RegistryError::DuplicateName("prop_conflict_fn".to_string())
    );
    // The failed call registered nothing locally either.
    assert!(!set.contains("prop_conflict_fn"));
}
