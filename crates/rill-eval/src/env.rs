//! Lexical scopes for the evaluator.
//!
//! An `Env` is a cheap handle to one scope. Scopes form a parent chain:
//! lookup walks outward, writes always land in the scope the handle points
//! at. Function values capture the handle, not a copy, so bindings added
//! to a scope after a closure was created are visible through it.

use crate::value::{EnumDefinition, StructDefinition, Value};
use anyhow::{bail, Result};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct Env(Rc<RefCell<Scope>>);

#[derive(Debug, Default)]
struct Scope {
    store: HashMap<String, Value>,
    structs: HashMap<String, Rc<StructDefinition>>,
    enums: HashMap<String, Rc<EnumDefinition>>,
    outer: Option<Env>,
}

impl Env {
    pub fn new() -> Env {
        Env::default()
    }

    /// A child scope whose lookups fall through to `outer`.
    pub fn enclosed(outer: &Env) -> Env {
        Env(Rc::new(RefCell::new(Scope {
            outer: Some(outer.clone()),
            ..Scope::default()
        })))
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        let scope = self.0.borrow();
        if let Some(v) = scope.store.get(name) {
            return Some(v.clone());
        }
        scope.outer.as_ref().and_then(|outer| outer.get(name))
    }

    /// Bind or rebind a name in this scope.
    pub fn set(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().store.insert(name.into(), value);
    }

    /// Registration does not shadow outer definitions: a duplicate in this
    /// scope is an error.
    pub fn register_struct(&self, def: StructDefinition) -> Result<()> {
        let mut scope = self.0.borrow_mut();
        if scope.structs.contains_key(&def.name) {
            bail!("struct '{}' already defined in this scope", def.name);
        }
        scope.structs.insert(def.name.clone(), Rc::new(def));
        Ok(())
    }

    pub fn register_enum(&self, def: EnumDefinition) -> Result<()> {
        let mut scope = self.0.borrow_mut();
        if scope.enums.contains_key(&def.name) {
            bail!("enum '{}' already defined in this scope", def.name);
        }
        scope.enums.insert(def.name.clone(), Rc::new(def));
        Ok(())
    }

    pub fn struct_definition(&self, name: &str) -> Option<Rc<StructDefinition>> {
        let scope = self.0.borrow();
        if let Some(def) = scope.structs.get(name) {
            return Some(def.clone());
        }
        scope
            .outer
            .as_ref()
            .and_then(|outer| outer.struct_definition(name))
    }

    pub fn enum_definition(&self, name: &str) -> Option<Rc<EnumDefinition>> {
        let scope = self.0.borrow();
        if let Some(def) = scope.enums.get(name) {
            return Some(def.clone());
        }
        scope
            .outer
            .as_ref()
            .and_then(|outer| outer.enum_definition(name))
    }

    /// Names bound in this scope (not the chain), sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.0.borrow().store.keys().cloned().collect();
        names.sort();
        names
    }

    /// Sorted `name: value` lines for this scope's bindings.
    pub fn to_strings(&self) -> Vec<String> {
        let scope = self.0.borrow();
        let mut entries: Vec<(&String, &Value)> = scope.store.iter().collect();
        entries.sort_by_key(|(name, _)| name.clone());
        entries
            .into_iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect()
    }

    /// This scope's bindings rendered into a JSON object.
    pub fn vars_as_json(&self) -> Result<String> {
        let scope = self.0.borrow();
        let vars: BTreeMap<&String, String> = scope
            .store
            .iter()
            .map(|(name, value)| (name, value.to_string()))
            .collect();
        Ok(serde_json::to_string(&vars)?)
    }
}
