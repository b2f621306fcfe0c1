/*
 * scope.rs
 * Copyright (c) 2025 The Veneer Authors
 */

//! Render-local scope: where decoration publishes its results.

use crate::fragments::FragmentCollection;
use std::collections::HashMap;

/// An evaluated expression value.
#[derive(Debug, Clone, PartialEq)]
pub enum ScopeValue {
    String(String),
    Bool(bool),
    List(Vec<ScopeValue>),
    Map(HashMap<String, ScopeValue>),
    Null,
}

impl ScopeValue {
    pub fn is_truthy(&self) -> bool {
        match self {
            ScopeValue::Bool(b) => *b,
            ScopeValue::String(s) => !s.is_empty(),
            ScopeValue::List(items) => items.iter().any(|v| v.is_truthy()),
            ScopeValue::Map(m) => !m.is_empty(),
            ScopeValue::Null => false,
        }
    }

    /// Render the value to output text.
    pub fn render(&self) -> String {
        match self {
            ScopeValue::String(s) => s.clone(),
            ScopeValue::Bool(true) => "true".to_string(),
            ScopeValue::Bool(false) => String::new(),
            ScopeValue::List(items) => items.iter().map(|v| v.render()).collect(),
            ScopeValue::Map(_) => "true".to_string(),
            ScopeValue::Null => String::new(),
        }
    }
}

impl Default for ScopeValue {
    fn default() -> Self {
        ScopeValue::Null
    }
}

/// Per-render-event variable and fragment storage, owned by the host
/// engine.
pub trait RenderScope {
    /// Publish a fragment collection into this scope. With `merge` set the
    /// entries combine with any previously published collection, new
    /// entries winning on name collision.
    fn publish_fragments(&mut self, fragments: FragmentCollection, merge: bool);

    /// Bind one variable into this scope.
    fn set_variable(&mut self, name: String, value: ScopeValue);
}

/// In-memory scope for tests and embedders.
#[derive(Debug, Clone, Default)]
pub struct MemoryScope {
    fragments: FragmentCollection,
    variables: HashMap<String, ScopeValue>,
}

impl MemoryScope {
    pub fn new() -> Self {
        MemoryScope::default()
    }

    pub fn fragments(&self) -> &FragmentCollection {
        &self.fragments
    }

    pub fn variable(&self, name: &str) -> Option<&ScopeValue> {
        self.variables.get(name)
    }
}

impl RenderScope for MemoryScope {
    fn publish_fragments(&mut self, fragments: FragmentCollection, merge: bool) {
        if merge {
            self.fragments.merge(fragments);
        } else {
            self.fragments = fragments;
        }
    }

    fn set_variable(&mut self, name: String, value: ScopeValue) {
        self.variables.insert(name, value);
    }
}
