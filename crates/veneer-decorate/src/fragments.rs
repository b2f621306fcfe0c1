/*
 * fragments.rs
 * Copyright (c) 2025 The Veneer Authors
 */

//! Fragment harvesting.
//!
//! Content templates mark reusable subtrees with the dialect's fragment
//! attribute. Harvesting clones each marked subtree into an owned
//! definition keyed by the parsed fragment name, for insertion elsewhere in
//! the render.

use crate::dialect::Dialect;
use crate::error::DecorateResult;
use crate::expression::{ExpressionEvaluator, FragmentSignature};
use hashlink::LinkedHashMap;
use veneer_markup::{DocumentTree, Model};

/// A named reusable subtree with its declared parameter names.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentDefinition {
    pub name: String,
    pub parameters: Vec<String>,
    pub model: Model,
}

impl FragmentDefinition {
    pub fn new(signature: FragmentSignature, model: Model) -> Self {
        FragmentDefinition {
            name: signature.name,
            parameters: signature.parameters,
            model,
        }
    }
}

/// Fragments harvested from one template, iterated in first-occurrence
/// order.
///
/// Inserting an existing name replaces the definition but keeps its
/// original position.
#[derive(Debug, Clone, Default)]
pub struct FragmentCollection {
    entries: LinkedHashMap<String, FragmentDefinition>,
}

impl FragmentCollection {
    pub fn new() -> Self {
        FragmentCollection::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&FragmentDefinition> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Insert a definition under its own name; a later definition for an
    /// existing name wins but keeps the first occurrence's position.
    pub fn insert(&mut self, definition: FragmentDefinition) {
        match self.entries.get_mut(&definition.name) {
            Some(slot) => *slot = definition,
            None => {
                self.entries.insert(definition.name.clone(), definition);
            }
        }
    }

    /// Fold `other` into `self`, `other` winning on name collision.
    pub fn merge(&mut self, other: FragmentCollection) {
        for (_, definition) in other.entries {
            self.insert(definition);
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FragmentDefinition)> {
        self.entries.iter().map(|(name, def)| (name.as_str(), def))
    }
}

/// Equality is per-name definition equality in iteration order.
impl PartialEq for FragmentCollection {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

/// Walks a template and extracts every marked fragment.
pub struct FragmentFinder<'a> {
    dialect: &'a Dialect,
    expressions: &'a dyn ExpressionEvaluator,
}

impl<'a> FragmentFinder<'a> {
    pub fn new(dialect: &'a Dialect, expressions: &'a dyn ExpressionEvaluator) -> Self {
        FragmentFinder {
            dialect,
            expressions,
        }
    }

    /// Harvest every fragment marked in `tree`. Finding nothing is fine; a
    /// marker value the expression language cannot parse is not.
    pub fn find_fragments(&self, tree: &DocumentTree) -> DecorateResult<FragmentCollection> {
        let marker = self.dialect.fragment_attribute();
        let mut fragments = FragmentCollection::new();
        for (index, node) in tree.model.iter().enumerate() {
            let Some(tag) = node.as_element() else {
                continue;
            };
            let Some(value) = tag.attributes.get(&marker) else {
                continue;
            };
            let signature = self.expressions.parse_fragment_signature(value)?;
            let Some(model) = tree.model.subtree(index) else {
                continue;
            };
            fragments.insert(FragmentDefinition::new(signature, model));
        }
        Ok(fragments)
    }
}
