/*
 * compat.rs
 * Copyright (c) 2025 The Veneer Authors
 */

//! Root element compatibility checking.
//!
//! Content templates are routinely previewed standalone, so their roots
//! carry namespace declarations and scoping attributes the layout root
//! lacks. The equivalence test tolerates exactly those differences and
//! nothing else.

use veneer_markup::Node;

/// Attribute names ignored when comparing root elements: exact names plus
/// name prefixes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeAllowList {
    exact: Vec<String>,
    prefixes: Vec<String>,
}

impl AttributeAllowList {
    pub fn new() -> Self {
        AttributeAllowList::default()
    }

    /// Tolerate an exact attribute name.
    pub fn allow(mut self, name: impl Into<String>) -> Self {
        self.exact.push(name.into());
        self
    }

    /// Tolerate every attribute name starting with `prefix`.
    pub fn allow_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefixes.push(prefix.into());
        self
    }

    pub fn permits(&self, name: &str) -> bool {
        self.exact.iter().any(|exact| exact == name)
            || self
                .prefixes
                .iter()
                .any(|prefix| name.starts_with(prefix.as_str()))
    }
}

/// True when `declared` and `actual` open the same element: same tag
/// definition, with attribute differences in either direction confined to
/// the allow list.
pub fn are_roots_equivalent(
    declared: &Node,
    actual: &Node,
    allow_list: &AttributeAllowList,
) -> bool {
    let (Some(declared), Some(actual)) = (declared.as_element(), actual.as_element()) else {
        return false;
    };
    if declared.name != actual.name {
        return false;
    }

    let declared_extra = declared.attributes.difference(&actual.attributes);
    let actual_extra = actual.attributes.difference(&declared.attributes);
    declared_extra
        .iter()
        .chain(actual_extra.iter())
        .all(|&(name, _)| allow_list.permits(name))
}
