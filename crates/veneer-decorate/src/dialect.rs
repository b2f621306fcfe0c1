/*
 * dialect.rs
 * Copyright (c) 2025 The Veneer Authors
 */

//! Dialect naming: the attribute prefix and the qualified marker names
//! built from it.

use crate::compat::AttributeAllowList;

/// Local name of the decoration attribute.
pub const DECORATE_ATTRIBUTE: &str = "decorate";

/// Local name of the fragment marker attribute.
pub const FRAGMENT_ATTRIBUTE: &str = "fragment";

/// Local name of the variable-scoping attribute tolerated on root elements.
pub const WITH_ATTRIBUTE: &str = "with";

/// Prefix shared by namespace-declaration attributes.
pub const XMLNS_PREFIX: &str = "xmlns:";

/// The attribute dialect: a namespace prefix plus the qualified attribute
/// names built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialect {
    prefix: String,
}

impl Dialect {
    pub const DEFAULT_PREFIX: &'static str = "layout";

    pub fn new(prefix: impl Into<String>) -> Self {
        Dialect {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Qualify a local attribute name with this dialect's prefix.
    pub fn qualified(&self, local: &str) -> String {
        format!("{}:{}", self.prefix, local)
    }

    pub fn decorate_attribute(&self) -> String {
        self.qualified(DECORATE_ATTRIBUTE)
    }

    pub fn fragment_attribute(&self) -> String {
        self.qualified(FRAGMENT_ATTRIBUTE)
    }

    pub fn with_attribute(&self) -> String {
        self.qualified(WITH_ATTRIBUTE)
    }

    /// Attribute names tolerated when comparing root elements: namespace
    /// declarations and this dialect's scoping attribute.
    pub fn allow_list(&self) -> AttributeAllowList {
        AttributeAllowList::new()
            .allow(self.with_attribute())
            .allow_prefix(XMLNS_PREFIX)
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect::new(Self::DEFAULT_PREFIX)
    }
}
