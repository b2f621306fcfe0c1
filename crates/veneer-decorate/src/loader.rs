/*
 * loader.rs
 * Copyright (c) 2025 The Veneer Authors
 */

//! Template loading.
//!
//! The engine asks the host for parsed templates by name and receives owned
//! trees: whatever cache the host keeps stays untouched because the
//! returned clone is the engine's to mutate.

use std::collections::HashMap;
use veneer_markup::DocumentTree;

/// Trait for resolving template names to parsed trees.
pub trait TemplateLoader {
    /// Find a template by name.
    ///
    /// Returns an independent, owned clone of the host's canonical parse,
    /// carrying identity metadata and the declared template mode.
    fn find_template(&self, name: &str) -> anyhow::Result<DocumentTree>;
}

/// Loader backed by an in-memory map.
///
/// Useful for testing and for scenarios where templates are bundled into
/// the application.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    templates: HashMap<String, DocumentTree>,
}

impl MemoryLoader {
    /// Create a new empty memory loader.
    pub fn new() -> Self {
        MemoryLoader {
            templates: HashMap::new(),
        }
    }

    /// Add a template, keyed by its identity name.
    pub fn add(&mut self, tree: DocumentTree) -> &mut Self {
        self.templates.insert(tree.identity.name.clone(), tree);
        self
    }

    /// Create a loader with the given templates.
    pub fn with_templates(templates: impl IntoIterator<Item = DocumentTree>) -> Self {
        let mut loader = MemoryLoader::new();
        for tree in templates {
            loader.add(tree);
        }
        loader
    }
}

impl TemplateLoader for MemoryLoader {
    fn find_template(&self, name: &str) -> anyhow::Result<DocumentTree> {
        self.templates
            .get(name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Template not found: {name}"))
    }
}

/// Loader that never finds anything (for tests without templates).
#[derive(Debug, Clone, Default)]
pub struct NullLoader;

impl TemplateLoader for NullLoader {
    fn find_template(&self, name: &str) -> anyhow::Result<DocumentTree> {
        Err(anyhow::anyhow!("Template not found: {name}"))
    }
}
