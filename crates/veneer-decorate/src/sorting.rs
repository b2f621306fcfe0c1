/*
 * sorting.rs
 * Copyright (c) 2025 The Veneer Authors
 */

//! Head-merge sorting strategies.
//!
//! A strategy receives the layout's and the content's head children, each
//! side already split into per-child units (one element subtree, text run,
//! comment or processing instruction per unit), and decides the merged
//! order. Units are moved, never rewritten, and the same two inputs always
//! produce the same output.

use veneer_markup::{ElementTag, Model, Node};

/// Policy for merging two head sections' child units into one sequence.
///
/// Implementations must be deterministic and must not mutate the units.
pub trait SortingStrategy: Send + Sync {
    fn merge(&self, layout_children: Vec<Model>, content_children: Vec<Model>) -> Vec<Model>;
}

/// Appends the content children after the layout children, keeping every
/// unit of both sides.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppendingStrategy;

impl SortingStrategy for AppendingStrategy {
    fn merge(&self, mut layout_children: Vec<Model>, content_children: Vec<Model>) -> Vec<Model> {
        layout_children.extend(content_children);
        layout_children
    }
}

/// Default policy: keep the layout's order, let equivalent content entries
/// replace their layout counterparts in place, and keep same-tag entries
/// grouped together.
///
/// Elements whose tag is in the singleton set (`title` and `base` unless
/// overridden) match by tag alone; any other element matches only when tag
/// and attributes agree. Whitespace-only content units are dropped as
/// formatting noise.
#[derive(Debug, Clone)]
pub struct GroupingStrategy {
    singletons: Vec<String>,
}

impl GroupingStrategy {
    pub fn new() -> Self {
        GroupingStrategy {
            singletons: vec!["title".to_string(), "base".to_string()],
        }
    }

    /// Replace the singleton set: tags listed here deduplicate by tag
    /// alone, regardless of attributes.
    pub fn with_singletons(tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        GroupingStrategy {
            singletons: tags.into_iter().map(Into::into).collect(),
        }
    }

    fn is_singleton(&self, tag: &ElementTag) -> bool {
        self.singletons
            .iter()
            .any(|singleton| tag.name.matches(singleton))
    }

    /// True when `content` should replace `existing` outright.
    fn equivalent(&self, existing: &Model, content: &Model) -> bool {
        if let (Some(a), Some(b)) = (leading_element(existing), leading_element(content)) {
            return a.name == b.name
                && (self.is_singleton(a) || a.attributes == b.attributes);
        }
        match (existing.get(0), content.get(0)) {
            (Some(Node::Comment(a)), Some(Node::Comment(b))) => a == b,
            (Some(Node::Text(a)), Some(Node::Text(b))) => a == b,
            _ => false,
        }
    }
}

impl Default for GroupingStrategy {
    fn default() -> Self {
        GroupingStrategy::new()
    }
}

impl SortingStrategy for GroupingStrategy {
    fn merge(&self, layout_children: Vec<Model>, content_children: Vec<Model>) -> Vec<Model> {
        if layout_children.is_empty() {
            return content_children;
        }
        if content_children.is_empty() {
            return layout_children;
        }

        let mut merged = layout_children;
        for unit in content_children {
            if unit.is_whitespace() {
                continue;
            }
            if let Some(at) = merged
                .iter()
                .position(|existing| self.equivalent(existing, &unit))
            {
                merged[at] = unit;
            } else if let Some(at) = merged
                .iter()
                .rposition(|existing| same_group(existing, &unit))
            {
                merged.insert(at + 1, unit);
            } else {
                merged.push(unit);
            }
        }
        merged
    }
}

fn leading_element(unit: &Model) -> Option<&ElementTag> {
    unit.get(0).and_then(Node::as_element)
}

/// Units that belong together: elements of the same tag, or comments.
fn same_group(existing: &Model, content: &Model) -> bool {
    if let (Some(a), Some(b)) = (leading_element(existing), leading_element(content)) {
        return a.name == b.name;
    }
    matches!(
        (existing.get(0), content.get(0)),
        (Some(Node::Comment(_)), Some(Node::Comment(_)))
    )
}
