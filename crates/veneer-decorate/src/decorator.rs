/*
 * decorator.rs
 * Copyright (c) 2025 The Veneer Authors
 */

//! Document decorators: the tree-level merge.
//!
//! A decorator consumes the layout tree and reads the content tree; the
//! mutated layout is the merged result. Mode dispatch happens in the
//! directive, so each decorator only ever sees trees of its own mode.

use crate::sorting::SortingStrategy;
use veneer_markup::{DocumentTree, Model, Node, TemplateMode};

/// Merges an HTML content tree into an HTML layout tree: head sections are
/// merged through a sorting strategy, then the layout body's children are
/// replaced by the content body's children.
pub struct HtmlDocumentDecorator<'a> {
    sorting_strategy: &'a dyn SortingStrategy,
    auto_head_merging: bool,
}

impl<'a> HtmlDocumentDecorator<'a> {
    pub fn new(sorting_strategy: &'a dyn SortingStrategy, auto_head_merging: bool) -> Self {
        HtmlDocumentDecorator {
            sorting_strategy,
            auto_head_merging,
        }
    }

    pub fn decorate(&self, mut layout: DocumentTree, content: &DocumentTree) -> DocumentTree {
        debug_assert_eq!(layout.mode, TemplateMode::Html);
        if self.auto_head_merging {
            self.merge_heads(&mut layout, content);
        }
        splice_body(&mut layout, content);
        layout
    }

    fn merge_heads(&self, layout: &mut DocumentTree, content: &DocumentTree) {
        let content_children = head_children(content);
        match layout.model.find_element("head") {
            Some(head) => {
                let Some(range) = layout.model.children_range(head) else {
                    return;
                };
                let layout_children = layout.model.child_units(range.clone());
                let merged = self
                    .sorting_strategy
                    .merge(layout_children, content_children);
                layout.model.replace_children(head, Model::concat(merged));
            }
            None => {
                // No layout head: synthesize one if the merge produces
                // anything to hold.
                let merged = self.sorting_strategy.merge(Vec::new(), content_children);
                if merged.iter().all(Model::is_whitespace) {
                    return;
                }
                let mut head = Model::from(vec![Node::open("head", [])]);
                head.extend(Model::concat(merged));
                head.push(Node::close("head"));
                let Some(at) = synthesized_head_position(&layout.model) else {
                    return;
                };
                layout.model.insert(at, head);
            }
        }
    }
}

/// Merges an XML content tree into an XML layout tree: the layout root's
/// children are replaced by the content root's children. Events around the
/// layout root (prolog comments, processing instructions) are kept; the
/// content's are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlDocumentDecorator;

impl XmlDocumentDecorator {
    pub fn decorate(&self, mut layout: DocumentTree, content: &DocumentTree) -> DocumentTree {
        debug_assert_eq!(layout.mode, TemplateMode::Xml);
        let Some(content_root) = content.model.first_element() else {
            return layout;
        };
        let Some(layout_root) = layout.model.first_element() else {
            return layout;
        };
        let children = match content.model.children_range(content_root) {
            Some(range) => content.model.extract(range),
            None => Model::new(),
        };
        layout.model.replace_children(layout_root, children);
        layout
    }
}

fn head_children(tree: &DocumentTree) -> Vec<Model> {
    let Some(head) = tree.model.find_element("head") else {
        return Vec::new();
    };
    match tree.model.children_range(head) {
        Some(range) => tree.model.child_units(range),
        None => Vec::new(),
    }
}

fn splice_body(layout: &mut DocumentTree, content: &DocumentTree) {
    let Some(content_body) = content.model.find_element("body") else {
        // No content body: the layout body stands.
        return;
    };
    let Some(content_range) = content.model.children_range(content_body) else {
        return;
    };

    match layout.model.find_element("body") {
        Some(layout_body) => {
            let children = content.model.extract(content_range);
            layout.model.replace_children(layout_body, children);
        }
        None => {
            // No layout body: adopt the content's whole body section.
            let Some(section) = content.model.subtree(content_body) else {
                return;
            };
            let Some(root) = layout.model.first_element() else {
                return;
            };
            match layout.model.matching_close(root) {
                Some(close) => layout.model.insert(close, section),
                None => layout.model.replace_children(root, section),
            }
        }
    }
}

/// Where a synthesized head section goes: before the body section when
/// there is one, otherwise just before the root's closing event.
fn synthesized_head_position(model: &Model) -> Option<usize> {
    if let Some(body) = model.find_element("body") {
        return Some(body);
    }
    let root = model.first_element()?;
    model.matching_close(root)
}
