/*
 * model.rs
 * Copyright (c) 2025 The Veneer Authors
 */

//! Structural operations over flat event sequences.
//!
//! A [`Model`] owns an ordered run of [`Node`] events. Nesting is implied by
//! open/close pairing; the operations here locate elements, pair closing
//! events with opening ones, extract and replace whole subtrees, and split a
//! run of children into per-child units. Sequences are assumed well formed:
//! lookups on malformed input return `None` rather than panicking.

use crate::node::{CloseTag, ElementTag, Node};
use serde::{Deserialize, Serialize};
use std::ops::Range;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    nodes: Vec<Node>,
}

impl Model {
    pub fn new() -> Self {
        Model { nodes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn extend(&mut self, other: Model) {
        self.nodes.extend(other.nodes);
    }

    /// Concatenate a sequence of models into one.
    pub fn concat(units: impl IntoIterator<Item = Model>) -> Model {
        let mut result = Model::new();
        for unit in units {
            result.extend(unit);
        }
        result
    }

    /// Index of the first element-opening event, skipping leading text,
    /// comments and processing instructions.
    pub fn first_element(&self) -> Option<usize> {
        self.nodes.iter().position(Node::is_element)
    }

    /// Index of the first event opening an element whose tag matches `name`,
    /// at any depth.
    pub fn find_element(&self, name: &str) -> Option<usize> {
        self.nodes.iter().position(|node| node.opens(name))
    }

    pub fn element_at(&self, index: usize) -> Option<&ElementTag> {
        self.nodes.get(index).and_then(Node::as_element)
    }

    pub fn element_at_mut(&mut self, index: usize) -> Option<&mut ElementTag> {
        self.nodes.get_mut(index).and_then(Node::as_element_mut)
    }

    /// Index of the closing event paired with the opening event at `open`.
    pub fn matching_close(&self, open: usize) -> Option<usize> {
        if !matches!(self.nodes.get(open), Some(Node::Open(_))) {
            return None;
        }
        let mut depth = 0usize;
        for (offset, node) in self.nodes[open..].iter().enumerate() {
            match node {
                Node::Open(_) => depth += 1,
                Node::Close(_) => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(open + offset);
                    }
                }
                _ => {}
            }
        }
        None
    }

    /// Half-open index range covering the event at `at` and, for an opening
    /// event, everything through its matching close.
    pub fn subtree_range(&self, at: usize) -> Option<Range<usize>> {
        match self.nodes.get(at)? {
            Node::Open(_) => self.matching_close(at).map(|close| at..close + 1),
            _ => Some(at..at + 1),
        }
    }

    /// Half-open range of the events between an element's opening and
    /// closing events. Standalone elements yield an empty range.
    pub fn children_range(&self, at: usize) -> Option<Range<usize>> {
        match self.nodes.get(at)? {
            Node::Open(_) => self.matching_close(at).map(|close| at + 1..close),
            Node::Standalone(_) => Some(at + 1..at + 1),
            _ => None,
        }
    }

    /// Clone the events in `range` into a new model.
    pub fn extract(&self, range: Range<usize>) -> Model {
        Model {
            nodes: self.nodes[range].to_vec(),
        }
    }

    /// Clone the whole subtree rooted at `at`: the event itself plus, for an
    /// opening event, its children and matching close.
    pub fn subtree(&self, at: usize) -> Option<Model> {
        self.subtree_range(at).map(|range| self.extract(range))
    }

    /// Replace the events in `range` with the contents of `replacement`.
    pub fn replace(&mut self, range: Range<usize>, replacement: Model) {
        self.nodes.splice(range, replacement.nodes);
    }

    /// Replace the children of the element opening at `at`. A standalone
    /// tag gaining children is rewritten as an open/close pair; any other
    /// event at `at` is left alone.
    pub fn replace_children(&mut self, at: usize, children: Model) {
        match self.nodes.get(at) {
            Some(Node::Open(_)) => {
                if let Some(range) = self.children_range(at) {
                    self.replace(range, children);
                }
            }
            Some(Node::Standalone(tag)) => {
                if children.is_empty() {
                    return;
                }
                let tag = tag.clone();
                let close = CloseTag {
                    name: tag.name.clone(),
                };
                let mut replacement = Model::from(vec![Node::Open(tag)]);
                replacement.extend(children);
                replacement.push(Node::Close(close));
                self.replace(at..at + 1, replacement);
            }
            _ => {}
        }
    }

    /// Insert the contents of `model` so its first event lands at `at`.
    pub fn insert(&mut self, at: usize, model: Model) {
        self.nodes.splice(at..at, model.nodes);
    }

    /// Split the events in `range` into per-child units: each element
    /// subtree, text run, comment or processing instruction becomes one
    /// unit.
    pub fn child_units(&self, range: Range<usize>) -> Vec<Model> {
        let mut units = Vec::new();
        let mut at = range.start;
        while at < range.end {
            let Some(subtree) = self.subtree_range(at) else {
                break;
            };
            let end = subtree.end.min(range.end);
            units.push(self.extract(at..end));
            at = subtree.end;
        }
        units
    }

    /// True when every event is whitespace-only text; an empty model counts.
    pub fn is_whitespace(&self) -> bool {
        self.nodes.iter().all(Node::is_whitespace)
    }
}

impl From<Vec<Node>> for Model {
    fn from(nodes: Vec<Node>) -> Self {
        Model { nodes }
    }
}

impl FromIterator<Node> for Model {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Model {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Model {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// `<div><span>a</span><span>b</span></div>` preceded by a comment.
    fn nested() -> Model {
        Model::from(vec![
            Node::comment("prolog"),
            Node::open("div", []),
            Node::open("span", []),
            Node::text("a"),
            Node::close("span"),
            Node::open("span", []),
            Node::text("b"),
            Node::close("span"),
            Node::close("div"),
        ])
    }

    #[test]
    fn test_first_element_skips_non_elements() {
        let model = nested();
        assert_eq!(model.first_element(), Some(1));
        assert!(Model::from(vec![Node::text("x")]).first_element().is_none());
    }

    #[test]
    fn test_matching_close_pairs_nested_tags() {
        let model = nested();
        assert_eq!(model.matching_close(1), Some(8));
        assert_eq!(model.matching_close(2), Some(4));
        assert_eq!(model.matching_close(5), Some(7));
    }

    #[test]
    fn test_matching_close_requires_open_event() {
        let model = nested();
        assert_eq!(model.matching_close(0), None);
        assert_eq!(model.matching_close(3), None);
        assert_eq!(model.matching_close(99), None);
    }

    #[test]
    fn test_subtree_range_covers_whole_element() {
        let model = nested();
        assert_eq!(model.subtree_range(1), Some(1..9));
        assert_eq!(model.subtree_range(2), Some(2..5));
        // Non-opening events are single-event subtrees.
        assert_eq!(model.subtree_range(0), Some(0..1));
        assert_eq!(model.subtree_range(3), Some(3..4));
    }

    #[test]
    fn test_children_range() {
        let model = nested();
        assert_eq!(model.children_range(1), Some(2..8));

        let standalone = Model::from(vec![Node::standalone("meta", [])]);
        assert_eq!(standalone.children_range(0), Some(1..1));
    }

    #[test]
    fn test_subtree_clones_events() {
        let model = nested();
        let span = model.subtree(2).unwrap();
        assert_eq!(
            span.nodes(),
            &[Node::open("span", []), Node::text("a"), Node::close("span")]
        );
    }

    #[test]
    fn test_replace_splices_in_place() {
        let mut model = nested();
        let range = model.children_range(1).unwrap();
        model.replace(range, Model::from(vec![Node::text("only")]));

        assert_eq!(
            model.nodes(),
            &[
                Node::comment("prolog"),
                Node::open("div", []),
                Node::text("only"),
                Node::close("div"),
            ]
        );
    }

    #[test]
    fn test_replace_children_of_open_element() {
        let mut model = nested();
        model.replace_children(1, Model::from(vec![Node::text("swapped")]));
        assert_eq!(
            model.nodes(),
            &[
                Node::comment("prolog"),
                Node::open("div", []),
                Node::text("swapped"),
                Node::close("div"),
            ]
        );
    }

    #[test]
    fn test_replace_children_rewrites_standalone_tag() {
        let mut model = Model::from(vec![Node::standalone("head", [("id", "h")])]);
        model.replace_children(0, Model::from(vec![Node::text("x")]));
        assert_eq!(
            model.nodes(),
            &[
                Node::open("head", [("id", "h")]),
                Node::text("x"),
                Node::close("head"),
            ]
        );
    }

    #[test]
    fn test_replace_children_with_empty_keeps_standalone() {
        let mut model = Model::from(vec![Node::standalone("head", [])]);
        model.replace_children(0, Model::new());
        assert_eq!(model.nodes(), &[Node::standalone("head", [])]);
    }

    #[test]
    fn test_insert_lands_at_index() {
        let mut model = Model::from(vec![Node::open("div", []), Node::close("div")]);
        model.insert(1, Model::from(vec![Node::text("x")]));
        assert_eq!(
            model.nodes(),
            &[Node::open("div", []), Node::text("x"), Node::close("div")]
        );
    }

    #[test]
    fn test_child_units_split_elements_and_text() {
        let model = nested();
        let units = model.child_units(model.children_range(1).unwrap());
        assert_eq!(units.len(), 2);
        assert_eq!(
            units[0].nodes(),
            &[Node::open("span", []), Node::text("a"), Node::close("span")]
        );
        assert_eq!(
            units[1].nodes(),
            &[Node::open("span", []), Node::text("b"), Node::close("span")]
        );
    }

    #[test]
    fn test_child_units_keep_loose_events() {
        let model = Model::from(vec![
            Node::text("  "),
            Node::standalone("meta", [("charset", "utf-8")]),
            Node::comment("note"),
        ]);
        let units = model.child_units(0..3);
        assert_eq!(units.len(), 3);
        assert!(units[0].is_whitespace());
    }

    #[test]
    fn test_find_element_matches_at_depth() {
        let model = nested();
        assert_eq!(model.find_element("span"), Some(2));
        assert_eq!(model.find_element("SPAN"), Some(2));
        assert_eq!(model.find_element("p"), None);
    }

    #[test]
    fn test_concat() {
        let merged = Model::concat([
            Model::from(vec![Node::text("a")]),
            Model::from(vec![Node::text("b")]),
        ]);
        assert_eq!(merged.nodes(), &[Node::text("a"), Node::text("b")]);
    }
}
