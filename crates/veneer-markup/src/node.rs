/*
 * node.rs
 * Copyright (c) 2025 The Veneer Authors
 */

use crate::attrs::AttributeMap;
use serde::{Deserialize, Serialize};

/// A qualified tag name: optional namespace prefix plus local name.
///
/// Equality is definition equality: both parts compare
/// ASCII-case-insensitively, so `<DIV>` and `<div>` name the same tag while
/// `layout:fragment` and `other:fragment` do not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagName {
    prefix: Option<String>,
    local: String,
}

impl TagName {
    /// Parse a name as written, splitting a namespace prefix on the first `:`.
    pub fn new(name: &str) -> Self {
        match name.split_once(':') {
            Some((prefix, local)) => TagName {
                prefix: Some(prefix.to_string()),
                local: local.to_string(),
            },
            None => TagName {
                prefix: None,
                local: name.to_string(),
            },
        }
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn local(&self) -> &str {
        &self.local
    }

    /// The case-normalized qualified form used for identity comparisons.
    pub fn definition(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!(
                "{}:{}",
                prefix.to_ascii_lowercase(),
                self.local.to_ascii_lowercase()
            ),
            None => self.local.to_ascii_lowercase(),
        }
    }

    /// True when `name`, as written in markup, names this tag definition.
    pub fn matches(&self, name: &str) -> bool {
        *self == TagName::new(name)
    }
}

impl PartialEq for TagName {
    fn eq(&self, other: &Self) -> bool {
        let prefixes_match = match (&self.prefix, &other.prefix) {
            (None, None) => true,
            (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
            _ => false,
        };
        prefixes_match && self.local.eq_ignore_ascii_case(&other.local)
    }
}

impl Eq for TagName {}

/// The opening (or self-contained) form of an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementTag {
    pub name: TagName,
    pub attributes: AttributeMap,
}

impl ElementTag {
    pub fn new(name: &str) -> Self {
        ElementTag {
            name: TagName::new(name),
            attributes: AttributeMap::new(),
        }
    }

    pub fn with_attributes<'a>(
        name: &str,
        attributes: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        ElementTag {
            name: TagName::new(name),
            attributes: attributes.into_iter().collect(),
        }
    }
}

/// A closing tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloseTag {
    pub name: TagName,
}

/// A processing instruction such as `<?xml version="1.0"?>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingInstruction {
    pub target: String,
    pub content: String,
}

/// One event in a parsed markup document.
///
/// Documents are flat sequences of these events rather than a recursive
/// tree; nesting is implied by open/close pairing and assumed well formed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Open(ElementTag),
    Standalone(ElementTag),
    Close(CloseTag),
    Text(String),
    Comment(String),
    ProcessingInstruction(ProcessingInstruction),
}

impl Node {
    pub fn open<'a>(
        name: &str,
        attributes: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Node {
        Node::Open(ElementTag::with_attributes(name, attributes))
    }

    pub fn standalone<'a>(
        name: &str,
        attributes: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Node {
        Node::Standalone(ElementTag::with_attributes(name, attributes))
    }

    pub fn close(name: &str) -> Node {
        Node::Close(CloseTag {
            name: TagName::new(name),
        })
    }

    pub fn text(content: impl Into<String>) -> Node {
        Node::Text(content.into())
    }

    pub fn comment(content: impl Into<String>) -> Node {
        Node::Comment(content.into())
    }

    pub fn processing_instruction(
        target: impl Into<String>,
        content: impl Into<String>,
    ) -> Node {
        Node::ProcessingInstruction(ProcessingInstruction {
            target: target.into(),
            content: content.into(),
        })
    }

    /// The element tag when this event opens an element, whether paired
    /// (open) or self-contained (standalone).
    pub fn as_element(&self) -> Option<&ElementTag> {
        match self {
            Node::Open(tag) | Node::Standalone(tag) => Some(tag),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut ElementTag> {
        match self {
            Node::Open(tag) | Node::Standalone(tag) => Some(tag),
            _ => None,
        }
    }

    pub fn is_element(&self) -> bool {
        self.as_element().is_some()
    }

    /// True when this event opens an element whose tag matches `name`.
    pub fn opens(&self, name: &str) -> bool {
        self.as_element().is_some_and(|tag| tag.name.matches(name))
    }

    /// True for text consisting entirely of whitespace (or nothing).
    pub fn is_whitespace(&self) -> bool {
        match self {
            Node::Text(content) => content.chars().all(char::is_whitespace),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // === TagName tests ===

    #[test]
    fn test_tag_name_splits_prefix() {
        let name = TagName::new("layout:fragment");
        assert_eq!(name.prefix(), Some("layout"));
        assert_eq!(name.local(), "fragment");
    }

    #[test]
    fn test_tag_name_without_prefix() {
        let name = TagName::new("div");
        assert_eq!(name.prefix(), None);
        assert_eq!(name.local(), "div");
    }

    #[test]
    fn test_tag_equality_is_case_insensitive() {
        assert_eq!(TagName::new("DIV"), TagName::new("div"));
        assert_eq!(TagName::new("Layout:Fragment"), TagName::new("layout:fragment"));
        assert_ne!(TagName::new("layout:fragment"), TagName::new("other:fragment"));
        assert_ne!(TagName::new("fragment"), TagName::new("layout:fragment"));
    }

    #[test]
    fn test_definition_normalizes_case() {
        assert_eq!(TagName::new("HTML").definition(), "html");
        assert_eq!(TagName::new("Layout:Title").definition(), "layout:title");
    }

    // === Node tests ===

    #[test]
    fn test_open_carries_attributes_in_order() {
        let node = Node::open("div", [("class", "hero"), ("id", "main")]);
        let tag = node.as_element().unwrap();
        let names: Vec<&str> = tag.attributes.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["class", "id"]);
    }

    #[test]
    fn test_as_element_covers_open_and_standalone() {
        assert!(Node::open("div", []).as_element().is_some());
        assert!(Node::standalone("meta", []).as_element().is_some());
        assert!(Node::close("div").as_element().is_none());
        assert!(Node::text("hi").as_element().is_none());
    }

    #[test]
    fn test_opens_matches_by_definition() {
        let node = Node::open("DIV", []);
        assert!(node.opens("div"));
        assert!(!node.opens("span"));
    }

    #[test]
    fn test_is_whitespace() {
        assert!(Node::text("  \n\t ").is_whitespace());
        assert!(Node::text("").is_whitespace());
        assert!(!Node::text(" x ").is_whitespace());
        assert!(!Node::comment(" ").is_whitespace());
    }
}
