/*
 * write.rs
 * Copyright (c) 2025 The Veneer Authors
 */

//! Render event models back to markup text.
//!
//! This is the diagnostic form used in error messages and test assertions:
//! attributes in insertion order, standalone tags self-closed, minimal
//! escaping. It is not a dialect-aware serializer.

use crate::model::Model;
use crate::node::{ElementTag, Node, TagName};
use crate::tree::DocumentTree;
use std::fmt;

fn escape_markup(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

fn write_tag(f: &mut fmt::Formatter<'_>, tag: &ElementTag, self_closing: bool) -> fmt::Result {
    write!(f, "<{}", tag.name)?;
    for (name, value) in tag.attributes.iter() {
        write!(f, " {}=\"{}\"", name, escape_markup(value))?;
    }
    if self_closing {
        f.write_str("/>")
    } else {
        f.write_str(">")
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.prefix() {
            Some(prefix) => write!(f, "{}:{}", prefix, self.local()),
            None => f.write_str(self.local()),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Open(tag) => write_tag(f, tag, false),
            Node::Standalone(tag) => write_tag(f, tag, true),
            Node::Close(tag) => write!(f, "</{}>", tag.name),
            Node::Text(content) => f.write_str(&escape_markup(content)),
            Node::Comment(content) => write!(f, "<!--{}-->", content),
            Node::ProcessingInstruction(pi) => {
                if pi.content.is_empty() {
                    write!(f, "<?{}?>", pi.target)
                } else {
                    write!(f, "<?{} {}?>", pi.target, pi.content)
                }
            }
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.iter() {
            node.fmt(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for DocumentTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.model.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_markup() {
        assert_eq!(escape_markup("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape_markup("\"x\""), "&quot;x&quot;");
    }

    #[test]
    fn test_tag_display_keeps_written_case() {
        assert_eq!(TagName::new("Layout:Fragment").to_string(), "Layout:Fragment");
    }

    #[test]
    fn test_node_display() {
        assert_eq!(
            Node::open("div", [("class", "a&b")]).to_string(),
            "<div class=\"a&amp;b\">"
        );
        assert_eq!(
            Node::standalone("meta", [("charset", "utf-8")]).to_string(),
            "<meta charset=\"utf-8\"/>"
        );
        assert_eq!(Node::close("div").to_string(), "</div>");
        assert_eq!(Node::comment("note").to_string(), "<!--note-->");
        assert_eq!(
            Node::processing_instruction("xml", "version=\"1.0\"").to_string(),
            "<?xml version=\"1.0\"?>"
        );
    }

    #[test]
    fn test_model_display_concatenates_events() {
        let model = Model::from(vec![
            Node::open("p", []),
            Node::text("hi"),
            Node::close("p"),
        ]);
        assert_eq!(model.to_string(), "<p>hi</p>");
    }
}
