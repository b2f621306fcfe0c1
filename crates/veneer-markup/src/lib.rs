/*
 * lib.rs
 * Copyright (c) 2025 The Veneer Authors
 */

//! Event-model types for markup documents.
//!
//! Templates are represented as flat, ordered sequences of tag, text and
//! comment events rather than recursive trees; nesting is implied by
//! open/close pairing. This keeps merge operations (the business of
//! `veneer-decorate`) simple range splices instead of tree surgery.
//!
//! # Overview
//!
//! The main types are:
//! - [`Node`]: one markup event (open/standalone/close tag, text, comment,
//!   processing instruction)
//! - [`AttributeMap`]: insertion-ordered attribute storage with an explicit
//!   set-difference operation
//! - [`Model`]: an event sequence with structural operations (matching close
//!   tags, subtree ranges, range replacement, child-unit splitting)
//! - [`DocumentTree`]: a model plus template identity and declared mode
//!
//! # Example
//!
//! ```rust
//! use veneer_markup::{Model, Node};
//!
//! let model = Model::from(vec![
//!     Node::open("p", [("class", "lead")]),
//!     Node::text("Hello"),
//!     Node::close("p"),
//! ]);
//!
//! assert_eq!(model.to_string(), "<p class=\"lead\">Hello</p>");
//! assert_eq!(model.matching_close(0), Some(2));
//! ```

pub mod attrs;
pub mod model;
pub mod node;
pub mod tree;
pub mod write;

// Re-export main types at crate root
pub use attrs::AttributeMap;
pub use model::Model;
pub use node::{CloseTag, ElementTag, Node, ProcessingInstruction, TagName};
pub use tree::{DocumentTree, TemplateIdentity, TemplateMode};
