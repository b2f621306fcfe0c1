/*
 * lib.rs
 * Copyright (c) 2025 The Veneer Authors
 */

//! Layout decoration engine.
//!
//! A content template names a layout template through a `decorate`
//! attribute on its root element; at render time the two trees merge into
//! one, which the host pipeline keeps processing as if it were the layout.
//! Head sections reconcile through a pluggable [`SortingStrategy`], the
//! content's body replaces the layout's, and subtrees the content marks
//! with a `fragment` attribute are harvested into the render scope for
//! later insertion.
//!
//! # Architecture
//!
//! The engine operates on pre-parsed [`veneer_markup::DocumentTree`] values
//! and owns no I/O, no markup parsing and no expression language. Those
//! live behind three traits the host implements: [`TemplateLoader`] (name
//! to tree), [`ExpressionEvaluator`] (selector/signature parsing and
//! expression evaluation) and [`RenderScope`] (per-render variable and
//! fragment storage). In-memory implementations of each ship for tests and
//! embedders.
//!
//! [`DecorateDirective::process`] drives one decoration event end to end;
//! the pieces it coordinates ([`are_roots_equivalent`], [`FragmentFinder`],
//! the two document decorators) are usable on their own.
//!
//! # Example
//!
//! ```ignore
//! use veneer_decorate::{DecorateDirective, Dialect, RenderContext};
//!
//! let directive = DecorateDirective::new(Dialect::default());
//! let mut context = RenderContext {
//!     loader: &loader,
//!     expressions: &expressions,
//!     scope: &mut scope,
//!     template: content_identity,
//!     mode: content_mode,
//! };
//! directive.process(&mut context, &mut model, "layout")?;
//! ```

pub mod compat;
pub mod decorator;
pub mod dialect;
pub mod directive;
pub mod error;
pub mod expression;
pub mod fragments;
pub mod loader;
pub mod scope;
pub mod sorting;

// Re-export main types at crate root
pub use compat::{AttributeAllowList, are_roots_equivalent};
pub use decorator::{HtmlDocumentDecorator, XmlDocumentDecorator};
pub use dialect::{
    DECORATE_ATTRIBUTE, Dialect, FRAGMENT_ATTRIBUTE, WITH_ATTRIBUTE, XMLNS_PREFIX,
};
pub use directive::{DecorateDirective, RenderContext};
pub use error::{DecorateError, DecorateResult};
pub use expression::{
    Expression, ExpressionEvaluator, FragmentSelector, FragmentSignature,
    MemoryExpressionEvaluator, ParameterBinding,
};
pub use fragments::{FragmentCollection, FragmentDefinition, FragmentFinder};
pub use loader::{MemoryLoader, NullLoader, TemplateLoader};
pub use scope::{MemoryScope, RenderScope, ScopeValue};
pub use sorting::{AppendingStrategy, GroupingStrategy, SortingStrategy};
