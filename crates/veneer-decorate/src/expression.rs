/*
 * expression.rs
 * Copyright (c) 2025 The Veneer Authors
 */

//! Pre-parsed expression types and the evaluator seam.
//!
//! The decoration engine never parses expression syntax itself. Selector
//! and signature strings go to the host's expression language through
//! [`ExpressionEvaluator`], and evaluation happens against the host's
//! current render context. [`MemoryExpressionEvaluator`] is a lookup-table
//! implementation for tests and for embedders without an expression
//! language.

use crate::scope::ScopeValue;
use std::collections::HashMap;

/// An opaque, pre-parsed expression. The engine only carries it; the host's
/// evaluator gives it meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expression(String);

impl Expression {
    pub fn new(source: impl Into<String>) -> Self {
        Expression(source.into())
    }

    pub fn source(&self) -> &str {
        &self.0
    }
}

/// One `name=value` parameter attached to a fragment selector.
///
/// `synthetic` marks a positional parameter the parser had to invent a name
/// slot for; decoration rejects those before touching the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterBinding {
    pub name: Expression,
    pub value: Expression,
    pub synthetic: bool,
}

impl ParameterBinding {
    pub fn named(name: impl Into<String>, value: impl Into<String>) -> Self {
        ParameterBinding {
            name: Expression::new(name),
            value: Expression::new(value),
            synthetic: false,
        }
    }

    pub fn synthetic(value: impl Into<String>) -> Self {
        ParameterBinding {
            name: Expression::new(""),
            value: Expression::new(value),
            synthetic: true,
        }
    }
}

/// A parsed decoration expression: the target layout's name plus parameter
/// bindings.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentSelector {
    pub template: String,
    pub parameters: Vec<ParameterBinding>,
}

impl FragmentSelector {
    pub fn template(name: impl Into<String>) -> Self {
        FragmentSelector {
            template: name.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameters(
        name: impl Into<String>,
        parameters: impl IntoIterator<Item = ParameterBinding>,
    ) -> Self {
        FragmentSelector {
            template: name.into(),
            parameters: parameters.into_iter().collect(),
        }
    }

    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }

    pub fn has_synthetic_parameters(&self) -> bool {
        self.parameters.iter().any(|parameter| parameter.synthetic)
    }
}

/// A parsed fragment definition signature: the fragment's name plus its
/// declared parameter names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentSignature {
    pub name: String,
    pub parameters: Vec<String>,
}

impl FragmentSignature {
    pub fn new(name: impl Into<String>) -> Self {
        FragmentSignature {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameters(
        name: impl Into<String>,
        parameters: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        FragmentSignature {
            name: name.into(),
            parameters: parameters.into_iter().map(Into::into).collect(),
        }
    }
}

/// The host's expression language, seen from the decoration engine.
pub trait ExpressionEvaluator {
    /// Parse a decoration attribute value into a fragment selector.
    fn parse_fragment_selector(&self, input: &str) -> anyhow::Result<FragmentSelector>;

    /// Parse a fragment marker value into a fragment signature.
    fn parse_fragment_signature(&self, input: &str) -> anyhow::Result<FragmentSignature>;

    /// Evaluate an expression against the host's current render context.
    fn evaluate(&self, expression: &Expression) -> anyhow::Result<ScopeValue>;
}

/// Lookup-table evaluator for tests and embedders without an expression
/// language.
///
/// Every input must be registered ahead of time; unknown inputs fail, which
/// is exactly how a real expression language surfaces a parse error.
#[derive(Debug, Clone, Default)]
pub struct MemoryExpressionEvaluator {
    selectors: HashMap<String, FragmentSelector>,
    signatures: HashMap<String, FragmentSignature>,
    values: HashMap<String, ScopeValue>,
}

impl MemoryExpressionEvaluator {
    pub fn new() -> Self {
        MemoryExpressionEvaluator::default()
    }

    /// Register the selector an attribute value parses to.
    pub fn add_selector(
        &mut self,
        input: impl Into<String>,
        selector: FragmentSelector,
    ) -> &mut Self {
        self.selectors.insert(input.into(), selector);
        self
    }

    /// Register the signature a fragment marker value parses to.
    pub fn add_signature(
        &mut self,
        input: impl Into<String>,
        signature: FragmentSignature,
    ) -> &mut Self {
        self.signatures.insert(input.into(), signature);
        self
    }

    /// Register the value an expression evaluates to.
    pub fn add_value(&mut self, source: impl Into<String>, value: ScopeValue) -> &mut Self {
        self.values.insert(source.into(), value);
        self
    }
}

impl ExpressionEvaluator for MemoryExpressionEvaluator {
    fn parse_fragment_selector(&self, input: &str) -> anyhow::Result<FragmentSelector> {
        self.selectors
            .get(input)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Cannot parse fragment selector: {input}"))
    }

    fn parse_fragment_signature(&self, input: &str) -> anyhow::Result<FragmentSignature> {
        self.signatures
            .get(input)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Cannot parse fragment signature: {input}"))
    }

    fn evaluate(&self, expression: &Expression) -> anyhow::Result<ScopeValue> {
        self.values
            .get(expression.source())
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Cannot evaluate expression: {}", expression.source()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_selector_parameter_queries() {
        let plain = FragmentSelector::template("layout");
        assert!(!plain.has_parameters());
        assert!(!plain.has_synthetic_parameters());

        let named = FragmentSelector::with_parameters(
            "layout",
            [ParameterBinding::named("'section'", "'news'")],
        );
        assert!(named.has_parameters());
        assert!(!named.has_synthetic_parameters());

        let positional = FragmentSelector::with_parameters(
            "layout",
            [
                ParameterBinding::named("'section'", "'news'"),
                ParameterBinding::synthetic("'stray'"),
            ],
        );
        assert!(positional.has_synthetic_parameters());
    }

    #[test]
    fn test_memory_evaluator_round_trips_registrations() {
        let mut expressions = MemoryExpressionEvaluator::new();
        expressions
            .add_selector("layout", FragmentSelector::template("layout"))
            .add_signature("header", FragmentSignature::new("header"))
            .add_value("'news'", ScopeValue::String("news".to_string()));

        assert_eq!(
            expressions.parse_fragment_selector("layout").unwrap(),
            FragmentSelector::template("layout")
        );
        assert_eq!(
            expressions.parse_fragment_signature("header").unwrap(),
            FragmentSignature::new("header")
        );
        assert_eq!(
            expressions
                .evaluate(&Expression::new("'news'"))
                .unwrap(),
            ScopeValue::String("news".to_string())
        );
    }

    #[test]
    fn test_memory_evaluator_fails_on_unknown_input() {
        let expressions = MemoryExpressionEvaluator::new();
        assert!(expressions.parse_fragment_selector("nope").is_err());
        assert!(expressions.parse_fragment_signature("nope").is_err());
        assert!(expressions.evaluate(&Expression::new("nope")).is_err());
    }
}
