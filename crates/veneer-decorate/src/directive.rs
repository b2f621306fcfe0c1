/*
 * directive.rs
 * Copyright (c) 2025 The Veneer Authors
 */

//! The decorate directive: orchestration for one decoration event.
//!
//! # Architecture
//!
//! Processing is a straight line with no backtracking: parse the selector,
//! check the roots, strip the marker, splice the live model over the
//! content clone, harvest fragments, load the layout, decorate by mode,
//! publish. Every check that can fail runs before the first mutation, so a
//! rejected event leaves the live model untouched.

use crate::compat::are_roots_equivalent;
use crate::decorator::{HtmlDocumentDecorator, XmlDocumentDecorator};
use crate::dialect::Dialect;
use crate::error::{DecorateError, DecorateResult};
use crate::expression::ExpressionEvaluator;
use crate::fragments::FragmentFinder;
use crate::loader::TemplateLoader;
use crate::scope::RenderScope;
use crate::sorting::{GroupingStrategy, SortingStrategy};
use veneer_markup::{Model, TemplateIdentity, TemplateMode};

/// Everything one render event borrows from the host engine.
pub struct RenderContext<'a> {
    pub loader: &'a dyn TemplateLoader,
    pub expressions: &'a dyn ExpressionEvaluator,
    pub scope: &'a mut dyn RenderScope,
    /// Identity of the template being rendered; rewritten to the layout's
    /// identity when decoration publishes.
    pub template: TemplateIdentity,
    /// Mode of the template being rendered; follows `template`.
    pub mode: TemplateMode,
}

/// The `decorate` attribute processor.
pub struct DecorateDirective {
    dialect: Dialect,
    sorting_strategy: Box<dyn SortingStrategy>,
    auto_head_merging: bool,
}

impl DecorateDirective {
    /// Processor name for host-engine registration.
    pub const NAME: &'static str = "decorate";

    /// Processor precedence for host-engine registration.
    pub const PRECEDENCE: i32 = 0;

    pub fn new(dialect: Dialect) -> Self {
        DecorateDirective {
            dialect,
            sorting_strategy: Box::new(GroupingStrategy::new()),
            auto_head_merging: true,
        }
    }

    /// Swap the head-merge policy.
    pub fn with_sorting_strategy(mut self, strategy: Box<dyn SortingStrategy>) -> Self {
        self.sorting_strategy = strategy;
        self
    }

    /// Enable or disable automatic head merging.
    pub fn with_auto_head_merging(mut self, enabled: bool) -> Self {
        self.auto_head_merging = enabled;
        self
    }

    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Decorate one render event.
    ///
    /// `model` is the live event sequence rooted at the element carrying
    /// the decoration attribute; `attribute_value` is that attribute's raw
    /// value. On success the model holds the merged document, the context's
    /// template identity and mode point at the layout, and the content's
    /// fragments (plus any named decoration parameters) are published into
    /// the render scope.
    pub fn process(
        &self,
        context: &mut RenderContext<'_>,
        model: &mut Model,
        attribute_value: &str,
    ) -> DecorateResult<()> {
        let decorate_attribute = self.dialect.decorate_attribute();

        // Selector problems must surface before the model is touched.
        let selector = context.expressions.parse_fragment_selector(attribute_value)?;
        if selector.has_synthetic_parameters() {
            return Err(DecorateError::SyntheticParameters {
                attribute: decorate_attribute,
            });
        }

        tracing::debug!(
            layout = %selector.template,
            content = %context.template.name,
            "Decorating template"
        );

        let mut content = context.loader.find_template(&context.template.name)?;

        let declared_at = content.root();
        let actual_at = model.first_element();
        let allow_list = self.dialect.allow_list();
        let roots_equivalent = match (
            declared_at.and_then(|at| content.model.get(at)),
            actual_at.and_then(|at| model.get(at)),
        ) {
            (Some(declared), Some(actual)) => are_roots_equivalent(declared, actual, &allow_list),
            _ => false,
        };
        if !roots_equivalent {
            let details = format!(
                "the root element of {} is {}, but {} was declared on {}",
                context.template.name,
                describe_root(&content.model, declared_at),
                decorate_attribute,
                describe_root(model, actual_at),
            );
            return Err(DecorateError::RootMismatch {
                attribute: decorate_attribute,
                details,
            });
        }

        // The marker must not survive into the merged output. `actual_at`
        // is an element index at this point or the roots check would have
        // failed.
        if let Some(tag) = actual_at.and_then(|at| model.element_at_mut(at)) {
            tag.attributes.remove(&decorate_attribute);
        }

        // Substitute the live model for the clone's root subtree so
        // in-progress processing state is carried into the merge.
        if let Some(range) = declared_at.and_then(|at| content.model.subtree_range(at)) {
            content.model.replace(range, model.clone());
        }

        let finder = FragmentFinder::new(&self.dialect, context.expressions);
        let fragments = finder.find_fragments(&content)?;
        tracing::trace!(count = fragments.len(), "Harvested content fragments");

        let layout = context.loader.find_template(&selector.template)?;
        let merged = match layout.mode {
            TemplateMode::Html => {
                let decorator =
                    HtmlDocumentDecorator::new(self.sorting_strategy.as_ref(), self.auto_head_merging);
                decorator.decorate(layout, &content)
            }
            TemplateMode::Xml => XmlDocumentDecorator.decorate(layout, &content),
            mode => {
                return Err(DecorateError::UnsupportedTemplateMode {
                    mode,
                    name: layout.identity.name,
                });
            }
        };

        tracing::debug!(
            template = %merged.identity,
            fragments = fragments.len(),
            "Publishing decorated template"
        );

        *model = merged.model;
        context.template = merged.identity;
        context.mode = merged.mode;
        context.scope.publish_fragments(fragments, true);

        // Parameters evaluate now, against the post-decoration context.
        for parameter in &selector.parameters {
            let name = context.expressions.evaluate(&parameter.name)?.render();
            let value = context.expressions.evaluate(&parameter.value)?;
            context.scope.set_variable(name, value);
        }

        Ok(())
    }
}

impl Default for DecorateDirective {
    fn default() -> Self {
        DecorateDirective::new(Dialect::default())
    }
}

fn describe_root(model: &Model, at: Option<usize>) -> String {
    at.and_then(|at| model.element_at(at))
        .map(|tag| format!("<{}>", tag.name))
        .unwrap_or_else(|| "not an element".to_string())
}
