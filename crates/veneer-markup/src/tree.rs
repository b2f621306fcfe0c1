/*
 * tree.rs
 * Copyright (c) 2025 The Veneer Authors
 */

use crate::model::Model;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendering dialects a template can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateMode {
    Html,
    Xml,
    Text,
    JavaScript,
    Css,
    Raw,
}

impl fmt::Display for TemplateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TemplateMode::Html => "HTML",
            TemplateMode::Xml => "XML",
            TemplateMode::Text => "TEXT",
            TemplateMode::JavaScript => "JAVASCRIPT",
            TemplateMode::Css => "CSS",
            TemplateMode::Raw => "RAW",
        };
        f.write_str(name)
    }
}

/// Identifies a resolved template: its logical name plus, when known, the
/// locator it was loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateIdentity {
    pub name: String,
    pub source: Option<String>,
}

impl TemplateIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        TemplateIdentity {
            name: name.into(),
            source: None,
        }
    }

    pub fn with_source(name: impl Into<String>, source: impl Into<String>) -> Self {
        TemplateIdentity {
            name: name.into(),
            source: Some(source.into()),
        }
    }
}

impl fmt::Display for TemplateIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{} ({})", self.name, source),
            None => f.write_str(&self.name),
        }
    }
}

/// A parsed template: its event model plus identity and declared mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentTree {
    pub identity: TemplateIdentity,
    pub mode: TemplateMode,
    pub model: Model,
}

impl DocumentTree {
    pub fn new(identity: TemplateIdentity, mode: TemplateMode, model: Model) -> Self {
        DocumentTree {
            identity,
            mode,
            model,
        }
    }

    pub fn html(name: &str, model: Model) -> Self {
        DocumentTree::new(TemplateIdentity::new(name), TemplateMode::Html, model)
    }

    pub fn xml(name: &str, model: Model) -> Self {
        DocumentTree::new(TemplateIdentity::new(name), TemplateMode::Xml, model)
    }

    /// Index of the root element's opening event, skipping any prolog.
    pub fn root(&self) -> Option<usize> {
        self.model.first_element()
    }
}
