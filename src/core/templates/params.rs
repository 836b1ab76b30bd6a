//! Substitution parameters for scaffold templates.
//!
//! Templates accept at most three substitution slots: the app name (an
//! identifier-safe string), the author identity (free text), and the
//! generation timestamp (free text, the only non-deterministic input).
//! [`TemplateParams`] carries whichever slots an invocation provides and
//! serializes directly into a Tera context.

use std::fmt;

use serde::Serialize;

/// Names of the substitution slots a template may require
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKey {
    /// Identifier-safe application name
    AppName,
    /// Author identity recorded in generated file headers
    Author,
    /// Generation timestamp recorded in generated file headers
    Created,
}

impl ParamKey {
    /// Returns the placeholder name used inside template bodies
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AppName => "app_name",
            Self::Author => "author",
            Self::Created => "created",
        }
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Substitution values threaded into template rendering.
///
/// All slots are optional; presence is validated against each template's
/// required set before rendering so a missing value fails with an error
/// naming the key instead of a template-engine failure.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TemplateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

impl TemplateParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the app name slot
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// Set the author slot
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the creation timestamp slot
    pub fn with_created(mut self, created: impl Into<String>) -> Self {
        self.created = Some(created.into());
        self
    }

    /// Whether the given slot holds a value
    pub fn provides(&self, key: ParamKey) -> bool {
        match key {
            ParamKey::AppName => self.app_name.is_some(),
            ParamKey::Author => self.author.is_some(),
            ParamKey::Created => self.created.is_some(),
        }
    }
}
