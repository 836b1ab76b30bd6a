//! Template system for project scaffolding.
//!
//! This module provides the template registry used by tornastrap to render
//! the files of a generated project. Template bodies are embedded in the
//! binary, registered into a Tera engine at startup, and rendered as pure
//! functions of their substitution parameters.

pub mod embedded;
pub mod kind;
pub mod params;
pub mod registry;

pub use kind::TemplateKind;
pub use params::{ParamKey, TemplateParams};
pub use registry::TemplateRegistry;
