//! Template registration and rendering.
//!
//! The registry loads every embedded template body into a Tera engine at
//! startup and renders on demand. Rendering is a pure function of the
//! template kind and its parameters: no file I/O, no path computation, and
//! byte-identical output for identical inputs. The only non-deterministic
//! value a template ever sees is the `created` timestamp, which callers
//! produce once per invocation and pass in like any other parameter.

use tera::{Context, Tera};
use tracing::debug;

use super::kind::TemplateKind;
use super::params::TemplateParams;
use crate::core::error::{Error, Result};

/// Holds the compiled template set for the process lifetime
#[derive(Debug)]
pub struct TemplateRegistry {
    tera: Tera,
}

impl TemplateRegistry {
    /// Compile all embedded templates into a fresh engine.
    ///
    /// Fails only if an embedded body is syntactically invalid, which is a
    /// build defect rather than a user error.
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        for kind in TemplateKind::all() {
            tera.add_raw_template(kind.as_str(), kind.source())?;
        }
        Ok(Self { tera })
    }

    /// Render a template with the given parameters.
    ///
    /// Validates that every parameter the template requires is present
    /// before rendering, so a missing value surfaces as
    /// [`Error::TemplateParameter`] naming the key.
    pub fn render(&self, kind: TemplateKind, params: &TemplateParams) -> Result<String> {
        for key in kind.required_params() {
            if !params.provides(*key) {
                return Err(Error::TemplateParameter {
                    template: kind.as_str(),
                    key: key.as_str(),
                });
            }
        }

        debug!(template = %kind, "rendering template");
        let context = Context::from_serialize(params)?;
        Ok(self.tera.render(kind.as_str(), &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_params() -> TemplateParams {
        TemplateParams::new()
            .with_app_name("blog")
            .with_author("someone")
            .with_created("August 06 2026")
    }

    #[test]
    fn test_registry_compiles_all_templates() {
        let registry = TemplateRegistry::new().unwrap();
        for kind in TemplateKind::all() {
            let rendered = registry.render(kind, &full_params()).unwrap();
            assert!(!rendered.trim().is_empty(), "template '{kind}' rendered empty");
        }
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let registry = TemplateRegistry::new().unwrap();
        for kind in TemplateKind::all() {
            let first = registry.render(kind, &full_params()).unwrap();
            let second = registry.render(kind, &full_params()).unwrap();
            assert_eq!(first, second, "template '{kind}' is not deterministic");
        }
    }

    #[test]
    fn test_substitutions_reach_the_output() {
        let registry = TemplateRegistry::new().unwrap();

        let urls = registry.render(TemplateKind::AppUrls, &full_params()).unwrap();
        assert!(urls.contains("URL map for blog app."));
        assert!(urls.contains("from blog.handlers import Main"));
        assert!(urls.contains("Created on August 06 2026"));
        assert!(urls.contains("@author: someone"));
        assert!(!urls.contains("{{"));

        let init = registry
            .render(
                TemplateKind::AppInit,
                &TemplateParams::new().with_app_name("core"),
            )
            .unwrap();
        assert!(init.contains("from core.urls import URLS"));
    }

    #[test]
    fn test_missing_parameter_names_the_key() {
        let registry = TemplateRegistry::new().unwrap();
        let err = registry
            .render(
                TemplateKind::Settings,
                &TemplateParams::new().with_author("someone"),
            )
            .unwrap_err();
        match err {
            Error::TemplateParameter { template, key } => {
                assert_eq!(template, "settings");
                assert_eq!(key, "created");
            }
            other => panic!("expected TemplateParameter error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_app_name_is_rejected_before_rendering() {
        let registry = TemplateRegistry::new().unwrap();
        let err = registry
            .render(TemplateKind::AppHandlers, &TemplateParams::new())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::TemplateParameter {
                template: "app_handlers",
                key: "app_name",
            }
        ));
    }

    #[test]
    fn test_parameterless_templates_render_with_empty_params() {
        let registry = TemplateRegistry::new().unwrap();
        let readme = registry
            .render(TemplateKind::Readme, &TemplateParams::new())
            .unwrap();
        assert!(readme.contains("README for Tornastrap"));
    }
}
