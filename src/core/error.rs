//! Error handling for the tornastrap scaffolding library.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. It uses `thiserror` for easy
//! error handling and distinguishes invocation errors (recoverable by the
//! caller), template errors (internal programming errors), and filesystem
//! errors (environment problems surfaced as-is).

use std::path::PathBuf;

use thiserror::Error;

/// Result type for tornastrap scaffolding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for tornastrap scaffolding operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Template engine error
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// Missing substitution parameter for a template
    #[error("template '{template}' is missing required parameter '{key}'")]
    TemplateParameter {
        template: &'static str,
        key: &'static str,
    },

    /// Invalid invocation shape or arguments
    #[error("invalid invocation: {0}")]
    Invocation(String),

    /// App generation requested outside a bootstrapped project
    #[error("app generation works only inside a bootstrapped project (expected {})", .0.display())]
    MissingBootstrap(PathBuf),

    /// Internal plan invariant violation
    #[error("plan error: {0}")]
    Plan(String),
}

impl Error {
    /// Create a new invocation error
    pub fn invocation<S: Into<String>>(msg: S) -> Self {
        Self::Invocation(msg.into())
    }

    /// Create a new plan error
    pub fn plan<S: Into<String>>(msg: S) -> Self {
        Self::Plan(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::Path;

    #[test]
    fn test_error_invocation_creation() {
        let error = Error::invocation("app name must not be empty");
        assert!(matches!(error, Error::Invocation(_)));
        assert_eq!(
            error.to_string(),
            "invalid invocation: app name must not be empty"
        );
    }

    #[test]
    fn test_error_plan_creation() {
        let error = Error::plan("task ordering violated");
        assert!(matches!(error, Error::Plan(_)));
        assert_eq!(error.to_string(), "plan error: task ordering violated");
    }

    #[test]
    fn test_error_missing_bootstrap_names_path() {
        let error = Error::MissingBootstrap(Path::new("/tmp/proj/main.py").to_path_buf());
        assert!(error.to_string().contains("bootstrapped project"));
        assert!(error.to_string().contains("/tmp/proj/main.py"));
    }

    #[test]
    fn test_error_template_parameter_names_key() {
        let error = Error::TemplateParameter {
            template: "settings",
            key: "author",
        };
        assert_eq!(
            error.to_string(),
            "template 'settings' is missing required parameter 'author'"
        );
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
        assert!(error.to_string().contains("I/O error"));
        assert!(error.to_string().contains("read-only"));
    }
}
