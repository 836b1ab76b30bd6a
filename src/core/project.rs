//! Project layout conventions and filesystem state probing.
//!
//! `ProjectLayout` owns the project root as an explicit parameter and
//! computes every conventional path the generator may touch. The root is
//! never read from ambient process state inside the core, which keeps the
//! whole engine testable against a sandbox directory.
//!
//! State is probed from disk at the start of each run and never cached:
//! the generator is stateless between invocations and assumes nothing
//! beyond what it observes when it starts.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::error::{Error, Result};

/// Dependency package directory name
pub const REQUIRES_DIR: &str = "requires";
/// Core application package directory name
pub const CORE_DIR: &str = "core";
/// Shared utilities package directory name
pub const UTILS_DIR: &str = "utils";
/// Package marker file expected inside every generated package
pub const PACKAGE_MARKER: &str = "__init__.py";
/// Top-level server bootstrap module
pub const BOOTSTRAP_FILE: &str = "main.py";
/// Top-level readme file
pub const README_FILE: &str = "readme.md";

/// Package names stack mode owns; app mode refuses to shadow them
pub const RESERVED_PACKAGES: &[&str] = &[REQUIRES_DIR, CORE_DIR, UTILS_DIR];

/// Resolves conventional paths beneath an explicit project root
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    /// Create a layout rooted at `root`.
    ///
    /// Callers are expected to pass an absolute path so every task target
    /// derived from the layout is absolute as well.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The project root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `requires/` package directory
    pub fn requires_dir(&self) -> PathBuf {
        self.root.join(REQUIRES_DIR)
    }

    /// `requires/__init__.py`
    pub fn requires_init(&self) -> PathBuf {
        self.requires_dir().join(PACKAGE_MARKER)
    }

    /// `requires/settings.py`
    pub fn settings_file(&self) -> PathBuf {
        self.requires_dir().join("settings.py")
    }

    /// `utils/` package directory
    pub fn utils_dir(&self) -> PathBuf {
        self.root.join(UTILS_DIR)
    }

    /// `utils/__init__.py`
    pub fn utils_init(&self) -> PathBuf {
        self.utils_dir().join(PACKAGE_MARKER)
    }

    /// `utils/server.py`
    pub fn server_file(&self) -> PathBuf {
        self.utils_dir().join("server.py")
    }

    /// `utils/decorators.py`
    pub fn decorators_file(&self) -> PathBuf {
        self.utils_dir().join("decorators.py")
    }

    /// `core/` package directory
    pub fn core_dir(&self) -> PathBuf {
        self.root.join(CORE_DIR)
    }

    /// `core/__init__.py`
    pub fn core_init(&self) -> PathBuf {
        self.core_dir().join(PACKAGE_MARKER)
    }

    /// `core/urls.py`
    pub fn core_urls(&self) -> PathBuf {
        self.core_dir().join("urls.py")
    }

    /// `core/handlers.py`
    pub fn core_handlers(&self) -> PathBuf {
        self.core_dir().join("handlers.py")
    }

    /// Top-level `main.py`
    pub fn bootstrap_file(&self) -> PathBuf {
        self.root.join(BOOTSTRAP_FILE)
    }

    /// Top-level `readme.md`
    pub fn readme_file(&self) -> PathBuf {
        self.root.join(README_FILE)
    }

    /// `<app>/` package directory
    pub fn app_dir(&self, app_name: &str) -> PathBuf {
        self.root.join(app_name)
    }

    /// `<app>/__init__.py`
    pub fn app_init(&self, app_name: &str) -> PathBuf {
        self.app_dir(app_name).join(PACKAGE_MARKER)
    }

    /// `<app>/urls.py`
    pub fn app_urls(&self, app_name: &str) -> PathBuf {
        self.app_dir(app_name).join("urls.py")
    }

    /// `<app>/handlers.py`
    pub fn app_handlers(&self, app_name: &str) -> PathBuf {
        self.app_dir(app_name).join("handlers.py")
    }

    /// Snapshot which conventional directories and files currently exist.
    ///
    /// Directory existence only; file contents are never inspected. The
    /// result is advisory input to the materializer's overwrite policy,
    /// not a gate.
    pub fn probe(&self) -> ProjectState {
        let state = ProjectState {
            has_requires: self.requires_dir().is_dir(),
            has_core: self.core_dir().is_dir(),
            has_utils: self.utils_dir().is_dir(),
            has_bootstrap: self.bootstrap_file().is_file(),
        };
        debug!(root = %self.root.display(), ?state, "probed project state");
        state
    }

    /// Whether the named app directory already exists under the root
    pub fn app_exists(&self, app_name: &str) -> bool {
        self.app_dir(app_name).is_dir()
    }

    /// Check the precondition for app-mode generation.
    ///
    /// App modules can only be added to a project that a prior stack run
    /// bootstrapped, keyed on the presence of the top-level `main.py`.
    pub fn check_app_precondition(&self) -> StackPrecondition {
        if self.probe().has_bootstrap {
            StackPrecondition::Satisfied
        } else {
            StackPrecondition::MissingBootstrap {
                expected: self.bootstrap_file(),
            }
        }
    }
}

/// Observed filesystem state of a project root at the start of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectState {
    pub has_requires: bool,
    pub has_core: bool,
    pub has_utils: bool,
    pub has_bootstrap: bool,
}

/// Typed result of the app-mode precondition check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackPrecondition {
    /// A prior stack run produced the bootstrap module
    Satisfied,
    /// No bootstrap module found at the expected path
    MissingBootstrap { expected: PathBuf },
}

/// Validate an app name for use as a package directory.
///
/// Names must be non-empty, filesystem-identifier-safe
/// (`[A-Za-z_][A-Za-z0-9_]*`) and must not shadow a package that stack
/// mode owns, since a collision would silently overwrite its files.
pub fn validate_app_name(name: &str) -> Result<()> {
    let Some(first) = name.chars().next() else {
        return Err(Error::invocation("app name must not be empty"));
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(Error::invocation(format!(
            "app name '{name}' must start with a letter or underscore"
        )));
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(Error::invocation(format!(
            "app name '{name}' may only contain letters, digits and underscores"
        )));
    }
    if RESERVED_PACKAGES.contains(&name) {
        return Err(Error::invocation(format!(
            "app name '{name}' collides with a generated stack package"
        )));
    }
    Ok(())
}
