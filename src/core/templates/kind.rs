//! Template identifiers for project scaffolding.
//!
//! This module defines the closed set of templates the generator can render.
//! Each kind knows its embedded source body and the substitution parameters
//! it requires, which makes the registry inspectable: parameter presence is
//! validated before rendering ever reaches the template engine.
//!
//! # Examples
//!
//! ```
//! use tornastrap::core::templates::TemplateKind;
//! use std::str::FromStr;
//!
//! let kind = TemplateKind::from_str("settings").unwrap();
//! assert_eq!(kind, TemplateKind::Settings);
//! assert_eq!(kind.as_str(), "settings");
//! assert_eq!(kind.to_string(), "settings");
//! ```

// Internal imports (std, crate)
use std::fmt;
use std::str::FromStr;

use super::embedded;
use super::params::ParamKey;

/// The templates held by the registry.
///
/// `AppInit`, `AppUrls` and `AppHandlers` are generic application templates
/// parameterized by app name; stack mode instantiates them for the `core`
/// package and app mode for user-named packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// Entry point of the `requires` dependency package
    RequiresInit,
    /// Application settings module
    Settings,
    /// Entry point of the `utils` package
    UtilsInit,
    /// Base request-handler module (`utils/server.py`)
    BaseHandler,
    /// Decorator-utilities module (`utils/decorators.py`)
    Decorators,
    /// Entry point of an application package
    AppInit,
    /// URL-map module of an application package
    AppUrls,
    /// Handlers module of an application package
    AppHandlers,
    /// Top-level server bootstrap module (`main.py`)
    Bootstrap,
    /// Top-level readme
    Readme,
}

impl TemplateKind {
    /// Returns the template identifier as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RequiresInit => "requires_init",
            Self::Settings => "settings",
            Self::UtilsInit => "utils_init",
            Self::BaseHandler => "base_handler",
            Self::Decorators => "decorators",
            Self::AppInit => "app_init",
            Self::AppUrls => "app_urls",
            Self::AppHandlers => "app_handlers",
            Self::Bootstrap => "bootstrap",
            Self::Readme => "readme",
        }
    }

    /// Returns an iterator over all registered template kinds
    pub fn all() -> impl Iterator<Item = Self> {
        use TemplateKind::*;
        [
            RequiresInit,
            Settings,
            UtilsInit,
            BaseHandler,
            Decorators,
            AppInit,
            AppUrls,
            AppHandlers,
            Bootstrap,
            Readme,
        ]
        .iter()
        .copied()
    }

    /// The substitution parameters this template cannot render without
    pub fn required_params(&self) -> &'static [ParamKey] {
        match self {
            Self::Settings | Self::Bootstrap => &[ParamKey::Author, ParamKey::Created],
            Self::AppUrls => &[ParamKey::AppName, ParamKey::Author, ParamKey::Created],
            Self::AppInit | Self::AppHandlers => &[ParamKey::AppName],
            Self::RequiresInit | Self::UtilsInit | Self::BaseHandler | Self::Decorators
            | Self::Readme => &[],
        }
    }

    /// The embedded template body
    pub fn source(&self) -> &'static str {
        match self {
            Self::RequiresInit => embedded::REQUIRES_INIT,
            Self::Settings => embedded::SETTINGS,
            Self::UtilsInit => embedded::UTILS_INIT,
            Self::BaseHandler => embedded::BASE_HANDLER,
            Self::Decorators => embedded::DECORATORS,
            Self::AppInit => embedded::APP_INIT,
            Self::AppUrls => embedded::APP_URLS,
            Self::AppHandlers => embedded::APP_HANDLERS,
            Self::Bootstrap => embedded::BOOTSTRAP,
            Self::Readme => embedded::README,
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateKind::all()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown template kind: {s}"))
    }
}
