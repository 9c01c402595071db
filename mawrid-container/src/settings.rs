//! Resolver configuration.

use serde::Deserialize;

/// Tunables for a [`Resolver`](crate::resolver::Resolver).
///
/// Deserializable so it can live in an application's config file:
///
/// ```
/// use mawrid_container::settings::Settings;
///
/// let settings = Settings::default().allow_override(true);
/// assert!(settings.allow_override);
/// assert_eq!(settings.max_suggestions, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Replace an existing binding on re-registration instead of failing.
    pub allow_override: bool,
    /// Upper bound on "did you mean" entries in unresolved-type errors.
    pub max_suggestions: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            allow_override: false,
            max_suggestions: 3,
        }
    }
}

impl Settings {
    pub fn allow_override(mut self, allow: bool) -> Self {
        self.allow_override = allow;
        self
    }

    pub fn max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = max;
        self
    }
}
