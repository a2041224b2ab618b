mod builtins;
mod types;

pub use builtins::{LIGHT, SLATE, SOLARIZED};
pub use types::{Theme, ThemeDefinition};

use builtins::BUILT_IN_DEFINITIONS;

/// Theme used when nothing is configured.
#[must_use]
pub fn default_theme() -> Theme {
    SLATE
}

/// Look up a bundled theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
    BUILT_IN_DEFINITIONS
        .iter()
        .find(|definition| definition.matches(name))
        .map(|definition| definition.theme)
}

/// Canonical names of the bundled themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
    BUILT_IN_DEFINITIONS
        .iter()
        .map(|definition| definition.name)
        .collect()
}

#[must_use]
pub fn definitions() -> &'static [ThemeDefinition] {
    BUILT_IN_DEFINITIONS
}

impl Default for Theme {
    fn default() -> Self {
        default_theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_resolve_case_insensitively() {
        assert_eq!(by_name("DEFAULT"), Some(SLATE));
        assert_eq!(by_name(" Light "), Some(LIGHT));
        assert_eq!(by_name("solarized-dark"), Some(SOLARIZED));
        assert!(by_name("neon").is_none());
    }

    #[test]
    fn names_are_canonical() {
        assert_eq!(names(), vec!["slate", "light", "solarized"]);
    }
}
