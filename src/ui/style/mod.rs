//! Visual styling utilities.
//!
//! Themes are the only styling knob today; they map semantic roles (headers,
//! highlights, muted text, errors) onto terminal colours.

pub mod theme;

pub use theme::{Theme, ThemeDefinition, by_name, default_theme, definitions, names};
