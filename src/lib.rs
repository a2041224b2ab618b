//! Terminal gallery of small interactive widgets.
//!
//! Widget state machines live in `widgetbox-core`; this crate adds the
//! terminal front-end, directory resolution and logging setup.

pub mod app_dirs;
pub mod logging;
pub mod ui;

pub use ui::{App, SourceConfig, Tab, UiConfig, run};
pub use ui::style::{Theme, default_theme};
