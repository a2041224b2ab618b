//! Interactive terminal front-end for `widgetbox`.
//!
//! The [`App`] state container owns one instance of every widget. The
//! remaining submodules implement the event loop, key routing, rendering, the
//! background fetch worker and the theme definitions.

mod actions;
pub mod components;
mod config;
mod fetch;
pub mod render;
mod runtime;
mod state;
pub mod style;
mod tab;

pub use config::{SourceConfig, UiConfig};
pub use runtime::run;
pub use state::App;
pub use tab::Tab;
