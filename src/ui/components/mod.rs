//! Rendering for the tab strip and each widget's body.

pub mod accordion;
pub mod carousel;
pub mod color;
pub mod products;
pub mod rating;
/// Tab strip and loading indicator.
pub mod tabs;

pub use accordion::render_accordion;
pub use carousel::render_carousel;
pub use color::render_color;
pub use products::{ProductsContext, render_products};
pub use rating::render_rating;
pub use tabs::{ProgressState, render_tab_strip};
