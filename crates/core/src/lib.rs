//! State objects and pure transitions behind the `widgetbox` widgets.
//!
//! Every widget keeps its interaction state in an explicit value owned by the
//! caller. Transitions take that value (or a mutable borrow of it) and return
//! the next state, so the behaviour can be exercised without a terminal.
//! Network access is hidden behind the [`sources`] traits; [`http`] provides
//! the blocking `reqwest` implementations used by the binary.

pub mod accordion;
pub mod carousel;
pub mod color;
pub mod error;
pub mod guard;
pub mod http;
pub mod pagination;
pub mod rating;
pub mod selection;
pub mod sources;

pub use accordion::{Accordion, FaqItem};
pub use carousel::{Carousel, CarouselStatus, Image, ImageRequest};
pub use color::{ColorMode, ColorPicker, ColorValue, HEX_SYMBOLS};
pub use error::{FaqError, FetchError};
pub use guard::{InFlight, Ticket};
pub use http::{HttpImageSource, HttpProductSource};
pub use pagination::{PageRequest, PageState, Product, load_next_page};
pub use rating::StarRating;
pub use selection::{SelectionMode, SelectionState, toggle};
pub use sources::{ImageSource, PageSource};
