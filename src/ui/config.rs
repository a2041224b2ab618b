use widgetbox_core::accordion::{self, FaqItem};
use widgetbox_core::carousel::{DEFAULT_LIMIT, DEFAULT_PAGE};
use widgetbox_core::http::{DEFAULT_IMAGES_URL, DEFAULT_PRODUCTS_URL};
use widgetbox_core::pagination::{DEFAULT_CEILING, DEFAULT_PAGE_SIZE};
use widgetbox_core::rating::DEFAULT_STARS;

use super::Tab;
use super::style::Theme;

/// Where the network widgets get their data from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    /// Real HTTP endpoints.
    Http { products_url: String },
    /// Generated in-memory data, no network access.
    Offline,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::Http {
            products_url: DEFAULT_PRODUCTS_URL.to_string(),
        }
    }
}

/// Everything the UI needs to build its widgets.
#[derive(Debug, Clone)]
pub struct UiConfig {
    pub theme: Theme,
    pub start_tab: Tab,
    pub source: SourceConfig,
    pub page_size: usize,
    pub product_ceiling: usize,
    pub images_url: String,
    pub image_page: u32,
    pub image_limit: u32,
    pub stars: u8,
    pub faq_items: Vec<FaqItem>,
    pub start_multi: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            start_tab: Tab::Accordion,
            source: SourceConfig::default(),
            page_size: DEFAULT_PAGE_SIZE,
            product_ceiling: DEFAULT_CEILING,
            images_url: DEFAULT_IMAGES_URL.to_string(),
            image_page: DEFAULT_PAGE,
            image_limit: DEFAULT_LIMIT,
            stars: DEFAULT_STARS,
            faq_items: accordion::builtin_items(),
            start_multi: false,
        }
    }
}

impl UiConfig {
    /// Defaults wired to the offline sources, for demos and tests.
    #[must_use]
    pub fn offline() -> Self {
        Self {
            source: SourceConfig::Offline,
            ..Self::default()
        }
    }
}
