use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::CliArgs;

/// `[products]` section driving the load-more list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(in crate::settings) struct ProductsSection {
    pub(in crate::settings) url: Option<String>,
    pub(in crate::settings) page_size: Option<usize>,
    pub(in crate::settings) ceiling: Option<usize>,
}

impl ProductsSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(url) = &cli.products_url {
            self.url = Some(url.clone());
        }
        if let Some(page_size) = cli.page_size {
            self.page_size = Some(page_size);
        }
        if let Some(ceiling) = cli.product_ceiling {
            self.ceiling = Some(ceiling);
        }
    }
}

/// `[images]` section driving the carousel.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(in crate::settings) struct ImagesSection {
    pub(in crate::settings) url: Option<String>,
    pub(in crate::settings) page: Option<u32>,
    pub(in crate::settings) limit: Option<u32>,
}

impl ImagesSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(url) = &cli.images_url {
            self.url = Some(url.clone());
        }
        if let Some(page) = cli.image_page {
            self.page = Some(page);
        }
        if let Some(limit) = cli.image_limit {
            self.limit = Some(limit);
        }
    }
}

/// `[rating]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(in crate::settings) struct RatingSection {
    pub(in crate::settings) stars: Option<u8>,
}

impl RatingSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(stars) = cli.stars {
            self.stars = Some(stars);
        }
    }
}

/// `[accordion]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(in crate::settings) struct AccordionSection {
    pub(in crate::settings) faq: Option<PathBuf>,
    pub(in crate::settings) multi: Option<bool>,
}

impl AccordionSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(faq) = &cli.faq {
            self.faq = Some(faq.clone());
        }
        if let Some(multi) = cli.multi {
            self.multi = Some(multi);
        }
    }
}
