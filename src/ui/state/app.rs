//! Core state container for the terminal front-end.
//!
//! [`App`] owns one instance of every widget plus the channels to the fetch
//! worker. Widgets never talk to each other; the app only routes input and
//! fetch results to whichever widget they belong to.

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::widgets::ListState;
use throbber_widgets_tui::ThrobberState;
use widgetbox_core::{
    Accordion, Carousel, ColorMode, ColorPicker, FetchError, PageState, Product, StarRating,
};

use crate::ui::Tab;
use crate::ui::config::UiConfig;
use crate::ui::fetch::{FetchCommand, FetchResult, FetchRuntime, Sources};
use crate::ui::style::Theme;

impl Drop for App {
    fn drop(&mut self) {
        self.fetch.shutdown();
    }
}

/// Aggregate state shared across the terminal UI.
pub struct App {
    pub tab: Tab,
    pub theme: Theme,
    pub accordion: Accordion,
    pub carousel: Carousel,
    pub products: PageState<Product>,
    pub(crate) product_list: ListState,
    pub(crate) page_size: usize,
    pub color: ColorPicker,
    pub rating: StarRating,
    pub(crate) throbber_state: ThrobberState,
    rng: StdRng,
    fetch: FetchRuntime,
}

impl App {
    /// Build the app with the sources described by `config`.
    pub fn new(config: UiConfig) -> Result<Self> {
        let sources = Sources::from_config(&config.source)?;
        Self::with_sources(config, sources)
    }

    pub(crate) fn with_sources(config: UiConfig, sources: Sources) -> Result<Self> {
        let fetch = FetchRuntime::spawn(sources)?;
        let mut app = Self {
            tab: config.start_tab,
            theme: config.theme,
            accordion: Accordion::new(config.faq_items).with_multi(config.start_multi),
            carousel: Carousel::new(config.images_url, config.image_page, config.image_limit),
            products: PageState::new(config.product_ceiling),
            product_list: ListState::default(),
            page_size: config.page_size,
            color: ColorPicker::default(),
            rating: StarRating::new(config.stars),
            throbber_state: ThrobberState::default(),
            rng: StdRng::from_os_rng(),
            fetch,
        };
        // Both network widgets load their first batch as soon as they exist.
        app.request_products();
        app.request_images();
        Ok(app)
    }

    /// Switch to `tab`.
    pub fn set_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            log::debug!("switching to {} tab", tab.id());
            self.tab = tab;
        }
    }

    /// Whether any widget is waiting on the network.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.products.is_loading() || self.carousel.is_loading()
    }

    /// Ask for the next product page. Ignored while one is in flight or once
    /// the ceiling is reached.
    pub fn request_products(&mut self) {
        let Some(request) = self.products.begin_fetch(self.page_size) else {
            return;
        };
        if !self.fetch.send(FetchCommand::Products(request)) {
            self.products.complete(request, Err(worker_gone()));
        }
    }

    /// Fetch the carousel listing if it has not been fetched yet.
    pub fn request_images(&mut self) {
        if let Some(request) = self.carousel.begin_fetch_if_needed() {
            self.dispatch_images(request);
        }
    }

    /// Fetch the carousel listing again regardless of what was loaded before.
    pub fn reload_images(&mut self) {
        if let Some(request) = self.carousel.begin_fetch() {
            self.dispatch_images(request);
        }
    }

    /// Move the carousel to the next or previous listing page and fetch it.
    pub(crate) fn turn_image_page(&mut self, forward: bool) {
        let page = self.carousel.page();
        let target = if forward {
            page.saturating_add(1)
        } else {
            page.saturating_sub(1)
        };
        if self.carousel.set_page(target) {
            self.request_images();
        }
    }

    fn dispatch_images(&mut self, request: widgetbox_core::ImageRequest) {
        let retained = request.clone();
        if !self.fetch.send(FetchCommand::Images(request)) {
            self.carousel.complete(&retained, Err(worker_gone()));
        }
    }

    /// Apply every fetch result that has arrived since the last frame.
    pub(crate) fn pump_fetch_results(&mut self) {
        for result in self.fetch.drain() {
            self.apply_fetch_result(result);
        }
    }

    pub(crate) fn apply_fetch_result(&mut self, result: FetchResult) {
        match result {
            FetchResult::Products { request, result } => {
                let was_empty = self.products.items().is_empty();
                self.products.complete(request, result);
                if was_empty && !self.products.items().is_empty() {
                    self.product_list.select(Some(0));
                }
            }
            FetchResult::Images { request, result } => {
                self.carousel.complete(&request, result);
                // Catch up with a page change made while this was in flight.
                self.request_images();
            }
        }
    }

    pub(crate) fn set_color_mode(&mut self, mode: ColorMode) {
        self.color.set_mode(mode, &mut self.rng);
    }

    pub(crate) fn regenerate_color(&mut self) {
        self.color.regenerate(&mut self.rng);
    }

    pub(crate) fn scroll_products(&mut self, delta: isize) {
        let len = self.products.items().len();
        if len == 0 {
            self.product_list.select(None);
            return;
        }
        let current = self.product_list.selected().unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(len - 1);
        self.product_list.select(Some(next));
    }

    #[cfg(test)]
    pub(crate) fn wait_for_fetches(&mut self) {
        use std::time::{Duration, Instant};

        let deadline = Instant::now() + Duration::from_secs(5);
        while self.is_loading() && Instant::now() < deadline {
            if let Some(result) = self.fetch.recv_timeout(Duration::from_millis(50)) {
                self.apply_fetch_result(result);
            }
        }
    }
}

fn worker_gone() -> FetchError {
    FetchError::Unavailable("fetch worker stopped".into())
}
