//! Image carousel backed by a paged listing endpoint.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::FetchError;
use crate::guard::{InFlight, Ticket};

/// Images requested per listing unless configured otherwise.
pub const DEFAULT_LIMIT: u32 = 5;
/// Listing page requested unless configured otherwise.
pub const DEFAULT_PAGE: u32 = 1;

/// One entry of the image listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(alias = "download_url")]
    pub downloads: String,
    #[serde(default)]
    pub author: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

/// Parameters for the one listing fetch a carousel may have outstanding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub ticket: Ticket,
    pub url: String,
    pub page: u32,
    pub limit: u32,
}

/// What the carousel should display right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselStatus<'a> {
    Loading,
    Failed(&'a str),
    Empty,
    Showing { image: &'a Image, index: usize, total: usize },
}

/// Carousel widget state.
#[derive(Debug, Clone)]
pub struct Carousel {
    url: String,
    page: u32,
    limit: u32,
    images: Vec<Image>,
    current: usize,
    in_flight: InFlight,
    error: Option<String>,
    fetched: Option<(String, u32)>,
}

impl Carousel {
    #[must_use]
    pub fn new(url: impl Into<String>, page: u32, limit: u32) -> Self {
        Self {
            url: url.into(),
            page,
            limit,
            images: Vec::new(),
            current: 0,
            in_flight: InFlight::new(),
            error: None,
            fetched: None,
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub fn images(&self) -> &[Image] {
        &self.images
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_busy()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Switch to another listing page. Pages start at 1.
    ///
    /// Returns `true` if the page changed, meaning a fetch is due. A response
    /// still in flight for the old page is applied when it lands.
    pub fn set_page(&mut self, page: u32) -> bool {
        if page == 0 || page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    /// Whether the current listing has not been fetched yet.
    #[must_use]
    pub fn needs_fetch(&self) -> bool {
        !self.url.is_empty()
            && self
                .fetched
                .as_ref()
                .is_none_or(|(url, page)| *url != self.url || *page != self.page)
    }

    /// Claim the in-flight slot for the current listing.
    ///
    /// An empty URL never fetches, matching a carousel with no source.
    pub fn begin_fetch(&mut self) -> Option<ImageRequest> {
        if self.url.is_empty() {
            return None;
        }
        let Some(ticket) = self.in_flight.try_acquire() else {
            log::debug!("image fetch ignored: request already in flight");
            return None;
        };
        self.error = None;
        self.fetched = Some((self.url.clone(), self.page));
        Some(ImageRequest {
            ticket,
            url: self.url.clone(),
            page: self.page,
            limit: self.limit,
        })
    }

    /// Begin a fetch only if the current listing has not been fetched yet.
    pub fn begin_fetch_if_needed(&mut self) -> Option<ImageRequest> {
        if self.needs_fetch() {
            self.begin_fetch()
        } else {
            None
        }
    }

    /// Apply the listing returned for `request`, replacing the images.
    pub fn complete(&mut self, request: &ImageRequest, result: Result<Vec<Image>, FetchError>) -> bool {
        if !self.in_flight.release(request.ticket) {
            log::warn!(
                "discarding image listing for unknown request {}",
                request.ticket.id()
            );
            return false;
        }
        match result {
            Ok(images) => {
                log::info!("loaded {} images from {}", images.len(), request.url);
                self.images = images;
                self.current = 0;
            }
            Err(err) => {
                log::warn!("failed to load images from {}: {err}", request.url);
                self.error = Some(err.to_string());
            }
        }
        true
    }

    pub fn next(&mut self) {
        if !self.images.is_empty() {
            self.current = (self.current + 1) % self.images.len();
        }
    }

    pub fn previous(&mut self) {
        if !self.images.is_empty() {
            self.current = self
                .current
                .checked_sub(1)
                .unwrap_or(self.images.len() - 1);
        }
    }

    /// Jump to the slide behind indicator `index`.
    pub fn select(&mut self, index: usize) {
        if index < self.images.len() {
            self.current = index;
        }
    }

    #[must_use]
    pub fn status(&self) -> CarouselStatus<'_> {
        if self.is_loading() {
            return CarouselStatus::Loading;
        }
        if let Some(error) = self.error.as_deref() {
            return CarouselStatus::Failed(error);
        }
        match self.images.get(self.current) {
            Some(image) => CarouselStatus::Showing {
                image,
                index: self.current,
                total: self.images.len(),
            },
            None => CarouselStatus::Empty,
        }
    }
}
