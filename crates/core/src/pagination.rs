//! Incremental "load more" pagination.
//!
//! Each successful fetch appends one page to the accumulated items and
//! advances the page counter. A single-slot [`InFlight`] guard keeps at most
//! one request outstanding; once the accumulated length reaches the ceiling
//! the state is exhausted and no further request is issued.

use serde::{Deserialize, Serialize};

use crate::error::FetchError;
use crate::guard::{InFlight, Ticket};
use crate::sources::PageSource;

/// Items requested per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 20;
/// Accumulated length at which loading stops.
pub const DEFAULT_CEILING: usize = 100;

/// A product as returned by the catalogue endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub thumbnail: String,
    pub title: String,
}

/// Parameters for one outstanding page fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub ticket: Ticket,
    pub offset: usize,
    pub limit: usize,
}

/// Accumulated pages plus the bookkeeping for fetching the next one.
#[derive(Debug, Clone)]
pub struct PageState<T> {
    items: Vec<T>,
    page_index: usize,
    exhausted: bool,
    ceiling: usize,
    in_flight: InFlight,
    error: Option<String>,
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CEILING)
    }
}

impl<T> PageState<T> {
    /// Empty state that stops loading once `ceiling` items are held.
    #[must_use]
    pub fn new(ceiling: usize) -> Self {
        Self {
            items: Vec::new(),
            page_index: 0,
            exhausted: ceiling == 0,
            ceiling,
            in_flight: InFlight::new(),
            error: None,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_busy()
    }

    #[must_use]
    pub fn ceiling(&self) -> usize {
        self.ceiling
    }

    /// Message from the most recent failed fetch, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a trigger would currently issue a request.
    #[must_use]
    pub fn can_load_more(&self) -> bool {
        !self.exhausted && !self.in_flight.is_busy()
    }

    /// Claim the in-flight slot and compute the next page's parameters.
    ///
    /// Returns `None` while a request is outstanding or after exhaustion. An
    /// offset that no longer fits in `usize` exhausts the state.
    pub fn begin_fetch(&mut self, page_size: usize) -> Option<PageRequest> {
        if self.exhausted {
            log::debug!("load more ignored: ceiling of {} reached", self.ceiling);
            return None;
        }
        let Some(offset) = self.page_index.checked_mul(page_size) else {
            log::warn!(
                "page {} with size {page_size} overflows the offset; no more pages",
                self.page_index
            );
            self.exhausted = true;
            return None;
        };
        let Some(ticket) = self.in_flight.try_acquire() else {
            log::debug!("load more ignored: page {} still in flight", self.page_index);
            return None;
        };
        self.error = None;
        Some(PageRequest {
            ticket,
            offset,
            limit: page_size,
        })
    }

    /// Fold the outcome of `request` into the state.
    ///
    /// Returns `false` when the request does not own the in-flight slot, in
    /// which case nothing changes.
    pub fn complete(&mut self, request: PageRequest, result: Result<Vec<T>, FetchError>) -> bool {
        if !self.in_flight.release(request.ticket) {
            log::warn!(
                "discarding page response for unknown request {}",
                request.ticket.id()
            );
            return false;
        }
        match result {
            Ok(batch) => {
                log::info!(
                    "loaded page {} ({} items at offset {})",
                    self.page_index,
                    batch.len(),
                    request.offset
                );
                self.items.extend(batch);
                self.page_index += 1;
                if self.items.len() >= self.ceiling {
                    self.exhausted = true;
                }
            }
            Err(err) => {
                log::warn!("failed to load page {}: {err}", self.page_index);
                self.error = Some(err.to_string());
            }
        }
        true
    }
}

/// Fetch the next page synchronously and return the updated state.
///
/// A state that is exhausted or already loading is returned untouched.
#[must_use]
pub fn load_next_page<T, S>(mut state: PageState<T>, source: &S, page_size: usize) -> PageState<T>
where
    S: PageSource<T> + ?Sized,
{
    if let Some(request) = state.begin_fetch(page_size) {
        let result = source.fetch_page(request.offset, request.limit);
        state.complete(request, result);
    }
    state
}
