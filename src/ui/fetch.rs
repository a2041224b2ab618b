//! Background worker that performs the widgets' network fetches.
//!
//! The UI thread never blocks on I/O: it hands a request to the worker over a
//! channel and polls for the result once per frame. Each widget's own
//! in-flight guard keeps it to one outstanding request, so the worker simply
//! serves commands in arrival order.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use anyhow::{Context, Result};
use widgetbox_core::http::{HttpImageSource, HttpProductSource, build_client};
use widgetbox_core::sources::offline::{StaticImages, StaticProducts};
use widgetbox_core::{FetchError, Image, ImageRequest, ImageSource, PageRequest, PageSource, Product};

use super::config::SourceConfig;

/// Commands sent to the fetch worker thread.
#[derive(Debug)]
pub(crate) enum FetchCommand {
    Products(PageRequest),
    Images(ImageRequest),
    Shutdown,
}

/// Results sent back from the fetch worker thread.
#[derive(Debug)]
pub(crate) enum FetchResult {
    Products {
        request: PageRequest,
        result: Result<Vec<Product>, FetchError>,
    },
    Images {
        request: ImageRequest,
        result: Result<Vec<Image>, FetchError>,
    },
}

type ProductSource = Box<dyn PageSource<Product> + Send>;
type ListingSource = Box<dyn ImageSource + Send>;

/// The pair of sources the worker serves requests from.
pub(crate) struct Sources {
    products: ProductSource,
    images: ListingSource,
}

impl Sources {
    pub(crate) fn new(products: ProductSource, images: ListingSource) -> Self {
        Self { products, images }
    }

    pub(crate) fn from_config(config: &SourceConfig) -> Result<Self> {
        match config {
            SourceConfig::Offline => Ok(Self::new(
                Box::new(StaticProducts::default()),
                Box::new(StaticImages),
            )),
            SourceConfig::Http { products_url } => {
                let client = build_client().context("failed to prepare HTTP sources")?;
                Ok(Self::new(
                    Box::new(HttpProductSource::with_client(
                        client.clone(),
                        products_url.clone(),
                    )),
                    Box::new(HttpImageSource::with_client(client)),
                ))
            }
        }
    }
}

/// UI-side handle on the worker channels.
pub(crate) struct FetchRuntime {
    tx: Sender<FetchCommand>,
    rx: Receiver<FetchResult>,
}

impl FetchRuntime {
    /// Spawn the worker thread serving `sources`.
    pub(crate) fn spawn(sources: Sources) -> Result<Self> {
        let (command_tx, command_rx) = mpsc::channel();
        let (result_tx, result_rx) = mpsc::channel();

        thread::Builder::new()
            .name("fetch-worker".into())
            .spawn(move || worker_loop(sources, command_rx, result_tx))
            .context("failed to spawn fetch worker thread")?;

        Ok(Self {
            tx: command_tx,
            rx: result_rx,
        })
    }

    /// Queue a command. Returns `false` if the worker has gone away.
    pub(crate) fn send(&self, command: FetchCommand) -> bool {
        match self.tx.send(command) {
            Ok(()) => true,
            Err(err) => {
                log::error!("fetch worker is gone, dropping {:?}", err.0);
                false
            }
        }
    }

    /// Drain every result that has arrived since the last call.
    pub(crate) fn drain(&self) -> Vec<FetchResult> {
        let mut results = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(result) => results.push(result),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        results
    }

    pub(crate) fn shutdown(&self) {
        let _ = self.tx.send(FetchCommand::Shutdown);
    }

    #[cfg(test)]
    pub(crate) fn recv_timeout(&self, timeout: std::time::Duration) -> Option<FetchResult> {
        self.rx.recv_timeout(timeout).ok()
    }
}

fn worker_loop(sources: Sources, command_rx: Receiver<FetchCommand>, result_tx: Sender<FetchResult>) {
    while let Ok(command) = command_rx.recv() {
        let result = match command {
            FetchCommand::Products(request) => {
                let result = sources.products.fetch_page(request.offset, request.limit);
                FetchResult::Products { request, result }
            }
            FetchCommand::Images(request) => {
                let result = sources
                    .images
                    .fetch_images(&request.url, request.page, request.limit);
                FetchResult::Images { request, result }
            }
            FetchCommand::Shutdown => break,
        };

        // If the receiver is gone, just exit gracefully
        if result_tx.send(result).is_err() {
            break;
        }
    }
    log::debug!("fetch worker stopped");
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use widgetbox_core::{Carousel, PageState};

    use super::*;

    fn offline_runtime() -> FetchRuntime {
        FetchRuntime::spawn(Sources::from_config(&SourceConfig::Offline).unwrap()).unwrap()
    }

    #[test]
    fn serves_product_pages() {
        let runtime = offline_runtime();
        let mut state: PageState<Product> = PageState::default();
        let request = state.begin_fetch(20).unwrap();
        assert!(runtime.send(FetchCommand::Products(request)));

        match runtime.recv_timeout(Duration::from_secs(5)) {
            Some(FetchResult::Products { request, result }) => {
                assert!(state.complete(request, result));
            }
            other => panic!("unexpected worker reply: {other:?}"),
        }
        assert_eq!(state.items().len(), 20);
        runtime.shutdown();
    }

    #[test]
    fn serves_image_listings() {
        let runtime = offline_runtime();
        let mut carousel = Carousel::new("offline://images", 1, 3);
        let request = carousel.begin_fetch().unwrap();
        assert!(runtime.send(FetchCommand::Images(request)));

        match runtime.recv_timeout(Duration::from_secs(5)) {
            Some(FetchResult::Images { request, result }) => {
                assert!(carousel.complete(&request, result));
            }
            other => panic!("unexpected worker reply: {other:?}"),
        }
        assert_eq!(carousel.images().len(), 3);
    }

    #[test]
    fn shutdown_stops_worker() {
        let runtime = offline_runtime();
        runtime.shutdown();
        // Once the worker exits its end of the command channel is dropped.
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while runtime.send(FetchCommand::Shutdown) && std::time::Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(10));
        }
        assert!(!runtime.send(FetchCommand::Shutdown));
    }
}
