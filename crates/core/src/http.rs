//! Blocking HTTP sources backed by `reqwest`.
//!
//! Both sources are called from the fetch worker thread, never from the UI
//! thread, so the blocking client is sufficient.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::carousel::Image;
use crate::error::FetchError;
use crate::pagination::Product;
use crate::sources::{ImageSource, PageSource};

/// Default catalogue endpoint for the load-more list.
pub const DEFAULT_PRODUCTS_URL: &str = "https://dummyjson.com/products";
/// Default listing endpoint for the carousel.
pub const DEFAULT_IMAGES_URL: &str = "https://picsum.photos/v2/list";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the client shared by the HTTP sources.
pub fn build_client() -> Result<Client, FetchError> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("widgetbox/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|source| FetchError::Client { source })
}

fn get_json<T, Q>(client: &Client, url: &str, query: &Q) -> Result<T, FetchError>
where
    T: DeserializeOwned,
    Q: serde::Serialize + ?Sized,
{
    log::debug!("GET {url}");
    let response = client
        .get(url)
        .query(query)
        .send()
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    let body = response.text().map_err(|source| FetchError::Transport {
        url: url.to_string(),
        source,
    })?;
    serde_json::from_str(&body).map_err(|source| FetchError::Decode {
        url: url.to_string(),
        source,
    })
}

#[derive(Debug, Deserialize)]
struct ProductPage {
    #[serde(default)]
    products: Vec<Product>,
}

/// Catalogue endpoint answering `?limit=<n>&skip=<offset>`.
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    client: Client,
    url: String,
}

impl HttpProductSource {
    pub fn new(url: impl Into<String>) -> Result<Self, FetchError> {
        Ok(Self::with_client(build_client()?, url))
    }

    #[must_use]
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

impl PageSource<Product> for HttpProductSource {
    fn fetch_page(&self, offset: usize, limit: usize) -> Result<Vec<Product>, FetchError> {
        let page: ProductPage =
            get_json(&self.client, &self.url, &[("limit", limit), ("skip", offset)])?;
        Ok(page.products)
    }
}

/// Listing endpoint answering `?page=<p>&limit=<n>` with a JSON array.
#[derive(Debug, Clone)]
pub struct HttpImageSource {
    client: Client,
}

impl HttpImageSource {
    pub fn new() -> Result<Self, FetchError> {
        Ok(Self::with_client(build_client()?))
    }

    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl ImageSource for HttpImageSource {
    fn fetch_images(&self, url: &str, page: u32, limit: u32) -> Result<Vec<Image>, FetchError> {
        get_json(&self.client, url, &[("page", page), ("limit", limit)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_page_tolerates_extra_fields() {
        let json = r#"{
            "products": [
                {"id": 1, "title": "Essence Mascara", "thumbnail": "https://cdn/1.png", "price": 9.99}
            ],
            "total": 194, "skip": 0, "limit": 1
        }"#;
        let page: ProductPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.products.len(), 1);
        assert_eq!(page.products[0].title, "Essence Mascara");
    }

    #[test]
    fn missing_products_key_is_an_empty_page() {
        let page: ProductPage = serde_json::from_str("{}").unwrap();
        assert!(page.products.is_empty());
    }

    #[test]
    fn unreachable_host_is_a_transport_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let source = HttpProductSource::new(format!("http://127.0.0.1:{port}/products")).unwrap();
        let err = source.fetch_page(0, 20).unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }), "{err}");
    }
}
