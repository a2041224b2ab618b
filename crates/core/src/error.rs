use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single best-effort fetch.
///
/// Widgets only ever show the rendered message; the variants exist so the
/// log records which stage of the request broke.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status code.
    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },

    /// The body was not the JSON shape the widget expects.
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// A non-network source refused the request.
    #[error("{0}")]
    Unavailable(String),
}

/// Errors raised while loading accordion entries from disk.
#[derive(Debug, Error)]
pub enum FaqError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {} as TOML: {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse {} as JSON: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported FAQ file extension for {} (expected .toml or .json)", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("FAQ entry id '{id}' appears more than once")]
    DuplicateId { id: String },
}
