//! Seam to the host's binary asset download
//!
//! Download failures are fatal to initialization and are never retried
//! here; the widget simply stays uninitialized and reports the error.

/// Errors surfaced by an asset fetcher implementation
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("asset request failed with status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("asset transport error: {0}")]
    Transport(String),
}

/// Fetch a binary asset by absolute URL.
///
/// Called once per asset during initialization, synchronously inside the
/// widget's event handling. Hosts that cannot block may satisfy it from a
/// cache populated before the widget is started.
pub trait AssetFetcher: Send {
    fn fetch(&mut self, url: &str) -> Result<Vec<u8>, FetchError>;
}
