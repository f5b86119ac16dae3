pub mod extract;
pub mod resolver;
pub mod source;
pub mod types;

use async_trait::async_trait;

/// Where raw price fragments come from.
///
/// One call covers a whole page fetch: wait for the page to be ready, then
/// return the text of every price-like node in document order. Implemented
/// over plain HTTP in [`source::HttpPriceSource`]; tests swap in scripted
/// sources behind this seam.
#[async_trait]
pub trait PriceSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<String>, FetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("page fetch failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("readiness marker {marker:?} did not appear within {timeout_secs}s")]
    ReadinessTimeout { marker: String, timeout_secs: u64 },
}
