use async_trait::async_trait;

/// Bytes returned by a remote retrieval, with the transport-declared content type if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedBlob {
    pub data: Vec<u8>,
    pub content_type: Option<String>,
}

#[async_trait]
pub trait BlobFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedBlob, RetrievalError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("GET {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("GET {url} failed: {reason}")]
    Transport { url: String, reason: String },
    #[error("unsupported locator: {0}")]
    UnsupportedLocator(String),
}
