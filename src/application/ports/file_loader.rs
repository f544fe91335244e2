use async_trait::async_trait;

use crate::domain::ResolvedBlob;

#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(&self, blob: &ResolvedBlob) -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
