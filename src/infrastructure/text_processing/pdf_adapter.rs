use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{MediaKind, ResolvedBlob};

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract(data: &[u8]) -> Result<String, FileLoaderError> {
        pdf_extract::extract_text_from_mem(data)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(skip(self, blob), fields(size_bytes = blob.len()))]
    async fn extract_text(&self, blob: &ResolvedBlob) -> Result<String, FileLoaderError> {
        if blob.media_kind() != MediaKind::Pdf {
            return Err(FileLoaderError::UnsupportedContentType(
                blob.content_type.clone(),
            ));
        }

        let data = blob.data.clone();
        let text = tokio::task::spawn_blocking(move || Self::extract(&data))
            .await
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        if text.trim().is_empty() {
            tracing::info!("PDF contains no extractable text");
            return Ok(String::new());
        }

        tracing::info!(char_count = text.chars().count(), "PDF text extraction complete");
        Ok(text)
    }
}
