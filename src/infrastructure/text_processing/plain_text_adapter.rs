use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{MediaKind, ResolvedBlob};

/// UTF-8 decoding that replaces invalid sequences with U+FFFD instead of failing.
pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(&self, blob: &ResolvedBlob) -> Result<String, FileLoaderError> {
        if blob.media_kind() != MediaKind::Text {
            return Err(FileLoaderError::UnsupportedContentType(
                blob.content_type.clone(),
            ));
        }

        Ok(String::from_utf8_lossy(&blob.data).into_owned())
    }
}
