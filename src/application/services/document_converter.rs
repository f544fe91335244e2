use std::io;
use std::sync::Arc;

use crate::application::ports::{BlobFetcher, FileReader, RetrievalError};
use crate::domain::{
    Attachment, DocumentReference, Locator, ResolvedBlob, SchemaError, TextDocument,
};

use super::metadata_builder::build_metadata;
use super::text_router::{RoutedText, TextRouter};

/// Converts `DocumentReference` resources into [`TextDocument`]s.
///
/// Only the first content entry is read; later entries (alternate renditions and the
/// like) are ignored. Remote retrieval is unauthenticated unless the injected
/// [`BlobFetcher`] adds credentials itself.
pub struct DocumentConverter<R, B>
where
    R: FileReader,
    B: BlobFetcher,
{
    file_reader: Arc<R>,
    blob_fetcher: Arc<B>,
    router: TextRouter,
}

impl<R, B> DocumentConverter<R, B>
where
    R: FileReader,
    B: BlobFetcher,
{
    pub fn new(file_reader: Arc<R>, blob_fetcher: Arc<B>, router: TextRouter) -> Self {
        Self {
            file_reader,
            blob_fetcher,
            router,
        }
    }

    #[tracing::instrument(skip_all, fields(document_id = tracing::field::Empty))]
    pub async fn convert(
        &self,
        resource: &serde_json::Value,
    ) -> Result<TextDocument, ConversionError> {
        let document = DocumentReference::from_json(resource)?;
        if let Some(id) = document.id.as_deref() {
            tracing::Span::current().record("document_id", id);
        }

        let attachment = select_attachment(&document)?;
        let blob = self.resolve_bytes(attachment).await?;

        let mut metadata = build_metadata(&document, attachment, &blob.content_type, blob.len());
        let routed = self.route_to_text(&blob).await;
        metadata.extend(routed.flags());

        tracing::info!(
            content_type = %blob.content_type,
            size_bytes = blob.len(),
            media_kind = ?routed.media_kind,
            "DocumentReference converted"
        );

        Ok(TextDocument::new(routed.text, metadata))
    }

    pub async fn convert_str(&self, raw: &str) -> Result<TextDocument, ConversionError> {
        let resource: serde_json::Value =
            serde_json::from_str(raw).map_err(SchemaError::Malformed)?;
        self.convert(&resource).await
    }

    /// Inline data, then `file://` locators, then remote locators; first match wins.
    pub async fn resolve_bytes(
        &self,
        attachment: &Attachment,
    ) -> Result<ResolvedBlob, ConversionError> {
        let declared = attachment.declared_content_type();

        if let Some(data) = &attachment.data {
            tracing::debug!(size_bytes = data.len(), "Using inline attachment data");
            return Ok(ResolvedBlob::new(data.as_bytes().to_vec(), declared));
        }

        match attachment.locator() {
            Some(Locator::LocalFile(path)) => {
                tracing::debug!(path = %path.display(), "Reading attachment from local file");
                let data = self.file_reader.read(path).await?;
                Ok(ResolvedBlob::new(data, declared))
            }
            Some(Locator::Remote(url)) => {
                tracing::debug!(url, "Fetching attachment from remote locator");
                let fetched = self.blob_fetcher.fetch(url).await?;
                let content_type = fetched
                    .content_type
                    .filter(|ct| !ct.is_empty())
                    .unwrap_or_else(|| declared.to_string());
                Ok(ResolvedBlob::new(fetched.data, content_type))
            }
            None => Err(ConversionError::UnresolvableAttachment),
        }
    }

    pub async fn route_to_text(&self, blob: &ResolvedBlob) -> RoutedText {
        self.router.route_to_text(blob).await
    }
}

/// Attachment of the first content entry.
pub fn select_attachment(document: &DocumentReference) -> Result<&Attachment, ConversionError> {
    let content = document
        .content
        .first()
        .ok_or(ConversionError::MissingAttachment("content is empty"))?;

    content
        .attachment
        .as_ref()
        .ok_or(ConversionError::MissingAttachment(
            "first content entry has no attachment",
        ))
}

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("schema validation: {0}")]
    SchemaValidation(#[from] SchemaError),
    #[error("missing attachment: {0}")]
    MissingAttachment(&'static str),
    #[error("attachment has neither data nor url")]
    UnresolvableAttachment,
    #[error("retrieval: {0}")]
    Retrieval(#[from] RetrievalError),
    #[error(transparent)]
    Io(#[from] io::Error),
}
