use std::sync::Arc;

use crate::application::ports::FileLoader;
use crate::domain::{MediaKind, Metadata, ResolvedBlob};

/// Text produced for a blob and the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutedText {
    pub text: String,
    pub media_kind: MediaKind,
}

impl RoutedText {
    /// Extra metadata flags contributed by the chosen strategy.
    pub fn flags(&self) -> Metadata {
        let mut flags = Metadata::new();
        if let Some(flag) = self.media_kind.metadata_flag() {
            flags.insert(flag, true);
        }
        flags
    }
}

/// Dispatches a blob to exactly one of the text, PDF or binary-placeholder strategies.
pub struct TextRouter {
    text_loader: Arc<dyn FileLoader>,
    pdf_loader: Arc<dyn FileLoader>,
}

impl TextRouter {
    pub fn new(text_loader: Arc<dyn FileLoader>, pdf_loader: Arc<dyn FileLoader>) -> Self {
        Self {
            text_loader,
            pdf_loader,
        }
    }

    /// Never fails: loader errors degrade to empty text.
    pub async fn route_to_text(&self, blob: &ResolvedBlob) -> RoutedText {
        let media_kind = blob.media_kind();
        tracing::debug!(?media_kind, content_type = %blob.content_type, "Routing blob to text strategy");

        let text = match media_kind {
            MediaKind::Text => self.text_loader.extract_text(blob).await.unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Text decoding failed, continuing with empty text");
                String::new()
            }),
            MediaKind::Pdf => self.pdf_loader.extract_text(blob).await.unwrap_or_else(|e| {
                tracing::warn!(error = %e, "PDF extraction failed, continuing with empty text");
                String::new()
            }),
            MediaKind::Binary => binary_placeholder(&blob.content_type, blob.len()),
        };

        RoutedText { text, media_kind }
    }
}

pub fn binary_placeholder(content_type: &str, size_bytes: usize) -> String {
    format!("[{content_type} binary content; {size_bytes} bytes]")
}
