use super::media_kind::MediaKind;

/// Attachment bytes together with the content type that governs text extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBlob {
    pub data: Vec<u8>,
    pub content_type: String,
}

impl ResolvedBlob {
    pub fn new(data: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            data,
            content_type: content_type.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn media_kind(&self) -> MediaKind {
        MediaKind::from_mime(&self.content_type)
    }
}
