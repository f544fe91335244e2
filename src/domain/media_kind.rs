pub const PDF_MIME: &str = "application/pdf";
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

const TEXT_PREFIX: &str = "text/";

/// Closed classification of a content type into one of the three text strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Text,
    Pdf,
    Binary,
}

impl MediaKind {
    /// Case-sensitive: `Text/plain` is binary, `application/pdf; x=y` is binary.
    pub fn from_mime(mime: &str) -> Self {
        match mime {
            PDF_MIME => Self::Pdf,
            m if m.starts_with(TEXT_PREFIX) => Self::Text,
            _ => Self::Binary,
        }
    }

    /// Metadata flag recording which strategy produced the text, if any.
    pub fn metadata_flag(&self) -> Option<&'static str> {
        match self {
            Self::Text => None,
            Self::Pdf => Some("extracted_from_pdf"),
            Self::Binary => Some("binary_only"),
        }
    }
}
