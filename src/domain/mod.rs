mod base64_binary;
mod document_reference;
mod media_kind;
mod resolved_blob;
mod text_document;

pub use base64_binary::Base64Binary;
pub use document_reference::{
    Attachment, CodeableConcept, Coding, CompositionStatus, Content, DocumentReference,
    DocumentReferenceStatus, Locator, RESOURCE_TYPE, Reference, SchemaError,
};
pub use media_kind::{DEFAULT_CONTENT_TYPE, MediaKind, PDF_MIME};
pub use resolved_blob::ResolvedBlob;
pub use text_document::{Metadata, MetadataValue, TextDocument};
