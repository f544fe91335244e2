mod document_converter;
mod metadata_builder;
mod text_router;

pub use document_converter::{ConversionError, DocumentConverter, select_attachment};
pub use metadata_builder::{MetadataSource, build_metadata};
pub use text_router::{RoutedText, TextRouter, binary_placeholder};
