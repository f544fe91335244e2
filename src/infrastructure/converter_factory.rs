use std::sync::Arc;

use crate::application::services::{DocumentConverter, TextRouter};
use crate::presentation::config::HttpSettings;

use super::retrieval::HttpBlobFetcher;
use super::storage::LocalFileReader;
use super::text_processing::{PdfAdapter, PlainTextAdapter};

pub type DefaultConverter = DocumentConverter<LocalFileReader, HttpBlobFetcher>;

#[derive(Debug, thiserror::Error)]
pub enum ConverterFactoryError {
    #[error("http client initialization failed: {0}")]
    HttpClient(String),
}

pub struct ConverterFactory;

impl ConverterFactory {
    pub fn create(settings: &HttpSettings) -> Result<DefaultConverter, ConverterFactoryError> {
        let fetcher = HttpBlobFetcher::new(settings.user_agent.as_deref())
            .map_err(|e| ConverterFactoryError::HttpClient(e.to_string()))?;
        tracing::debug!(user_agent = ?settings.user_agent, "Building document converter");

        let router = TextRouter::new(Arc::new(PlainTextAdapter), Arc::new(PdfAdapter::new()));

        Ok(DocumentConverter::new(
            Arc::new(LocalFileReader),
            Arc::new(fetcher),
            router,
        ))
    }
}
