use std::sync::Arc;

use docref2text::application::ports::{FileLoader, FileLoaderError};
use docref2text::application::services::TextRouter;
use docref2text::domain::{MediaKind, ResolvedBlob};
use docref2text::infrastructure::text_processing::{PdfAdapter, PlainTextAdapter};

struct FailingPdfLoader;

#[async_trait::async_trait]
impl FileLoader for FailingPdfLoader {
    async fn extract_text(&self, _blob: &ResolvedBlob) -> Result<String, FileLoaderError> {
        Err(FileLoaderError::ExtractionFailed("encrypted".to_string()))
    }
}

struct FixedPdfLoader;

#[async_trait::async_trait]
impl FileLoader for FixedPdfLoader {
    async fn extract_text(&self, _blob: &ResolvedBlob) -> Result<String, FileLoaderError> {
        Ok("Extracted page text".to_string())
    }
}

fn router_with_pdf(pdf_loader: Arc<dyn FileLoader>) -> TextRouter {
    TextRouter::new(Arc::new(PlainTextAdapter), pdf_loader)
}

fn default_router() -> TextRouter {
    router_with_pdf(Arc::new(PdfAdapter::new()))
}

#[tokio::test]
async fn given_text_plain_blob_when_routing_then_decodes_without_flags() {
    let blob = ResolvedBlob::new(b"Hello".to_vec(), "text/plain");

    let routed = default_router().route_to_text(&blob).await;

    assert_eq!(routed.text, "Hello");
    assert_eq!(routed.media_kind, MediaKind::Text);
    assert!(routed.flags().is_empty());
}

#[tokio::test]
async fn given_invalid_utf8_text_blob_when_routing_then_replaces_instead_of_failing() {
    let blob = ResolvedBlob::new(vec![0xFF], "text/plain");

    let routed = default_router().route_to_text(&blob).await;

    assert_eq!(routed.text, "\u{FFFD}");
}

#[tokio::test]
async fn given_pdf_blob_when_routing_then_uses_pdf_loader_and_sets_flag() {
    let blob = ResolvedBlob::new(b"%PDF-1.4".to_vec(), "application/pdf");

    let routed = router_with_pdf(Arc::new(FixedPdfLoader))
        .route_to_text(&blob)
        .await;

    assert_eq!(routed.text, "Extracted page text");
    assert_eq!(
        routed
            .flags()
            .get("extracted_from_pdf")
            .and_then(|v| v.as_bool()),
        Some(true)
    );
}

#[tokio::test]
async fn given_pdf_without_extractable_text_when_routing_then_returns_empty_text_with_flag() {
    let blob = ResolvedBlob::new(b"garbage that is not a pdf".to_vec(), "application/pdf");

    let routed = default_router().route_to_text(&blob).await;

    assert_eq!(routed.text, "");
    assert_eq!(routed.media_kind, MediaKind::Pdf);
    assert!(routed.flags().contains_key("extracted_from_pdf"));
}

#[tokio::test]
async fn given_failing_pdf_loader_when_routing_then_softens_to_empty_text() {
    let blob = ResolvedBlob::new(b"%PDF-1.7".to_vec(), "application/pdf");

    let routed = router_with_pdf(Arc::new(FailingPdfLoader))
        .route_to_text(&blob)
        .await;

    assert_eq!(routed.text, "");
    assert_eq!(routed.media_kind, MediaKind::Pdf);
}

#[tokio::test]
async fn given_png_blob_when_routing_then_returns_placeholder_with_binary_flag() {
    let blob = ResolvedBlob::new(vec![0x89, b'P', b'N', b'G', 0, 0, 0], "image/png");

    let routed = default_router().route_to_text(&blob).await;

    assert_eq!(routed.text, "[image/png binary content; 7 bytes]");
    let flags = routed.flags();
    assert_eq!(flags.get("binary_only").and_then(|v| v.as_bool()), Some(true));
    assert!(!flags.contains_key("extracted_from_pdf"));
}

#[tokio::test]
async fn given_empty_octet_stream_when_routing_then_placeholder_reports_zero_bytes() {
    let blob = ResolvedBlob::new(Vec::new(), "application/octet-stream");

    let routed = default_router().route_to_text(&blob).await;

    assert_eq!(
        routed.text,
        "[application/octet-stream binary content; 0 bytes]"
    );
}

#[tokio::test]
async fn given_pdf_page_without_text_when_routing_then_returns_empty_text() {
    let data = include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/empty.pdf"));
    let blob = ResolvedBlob::new(data.to_vec(), "application/pdf");

    let routed = default_router().route_to_text(&blob).await;

    assert!(routed.text.is_empty());
    assert!(routed.flags().contains_key("extracted_from_pdf"));
}
