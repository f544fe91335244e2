use docref2text::application::ports::{FileLoader, FileLoaderError};
use docref2text::domain::ResolvedBlob;
use docref2text::infrastructure::text_processing::PlainTextAdapter;

#[tokio::test]
async fn given_valid_utf8_bytes_when_extracting_then_returns_string() {
    let blob = ResolvedBlob::new(b"Hello, this is plain text.".to_vec(), "text/plain");

    let result = PlainTextAdapter.extract_text(&blob).await;

    assert_eq!(result.unwrap(), "Hello, this is plain text.");
}

#[tokio::test]
async fn given_single_invalid_byte_when_extracting_then_returns_replacement_character() {
    let blob = ResolvedBlob::new(vec![0xFF], "text/plain");

    let text = PlainTextAdapter.extract_text(&blob).await.unwrap();

    assert_eq!(text, "\u{FFFD}");
}

#[tokio::test]
async fn given_mixed_invalid_bytes_when_extracting_then_char_count_does_not_exceed_byte_count() {
    let data = vec![b'a', 0xFF, 0xFE, b'b', 0xC3, 0xA9, 0xE2, 0x82];
    let byte_count = data.len();
    let blob = ResolvedBlob::new(data, "text/markdown");

    let text = PlainTextAdapter.extract_text(&blob).await.unwrap();

    assert!(text.starts_with('a'));
    assert!(text.contains("b\u{e9}"));
    assert!(text.chars().count() <= byte_count);
}

#[tokio::test]
async fn given_non_text_content_type_when_extracting_then_returns_unsupported() {
    let blob = ResolvedBlob::new(b"some data".to_vec(), "application/pdf");

    let result = PlainTextAdapter.extract_text(&blob).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(ct)) if ct == "application/pdf"
    ));
}
