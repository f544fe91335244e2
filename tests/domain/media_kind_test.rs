use docref2text::domain::{MediaKind, ResolvedBlob};

#[test]
fn given_text_family_mime_when_classifying_then_returns_text() {
    assert_eq!(MediaKind::from_mime("text/plain"), MediaKind::Text);
    assert_eq!(MediaKind::from_mime("text/html"), MediaKind::Text);
    assert_eq!(
        MediaKind::from_mime("text/plain; charset=utf-8"),
        MediaKind::Text
    );
}

#[test]
fn given_pdf_mime_when_classifying_then_returns_pdf() {
    assert_eq!(MediaKind::from_mime("application/pdf"), MediaKind::Pdf);
}

#[test]
fn given_pdf_mime_with_parameters_when_classifying_then_returns_binary() {
    assert_eq!(
        MediaKind::from_mime("application/pdf; name=report.pdf"),
        MediaKind::Binary
    );
}

#[test]
fn given_uppercase_text_mime_when_classifying_then_prefix_match_is_case_sensitive() {
    assert_eq!(MediaKind::from_mime("Text/plain"), MediaKind::Binary);
}

#[test]
fn given_unknown_mime_when_classifying_then_returns_binary() {
    assert_eq!(MediaKind::from_mime("image/png"), MediaKind::Binary);
    assert_eq!(
        MediaKind::from_mime("application/octet-stream"),
        MediaKind::Binary
    );
    assert_eq!(MediaKind::from_mime(""), MediaKind::Binary);
}

#[test]
fn given_each_kind_when_reading_flag_then_only_pdf_and_binary_have_one() {
    assert_eq!(MediaKind::Text.metadata_flag(), None);
    assert_eq!(MediaKind::Pdf.metadata_flag(), Some("extracted_from_pdf"));
    assert_eq!(MediaKind::Binary.metadata_flag(), Some("binary_only"));
}

#[test]
fn given_blob_when_reading_media_kind_then_uses_its_content_type() {
    let blob = ResolvedBlob::new(vec![1, 2, 3], "application/pdf");

    assert_eq!(blob.media_kind(), MediaKind::Pdf);
    assert_eq!(blob.len(), 3);
}
