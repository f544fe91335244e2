use crate::domain::{Attachment, DocumentReference, Metadata, MetadataValue, RESOURCE_TYPE};

/// Everything a metadata rule may read from.
pub struct MetadataSource<'a> {
    pub document: &'a DocumentReference,
    pub attachment: &'a Attachment,
    pub content_type: &'a str,
    pub size_bytes: usize,
}

type Rule = fn(&MetadataSource<'_>) -> MetadataValue;

// A missing link anywhere in a chain yields `MetadataValue::Null`.
const RULES: &[(&str, Rule)] = &[
    ("fhir_resourceType", |_| RESOURCE_TYPE.into()),
    ("fhir_id", |s| s.document.id.as_deref().into()),
    ("fhir_subject", |s| s.document.subject_reference().into()),
    ("fhir_type", |s| s.document.type_text().into()),
    ("fhir_category", |s| s.document.category_codes().into()),
    ("fhir_date", |s| s.document.date_iso().into()),
    ("fhir_author", |s| s.document.author_references().into()),
    ("fhir_custodian", |s| s.document.custodian_reference().into()),
    ("fhir_contentType", |s| s.content_type.into()),
    ("fhir_size", |s| s.size_bytes.into()),
    ("fhir_url", |s| s.attachment.url.as_deref().into()),
    ("fhir_hash", |s| s.attachment.hash.as_deref().into()),
    ("fhir_language", |s| s.attachment.language.as_deref().into()),
    ("fhir_title", |s| s.attachment.title.as_deref().into()),
];

pub fn build_metadata(
    document: &DocumentReference,
    attachment: &Attachment,
    content_type: &str,
    size_bytes: usize,
) -> Metadata {
    let source = MetadataSource {
        document,
        attachment,
        content_type,
        size_bytes,
    };

    let mut metadata = Metadata::new();
    for (key, rule) in RULES {
        metadata.insert(*key, rule(&source));
    }
    metadata
}
