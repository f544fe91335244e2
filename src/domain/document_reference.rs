use std::path::Path;

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use super::base64_binary::Base64Binary;
use super::media_kind::DEFAULT_CONTENT_TYPE;

pub const RESOURCE_TYPE: &str = "DocumentReference";

const FILE_SCHEME: &str = "file://";

/// The subset of a FHIR `DocumentReference` this crate reads. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReference {
    pub resource_type: String,
    pub id: Option<String>,
    pub status: Option<DocumentReferenceStatus>,
    pub doc_status: Option<CompositionStatus>,
    #[serde(rename = "type")]
    pub kind: Option<CodeableConcept>,
    #[serde(default)]
    pub category: Vec<CodeableConcept>,
    pub subject: Option<Reference>,
    pub date: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub author: Vec<Reference>,
    pub custodian: Option<Reference>,
    pub description: Option<String>,
    #[serde(default)]
    pub content: Vec<Content>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentReferenceStatus {
    Current,
    Superseded,
    EnteredInError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompositionStatus {
    Registered,
    Partial,
    Preliminary,
    Final,
    Amended,
    Corrected,
    Appended,
    Cancelled,
    EnteredInError,
    Deprecated,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Content {
    pub attachment: Option<Attachment>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub content_type: Option<String>,
    pub language: Option<String>,
    pub data: Option<Base64Binary>,
    pub url: Option<String>,
    pub size: Option<u64>,
    pub hash: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CodeableConcept {
    #[serde(default)]
    pub coding: Vec<Coding>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Coding {
    pub system: Option<String>,
    pub code: Option<String>,
    pub display: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Reference {
    pub reference: Option<String>,
    pub display: Option<String>,
}

/// Where the bytes of a non-inline attachment live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator<'a> {
    LocalFile(&'a Path),
    Remote(&'a str),
}

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("malformed DocumentReference: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("expected resourceType \"DocumentReference\", found \"{0}\"")]
    ResourceType(String),
}

impl DocumentReference {
    pub fn from_json(value: &serde_json::Value) -> Result<Self, SchemaError> {
        let document = Self::deserialize(value)?;
        if document.resource_type != RESOURCE_TYPE {
            return Err(SchemaError::ResourceType(document.resource_type));
        }
        Ok(document)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, SchemaError> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        Self::from_json(&value)
    }

    pub fn subject_reference(&self) -> Option<&str> {
        self.subject.as_ref()?.reference.as_deref()
    }

    pub fn custodian_reference(&self) -> Option<&str> {
        self.custodian.as_ref()?.reference.as_deref()
    }

    pub fn type_text(&self) -> Option<&str> {
        self.kind.as_ref()?.text.as_deref()
    }

    /// First coding code of each category, positionally aligned with `category`.
    pub fn category_codes(&self) -> Vec<Option<&str>> {
        self.category
            .iter()
            .map(|concept| concept.coding.first()?.code.as_deref())
            .collect()
    }

    /// Author references, skipping authors without one.
    pub fn author_references(&self) -> Vec<&str> {
        self.author
            .iter()
            .filter_map(|author| author.reference.as_deref())
            .filter(|reference| !reference.is_empty())
            .collect()
    }

    /// ISO-8601 rendering of `date` with an explicit offset.
    pub fn date_iso(&self) -> Option<String> {
        self.date.map(|date| date.to_rfc3339())
    }
}

impl Attachment {
    /// Declared `contentType`, or `application/octet-stream` when absent or blank.
    pub fn declared_content_type(&self) -> &str {
        self.content_type
            .as_deref()
            .filter(|ct| !ct.is_empty())
            .unwrap_or(DEFAULT_CONTENT_TYPE)
    }

    pub fn locator(&self) -> Option<Locator<'_>> {
        let url = self.url.as_deref().filter(|url| !url.is_empty())?;
        Some(match url.strip_prefix(FILE_SCHEME) {
            Some(path) => Locator::LocalFile(Path::new(path)),
            None => Locator::Remote(url),
        })
    }
}
