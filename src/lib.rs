//! Converts FHIR `DocumentReference` resources into plain text documents.
//!
//! The first attachment of the resource is resolved from inline data, a `file://`
//! locator or an HTTP(S) locator, then routed by content type to UTF-8 decoding,
//! PDF text extraction or a binary placeholder. The result carries a flat metadata
//! map describing the source resource.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
