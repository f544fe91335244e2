use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Deserializer};

/// Decoded FHIR `base64Binary` payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Base64Binary(Vec<u8>);

impl Base64Binary {
    /// Decodes standard base64, ignoring ASCII whitespace (FHIR allows line breaks).
    pub fn decode(encoded: &str) -> Result<Self, base64::DecodeError> {
        let compact: String = encoded
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();

        general_purpose::STANDARD.decode(compact).map(Self)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Base64Binary {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl<'de> Deserialize<'de> for Base64Binary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = String::deserialize(deserializer)?;
        Self::decode(&encoded)
            .map_err(|e| serde::de::Error::custom(format!("invalid base64Binary: {e}")))
    }
}
