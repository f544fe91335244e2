use std::path::PathBuf;

use anyhow::Context;

use docref2text::infrastructure::ConverterFactory;
use docref2text::infrastructure::observability::{TracingConfig, init_tracing};
use docref2text::presentation::Settings;

const DEFAULT_RESOURCE_PATH: &str = "example/document_reference.json";
const PREVIEW_CHARS: usize = 200;
const PREVIEW_KEYS: [&str; 6] = [
    "fhir_id",
    "fhir_subject",
    "fhir_type",
    "fhir_date",
    "fhir_contentType",
    "fhir_size",
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;
    init_tracing(TracingConfig::from(&settings));

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_RESOURCE_PATH));

    let raw = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let resource: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    tracing::info!(
        path = %path.display(),
        resource_type = ?resource.get("resourceType").and_then(|v| v.as_str()),
        id = ?resource.get("id").and_then(|v| v.as_str()),
        date = ?resource.get("date").and_then(|v| v.as_str()),
        content_type = ?resource
            .pointer("/content/0/attachment/contentType")
            .and_then(|v| v.as_str()),
        "Loaded DocumentReference"
    );

    let converter = ConverterFactory::create(&settings.http)?;
    let document = converter
        .convert(&resource)
        .await
        .with_context(|| format!("failed to convert {}", path.display()))?;

    let char_count = document.text.chars().count();
    println!("Text length: {char_count} characters");
    println!(
        "Metadata keys: {}",
        document.metadata.keys().collect::<Vec<_>>().join(", ")
    );
    println!("{}", "-".repeat(50));
    if char_count > PREVIEW_CHARS {
        let preview: String = document.text.chars().take(PREVIEW_CHARS).collect();
        println!("{preview}...");
    } else {
        println!("{}", document.text);
    }
    println!("{}", "-".repeat(50));

    for key in PREVIEW_KEYS {
        if let Some(value) = document.metadata.get(key) {
            println!("  {key}: {}", serde_json::to_string(value)?);
        }
    }

    Ok(())
}
