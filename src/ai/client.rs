//! Bedrock model client module
//!
//! Encapsulates the `InvokeModel` interaction for generating Pokédex
//! entries. One invocation per lookup; no retries, no streaming.

use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_sdk_bedrockruntime::primitives::Blob;
use serde_json::{Value, json};
use tracing::info;

use crate::core::models::SpeciesRecord;
use crate::errors::BotError;

/// Model invoked when `BEDROCK_MODEL_ID` is not set.
pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-sonnet-20240229-v1:0";

const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";
const MAX_OUTPUT_TOKENS: u32 = 200;

/// Entry generation seam. Production uses [`BedrockSummarizer`]; tests
/// substitute canned implementations.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, record: &SpeciesRecord) -> Result<String, BotError>;
}

/// Bedrock-backed entry generator.
pub struct BedrockSummarizer {
    client: BedrockClient,
    model_id: String,
}

impl BedrockSummarizer {
    #[must_use]
    pub fn new(client: BedrockClient, model_id: String) -> Self {
        Self { client, model_id }
    }
}

/// Build the entry-writing prompt around the record's facts.
///
/// The facts travel as a JSON object so the model sees unambiguous field
/// boundaries regardless of what is in the name or ability strings.
#[must_use]
pub fn build_prompt(record: &SpeciesRecord) -> String {
    let facts = json!({
        "name": record.name,
        "types": record.types,
        "abilities": record.abilities,
    });

    format!(
        "You are a Pokédex expert. Given the following data about a Pokémon: {facts}. \
         Write a friendly and concise summary (3 sentences maximum) as if it were a \
         Pokédex entry."
    )
}

/// Pull the first text segment out of an anthropic-format response payload.
pub fn extract_entry_text(payload: &Value) -> Result<String, BotError> {
    payload
        .get("content")
        .and_then(|c| c.as_array())
        .and_then(|content| content.first())
        .and_then(|part| part.get("text"))
        .and_then(|t| t.as_str())
        .map(ToString::to_string)
        .ok_or_else(|| BotError::ModelError("no text content in model response".to_string()))
}

#[async_trait]
impl Summarizer for BedrockSummarizer {
    /// Generate the Pokédex entry for one species record.
    ///
    /// # Errors
    ///
    /// Returns `ModelError` when the invocation fails or the response
    /// carries no text segment.
    async fn summarize(&self, record: &SpeciesRecord) -> Result<String, BotError> {
        let prompt = build_prompt(record);

        #[cfg(feature = "debug-logs")]
        info!("Using Bedrock prompt:\n{}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(model_id = %self.model_id, "Generating entry for '{}'", record.name);

        let body = json!({
            "anthropic_version": ANTHROPIC_VERSION,
            "max_tokens": MAX_OUTPUT_TOKENS,
            "messages": [{
                "role": "user",
                "content": [{ "type": "text", "text": prompt }],
            }],
        });

        let request_body = serde_json::to_vec(&body)
            .map_err(|e| BotError::ModelError(format!("failed to encode request: {e}")))?;

        let response = self
            .client
            .invoke_model()
            .model_id(&self.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(request_body))
            .send()
            .await
            .map_err(|e| BotError::ModelError(format!("invoke_model: {e}")))?;

        let payload: Value = serde_json::from_slice(response.body().as_ref())
            .map_err(|e| BotError::ModelError(format!("invalid response body: {e}")))?;

        extract_entry_text(&payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> SpeciesRecord {
        SpeciesRecord {
            name: "pikachu".to_string(),
            types: vec!["electric".to_string()],
            abilities: vec!["static".to_string(), "lightning-rod".to_string()],
            image_url: None,
        }
    }

    #[test]
    fn test_build_prompt_embeds_facts_as_json() {
        let prompt = build_prompt(&sample_record());

        assert!(prompt.contains("\"name\":\"pikachu\""));
        assert!(prompt.contains("\"types\":[\"electric\"]"));
        assert!(prompt.contains("lightning-rod"));
    }

    #[test]
    fn test_build_prompt_keeps_instructions() {
        let prompt = build_prompt(&sample_record());

        assert!(prompt.contains("Pokédex expert"));
        assert!(prompt.contains("3 sentences maximum"));
    }

    #[test]
    fn test_extract_entry_text_reads_first_segment() {
        let payload = json!({
            "content": [
                { "type": "text", "text": "Pikachu stores electricity in its cheeks." },
                { "type": "text", "text": "Trailing segment." }
            ]
        });

        let text = extract_entry_text(&payload).unwrap();
        assert_eq!(text, "Pikachu stores electricity in its cheeks.");
    }

    #[test]
    fn test_extract_entry_text_rejects_textless_payloads() {
        let payloads = [
            json!({}),
            json!({ "content": [] }),
            json!({ "content": "not an array" }),
            json!({ "content": [{ "type": "text" }] }),
            json!({ "content": [{ "type": "text", "text": 42 }] }),
        ];

        for payload in &payloads {
            match extract_entry_text(payload) {
                Err(BotError::ModelError(msg)) => assert!(msg.contains("no text content")),
                other => panic!("expected ModelError for {}, got {:?}", payload, other),
            }
        }
    }
}
