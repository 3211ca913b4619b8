//! Telegram Bot API client module
//!
//! Encapsulates outbound notifications to chats. The router treats delivery
//! as best-effort; this client still reports every failure precisely.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::debug;

use super::token::TokenProvider;
use crate::errors::BotError;

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

static HTTP_CLIENT: std::sync::LazyLock<Client> = std::sync::LazyLock::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| Client::new())
});

/// Outbound notification seam. Production uses [`TelegramClient`]; tests
/// substitute recording fakes.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send_photo(&self, chat_id: i64, photo_url: &str) -> Result<(), BotError>;
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), BotError>;
}

/// Telegram Bot API client.
pub struct TelegramClient {
    tokens: TokenProvider,
}

// ─────────────────────────────────────────────────────────────────────────────
// Method payload builders (extracted for testability)
// ─────────────────────────────────────────────────────────────────────────────

/// Build the JSON payload for `sendPhoto`.
#[must_use]
fn build_send_photo_payload(chat_id: i64, photo_url: &str) -> Value {
    json!({ "chat_id": chat_id, "photo": photo_url })
}

/// Build the JSON payload for `sendMessage`.
#[must_use]
fn build_send_message_payload(chat_id: i64, text: &str) -> Value {
    json!({ "chat_id": chat_id, "text": text })
}

impl TelegramClient {
    #[must_use]
    pub fn new(tokens: TokenProvider) -> Self {
        Self { tokens }
    }

    /// POST a payload to one Bot API method.
    ///
    /// The request URL embeds the bot token; neither the URL nor the token
    /// is ever logged.
    ///
    /// # Errors
    ///
    /// Returns `MessagingError` when the request cannot be sent or Telegram
    /// answers with a non-success status, and `ConfigError` when no token
    /// can be resolved.
    pub async fn call_method(&self, method: &str, payload: &Value) -> Result<(), BotError> {
        let token = self.tokens.get_token().await?;
        let url = format!("{TELEGRAM_API_BASE}/bot{token}/{method}");

        let response = HTTP_CLIENT
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| BotError::MessagingError(format!("{method} request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BotError::MessagingError(format!(
                "{method} returned HTTP {status}"
            )));
        }

        // Best-effort: the response body is useful in logs but never
        // required.
        if let Ok(body) = response.json::<Value>().await {
            debug!(%method, "Telegram API response: {}", body);
        }

        Ok(())
    }
}

#[async_trait]
impl Messenger for TelegramClient {
    async fn send_photo(&self, chat_id: i64, photo_url: &str) -> Result<(), BotError> {
        self.call_method("sendPhoto", &build_send_photo_payload(chat_id, photo_url))
            .await
    }

    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), BotError> {
        self.call_method("sendMessage", &build_send_message_payload(chat_id, text))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_send_photo_payload_shape() {
        let payload = build_send_photo_payload(42, "https://example.com/sprite.png");

        assert_eq!(payload["chat_id"], 42);
        assert_eq!(payload["photo"], "https://example.com/sprite.png");
    }

    #[test]
    fn test_build_send_message_payload_shape() {
        let payload = build_send_message_payload(-100_200, "An entry.");

        assert_eq!(payload["chat_id"], -100_200);
        assert_eq!(payload["text"], "An entry.");
    }
}
