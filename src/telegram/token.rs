//! Bot token resolution
//!
//! The Telegram bot token lives in AWS Secrets Manager. It is fetched on
//! first use and memoized for the life of the process; rotating the secret
//! takes effect on the next cold start.

use async_trait::async_trait;
use aws_sdk_secretsmanager::Client as SecretsClient;
use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::info;

use crate::errors::BotError;

/// Field inside the JSON secret payload that holds the token.
const TOKEN_FIELD: &str = "TELEGRAM_BOT_TOKEN";

/// Backing store seam for the bot token. Production uses
/// [`SecretsManagerStore`]; tests substitute counting fakes.
#[async_trait]
pub trait SecretStore: Send + Sync {
    async fn fetch_bot_token(&self) -> Result<String, BotError>;
}

/// Secrets Manager backed store.
pub struct SecretsManagerStore {
    client: SecretsClient,
    secret_arn: Option<String>,
}

impl SecretsManagerStore {
    #[must_use]
    pub fn new(client: SecretsClient, secret_arn: Option<String>) -> Self {
        Self { client, secret_arn }
    }
}

#[async_trait]
impl SecretStore for SecretsManagerStore {
    /// # Errors
    ///
    /// Returns `ConfigError` when the ARN is unset, the AWS call fails, or
    /// the secret payload does not carry the token field.
    async fn fetch_bot_token(&self) -> Result<String, BotError> {
        let Some(arn) = self.secret_arn.as_deref() else {
            return Err(BotError::ConfigError(
                "TELEGRAM_SECRET_ARN is not set".to_string(),
            ));
        };

        info!("Fetching bot token from Secrets Manager");

        let response = self
            .client
            .get_secret_value()
            .secret_id(arn)
            .send()
            .await
            .map_err(|e| BotError::ConfigError(format!("get_secret_value: {e}")))?;

        let secret_string = response
            .secret_string()
            .ok_or_else(|| BotError::ConfigError("secret has no string payload".to_string()))?;

        token_from_secret_string(secret_string)
    }
}

/// Extract the token field from the JSON secret payload.
fn token_from_secret_string(secret_string: &str) -> Result<String, BotError> {
    let payload: Value = serde_json::from_str(secret_string)
        .map_err(|e| BotError::ConfigError(format!("secret payload is not JSON: {e}")))?;

    payload
        .get(TOKEN_FIELD)
        .and_then(|v| v.as_str())
        .map(ToString::to_string)
        .ok_or_else(|| BotError::ConfigError(format!("secret payload has no {TOKEN_FIELD}")))
}

/// Memoizing wrapper around a [`SecretStore`].
///
/// The first successful fetch is cached; the cell guarantees at-most-once
/// initialization even under concurrent callers. A failed fetch is not
/// cached and will be retried on the next call.
pub struct TokenProvider {
    store: Box<dyn SecretStore>,
    cached: OnceCell<String>,
}

impl TokenProvider {
    #[must_use]
    pub fn new(store: Box<dyn SecretStore>) -> Self {
        Self {
            store,
            cached: OnceCell::new(),
        }
    }

    /// The bot token, fetching it on first use.
    ///
    /// # Errors
    ///
    /// Propagates the store's `ConfigError` when no token can be produced.
    pub async fn get_token(&self) -> Result<&str, BotError> {
        self.cached
            .get_or_try_init(|| self.store.fetch_bot_token())
            .await
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_from_secret_string_extracts_field() {
        let secret = r#"{"TELEGRAM_BOT_TOKEN": "123456:abcdef", "OTHER": "x"}"#;
        assert_eq!(
            token_from_secret_string(secret).unwrap(),
            "123456:abcdef"
        );
    }

    #[test]
    fn test_token_from_secret_string_rejects_non_json() {
        match token_from_secret_string("not json at all") {
            Err(BotError::ConfigError(msg)) => assert!(msg.contains("not JSON")),
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_token_from_secret_string_rejects_missing_field() {
        match token_from_secret_string(r#"{"WRONG_FIELD": "x"}"#) {
            Err(BotError::ConfigError(msg)) => {
                assert!(msg.contains("TELEGRAM_BOT_TOKEN"));
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }
}
