use std::env;

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub telegram_secret_arn: Option<String>,
    pub bedrock_model_id: Option<String>,
}

impl AppConfig {
    /// Snapshot the environment. Nothing is required at startup; the secret
    /// ARN is checked when the token is first needed so the webhook route
    /// can still acknowledge updates on a misconfigured deployment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            telegram_secret_arn: env::var("TELEGRAM_SECRET_ARN").ok(),
            bedrock_model_id: env::var("BEDROCK_MODEL_ID").ok(),
        }
    }
}
