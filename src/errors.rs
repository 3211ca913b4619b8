use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("Missing required configuration: {0}")]
    ConfigError(String),

    #[error("No Pokémon named '{0}' was found")]
    NotFound(String),

    #[error("Failed to query PokeAPI: {0}")]
    UpstreamError(String),

    #[error("Failed to generate a Pokédex entry: {0}")]
    ModelError(String),

    #[error("Failed to deliver a Telegram notification: {0}")]
    MessagingError(String),
}
