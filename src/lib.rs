/// Pokédex bot - a Telegram chatbot that answers questions about Pokémon
/// with generated Pokédex entries.
///
/// This crate implements a single-Lambda architecture with two routes:
/// 1. A webhook route that receives Telegram updates, replies through the
///    Bot API, and always acknowledges the delivery
/// 2. A public route that returns the generated entry directly as JSON
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - AWS Secrets Manager for the bot token, fetched once per process
/// - PokeAPI for species data
/// - AWS Bedrock for entry generation
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use pokedex::PokedexBot;
/// use pokedex::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() {
///     // Set up structured logging
///     pokedex::setup_logging();
///
///     // Create a dummy AppConfig for the example
///     let config = AppConfig {
///         telegram_secret_arn: Some(
///             "arn:aws:secretsmanager:us-east-1:123456789012:secret:bot-token".to_string(),
///         ),
///         bedrock_model_id: None,
///     };
///
///     // Initialize the bot and answer one public lookup
///     let bot = PokedexBot::new(&config).await;
///     let payload = serde_json::json!({
///         "requestContext": { "http": { "path": "/pokemon" } },
///         "body": "{\"pokemon_name\": \"pikachu\"}",
///     });
///     let response = pokedex::api::handler::dispatch(&bot, &payload).await;
///     println!("{}", response);
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod bot;
pub mod core;
pub mod errors;
pub mod pokeapi;
pub mod telegram;

pub use bot::PokedexBot;
pub use errors::BotError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at the start of the
/// Lambda process.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// pokedex::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
