// Lambda bootstrap entry point for the Pokédex bot

use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;

use pokedex::PokedexBot;
use pokedex::api::handler::function_handler;
use pokedex::core::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Error> {
    pokedex::setup_logging();

    // Collaborators are built once; warm invocations share them, and with
    // them the memoized bot token.
    let config = AppConfig::from_env();
    let bot = Arc::new(PokedexBot::new(&config).await);

    run(service_fn(move |event: LambdaEvent<Value>| {
        let bot = Arc::clone(&bot);
        async move { function_handler(&bot, event).await }
    }))
    .await
}
