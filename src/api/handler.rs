//! Lambda handler - thin router over the two public routes.
//!
//! This module handles:
//! - Path classification (webhook vs public lookup vs unknown)
//! - The chat route: look up, generate, notify, always acknowledge
//! - The public route: look up, generate, return the entry as JSON

use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Value, json};
use tracing::{error, info};

use super::event::{ChatCommand, ChatUpdate, PublicRequest, RequestEvent, request_path};
use super::helpers;
use crate::bot::PokedexBot;
use crate::core::models::SpeciesRecord;
use crate::errors::BotError;

pub use self::function_handler as handler;

/// Lambda handler for the single entry point.
///
/// # Errors
///
/// Never fails in practice: every outcome, including an internal error, is
/// normalized into a status/body response envelope.
#[tracing::instrument(level = "info", skip(bot, event))]
pub async fn function_handler(
    bot: &PokedexBot,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    info!(
        request_id = %event.context.request_id,
        path = request_path(&event.payload).unwrap_or("<none>"),
        "Received request"
    );

    Ok(dispatch(bot, &event.payload).await)
}

/// Route one raw payload to its handler.
pub async fn dispatch(bot: &PokedexBot, payload: &Value) -> Value {
    match RequestEvent::from_payload(payload) {
        RequestEvent::Chat(update) => handle_chat(bot, &update).await,
        RequestEvent::Public(request) => handle_public(bot, &request).await,
        RequestEvent::Unknown => helpers::route_not_found(),
    }
}

// ============================================================================
// Chat route
// ============================================================================

async fn handle_chat(bot: &PokedexBot, update: &ChatUpdate) -> Value {
    let Some(command) = update.command() else {
        // Non-text updates (joins, stickers, edits) are acknowledged and
        // otherwise ignored.
        return helpers::ack();
    };

    match fetch_entry(bot, &command.text).await {
        Ok((record, entry)) => deliver_entry(bot, &command, &record, &entry).await,
        Err(e) => {
            error!("Chat lookup for '{}' failed: {}", command.text, e);
            notify(bot, command.chat_id, &failure_text(&e, &command.text)).await;
        }
    }

    // Telegram must see a 200 no matter what happened above, or it keeps
    // re-delivering the update.
    helpers::ack()
}

/// Send the sprite (when there is one) and then the entry text, in that
/// order. Delivery failures are logged and swallowed.
async fn deliver_entry(
    bot: &PokedexBot,
    command: &ChatCommand,
    record: &SpeciesRecord,
    entry: &str,
) {
    if let Some(photo_url) = record.image_url.as_deref() {
        if let Err(e) = bot.messenger().send_photo(command.chat_id, photo_url).await {
            error!("Failed to send photo: {}", e);
        }
    }

    notify(bot, command.chat_id, entry).await;
}

/// Fire-and-forget text notification.
async fn notify(bot: &PokedexBot, chat_id: i64, text: &str) {
    if let Err(e) = bot.messenger().send_message(chat_id, text).await {
        error!("Failed to send message: {}", e);
    }
}

/// Text the chat user sees in place of an entry, chosen by error kind.
fn failure_text(error: &BotError, query: &str) -> String {
    match error {
        BotError::NotFound(_) => {
            format!("Sorry! I couldn't find '{query}' in the Pokédex.")
        }
        BotError::UpstreamError(_) => {
            "There was a problem with the PokeAPI. Please try again later.".to_string()
        }
        BotError::ModelError(_) => {
            "I found that Pokémon but couldn't write its entry. Please try again.".to_string()
        }
        BotError::ConfigError(_) | BotError::MessagingError(_) => {
            "Oops! Something went wrong. Please try again.".to_string()
        }
    }
}

// ============================================================================
// Public route
// ============================================================================

async fn handle_public(bot: &PokedexBot, request: &PublicRequest) -> Value {
    let Some(name) = request.pokemon_name() else {
        return helpers::err_response(400, "pokemon_name is required");
    };

    // Every failure surfaces as a 500 carrying the error text; only the
    // chat route discriminates kinds.
    match fetch_entry(bot, name).await {
        Ok((_, entry)) => helpers::ok_json(&json!({ "pokedex_entry": entry })),
        Err(e) => {
            error!("Public lookup for '{}' failed: {}", name, e);
            helpers::err_response(500, &e.to_string())
        }
    }
}

/// Look the species up and generate its Pokédex entry.
async fn fetch_entry(bot: &PokedexBot, name: &str) -> Result<(SpeciesRecord, String), BotError> {
    let record = bot.species().lookup(name).await?;
    let entry = bot.summarizer().summarize(&record).await?;
    Ok((record, entry))
}
