//! Typed views over the raw Lambda event.
//!
//! The inbound envelope is classified here, once, into a closed set of
//! request shapes; route handlers never navigate untyped JSON themselves.

use serde::Deserialize;
use serde_json::Value;

/// Path served by the Telegram webhook route.
pub const TELEGRAM_ROUTE: &str = "/telegram";
/// Path served by the public lookup route.
pub const PUBLIC_ROUTE: &str = "/pokemon";

/// One inbound request, classified by path.
#[derive(Debug)]
pub enum RequestEvent {
    /// Telegram webhook update posted to [`TELEGRAM_ROUTE`].
    Chat(ChatUpdate),
    /// Direct lookup request posted to [`PUBLIC_ROUTE`].
    Public(PublicRequest),
    /// Any other path.
    Unknown,
}

impl RequestEvent {
    /// Classify a raw Lambda payload by its request path.
    ///
    /// A missing body counts as `{}`, and a body that fails to parse counts
    /// as an empty request, so route handlers apply their missing-field
    /// behavior instead of bouncing the request.
    #[must_use]
    pub fn from_payload(payload: &Value) -> Self {
        match request_path(payload) {
            Some(TELEGRAM_ROUTE) => Self::Chat(parse_body(payload)),
            Some(PUBLIC_ROUTE) => Self::Public(parse_body(payload)),
            _ => Self::Unknown,
        }
    }
}

/// Request path from the HTTP API envelope, falling back to the top-level
/// `rawPath` that Function URL invocations also populate.
#[must_use]
pub fn request_path(payload: &Value) -> Option<&str> {
    v_str(payload, &["requestContext", "http", "path"])
        .or_else(|| payload.get("rawPath").and_then(Value::as_str))
}

fn parse_body<T>(payload: &Value) -> T
where
    T: Default + for<'de> Deserialize<'de>,
{
    let body = payload.get("body").and_then(Value::as_str).unwrap_or("{}");
    serde_json::from_str(body).unwrap_or_default()
}

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// Telegram update body for the chat route.
///
/// Only the fields the bot acts on are modeled; everything else in the
/// update is ignored. Every level is optional because Telegram pushes many
/// update shapes (edits, stickers, joins) through the same webhook.
#[derive(Debug, Default, Deserialize)]
pub struct ChatUpdate {
    #[serde(default)]
    message: Option<IncomingMessage>,
}

#[derive(Debug, Default, Deserialize)]
struct IncomingMessage {
    #[serde(default)]
    chat: Option<ChatRef>,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatRef {
    id: i64,
}

/// A chat message the bot acts on: where to answer and what was asked.
#[derive(Debug, Clone)]
pub struct ChatCommand {
    pub chat_id: i64,
    pub text: String,
}

impl ChatUpdate {
    /// The actionable command, when the update carries both a chat id and
    /// non-empty message text. Anything else yields `None` and is
    /// acknowledged without side effects.
    #[must_use]
    pub fn command(&self) -> Option<ChatCommand> {
        let message = self.message.as_ref()?;
        let chat_id = message.chat.as_ref()?.id;
        let text = message.text.clone()?;
        if text.is_empty() {
            return None;
        }
        Some(ChatCommand { chat_id, text })
    }
}

/// Lookup request body for the public route.
#[derive(Debug, Default, Deserialize)]
pub struct PublicRequest {
    #[serde(default)]
    pokemon_name: Option<String>,
}

impl PublicRequest {
    /// The requested name, when present and non-empty.
    #[must_use]
    pub fn pokemon_name(&self) -> Option<&str> {
        self.pokemon_name.as_deref().filter(|name| !name.is_empty())
    }
}
