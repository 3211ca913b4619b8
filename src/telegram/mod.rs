//! All Telegram-specific functionality

pub mod client;
pub mod token;

// Re-export main types for convenience
pub use client::{Messenger, TelegramClient};
pub use token::{SecretStore, SecretsManagerStore, TokenProvider};
