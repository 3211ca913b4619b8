use crate::ai::{BedrockSummarizer, DEFAULT_MODEL_ID, Summarizer};
use crate::core::config::AppConfig;
use crate::pokeapi::{PokeApiClient, SpeciesLookup};
use crate::telegram::{Messenger, SecretsManagerStore, TelegramClient, TokenProvider};

/// The bot's outbound collaborators, built once per process and shared
/// across warm invocations.
pub struct PokedexBot {
    species: Box<dyn SpeciesLookup>,
    summarizer: Box<dyn Summarizer>,
    messenger: Box<dyn Messenger>,
}

impl PokedexBot {
    /// Construct the production collaborators.
    ///
    /// The shared AWS config is loaded once here and feeds both the Bedrock
    /// and Secrets Manager clients.
    pub async fn new(config: &AppConfig) -> Self {
        let shared = aws_config::from_env().load().await;

        let model_id = config
            .bedrock_model_id
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL_ID.to_string());
        let summarizer =
            BedrockSummarizer::new(aws_sdk_bedrockruntime::Client::new(&shared), model_id);

        let store = SecretsManagerStore::new(
            aws_sdk_secretsmanager::Client::new(&shared),
            config.telegram_secret_arn.clone(),
        );
        let messenger = TelegramClient::new(TokenProvider::new(Box::new(store)));

        Self {
            species: Box::new(PokeApiClient::new()),
            summarizer: Box::new(summarizer),
            messenger: Box::new(messenger),
        }
    }

    /// Assemble a bot from explicit collaborators; tests use this to swap
    /// in fakes at the trait seams.
    #[must_use]
    pub fn from_parts(
        species: Box<dyn SpeciesLookup>,
        summarizer: Box<dyn Summarizer>,
        messenger: Box<dyn Messenger>,
    ) -> Self {
        Self {
            species,
            summarizer,
            messenger,
        }
    }

    /// Get a reference to the species lookup client
    #[must_use]
    pub fn species(&self) -> &dyn SpeciesLookup {
        self.species.as_ref()
    }

    /// Get a reference to the entry generator
    #[must_use]
    pub fn summarizer(&self) -> &dyn Summarizer {
        self.summarizer.as_ref()
    }

    /// Get a reference to the Telegram messenger
    #[must_use]
    pub fn messenger(&self) -> &dyn Messenger {
        self.messenger.as_ref()
    }
}
