//! Runtime services and shared state for the faq-bot.

use tracing::instrument;

use crate::{
    base::{
        config::Config,
        types::{Res, Void},
    },
    service::{chat::ChatClient, faq::FaqStore},
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the FAQ store, chat client, and configuration.
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The FAQ store instance.
    pub faq: FaqStore,
    /// The chat client instance.
    pub chat: ChatClient,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub async fn new(config: Config) -> Res<Self> {
        // Initialize the FAQ store.
        let faq = FaqStore::supabase(&config).await?;

        // Initialize the telegram client.
        let chat = ChatClient::telegram(&config, faq.clone()).await?;

        Ok(Self { config, faq, chat })
    }

    pub async fn start(&self) -> Void {
        self.chat.start().await
    }
}
