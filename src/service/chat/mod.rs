pub mod telegram;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::Void;

// Traits.

/// Generic "chat" trait that clients must implement.
///
/// This trait defines the core functionality for interacting with chat
/// platforms like Telegram. Implementing this trait allows different chat
/// services to be used with the faq-bot.
#[async_trait]
pub trait GenericChatClient: Send + Sync + 'static {
    /// Get the bot username.
    ///
    /// Returns the bot's own username on the chat platform, which is used to
    /// recognize commands addressed to it in group chats.
    fn bot_username(&self) -> &str;

    /// Start the chat client listener.
    ///
    /// This begins polling the chat platform for updates and routing incoming
    /// messages to the interaction handlers. It only returns on shutdown.
    async fn start(&self) -> Void;

    /// Send a text message to a chat.
    ///
    /// Used to post the greeting, answers, and fallback replies back into the
    /// chat a message arrived from.
    async fn send_message(&self, chat_id: i64, text: &str) -> Void;
}

// Structs.

/// Chat client for the application.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct ChatClient {
    inner: Arc<dyn GenericChatClient>,
}

impl Deref for ChatClient {
    type Target = dyn GenericChatClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl ChatClient {
    pub fn new(inner: Arc<dyn GenericChatClient>) -> Self {
        Self { inner }
    }
}
