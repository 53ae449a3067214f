//! Chat service integration for faq-bot.
//!
//! This module provides functionality for interacting with chat platforms like Telegram:
//! - Long-polling for incoming updates
//! - Routing messages to the interaction handlers
//! - Sending replies back into the originating chat
//!
//! It implements the `GenericChatClient` trait for Telegram on top of the
//! teloxide dispatcher.

use crate::{
    base::{
        config::Config,
        types::{InboundMessage, Res, Void},
    },
    interaction,
    service::faq::FaqStore,
};
use async_trait::async_trait;
use teloxide::prelude::*;
use tracing::{debug, error, info, instrument};

use std::sync::Arc;

use super::{ChatClient, GenericChatClient};

// Extra methods on `ChatClient` applied by the telegram implementation.

impl ChatClient {
    /// Creates a new Telegram chat client.
    pub async fn telegram(config: &Config, faq: FaqStore) -> Res<Self> {
        let client = TelegramChatClient::new(config, faq).await?;
        Ok(Self { inner: Arc::new(client) })
    }
}

impl From<TelegramChatClient> for ChatClient {
    fn from(client: TelegramChatClient) -> Self {
        Self { inner: Arc::new(client) }
    }
}

// Structs.

/// Telegram client implementation.
#[derive(Clone)]
struct TelegramChatClient {
    pub bot: Bot,
    pub bot_username: String,
    pub faq: FaqStore,
}

impl TelegramChatClient {
    /// Create a new Telegram chat client.
    #[instrument(name = "TelegramChatClient::new", skip_all)]
    pub async fn new(config: &Config, faq: FaqStore) -> Res<Self> {
        // Initialize the bot API client.

        let bot = Bot::new(config.bot_token.clone());

        // Confirm the token works and learn our own username before polling starts.

        let me = bot.get_me().await?;
        let bot_username = me.username().to_string();

        info!("Telegram bot username: @{}", bot_username);

        Ok(Self { bot, bot_username, faq })
    }
}

#[async_trait]
impl GenericChatClient for TelegramChatClient {
    fn bot_username(&self) -> &str {
        &self.bot_username
    }

    async fn start(&self) -> Void {
        // A single branch: private and group chats alike feed the same message endpoint.
        let handler = dptree::entry().branch(Update::filter_message().endpoint(handle_update));

        info!("Bot started. Polling Telegram for updates ...");

        // The dispatcher keys updates by chat, so one chat's messages are
        // handled in order while different chats proceed concurrently. It
        // polls until the process is shut down.
        Dispatcher::builder(self.bot.clone(), handler)
            .dependencies(dptree::deps![self.faq.clone(), ChatClient::from(self.clone())])
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn send_message(&self, chat_id: i64, text: &str) -> Void {
        let _ = self.bot.send_message(ChatId(chat_id), text).await.map_err(|e| anyhow::anyhow!("Failed to send message: {}", e))?;

        Ok(())
    }
}

// Dispatcher endpoint and routing helpers.

/// Routes one incoming Telegram message to the matching interaction handler.
async fn handle_update(message: Message, faq: FaqStore, chat: ChatClient) -> ResponseResult<()> {
    let Some(text) = message.text() else {
        // Photos, stickers, member joins, and so on carry nothing to answer.
        return Ok(());
    };

    let chat_id = message.chat.id.0;

    let result = match parse_command(text) {
        Some((command, target)) => {
            if command.eq_ignore_ascii_case("start") && target.is_none_or(|t| t.eq_ignore_ascii_case(chat.bot_username())) {
                interaction::start_command::handle_start_command(chat_id, &chat).await
            } else {
                // Unknown commands, and commands addressed to some other bot,
                // get no reply at all.
                debug!("Ignoring unsupported command: /{}", command);
                Ok(())
            }
        }
        None => interaction::text_message::handle_text_message(inbound_message(&message), &faq, &chat).await,
    };

    // Handler errors end here so one failed reply never stops the polling loop.
    if let Err(e) = result {
        error!("Failed to handle message: {}", e);
    }

    Ok(())
}

/// Splits a slash command into its name and optional `@botname` target.
///
/// Returns `None` when the text is not a command at all, which includes a
/// bare `/` and a `/` not directly followed by the command name.
fn parse_command(text: &str) -> Option<(&str, Option<&str>)> {
    let rest = text.strip_prefix('/')?;
    let token = rest.split(char::is_whitespace).next().unwrap_or("");

    if token.is_empty() {
        return None;
    }

    match token.split_once('@') {
        Some((name, target)) => Some((name, Some(target))),
        None => Some((token, None)),
    }
}

/// Reduces a Telegram message to the fields the handlers act on.
fn inbound_message(message: &Message) -> InboundMessage {
    InboundMessage {
        chat_id: message.chat.id.0,
        text: message.text().map(str::to_owned),
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_plain_command() {
        assert_eq!(parse_command("/start"), Some(("start", None)));
    }

    #[test]
    fn parses_a_command_addressed_to_a_bot() {
        assert_eq!(parse_command("/start@agritech_faq_bot"), Some(("start", Some("agritech_faq_bot"))));
    }

    #[test]
    fn parses_a_command_with_trailing_text() {
        assert_eq!(parse_command("/help me please"), Some(("help", None)));
    }

    #[test]
    fn plain_text_is_not_a_command() {
        assert_eq!(parse_command("tomato"), None);
        assert_eq!(parse_command("how do I plant tomatoes?"), None);
    }

    #[test]
    fn a_command_not_at_the_start_is_plain_text() {
        assert_eq!(parse_command("hello /start"), None);
    }

    #[test]
    fn a_bare_slash_is_plain_text() {
        assert_eq!(parse_command("/"), None);
        assert_eq!(parse_command("/ start"), None);
    }
}
