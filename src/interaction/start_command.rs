use tracing::{info, instrument};

use crate::{
    base::{replies::GREETING, types::Void},
    service::chat::ChatClient,
};

/// Handles the start command by greeting the chat.
///
/// The greeting is unconditional: no lookup is performed, and prior messages
/// in the chat play no part.
#[instrument(skip(chat))]
pub async fn handle_start_command(chat_id: i64, chat: &ChatClient) -> Void {
    info!("Received start command ...");

    chat.send_message(chat_id, GREETING).await
}
