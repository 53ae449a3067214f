use tracing::{info, instrument};

use crate::{
    base::types::{InboundMessage, Void},
    service::{chat::ChatClient, faq::FaqStore},
};

/// Handles a plain text message by answering it from the FAQ table.
///
/// The lookup itself cannot fail, so the only error path here is the outbound
/// send. Exactly one reply goes out per inbound message.
#[instrument(skip_all)]
pub async fn handle_text_message(message: InboundMessage, faq: &FaqStore, chat: &ChatClient) -> Void {
    info!("Received text message ...");

    // Look up the message text, treating absent text as empty.

    let text = message.text.as_deref().unwrap_or("");
    let reply = faq.lookup(text).await;

    // Send the resolved reply back to the originating chat.

    chat.send_message(message.chat_id, &reply).await
}
