//! Shared type aliases and domain types used across the crate.

use serde::{Deserialize, Serialize};

/// Error type used throughout the application.
pub type Err = anyhow::Error;
/// Result type used throughout the application.
pub type Res<T> = Result<T, Err>;
/// Result type for operations that return nothing on success.
pub type Void = Res<()>;

/// An inbound chat message reduced to the fields the handlers act on.
///
/// Ephemeral by design: one of these exists for the duration of a single
/// update and is never persisted anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Identifier of the chat the message arrived from; replies go back here.
    pub chat_id: i64,
    /// The message text, when the platform delivered any.
    pub text: Option<String>,
}
