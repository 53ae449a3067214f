//! Canned replies sent back to chats.
//!
//! Every reply the bot can produce on its own is defined here; handlers never
//! build user-facing strings inline.

/// Greeting sent in response to the start command.
pub const GREETING: &str = "Hello! 👋 How can I help you with Agritech today?";

/// Reply when no FAQ row matches the message text, and also when the lookup
/// itself fails.
pub const NO_MATCH_FALLBACK: &str =
    "Sorry, I don't have an answer for that yet. Please ask something else about Agritech.";

/// Reply when a row matches but carries no usable answer.
pub const MISSING_ANSWER_FALLBACK: &str = "Sorry, no answer found.";
