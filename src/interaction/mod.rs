//! Event handling and user interactions for faq-bot.
//!
//! This module provides functionality for handling incoming chat messages:
//! - Greeting chats that issue the start command
//! - Answering plain text messages from the FAQ table
//!
//! Handlers are stateless: everything they need arrives with the message and
//! the service handles, and nothing is remembered between messages.

pub mod start_command;
pub mod text_message;
