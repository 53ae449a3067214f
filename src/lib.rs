//! Library root for `faq-bot`.
//!
//! Faq-bot is a Telegram assistant for Agritech FAQ chats designed to:
//! - Greet chats that issue the start command
//! - Answer plain text questions from a hosted FAQ table
//! - Fall back to a polite reply when nothing matches
//!
//! The bot integrates with Telegram for chat and Supabase for storage. The
//! architecture is built around extensible traits that allow for different
//! implementations of each service.

#[deny(missing_docs)]
pub mod base;
pub mod interaction;
pub mod runtime;
pub mod service;

use base::{config::Config, types::Void};
use tracing::info;

/// Public async entry for the binary crate.
///
/// Sets up necessary services and starts the faq-bot runtime:
/// - Creates the runtime context with the FAQ store and chat client
/// - Starts the main polling loop for processing messages
pub async fn start(config: Config) -> Void {
    info!("Starting faq-bot ...");

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config).await?;

    // Start the runtime.
    runtime.start().await?;

    Ok(())
}
