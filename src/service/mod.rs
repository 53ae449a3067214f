//! Service integrations for external APIs and clients.
//!
//! This module contains implementations for various services used by the faq-bot:
//! - Chat services (e.g., Telegram)
//! - FAQ store services (e.g., Supabase)
//!
//! Each service module defines both generic traits and concrete implementations,
//! allowing for extensibility and easy testing.

pub mod chat;
pub mod faq;
