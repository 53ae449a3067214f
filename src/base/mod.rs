//! Core components, types, and utilities for the faq-bot.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - Canned reply strings sent back to chats.
//! - Common types and result handling.

pub mod config;
pub mod replies;
pub mod types;
