//! Discord adapter for the werewolf lobby bot.
//!
//! The game talks to the [`adapter::BotAdapter`] trait. [`adapter::DiscordAdapter`]
//! implements it on top of a [`platform::ChatPlatform`], and
//! [`platform::serenity::SerenityPlatform`] forwards those calls to Discord through
//! Serenity.
//!
//! # Layout
//!
//! - **Adapter** (`adapter/`) - Role grants, lobby locking, presence, chunked sends, logging
//! - **Platform** (`platform/`) - Seam to the chat client library
//! - **Model** (`model/`) - Domain views of Discord objects and lobby enums
//! - **Bot** (`bot/`) - Serenity client start-up and gateway event handling
//! - **Configuration** (`config`) - Environment-based configuration
//! - **Error** (`error/`) - Application error types
//! - **Util** (`util/`) - Message splitting and mention escaping

pub mod adapter;
pub mod bot;
pub mod config;
pub mod error;
pub mod model;
pub mod platform;
pub mod startup;
pub mod util;
