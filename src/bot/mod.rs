//! Discord bot start-up and gateway event handling.
//!
//! The bot connects with Serenity and builds the [`DiscordAdapter`] on the first
//! `ready` event, once a gateway context is available. The adapter is published
//! through an [`AdapterSlot`] so game code started alongside the bot can reach it.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild, role and channel state
//! - `GUILD_MESSAGES` / `DIRECT_MESSAGES` - Messages for `wait_for_message`
//! - `GUILD_MEMBERS` - Member listing for the restart sync (privileged intent)
//! - `MESSAGE_CONTENT` - Message text for command parsing (privileged intent)
//!
//! Note: privileged intents must be explicitly enabled in the Discord Developer
//! Portal for the bot application.

pub mod handler;
pub mod start;

use std::sync::{Arc, OnceLock};

use crate::{adapter::DiscordAdapter, platform::serenity::SerenityPlatform};

/// Shared cell holding the adapter once the bot is ready.
pub type AdapterSlot = Arc<OnceLock<Arc<DiscordAdapter<SerenityPlatform>>>>;
