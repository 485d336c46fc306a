//! Ready event handler for adapter initialization.
//!
//! The ready event fires after every successful gateway connection, including
//! reconnects. The first one builds the adapter; every one runs `async_init`, which
//! resets the presence and, the first time only, resolves roles and cancels any game
//! interrupted by a restart.

use std::sync::Arc;

use serenity::all::{Context, Ready};

use crate::{
    adapter::{BotAdapter, DiscordAdapter},
    bot::AdapterSlot,
    config::Config,
    platform::serenity::SerenityPlatform,
};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `config` - Application configuration shared with the adapter
/// - `slot` - Cell the adapter is published in
/// - `ctx` - Discord context the platform forwards calls through
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(config: &Arc<Config>, slot: &AdapterSlot, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    let adapter = slot
        .get_or_init(|| {
            Arc::new(DiscordAdapter::new(
                SerenityPlatform::new(ctx, &ready),
                config.clone(),
            ))
        })
        .clone();

    if let Err(e) = adapter.async_init().await {
        tracing::error!("Failed to initialize adapter: {}", e);
    }
}
