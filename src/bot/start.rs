use std::sync::{Arc, OnceLock};

use serenity::all::{Client, GatewayIntents};

use crate::{
    bot::{handler::Handler, AdapterSlot},
    config::Config,
    error::AppError,
};

/// Initializes the Discord bot client without starting it.
///
/// # Arguments
/// - `config` - Application configuration
///
/// # Returns
/// - `Ok((Client, AdapterSlot))` - Client ready to start, and the slot the adapter
///   will be published in once the bot connects
/// - `Err(AppError)` - Bot initialization failed
pub async fn init_bot(config: Arc<Config>) -> Result<(Client, AdapterSlot), AppError> {
    // GUILD_MEMBERS and MESSAGE_CONTENT are privileged intents
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::MESSAGE_CONTENT;

    let slot: AdapterSlot = Arc::new(OnceLock::new());
    let handler = Handler::new(config.clone(), slot.clone());

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok((client, slot))
}

/// Starts the Discord bot in a blocking manner
///
/// Runs until the bot shuts down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
