use std::sync::Arc;

use wolfbot::{bot, config::Config, error::AppError, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Arc::new(Config::from_env()?);

    tracing::info!(
        "Starting bot for guild {} (lobby channel {})",
        config.werewolf_server,
        config.game_channel
    );

    // Game code takes the adapter from this slot once the first `ready` has run.
    let (client, _adapter_slot) = bot::start::init_bot(config).await?;

    bot::start::start_bot(client).await
}
