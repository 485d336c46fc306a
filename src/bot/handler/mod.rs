use std::sync::Arc;

use serenity::all::{Context, EventHandler, Ready};
use serenity::async_trait;

use crate::{bot::AdapterSlot, config::Config};

pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub config: Arc<Config>,
    pub adapter: AdapterSlot,
}

impl Handler {
    pub fn new(config: Arc<Config>, adapter: AdapterSlot) -> Self {
        Self { config, adapter }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.config, &self.adapter, ctx, ready).await;
    }
}
