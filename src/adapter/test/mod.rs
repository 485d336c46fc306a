use std::{
    ops::Deref,
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use serenity::all::{ChannelId, GuildId, OnlineStatus, Permissions, RoleId, UserId};
use tempfile::TempDir;

use crate::{
    adapter::{BotAdapter, DiscordAdapter, ReplyOptions, RetryPolicy},
    config::Config,
    error::AppError,
    model::{
        channel::RoleOverwrite, destination::Destination, lobby::LobbyStatus,
        log_level::LogLevel, role::GameRole,
    },
    platform::{mock::MockPlatform, MessageFilter},
};


const GUILD_ID: u64 = 1000;
const GAME_CHANNEL: u64 = 2000;
const DEBUG_CHANNEL: u64 = 2001;
const OWNER_ID: u64 = 3000;
const PLAYERS_ROLE: u64 = 10;
const ADMINS_ROLE: u64 = 11;
const NOTIFY_ROLE: u64 = 12;

fn test_config(log_file: PathBuf) -> Config {
    Config {
        discord_bot_token: "token".to_string(),
        werewolf_server: GuildId::new(GUILD_ID),
        game_channel: ChannelId::new(GAME_CHANNEL),
        debug_channel: ChannelId::new(DEBUG_CHANNEL),
        owner_id: OWNER_ID,
        players_role_name: "Players".to_string(),
        admins_role_name: "Admins".to_string(),
        notify_role_name: "Werewolf Notify".to_string(),
        bot_prefix: "!".to_string(),
        playing_message: "!join to play".to_string(),
        log_file,
        min_log_level: LogLevel::Info,
    }
}

/// Adapter over a mock platform, logging into a temporary directory.
struct TestAdapter {
    adapter: DiscordAdapter<MockPlatform>,
    log_dir: TempDir,
}

impl TestAdapter {
    fn platform(&self) -> &MockPlatform {
        self.adapter.platform()
    }

    fn log_contents(&self) -> String {
        std::fs::read_to_string(self.log_dir.path().join("debug.txt")).unwrap_or_default()
    }

    fn lobby_messages(&self) -> Vec<String> {
        self.platform()
            .sent_to(Destination::Channel(ChannelId::new(GAME_CHANNEL)))
    }

    fn debug_messages(&self) -> Vec<String> {
        self.platform()
            .sent_to(Destination::Channel(ChannelId::new(DEBUG_CHANNEL)))
    }
}

impl Deref for TestAdapter {
    type Target = DiscordAdapter<MockPlatform>;

    fn deref(&self) -> &Self::Target {
        &self.adapter
    }
}

fn everyone() -> RoleId {
    RoleId::new(GUILD_ID)
}

fn game_channel() -> ChannelId {
    ChannelId::new(GAME_CHANNEL)
}

/// Platform for a guild with all three roles and an unlocked lobby.
fn guild_platform() -> MockPlatform {
    let platform = MockPlatform::new("Werewolf Bot");
    platform.add_role(PLAYERS_ROLE, "Players", 3);
    platform.add_role(ADMINS_ROLE, "Admins", 5);
    platform.add_role(NOTIFY_ROLE, "Werewolf Notify", 1);
    platform.set_overwrite(
        game_channel(),
        everyone(),
        RoleOverwrite {
            allow: Permissions::SEND_MESSAGES,
            deny: Permissions::empty(),
        },
    );
    platform
}

fn build_adapter(platform: MockPlatform) -> TestAdapter {
    let retry = RetryPolicy {
        attempts: 3,
        delay: Duration::ZERO,
    };
    build_adapter_with(platform, retry, |dir| dir.join("debug.txt"))
}

/// Like [`build_adapter`], with a chosen retry policy and log file location.
fn build_adapter_with(
    platform: MockPlatform,
    retry: RetryPolicy,
    log_file: impl FnOnce(&Path) -> PathBuf,
) -> TestAdapter {
    let log_dir = tempfile::tempdir().unwrap();
    let config = test_config(log_file(log_dir.path()));
    let adapter = DiscordAdapter::new(platform, Arc::new(config)).with_retry_policy(retry);

    TestAdapter { adapter, log_dir }
}

async fn initialized_adapter(platform: MockPlatform) -> TestAdapter {
    let test = build_adapter(platform);
    test.async_init().await.unwrap();
    test
}
