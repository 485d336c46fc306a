use std::path::PathBuf;

use serenity::all::{ChannelId, GuildId};

use crate::{
    error::{config::ConfigError, AppError},
    model::log_level::LogLevel,
};

const DEFAULT_PLAYERS_ROLE_NAME: &str = "Players";
const DEFAULT_ADMINS_ROLE_NAME: &str = "Admins";
const DEFAULT_NOTIFY_ROLE_NAME: &str = "Werewolf Notify";
const DEFAULT_BOT_PREFIX: &str = "!";
const DEFAULT_LOG_FILE: &str = "debug.txt";
const DEFAULT_PLAYING_MESSAGE: &str = "!join to play";

pub struct Config {
    pub discord_bot_token: String,

    pub werewolf_server: GuildId,
    pub game_channel: ChannelId,
    pub debug_channel: ChannelId,
    /// Pinged on error-level log entries.
    pub owner_id: u64,

    pub players_role_name: String,
    pub admins_role_name: String,
    pub notify_role_name: String,

    pub bot_prefix: String,
    pub playing_message: String,

    pub log_file: PathBuf,
    /// Entries at or above this level are mirrored to the debug channel.
    pub min_log_level: LogLevel,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `from_env` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String, ConfigError> {
            lookup(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
        };
        let optional = |key: &str, default: &str| -> String {
            lookup(key).unwrap_or_else(|| default.to_string())
        };

        let min_log_level = match lookup("MIN_LOG_LEVEL") {
            Some(value) => {
                let level = parse_u64("MIN_LOG_LEVEL", &value)?;
                u8::try_from(level)
                    .map_err(|_| ConfigError::InvalidValue {
                        var: "MIN_LOG_LEVEL".to_string(),
                        value: value.clone(),
                        reason: "log level must be between 0 and 3".to_string(),
                    })
                    .and_then(LogLevel::try_from)?
            }
            None => LogLevel::Info,
        };

        Ok(Self {
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            werewolf_server: GuildId::new(parse_snowflake(
                "WEREWOLF_SERVER",
                &required("WEREWOLF_SERVER")?,
            )?),
            game_channel: ChannelId::new(parse_snowflake(
                "GAME_CHANNEL",
                &required("GAME_CHANNEL")?,
            )?),
            debug_channel: ChannelId::new(parse_snowflake(
                "DEBUG_CHANNEL",
                &required("DEBUG_CHANNEL")?,
            )?),
            owner_id: parse_snowflake("OWNER_ID", &required("OWNER_ID")?)?,
            players_role_name: optional("PLAYERS_ROLE_NAME", DEFAULT_PLAYERS_ROLE_NAME),
            admins_role_name: optional("ADMINS_ROLE_NAME", DEFAULT_ADMINS_ROLE_NAME),
            notify_role_name: optional("WEREWOLF_NOTIFY_ROLE_NAME", DEFAULT_NOTIFY_ROLE_NAME),
            bot_prefix: optional("BOT_PREFIX", DEFAULT_BOT_PREFIX),
            playing_message: optional("PLAYING_MESSAGE", DEFAULT_PLAYING_MESSAGE),
            log_file: PathBuf::from(optional("LOG_FILE", DEFAULT_LOG_FILE)),
            min_log_level,
        })
    }
}

fn parse_u64(var: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidValue {
            var: var.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Discord snowflakes are non-zero; Serenity's ID constructors panic on zero.
fn parse_snowflake(var: &str, value: &str) -> Result<u64, ConfigError> {
    match parse_u64(var, value)? {
        0 => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            value: value.to_string(),
            reason: "Discord IDs cannot be zero".to_string(),
        }),
        id => Ok(id),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn base_vars() -> HashMap<&'static str, String> {
        HashMap::from([
            ("DISCORD_BOT_TOKEN", "token".to_string()),
            ("WEREWOLF_SERVER", "1000".to_string()),
            ("GAME_CHANNEL", "2000".to_string()),
            ("DEBUG_CHANNEL", "2001".to_string()),
            ("OWNER_ID", "3000".to_string()),
        ])
    }

    fn load(vars: &HashMap<&'static str, String>) -> Result<Config, AppError> {
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn loads_required_values_and_defaults() {
        let config = load(&base_vars()).unwrap();

        assert_eq!(config.werewolf_server, GuildId::new(1000));
        assert_eq!(config.game_channel, ChannelId::new(2000));
        assert_eq!(config.debug_channel, ChannelId::new(2001));
        assert_eq!(config.owner_id, 3000);
        assert_eq!(config.players_role_name, "Players");
        assert_eq!(config.notify_role_name, "Werewolf Notify");
        assert_eq!(config.bot_prefix, "!");
        assert_eq!(config.log_file, PathBuf::from("debug.txt"));
        assert_eq!(config.min_log_level, LogLevel::Info);
    }

    #[test]
    fn overrides_optional_values() {
        let mut vars = base_vars();
        vars.insert("BOT_PREFIX", "ww!".to_string());
        vars.insert("MIN_LOG_LEVEL", "3".to_string());
        vars.insert("ADMINS_ROLE_NAME", "Moderators".to_string());

        let config = load(&vars).unwrap();
        assert_eq!(config.bot_prefix, "ww!");
        assert_eq!(config.min_log_level, LogLevel::Error);
        assert_eq!(config.admins_role_name, "Moderators");
    }

    #[test]
    fn reports_missing_variable_by_name() {
        let mut vars = base_vars();
        vars.remove("GAME_CHANNEL");

        match load(&vars) {
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(var))) => {
                assert_eq!(var, "GAME_CHANNEL")
            }
            other => panic!("expected missing GAME_CHANNEL, got {:?}", other.err()),
        }
    }

    #[test]
    fn rejects_invalid_ids_and_levels() {
        let mut vars = base_vars();
        vars.insert("OWNER_ID", "not-a-number".to_string());
        assert!(matches!(
            load(&vars),
            Err(AppError::ConfigErr(ConfigError::InvalidValue { .. }))
        ));

        let mut vars = base_vars();
        vars.insert("WEREWOLF_SERVER", "0".to_string());
        assert!(matches!(
            load(&vars),
            Err(AppError::ConfigErr(ConfigError::InvalidValue { .. }))
        ));

        let mut vars = base_vars();
        vars.insert("MIN_LOG_LEVEL", "9".to_string());
        assert!(matches!(
            load(&vars),
            Err(AppError::ConfigErr(ConfigError::InvalidValue { .. }))
        ));
    }
}
