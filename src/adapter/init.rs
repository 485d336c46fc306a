//! One-time initialization: role lookup and clean-up after a restart.
//!
//! A restart mid-game leaves members holding the Player role and the lobby locked.
//! Initialization cancels that game: players are told, their role is revoked and
//! the lobby is reopened.

use serenity::all::RoleId;

use crate::{
    adapter::{BotAdapter, DiscordAdapter},
    error::AppError,
    model::{
        handles::Handles,
        lobby::LobbyStatus,
        log_level::LogLevel,
        role::{find_by_name, GameRole, GuildRole},
    },
    platform::ChatPlatform,
};

impl<P: ChatPlatform> DiscordAdapter<P> {
    pub(super) async fn initialize(&self) -> Result<(), AppError> {
        self.set_lobby_status(LobbyStatus::Ready).await?;

        if self.is_initialized() {
            return Ok(());
        }

        let handles = self.resolve_handles().await?;
        if self.handles.set(handles).is_err() {
            // Another ready event finished initialization first.
            return Ok(());
        }

        tracing::info!("Adapter initialized for guild {}", self.config.werewolf_server);

        self.sync_after_restart().await
    }

    async fn resolve_handles(&self) -> Result<Handles, AppError> {
        let bot_name = self.platform.bot_name().await?;
        let roles = self
            .platform
            .guild_roles(self.config.werewolf_server)
            .await?;

        let players_role = self
            .lookup_role(
                &roles,
                GameRole::Player,
                &self.config.players_role_name,
                LogLevel::Error,
            )
            .await;
        let admins_role = self
            .lookup_role(
                &roles,
                GameRole::Admin,
                &self.config.admins_role_name,
                LogLevel::Error,
            )
            .await;
        // The notify role is optional
        let notify_role = self
            .lookup_role(
                &roles,
                GameRole::Notify,
                &self.config.notify_role_name,
                LogLevel::Warning,
            )
            .await;

        Ok(Handles {
            players_role,
            admins_role,
            notify_role,
            bot_name,
        })
    }

    async fn lookup_role(
        &self,
        roles: &[GuildRole],
        role: GameRole,
        name: &str,
        missing_level: LogLevel,
    ) -> Option<RoleId> {
        match find_by_name(roles, name) {
            Some(found) => {
                self.log(LogLevel::Debug, &format!("{} role id: {}", role, found.id))
                    .await;
                Some(found.id)
            }
            None => {
                self.log(missing_level, &format!("Could not find {} role {}", role, name))
                    .await;
                None
            }
        }
    }

    /// Cancels a game interrupted by a restart.
    async fn sync_after_restart(&self) -> Result<(), AppError> {
        let guild_id = self.config.werewolf_server;
        let mut synced_players = false;

        if let Some(players_role) = self.handles()?.players_role {
            let members = self.platform.guild_members(guild_id).await?;

            for member in members.iter().filter(|m| m.has_role(players_role)) {
                if !synced_players {
                    self.send_lobby(&format!(
                        "<@&{}>, the bot has restarted, so the game has been cancelled. Type `{}join` to start a new game.",
                        players_role, self.config.bot_prefix
                    ))
                    .await;
                    synced_players = true;
                }

                if let Err(e) = self
                    .platform
                    .remove_member_role(guild_id, member.user_id, players_role)
                    .await
                {
                    self.log(
                        LogLevel::Error,
                        &format!(
                            "Failed to remove {} role from {}: {}",
                            GameRole::Player,
                            member.display_name,
                            e
                        ),
                    )
                    .await;
                }
            }
        }

        let synced_lobby = if self.is_lobby_locked().await? {
            self.unlock_lobby().await?;
            true
        } else {
            false
        };

        if synced_players || synced_lobby {
            self.log(LogLevel::Warning, "SYNCED UPON BOT RESTART").await;
        }

        Ok(())
    }
}
