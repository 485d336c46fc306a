//! Discord handles resolved once during adapter initialization.

use serenity::all::RoleId;

use crate::model::role::GameRole;

/// Role IDs and bot identity looked up when the adapter initializes.
///
/// The guild and channel IDs come straight from configuration; only the values that
/// require a round trip to Discord live here.
#[derive(Debug, Clone, PartialEq)]
pub struct Handles {
    pub players_role: Option<RoleId>,
    pub admins_role: Option<RoleId>,
    pub notify_role: Option<RoleId>,
    /// Display name of the bot user.
    pub bot_name: String,
}

impl Handles {
    /// The resolved ID for a game role, if it was found in the guild.
    pub fn role(&self, role: GameRole) -> Option<RoleId> {
        match role {
            GameRole::Player => self.players_role,
            GameRole::Admin => self.admins_role,
            GameRole::Notify => self.notify_role,
        }
    }
}
