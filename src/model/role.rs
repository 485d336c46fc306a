//! Guild role domain models.

use std::fmt;

use serenity::all::{Role, RoleId};

/// One of the roles the adapter grants or revokes on behalf of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameRole {
    /// Members currently signed up for or playing a game.
    Player,
    /// Game administrators.
    Admin,
    /// Members who asked to be pinged when a game is starting.
    Notify,
}

impl fmt::Display for GameRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameRole::Player => f.write_str("Players"),
            GameRole::Admin => f.write_str("Admins"),
            GameRole::Notify => f.write_str("Werewolf Notify"),
        }
    }
}

/// Discord role within the werewolf guild.
///
/// Only the fields needed for resolving roles by name are kept. Position follows
/// the guild's role hierarchy where higher positions indicate greater importance.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildRole {
    /// Discord role ID.
    pub id: RoleId,
    /// Role display name.
    pub name: String,
    /// Role position in the guild's role hierarchy.
    pub position: u16,
}

impl From<&Role> for GuildRole {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id,
            name: role.name.clone(),
            position: role.position,
        }
    }
}

/// Finds the role with the given name, preferring the highest in the hierarchy.
///
/// Role names are not unique in Discord; when several roles share a name the one
/// with the greatest position is returned.
pub fn find_by_name<'a>(roles: &'a [GuildRole], name: &str) -> Option<&'a GuildRole> {
    roles
        .iter()
        .filter(|role| role.name == name)
        .max_by_key(|role| role.position)
}
