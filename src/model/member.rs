//! Guild member domain model.

use serenity::all::{Member, RoleId, UserId};

/// A member of the werewolf guild.
///
/// Resolved fresh from Discord on every lookup so role checks see the current
/// membership.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildMember {
    /// Discord user ID.
    pub user_id: UserId,
    /// Nickname if set, otherwise global display name, otherwise username.
    pub display_name: String,
    /// Roles the member currently holds.
    pub roles: Vec<RoleId>,
}

impl GuildMember {
    /// Whether the member currently holds `role`.
    pub fn has_role(&self, role: RoleId) -> bool {
        self.roles.contains(&role)
    }

    /// Mention string for the member, e.g. `<@1234>`.
    pub fn mention(&self) -> String {
        format!("<@{}>", self.user_id)
    }
}

impl From<&Member> for GuildMember {
    fn from(member: &Member) -> Self {
        let display_name = member
            .nick
            .clone()
            .or_else(|| member.user.global_name.clone())
            .unwrap_or_else(|| member.user.name.clone());

        Self {
            user_id: member.user.id,
            display_name,
            roles: member.roles.clone(),
        }
    }
}
