//! Guild channel domain models.

use serenity::all::Permissions;

/// Permission overwrite for a single role on a channel.
///
/// A permission absent from both `allow` and `deny` is inherited from the role's
/// guild-level permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoleOverwrite {
    pub allow: Permissions,
    pub deny: Permissions,
}

impl RoleOverwrite {
    /// Whether the overwrite explicitly allows sending messages.
    ///
    /// An inherited (unset) send permission counts as not allowed.
    pub fn allows_send(&self) -> bool {
        self.allow.contains(Permissions::SEND_MESSAGES)
    }

    /// Returns the overwrite with sending explicitly denied, other bits untouched.
    pub fn with_send_denied(mut self) -> Self {
        self.allow.remove(Permissions::SEND_MESSAGES);
        self.deny.insert(Permissions::SEND_MESSAGES);
        self
    }

    /// Returns the overwrite with sending explicitly allowed, other bits untouched.
    pub fn with_send_allowed(mut self) -> Self {
        self.deny.remove(Permissions::SEND_MESSAGES);
        self.allow.insert(Permissions::SEND_MESSAGES);
        self
    }
}
