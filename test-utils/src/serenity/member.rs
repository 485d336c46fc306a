//! Test factory for creating Serenity Member objects.

use serenity::all::Member;

/// User payload embedded in member objects, with no global display name.
fn user_json(user_id: u64, username: &str) -> serde_json::Value {
    serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": null,
        "avatar": null,
        "bot": false,
        "public_flags": 0,
    })
}

/// Creates a test Serenity Member of a guild.
///
/// # Arguments
/// - `guild_id` - Discord guild ID the member belongs to
/// - `user_id` - Discord user ID of the member
/// - `username` - Account username
/// - `nick` - Optional guild nickname
/// - `role_ids` - Roles the member holds
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member(
    guild_id: u64,
    user_id: u64,
    username: &str,
    nick: Option<&str>,
    role_ids: &[u64],
) -> Member {
    let roles: Vec<String> = role_ids.iter().map(|id| id.to_string()).collect();

    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "user": user_json(user_id, username),
        "nick": nick,
        "avatar": null,
        "roles": roles,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "permissions": null,
        "communication_disabled_until": null,
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
