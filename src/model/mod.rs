//! Domain models used by the adapter.
//!
//! Discord objects are converted into these views at the platform boundary so the
//! adapter never depends on the full Serenity structs. Lobby and log enums carry the
//! game-facing vocabulary.

pub mod channel;
pub mod destination;
pub mod handles;
pub mod lobby;
pub mod log_level;
pub mod member;
pub mod message;
pub mod role;
