//! Lobby status and its presence mapping.

use serenity::all::OnlineStatus;

/// State of the game lobby as reported by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LobbyStatus {
    /// No game running, players may join.
    Ready,
    /// Players have joined and the game is about to start.
    WaitingToStart,
    /// A game is in progress.
    InGame,
}

impl LobbyStatus {
    /// Discord presence shown while the lobby is in this state.
    pub fn online_status(self) -> OnlineStatus {
        match self {
            LobbyStatus::Ready => OnlineStatus::Online,
            LobbyStatus::WaitingToStart => OnlineStatus::Idle,
            LobbyStatus::InGame => OnlineStatus::DoNotDisturb,
        }
    }
}
