//! Session context: the single source of truth for player liveness.
//!
//! Owned by the app as a resource and reset each time `GameState::InGame` is entered.
//! Spawning and chasing read it; only the contact resolver flips it.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    player_alive: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self { player_alive: true }
    }
}

impl Session {
    #[inline]
    pub fn is_player_alive(&self) -> bool {
        self.player_alive
    }

    /// Flip liveness to false. Returns `true` only for the call that performed the flip.
    pub fn mark_player_dead(&mut self) -> bool {
        std::mem::replace(&mut self.player_alive, false)
    }

    pub fn reset(&mut self) {
        self.player_alive = true;
    }
}

/// Written once per session, on the first player-enemy contact.
#[derive(Message, Clone, Copy, Debug)]
pub struct PlayerDied {
    pub position: Vec2,
}
