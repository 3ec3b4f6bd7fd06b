//! Buffered spawn requests.
//!
//! The director only writes intent; the allocator is the single consumer that
//! touches `EnemyPool` and activates entities.

use bevy::prelude::*;

#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct SpawnEnemyRequest {
    pub pos: Vec2,
}
