use bevy::prelude::*;

#[derive(Component, Debug, Clone, Copy)]
pub struct Enemy;

/// Marker: entity was created by the pool pre-warm and is owned by `EnemyPool`.
#[derive(Component, Debug, Clone, Copy)]
pub struct PooledEnemy;

/// Pooled enemy lifecycle.
///
/// `Idle` -> `Chasing` on acquire, `Chasing` -> `PendingReturn` on player contact,
/// `PendingReturn` -> `Idle` when the return commit runs.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnemyState {
    #[default]
    Idle,
    Chasing,
    PendingReturn,
}

/// Handle to a pooled enemy entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnemyEntity(pub Entity);
