//! Return commit: hand `PendingReturn` enemies back to the pool by identity.
//!
//! The pool learns about the return first; the entity is parked either way so a stray
//! release never leaves a visible, colliding body behind.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::components::{EnemyEntity, EnemyState, PooledEnemy};
use super::pool::{park_enemy, EnemyPool};

pub fn return_to_pool_commit(
    mut pool: ResMut<EnemyPool>,
    mut q: Query<(
        Entity,
        &mut EnemyState,
        &mut Visibility,
        &mut LinearVelocity,
        &mut CollisionLayers,
    ), With<PooledEnemy>>,
) {
    let returning = q
        .iter_mut()
        .filter(|(_, state, ..)| **state == EnemyState::PendingReturn);

    for (e, mut state, mut vis, mut vel, mut layers) in returning {
        if let Err(err) = pool.release(EnemyEntity(e)) {
            warn!("enemy {e} returned outside the pool: {err}");
        }
        park_enemy(&mut state, &mut vis, &mut vel, &mut layers);
    }
}
