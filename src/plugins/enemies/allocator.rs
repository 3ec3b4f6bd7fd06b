//! Spawn consumer: activate enemies from the pool.
//!
//! The pool idle queue only ever holds pre-warmed enemy entities, so a handle that
//! fails the query is a bug and we crash loudly.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::components::{EnemyEntity, EnemyState, PooledEnemy};
use super::messages::SpawnEnemyRequest;
use super::pool::{wake_enemy, EnemyPool};

pub fn allocate_enemies_from_pool(
    mut pool: ResMut<EnemyPool>,
    mut reader: MessageReader<SpawnEnemyRequest>,
    mut q: Query<(
        &mut EnemyState,
        &mut Transform,
        &mut LinearVelocity,
        &mut Visibility,
        &mut CollisionLayers,
    ), With<PooledEnemy>>,
) {
    for req in reader.read() {
        let EnemyEntity(e) = match pool.acquire() {
            Ok(e) => e,
            Err(err) => {
                // Capacity decision, not a correctness failure.
                debug!("dropping spawn request: {err}");
                continue;
            }
        };

        let (mut state, mut tf, mut vel, mut vis, mut layers) =
            q.get_mut(e).expect("EnemyPool contained an entity missing pooled enemy components");

        wake_enemy(&mut state, &mut tf, &mut vel, &mut vis, &mut layers, req.pos);
    }
}
