//! Player contact resolution.
//!
//! The first chasing enemy to touch the player kills it: liveness flips, `PlayerDied`
//! is written, and the player is marked for despawn. Every enemy that touched the
//! player goes to `PendingReturn`; the return commit recycles that exact instance.

use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::session::{PlayerDied, Session};
use crate::plugins::player::{PendingDespawn, Player};

use super::components::{EnemyState, PooledEnemy};

/// Gameplay entities on both sides of a contact: the rigid body when there is one,
/// otherwise the collider itself.
#[inline]
fn contact_owners(ev: &CollisionStart) -> [Entity; 2] {
    [
        ev.body1.unwrap_or(ev.collider1),
        ev.body2.unwrap_or(ev.collider2),
    ]
}

/// `(player, other)` when exactly one side of the contact is the player.
#[inline]
fn split_player(owners: [Entity; 2], is_player: impl Fn(Entity) -> bool) -> Option<(Entity, Entity)> {
    match owners.map(&is_player) {
        [true, false] => Some((owners[0], owners[1])),
        [false, true] => Some((owners[1], owners[0])),
        _ => None,
    }
}

pub fn process_player_contacts(
    mut commands: Commands,
    mut started: MessageReader<CollisionStart>,
    mut session: ResMut<Session>,
    mut died: MessageWriter<PlayerDied>,
    q_player: Query<&Transform, With<Player>>,
    mut q_enemies: Query<&mut EnemyState, With<PooledEnemy>>,
    mut seen: Local<HashSet<Entity>>,
) {
    seen.clear();

    for ev in started.read() {
        let Some((player, enemy)) = split_player(contact_owners(ev), |e| q_player.contains(e)) else {
            continue;
        };

        if !seen.insert(enemy) {
            continue;
        }

        let Ok(mut state) = q_enemies.get_mut(enemy) else {
            continue;
        };
        if *state != EnemyState::Chasing {
            continue;
        }
        *state = EnemyState::PendingReturn;

        if session.mark_player_dead() {
            let position = q_player
                .get(player)
                .map(|tf| tf.translation.truncate())
                .unwrap_or_default();
            died.write(PlayerDied { position });
            commands.entity(player).insert(PendingDespawn);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_player_needs_exactly_one_player_side() {
        let mut world = World::new();
        let p = world.spawn_empty().id();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        let is_p = |e: Entity| e == p;

        assert_eq!(split_player([p, a], is_p), Some((p, a)));
        assert_eq!(split_player([a, p], is_p), Some((p, a)));
        assert_eq!(split_player([a, b], is_p), None);
        assert_eq!(split_player([p, p], is_p), None);
    }

    #[test]
    fn contact_owners_prefer_bodies() {
        let mut world = World::new();
        let c1 = world.spawn_empty().id();
        let c2 = world.spawn_empty().id();
        let body = world.spawn_empty().id();

        let ev = CollisionStart { collider1: c1, collider2: c2, body1: Some(body), body2: None };
        assert_eq!(contact_owners(&ev), [body, c2]);
    }
}
