//! Chase behavior: face the player and close in at a fixed speed.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::session::Session;
use crate::common::tunables::Tunables;
use crate::plugins::player::Player;

use super::components::{Enemy, EnemyState};

/// Move `from` toward `to` by at most `max_step`, landing exactly on `to` instead of overshooting.
#[inline]
pub fn move_towards(from: Vec2, to: Vec2, max_step: f32) -> Vec2 {
    let delta = to - from;
    let dist = delta.length();
    if dist <= max_step || dist <= f32::EPSILON {
        to
    } else {
        from + delta / dist * max_step
    }
}

/// Rotation that points a sprite's +Y axis along `dir`.
#[inline]
pub fn facing(dir: Vec2) -> Quat {
    Quat::from_rotation_z(Vec2::Y.angle_to(dir))
}

/// Drive chasing enemies through velocity so the physics step still resolves contacts.
///
/// With no live player, chasers halt in place and keep their last facing.
pub fn chase_player(
    time: Res<Time<Fixed>>,
    session: Res<Session>,
    tunables: Res<Tunables>,
    q_player: Query<&Transform, (With<Player>, Without<Enemy>)>,
    mut q: Query<(&EnemyState, &mut Transform, &mut LinearVelocity), (With<Enemy>, Without<Player>)>,
) {
    let target = match q_player.single() {
        Ok(tf) if session.is_player_alive() => Some(tf.translation.truncate()),
        _ => None,
    };
    let dt = time.delta_secs();

    for (state, mut tf, mut vel) in &mut q {
        if *state != EnemyState::Chasing {
            continue;
        }

        let Some(target) = target else {
            vel.0 = Vec2::ZERO;
            continue;
        };

        let pos = tf.translation.truncate();
        let to_player = target - pos;
        if to_player.length_squared() > f32::EPSILON {
            tf.rotation = facing(to_player);
        }

        vel.0 = if dt > 0.0 {
            (move_towards(pos, target, tunables.enemy_speed * dt) - pos) / dt
        } else {
            Vec2::ZERO
        };
    }
}
