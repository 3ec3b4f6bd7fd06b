//! Effects plugin: the death burst.
//!
//! An emitter entity shadows the player while it is alive. When `PlayerDied` arrives
//! the emitter releases a ring of shards that fly outward, shrink, fade, and despawn.
//! Shards are plain sprites with no physics, so this runs fine headless.

use std::f32::consts::TAU;

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::session::{PlayerDied, Session};
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::player::Player;

const SHARD_SPEED: f32 = 260.0;
const SHARD_LIFETIME_SECS: f32 = 0.8;
const SHARD_SIZE: f32 = 7.0;

#[derive(Component, Debug, Clone, Copy)]
pub struct DeathBurstEmitter;

#[derive(Component, Debug, Clone, Copy)]
pub struct Shard {
    pub velocity: Vec2,
}

#[derive(Component, Deref, DerefMut)]
pub struct Lifetime(pub Timer);

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_emitter)
        .add_systems(
            FixedUpdate,
            follow_player.run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            Update,
            (emit_on_death, animate_shards).run_if(in_state(GameState::InGame)),
        );
}

fn spawn_emitter(mut commands: Commands) {
    commands.spawn((
        Name::new("DeathBurstEmitter"),
        DeathBurstEmitter,
        Transform::from_xyz(0.0, 0.0, 3.0),
        DespawnOnExit(GameState::InGame),
    ));
}

fn follow_player(
    session: Res<Session>,
    q_player: Query<&Transform, (With<Player>, Without<DeathBurstEmitter>)>,
    mut q_emitter: Query<&mut Transform, (With<DeathBurstEmitter>, Without<Player>)>,
) {
    if !session.is_player_alive() {
        return;
    }
    let Ok(tf_player) = q_player.single() else { return; };
    let Ok(mut tf_emitter) = q_emitter.single_mut() else { return; };

    tf_emitter.translation.x = tf_player.translation.x;
    tf_emitter.translation.y = tf_player.translation.y;
}

/// Evenly spaced shard directions, rotated by half a step so none align with the axes.
pub fn burst_directions(count: usize) -> impl Iterator<Item = Vec2> {
    let step = TAU / count.max(1) as f32;
    (0..count).map(move |i| Vec2::from_angle(step * (i as f32 + 0.5)))
}

fn emit_on_death(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut died: MessageReader<PlayerDied>,
    q_emitter: Query<&Transform, With<DeathBurstEmitter>>,
) {
    for ev in died.read() {
        let origin = q_emitter
            .single()
            .map(|tf| tf.translation.truncate())
            .unwrap_or(ev.position);

        for dir in burst_directions(tunables.death_burst_shards) {
            commands.spawn((
                Name::new("Shard"),
                Shard { velocity: dir * SHARD_SPEED },
                Lifetime(Timer::from_seconds(SHARD_LIFETIME_SECS, TimerMode::Once)),
                Sprite::from_color(Color::srgb(0.95, 0.55, 0.2), Vec2::splat(SHARD_SIZE)),
                Transform::from_translation(origin.extend(3.0)),
                DespawnOnExit(GameState::InGame),
            ));
        }
    }
}

fn animate_shards(
    mut commands: Commands,
    time: Res<Time>,
    mut q: Query<(Entity, &Shard, &mut Lifetime, &mut Transform, &mut Sprite)>,
) {
    let dt = time.delta_secs();

    for (e, shard, mut life, mut tf, mut sprite) in &mut q {
        life.tick(time.delta());
        if life.is_finished() {
            commands.entity(e).despawn();
            continue;
        }

        let remaining = 1.0 - life.fraction();
        tf.translation += (shard.velocity * dt).extend(0.0);
        tf.scale = Vec3::splat(remaining);

        let mut c = sprite.color.to_srgba();
        c.alpha = remaining;
        sprite.color = c.into();
    }
}
