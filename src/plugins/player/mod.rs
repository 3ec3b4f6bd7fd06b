//! Player plugin.
//!
//! Pipeline:
//! - Update: sample WASD, write PlayerInput resource
//! - FixedUpdate: apply velocity to the kinematic body, update facing + locomotion
//! - PostUpdate: despawn a player killed during the fixed step
//!
//! Input uses `Option<Res<ButtonInput<KeyCode>>>` so headless apps without the input
//! plugin simply produce no movement.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, session::Session, state::GameState, tunables::Tunables};

pub const PLAYER_RADIUS: f32 = 13.0;

const IDLE_COLOR: Color = Color::srgb(0.2, 0.75, 0.9);
const RUN_COLOR: Color = Color::srgb(0.45, 0.9, 1.0);
/// Sprite stretch along the facing axis while running. The collider keeps its shape.
const RUN_STRETCH: Vec2 = Vec2::new(0.85, 1.15);

#[derive(Component, Debug, Clone, Copy)]
pub struct Player;

/// Animation-facing locomotion state.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Locomotion {
    pub running: bool,
}

/// Marker: entity is dead and will be despawned in PostUpdate, outside the fixed step.
#[derive(Component, Debug, Clone, Copy)]
pub struct PendingDespawn;

#[derive(Resource, Default, Debug)]
struct PlayerInput {
    move_axis: Vec2,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(PlayerInput::default())
        .add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(Update, gather_input)
        .add_systems(
            FixedUpdate,
            (apply_movement, update_facing).run_if(in_state(GameState::InGame)),
        )
        .add_systems(Update, animate_locomotion.run_if(in_state(GameState::InGame)))
        .add_systems(PostUpdate, despawn_dead_player);
}

fn spawn(mut commands: Commands) {
    let layers = CollisionLayers::new(Layer::Player, [Layer::World, Layer::Enemy]);

    commands.spawn((
        Name::new("Player"),
        Player,
        Locomotion::default(),
        Sprite {
            color: IDLE_COLOR,
            custom_size: Some(Vec2::splat(PLAYER_RADIUS * 2.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 1.0),
        RigidBody::Kinematic,
        Collider::circle(PLAYER_RADIUS),
        layers,
        LinearVelocity::ZERO,
        DespawnOnExit(GameState::InGame),
    ));
}

fn gather_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<PlayerInput>) {
    let Some(keys) = keys else { return; };
    let mut axis = Vec2::ZERO;

    if keys.pressed(KeyCode::KeyW) {
        axis.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) {
        axis.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyA) {
        axis.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) {
        axis.x += 1.0;
    }

    input.move_axis = axis.normalize_or_zero();
}

fn apply_movement(
    tunables: Res<Tunables>,
    session: Res<Session>,
    input: Res<PlayerInput>,
    mut q_player: Query<&mut LinearVelocity, With<Player>>,
) {
    let Ok(mut vel) = q_player.single_mut() else {
        return;
    };
    vel.0 = if session.is_player_alive() {
        input.move_axis * tunables.player_speed
    } else {
        Vec2::ZERO
    };
}

/// Face the movement direction and flag running; idle keeps the last facing.
fn update_facing(
    input: Res<PlayerInput>,
    mut q_player: Query<(&mut Transform, &mut Locomotion), With<Player>>,
) {
    let Ok((mut tf, mut loco)) = q_player.single_mut() else {
        return;
    };

    let running = input.move_axis != Vec2::ZERO;
    if loco.running != running {
        loco.running = running;
    }
    if running {
        tf.rotation = Quat::from_rotation_z(Vec2::Y.angle_to(input.move_axis));
    }
}

/// Running brightens the sprite and stretches it along the facing axis.
fn animate_locomotion(mut q_player: Query<(&Locomotion, &mut Sprite), With<Player>>) {
    for (loco, mut sprite) in &mut q_player {
        let (color, stretch) = if loco.running {
            (RUN_COLOR, RUN_STRETCH)
        } else {
            (IDLE_COLOR, Vec2::ONE)
        };
        sprite.color = color;
        sprite.custom_size = Some(Vec2::splat(PLAYER_RADIUS * 2.0) * stretch);
    }
}

fn despawn_dead_player(mut commands: Commands, q: Query<Entity, (With<Player>, With<PendingDespawn>)>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}

#[cfg(test)]
mod tests;
