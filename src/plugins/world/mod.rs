//! World plugin: arena walls, floor, and the fixed set of enemy spawn points.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::layers::Layer;
use crate::common::state::GameState;

const TILE: i32 = 64;
const HALF_W: i32 = TILE * 16;
const HALF_H: i32 = TILE * 9;

/// Spawn points sit this far inside the walls.
const SPAWN_INSET: f32 = TILE as f32 * 1.5;

/// Ordered list of world positions where enemies may appear.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SpawnPoints(pub Vec<Vec2>);

impl SpawnPoints {
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Vec2> {
        self.0.get(index).copied()
    }

    pub fn contains(&self, pos: Vec2) -> bool {
        self.0.contains(&pos)
    }
}

impl Default for SpawnPoints {
    /// Four corners, then the four edge midpoints.
    fn default() -> Self {
        let x = HALF_W as f32 - SPAWN_INSET;
        let y = HALF_H as f32 - SPAWN_INSET;
        Self(vec![
            Vec2::new(-x, y),
            Vec2::new(x, y),
            Vec2::new(x, -y),
            Vec2::new(-x, -y),
            Vec2::new(0.0, y),
            Vec2::new(x, 0.0),
            Vec2::new(0.0, -y),
            Vec2::new(-x, 0.0),
        ])
    }
}

/// Marker on the floor decal drawn under each spawn point.
#[derive(Component, Debug, Clone, Copy)]
pub struct SpawnPad {
    pub index: usize,
}

pub fn plugin(app: &mut App) {
    app.init_resource::<SpawnPoints>();
    app.add_systems(OnEnter(GameState::InGame), (spawn_arena, spawn_floor, spawn_pads));
}

fn spawn_arena(mut commands: Commands) {
    let wall_color = Color::srgb(0.25, 0.27, 0.33);
    let thickness = 30.0;

    let wall_layers = CollisionLayers::new(Layer::World, [Layer::Player, Layer::Enemy]);

    let mut spawn_wall = |name: &str, pos: Vec3, size: Vec2| {
        commands.spawn((
            Name::new(name.to_owned()),
            Sprite {
                color: wall_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(pos),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            wall_layers,
            DespawnOnExit(GameState::InGame),
        ));
    };

    let span_x = HALF_W as f32 * 2.0 + thickness * 2.0;
    let span_y = HALF_H as f32 * 2.0;

    spawn_wall(
        "WallTop",
        Vec3::new(0.0, HALF_H as f32 + thickness * 0.5, 0.0),
        Vec2::new(span_x, thickness),
    );
    spawn_wall(
        "WallBottom",
        Vec3::new(0.0, -HALF_H as f32 - thickness * 0.5, 0.0),
        Vec2::new(span_x, thickness),
    );
    spawn_wall(
        "WallLeft",
        Vec3::new(-HALF_W as f32 - thickness * 0.5, 0.0, 0.0),
        Vec2::new(thickness, span_y),
    );
    spawn_wall(
        "WallRight",
        Vec3::new(HALF_W as f32 + thickness * 0.5, 0.0, 0.0),
        Vec2::new(thickness, span_y),
    );
}

/// Checkerboard floor from solid-color sprites, so the project needs no assets.
fn spawn_floor(mut commands: Commands) {
    (-(HALF_H / TILE)..=HALF_H / TILE)
        .flat_map(|y| (-(HALF_W / TILE)..=HALF_W / TILE).map(move |x| (x, y)))
        .for_each(|(x, y)| {
            let world_pos = Vec3::new(x as f32 * TILE as f32, y as f32 * TILE as f32, 0.0);
            let color = if (x + y) % 2 == 0 {
                Color::srgb(0.14, 0.14, 0.16)
            } else {
                Color::srgb(0.12, 0.12, 0.14)
            };

            commands.spawn((
                Sprite::from_color(color, Vec2::splat(TILE as f32)),
                Transform::from_translation(world_pos),
                DespawnOnExit(GameState::InGame),
            ));
        });
}

fn spawn_pads(mut commands: Commands, points: Res<SpawnPoints>) {
    for (index, pos) in points.0.iter().copied().enumerate() {
        commands.spawn((
            Name::new(format!("SpawnPad{index}")),
            SpawnPad { index },
            Sprite::from_color(Color::srgb(0.32, 0.12, 0.14), Vec2::splat(40.0)),
            Transform::from_translation(pos.extend(0.5)),
            DespawnOnExit(GameState::InGame),
        ));
    }
}
