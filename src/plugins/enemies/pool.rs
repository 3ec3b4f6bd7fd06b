//! Fixed-capacity enemy pool.
//!
//! Idle actors wait in a FIFO queue; acquired actors are tracked by identity so a
//! release must hand back the exact entity that was checked out.
//! `idle + outstanding == allocated` holds after every operation.

use std::collections::VecDeque;

use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::Occluder2d;

use crate::common::layers::Layer;
use crate::common::state::GameState;

use super::components::{Enemy, EnemyEntity, EnemyState, PooledEnemy};
use super::errors::PoolError;

pub const ENEMY_RADIUS: f32 = 14.0;

#[derive(Resource, Debug)]
pub struct EnemyPool {
    idle: VecDeque<EnemyEntity>,
    outstanding: HashSet<Entity>,
    capacity: usize,
}

impl EnemyPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            idle: VecDeque::with_capacity(capacity),
            outstanding: HashSet::default(),
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn idle_len(&self) -> usize {
        self.idle.len()
    }

    #[inline]
    pub fn outstanding_len(&self) -> usize {
        self.outstanding.len()
    }

    #[inline]
    pub fn allocated(&self) -> usize {
        self.idle.len() + self.outstanding.len()
    }

    #[inline]
    pub fn is_outstanding(&self, e: Entity) -> bool {
        self.outstanding.contains(&e)
    }

    /// Forget every handle. Used before a fresh pre-warm.
    pub fn reset(&mut self) {
        self.idle.clear();
        self.outstanding.clear();
    }

    /// Add a freshly spawned actor to the idle queue.
    pub fn register(&mut self, e: EnemyEntity) -> Result<(), PoolError> {
        if self.allocated() >= self.capacity {
            return Err(PoolError::Full { capacity: self.capacity });
        }
        self.idle.push_back(e);
        Ok(())
    }

    /// Check out the oldest idle actor.
    pub fn acquire(&mut self) -> Result<EnemyEntity, PoolError> {
        let e = self
            .idle
            .pop_front()
            .ok_or(PoolError::Exhausted { capacity: self.capacity })?;
        self.outstanding.insert(e.0);
        Ok(e)
    }

    /// Return a specific checked-out actor to the idle queue.
    pub fn release(&mut self, e: EnemyEntity) -> Result<(), PoolError> {
        if !self.outstanding.remove(&e.0) {
            return Err(PoolError::NotOutstanding(e.0));
        }
        self.idle.push_back(e);
        Ok(())
    }
}

#[inline]
pub fn active_enemy_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Enemy, [Layer::World, Layer::Player, Layer::Enemy])
}

/// Idle actors keep their physics components but collide with nothing.
#[inline]
pub fn inactive_enemy_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Enemy, [] as [Layer; 0])
}

/// Put a checked-out enemy into play at `pos`, facing up and at rest.
pub fn wake_enemy(
    state: &mut EnemyState,
    tf: &mut Transform,
    vel: &mut LinearVelocity,
    vis: &mut Visibility,
    layers: &mut CollisionLayers,
    pos: Vec2,
) {
    *state = EnemyState::Chasing;
    tf.translation = pos.extend(1.0);
    tf.rotation = Quat::IDENTITY;
    vel.0 = Vec2::ZERO;
    *vis = Visibility::Visible;
    *layers = active_enemy_layers();
}

/// Take an enemy out of play: idle, hidden, at rest, colliding with nothing.
pub fn park_enemy(
    state: &mut EnemyState,
    vis: &mut Visibility,
    vel: &mut LinearVelocity,
    layers: &mut CollisionLayers,
) {
    *state = EnemyState::Idle;
    *vis = Visibility::Hidden;
    vel.0 = Vec2::ZERO;
    *layers = inactive_enemy_layers();
}

/// Pre-spawn `capacity` idle enemies and register them with the pool.
pub fn init_enemy_pool(mut commands: Commands, mut pool: ResMut<EnemyPool>) {
    pool.reset();

    for i in 0..pool.capacity() {
        let e = commands
            .spawn((
                Name::new(format!("Enemy{i}(Pooled)")),
                Enemy,
                PooledEnemy,
                EnemyState::Idle,
                Sprite {
                    color: Color::srgb(0.9, 0.25, 0.25),
                    custom_size: Some(Vec2::splat(ENEMY_RADIUS * 2.0)),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, 1.0),
                Visibility::Hidden,
                RigidBody::Dynamic,
                Collider::circle(ENEMY_RADIUS),
                LockedAxes::ROTATION_LOCKED,
                inactive_enemy_layers(),
                LinearVelocity::ZERO,
                CollisionEventsEnabled,
                Occluder2d::circle(ENEMY_RADIUS),
                DespawnOnExit(GameState::InGame),
            ))
            .id();

        if let Err(err) = pool.register(EnemyEntity(e)) {
            warn!("pre-warm stopped early: {err}");
            break;
        }
    }

    debug!("enemy pool pre-warmed with {} actors", pool.allocated());
}
