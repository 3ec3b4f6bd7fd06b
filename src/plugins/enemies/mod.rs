//! Enemies plugin: pooled bots, a timed spawn director, and chase behavior.
//!
//! # Data flow
//! ```text
//!   FixedUpdate (fixed dt)
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (A) Producer: run_spawn_director                                          │
//!│      - reads: Session, SpawnPoints, Time<Fixed>                            │
//!│      - mutates: SpawnDirector timer/phase, SpawnRng                        │
//!│      - writes: SpawnEnemyRequest message                                   │
//!│                                                                            │
//!│  (B) Consumer: allocate_enemies_from_pool                                  │
//!│      - reads: SpawnEnemyRequest messages                                   │
//!│      - mutates: EnemyPool (idle -> outstanding)                            │
//!│      - mutates: EnemyState, Transform, Velocity, Visibility, Layers        │
//!│                                                                            │
//!│  (C) chase_player                                                          │
//!│      - reads: Session, Player Transform                                    │
//!│      - mutates: Chasing enemies' rotation + LinearVelocity                 │
//!└────────────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   FixedPostUpdate (fixed dt)
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (D) Physics emits CollisionStart messages (Avian)                         │
//!│                                                                            │
//!│  (E) process_player_contacts                                               │
//!│      - mutates: EnemyState -> PendingReturn, Session liveness              │
//!│      - writes: PlayerDied (first contact only)                             │
//!│                                                                            │
//!│  (F) return_to_pool_commit                                                 │
//!│      - mutates: EnemyPool (outstanding -> idle), idle invariants           │
//!└────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only the allocator, the commit, and the pre-warm touch `EnemyPool`.
//! When the pool runs dry the allocator drops the request.

pub mod allocator;
pub mod chase;
pub mod commit;
pub mod components;
pub mod contact;
pub mod director;
pub mod errors;
pub mod messages;
pub mod pool;

use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;

pub use components::{Enemy, EnemyEntity, EnemyState, PooledEnemy};
pub use errors::PoolError;

pub fn plugin(app: &mut App) {
    let tunables = app.world().resource::<Tunables>().clone();

    app.insert_resource(pool::EnemyPool::new(tunables.enemy_pool_capacity))
        .insert_resource(director::SpawnDirector::new(tunables.spawn_interval()))
        .insert_resource(director::SpawnRng::seeded(tunables.spawn_seed))
        .add_message::<messages::SpawnEnemyRequest>();

    app.add_systems(
        OnEnter(GameState::InGame),
        (pool::init_enemy_pool, director::restart_director),
    );

    app.add_systems(
        FixedUpdate,
        (
            director::run_spawn_director,
            allocator::allocate_enemies_from_pool,
            chase::chase_player,
        )
            .chain()
            .run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        FixedPostUpdate,
        (contact::process_player_contacts, commit::return_to_pool_commit)
            .chain()
            .after(CollisionEventSystems)
            .run_if(in_state(GameState::InGame)),
    );
}
