mod common;

use bevy::prelude::*;
use bot_survival::common::session::Session;
use bot_survival::common::state::GameState;
use bot_survival::common::tunables::Tunables;
use bot_survival::plugins::enemies::director::{DirectorPhase, SpawnDirector};
use bot_survival::plugins::enemies::pool::EnemyPool;
use bot_survival::plugins::enemies::{EnemyState, PooledEnemy};
use bot_survival::plugins::player::Player;
use bot_survival::plugins::world::SpawnPoints;

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();

    for _ in 0..3 {
        app.update();
    }
}

#[test]
fn entering_the_game_prewarms_the_pool() {
    let mut app = common::app_headless();
    app.update();

    let capacity = app.world().resource::<Tunables>().enemy_pool_capacity;
    let pool = app.world().resource::<EnemyPool>();
    assert_eq!(pool.capacity(), capacity);
    assert_eq!(pool.idle_len(), capacity);

    let idle = app
        .world_mut()
        .query_filtered::<&EnemyState, With<PooledEnemy>>()
        .iter(app.world())
        .filter(|s| **s == EnemyState::Idle)
        .count();
    assert_eq!(idle, capacity);

    let players = app.world_mut().query::<&Player>().iter(app.world()).count();
    assert_eq!(players, 1);

    assert!(!app.world().resource::<SpawnPoints>().is_empty());
    assert!(app.world().resource::<Session>().is_player_alive());
}

#[test]
fn restart_rebuilds_the_session() {
    let mut app = common::app_headless();
    app.update();

    // Simulate a finished run.
    app.world_mut().resource_mut::<Session>().mark_player_dead();
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Restarting);

    app.update(); // -> Restarting, InGame-scoped entities despawned
    app.update(); // -> InGame again

    assert_eq!(*app.world().resource::<State<GameState>>().get(), GameState::InGame);
    assert!(app.world().resource::<Session>().is_player_alive());
    assert_eq!(app.world().resource::<SpawnDirector>().phase(), DirectorPhase::Running);

    // Old pooled enemies are gone; exactly one fresh pool exists.
    let capacity = app.world().resource::<Tunables>().enemy_pool_capacity;
    let pooled = app.world_mut().query::<&PooledEnemy>().iter(app.world()).count();
    assert_eq!(pooled, capacity);
    assert_eq!(app.world().resource::<EnemyPool>().allocated(), capacity);

    let players = app.world_mut().query::<&Player>().iter(app.world()).count();
    assert_eq!(players, 1);
}
