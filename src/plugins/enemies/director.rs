//! Spawn director: a repeating timer ticked from the fixed schedule.
//!
//! The first spawn is due one full interval after (re)start, so a run of length `D`
//! yields `floor(D / interval)` spawn requests. Once the director observes a dead
//! player it stops for good; only `restart()` (session re-entry) re-arms it.

use std::time::Duration;

use bevy::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::common::session::Session;
use crate::plugins::world::SpawnPoints;

use super::messages::SpawnEnemyRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectorPhase {
    Running,
    Stopped,
}

#[derive(Resource, Debug)]
pub struct SpawnDirector {
    timer: Timer,
    phase: DirectorPhase,
}

impl SpawnDirector {
    pub fn new(interval: Duration) -> Self {
        let interval = interval.max(Duration::from_millis(1));
        Self {
            timer: Timer::new(interval, TimerMode::Repeating),
            phase: DirectorPhase::Running,
        }
    }

    #[inline]
    pub fn phase(&self) -> DirectorPhase {
        self.phase
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.timer.duration()
    }

    pub fn restart(&mut self) {
        self.timer.reset();
        self.phase = DirectorPhase::Running;
    }

    /// Advance by one step. Returns how many spawns fell due during it.
    pub fn advance(&mut self, dt: Duration, player_alive: bool) -> u32 {
        if self.phase == DirectorPhase::Stopped {
            return 0;
        }
        if !player_alive {
            self.phase = DirectorPhase::Stopped;
            info!("spawn director stopped: player is dead");
            return 0;
        }
        self.timer.tick(dt);
        self.timer.times_finished_this_tick()
    }
}

/// Seeded RNG used for spawn point selection.
#[derive(Resource, Debug)]
pub struct SpawnRng(pub SmallRng);

impl SpawnRng {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

/// Uniformly pick one spawn point. `None` when the set is empty.
pub fn pick_spawn_point<R: Rng + ?Sized>(points: &SpawnPoints, rng: &mut R) -> Option<Vec2> {
    if points.is_empty() {
        return None;
    }
    points.get(rng.gen_range(0..points.len()))
}

pub fn restart_director(mut director: ResMut<SpawnDirector>) {
    director.restart();
}

/// Producer: turns due timer ticks into spawn requests. Never touches the pool.
pub fn run_spawn_director(
    time: Res<Time<Fixed>>,
    session: Res<Session>,
    points: Res<SpawnPoints>,
    mut director: ResMut<SpawnDirector>,
    mut rng: ResMut<SpawnRng>,
    mut writer: MessageWriter<SpawnEnemyRequest>,
) {
    let due = director.advance(time.delta(), session.is_player_alive());

    for _ in 0..due {
        let Some(pos) = pick_spawn_point(&points, &mut rng.0) else {
            warn!("spawn tick skipped: no spawn points configured");
            return;
        };
        debug!("spawn requested at {pos:?}");
        writer.write(SpawnEnemyRequest { pos });
    }
}
