//! Tunable gameplay constants.

use std::time::Duration;

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub player_speed: f32,
    pub enemy_speed: f32,
    /// Seconds between spawn ticks.
    pub spawn_interval_secs: f32,
    pub enemy_pool_capacity: usize,
    pub spawn_seed: u64,
    pub death_burst_shards: usize,
}

const MIN_SPAWN_INTERVAL_SECS: f32 = 0.001;
const MAX_SPAWN_INTERVAL_SECS: f32 = 3600.0;
const DEFAULT_SPAWN_INTERVAL_SECS: f32 = 3.0;

impl Tunables {
    /// Spawn interval clamped to [1ms, 1h]; a NaN interval falls back to the default.
    pub fn spawn_interval(&self) -> Duration {
        let secs = self
            .spawn_interval_secs
            .clamp(MIN_SPAWN_INTERVAL_SECS, MAX_SPAWN_INTERVAL_SECS);
        Duration::try_from_secs_f32(secs)
            .unwrap_or(Duration::from_secs_f32(DEFAULT_SPAWN_INTERVAL_SECS))
    }
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            player_speed: 200.0,
            enemy_speed: 100.0,
            spawn_interval_secs: DEFAULT_SPAWN_INTERVAL_SECS,
            enemy_pool_capacity: 11,
            spawn_seed: 0x5EED_B075,
            death_burst_shards: 24,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval_for(secs: f32) -> Duration {
        Tunables { spawn_interval_secs: secs, ..Tunables::default() }.spawn_interval()
    }

    #[test]
    fn spawn_interval_survives_bad_values() {
        assert_eq!(interval_for(3.0), Duration::from_secs(3));
        assert_eq!(interval_for(0.0), Duration::from_secs_f32(0.001));
        assert_eq!(interval_for(-2.0), Duration::from_secs_f32(0.001));
        assert_eq!(interval_for(f32::INFINITY), Duration::from_secs(3600));
        assert_eq!(interval_for(f32::MAX), Duration::from_secs(3600));
        assert_eq!(interval_for(f32::NEG_INFINITY), Duration::from_secs_f32(0.001));
        assert_eq!(interval_for(f32::NAN), Duration::from_secs(3));
    }
}
