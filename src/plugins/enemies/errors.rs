use bevy::prelude::*;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    #[error("enemy pool exhausted: all {capacity} actors are in use")]
    Exhausted { capacity: usize },
    #[error("enemy pool is full: {capacity} actors already allocated")]
    Full { capacity: usize },
    #[error("entity {0} is not checked out of the enemy pool")]
    NotOutstanding(Entity),
}
