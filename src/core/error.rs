//! Engine error taxonomy.
//!
//! Every variant is recoverable. Operations that return one of these leave
//! the [`GameState`](super::game_state::GameState) exactly as it was.

use crate::upgrades::UpgradeId;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{upgrade:?} costs {cost:.0} but only {available:.0} is available")]
    InsufficientResource {
        upgrade: UpgradeId,
        cost: f64,
        available: f64,
    },
    #[error("prestige requires {required:.0} resource (have {available:.0})")]
    PrestigeNotEligible { required: f64, available: f64 },
    #[error("daily reward for day {day} is not claimable (claimable day: {claimable})")]
    ClaimNotAvailable { day: u32, claimable: u32 },
    #[error("persistence unavailable: {0}")]
    PersistenceUnavailable(#[from] io::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
