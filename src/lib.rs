//! Idle Clicker - economy engine for an incremental clicker game.
//!
//! The engine is a set of deterministic functions over [`GameState`] that
//! take the current time explicitly; [`GameSession`] owns the state, reads
//! the clock and talks to a [`PersistenceGateway`].

pub mod achievements;
pub mod core;
pub mod daily_rewards;
pub mod events;
pub mod prestige;
pub mod simulator;
pub mod stats;
pub mod upgrades;
pub mod utils;

pub use crate::core::{
    current_time_ms, Action, ActionOutcome, EngineError, EngineResult, GameLoop, GameSession,
    GameState, OfflineReport, PrestigeData, TickResult,
};
pub use achievements::{AchievementCategory, AchievementId};
pub use daily_rewards::{can_claim_daily_reward, claim_daily_reward, current_claimable_day};
pub use events::{EventCategory, SpecialEvent, SpecialEventId};
pub use prestige::{can_prestige, perform_prestige, PrestigeOutcome};
pub use stats::PlayStats;
pub use upgrades::{PurchaseOutcome, UpgradeId};
pub use utils::{MemoryStore, PersistenceGateway, SaveManager};
