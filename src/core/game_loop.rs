//! Shared game loop trait for the session and the simulator.
//!
//! Both drive the same engine functions; the session adds autosave and
//! stats on top, the simulator runs thousands of ticks for balancing.

use super::error::EngineResult;
use super::game_logic::{apply_click, production_tick, ClickOutcome};
use super::game_state::GameState;
use crate::achievements::AchievementId;
use crate::events::SpecialEventId;
use crate::prestige::{perform_prestige, PrestigeOutcome};
use crate::upgrades::{purchase, PurchaseOutcome, UpgradeId};

/// Result of one production tick - captures everything that happened.
///
/// Lets the presentation layer react to engine events without reading
/// the state diff itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickResult {
    /// Resource produced this tick
    pub resource_gained: f64,
    /// Events whose window opened since the previous tick
    pub events_started: Vec<SpecialEventId>,
    /// Achievements unlocked this tick
    pub new_achievements: Vec<AchievementId>,
    /// Can prestige now
    pub can_prestige: bool,
    /// An autosave was written this tick
    pub autosaved: bool,
    /// An autosave was attempted and failed (retried next tick)
    pub save_failed: bool,
}

/// Core game loop trait.
///
/// Every method takes the caller's clock so runs are reproducible.
pub trait GameLoop {
    /// Execute one production tick. Returns what happened.
    fn tick(&mut self, now: i64) -> TickResult;

    /// One manual tap.
    fn click(&mut self, now: i64) -> ClickOutcome;

    /// Buy one level of an upgrade.
    fn purchase(&mut self, id: UpgradeId, now: i64) -> EngineResult<PurchaseOutcome>;

    /// Perform prestige reset.
    fn prestige(&mut self, now: i64) -> EngineResult<PrestigeOutcome>;

    /// Get current game state (read-only).
    fn state(&self) -> &GameState;

    /// Check if can prestige.
    fn can_prestige(&self) -> bool;
}

impl GameLoop for GameState {
    fn tick(&mut self, now: i64) -> TickResult {
        production_tick(self, now)
    }

    fn click(&mut self, now: i64) -> ClickOutcome {
        apply_click(self, now)
    }

    fn purchase(&mut self, id: UpgradeId, now: i64) -> EngineResult<PurchaseOutcome> {
        purchase(self, id, now)
    }

    fn prestige(&mut self, now: i64) -> EngineResult<PrestigeOutcome> {
        perform_prestige(self, now)
    }

    fn state(&self) -> &GameState {
        self
    }

    fn can_prestige(&self) -> bool {
        crate::prestige::can_prestige(self)
    }
}
