//! Game session: the single writer of a [`GameState`].
//!
//! Every mutation goes through `&mut self`, so user actions, the production
//! timer and the autosave can never interleave. Hosts that need to reach
//! the session from several threads wrap it in `Arc<Mutex<_>>`.

use super::constants::{AUTOSAVE_INTERVAL_SECONDS, MS_PER_SECOND};
use super::error::EngineResult;
use super::game_logic::{apply_click, production_tick, ClickOutcome};
use super::game_loop::{GameLoop, TickResult};
use super::game_state::GameState;
use super::offline::{process_offline_progress, OfflineReport};
use crate::achievements::{unlocked_achievements, AchievementDef, AchievementId};
use crate::daily_rewards::{claim_daily_reward, current_claimable_day, ClaimOutcome};
use crate::events::{active_events, refresh_event_status, SpecialEvent};
use crate::prestige::{can_prestige, perform_prestige, PrestigeOutcome};
use crate::stats::PlayStats;
use crate::upgrades::{purchase, PurchaseOutcome, UpgradeId};
use crate::utils::persistence::{decode_state, encode_state, MemoryStore, PersistenceGateway};
use crate::utils::save_manager::SaveManager;

/// Wall-clock time in milliseconds since the Unix epoch.
pub fn current_time_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// A player command, applied atomically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Click,
    Purchase(UpgradeId),
    ClaimDailyReward(u32),
    Prestige,
    Tick,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Clicked(ClickOutcome),
    Purchased(PurchaseOutcome),
    Claimed(ClaimOutcome),
    Prestiged(PrestigeOutcome),
    Ticked(TickResult),
}

impl ActionOutcome {
    pub fn new_achievements(&self) -> &[AchievementId] {
        match self {
            ActionOutcome::Clicked(o) => &o.new_achievements,
            ActionOutcome::Purchased(o) => &o.new_achievements,
            ActionOutcome::Claimed(o) => &o.new_achievements,
            ActionOutcome::Prestiged(o) => &o.new_achievements,
            ActionOutcome::Ticked(o) => &o.new_achievements,
        }
    }

    /// Resource the action itself added (not counting achievement rewards).
    pub fn credited(&self) -> f64 {
        match self {
            ActionOutcome::Clicked(o) => o.resource_gained,
            ActionOutcome::Claimed(o) => o.credited as f64,
            ActionOutcome::Ticked(o) => o.resource_gained,
            ActionOutcome::Purchased(_) | ActionOutcome::Prestiged(_) => 0.0,
        }
    }
}

pub struct GameSession<G: PersistenceGateway> {
    state: GameState,
    gateway: G,
    stats: PlayStats,
    last_autosave: i64,
    offline_report: Option<OfflineReport>,
}

impl GameSession<Box<dyn PersistenceGateway>> {
    /// Opens the platform save file. When no save location is available
    /// the game still starts, backed by an in-memory store.
    pub fn open(now: i64) -> Self {
        let gateway: Box<dyn PersistenceGateway> = match SaveManager::new() {
            Ok(manager) => Box::new(manager),
            Err(e) => {
                log::warn!(
                    "save location unavailable, progress will not persist: {}",
                    e
                );
                Box::new(MemoryStore::new())
            }
        };
        Self::load(gateway, now)
    }
}

impl<G: PersistenceGateway> GameSession<G> {
    /// Starts a fresh game without reading the gateway.
    pub fn new_game(gateway: G, now: i64) -> Self {
        log::info!("starting a new game");
        Self::from_state(GameState::new(now), gateway, now, None)
    }

    /// Restores the saved game, falling back to a new game when the gateway
    /// is empty, unreadable, or holds a malformed blob. Offline production
    /// is credited once here.
    pub fn load(gateway: G, now: i64) -> Self {
        let blob = match gateway.load() {
            Ok(blob) => blob,
            Err(e) => {
                log::warn!("could not read save, starting fresh: {}", e);
                None
            }
        };

        let Some(mut state) = blob.as_deref().and_then(decode_state) else {
            return Self::new_game(gateway, now);
        };

        state.repair(now);
        let report = process_offline_progress(&mut state, now);
        refresh_event_status(&mut state.special_events, now);
        log::info!(
            "loaded save: {:.0} resource, prestige level {}",
            state.resource,
            state.prestige.level
        );
        Self::from_state(state, gateway, now, Some(report))
    }

    fn from_state(
        mut state: GameState,
        gateway: G,
        now: i64,
        offline_report: Option<OfflineReport>,
    ) -> Self {
        refresh_event_status(&mut state.special_events, now);
        let mut stats = PlayStats::new(now);
        stats.update_highest(state.resource_per_second, state.resource_per_click);
        Self {
            state,
            gateway,
            stats,
            last_autosave: now,
            offline_report,
        }
    }

    /// Apply one action and return what it did. An `Err` leaves the state
    /// untouched.
    pub fn dispatch(&mut self, action: Action, now: i64) -> EngineResult<ActionOutcome> {
        let outcome = match action {
            Action::Click => ActionOutcome::Clicked(self.click(now)),
            Action::Purchase(id) => ActionOutcome::Purchased(self.purchase(id, now)?),
            Action::ClaimDailyReward(day) => ActionOutcome::Claimed(self.claim_daily_reward(day, now)?),
            Action::Prestige => ActionOutcome::Prestiged(self.prestige(now)?),
            Action::Tick => ActionOutcome::Ticked(self.tick(now)),
        };
        Ok(outcome)
    }

    pub fn claim_daily_reward(&mut self, day: u32, now: i64) -> EngineResult<ClaimOutcome> {
        let outcome = claim_daily_reward(&mut self.state, day, now)?;
        self.stats.record_daily_reward(outcome.credited as f64);
        self.record_common(&outcome.new_achievements);
        Ok(outcome)
    }

    /// Serialize the current state and hand it to the gateway.
    ///
    /// `lastSaveTime` in memory only moves once the gateway accepted the
    /// blob; a failure leaves the state exactly as it was.
    pub fn save(&mut self, now: i64) -> EngineResult<()> {
        let mut snapshot = self.state.clone();
        snapshot.last_save_time = now;
        let blob = encode_state(&snapshot)?;
        self.gateway.save(&blob)?;
        self.state.last_save_time = now;
        log::debug!("saved at {}", now);
        Ok(())
    }

    fn autosave_due(&self, now: i64) -> bool {
        now - self.last_autosave >= AUTOSAVE_INTERVAL_SECONDS * MS_PER_SECOND
    }

    fn record_common(&mut self, new_achievements: &[AchievementId]) {
        self.stats.record_achievements(new_achievements.len());
        self.stats
            .update_highest(self.state.resource_per_second, self.state.resource_per_click);
    }

    // ── Queries ───────────────────────────────────────────────────────

    /// Owned copy of the state, safe to hand to another task.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    pub fn stats(&self) -> &PlayStats {
        &self.stats
    }

    /// Catch-up applied when this session was loaded, if any.
    pub fn offline_report(&self) -> Option<&OfflineReport> {
        self.offline_report.as_ref()
    }

    pub fn unlocked_achievements(&self) -> Vec<&'static AchievementDef> {
        unlocked_achievements(&self.state)
    }

    pub fn active_events(&self, now: i64) -> Vec<&SpecialEvent> {
        active_events(&self.state.special_events, now)
    }

    /// Calendar day claimable at `now`, or 0 if none.
    pub fn claimable_day(&self, now: i64) -> u32 {
        current_claimable_day(self.state.last_daily_reward_claim_time, now)
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }
}

impl<G: PersistenceGateway> GameLoop for GameSession<G> {
    /// One second of production, then the autosave if it is due. A failed
    /// autosave is logged and retried at the next interval.
    fn tick(&mut self, now: i64) -> TickResult {
        let mut result = production_tick(&mut self.state, now);
        self.stats.record_production(result.resource_gained);
        self.stats.record_events_started(result.events_started.len());
        self.record_common(&result.new_achievements);

        if self.autosave_due(now) {
            self.last_autosave = now;
            match self.save(now) {
                Ok(()) => result.autosaved = true,
                Err(e) => {
                    log::warn!("autosave failed, will retry: {}", e);
                    result.save_failed = true;
                }
            }
        }
        result
    }

    fn click(&mut self, now: i64) -> ClickOutcome {
        let outcome = apply_click(&mut self.state, now);
        self.stats.record_click(outcome.resource_gained);
        self.record_common(&outcome.new_achievements);
        outcome
    }

    fn purchase(&mut self, id: UpgradeId, now: i64) -> EngineResult<PurchaseOutcome> {
        let outcome = purchase(&mut self.state, id, now)?;
        self.stats.record_purchase();
        self.record_common(&outcome.new_achievements);
        Ok(outcome)
    }

    fn prestige(&mut self, now: i64) -> EngineResult<PrestigeOutcome> {
        let outcome = perform_prestige(&mut self.state, now)?;
        self.stats.record_prestige(now);
        self.record_common(&outcome.new_achievements);
        log::info!("prestiged to level {}", outcome.new_level);
        Ok(outcome)
    }

    fn state(&self) -> &GameState {
        &self.state
    }

    fn can_prestige(&self) -> bool {
        can_prestige(&self.state)
    }
}
