use super::constants::*;
use crate::achievements::AchievementId;
use crate::daily_rewards::{generate_daily_rewards, DailyRewardSlot};
use crate::events::{create_special_events, SpecialEvent};
use crate::upgrades::{get_upgrade_def, UpgradeId, UpgradeState, ALL_UPGRADES};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Permanent progress that survives resets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrestigeData {
    pub level: u32,
    pub total_prestige: u64,
    pub multiplier: f64,
    /// Balance needed for the next reset; grows ×10 per reset.
    pub resource_required: f64,
}

impl Default for PrestigeData {
    fn default() -> Self {
        Self {
            level: 0,
            total_prestige: 0,
            multiplier: BASE_PRESTIGE_MULTIPLIER,
            resource_required: INITIAL_PRESTIGE_REQUIREMENT,
        }
    }
}

/// Main game state containing all player progress.
///
/// `resource_per_click`, `resource_per_second` and the cached upgrade costs
/// are derived; only
/// [`recompute_derived_rates`](super::game_logic::recompute_derived_rates)
/// writes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub resource: f64,
    pub resource_per_second: f64,
    pub resource_per_click: f64,
    pub total_resource_earned: f64,
    pub total_clicks: u64,
    pub upgrades: BTreeMap<UpgradeId, UpgradeState>,
    #[serde(default)]
    pub achievements: HashSet<AchievementId>,
    #[serde(default)]
    pub daily_rewards: Vec<DailyRewardSlot>,
    #[serde(default)]
    pub special_events: Vec<SpecialEvent>,
    #[serde(default)]
    pub prestige: PrestigeData,
    pub last_save_time: i64,
    #[serde(default)]
    pub last_daily_reward_claim_time: i64,
}

pub(crate) fn fresh_upgrades() -> BTreeMap<UpgradeId, UpgradeState> {
    ALL_UPGRADES
        .iter()
        .map(|def| (def.id, UpgradeState::new(def)))
        .collect()
}

impl GameState {
    /// Creates a new game. The special event schedule is anchored at
    /// `current_time` (ms).
    pub fn new(current_time: i64) -> Self {
        Self {
            resource: 0.0,
            resource_per_second: 0.0,
            resource_per_click: BASE_CLICK_POWER,
            total_resource_earned: 0.0,
            total_clicks: 0,
            upgrades: fresh_upgrades(),
            achievements: HashSet::new(),
            daily_rewards: generate_daily_rewards(),
            special_events: create_special_events(current_time),
            prestige: PrestigeData::default(),
            last_save_time: current_time,
            last_daily_reward_claim_time: 0,
        }
    }

    pub fn upgrade_level(&self, id: UpgradeId) -> u32 {
        self.upgrades.get(&id).map_or(0, |u| u.level)
    }

    /// Mutable access to an upgrade, inserting a level-0 entry if missing.
    pub fn upgrade_mut(&mut self, id: UpgradeId) -> &mut UpgradeState {
        self.upgrades
            .entry(id)
            .or_insert_with(|| UpgradeState::new(get_upgrade_def(id)))
    }

    /// Bring a state read back from storage into shape: missing upgrades
    /// and calendar slots are restored, static fields come from the
    /// catalog, and out-of-range numbers are clamped.
    pub fn repair(&mut self, current_time: i64) {
        for def in ALL_UPGRADES {
            self.upgrade_mut(def.id).base_effect = def.base_effect;
        }

        let calendar_ok = self.daily_rewards.len() == DAILY_REWARD_DAYS as usize
            && self
                .daily_rewards
                .iter()
                .enumerate()
                .all(|(i, slot)| slot.day == i as u32 + 1);
        if !calendar_ok {
            log::warn!("daily reward table malformed, regenerating");
            let claimed: HashSet<u32> = self
                .daily_rewards
                .iter()
                .filter(|slot| slot.claimed)
                .map(|slot| slot.day)
                .collect();
            self.daily_rewards = generate_daily_rewards();
            for slot in &mut self.daily_rewards {
                slot.claimed = claimed.contains(&slot.day);
            }
        }

        // Event windows are kept from the save; multipliers always come from
        // the catalog and missing events are scheduled from `current_time`.
        let saved_events = std::mem::take(&mut self.special_events);
        self.special_events = create_special_events(current_time)
            .into_iter()
            .map(|fresh| match saved_events.iter().find(|e| e.id == fresh.id) {
                Some(saved) if saved.start_time < saved.end_time => SpecialEvent {
                    multiplier: fresh.multiplier,
                    ..saved.clone()
                },
                _ => fresh,
            })
            .collect();

        self.resource = sanitize(self.resource);
        self.resource_per_second = sanitize(self.resource_per_second);
        self.total_resource_earned = sanitize(self.total_resource_earned);
        if self.prestige.multiplier.is_nan() || self.prestige.multiplier < BASE_PRESTIGE_MULTIPLIER {
            self.prestige.multiplier = BASE_PRESTIGE_MULTIPLIER;
        }
        let required = self.prestige.resource_required;
        if !required.is_finite() || required <= 0.0 {
            self.prestige.resource_required = INITIAL_PRESTIGE_REQUIREMENT
                * PRESTIGE_REQUIREMENT_GROWTH.powi(self.prestige.level as i32);
        }
        if self.last_save_time < 0 || self.last_save_time > current_time {
            log::warn!(
                "save time {} out of range, using {}",
                self.last_save_time,
                current_time
            );
            self.last_save_time = current_time;
        }
        if self.last_daily_reward_claim_time < 0 {
            self.last_daily_reward_claim_time = 0;
        }
    }
}

/// Negative, NaN and infinite balances become zero.
fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
