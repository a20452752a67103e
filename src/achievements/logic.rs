//! Achievement evaluation and unlocking.

use super::data::ALL_ACHIEVEMENTS;
use super::types::{AchievementCategory, AchievementDef, AchievementId, Condition, Metric};
use crate::core::game_state::GameState;
use crate::upgrades::UpgradeId;

fn metric_value(state: &GameState, metric: Metric) -> f64 {
    match metric {
        Metric::TotalClicks => state.total_clicks as f64,
        Metric::TotalResourceEarned => state.total_resource_earned,
        Metric::ResourcePerSecond => state.resource_per_second,
        Metric::PrestigeCount => state.prestige.total_prestige as f64,
        Metric::PrestigeLevel => state.prestige.level as f64,
    }
}

/// Single dispatcher for every condition kind.
pub fn condition_met(condition: &Condition, state: &GameState, now: i64) -> bool {
    match *condition {
        Condition::AtLeast(metric, threshold) => metric_value(state, metric) >= threshold,
        Condition::AnyUpgradeAtLevel(level) => state.upgrades.values().any(|u| u.level >= level),
        Condition::AllUpgradesPurchased => UpgradeId::ALL
            .iter()
            .all(|&id| state.upgrade_level(id) > 0),
        Condition::ClaimedDaysAtLeast(days) => {
            state.daily_rewards.iter().filter(|r| r.claimed).count() >= days
        }
        Condition::AnyEventActive => state.special_events.iter().any(|e| e.is_active_at(now)),
    }
}

pub fn is_unlocked(state: &GameState, id: AchievementId) -> bool {
    state.achievements.contains(&id)
}

/// Achievements whose condition holds now but which have not fired yet,
/// in catalog order. Does not modify the state.
pub fn newly_unlocked(state: &GameState, now: i64) -> Vec<AchievementId> {
    ALL_ACHIEVEMENTS
        .iter()
        .filter(|def| !is_unlocked(state, def.id) && condition_met(&def.condition, state, now))
        .map(|def| def.id)
        .collect()
}

/// Unlock an achievement and credit its reward. Returns true if newly
/// unlocked; unlocking twice is a no-op.
pub fn unlock_achievement(state: &mut GameState, id: AchievementId) -> bool {
    let Some(def) = super::data::get_achievement_def(id) else {
        return false;
    };
    if !state.achievements.insert(id) {
        return false;
    }
    state.resource += def.reward;
    log::debug!("achievement unlocked: {} (+{})", def.name, def.reward);
    true
}

/// Evaluate the whole catalog and unlock everything newly satisfied.
/// Each unlock credits its own reward.
pub fn check_achievements(state: &mut GameState, now: i64) -> Vec<AchievementId> {
    let fresh = newly_unlocked(state, now);
    for &id in &fresh {
        unlock_achievement(state, id);
    }
    fresh
}

/// Definitions of every unlocked achievement, in catalog order.
pub fn unlocked_achievements(state: &GameState) -> Vec<&'static AchievementDef> {
    ALL_ACHIEVEMENTS
        .iter()
        .filter(|def| is_unlocked(state, def.id))
        .collect()
}

/// Get unlock percentage (0.0 - 100.0).
pub fn unlock_percentage(state: &GameState) -> f32 {
    if ALL_ACHIEVEMENTS.is_empty() {
        return 0.0;
    }
    (unlocked_achievements(state).len() as f32 / ALL_ACHIEVEMENTS.len() as f32) * 100.0
}

/// Get count of unlocked/total by category.
pub fn count_by_category(state: &GameState, category: AchievementCategory) -> (usize, usize) {
    let in_category: Vec<_> = ALL_ACHIEVEMENTS
        .iter()
        .filter(|a| a.category == category)
        .collect();
    let unlocked = in_category
        .iter()
        .filter(|a| is_unlocked(state, a.id))
        .count();
    (unlocked, in_category.len())
}
