use crate::achievements::AchievementId;
use crate::core::constants::{BASE_CLICK_POWER, PRESTIGE_REQUIREMENT_GROWTH};
use crate::core::error::{EngineError, EngineResult};
use crate::core::game_logic::settle;
use crate::core::game_state::{fresh_upgrades, GameState};
use crate::events::{multiplier_for, EventCategory};

/// Result of a successful prestige.
#[derive(Debug, Clone, PartialEq)]
pub struct PrestigeOutcome {
    pub new_level: u32,
    /// Balance given up by the reset.
    pub resource_spent: f64,
    pub multiplier_gained: f64,
    pub new_multiplier: f64,
    pub next_requirement: f64,
    pub new_achievements: Vec<AchievementId>,
}

/// Checks if the player can prestige
pub fn can_prestige(state: &GameState) -> bool {
    state.resource >= state.prestige.resource_required
}

/// Multiplier increment before event scaling:
/// `floor(log10(resource / required)) + 1`.
///
/// One point at the threshold, one more for every further factor of ten.
pub fn prestige_bonus(resource: f64, required: f64) -> f64 {
    if required <= 0.0 || resource < required {
        return 0.0;
    }
    (resource / required).log10().floor() + 1.0
}

/// Fraction of the way to the next prestige (0.0 - 1.0), for progress bars.
pub fn prestige_progress(state: &GameState) -> f64 {
    if state.prestige.resource_required <= 0.0 {
        return 1.0;
    }
    (state.resource / state.prestige.resource_required).clamp(0.0, 1.0)
}

/// Performs a prestige: resets the run in exchange for a permanent
/// multiplier increase.
///
/// Resets the balance, lifetime counters and every upgrade level.
/// Achievements, daily rewards and the event schedule are kept. When
/// ineligible this returns [`EngineError::PrestigeNotEligible`] and changes
/// nothing.
pub fn perform_prestige(state: &mut GameState, now: i64) -> EngineResult<PrestigeOutcome> {
    if !can_prestige(state) {
        return Err(EngineError::PrestigeNotEligible {
            required: state.prestige.resource_required,
            available: state.resource,
        });
    }

    let event_multiplier = multiplier_for(&state.special_events, EventCategory::Prestige, now);
    let multiplier_gained =
        prestige_bonus(state.resource, state.prestige.resource_required) * event_multiplier;
    let resource_spent = state.resource;

    // Reset the run
    state.resource = 0.0;
    state.resource_per_second = 0.0;
    state.resource_per_click = BASE_CLICK_POWER;
    state.total_resource_earned = 0.0;
    state.total_clicks = 0;
    state.upgrades = fresh_upgrades();

    // Permanent progress
    state.prestige.level += 1;
    state.prestige.total_prestige += 1;
    state.prestige.multiplier += multiplier_gained;
    state.prestige.resource_required *= PRESTIGE_REQUIREMENT_GROWTH;

    log::debug!(
        "prestige {} reached, multiplier now {:.2}",
        state.prestige.level,
        state.prestige.multiplier
    );

    let settled = settle(state, now);
    Ok(PrestigeOutcome {
        new_level: state.prestige.level,
        resource_spent,
        multiplier_gained,
        new_multiplier: state.prestige.multiplier,
        next_requirement: state.prestige.resource_required,
        new_achievements: settled.new_achievements,
    })
}
