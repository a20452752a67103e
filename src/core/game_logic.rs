//! Resource ledger: clicks, passive production and derived rates.

use super::constants::*;
use super::game_loop::TickResult;
use super::game_state::GameState;
use crate::achievements::{check_achievements, AchievementId};
use crate::events::{multiplier_for, refresh_event_status, EventCategory, SpecialEventId};
use crate::prestige::can_prestige;
use crate::upgrades::{cost_of, get_upgrade_def, UpgradeId};

/// Result of a single tap.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickOutcome {
    pub resource_gained: f64,
    pub new_achievements: Vec<AchievementId>,
}

/// What the post-mutation step changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settled {
    pub events_started: Vec<SpecialEventId>,
    pub new_achievements: Vec<AchievementId>,
}

/// `floor((1 + level * unit_effect) * prestige_multiplier)`
pub fn click_power(click_level: u32, prestige_multiplier: f64) -> f64 {
    ((BASE_CLICK_POWER + click_level as f64 * CLICK_POWER_UNIT_EFFECT) * prestige_multiplier)
        .floor()
}

/// Resource per second from every producer upgrade, before any
/// event multiplier.
pub fn base_production(state: &GameState) -> f64 {
    UpgradeId::ALL
        .iter()
        .filter(|id| !id.is_click_upgrade())
        .map(|&id| state.upgrade_level(id) as f64 * get_upgrade_def(id).base_effect)
        .sum::<f64>()
        * state.prestige.multiplier
}

/// Recompute every derived field from upgrade levels, the prestige
/// multiplier and the events active at `now`. Idempotent.
pub fn recompute_derived_rates(state: &mut GameState, now: i64) {
    let clicking = multiplier_for(&state.special_events, EventCategory::Clicking, now);
    let production = multiplier_for(&state.special_events, EventCategory::Production, now);

    let click_level = state.upgrade_level(UpgradeId::ClickPower);
    state.resource_per_click = click_power(click_level, state.prestige.multiplier * clicking);
    state.resource_per_second = base_production(state) * production;

    for id in UpgradeId::ALL {
        let cost = cost_of(state, id, now);
        state.upgrade_mut(id).cost = cost;
    }
}

/// Post-mutation step: refresh event flags, recompute rates, then
/// unlock any newly satisfied achievements.
pub fn settle(state: &mut GameState, now: i64) -> Settled {
    let events_started = refresh_event_status(&mut state.special_events, now);
    recompute_derived_rates(state, now);
    let new_achievements = check_achievements(state, now);
    Settled {
        events_started,
        new_achievements,
    }
}

/// Credit one tap at the current click rate.
pub fn apply_click(state: &mut GameState, now: i64) -> ClickOutcome {
    let gained = state.resource_per_click;
    state.resource += gained;
    state.total_resource_earned += gained;
    state.total_clicks += 1;

    let settled = settle(state, now);
    ClickOutcome {
        resource_gained: gained,
        new_achievements: settled.new_achievements,
    }
}

/// Credit `elapsed_seconds` of passive production. Pure ledger update:
/// no rate recomputation and no achievement checks.
pub fn apply_tick(state: &mut GameState, elapsed_seconds: f64) -> f64 {
    if !elapsed_seconds.is_finite() || elapsed_seconds <= 0.0 {
        return 0.0;
    }
    let gained = state.resource_per_second * elapsed_seconds;
    state.resource += gained;
    state.total_resource_earned += gained;
    gained
}

/// One second of the live production timer.
pub fn production_tick(state: &mut GameState, now: i64) -> TickResult {
    let resource_gained = apply_tick(state, PRODUCTION_TICK_SECONDS);
    let settled = settle(state, now);
    TickResult {
        resource_gained,
        events_started: settled.events_started,
        new_achievements: settled.new_achievements,
        can_prestige: can_prestige(state),
        ..TickResult::default()
    }
}
