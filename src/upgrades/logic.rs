//! Upgrade pricing and purchase.

use super::data::get_upgrade_def;
use super::types::{PurchaseOutcome, UpgradeId};
use crate::core::constants::UPGRADE_COST_GROWTH;
use crate::core::error::{EngineError, EngineResult};
use crate::core::game_logic::settle;
use crate::core::game_state::GameState;
use crate::events::{multiplier_for, EventCategory};

/// Undiscounted price of the next level: `floor(base_cost * 1.15^level)`.
pub fn base_cost_at_level(base_cost: f64, level: u32) -> f64 {
    (base_cost * UPGRADE_COST_GROWTH.powi(level as i32)).floor()
}

/// Price of the next level of `id` at time `now`.
///
/// Active "upgrades" events store a price divisor, so a sale with
/// multiplier 2.0 halves the price.
pub fn cost_of(state: &GameState, id: UpgradeId, now: i64) -> f64 {
    let def = get_upgrade_def(id);
    let base = base_cost_at_level(def.base_cost, state.upgrade_level(id));
    let divisor = multiplier_for(&state.special_events, EventCategory::Upgrades, now);
    if divisor <= 0.0 {
        return base;
    }
    (base / divisor).floor()
}

pub fn can_afford(state: &GameState, id: UpgradeId, now: i64) -> bool {
    state.resource >= cost_of(state, id, now)
}

/// The cheapest upgrade the player can buy right now, if any.
pub fn cheapest_affordable(state: &GameState, now: i64) -> Option<(UpgradeId, f64)> {
    UpgradeId::ALL
        .iter()
        .map(|&id| (id, cost_of(state, id, now)))
        .filter(|&(_, cost)| cost <= state.resource)
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

/// Buy one level of `id`.
///
/// Fails with [`EngineError::InsufficientResource`] without touching the
/// state when the balance is below the current price.
pub fn purchase(state: &mut GameState, id: UpgradeId, now: i64) -> EngineResult<PurchaseOutcome> {
    let cost = cost_of(state, id, now);
    if state.resource < cost {
        return Err(EngineError::InsufficientResource {
            upgrade: id,
            cost,
            available: state.resource,
        });
    }

    state.resource -= cost;
    let upgrade = state.upgrade_mut(id);
    upgrade.level += 1;
    let new_level = upgrade.level;

    log::debug!("purchased {:?} level {} for {:.0}", id, new_level, cost);

    let settled = settle(state, now);
    Ok(PurchaseOutcome {
        upgrade: id,
        new_level,
        cost,
        new_achievements: settled.new_achievements,
    })
}
