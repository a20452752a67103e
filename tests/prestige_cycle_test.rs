//! Integration test: Complete prestige cycle
//!
//! Tests the full flow: new game → build production → prestige → verify
//! reset and the permanent multiplier carried into the next run.

use idle_clicker::core::constants::{DAY_MS, PRESTIGE_BOOST_START_MS};
use idle_clicker::core::game_logic::{apply_tick, recompute_derived_rates, settle};
use idle_clicker::prestige::{can_prestige, perform_prestige};
use idle_clicker::upgrades::{cost_of, purchase};
use idle_clicker::{AchievementId, EngineError, GameState, UpgradeId};

const NOW: i64 = 0;

/// Mine level 10 at multiplier 1 gives exactly 200/s.
fn build_mines(state: &mut GameState) {
    state.upgrade_mut(UpgradeId::Mine).level = 10;
    recompute_derived_rates(state, NOW);
}

#[test]
fn test_complete_prestige_cycle_first_prestige() {
    let mut state = GameState::new(NOW);
    assert!(!can_prestige(&state));

    build_mines(&mut state);
    assert_eq!(state.resource_per_second, 200.0);

    // 5000 seconds of production reaches the first threshold exactly
    apply_tick(&mut state, 5_000.0);
    assert_eq!(state.resource, 1_000_000.0);
    settle(&mut state, NOW);
    assert!(can_prestige(&state));
    assert!(state.achievements.contains(&AchievementId::Millionaire));

    let outcome = perform_prestige(&mut state, NOW).unwrap();

    assert_eq!(outcome.new_level, 1);
    assert_eq!(outcome.multiplier_gained, 1.0);
    assert_eq!(state.prestige.multiplier, 2.0);
    assert_eq!(state.prestige.total_prestige, 1);
    assert_eq!(state.prestige.resource_required, 10_000_000.0);

    // Run progress reset
    assert_eq!(state.total_resource_earned, 0.0);
    assert_eq!(state.total_clicks, 0);
    assert_eq!(state.resource_per_second, 0.0);
    for id in UpgradeId::ALL {
        assert_eq!(state.upgrade_level(id), 0, "{:?} should reset", id);
    }

    // Achievements survive; only First Prestige pays out after the reset
    assert!(state.achievements.contains(&AchievementId::Millionaire));
    assert_eq!(outcome.new_achievements, vec![AchievementId::FirstPrestige]);
    assert_eq!(state.resource, 5_000.0);
}

#[test]
fn test_second_run_is_faster() {
    let mut state = GameState::new(NOW);
    build_mines(&mut state);
    apply_tick(&mut state, 5_000.0);
    perform_prestige(&mut state, NOW).unwrap();

    // Same upgrades produce double after one prestige
    build_mines(&mut state);
    assert_eq!(state.resource_per_second, 400.0);
    assert_eq!(state.resource_per_click, 2.0);

    // Prices do not depend on the multiplier
    assert_eq!(cost_of(&state, UpgradeId::ClickPower, NOW), 10.0);
}

#[test]
fn test_rebuying_after_prestige_uses_base_prices() {
    let mut state = GameState::new(NOW);
    state.resource = 1_000_000.0;
    state.upgrade_mut(UpgradeId::ClickPower).level = 20;
    perform_prestige(&mut state, NOW).unwrap();

    // 5000 from First Prestige; Click Power is back to its level 0 price
    let outcome = purchase(&mut state, UpgradeId::ClickPower, NOW).unwrap();
    assert_eq!(outcome.cost, 10.0);
    assert_eq!(outcome.new_level, 1);
    assert_eq!(state.resource_per_click, 4.0); // floor((1 + 1) * 2)
}

#[test]
fn test_ineligible_prestige_changes_nothing() {
    let mut state = GameState::new(NOW);
    build_mines(&mut state);
    apply_tick(&mut state, 100.0);
    let before = serde_json::to_value(&state).unwrap();

    let err = perform_prestige(&mut state, NOW).unwrap_err();
    match err {
        EngineError::PrestigeNotEligible {
            required,
            available,
        } => {
            assert_eq!(required, 1_000_000.0);
            assert_eq!(available, 20_000.0);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(serde_json::to_value(&state).unwrap(), before);
}

#[test]
fn test_prestige_boost_triples_gain() {
    let mut state = GameState::new(NOW);
    state.resource = 10_000_000.0; // ten times the requirement

    let outcome = perform_prestige(&mut state, NOW + PRESTIGE_BOOST_START_MS).unwrap();
    assert_eq!(outcome.multiplier_gained, 6.0); // (1 + 1) * 3
    assert_eq!(state.prestige.multiplier, 7.0);
}

#[test]
fn test_ten_prestiges_unlock_prestige_master() {
    let mut state = GameState::new(NOW);
    let later = NOW + 10 * DAY_MS;
    let mut required = state.prestige.resource_required;

    for level in 1..=10 {
        state.resource = required;
        let outcome = perform_prestige(&mut state, later).unwrap();
        assert_eq!(outcome.new_level, level);
        assert_eq!(state.prestige.resource_required, required * 10.0);
        required = state.prestige.resource_required;

        let unlocked_master = outcome
            .new_achievements
            .contains(&AchievementId::PrestigeMaster);
        assert_eq!(unlocked_master, level == 10);
    }

    assert_eq!(state.prestige.multiplier, 11.0);
    assert_eq!(state.prestige.total_prestige, 10);
}

#[test]
fn test_daily_rewards_and_events_untouched_by_prestige() {
    let mut state = GameState::new(NOW);
    state.daily_rewards[0].claimed = true;
    state.last_daily_reward_claim_time = 12_345;
    let events = state.special_events.clone();
    state.resource = 2_000_000.0;

    perform_prestige(&mut state, NOW).unwrap();

    assert!(state.daily_rewards[0].claimed);
    assert_eq!(state.daily_rewards.len(), 30);
    assert_eq!(state.last_daily_reward_claim_time, 12_345);
    assert_eq!(state.special_events, events);
}
