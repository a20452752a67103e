//! Integration test: Daily reward calendar
//!
//! Walks the 30-day calendar through real claim timings, including the
//! wait-one-more-day-per-claim pacing the claimable-day rule produces.

use idle_clicker::core::constants::DAY_MS;
use idle_clicker::daily_rewards::{
    bonus_for_day, claim_daily_reward, current_claimable_day, reward_for_day,
};
use idle_clicker::{AchievementId, EngineError, GameState};

const START: i64 = 1_750_000_000_000;
const HOUR_MS: i64 = 60 * 60 * 1000;

#[test]
fn test_reward_table() {
    assert_eq!(reward_for_day(1), 10);
    assert_eq!(reward_for_day(8), 170);
    assert_eq!(bonus_for_day(7), (reward_for_day(7) as f64 * 0.1).floor() as u64);
    for day in 1..=6 {
        assert_eq!(bonus_for_day(day), 0, "day {} has no weekly bonus", day);
    }
    // Two completed weeks double the bonus rate
    assert_eq!(bonus_for_day(14), 389);

    let state = GameState::new(START);
    assert_eq!(state.daily_rewards.len(), 30);
    assert_eq!(state.daily_rewards[6].total(), 113 + 11);
}

#[test]
fn test_claimable_day_rules() {
    assert_eq!(current_claimable_day(0, START), 1);
    assert_eq!(current_claimable_day(START - 23 * HOUR_MS, START), 0);
    assert_eq!(current_claimable_day(START - 25 * HOUR_MS, START), 2);
    assert_eq!(current_claimable_day(START - 100 * DAY_MS, START), 30);
}

#[test]
fn test_seven_claims_unlock_daily_streak() {
    let mut state = GameState::new(START);
    let mut now = START;
    let mut credited_total = 0;

    for day in 1..=7u32 {
        assert_eq!(current_claimable_day(state.last_daily_reward_claim_time, now), day);
        let outcome = claim_daily_reward(&mut state, day, now).unwrap();
        credited_total += outcome.credited;

        let streak = outcome.new_achievements.contains(&AchievementId::DailyStreak);
        assert_eq!(streak, day == 7);

        // After claiming day N the next day opens N days later
        now += day as i64 * DAY_MS;
    }

    let expected: u64 = (1..=7).map(|d| reward_for_day(d) + bonus_for_day(d)).sum();
    assert_eq!(credited_total, expected);
    assert_eq!(state.daily_rewards.iter().filter(|s| s.claimed).count(), 7);
}

#[test]
fn test_next_day_after_second_claim_is_already_claimed() {
    let mut state = GameState::new(START);
    claim_daily_reward(&mut state, 1, START).unwrap();
    claim_daily_reward(&mut state, 2, START + DAY_MS).unwrap();

    // One day later the rule points at day 2 again
    let now = START + 2 * DAY_MS;
    assert_eq!(current_claimable_day(state.last_daily_reward_claim_time, now), 2);
    let err = claim_daily_reward(&mut state, 2, now).unwrap_err();
    assert!(matches!(
        err,
        EngineError::ClaimNotAvailable {
            day: 2,
            claimable: 2
        }
    ));
    assert_eq!(state.last_daily_reward_claim_time, START + DAY_MS);
}

#[test]
fn test_rejected_claims_change_nothing() {
    let mut state = GameState::new(START);
    let before = serde_json::to_value(&state).unwrap();

    // Wrong day
    assert!(claim_daily_reward(&mut state, 2, START).is_err());
    assert!(claim_daily_reward(&mut state, 0, START).is_err());
    assert!(claim_daily_reward(&mut state, 31, START).is_err());
    assert_eq!(serde_json::to_value(&state).unwrap(), before);

    claim_daily_reward(&mut state, 1, START).unwrap();
    let after_claim = state.resource;

    // Too soon
    let err = claim_daily_reward(&mut state, 2, START + 23 * HOUR_MS).unwrap_err();
    assert!(matches!(err, EngineError::ClaimNotAvailable { claimable: 0, .. }));
    assert_eq!(state.resource, after_claim);
}

#[test]
fn test_long_absence_caps_at_day_thirty() {
    let mut state = GameState::new(START);
    claim_daily_reward(&mut state, 1, START).unwrap();

    let now = START + 365 * DAY_MS;
    let outcome = claim_daily_reward(&mut state, 30, now).unwrap();
    assert_eq!(outcome.credited, reward_for_day(30) + bonus_for_day(30));

    // Day 30 stays claimable but is spent
    let later = now + 40 * DAY_MS;
    assert!(claim_daily_reward(&mut state, 30, later).is_err());
}
