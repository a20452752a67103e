//! 30-day daily reward calendar.

use crate::achievements::AchievementId;
use crate::core::constants::*;
use crate::core::error::{EngineError, EngineResult};
use crate::core::game_logic::settle;
use crate::core::game_state::GameState;
use serde::{Deserialize, Serialize};

/// One day of the calendar. `claimed` only ever goes false → true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRewardSlot {
    pub day: u32,
    pub claimed: bool,
    pub reward: u64,
    pub bonus: u64,
}

impl DailyRewardSlot {
    pub fn total(&self) -> u64 {
        self.reward + self.bonus
    }
}

/// Result of a successful claim.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimOutcome {
    pub day: u32,
    pub credited: u64,
    pub new_achievements: Vec<AchievementId>,
}

/// `floor(10 * 1.5^(day-1))`
pub fn reward_for_day(day: u32) -> u64 {
    let exponent = day.saturating_sub(1) as i32;
    (DAILY_REWARD_BASE * DAILY_REWARD_GROWTH.powi(exponent)).floor() as u64
}

/// `floor(reward * 0.1 * floor(day / 7))`: zero for the first six days,
/// then scaling with completed weeks.
pub fn bonus_for_day(day: u32) -> u64 {
    let weeks = (day / DAYS_PER_WEEK) as f64;
    (reward_for_day(day) as f64 * DAILY_REWARD_WEEKLY_BONUS_RATE * weeks).floor() as u64
}

pub fn generate_daily_rewards() -> Vec<DailyRewardSlot> {
    (1..=DAILY_REWARD_DAYS)
        .map(|day| DailyRewardSlot {
            day,
            claimed: false,
            reward: reward_for_day(day),
            bonus: bonus_for_day(day),
        })
        .collect()
}

/// Which day can be claimed at `now`, or 0 if none.
///
/// Never claimed (`last_claim_time == 0`) → day 1. Otherwise
/// `min(30, whole days since last claim + 1)`, and 0 while fewer than
/// 24 hours have passed.
pub fn current_claimable_day(last_claim_time: i64, now: i64) -> u32 {
    if last_claim_time == 0 {
        return 1;
    }
    let days_since = (now - last_claim_time).div_euclid(DAY_MS);
    if days_since < 1 {
        return 0;
    }
    (days_since + 1).min(DAILY_REWARD_DAYS as i64) as u32
}

pub fn can_claim_daily_reward(last_claim_time: i64, now: i64) -> bool {
    current_claimable_day(last_claim_time, now) > 0
}

/// Claim `day`'s reward. Only the currently claimable, unclaimed day
/// succeeds; anything else returns [`EngineError::ClaimNotAvailable`] and
/// leaves the state untouched.
pub fn claim_daily_reward(state: &mut GameState, day: u32, now: i64) -> EngineResult<ClaimOutcome> {
    let claimable = current_claimable_day(state.last_daily_reward_claim_time, now);
    let not_available = EngineError::ClaimNotAvailable { day, claimable };
    if claimable == 0 || day != claimable {
        return Err(not_available);
    }
    let Some(slot) = state
        .daily_rewards
        .iter_mut()
        .find(|slot| slot.day == day && !slot.claimed)
    else {
        return Err(not_available);
    };

    slot.claimed = true;
    let credited = slot.total();
    state.resource += credited as f64;
    state.last_daily_reward_claim_time = now;

    log::debug!("claimed daily reward day {} (+{})", day, credited);

    let settled = settle(state, now);
    Ok(ClaimOutcome {
        day,
        credited,
        new_achievements: settled.new_achievements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR_MS: i64 = 60 * 60 * 1000;
    const NOW: i64 = 1_750_000_000_000;

    #[test]
    fn test_reward_table_values() {
        assert_eq!(reward_for_day(1), 10);
        assert_eq!(reward_for_day(2), 15);
        assert_eq!(reward_for_day(8), 170); // floor(10 * 1.5^7)
        assert_eq!(reward_for_day(7), 113); // floor(10 * 1.5^6)
    }

    #[test]
    fn test_bonus_only_after_full_weeks() {
        for day in 1..=6 {
            assert_eq!(bonus_for_day(day), 0, "day {day}");
        }
        assert_eq!(bonus_for_day(7), 11); // floor(113 * 0.1 * 1)
        assert_eq!(bonus_for_day(14), (reward_for_day(14) as f64 * 0.2).floor() as u64);
        assert_eq!(bonus_for_day(21), (reward_for_day(21) as f64 * 0.3).floor() as u64);
    }

    #[test]
    fn test_generate_builds_thirty_ordered_slots() {
        let table = generate_daily_rewards();
        assert_eq!(table.len(), 30);
        for (i, slot) in table.iter().enumerate() {
            assert_eq!(slot.day, i as u32 + 1);
            assert!(!slot.claimed);
            assert_eq!(slot.reward, reward_for_day(slot.day));
            assert_eq!(slot.bonus, bonus_for_day(slot.day));
        }
    }

    #[test]
    fn test_current_claimable_day() {
        assert_eq!(current_claimable_day(0, NOW), 1);
        assert_eq!(current_claimable_day(NOW - 23 * HOUR_MS, NOW), 0);
        assert_eq!(current_claimable_day(NOW - 25 * HOUR_MS, NOW), 2);
        assert_eq!(current_claimable_day(NOW - 3 * DAY_MS, NOW), 4);
        assert_eq!(current_claimable_day(NOW - 100 * DAY_MS, NOW), 30);
        // Clock moved backwards
        assert_eq!(current_claimable_day(NOW + HOUR_MS, NOW), 0);
        assert!(!can_claim_daily_reward(NOW - HOUR_MS, NOW));
        assert!(can_claim_daily_reward(0, NOW));
    }

    #[test]
    fn test_first_claim() {
        let mut state = GameState::new(NOW);
        let outcome = claim_daily_reward(&mut state, 1, NOW).unwrap();
        assert_eq!(outcome.credited, 10);
        assert!(state.daily_rewards[0].claimed);
        assert_eq!(state.last_daily_reward_claim_time, NOW);
        assert_eq!(state.resource, 10.0);
    }

    #[test]
    fn test_claim_wrong_day_is_rejected() {
        let mut state = GameState::new(NOW);
        let err = claim_daily_reward(&mut state, 2, NOW).unwrap_err();
        assert!(matches!(
            err,
            EngineError::ClaimNotAvailable { day: 2, claimable: 1 }
        ));
        assert_eq!(state.resource, 0.0);
        assert!(state.daily_rewards.iter().all(|s| !s.claimed));
        assert_eq!(state.last_daily_reward_claim_time, 0);
    }

    #[test]
    fn test_claim_twice_same_window_is_rejected() {
        let mut state = GameState::new(NOW);
        claim_daily_reward(&mut state, 1, NOW).unwrap();
        let err = claim_daily_reward(&mut state, 1, NOW + HOUR_MS).unwrap_err();
        assert!(matches!(err, EngineError::ClaimNotAvailable { claimable: 0, .. }));
        assert_eq!(state.resource, 10.0);
    }

    #[test]
    fn test_claim_already_claimed_slot_is_rejected() {
        let mut state = GameState::new(NOW);
        state.daily_rewards[1].claimed = true;
        state.last_daily_reward_claim_time = NOW - 25 * HOUR_MS;

        let err = claim_daily_reward(&mut state, 2, NOW).unwrap_err();
        assert!(matches!(err, EngineError::ClaimNotAvailable { day: 2, claimable: 2 }));
        assert_eq!(state.last_daily_reward_claim_time, NOW - 25 * HOUR_MS);
    }

    #[test]
    fn test_claim_includes_weekly_bonus() {
        let mut state = GameState::new(NOW);
        state.last_daily_reward_claim_time = NOW - 6 * DAY_MS;
        let outcome = claim_daily_reward(&mut state, 7, NOW).unwrap();
        assert_eq!(outcome.credited, 113 + 11);
    }
}
