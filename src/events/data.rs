//! Special event schedule.

use super::types::{SpecialEvent, SpecialEventId};
use crate::core::constants::*;

/// Build the event schedule for a game created at `created_at` (ms).
pub fn create_special_events(created_at: i64) -> Vec<SpecialEvent> {
    SpecialEventId::ALL
        .iter()
        .map(|&id| {
            let (start, end, multiplier) = match id {
                SpecialEventId::DoubleProduction => (
                    DOUBLE_PRODUCTION_START_MS,
                    DOUBLE_PRODUCTION_END_MS,
                    DOUBLE_PRODUCTION_MULTIPLIER,
                ),
                SpecialEventId::ClickFrenzy => (
                    CLICK_FRENZY_START_MS,
                    CLICK_FRENZY_END_MS,
                    CLICK_FRENZY_MULTIPLIER,
                ),
                SpecialEventId::UpgradeSale => (
                    UPGRADE_SALE_START_MS,
                    UPGRADE_SALE_END_MS,
                    UPGRADE_SALE_PRICE_DIVISOR,
                ),
                SpecialEventId::PrestigeBoost => (
                    PRESTIGE_BOOST_START_MS,
                    PRESTIGE_BOOST_END_MS,
                    PRESTIGE_BOOST_MULTIPLIER,
                ),
            };
            SpecialEvent {
                id,
                start_time: created_at + start,
                end_time: created_at + end,
                multiplier,
                active: false,
            }
        })
        .collect()
}
