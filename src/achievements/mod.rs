//! Achievement system module.
//!
//! Achievements are a fixed catalog of data-only conditions evaluated
//! against [`GameState`](crate::core::game_state::GameState) after each
//! mutation. Unlocked ids live in `GameState::achievements` and survive
//! prestige.

pub mod data;
pub mod logic;
pub mod types;

pub use data::{get_achievement_def, get_achievements_by_category, ALL_ACHIEVEMENTS};
pub use logic::{
    check_achievements, condition_met, count_by_category, is_unlocked, newly_unlocked,
    unlock_achievement, unlock_percentage, unlocked_achievements,
};
pub use types::{AchievementCategory, AchievementDef, AchievementId, Condition, Metric};
