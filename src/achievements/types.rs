//! Achievement system types and data structures.

use serde::{Deserialize, Serialize};

/// Achievement categories for organization in the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCategory {
    Clicking,
    Production,
    Upgrades,
    Prestige,
    Special,
}

impl AchievementCategory {
    /// All categories in display order.
    pub const ALL: [AchievementCategory; 5] = [
        AchievementCategory::Clicking,
        AchievementCategory::Production,
        AchievementCategory::Upgrades,
        AchievementCategory::Prestige,
        AchievementCategory::Special,
    ];

    /// Display name for the category.
    pub fn name(&self) -> &'static str {
        match self {
            AchievementCategory::Clicking => "Clicking",
            AchievementCategory::Production => "Production",
            AchievementCategory::Upgrades => "Upgrades",
            AchievementCategory::Prestige => "Prestige",
            AchievementCategory::Special => "Special",
        }
    }
}

/// Unique identifier for each achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    // Clicking
    FirstClick,  // 1 click
    ClickMaster, // 100 clicks
    ClickLegend, // 1,000 clicks
    ClickGod,    // 10,000 clicks
    // Production
    FirstEarnings,
    Collector,   // 1,000 earned
    Millionaire, // 1,000,000 earned
    SpeedDemon,  // 100 per second
    // Upgrades
    FirstUpgrade,
    UpgradeMaster,
    AllUpgrades,
    // Prestige
    FirstPrestige,
    PrestigeMaster,
    // Special
    DailyStreak,
    EventParticipant,
}

/// A numeric game-state field a threshold condition reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    TotalClicks,
    TotalResourceEarned,
    ResourcePerSecond,
    PrestigeCount,
    PrestigeLevel,
}

/// Data-only unlock condition, evaluated by
/// [`condition_met`](super::logic::condition_met).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Condition {
    /// `metric >= threshold`
    AtLeast(Metric, f64),
    /// Some upgrade has reached this level.
    AnyUpgradeAtLevel(u32),
    /// Every catalog upgrade has at least one level.
    AllUpgradesPurchased,
    /// At least this many daily reward slots are claimed.
    ClaimedDaysAtLeast(usize),
    /// A special event is running right now.
    AnyEventActive,
}

/// Static definition of an achievement.
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub category: AchievementCategory,
    pub condition: Condition,
    /// Resource credited on first unlock.
    pub reward: f64,
}
