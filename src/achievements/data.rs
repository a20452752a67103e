//! Static achievement definitions.

use super::types::{AchievementCategory, AchievementDef, AchievementId, Condition, Metric};

/// All achievement definitions in evaluation (and display) order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    // ═══════════════════════════════════════════════════════════════
    // CLICKING
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::FirstClick,
        name: "First Click",
        description: "Click for the first time",
        category: AchievementCategory::Clicking,
        condition: Condition::AtLeast(Metric::TotalClicks, 1.0),
        reward: 10.0,
    },
    AchievementDef {
        id: AchievementId::ClickMaster,
        name: "Click Master",
        description: "Click 100 times",
        category: AchievementCategory::Clicking,
        condition: Condition::AtLeast(Metric::TotalClicks, 100.0),
        reward: 50.0,
    },
    AchievementDef {
        id: AchievementId::ClickLegend,
        name: "Click Legend",
        description: "Click 1,000 times",
        category: AchievementCategory::Clicking,
        condition: Condition::AtLeast(Metric::TotalClicks, 1_000.0),
        reward: 200.0,
    },
    AchievementDef {
        id: AchievementId::ClickGod,
        name: "Click God",
        description: "Click 10,000 times",
        category: AchievementCategory::Clicking,
        condition: Condition::AtLeast(Metric::TotalClicks, 10_000.0),
        reward: 1_000.0,
    },
    // ═══════════════════════════════════════════════════════════════
    // PRODUCTION
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::FirstEarnings,
        name: "First Earnings",
        description: "Earn your first resource",
        category: AchievementCategory::Production,
        condition: Condition::AtLeast(Metric::TotalResourceEarned, 1.0),
        reward: 5.0,
    },
    AchievementDef {
        id: AchievementId::Collector,
        name: "Collector",
        description: "Earn 1,000 resource total",
        category: AchievementCategory::Production,
        condition: Condition::AtLeast(Metric::TotalResourceEarned, 1_000.0),
        reward: 100.0,
    },
    AchievementDef {
        id: AchievementId::Millionaire,
        name: "Millionaire",
        description: "Earn 1,000,000 resource total",
        category: AchievementCategory::Production,
        condition: Condition::AtLeast(Metric::TotalResourceEarned, 1_000_000.0),
        reward: 5_000.0,
    },
    AchievementDef {
        id: AchievementId::SpeedDemon,
        name: "Speed Demon",
        description: "Generate 100 resource per second",
        category: AchievementCategory::Production,
        condition: Condition::AtLeast(Metric::ResourcePerSecond, 100.0),
        reward: 500.0,
    },
    // ═══════════════════════════════════════════════════════════════
    // UPGRADES
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::FirstUpgrade,
        name: "First Upgrade",
        description: "Buy your first upgrade",
        category: AchievementCategory::Upgrades,
        condition: Condition::AnyUpgradeAtLevel(1),
        reward: 25.0,
    },
    AchievementDef {
        id: AchievementId::UpgradeMaster,
        name: "Upgrade Master",
        description: "Reach level 10 on any upgrade",
        category: AchievementCategory::Upgrades,
        condition: Condition::AnyUpgradeAtLevel(10),
        reward: 250.0,
    },
    AchievementDef {
        id: AchievementId::AllUpgrades,
        name: "All Upgrades",
        description: "Buy every upgrade type",
        category: AchievementCategory::Upgrades,
        condition: Condition::AllUpgradesPurchased,
        reward: 1_000.0,
    },
    // ═══════════════════════════════════════════════════════════════
    // PRESTIGE
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::FirstPrestige,
        name: "First Prestige",
        description: "Perform your first prestige",
        category: AchievementCategory::Prestige,
        condition: Condition::AtLeast(Metric::PrestigeCount, 1.0),
        reward: 5_000.0,
    },
    AchievementDef {
        id: AchievementId::PrestigeMaster,
        name: "Prestige Master",
        description: "Reach prestige level 10",
        category: AchievementCategory::Prestige,
        condition: Condition::AtLeast(Metric::PrestigeLevel, 10.0),
        reward: 25_000.0,
    },
    // ═══════════════════════════════════════════════════════════════
    // SPECIAL
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::DailyStreak,
        name: "Daily Streak",
        description: "Claim 7 daily rewards",
        category: AchievementCategory::Special,
        condition: Condition::ClaimedDaysAtLeast(7),
        reward: 1_000.0,
    },
    AchievementDef {
        id: AchievementId::EventParticipant,
        name: "Event Participant",
        description: "Play during a special event",
        category: AchievementCategory::Special,
        condition: Condition::AnyEventActive,
        reward: 500.0,
    },
];

/// Look up an achievement definition by id.
pub fn get_achievement_def(id: AchievementId) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|a| a.id == id)
}

/// All achievements in a category, in display order.
pub fn get_achievements_by_category(category: AchievementCategory) -> Vec<&'static AchievementDef> {
    ALL_ACHIEVEMENTS
        .iter()
        .filter(|a| a.category == category)
        .collect()
}
