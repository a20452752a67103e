//! Special event data structures.

use serde::{Deserialize, Serialize};

/// Which multiplier an event feeds into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventCategory {
    Production,
    Clicking,
    /// Upgrade price divisor
    Upgrades,
    Prestige,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialEventId {
    DoubleProduction,
    ClickFrenzy,
    UpgradeSale,
    PrestigeBoost,
}

impl SpecialEventId {
    pub const ALL: [SpecialEventId; 4] = [
        SpecialEventId::DoubleProduction,
        SpecialEventId::ClickFrenzy,
        SpecialEventId::UpgradeSale,
        SpecialEventId::PrestigeBoost,
    ];

    /// Fixed id → category table.
    pub fn category(&self) -> EventCategory {
        match self {
            SpecialEventId::DoubleProduction => EventCategory::Production,
            SpecialEventId::ClickFrenzy => EventCategory::Clicking,
            SpecialEventId::UpgradeSale => EventCategory::Upgrades,
            SpecialEventId::PrestigeBoost => EventCategory::Prestige,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SpecialEventId::DoubleProduction => "Double Production Weekend",
            SpecialEventId::ClickFrenzy => "Click Frenzy",
            SpecialEventId::UpgradeSale => "Upgrade Sale",
            SpecialEventId::PrestigeBoost => "Prestige Boost",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SpecialEventId::DoubleProduction => "All production is doubled!",
            SpecialEventId::ClickFrenzy => "Clicking produces 5x more!",
            SpecialEventId::UpgradeSale => "All upgrades are 50% off!",
            SpecialEventId::PrestigeBoost => "Prestige gives 3x more multiplier!",
        }
    }
}

/// A scheduled event with absolute start/end timestamps (ms).
///
/// `active` mirrors `is_active_at` for the last refresh and is never
/// trusted when read back from a save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialEvent {
    pub id: SpecialEventId,
    pub start_time: i64,
    pub end_time: i64,
    pub multiplier: f64,
    #[serde(default)]
    pub active: bool,
}

impl SpecialEvent {
    /// Active on the half-open window `[start_time, end_time)`.
    pub fn is_active_at(&self, now: i64) -> bool {
        self.start_time <= now && now < self.end_time
    }

    pub fn category(&self) -> EventCategory {
        self.id.category()
    }

    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    pub fn description(&self) -> &'static str {
        self.id.description()
    }
}
