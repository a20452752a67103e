//! Upgrade data structures.

use crate::achievements::AchievementId;
use serde::{Deserialize, Serialize};

/// Identifiers for every purchasable upgrade, in shop order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UpgradeId {
    ClickPower,
    AutoClicker,
    Factory,
    Mine,
    Bank,
    Temple,
    Lab,
    Portal,
}

impl UpgradeId {
    /// All upgrades in shop order
    pub const ALL: [UpgradeId; 8] = [
        UpgradeId::ClickPower,
        UpgradeId::AutoClicker,
        UpgradeId::Factory,
        UpgradeId::Mine,
        UpgradeId::Bank,
        UpgradeId::Temple,
        UpgradeId::Lab,
        UpgradeId::Portal,
    ];

    /// Click Power boosts taps; everything else produces per second.
    pub fn is_click_upgrade(&self) -> bool {
        matches!(self, UpgradeId::ClickPower)
    }
}

/// Static catalog entry for an upgrade.
#[derive(Debug, Clone)]
pub struct UpgradeDef {
    pub id: UpgradeId,
    pub name: &'static str,
    pub description: &'static str,
    pub base_cost: f64,
    /// Per-level effect: extra resource per click for Click Power,
    /// resource per second for producers.
    pub base_effect: f64,
}

/// Per-game upgrade progress.
///
/// `cost` is a display cache refreshed by
/// [`recompute_derived_rates`](crate::core::game_logic::recompute_derived_rates);
/// prices are always recomputed from `level` when spending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeState {
    pub level: u32,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub base_effect: f64,
}

impl UpgradeState {
    pub fn new(def: &UpgradeDef) -> Self {
        Self {
            level: 0,
            cost: def.base_cost,
            base_effect: def.base_effect,
        }
    }
}

/// Result of a successful purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseOutcome {
    pub upgrade: UpgradeId,
    pub new_level: u32,
    pub cost: f64,
    pub new_achievements: Vec<AchievementId>,
}
