//! Upgrade catalog and the economy that prices and applies purchases.

pub mod data;
pub mod logic;
pub mod types;

pub use data::{get_upgrade_def, ALL_UPGRADES};
pub use logic::{base_cost_at_level, can_afford, cheapest_affordable, cost_of, purchase};
pub use types::{PurchaseOutcome, UpgradeDef, UpgradeId, UpgradeState};
