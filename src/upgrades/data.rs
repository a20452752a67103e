//! Static upgrade definitions.

use super::types::{UpgradeDef, UpgradeId};

/// All upgrade definitions in shop order.
pub const ALL_UPGRADES: &[UpgradeDef] = &[
    UpgradeDef {
        id: UpgradeId::ClickPower,
        name: "Click Power",
        description: "Increase resource per click",
        base_cost: 10.0,
        base_effect: 1.0,
    },
    UpgradeDef {
        id: UpgradeId::AutoClicker,
        name: "Auto Clicker",
        description: "Automatically generates resource every second",
        base_cost: 50.0,
        base_effect: 1.0,
    },
    UpgradeDef {
        id: UpgradeId::Factory,
        name: "Factory",
        description: "Mass produce resource automatically",
        base_cost: 200.0,
        base_effect: 5.0,
    },
    UpgradeDef {
        id: UpgradeId::Mine,
        name: "Mine",
        description: "Extract resource from deep underground",
        base_cost: 1_000.0,
        base_effect: 20.0,
    },
    UpgradeDef {
        id: UpgradeId::Bank,
        name: "Bank",
        description: "Invest resource for massive returns",
        base_cost: 5_000.0,
        base_effect: 100.0,
    },
    UpgradeDef {
        id: UpgradeId::Temple,
        name: "Temple",
        description: "Sacred production facility",
        base_cost: 25_000.0,
        base_effect: 500.0,
    },
    UpgradeDef {
        id: UpgradeId::Lab,
        name: "Lab",
        description: "Advanced research facility",
        base_cost: 100_000.0,
        base_effect: 2_000.0,
    },
    UpgradeDef {
        id: UpgradeId::Portal,
        name: "Portal",
        description: "Interdimensional gateway",
        base_cost: 500_000.0,
        base_effect: 10_000.0,
    },
];

/// Look up the static definition for an upgrade.
/// `ALL_UPGRADES` is kept in `UpgradeId` declaration order.
pub fn get_upgrade_def(id: UpgradeId) -> &'static UpgradeDef {
    &ALL_UPGRADES[id as usize]
}
