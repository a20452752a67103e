// Timing
pub const MS_PER_SECOND: i64 = 1000;
pub const PRODUCTION_TICK_SECONDS: f64 = 1.0;
pub const AUTOSAVE_INTERVAL_SECONDS: i64 = 30;

// Clicking
pub const BASE_CLICK_POWER: f64 = 1.0;
/// Extra resource per click granted by each Click Power level.
pub const CLICK_POWER_UNIT_EFFECT: f64 = 1.0;

// Upgrade pricing: floor(base_cost * COST_GROWTH^level)
pub const UPGRADE_COST_GROWTH: f64 = 1.15;

// Prestige
pub const BASE_PRESTIGE_MULTIPLIER: f64 = 1.0;
pub const INITIAL_PRESTIGE_REQUIREMENT: f64 = 1_000_000.0;
pub const PRESTIGE_REQUIREMENT_GROWTH: f64 = 10.0;

// Daily rewards: reward = floor(BASE * GROWTH^(day-1)),
// bonus = floor(reward * WEEKLY_BONUS_RATE * floor(day / 7))
pub const DAILY_REWARD_DAYS: u32 = 30;
pub const DAILY_REWARD_BASE: f64 = 10.0;
pub const DAILY_REWARD_GROWTH: f64 = 1.5;
pub const DAILY_REWARD_WEEKLY_BONUS_RATE: f64 = 0.1;
pub const DAYS_PER_WEEK: u32 = 7;
pub const DAY_MS: i64 = 24 * 60 * 60 * MS_PER_SECOND;

// Special event schedule, as offsets from new-game creation
pub const DOUBLE_PRODUCTION_START_MS: i64 = DAY_MS;
pub const DOUBLE_PRODUCTION_END_MS: i64 = 3 * DAY_MS;
pub const DOUBLE_PRODUCTION_MULTIPLIER: f64 = 2.0;
pub const CLICK_FRENZY_START_MS: i64 = 2 * DAY_MS;
pub const CLICK_FRENZY_END_MS: i64 = 2 * DAY_MS + DAY_MS / 2;
pub const CLICK_FRENZY_MULTIPLIER: f64 = 5.0;
pub const UPGRADE_SALE_START_MS: i64 = 4 * DAY_MS;
pub const UPGRADE_SALE_END_MS: i64 = 5 * DAY_MS;
/// Price divisor: 2.0 halves every upgrade price.
pub const UPGRADE_SALE_PRICE_DIVISOR: f64 = 2.0;
pub const PRESTIGE_BOOST_START_MS: i64 = 6 * DAY_MS;
pub const PRESTIGE_BOOST_END_MS: i64 = 7 * DAY_MS;
pub const PRESTIGE_BOOST_MULTIPLIER: f64 = 3.0;

// Save file format
pub const SAVE_VERSION_MAGIC: u64 = 0x434C_4943_4B45_5201; // "CLICKER" + v1
pub const SAVE_FILE_NAME: &str = "save.dat";
