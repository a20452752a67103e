//! Economy balance simulator.
//!
//! Plays many simulated runs with a greedy policy to analyze:
//! - Time to the first prestige
//! - Rate growth across upgrades and resets
//! - Achievement pacing
//!
//! The simulator drives the engine through the `GameLoop` trait
//! (src/core/game_loop.rs), so results match real gameplay behavior.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{play_run, run_simulation};
