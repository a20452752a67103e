//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulation runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Simulated seconds per run before timeout
    pub max_seconds_per_run: u64,

    /// Taps per simulated second, drawn uniformly from this range
    pub min_clicks_per_second: u32,
    pub max_clicks_per_second: u32,

    /// Whether to simulate prestige resets
    pub simulate_prestige: bool,

    /// Prestige level that ends a run early (0 = always run to timeout)
    pub target_prestige: u32,

    /// Wall-clock start of every run (ms); the event schedule is anchored here
    pub start_time: i64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 20,
            seed: None,
            max_seconds_per_run: 3 * 24 * 60 * 60,
            min_clicks_per_second: 2,
            max_clicks_per_second: 6,
            simulate_prestige: true,
            target_prestige: 0,
            start_time: 0,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config: one simulated hour of active play
    pub fn quick_balance_test() -> Self {
        Self {
            num_runs: 10,
            max_seconds_per_run: 60 * 60,
            ..Default::default()
        }
    }

    /// Full week, covering every scheduled special event
    pub fn full_progression_test() -> Self {
        Self {
            num_runs: 5,
            max_seconds_per_run: 7 * 24 * 60 * 60,
            simulate_prestige: true,
            ..Default::default()
        }
    }

    /// Tap-free play: only what production alone can reach
    pub fn idle_only(max_seconds_per_run: u64) -> Self {
        Self {
            num_runs: 1,
            max_seconds_per_run,
            min_clicks_per_second: 0,
            max_clicks_per_second: 0,
            ..Default::default()
        }
    }
}
