//! Offline progression system.
//!
//! Credits production for the wall-clock time between the last save and
//! the moment the game is loaded again.

use super::constants::MS_PER_SECOND;
use super::game_logic::{apply_tick, recompute_derived_rates};
use super::game_state::GameState;

/// Report of offline progression results
#[derive(Debug, Default, Clone, PartialEq)]
pub struct OfflineReport {
    pub elapsed_ms: i64,
    pub resource_gained: f64,
    /// Rate the catch-up was computed with (the last saved rate).
    pub resource_per_second: f64,
}

/// Applies offline catch-up once, at load time.
///
/// Production is credited at the saved `resource_per_second` first; the
/// derived rates are then recomputed rather than trusted from the save,
/// and `last_save_time` is stamped to `current_time`.
pub fn process_offline_progress(state: &mut GameState, current_time: i64) -> OfflineReport {
    let elapsed_ms = current_time.saturating_sub(state.last_save_time);
    let rate = state.resource_per_second;

    let mut report = OfflineReport {
        resource_per_second: rate,
        ..OfflineReport::default()
    };
    if elapsed_ms > 0 {
        report.elapsed_ms = elapsed_ms;
        let elapsed_seconds = elapsed_ms as f64 / MS_PER_SECOND as f64;
        report.resource_gained = apply_tick(state, elapsed_seconds);
    }

    recompute_derived_rates(state, current_time);
    state.last_save_time = current_time;

    if report.resource_gained > 0.0 {
        log::info!(
            "offline for {}s, credited {:.0}",
            report.elapsed_ms / MS_PER_SECOND,
            report.resource_gained
        );
    }
    report
}
