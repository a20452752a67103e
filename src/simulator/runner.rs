//! Main simulation runner using the shared game loop.
//!
//! Runs use a plain `GameState` as the engine; any other `GameLoop`
//! (such as a `GameSession`) can be played with [`play_run`]. Statistics
//! are tracked externally from action and tick results.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::core::game_loop::GameLoop;
use crate::core::game_state::GameState;
use crate::upgrades::cheapest_affordable;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        // Create RNG for this run
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + run_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        let mut game = GameState::new(config.start_time);
        let run = play_run(&mut game, config, &mut rng);

        if config.verbosity >= 2 {
            log::info!(
                "run {}/{}: {}s, prestige {}, {:.1}/s, {} achievements",
                run_idx + 1,
                config.num_runs,
                run.seconds_played,
                run.final_prestige,
                run.final_resource_per_second,
                run.achievements_unlocked
            );
        }
        all_runs.push(run);
    }

    SimReport::from_runs(all_runs, config.max_seconds_per_run)
}

/// Play one run with the greedy policy: tap, buy the cheapest affordable
/// upgrade until nothing is affordable, prestige when eligible, then let
/// one second of production pass.
pub fn play_run<G: GameLoop>(game: &mut G, config: &SimConfig, rng: &mut impl Rng) -> RunStats {
    let mut run = RunStats::default();
    let start = config.start_time;
    let max_clicks = config.max_clicks_per_second.max(config.min_clicks_per_second);

    for second in 0..config.max_seconds_per_run {
        let now = start + second as i64 * 1000;

        let clicks = rng.gen_range(config.min_clicks_per_second..=max_clicks);
        for _ in 0..clicks {
            let outcome = game.click(now);
            run.total_clicks += 1;
            run.achievements_unlocked += outcome.new_achievements.len();
        }

        while let Some((id, _)) = cheapest_affordable(game.state(), now) {
            match game.purchase(id, now) {
                Ok(outcome) => {
                    run.upgrades_purchased += 1;
                    run.achievements_unlocked += outcome.new_achievements.len();
                }
                Err(_) => break,
            }
        }

        if config.simulate_prestige && game.can_prestige() {
            if let Ok(outcome) = game.prestige(now) {
                run.prestige_seconds.push(second);
                run.achievements_unlocked += outcome.new_achievements.len();
            }
        }

        if config.target_prestige > 0 && game.state().prestige.level >= config.target_prestige {
            run.reached_target = true;
            break;
        }

        let result = game.tick(now + 1000);
        run.events_seen += result.events_started.len();
        run.achievements_unlocked += result.new_achievements.len();
        run.seconds_played = second + 1;
    }

    if config.target_prestige == 0 {
        run.reached_target = true;
    }

    let state = game.state();
    run.final_resource = state.resource;
    run.final_resource_per_second = state.resource_per_second;
    run.final_resource_per_click = state.resource_per_click;
    run.final_prestige = state.prestige.level;
    run.final_multiplier = state.prestige.multiplier;
    run
}
