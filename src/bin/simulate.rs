//! Economy balance simulator CLI.
//!
//! Plays simulated runs with a greedy policy to analyze economy balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # Default: 20 runs of 3 days
//!   cargo run --bin simulate -- -n 5 -d 3600   # 5 runs of one hour
//!   cargo run --bin simulate -- --seed 42      # Reproducible run

use idle_clicker::simulator::{run_simulation, SimConfig};
use idle_clicker::utils::format_play_time;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              IDLE CLICKER BALANCE SIMULATOR                   ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!(
        "  Duration:       {}",
        format_play_time(config.max_seconds_per_run as i64 * 1000)
    );
    println!(
        "  Clicks/sec:     {}-{}",
        config.min_clicks_per_second, config.max_clicks_per_second
    );
    if config.simulate_prestige {
        if config.target_prestige > 0 {
            println!(
                "  Prestige:       enabled (target P{})",
                config.target_prestige
            );
        } else {
            println!("  Prestige:       enabled");
        }
    }
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    // Optionally save JSON report
    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(e) = std::fs::write(&filename, json) {
            eprintln!("Failed to write JSON report: {}", e);
            return ExitCode::FAILURE;
        }
        println!("JSON report saved to: {}", filename);
    }
    ExitCode::SUCCESS
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(20);
                    i += 1;
                }
            }
            "-d" | "--duration" => {
                if i + 1 < args.len() {
                    config.max_seconds_per_run = args[i + 1].parse().unwrap_or(259_200);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-c" | "--clicks" => {
                // "N" or "MIN-MAX"
                if i + 1 < args.len() {
                    let range = args[i + 1].as_str();
                    let (min, max) = range.split_once('-').unwrap_or((range, range));
                    if let (Ok(min), Ok(max)) = (min.parse::<u32>(), max.parse::<u32>()) {
                        config.min_clicks_per_second = min;
                        config.max_clicks_per_second = max;
                    }
                    i += 1;
                }
            }
            "--no-prestige" => {
                config.simulate_prestige = false;
            }
            "--prestige" => {
                config.simulate_prestige = true;
                if i + 1 < args.len() {
                    if let Ok(level) = args[i + 1].parse::<u32>() {
                        config.target_prestige = level;
                        i += 1;
                    }
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--quick" => {
                config = SimConfig::quick_balance_test();
            }
            "--full" => {
                config = SimConfig::full_progression_test();
            }
            "--idle" => {
                config = SimConfig::idle_only(config.max_seconds_per_run);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Idle Clicker Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>        Number of simulation runs (default: 20)");
    println!("    -d, --duration <S>    Simulated seconds per run (default: 259200)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    -c, --clicks <N|A-B>  Taps per second (default: 2-6)");
    println!("    --prestige <L>        Stop a run once prestige level L is reached");
    println!("    --no-prestige         Never prestige");
    println!("    -v, --verbose         Log every run (set RUST_LOG=info)");
    println!("    --json                Save JSON report");
    println!("    --quick               Quick test (10 runs of one hour)");
    println!("    --full                Full test (5 runs of one week)");
    println!("    --idle                No tapping at all");
    println!("    -h, --help            Show this help");
}
