//! Simulation report generation.

use crate::utils::format::{format_number, format_play_time};
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything measured during one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunStats {
    pub seconds_played: u64,
    pub total_clicks: u64,
    pub upgrades_purchased: u64,
    pub achievements_unlocked: usize,
    pub events_seen: usize,
    /// Simulated second of each prestige, in order.
    pub prestige_seconds: Vec<u64>,
    pub final_prestige: u32,
    pub final_multiplier: f64,
    pub final_resource: f64,
    pub final_resource_per_second: f64,
    pub final_resource_per_click: f64,
    pub reached_target: bool,
}

impl RunStats {
    pub fn first_prestige_second(&self) -> Option<u64> {
        self.prestige_seconds.first().copied()
    }
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_completed: u32,
    pub runs_timed_out: u32,

    // Aggregated stats
    pub avg_seconds_played: f64,
    pub avg_total_clicks: f64,
    pub avg_upgrades_purchased: f64,
    pub avg_achievements: f64,
    pub avg_final_prestige: f64,
    pub avg_final_multiplier: f64,
    pub avg_final_resource_per_second: f64,
    pub avg_final_resource_per_click: f64,

    // Prestige pacing
    pub runs_with_prestige: u32,
    /// Mean over runs that prestiged at all
    pub avg_first_prestige_seconds: Option<f64>,
    pub prestige_distribution: BTreeMap<u32, u32>,

    // Individual run stats for detailed analysis
    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

fn mean(values: impl Iterator<Item = f64>, count: usize) -> f64 {
    values.sum::<f64>() / count.max(1) as f64
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, max_seconds: u64) -> Self {
        let n = runs.len();
        let num_runs = n as u32;
        let runs_completed = runs.iter().filter(|r| r.reached_target).count() as u32;
        let runs_timed_out = runs
            .iter()
            .filter(|r| !r.reached_target && r.seconds_played >= max_seconds)
            .count() as u32;

        let first_prestiges: Vec<f64> = runs
            .iter()
            .filter_map(|r| r.first_prestige_second())
            .map(|s| s as f64)
            .collect();
        let avg_first_prestige_seconds = if first_prestiges.is_empty() {
            None
        } else {
            Some(mean(first_prestiges.iter().copied(), first_prestiges.len()))
        };

        // Prestige distribution
        let mut prestige_distribution = BTreeMap::new();
        for run in &runs {
            *prestige_distribution.entry(run.final_prestige).or_insert(0) += 1;
        }

        Self {
            num_runs,
            runs_completed,
            runs_timed_out,
            avg_seconds_played: mean(runs.iter().map(|r| r.seconds_played as f64), n),
            avg_total_clicks: mean(runs.iter().map(|r| r.total_clicks as f64), n),
            avg_upgrades_purchased: mean(runs.iter().map(|r| r.upgrades_purchased as f64), n),
            avg_achievements: mean(runs.iter().map(|r| r.achievements_unlocked as f64), n),
            avg_final_prestige: mean(runs.iter().map(|r| r.final_prestige as f64), n),
            avg_final_multiplier: mean(runs.iter().map(|r| r.final_multiplier), n),
            avg_final_resource_per_second: mean(
                runs.iter().map(|r| r.final_resource_per_second),
                n,
            ),
            avg_final_resource_per_click: mean(runs.iter().map(|r| r.final_resource_per_click), n),
            runs_with_prestige: first_prestiges.len() as u32,
            avg_first_prestige_seconds,
            prestige_distribution,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} completed, {} timed out\n\n",
            self.num_runs, self.runs_completed, self.runs_timed_out
        ));

        report.push_str("── ECONOMY ──────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Play Time:       {}\n",
            format_play_time((self.avg_seconds_played * 1000.0) as i64)
        ));
        report.push_str(&format!(
            "  Avg Clicks:          {}\n",
            format_number(self.avg_total_clicks)
        ));
        report.push_str(&format!(
            "  Avg Upgrades Bought: {:.1}\n",
            self.avg_upgrades_purchased
        ));
        report.push_str(&format!(
            "  Avg Final Rate:      {}/s, {}/click\n",
            format_number(self.avg_final_resource_per_second),
            format_number(self.avg_final_resource_per_click)
        ));
        report.push_str(&format!(
            "  Avg Achievements:    {:.1}\n\n",
            self.avg_achievements
        ));

        report.push_str("── PRESTIGE ─────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Runs That Prestiged: {}/{}\n",
            self.runs_with_prestige, self.num_runs
        ));
        match self.avg_first_prestige_seconds {
            Some(seconds) => report.push_str(&format!(
                "  Avg First Prestige:  {}\n",
                format_play_time((seconds * 1000.0) as i64)
            )),
            None => report.push_str("  Avg First Prestige:  never\n"),
        }
        report.push_str(&format!(
            "  Avg Final Level:     {:.1} (x{:.1} multiplier)\n",
            self.avg_final_prestige, self.avg_final_multiplier
        ));
        for (level, count) in &self.prestige_distribution {
            let pct = (*count as f64 / self.num_runs.max(1) as f64) * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  P{:<3} {:>5.1}% {}\n", level, pct, bar));
        }
        report.push('\n');

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        if self.runs_with_prestige == 0 {
            report.push_str("  ⚠️  No run reached prestige - requirement too steep?\n");
        }
        if self.avg_upgrades_purchased < 10.0 {
            report.push_str("  ⚠️  Very few upgrades bought - prices too high?\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
