//! Play statistics collected by the session from action outcomes.
//!
//! The engine never reads or writes these; they only describe how the
//! player got where they are.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayStats {
    pub session_started_at: i64,
    /// Start of the current prestige run.
    pub run_started_at: i64,
    pub total_clicks: u64,
    pub resource_from_clicks: f64,
    pub resource_from_production: f64,
    pub resource_from_rewards: f64,
    pub upgrades_purchased: u64,
    pub prestiges: u64,
    pub achievements_unlocked: u64,
    pub daily_rewards_claimed: u64,
    pub special_events_seen: u64,
    pub highest_resource_per_second: f64,
    pub highest_resource_per_click: f64,
    /// Shortest prestige run in milliseconds.
    pub fastest_prestige_ms: Option<i64>,
}

impl PlayStats {
    pub fn new(now: i64) -> Self {
        Self {
            session_started_at: now,
            run_started_at: now,
            ..Self::default()
        }
    }

    pub fn record_click(&mut self, gained: f64) {
        self.total_clicks += 1;
        self.resource_from_clicks += gained;
    }

    pub fn record_production(&mut self, gained: f64) {
        self.resource_from_production += gained;
    }

    pub fn record_purchase(&mut self) {
        self.upgrades_purchased += 1;
    }

    pub fn record_daily_reward(&mut self, credited: f64) {
        self.daily_rewards_claimed += 1;
        self.resource_from_rewards += credited;
    }

    pub fn record_achievements(&mut self, count: usize) {
        self.achievements_unlocked += count as u64;
    }

    pub fn record_events_started(&mut self, count: usize) {
        self.special_events_seen += count as u64;
    }

    /// Closes the current run and starts the next one at `now`.
    pub fn record_prestige(&mut self, now: i64) {
        self.prestiges += 1;
        let run_ms = now - self.run_started_at;
        if run_ms > 0 && self.fastest_prestige_ms.map_or(true, |best| run_ms < best) {
            self.fastest_prestige_ms = Some(run_ms);
        }
        self.run_started_at = now;
    }

    pub fn update_highest(&mut self, resource_per_second: f64, resource_per_click: f64) {
        self.highest_resource_per_second = self.highest_resource_per_second.max(resource_per_second);
        self.highest_resource_per_click = self.highest_resource_per_click.max(resource_per_click);
    }

    pub fn play_time_ms(&self, now: i64) -> i64 {
        (now - self.session_started_at).max(0)
    }

    pub fn clicks_per_minute(&self, now: i64) -> f64 {
        let minutes = self.play_time_ms(now) as f64 / 60_000.0;
        if minutes <= 0.0 {
            return 0.0;
        }
        self.total_clicks as f64 / minutes
    }

    /// Average resource per click over the session.
    pub fn click_efficiency(&self) -> f64 {
        if self.total_clicks == 0 {
            return 0.0;
        }
        self.resource_from_clicks / self.total_clicks as f64
    }
}
