//! Display formatting for balances and durations.

/// Format a balance with abbreviated suffixes (K, M, B, T).
///
/// Values below a thousand are floored to a whole number.
pub fn format_number(n: f64) -> String {
    // (threshold, suffix)
    const TIERS: &[(f64, &str)] = &[(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

    if !n.is_finite() {
        return "0".to_string();
    }
    for &(threshold, suffix) in TIERS {
        if n >= threshold {
            return format!("{:.1}{}", n / threshold, suffix);
        }
    }
    format!("{}", n.floor() as i64)
}

/// Format a duration in milliseconds as `1h 2m 3s`, dropping leading
/// zero units.
pub fn format_play_time(ms: i64) -> String {
    let total_seconds = ms.max(0) / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// Format a duration in milliseconds as `m:ss`.
pub fn format_clock(ms: i64) -> String {
    let total_seconds = ms.max(0) / 1000;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}
