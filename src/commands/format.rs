// ABOUTME: Small display helpers shared by list commands.
// ABOUTME: Human-readable sizes and ages.

use chrono::{DateTime, Utc};

/// Decimal units, as `docker images` prints them.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "kB", "MB", "GB", "TB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes}B")
    } else {
        format!("{:.1}{}", value, UNITS[unit])
    }
}

pub fn format_age(created: Option<DateTime<Utc>>) -> String {
    match created {
        Some(at) => humanize_since(Utc::now() - at),
        None => "unknown".to_string(),
    }
}

fn humanize_since(delta: chrono::TimeDelta) -> String {
    let secs = delta.num_seconds();
    match secs {
        s if s < 0 => "just now".to_string(),
        s if s < 60 => format!("{s} seconds ago"),
        s if s < 3600 => format!("{} minutes ago", s / 60),
        s if s < 86_400 => format!("{} hours ago", s / 3600),
        s => format!("{} days ago", s / 86_400),
    }
}
