//! Relative-age formatting for node timestamps
//!
//! Renders an epoch timestamp as "5 seconds ago", "3 weeks ago" and so on,
//! picking the largest unit that fits at least twice into the elapsed time.
//! Timestamps more than two years old fall back to an absolute date, and
//! timestamps ahead of the clock get a fixed marker.

use chrono::DateTime;

const AGE_SCALES: [(&str, i64); 7] = [
    ("year", 3600 * 24 * 365),
    ("month", 3600 * 24 * 30),
    ("week", 3600 * 24 * 7),
    ("day", 3600 * 24),
    ("hour", 3600),
    ("minute", 60),
    ("second", 1),
];

/// Ages beyond two years are shown as absolute dates.
const ABSOLUTE_CUTOFF: i64 = 2 * AGE_SCALES[0].1;

/// Turn a timestamp into an age string relative to `now`.
pub fn age(ts: i64, now: i64) -> String {
    if ts > now {
        return "in the future".to_string();
    }

    let delta = (now - ts).max(1);
    if delta > ABSOLUTE_CUTOFF {
        return DateTime::from_timestamp(ts, 0)
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| ts.to_string());
    }

    for (unit, seconds) in AGE_SCALES {
        let count = delta / seconds;
        if count >= 2 || seconds == 1 {
            return format!("{} {} ago", count, pluralize(unit, count));
        }
    }

    unreachable!("the second scale matches every delta")
}

fn pluralize(unit: &str, count: i64) -> String {
    if count == 1 {
        unit.to_string()
    } else {
        format!("{unit}s")
    }
}
