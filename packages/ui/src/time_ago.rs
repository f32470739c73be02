//! Relative "edited ... ago" labels for design cards.

use chrono::{DateTime, Utc};

/// Checked largest first; the first unit with more than one whole interval wins.
const UNITS: [(i64, &str); 5] = [
    (31_536_000, "years"),
    (2_592_000, "months"),
    (86_400, "days"),
    (3_600, "hours"),
    (60, "minutes"),
];

/// Format the time elapsed between `then` and `now`.
///
/// Elapsed seconds are floored. A unit is chosen only when the elapsed time
/// exceeds one full interval, so exactly 60 seconds still reads "60 seconds ago".
pub fn time_ago(then: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(then) = then else {
        return "a while ago".to_string();
    };
    let seconds = (now - then).num_milliseconds().div_euclid(1000);

    for (unit_seconds, unit) in UNITS {
        let interval = seconds as f64 / unit_seconds as f64;
        if interval > 1.0 {
            return format!("{} {unit} ago", interval.floor() as i64);
        }
    }
    format!("{seconds} seconds ago")
}

/// [`time_ago`] against the current clock.
pub fn time_ago_now(then: Option<DateTime<Utc>>) -> String {
    time_ago(then, Utc::now())
}
