//! Wall-clock helpers. Everything takes milliseconds-since-epoch as `f64`,
//! matching what `Date.now()` hands us, and takes `now` as a parameter so
//! the formatting is testable on native builds.

use time::OffsetDateTime;
use time::macros::format_description;

pub const MINUTE_MS: f64 = 60_000.0;
pub const HOUR_MS: f64 = 3_600_000.0;
pub const DAY_MS: f64 = 86_400_000.0;

/// Milliseconds since the Unix epoch. Zero on server renders, where
/// nothing time-sensitive is shown.
#[cfg(feature = "hydrate")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(feature = "hydrate"))]
pub fn now_ms() -> f64 {
    0.0
}

/// How a push age should be toned in the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgeTone {
    /// Pushed within the last week.
    Fresh,
    /// Pushed within the last month.
    Aging,
    /// Dormant for a month or more.
    Stale,
}

/// Badge text and tone for "how long since the last push".
pub fn push_age(now_ms: f64, pushed_ms: f64) -> (String, AgeTone) {
    let days = ((now_ms - pushed_ms) / DAY_MS).floor().max(0.0);
    if days < 1.0 {
        return ("Today".to_owned(), AgeTone::Fresh);
    }
    if days < 7.0 {
        return (ago(days, "day"), AgeTone::Fresh);
    }
    if days < 30.0 {
        return (ago((days / 7.0).floor(), "week"), AgeTone::Aging);
    }
    let years = (days / 365.0).floor();
    if years >= 1.0 {
        return (ago(years, "year"), AgeTone::Stale);
    }
    // 30..364 days, so this lands between 1 and 12.
    (ago((days % 365.0 / 30.0).floor(), "month"), AgeTone::Stale)
}

fn ago(count: f64, unit: &str) -> String {
    let count = count as u64;
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

/// Calendar year of a timestamp. `None` for the zero placeholder the
/// server clock hands out and for out-of-range values.
pub fn year_of(ms: f64) -> Option<i32> {
    if ms <= 0.0 {
        return None;
    }
    OffsetDateTime::from_unix_timestamp((ms / 1000.0) as i64)
        .ok()
        .map(OffsetDateTime::year)
}

/// Full timestamp for deployment rows, e.g. `Apr 12, 2026, 3:42 PM`.
pub fn format_timestamp(ms: f64) -> String {
    let Ok(moment) = OffsetDateTime::from_unix_timestamp((ms / 1000.0) as i64) else {
        return "N/A".to_owned();
    };
    let format = format_description!(
        "[month repr:short] [day padding:none], [year], [hour repr:12 padding:none]:[minute] [period]"
    );
    moment.format(&format).unwrap_or_else(|_| "N/A".to_owned())
}

/// Calendar day only, e.g. `Apr 12, 2026`.
pub fn format_day(ms: f64) -> String {
    let Ok(moment) = OffsetDateTime::from_unix_timestamp((ms / 1000.0) as i64) else {
        return "N/A".to_owned();
    };
    let format = format_description!("[month repr:short] [day padding:none], [year]");
    moment.format(&format).unwrap_or_else(|_| "N/A".to_owned())
}

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;
