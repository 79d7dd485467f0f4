//! Business-day calendar
//!
//! Monday to Friday arithmetic used to map dates onto the timeline.
//!
//! # Week-aligned counting
//!
//! [`weekdays_between`] avoids a day-by-day scan. Both dates are moved back to
//! the Sunday that starts their week, whole weeks contribute five days each,
//! and a correction term accounts for where each date sits inside its week:
//!
//! ```text
//! offset(d) = weekday index of d (Sun = 0 .. Sat = 6), Sunday counted as 1
//! count     = round(days(week_end - week_start) / 7) * 5 + offset(end) - offset(start)
//! ```
//!
//! Rounding the week count keeps the result date-based when the two
//! timestamps carry different times of day.

use chrono::{Datelike, Duration, NaiveDateTime, Weekday};

/// Count business days in `[start, end)`.
///
/// Only dates matter, not times of day. For `end < start` the result is
/// meaningless.
pub fn weekdays_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let start_index = i64::from(start.weekday().num_days_from_sunday());
    let end_index = i64::from(end.weekday().num_days_from_sunday());

    let week_start = start - Duration::days(start_index);
    let week_end = end - Duration::days(end_index);

    let days = (week_end - week_start).num_days();
    let weeks = (days as f64 / 7.0).round() as i64;

    weeks * 5 + week_offset(end) - week_offset(start)
}

/// Position of a date within its Sunday-started week
fn week_offset(date: NaiveDateTime) -> i64 {
    match date.weekday() {
        Weekday::Sun => 1,
        other => i64::from(other.num_days_from_sunday()),
    }
}

/// Move a weekend date onto the following Monday.
///
/// Saturday steps one day onto Sunday, and Sunday steps one day onto Monday.
/// The time of day is kept.
pub fn snap_forward_past_weekend(date: NaiveDateTime) -> NaiveDateTime {
    let mut date = date;
    if date.weekday() == Weekday::Sat {
        date += Duration::days(1);
    }
    if date.weekday() == Weekday::Sun {
        date += Duration::days(1);
    }
    date
}

/// Advance `date` by a possibly fractional number of business days.
///
/// The whole part is stepped one calendar day at a time, snapping past
/// weekends after every step. The fractional part is added as whole minutes
/// of a 24 hour day and the result is snapped once more.
pub fn advance(date: NaiveDateTime, business_days: f64) -> NaiveDateTime {
    let whole = business_days.trunc() as i64;

    let mut current = date;
    for _ in 0..whole {
        current = snap_forward_past_weekend(current + Duration::days(1));
    }

    let minutes = (1440.0 * (business_days - whole as f64)) as i64;
    snap_forward_past_weekend(current + Duration::minutes(minutes))
}
