//! Builders shared by the integration tests.

use almanac_expand::error::ExpandResult;
use almanac_expand::expand::{Event, LocalClock, Occurrence, OccurrenceExpander, ViewRange};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// ## Summary
/// A UTC instant from calendar fields.
///
/// ## Panics
/// Panics if the fields do not name a valid instant.
#[must_use]
pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
        .single()
        .unwrap_or_else(|| panic!("invalid instant {year}-{month}-{day} {hour}:{minute}:{second}"))
}

/// ## Summary
/// A wall-clock time from calendar fields.
///
/// ## Panics
/// Panics if the fields do not name a valid local time.
#[must_use]
pub fn local(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, minute, second)
        .unwrap_or_else(|| panic!("invalid time {hour}:{minute}:{second}"))
}

/// ## Summary
/// A calendar date.
///
/// ## Panics
/// Panics if the fields do not name a valid date.
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid date {year}-{month}-{day}"))
}

/// An event with an end and no view restriction.
#[must_use]
pub fn event(identity: &str, start: DateTime<Utc>, end: DateTime<Utc>, tz: &str) -> Event {
    Event::new(identity, start, tz).with_end(Some(end))
}

/// An event with an end restricted to a view range.
#[must_use]
pub fn event_in_view(
    identity: &str,
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
    tz: &str,
    view_range: ViewRange,
) -> Event {
    Event::new(identity, start, tz)
        .with_end(end)
        .with_view_range(view_range)
}

/// ## Summary
/// Expands with default options on `clock`.
///
/// ## Errors
/// Propagates expansion failures.
pub fn expand_on<C: LocalClock + ?Sized>(event: &Event, clock: &C) -> ExpandResult<Vec<Occurrence>> {
    OccurrenceExpander::default().expand(event, clock)
}

/// Occurrences reduced to their wall-clock bounds and all-day flag.
#[must_use]
pub fn local_summary(occurrences: &[Occurrence]) -> Vec<(NaiveDateTime, NaiveDateTime, bool)> {
    occurrences
        .iter()
        .map(|o| (o.local_start(), o.local_end(), o.is_all_day()))
        .collect()
}
