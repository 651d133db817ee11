//! Local day boundaries.
//!
//! Boundaries are computed on the wall clock and converted to instants one at
//! a time, so 23 and 25 hour days come out right.

use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};

use super::timezone::LocalClock;
use super::window::TimeWindow;
use crate::error::{ExpandError, ExpandResult};

/// ## Summary
/// Maps a wall-clock time to a single instant.
///
/// Ambiguous times (DST fold) take the earlier instant. Times skipped by a
/// forward transition (DST gap) map to the first instant after the gap.
///
/// ## Errors
/// Returns `ExpandError::UnresolvableLocalTime` if neither `local` nor the same
/// time a day earlier exists on the clock.
pub fn resolve_local<C: LocalClock + ?Sized>(
    clock: &C,
    local: NaiveDateTime,
) -> ExpandResult<DateTime<Utc>> {
    match clock.to_instant(local) {
        LocalResult::Single(instant) | LocalResult::Ambiguous(instant, _) => Ok(instant),
        LocalResult::None => {
            // Reading the skipped time with the offset in force before the
            // transition lands just past the gap.
            let earlier = local - TimeDelta::days(1);
            match clock.to_instant(earlier) {
                LocalResult::Single(instant) | LocalResult::Ambiguous(instant, _) => {
                    let offset = earlier - instant.naive_utc();
                    let resolved = DateTime::from_naive_utc_and_offset(local - offset, Utc);
                    tracing::trace!(%local, %resolved, "Local time falls in a DST gap");
                    Ok(resolved)
                }
                LocalResult::None => Err(ExpandError::UnresolvableLocalTime(local)),
            }
        }
    }
}

/// ## Summary
/// First instant of `date` on the clock; usually local midnight.
///
/// ## Errors
/// Returns an error if the start of the day cannot be resolved.
pub fn local_midnight<C: LocalClock + ?Sized>(
    clock: &C,
    date: NaiveDate,
) -> ExpandResult<DateTime<Utc>> {
    resolve_local(clock, date.and_time(NaiveTime::MIN))
}

/// ## Summary
/// The window covering `date`: from its first instant to one second before
/// the next day begins.
///
/// ## Errors
/// Returns an error if either boundary cannot be resolved or `date` is the
/// last representable date.
pub fn day_window<C: LocalClock + ?Sized>(clock: &C, date: NaiveDate) -> ExpandResult<TimeWindow> {
    let next = date.succ_opt().ok_or(ExpandError::DateOutOfRange(date))?;
    let start = local_midnight(clock, date)?;
    let end = local_midnight(clock, next)? - TimeDelta::seconds(1);
    TimeWindow::new(start, end)
}

/// ## Summary
/// True when `instant` is the first instant of its local day.
///
/// ## Errors
/// Returns an error if the start of the day cannot be resolved.
pub fn is_day_start<C: LocalClock + ?Sized>(clock: &C, instant: DateTime<Utc>) -> ExpandResult<bool> {
    Ok(local_midnight(clock, clock.local_date(instant))? == instant)
}
