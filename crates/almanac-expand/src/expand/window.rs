//! Closed time intervals and clipping.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use crate::error::{ExpandError, ExpandResult};

/// A closed interval `[start, end]` of instants with `start <= end`.
///
/// The ordering invariant is checked once, at construction, so clipping two
/// windows never has to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeWindow {
    /// ## Summary
    /// Creates a window from its bounds.
    ///
    /// ## Errors
    /// Returns `ExpandError::InvalidInterval` if `start` is after `end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> ExpandResult<Self> {
        if start > end {
            return Err(ExpandError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Bounds already known to be ordered.
    pub(crate) const fn from_ordered(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// A zero-length window at `instant`.
    #[must_use]
    pub const fn instant(instant: DateTime<Utc>) -> Self {
        Self {
            start: instant,
            end: instant,
        }
    }

    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// True when the window covers a single instant.
    #[must_use]
    pub fn is_instant(&self) -> bool {
        self.start == self.end
    }

    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// ## Summary
    /// Intersection of two windows, or `None` when they do not overlap.
    ///
    /// Windows that only share an endpoint overlap in that single instant.
    #[must_use]
    pub fn clip(&self, other: &Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start <= end).then_some(Self { start, end })
    }
}

/// ## Summary
/// Clips an event to a day window.
///
/// A missing `event_end` means the event is a single instant at `event_start`.
///
/// ## Errors
/// Returns `ExpandError::InvalidInterval` if either pair of bounds is inverted.
pub fn clip(
    day_start: DateTime<Utc>,
    day_end: DateTime<Utc>,
    event_start: DateTime<Utc>,
    event_end: Option<DateTime<Utc>>,
) -> ExpandResult<Option<TimeWindow>> {
    let day = TimeWindow::new(day_start, day_end)?;
    let event = TimeWindow::new(event_start, event_end.unwrap_or(event_start))?;
    Ok(day.clip(&event))
}
