//! All-day detection on clipped intervals.

use almanac_core::types::Granularity;
use chrono::{DateTime, NaiveTime, Timelike, Utc};

use super::day::is_day_start;
use super::timezone::LocalClock;
use super::window::TimeWindow;
use crate::error::{ExpandError, ExpandResult};

/// Decides whether an interval covers whole local days.
///
/// An interval is all-day when it starts at the beginning of a local day and
/// ends either at the beginning of a later local day or on the last tick of a
/// day. The granularity and increment define that last tick:
///
/// | granularity | last tick                         |
/// |-------------|-----------------------------------|
/// | `day`       | 23:59:59                          |
/// | `second`    | 23:59:59 or 23:59:(60-increment)  |
/// | `minute`    | 23:59 or 23:(60-increment), any s |
/// | `hour`      | any time in hour 23               |
///
/// Only `day`/`1` is what the expander itself relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AllDayPolicy {
    granularity: Granularity,
    increment: u32,
}

impl Default for AllDayPolicy {
    fn default() -> Self {
        Self {
            granularity: Granularity::Day,
            increment: 1,
        }
    }
}

impl AllDayPolicy {
    /// ## Summary
    /// Builds a policy.
    ///
    /// ## Errors
    /// Returns `ExpandError::InvalidPolicy` if `increment` is zero, or not below
    /// 60 for `second`/`minute` granularity.
    pub fn new(granularity: Granularity, increment: u32) -> ExpandResult<Self> {
        if !granularity.accepts_increment(increment) {
            return Err(ExpandError::InvalidPolicy(format!(
                "increment {increment} is out of range for granularity `{granularity}`"
            )));
        }
        Ok(Self {
            granularity,
            increment,
        })
    }

    #[must_use]
    pub const fn granularity(self) -> Granularity {
        self.granularity
    }

    #[must_use]
    pub const fn increment(self) -> u32 {
        self.increment
    }

    /// ## Summary
    /// Applies the policy to a clipped interval.
    ///
    /// Zero-length intervals are never all-day.
    ///
    /// ## Errors
    /// Returns an error if a local day boundary cannot be resolved.
    pub fn is_all_day<C: LocalClock + ?Sized>(
        self,
        clock: &C,
        window: &TimeWindow,
    ) -> ExpandResult<bool> {
        if window.is_instant() || !is_day_start(clock, window.start())? {
            return Ok(false);
        }
        if is_day_start(clock, window.end())? {
            return Ok(true);
        }
        Ok(self.is_last_tick(clock.to_local(window.end()).time()))
    }

    fn is_last_tick(self, time: NaiveTime) -> bool {
        let last = 60 - self.increment.min(59);
        if time.hour() != 23 {
            return false;
        }
        match self.granularity {
            Granularity::Day => time.minute() == 59 && time.second() == 59,
            Granularity::Second => {
                time.minute() == 59 && (time.second() == 59 || time.second() == last)
            }
            Granularity::Minute => time.minute() == 59 || time.minute() == last,
            Granularity::Hour => true,
        }
    }
}

/// ## Summary
/// Standalone form of [`AllDayPolicy::is_all_day`].
///
/// ## Errors
/// Returns `ExpandError::InvalidInterval` if `start` is after `end`, or an error
/// if a local day boundary cannot be resolved.
pub fn is_all_day<C: LocalClock + ?Sized>(
    clock: &C,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    policy: AllDayPolicy,
) -> ExpandResult<bool> {
    policy.is_all_day(clock, &TimeWindow::new(start, end)?)
}
