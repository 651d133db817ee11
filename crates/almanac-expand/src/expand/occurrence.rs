use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};
use serde::{Serialize, Serializer};

use super::window::TimeWindow;
use almanac_core::constants::OCCURRENCE_ID_SEPARATOR;

/// `<event identity>.<sequence index>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OccurrenceId {
    identity: String,
    index: usize,
}

impl OccurrenceId {
    #[must_use]
    pub fn new(identity: impl Into<String>, index: usize) -> Self {
        Self {
            identity: identity.into(),
            index,
        }
    }

    #[must_use]
    pub fn identity(&self) -> &str {
        &self.identity
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }
}

impl std::fmt::Display for OccurrenceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{OCCURRENCE_ID_SEPARATOR}{}", self.identity, self.index)
    }
}

impl Serialize for OccurrenceId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The part of an event falling on one local calendar day.
///
/// Built once by the expander and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Occurrence {
    id: OccurrenceId,
    sequence_index: usize,
    day: NaiveDate,
    local_day_start: DateTime<Utc>,
    local_day_end: DateTime<Utc>,
    local_start: NaiveDateTime,
    local_end: NaiveDateTime,
    is_all_day: bool,
}

impl Occurrence {
    pub(crate) fn new(
        identity: &str,
        sequence_index: usize,
        day: NaiveDate,
        window: TimeWindow,
        local: (NaiveDateTime, NaiveDateTime),
        is_all_day: bool,
    ) -> Self {
        Self {
            id: OccurrenceId::new(identity, sequence_index),
            sequence_index,
            day,
            local_day_start: window.start(),
            local_day_end: window.end(),
            local_start: local.0,
            local_end: local.1,
            is_all_day,
        }
    }

    #[must_use]
    pub const fn id(&self) -> &OccurrenceId {
        &self.id
    }

    #[must_use]
    pub const fn sequence_index(&self) -> usize {
        self.sequence_index
    }

    /// Local calendar date this occurrence belongs to.
    #[must_use]
    pub const fn day(&self) -> NaiveDate {
        self.day
    }

    /// Clipped start of the event on this day.
    #[must_use]
    pub const fn local_day_start(&self) -> DateTime<Utc> {
        self.local_day_start
    }

    /// Clipped end of the event on this day.
    #[must_use]
    pub const fn local_day_end(&self) -> DateTime<Utc> {
        self.local_day_end
    }

    /// [`Self::local_day_start`] on the display timezone's wall clock.
    #[must_use]
    pub const fn local_start(&self) -> NaiveDateTime {
        self.local_start
    }

    /// [`Self::local_day_end`] on the display timezone's wall clock.
    #[must_use]
    pub const fn local_end(&self) -> NaiveDateTime {
        self.local_end
    }

    #[must_use]
    pub const fn is_all_day(&self) -> bool {
        self.is_all_day
    }

    #[must_use]
    pub const fn window(&self) -> TimeWindow {
        TimeWindow::from_ordered(self.local_day_start, self.local_day_end)
    }

    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.local_day_end - self.local_day_start
    }
}
