use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

use crate::expand::ConversionError;

/// Errors raised while expanding an event into occurrences.
///
/// Events that simply fall outside the view are not errors; they expand to
/// an empty list.
#[derive(Error, Debug)]
pub enum ExpandError {
    #[error("Invalid interval: start {start} is after end {end}")]
    InvalidInterval {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Event `{identity}` spans {days} days, more than the limit of {limit}")]
    DayLimitExceeded {
        identity: String,
        days: i64,
        limit: u32,
    },

    #[error("Local time {0} cannot be mapped to an instant")]
    UnresolvableLocalTime(NaiveDateTime),

    #[error("Date {0} is at the edge of the supported calendar")]
    DateOutOfRange(NaiveDate),

    #[error("Invalid all-day policy: {0}")]
    InvalidPolicy(String),

    #[error(transparent)]
    Timezone(#[from] ConversionError),

    #[error(transparent)]
    CoreError(#[from] almanac_core::error::CoreError),
}

pub type ExpandResult<T> = std::result::Result<T, ExpandError>;
