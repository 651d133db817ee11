use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Resolution at which an interval's end is compared against the end of a day
/// when deciding whether it covers the whole day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Second,
    Minute,
    Hour,
    #[default]
    Day,
}

impl Granularity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
        }
    }

    /// Whether `increment` is a usable step at this granularity.
    ///
    /// Seconds and minutes need a step within the minute or hour (1..=59);
    /// hours and days only need it to be positive.
    #[must_use]
    pub const fn accepts_increment(self, increment: u32) -> bool {
        match self {
            Self::Second | Self::Minute => increment >= 1 && increment <= 59,
            Self::Hour | Self::Day => increment >= 1,
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Granularity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "second" => Ok(Self::Second),
            "minute" => Ok(Self::Minute),
            "hour" => Ok(Self::Hour),
            "day" => Ok(Self::Day),
            other => Err(CoreError::InvalidInput(format!(
                "unknown granularity `{other}`"
            ))),
        }
    }
}
