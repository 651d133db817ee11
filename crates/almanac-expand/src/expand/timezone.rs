//! Timezone resolution and the wall-clock capability the expander runs on.
//!
//! Uses ICU4X for Windows timezone ID to IANA mapping and timezone canonicalization.

use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use icu::time::zone::WindowsParser;
use icu::time::zone::iana::IanaParserExtended;
use std::collections::HashMap;
use std::str::FromStr;

/// Error during timezone resolution.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// Unknown or invalid timezone identifier.
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

/// Translation between absolute instants and local wall-clock time.
///
/// This is all the expander needs from a timezone. Every `chrono::TimeZone`
/// implements it, so `chrono_tz::Tz`, `Utc` and `FixedOffset` can be passed
/// directly.
pub trait LocalClock {
    /// Wall-clock time at `instant`.
    fn to_local(&self, instant: DateTime<Utc>) -> NaiveDateTime;

    /// Instants showing `local` on the wall clock: none inside a DST gap,
    /// two inside a DST fold.
    fn to_instant(&self, local: NaiveDateTime) -> LocalResult<DateTime<Utc>>;

    /// Calendar date at `instant`.
    fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        self.to_local(instant).date()
    }
}

impl<Z: TimeZone> LocalClock for Z {
    fn to_local(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.with_timezone(self).naive_local()
    }

    fn to_instant(&self, local: NaiveDateTime) -> LocalResult<DateTime<Utc>> {
        self.from_local_datetime(&local)
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Resolver for timezone identifiers.
///
/// Maintains a cache of resolved timezones. A resolver is cheap to create;
/// give each worker its own.
#[derive(Debug, Default)]
pub struct TimeZoneResolver {
    /// Cache of resolved IANA timezones by identifier.
    cache: HashMap<String, Tz>,
}

impl TimeZoneResolver {
    /// Creates a new timezone resolver.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// ## Summary
    /// Resolves a timezone identifier to a `chrono_tz::Tz`.
    ///
    /// Windows zone names, vendor-prefixed identifiers and IANA aliases are
    /// mapped to their canonical IANA equivalents first.
    ///
    /// ## Errors
    ///
    /// Returns `ConversionError::UnknownTimezone` if the identifier cannot be resolved.
    ///
    /// ## Side Effects
    ///
    /// Caches successful resolutions to avoid repeated parsing.
    pub fn resolve(&mut self, tzid: &str) -> Result<Tz, ConversionError> {
        if let Some(tz) = self.cache.get(tzid) {
            return Ok(*tz);
        }

        let normalized = normalize_tzid(tzid);

        let tz = Tz::from_str(&normalized).map_err(|_e| {
            tracing::warn!(tzid, normalized = %normalized, "Unknown timezone identifier");
            ConversionError::UnknownTimezone(tzid.to_string())
        })?;

        tracing::trace!(tzid, resolved = %tz, "Resolved timezone");
        self.cache.insert(tzid.to_string(), tz);

        Ok(tz)
    }

    /// ## Summary
    /// Number of identifiers resolved so far.
    #[must_use]
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

/// Normalizes common calendar-client timezone identifiers to IANA names.
///
/// Uses ICU4X for Windows timezone ID mapping and IANA canonicalization.
fn normalize_tzid(tzid: &str) -> String {
    let trimmed = tzid.trim();
    let stripped = trimmed
        .strip_prefix("/mozilla.org/")
        .or_else(|| trimmed.strip_prefix("/softwarestudio.org/"))
        .unwrap_or(trimmed);

    // Windows names first ("W. Europe Standard Time")
    let windows_parser = WindowsParser::new();
    if let Some(tz) = windows_parser.parse(stripped, None) {
        let iana_parser = IanaParserExtended::new();
        for entry in iana_parser.iter() {
            if entry.time_zone == tz {
                return entry.canonical.to_string();
            }
        }
    }

    // Aliases such as Europe/Kiev -> Europe/Kyiv
    let iana_parser = IanaParserExtended::new();
    let parsed = iana_parser.parse(stripped);
    if parsed.time_zone != icu::time::TimeZone::UNKNOWN {
        return parsed.canonical.to_string();
    }

    stripped.to_string()
}
