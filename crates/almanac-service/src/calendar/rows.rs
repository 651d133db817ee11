use almanac_core::constants::IDENTITY_SEPARATOR;
use almanac_expand::expand::{Event, Occurrence, ViewRange};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row returned by a calendar view query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    pub entity_id: String,
    /// Date fields of the entity that the view places on the calendar.
    #[serde(default)]
    pub fields: Vec<DateField>,
}

/// A start/end value read from one date field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateField {
    pub name: String,
    pub start: DateTime<Utc>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    /// Overrides the view's display timezone for this field.
    #[serde(default)]
    pub timezone: Option<String>,
}

impl ResultRow {
    #[must_use]
    pub fn new(entity_id: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, field: DateField) -> Self {
        self.fields.push(field);
        self
    }

    /// `<entity id>.<field name>`
    #[must_use]
    pub fn identity(&self, field: &DateField) -> String {
        format!("{}{IDENTITY_SEPARATOR}{}", self.entity_id, field.name)
    }

    /// ## Summary
    /// Builds the event for one of this row's date fields.
    #[must_use]
    pub fn event(&self, field: &DateField, display_timezone: &str, view_range: ViewRange) -> Event {
        let timezone = field.timezone.as_deref().unwrap_or(display_timezone);
        Event::new(self.identity(field), field.start, timezone)
            .with_end(field.end)
            .with_view_range(view_range)
    }
}

impl DateField {
    #[must_use]
    pub fn new(name: impl Into<String>, start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            timezone: None,
        }
    }

    #[must_use]
    pub fn in_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }
}

/// An occurrence placed on the calendar, with the row it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarItem {
    pub entity_id: String,
    pub field_name: String,
    pub occurrence: Occurrence,
}
