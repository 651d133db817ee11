use std::collections::HashSet;

use almanac_core::config::ExpansionConfig;
use almanac_expand::expand::{ExpandOptions, OccurrenceExpander, TimeZoneResolver, ViewRange};

use super::rows::{CalendarItem, ResultRow};
use crate::error::{ServiceError, ServiceResult};

/// Expands the rows of one calendar view into calendar items.
///
/// Every date field of every row becomes an event in the view's display
/// timezone (unless the field names its own) restricted to the view range.
/// A row whose entity already appeared earlier in the same call is skipped.
#[derive(Debug)]
pub struct CalendarRowExpander {
    expander: OccurrenceExpander,
    resolver: TimeZoneResolver,
    display_timezone: String,
    view_range: ViewRange,
}

impl CalendarRowExpander {
    #[must_use]
    pub fn new(
        expander: OccurrenceExpander,
        display_timezone: impl Into<String>,
        view_range: ViewRange,
    ) -> Self {
        Self {
            expander,
            resolver: TimeZoneResolver::new(),
            display_timezone: display_timezone.into(),
            view_range,
        }
    }

    /// ## Summary
    /// Builds an expander from the `[expansion]` settings section.
    ///
    /// ## Errors
    /// Returns an error if the section fails validation, or the display
    /// timezone cannot be resolved.
    pub fn from_config(config: &ExpansionConfig, view_range: ViewRange) -> ServiceResult<Self> {
        let options = ExpandOptions::from_config(config)?;
        let mut this = Self::new(
            OccurrenceExpander::new(options),
            config.display_timezone.clone(),
            view_range,
        );
        this.resolver.resolve(&this.display_timezone)?;
        Ok(this)
    }

    #[must_use]
    pub fn display_timezone(&self) -> &str {
        &self.display_timezone
    }

    #[must_use]
    pub const fn view_range(&self) -> ViewRange {
        self.view_range
    }

    /// ## Summary
    /// Expands `rows` in order.
    ///
    /// Items are grouped by row and field, in the order those were given, and
    /// each field's occurrences are chronological. Rows that repeat an entity
    /// id seen earlier in this call contribute nothing.
    ///
    /// ## Errors
    /// Returns the first expansion failure: an unknown timezone, an event that
    /// ends before it starts, or an event longer than the configured day limit.
    #[tracing::instrument(skip(self, rows), fields(rows = rows.len()))]
    pub fn expand_rows(&mut self, rows: &[ResultRow]) -> ServiceResult<Vec<CalendarItem>> {
        if rows.iter().any(|row| row.entity_id.is_empty()) {
            return Err(ServiceError::ValidationError(
                "result row without an entity id".to_string(),
            ));
        }

        let mut seen: HashSet<&str> = HashSet::new();
        let mut items = Vec::new();

        for row in rows {
            if !seen.insert(row.entity_id.as_str()) {
                tracing::debug!(entity_id = %row.entity_id, "Skipping repeated entity");
                continue;
            }

            for field in &row.fields {
                let event = row.event(field, &self.display_timezone, self.view_range);
                let occurrences = self.expander.expand_in_zone(&event, &mut self.resolver)?;

                items.extend(occurrences.into_iter().map(|occurrence| CalendarItem {
                    entity_id: row.entity_id.clone(),
                    field_name: field.name.clone(),
                    occurrence,
                }));
            }
        }

        tracing::debug!(
            items = items.len(),
            entities = seen.len(),
            "Expanded calendar rows"
        );
        Ok(items)
    }
}
