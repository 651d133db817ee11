use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use super::window::TimeWindow;
use crate::error::ExpandResult;

/// Date range shown by a calendar view. Either side may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ViewRange {
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
}

impl ViewRange {
    #[must_use]
    pub const fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    /// A range with no bounds.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// A range open to the past and closed at `end`.
    #[must_use]
    pub const fn until(end: DateTime<Utc>) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }

    /// ## Summary
    /// Narrows `window` to this range, or `None` if nothing of it is visible.
    ///
    /// Range bounds are compared at whole-second resolution.
    #[must_use]
    pub fn restrict(&self, window: &TimeWindow) -> Option<TimeWindow> {
        let start = self
            .start
            .map_or(window.start(), |start| start.trunc_subsecs(0).max(window.start()));
        let end = self
            .end
            .map_or(window.end(), |end| end.trunc_subsecs(0).min(window.end()));
        TimeWindow::new(start, end).ok()
    }
}

/// A single resolved calendar event, as handed to the expander.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    /// Prefix for occurrence ids, typically `<entity id>.<field name>`.
    pub identity: String,
    pub start: DateTime<Utc>,
    /// Missing means the event is a single instant at `start`.
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    /// Timezone identifier whose local days the event is split on.
    pub display_timezone: String,
    #[serde(default)]
    pub view_range: ViewRange,
}

impl Event {
    #[must_use]
    pub fn new(
        identity: impl Into<String>,
        start: DateTime<Utc>,
        display_timezone: impl Into<String>,
    ) -> Self {
        Self {
            identity: identity.into(),
            start,
            end: None,
            display_timezone: display_timezone.into(),
            view_range: ViewRange::unbounded(),
        }
    }

    #[must_use]
    pub fn with_end(mut self, end: Option<DateTime<Utc>>) -> Self {
        self.end = end;
        self
    }

    #[must_use]
    pub fn with_view_range(mut self, view_range: ViewRange) -> Self {
        self.view_range = view_range;
        self
    }

    /// The event's end, falling back to its start.
    #[must_use]
    pub fn end_instant(&self) -> DateTime<Utc> {
        self.end.unwrap_or(self.start)
    }

    /// ## Summary
    /// The event's own interval, truncated to whole seconds.
    ///
    /// Days end on their last whole second, so a fractional instant in that
    /// second would otherwise fall between two days.
    ///
    /// ## Errors
    /// Returns `ExpandError::InvalidInterval` if the event ends before it starts.
    pub fn window(&self) -> ExpandResult<TimeWindow> {
        let exact = TimeWindow::new(self.start, self.end_instant())?;
        Ok(TimeWindow::from_ordered(
            exact.start().trunc_subsecs(0),
            exact.end().trunc_subsecs(0),
        ))
    }

    /// ## Summary
    /// The part of the event inside its view range, or `None` when the view
    /// excludes it entirely.
    ///
    /// ## Errors
    /// Returns `ExpandError::InvalidInterval` if the event ends before it starts.
    pub fn effective_window(&self) -> ExpandResult<Option<TimeWindow>> {
        Ok(self.view_range.restrict(&self.window()?))
    }
}
