//! Walks an event one local day at a time.

use almanac_core::config::ExpansionConfig;
use chrono::{NaiveDate, TimeDelta};

use super::all_day::AllDayPolicy;
use super::day::{day_window, is_day_start};
use super::event::Event;
use super::occurrence::Occurrence;
use super::timezone::{LocalClock, TimeZoneResolver};
use super::window::TimeWindow;
use crate::error::{ExpandError, ExpandResult};

/// Tuning for [`OccurrenceExpander`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpandOptions {
    pub all_day: AllDayPolicy,
    /// Maximum local days an event may span; `None` walks any span.
    pub max_days: Option<u32>,
}

impl ExpandOptions {
    #[must_use]
    pub const fn with_max_days(mut self, max_days: Option<u32>) -> Self {
        self.max_days = max_days;
        self
    }

    #[must_use]
    pub const fn with_all_day(mut self, all_day: AllDayPolicy) -> Self {
        self.all_day = all_day;
        self
    }

    /// ## Summary
    /// Options matching the `[expansion]` settings section.
    ///
    /// ## Errors
    /// Returns `ExpandError::CoreError` if the section fails validation.
    pub fn from_config(config: &ExpansionConfig) -> ExpandResult<Self> {
        config.validate()?;
        Ok(Self {
            all_day: AllDayPolicy::new(config.granularity, config.increment)?,
            max_days: config.day_limit(),
        })
    }
}

/// Splits events into one [`Occurrence`] per local calendar day they touch.
///
/// Holds no mutable state; one expander can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct OccurrenceExpander {
    options: ExpandOptions,
}

impl OccurrenceExpander {
    #[must_use]
    pub const fn new(options: ExpandOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &ExpandOptions {
        &self.options
    }

    /// ## Summary
    /// Expands `event` on the wall clock of `clock`.
    ///
    /// Occurrences come back in chronological order with sequence indices
    /// 0, 1, 2, ... . Days the event does not overlap are skipped, and an
    /// event entirely outside its view range yields an empty list.
    ///
    /// `event.display_timezone` is not consulted; the caller has already
    /// resolved it into `clock`.
    ///
    /// ## Errors
    /// Returns `ExpandError::InvalidInterval` if the event ends before it starts,
    /// `ExpandError::DayLimitExceeded` if it spans more days than allowed, or an
    /// error if a local day boundary cannot be resolved.
    #[tracing::instrument(skip(self, event, clock), fields(identity = %event.identity))]
    pub fn expand<C: LocalClock + ?Sized>(
        &self,
        event: &Event,
        clock: &C,
    ) -> ExpandResult<Vec<Occurrence>> {
        let Some(range) = event.effective_window()? else {
            tracing::debug!("Event lies outside the view range");
            return Ok(Vec::new());
        };

        let first_day = clock.local_date(range.start());
        let last_day = last_touched_day(clock, &range)?;
        let days = (last_day - first_day).num_days() + 1;

        if let Some(limit) = self
            .options
            .max_days
            .filter(|&limit| days > i64::from(limit))
        {
            tracing::warn!(days, limit, "Event spans too many days");
            return Err(ExpandError::DayLimitExceeded {
                identity: event.identity.clone(),
                days,
                limit,
            });
        }

        let mut occurrences = Vec::with_capacity(usize::try_from(days).unwrap_or_default());
        for day in first_day.iter_days().take_while(|day| *day <= last_day) {
            let Some(clipped) = day_window(clock, day)?.clip(&range) else {
                tracing::trace!(%day, "No overlap");
                continue;
            };

            let is_all_day = self.options.all_day.is_all_day(clock, &clipped)?;
            let local = (clock.to_local(clipped.start()), clock.to_local(clipped.end()));
            occurrences.push(Occurrence::new(
                &event.identity,
                occurrences.len(),
                day,
                clipped,
                local,
                is_all_day,
            ));
        }

        tracing::debug!(
            count = occurrences.len(),
            %first_day,
            %last_day,
            "Expanded event into occurrences"
        );
        Ok(occurrences)
    }

    /// ## Summary
    /// Resolves `event.display_timezone` and expands the event in it.
    ///
    /// ## Errors
    /// Returns `ExpandError::Timezone` if the identifier is unknown, otherwise as
    /// [`Self::expand`].
    pub fn expand_in_zone(
        &self,
        event: &Event,
        resolver: &mut TimeZoneResolver,
    ) -> ExpandResult<Vec<Occurrence>> {
        let tz = resolver.resolve(&event.display_timezone)?;
        self.expand(event, &tz)
    }
}

/// Local date of the range's end, except that an end falling exactly on the
/// start of a day belongs to the previous day.
fn last_touched_day<C: LocalClock + ?Sized>(
    clock: &C,
    range: &TimeWindow,
) -> ExpandResult<NaiveDate> {
    let end_day = clock.local_date(range.end());
    if range.duration() > TimeDelta::zero() && is_day_start(clock, range.end())? {
        return Ok(end_day.pred_opt().unwrap_or(end_day));
    }
    Ok(end_day)
}
