use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::rows::CalendarItem;

/// ## Summary
/// Buckets items by the local day of their occurrence.
///
/// Days come out in calendar order; within a day, items are ordered by clipped
/// start, keeping input order for ties.
#[must_use]
pub fn group_by_day(items: &[CalendarItem]) -> BTreeMap<NaiveDate, Vec<&CalendarItem>> {
    let mut days: BTreeMap<NaiveDate, Vec<&CalendarItem>> = BTreeMap::new();
    for item in items {
        days.entry(item.occurrence.day()).or_default().push(item);
    }
    for day in days.values_mut() {
        day.sort_by_key(|item| item.occurrence.local_day_start());
    }
    days
}
