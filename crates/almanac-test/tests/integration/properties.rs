use almanac_test::expand::error::ExpandError;
use almanac_test::expand::expand::{
    AllDayPolicy, Occurrence, OccurrenceExpander, TimeWindow, ViewRange, is_all_day,
};
use almanac_test::fixtures::{event, event_in_view, expand_on, utc};
use chrono::{TimeDelta, Utc};
use chrono_tz::Tz;

/// Checks that consecutive occurrences tile `expected` at one-second precision.
fn assert_tiles(occurrences: &[Occurrence], expected: TimeWindow) {
    let (Some(first), Some(last)) = (occurrences.first(), occurrences.last()) else {
        panic!("expected at least one occurrence");
    };
    assert_eq!(first.local_day_start(), expected.start());
    assert_eq!(last.local_day_end(), expected.end());

    for (index, occurrence) in occurrences.iter().enumerate() {
        assert_eq!(occurrence.sequence_index(), index);
        assert!(occurrence.local_day_start() <= occurrence.local_day_end());
    }
    for pair in occurrences.windows(2) {
        assert_eq!(
            pair[1].local_day_start() - pair[0].local_day_end(),
            TimeDelta::seconds(1),
            "gap or overlap between {} and {}",
            pair[0].id(),
            pair[1].id()
        );
    }
}

#[test_log::test]
fn multi_day_span_in_utc() {
    let occurrences = expand_on(
        &event("9.field_date", utc(2024, 1, 1, 22, 0, 0), utc(2024, 1, 3, 2, 0, 0), "UTC"),
        &Utc,
    )
    .expect("expansion succeeds");

    let rows: Vec<_> = occurrences
        .iter()
        .map(|o| {
            (
                o.id().to_string(),
                o.local_day_start(),
                o.local_day_end(),
                o.is_all_day(),
            )
        })
        .collect();
    assert_eq!(
        rows,
        vec![
            (
                "9.field_date.0".to_string(),
                utc(2024, 1, 1, 22, 0, 0),
                utc(2024, 1, 1, 23, 59, 59),
                false
            ),
            (
                "9.field_date.1".to_string(),
                utc(2024, 1, 2, 0, 0, 0),
                utc(2024, 1, 2, 23, 59, 59),
                true
            ),
            (
                "9.field_date.2".to_string(),
                utc(2024, 1, 3, 0, 0, 0),
                utc(2024, 1, 3, 2, 0, 0),
                false
            ),
        ]
    );
}

#[test_log::test]
fn occurrences_tile_the_event() {
    let start = utc(2024, 2, 27, 5, 17, 3);
    let end = utc(2024, 3, 4, 19, 45, 0);

    for tz in [Tz::UTC, Tz::America__Los_Angeles, Tz::Asia__Kolkata, Tz::Pacific__Chatham] {
        let occurrences =
            expand_on(&event("1.field_date", start, end, tz.name()), &tz).expect("expansion succeeds");

        assert_tiles(&occurrences, TimeWindow::new(start, end).unwrap());
    }
}

#[test_log::test]
fn occurrences_tile_the_visible_part() {
    let view = ViewRange::new(Some(utc(2024, 5, 3, 12, 0, 0)), Some(utc(2024, 5, 6, 6, 30, 0)));
    let occurrences = expand_on(
        &event_in_view(
            "1.field_date",
            utc(2024, 5, 1, 8, 0, 0),
            Some(utc(2024, 5, 20, 8, 0, 0)),
            "Europe/London",
            view,
        ),
        &Tz::Europe__London,
    )
    .expect("expansion succeeds");

    assert_eq!(occurrences.len(), 4);
    assert_tiles(
        &occurrences,
        TimeWindow::new(utc(2024, 5, 3, 12, 0, 0), utc(2024, 5, 6, 6, 30, 0)).unwrap(),
    );
}

#[test_log::test]
fn expansion_is_idempotent() {
    let ev = event(
        "3.field_range",
        utc(2024, 10, 25, 18, 0, 0),
        utc(2024, 11, 5, 7, 0, 0),
        "America/New_York",
    );
    let expander = OccurrenceExpander::default();

    let first = expander.expand(&ev, &Tz::America__New_York).unwrap();
    let second = expander.expand(&ev, &Tz::America__New_York).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
}

#[test_log::test]
fn zero_duration_event_yields_one_instant() {
    for instant in [utc(2024, 7, 4, 15, 30, 0), utc(2024, 7, 4, 0, 0, 0)] {
        let occurrences = expand_on(&event_in_view("4.field_date", instant, None, "UTC", ViewRange::unbounded()), &Utc)
            .expect("expansion succeeds");

        assert_eq!(occurrences.len(), 1);
        assert_eq!(occurrences[0].local_day_start(), instant);
        assert_eq!(occurrences[0].local_day_end(), instant);
        assert!(!occurrences[0].is_all_day());
    }
}

#[test_log::test]
fn zero_duration_event_outside_view_is_empty() {
    let occurrences = expand_on(
        &event_in_view(
            "4.field_date",
            utc(2024, 7, 4, 15, 30, 0),
            None,
            "UTC",
            ViewRange::until(utc(2024, 7, 4, 15, 29, 59)),
        ),
        &Utc,
    )
    .expect("expansion succeeds");

    assert!(occurrences.is_empty());
}

#[test_log::test]
fn event_after_view_end_is_empty() {
    let occurrences = expand_on(
        &event_in_view(
            "5.field_date",
            utc(2024, 2, 1, 9, 0, 0),
            Some(utc(2024, 2, 3, 9, 0, 0)),
            "UTC",
            ViewRange::until(utc(2024, 1, 31, 23, 59, 59)),
        ),
        &Utc,
    )
    .expect("expansion succeeds");

    assert!(occurrences.is_empty());
}

#[test_log::test]
fn event_ending_at_local_midnight_does_not_spill() {
    // Midnight in Berlin, 23:00 UTC the evening before
    let occurrences = expand_on(
        &event(
            "6.field_date",
            utc(2024, 1, 9, 8, 0, 0),
            utc(2024, 1, 10, 23, 0, 0),
            "Europe/Berlin",
        ),
        &Tz::Europe__Berlin,
    )
    .expect("expansion succeeds");

    assert_eq!(occurrences.len(), 2);
    assert!(occurrences[1].is_all_day());
}

#[test_log::test]
fn all_day_boundary() {
    let midnight = utc(2024, 3, 12, 0, 0, 0);
    let policy = AllDayPolicy::default();

    assert!(is_all_day(&Utc, midnight, midnight + TimeDelta::days(1), policy).unwrap());
    assert!(is_all_day(&Utc, midnight, utc(2024, 3, 12, 23, 59, 59), policy).unwrap());
    assert!(!is_all_day(&Utc, midnight, utc(2024, 3, 12, 23, 59, 58), policy).unwrap());
}

#[test_log::test]
fn inverted_event_is_a_caller_error() {
    let err = expand_on(
        &event("7.field_date", utc(2024, 3, 2, 0, 0, 0), utc(2024, 3, 1, 0, 0, 0), "UTC"),
        &Utc,
    )
    .unwrap_err();

    assert!(matches!(err, ExpandError::InvalidInterval { .. }));
}

#[test_log::test]
fn fractional_instants_tile_on_whole_seconds() {
    let start = utc(2024, 3, 30, 22, 59, 59) + TimeDelta::milliseconds(900);
    let end = utc(2024, 4, 1, 21, 59, 59) + TimeDelta::milliseconds(999);
    let occurrences = expand_on(
        &event("4.field_date", start, end, "Europe/Berlin"),
        &Tz::Europe__Berlin,
    )
    .expect("expansion succeeds");

    // 2024-03-30 23:59:59 CET .. 2024-04-01 23:59:59 CEST
    assert_eq!(occurrences.len(), 3);
    assert_tiles(
        &occurrences,
        TimeWindow::new(utc(2024, 3, 30, 22, 59, 59), utc(2024, 4, 1, 21, 59, 59)).unwrap(),
    );
    assert!(occurrences[1].is_all_day());
    assert!(occurrences[2].is_all_day());
}
