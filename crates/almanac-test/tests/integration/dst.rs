use almanac_test::expand::expand::{LocalClock, Occurrence, day_window};
use almanac_test::fixtures::{date, event, expand_on, local, local_summary, utc};
use chrono::TimeDelta;
use chrono_tz::Tz;

#[test_log::test]
fn spring_forward_in_berlin() {
    // 2024-03-31 02:00 CET -> 03:00 CEST
    let tz = Tz::Europe__Berlin;
    let occurrences = expand_on(
        &event("1.field_date", utc(2024, 3, 30, 11, 0, 0), utc(2024, 4, 1, 10, 0, 0), "Europe/Berlin"),
        &tz,
    )
    .expect("expansion succeeds");

    assert_eq!(
        local_summary(&occurrences),
        vec![
            (local(2024, 3, 30, 12, 0, 0), local(2024, 3, 30, 23, 59, 59), false),
            (local(2024, 3, 31, 0, 0, 0), local(2024, 3, 31, 23, 59, 59), true),
            (local(2024, 4, 1, 0, 0, 0), local(2024, 4, 1, 12, 0, 0), false),
        ]
    );
    assert_eq!(
        occurrences[1].duration(),
        TimeDelta::hours(23) - TimeDelta::seconds(1)
    );
}

#[test_log::test]
fn fall_back_in_new_york() {
    // 2024-11-03 02:00 EDT -> 01:00 EST
    let tz = Tz::America__New_York;
    let occurrences = expand_on(
        &event("2.field_date", utc(2024, 11, 2, 16, 0, 0), utc(2024, 11, 4, 17, 0, 0), "America/New_York"),
        &tz,
    )
    .expect("expansion succeeds");

    let days: Vec<_> = occurrences.iter().map(Occurrence::day).collect();
    assert_eq!(days, vec![date(2024, 11, 2), date(2024, 11, 3), date(2024, 11, 4)]);
    assert!(occurrences[1].is_all_day());
    assert_eq!(
        occurrences[1].duration(),
        TimeDelta::hours(25) - TimeDelta::seconds(1)
    );
    assert_eq!(occurrences[2].local_end(), local(2024, 11, 4, 12, 0, 0));
}

#[test_log::test]
fn fixed_day_steps_would_drift_but_local_days_do_not() {
    // Four weeks across the Sydney DST end (2024-04-07)
    let tz = Tz::Australia__Sydney;
    let start = utc(2024, 3, 20, 13, 0, 0);
    let occurrences = expand_on(
        &event("3.field_date", start, start + TimeDelta::days(28), "Australia/Sydney"),
        &tz,
    )
    .expect("expansion succeeds");

    for occurrence in &occurrences[1..occurrences.len() - 1] {
        assert!(occurrence.is_all_day(), "{} is not all-day", occurrence.id());
        assert_eq!(occurrence.local_start().time(), chrono::NaiveTime::MIN);
        assert_eq!(tz.local_date(occurrence.local_day_start()), occurrence.day());
    }
    let mut days: Vec<_> = occurrences.iter().map(Occurrence::day).collect();
    days.dedup();
    assert_eq!(days.len(), occurrences.len());
}

#[test_log::test]
fn midnight_skipped_by_dst_starts_day_after_gap() {
    // Sao Paulo jumped from 00:00 to 01:00 on 2018-11-04
    let tz = Tz::America__Sao_Paulo;
    let occurrences = expand_on(
        &event("4.field_date", utc(2018, 11, 3, 12, 0, 0), utc(2018, 11, 5, 12, 0, 0), "America/Sao_Paulo"),
        &tz,
    )
    .expect("expansion succeeds");

    assert_eq!(occurrences.len(), 3);
    let gap_day = &occurrences[1];
    assert_eq!(gap_day.day(), date(2018, 11, 4));
    assert_eq!(gap_day.local_start(), local(2018, 11, 4, 1, 0, 0));
    assert!(gap_day.is_all_day());
    assert_eq!(
        day_window(&tz, date(2018, 11, 4)).unwrap().start(),
        gap_day.local_day_start()
    );
}
