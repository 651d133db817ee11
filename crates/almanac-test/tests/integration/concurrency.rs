use std::thread;

use almanac_test::expand::expand::{Event, OccurrenceExpander};
use almanac_test::fixtures::{event, utc};
use chrono::TimeDelta;
use chrono_tz::Tz;

#[test_log::test]
fn one_expander_serves_many_threads() {
    let expander = OccurrenceExpander::default();
    let tz = Tz::Europe__Paris;
    let events: Vec<Event> = (0..16)
        .map(|i| {
            let start = utc(2024, 3, 1, 6, 0, 0) + TimeDelta::hours(i * 13);
            event(&format!("{i}.field_date"), start, start + TimeDelta::hours(50), "Europe/Paris")
        })
        .collect();

    let sequential: Vec<_> = events
        .iter()
        .map(|ev| expander.expand(ev, &tz).expect("expansion succeeds"))
        .collect();

    let (expander, tz) = (&expander, &tz);
    let parallel: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = events
            .iter()
            .map(|ev| scope.spawn(move || expander.expand(ev, tz).expect("expansion succeeds")))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("worker finished"))
            .collect()
    });

    assert_eq!(sequential, parallel);
}
