use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// The next `count` occurrences of `weekday` strictly after `today`,
/// ascending, spaced exactly seven days apart. When `today` itself falls on
/// `weekday`, the sequence starts a full week out.
pub fn upcoming_weekdays(today: NaiveDate, weekday: Weekday, count: usize) -> Vec<NaiveDate> {
    let mut offset = (i64::from(weekday.num_days_from_monday())
        - i64::from(today.weekday().num_days_from_monday()))
    .rem_euclid(7);
    if offset == 0 {
        offset = 7;
    }
    let first = today + Duration::days(offset);
    (0..count)
        .map(|week| first + Duration::weeks(week as i64))
        .collect()
}

/// The next `count` consecutive calendar dates starting at `today + 1`.
pub fn following_days(today: NaiveDate, count: usize) -> Vec<NaiveDate> {
    (1..=count as i64).map(|day| today + Duration::days(day)).collect()
}
