use chrono::{Datelike, Days, NaiveDate};

/// First Monday on or after January 1st of `year`.
///
/// Returns `None` only when `year` is outside the range chrono supports.
pub fn first_monday_of_year(year: i32) -> Option<NaiveDate> {
    let jan1st: NaiveDate = NaiveDate::from_ymd_opt(year, 1, 1)?;
    // 0 when Jan 1st is itself a Monday, at most 6 otherwise
    let ahead: u64 = (7 - u64::from(jan1st.weekday().num_days_from_monday())) % 7;
    jan1st.checked_add_days(Days::new(ahead))
}

/// Monday of `week` counted from the first Monday of `year` (week 1).
///
/// The week number is not range-checked; pass one derived from a real
/// calendar, such as `iso_week().week()`.
pub fn monday_of_the_week(year: i32, week: u32) -> Option<NaiveDate> {
    let first_monday: NaiveDate = first_monday_of_year(year)?;
    let offset: u64 = u64::from(week.saturating_sub(1)) * 7;
    first_monday.checked_add_days(Days::new(offset))
}
