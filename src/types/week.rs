use chrono::{Datelike, Days, NaiveDate};

use crate::core::calendar;

/// Bucket key identifying a calendar week by the date of its Monday.
///
/// Equality, hashing and ordering are those of the wrapped `NaiveDate`, so two
/// keys compare equal exactly when they name the same calendar day. Every date
/// falling in a given ISO (year, week) maps to the same key.
///
/// The Monday is computed with [`calendar::monday_of_the_week`], i.e. anchored
/// on the first Monday on or after Jan 1 of the ISO year. For years whose ISO
/// week 1 starts in late December this is one week later than the ISO Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekKey(NaiveDate);

impl WeekKey {
    /// Key of the week containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        match calendar::monday_of_the_week(iso.year(), iso.week()) {
            Some(monday) => WeekKey(monday),
            // only reachable at the edges of chrono's supported years
            None => {
                let back: Days = Days::new(u64::from(date.weekday().num_days_from_monday()));
                WeekKey(date.checked_sub_days(back).unwrap_or(date))
            }
        }
    }

    /// The Monday naming this week.
    pub fn monday(&self) -> NaiveDate {
        self.0
    }

    /// File stem used by week-file rollups, e.g. `2022 Jan 03`.
    pub fn file_stem(&self) -> String {
        self.0.format("%Y %b %d").to_string()
    }

    /// Long form used in titles, e.g. `Monday, January 3, 2022`.
    pub fn long_to_string(&self) -> String {
        self.0.format("%A, %B %-d, %Y").to_string()
    }
}

impl std::fmt::Display for WeekKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn same_iso_week_same_key() {
        // Mon 2022-01-03 .. Sun 2022-01-09 is ISO 2022-W01
        let key = WeekKey::of(ymd(2022, 1, 3));
        for day in 4..=9 {
            assert_eq!(WeekKey::of(ymd(2022, 1, day)), key);
        }
        assert_eq!(key.monday(), ymd(2022, 1, 3));
        assert_ne!(WeekKey::of(ymd(2022, 1, 10)), key);
    }

    #[test]
    fn key_is_always_a_monday() {
        let mut d = ymd(2019, 12, 1);
        while d < ymd(2021, 2, 1) {
            assert_eq!(WeekKey::of(d).monday().weekday(), Weekday::Mon);
            d = d.succ_opt().unwrap();
        }
    }

    #[test]
    fn late_december_follows_iso_year() {
        // 2019-12-30 is ISO 2020-W01, anchored on the first Monday of 2020
        assert_eq!(WeekKey::of(ymd(2019, 12, 30)).monday(), ymd(2020, 1, 6));
        assert_eq!(WeekKey::of(ymd(2020, 1, 5)).monday(), ymd(2020, 1, 6));
    }

    #[test]
    fn week_53_merges_into_next_week_1() {
        // Thursday-start 2026 has an ISO W53 (Dec 28 .. Jan 3)
        let w53 = ymd(2026, 12, 30);
        let w01 = ymd(2027, 1, 5);
        assert_eq!((w53.iso_week().year(), w53.iso_week().week()), (2026, 53));
        assert_eq!((w01.iso_week().year(), w01.iso_week().week()), (2027, 1));
        assert_eq!(WeekKey::of(w53), WeekKey::of(w01));
        assert_eq!(WeekKey::of(w53).monday(), ymd(2027, 1, 4));
    }

    #[test]
    fn formats() {
        let key = WeekKey::of(ymd(2022, 1, 5));
        assert_eq!(key.file_stem(), "2022 Jan 03");
        assert_eq!(key.long_to_string(), "Monday, January 3, 2022");
        assert_eq!(key.to_string(), "2022-01-03");
    }
}
