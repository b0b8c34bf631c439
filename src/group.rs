use smallvec::SmallVec;
use std::collections::BTreeMap;

use crate::types::journal::Journal;
use crate::types::keys::SegmentKey;
use crate::types::week::WeekKey;

/// Segments of a single week; most weeks hold only a handful.
pub type WeekBucket = SmallVec<[SegmentKey; 8]>;

/// Segments bucketed by the week they fall in.
///
/// Buckets keep the order in which segments were supplied. Keys are ordered
/// by date, so iteration is oldest week first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeekGroup {
    pub buckets: BTreeMap<WeekKey, WeekBucket>,
}

impl WeekGroup {
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn get(&self, key: &WeekKey) -> Option<&WeekBucket> {
        self.buckets.get(key)
    }

    /// Week keys, most recent first.
    pub fn keys_desc(&self) -> Vec<WeekKey> {
        self.buckets.keys().rev().copied().collect()
    }
}

/// Buckets every segment of `journal` by week, in file order.
///
/// Nothing is dropped or deduplicated: identical segments land in the same
/// bucket twice.
pub fn group_by_week(journal: &Journal) -> WeekGroup {
    let mut group: WeekGroup = WeekGroup::default();
    for key in journal.file_order() {
        let Some(segment) = journal.get(*key) else {
            continue;
        };
        let week: WeekKey = WeekKey::of(segment.date.date());
        group.buckets.entry(week).or_default().push(*key);
    }
    group
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::note::NoteSegment;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn seg(date: NaiveDateTime, body: &str) -> NoteSegment {
        NoteSegment::new(date, vec![body.to_string()], "test.md")
    }

    fn journal() -> Journal {
        let mut journal = Journal::default();
        journal.push_document(vec![
            seg(at(2022, 1, 12), "wed w2"),
            seg(at(2022, 1, 3), "mon w1"),
            seg(at(2022, 1, 9), "sun w1"),
        ]);
        journal.push_document(vec![
            seg(at(2022, 1, 3), "mon w1"),
            seg(at(2022, 1, 10), "mon w2"),
        ]);
        journal
    }

    fn bodies(journal: &Journal, bucket: &WeekBucket) -> Vec<String> {
        journal
            .iter_view(bucket)
            .map(|s| s.lines[0].clone())
            .collect()
    }

    #[test]
    fn buckets_keep_supply_order() {
        let journal = journal();
        let group = group_by_week(&journal);

        let w1 = WeekKey::of(NaiveDate::from_ymd_opt(2022, 1, 3).unwrap());
        let w2 = WeekKey::of(NaiveDate::from_ymd_opt(2022, 1, 10).unwrap());
        assert_eq!(group.keys_desc(), vec![w2, w1]);
        assert_eq!(
            bodies(&journal, group.get(&w1).unwrap()),
            vec!["mon w1", "sun w1", "mon w1"]
        );
        assert_eq!(
            bodies(&journal, group.get(&w2).unwrap()),
            vec!["wed w2", "mon w2"]
        );
    }

    #[test]
    fn nothing_is_dropped() {
        let journal = journal();
        let group = group_by_week(&journal);
        let total: usize = group.buckets.values().map(|b| b.len()).sum();
        assert_eq!(total, journal.len());
    }

    #[test]
    fn regrouping_is_idempotent() {
        let journal = journal();
        assert_eq!(group_by_week(&journal), group_by_week(&journal));
    }
}
