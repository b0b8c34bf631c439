use slotmap::SlotMap;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::types::keys::SegmentKey;
use crate::types::note::NoteSegment;

/// All note segments collected during one run.
///
/// Segments are inserted once and never mutated; every other structure
/// (week groups, rendered views) refers to them through `SegmentKey`s.
#[derive(Clone, Debug, Default)]
pub struct Journal {
    segments: SlotMap<SegmentKey, NoteSegment>,

    /// Number of documents that contributed at least one segment.
    pub documents: usize,

    // every key, in the order documents and their segments were pushed
    segment_by_file_order: Vec<SegmentKey>,
}

impl Journal {
    /// Check if there are any segments present
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn get(&self, key: SegmentKey) -> Option<&NoteSegment> {
        self.segments.get(key)
    }

    /// Appends the segments of one document, keeping their order.
    pub fn push_document(&mut self, notes: Vec<NoteSegment>) {
        if notes.is_empty() {
            return;
        }
        self.documents += 1;
        for note in notes {
            let key: SegmentKey = self.segments.insert(note);
            self.segment_by_file_order.push(key);
        }
    }

    /// Keys in the order segments were pushed.
    pub fn file_order(&self) -> &[SegmentKey] {
        &self.segment_by_file_order
    }

    /// Keys ordered newest first, built from the current contents.
    ///
    /// The sort is stable: segments sharing a date keep their file order.
    pub fn by_date_desc(&self) -> Vec<SegmentKey> {
        let base_keys: Vec<SegmentKey> = self.segment_by_file_order.clone();
        let order_index: HashMap<SegmentKey, usize> = base_keys
            .iter()
            .enumerate()
            .map(|(idx, key)| (*key, idx))
            .collect();
        let segments = &self.segments;
        let key_position = |key: &SegmentKey| order_index.get(key).copied().unwrap_or(usize::MAX);

        let mut by_date: Vec<SegmentKey> = base_keys;
        by_date.sort_by(|a, b| match (segments.get(*a), segments.get(*b)) {
            (Some(sa), Some(sb)) => {
                let date_ord: Ordering = sb.date.cmp(&sa.date);
                if date_ord == Ordering::Equal {
                    key_position(a).cmp(&key_position(b))
                } else {
                    date_ord
                }
            }
            _ => key_position(a).cmp(&key_position(b)),
        });
        by_date
    }

    /// Iterates segments following `view`, skipping stale keys.
    pub fn iter_view<'a>(
        &'a self,
        view: &'a [SegmentKey],
    ) -> impl Iterator<Item = &'a NoteSegment> + 'a {
        view.iter().filter_map(|key| self.segments.get(*key))
    }
}
