use chrono::{Datelike, IsoWeek, NaiveDateTime};

/// One contiguous block of body lines attributed to a dated header.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteSegment {
    /// Date (and time of day, when the header carried one) of the header
    /// that opened this block. Timezone-unaware.
    pub date: NaiveDateTime,

    /// Body lines in document order, without trailing newlines.
    pub lines: Vec<String>,

    /// Base name of the document the block was read from.
    pub source_name: String,
}

impl NoteSegment {
    pub fn new(date: NaiveDateTime, lines: Vec<String>, source_name: &str) -> Self {
        Self {
            date,
            lines,
            source_name: source_name.to_string(),
        }
    }

    /// ISO (year, week) the segment belongs to.
    pub fn iso_week(&self) -> IsoWeek {
        self.date.date().iso_week()
    }

    /// Sub-header date, e.g. `2022 Jan 3`.
    pub fn date_to_string(&self) -> String {
        self.date.format("%Y %b %-d").to_string()
    }
}
