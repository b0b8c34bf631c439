use chrono::NaiveDateTime;

use crate::core::date_header;
use crate::types::errors::NotesError;
use crate::types::note::NoteSegment;

/// Line-by-line accumulator splitting one document into dated segments.
///
/// State threaded through the scan:
/// - `active_date`: latest header that parsed as a date, `None` until the
///   first one is seen;
/// - `body`: lines collected since that header;
/// - `notes`: segments emitted so far, in document order.
pub struct NoteScanner {
    name: String,
    marker: char,
    active_date: Option<NaiveDateTime>,
    body: Vec<String>,
    notes: Vec<NoteSegment>,
}

impl NoteScanner {
    pub fn new(name: &str, marker: char) -> Self {
        Self {
            name: name.to_string(),
            marker,
            active_date: None,
            body: Vec::new(),
            notes: Vec::new(),
        }
    }

    // Example:
    // # 2022-01-03        <- header, opens a segment
    // Some notes          <- body
    // # Agenda            <- not a date, body as well
    pub fn push_line(&mut self, line: &str) {
        if let Some(date) = date_header::from_line(line, self.marker) {
            self.flush();
            self.active_date = Some(date);
            return;
        }

        // lines before the first dated header belong to no segment
        if self.active_date.is_some() {
            self.body.push(line.to_string());
        }
    }

    /// Emits the pending body, if any, under the active date.
    fn flush(&mut self) {
        if self.body.is_empty() {
            return;
        }
        if let Some(date) = self.active_date {
            let lines: Vec<String> = std::mem::take(&mut self.body);
            self.notes.push(NoteSegment::new(date, lines, &self.name));
        }
    }

    /// Ends the scan.
    ///
    /// # Errors
    /// - Returns `Err(NotesError::NoNotesFound)` when no segment was produced.
    pub fn finish(mut self) -> Result<Vec<NoteSegment>, NotesError> {
        self.flush();
        if self.notes.is_empty() {
            return Err(NotesError::NoNotesFound { name: self.name });
        }
        Ok(self.notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn scan(lines: &[&str]) -> Result<Vec<NoteSegment>, NotesError> {
        let mut scanner = NoteScanner::new("test.md", '#');
        for line in lines {
            scanner.push_line(line);
        }
        scanner.finish()
    }

    #[test]
    fn header_lines_are_not_body() {
        let notes = scan(&["# 2022-01-03", "a", "b"]).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].lines, vec!["a", "b"]);
        assert_eq!(notes[0].date, day(2022, 1, 3));
    }

    #[test]
    fn blank_lines_are_kept_verbatim() {
        let notes = scan(&["# 2022-01-03", "", "  indented", ""]).unwrap();
        assert_eq!(notes[0].lines, vec!["", "  indented", ""]);
    }

    #[test]
    fn trailing_header_without_body_is_dropped() {
        let notes = scan(&["# 2022-01-03", "a", "# 2022-01-04"]).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].date, day(2022, 1, 3));
    }

    #[test]
    fn only_preamble_is_no_notes() {
        let err = scan(&["title", "more"]).unwrap_err();
        assert!(matches!(err, NotesError::NoNotesFound { ref name } if name == "test.md"));
    }

    #[test]
    fn empty_input_is_no_notes() {
        assert!(matches!(
            scan(&[]),
            Err(NotesError::NoNotesFound { .. })
        ));
    }
}
