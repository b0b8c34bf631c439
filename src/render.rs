use chrono::{IsoWeek, NaiveDate};
use log::info;
use std::fs::File;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use crate::group::WeekGroup;
use crate::types::errors::NotesError;
use crate::types::journal::Journal;
use crate::types::keys::SegmentKey;
use crate::types::note::NoteSegment;
use crate::types::week::WeekKey;

/// A fully rendered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolloverDocument {
    pub file_name: String,
    pub text: String,
}

/// One document per recent week, most recent first.
///
/// Weeks are visited newest first and visiting stops once the index exceeds
/// `scan_back_weeks`, so up to `scan_back_weeks + 1` documents are produced.
/// Segments keep their bucket order.
pub fn render_week_files(
    journal: &Journal,
    groups: &WeekGroup,
    scan_back_weeks: usize,
) -> Vec<RolloverDocument> {
    let mut docs: Vec<RolloverDocument> = Vec::new();
    for (idx, key) in groups.keys_desc().into_iter().enumerate() {
        if idx > scan_back_weeks {
            break;
        }
        let Some(bucket) = groups.get(&key) else {
            continue;
        };
        let mut segments = journal.iter_view(bucket).peekable();
        if segments.peek().is_none() {
            continue;
        }

        let mut text: String = String::new();
        text.push_str(&format!(
            "=== Note for the week of {} ===\n",
            key.long_to_string()
        ));
        for segment in segments {
            text.push('\n');
            push_segment(&mut text, segment);
        }
        docs.push(RolloverDocument {
            file_name: format!("{}-notes.md", key.file_stem()),
            text,
        });
    }
    docs
}

/// A single document holding every segment, newest first.
///
/// A `# Week N of YYYY` heading opens each run of segments sharing an ISO
/// week; each segment is followed by a blank separator line.
pub fn render_rollup(journal: &Journal, run_date: NaiveDate) -> RolloverDocument {
    let mut text: String = String::new();
    text.push_str(&format!(
        "=== Rollup of notes as of {} ===\n\n",
        run_date.format("%A, %B %-d, %Y")
    ));

    let by_date: Vec<SegmentKey> = journal.by_date_desc();
    let mut current_week: Option<IsoWeek> = None;
    for segment in journal.iter_view(&by_date) {
        // year and week both count: W01 of 2022 and of 2021 are different runs
        let week: IsoWeek = segment.iso_week();
        if current_week != Some(week) {
            text.push_str(&format!("# Week {} of {}\n\n", week.week(), week.year()));
            current_week = Some(week);
        }
        push_segment(&mut text, segment);
        text.push('\n');
    }

    RolloverDocument {
        file_name: format!("{}-rollup.md", run_date.format("%Y %b %d")),
        text,
    }
}

// Sub-header then body, verbatim.
fn push_segment(text: &mut String, segment: &NoteSegment) {
    text.push_str(&format!(
        "## {} on {}\n",
        segment.source_name,
        segment.date_to_string()
    ));
    for line in &segment.lines {
        text.push_str(line);
        text.push('\n');
    }
}

/// Bucket key of the most recent week present, if any.
pub fn latest_week(groups: &WeekGroup) -> Option<WeekKey> {
    groups.buckets.keys().next_back().copied()
}

/// Writes each document into `output_dir`, replacing existing files.
///
/// Documents are written in order; those written before a failure are left
/// in place.
///
/// # Errors
/// - Returns `Err(NotesError::CreateOutput)` when a file cannot be created.
/// - Returns `Err(NotesError::WriteOutput)` when a file cannot be written.
pub fn write_documents(
    output_dir: &Path,
    docs: &[RolloverDocument],
) -> Result<Vec<PathBuf>, NotesError> {
    let mut written: Vec<PathBuf> = Vec::with_capacity(docs.len());
    for doc in docs {
        let path: PathBuf = output_dir.join(&doc.file_name);
        let path_owned: String = path.display().to_string();
        info!("Writing {path_owned}");

        let mut file: File = File::create(&path).map_err(|source| NotesError::CreateOutput {
            path: path_owned.clone(),
            source,
        })?;
        file.write_all(doc.text.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|source| NotesError::WriteOutput {
                path: path_owned,
                source,
            })?;
        written.push(path);
    }
    Ok(written)
}
