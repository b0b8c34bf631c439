use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::core::line::NoteScanner;
use crate::types::config::RollupConfig;
use crate::types::errors::NotesError;
use crate::types::journal::Journal;
use crate::types::note::NoteSegment;
use crate::walk;

/// Splits the lines of one document into dated note segments.
///
/// A line starting with `marker` whose remainder parses as a date opens a new
/// segment; every other line is body text of the segment in progress.
///
/// # Behavior & Invariants
/// - Lines before the first dated header are dropped.
/// - Consecutive dated headers never produce an empty segment: only the last
///   one's date survives.
/// - A marker line that is not a date is kept verbatim as body text.
///
/// # Errors
/// - Returns `Err(NotesError::NoNotesFound)` when no segment was produced.
pub fn extract_notes<I, S>(lines: I, name: &str, marker: char) -> Result<Vec<NoteSegment>, NotesError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .fold(NoteScanner::new(name, marker), |mut scanner, line| {
            scanner.push_line(line.as_ref());
            scanner
        })
        .finish()
}

/// Reads a markdown document and extracts its note segments.
///
/// Segments are attributed to the file's base name.
///
/// # Errors
/// - Returns `Err(NotesError::OpenFile)` on failure to open.
/// - Returns `Err(NotesError::Read)` on I/O errors (including invalid UTF-8) while reading.
/// - Returns `Err(NotesError::NoNotesFound)` when the file holds no dated header.
pub fn from_md_file(path: &Path, marker: char) -> Result<Vec<NoteSegment>, NotesError> {
    let path_owned: String = path.display().to_string();
    let name: String = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path_owned.clone());

    let reader: BufReader<File> = match File::open(path) {
        Ok(file) => BufReader::new(file),
        Err(source) => {
            return Err(NotesError::OpenFile {
                path: path_owned,
                source,
            });
        }
    };

    // read document line by line
    let mut scanner: NoteScanner = NoteScanner::new(&name, marker);
    for line in reader.lines() {
        let line: String = line.map_err(|source| NotesError::Read {
            path: path_owned.clone(),
            source,
        })?;
        scanner.push_line(&line);
    }
    scanner.finish()
}

/// Scans `config.directory` and gathers every note into a `Journal`.
///
/// Documents without notes and unreadable documents are skipped; the scan
/// itself never fails.
pub fn collect_notes(config: &RollupConfig) -> Journal {
    let mut journal: Journal = Journal::default();
    let paths: Vec<PathBuf> = walk::candidate_files(config);

    for path in &paths {
        match from_md_file(path, config.header_marker) {
            Ok(notes) => {
                debug!("{}: {} note(s)", path.display(), notes.len());
                journal.push_document(notes);
            }
            Err(err @ NotesError::NoNotesFound { .. }) => debug!("Skipping: {err}"),
            Err(err) => warn!("Skipping: {err}"),
        }
    }

    info!(
        "Collected {} note(s) from {} of {} document(s) under {}",
        journal.len(),
        journal.documents,
        paths.len(),
        config.directory.display()
    );
    journal
}
