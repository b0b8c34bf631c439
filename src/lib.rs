//! Rolls dated journal notes up into weekly summary documents.
//!
//! Pipeline: walk the notes tree, split every document into dated
//! `NoteSegment`s, bucket them by week, render the rollup documents and write
//! them out.

pub mod core;
pub mod group;
pub mod parse;
pub mod render;
pub mod types;
pub mod walk;

use chrono::NaiveDate;
use log::info;
use std::path::PathBuf;

pub use group::{WeekGroup, group_by_week};
pub use parse::{collect_notes, extract_notes, from_md_file};
pub use render::{RolloverDocument, render_rollup, render_week_files, write_documents};
pub use types::config::{RenderMode, RollupConfig};
pub use types::errors::NotesError;
pub use types::journal::Journal;
pub use types::note::NoteSegment;
pub use types::week::WeekKey;

/// Runs a full rollup with `config`, dating rollup-mode output `run_date`.
///
/// Returns the paths written, in the order they were written.
///
/// # Errors
/// - Returns `Err(NotesError::CreateOutput)` or `Err(NotesError::WriteOutput)`
///   when an output file cannot be produced. Per-document failures while
///   scanning are logged and never surface here.
pub fn run(config: &RollupConfig, run_date: NaiveDate) -> Result<Vec<PathBuf>, NotesError> {
    let journal: Journal = collect_notes(config);
    info!("Rendering in {} mode", config.mode);

    let docs: Vec<RolloverDocument> = match config.mode {
        RenderMode::WeekFiles => {
            let groups: WeekGroup = group_by_week(&journal);
            if let Some(latest) = render::latest_week(&groups) {
                info!(
                    "{} week(s) of notes, latest is the week of {}",
                    groups.len(),
                    latest
                );
            }
            render_week_files(&journal, &groups, config.scan_back_weeks)
        }
        RenderMode::Rollup => vec![render_rollup(&journal, run_date)],
    };

    write_documents(&config.output_dir, &docs)
}
