use std::io;
use thiserror::Error;

/// Errors produced while collecting notes and writing rollups.
#[derive(Debug, Error)]
pub enum NotesError {
    #[error("No notes found in '{name}'")]
    NoNotesFound { name: String },
    #[error("Failed to open '{path}': {source}")]
    OpenFile {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed while reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed while walking the notes directory: {source}")]
    Walk {
        #[source]
        source: walkdir::Error,
    },
    #[error("Failed to create '{path}': {source}")]
    CreateOutput {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed while writing '{path}': {source}")]
    WriteOutput {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl NotesError {
    /// Whether the error must abort the whole run.
    ///
    /// Only output-side failures are fatal; a source document that cannot be
    /// read or holds no notes is simply left out of the rollup.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            NotesError::CreateOutput { .. } | NotesError::WriteOutput { .. }
        )
    }
}
