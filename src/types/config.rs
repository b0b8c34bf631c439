use std::path::PathBuf;

/// How collected notes are laid out on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum RenderMode {
    /// One `<Monday>-notes.md` file per recent week.
    #[default]
    WeekFiles,
    /// A single `<run date>-rollup.md` file with every note, newest first.
    Rollup,
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = match self {
            RenderMode::WeekFiles => "week-files",
            RenderMode::Rollup => "rollup",
        };
        f.write_str(label)
    }
}

/// Settings for a single rollup run, built once and passed down explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct RollupConfig {
    /// Root of the tree to scan.
    pub directory: PathBuf,
    /// Where rendered documents are written.
    pub output_dir: PathBuf,
    /// Number of weeks, before the most recent one, to emit in week-file mode.
    pub scan_back_weeks: usize,
    pub mode: RenderMode,
    /// Paths containing this substring are never scanned (previous outputs).
    pub skip_marker: String,
    /// Extension, without the dot, of candidate documents.
    pub extension: String,
    /// Character opening a header line.
    pub header_marker: char,
}

impl Default for RollupConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            scan_back_weeks: 1,
            mode: RenderMode::default(),
            skip_marker: "rollup".to_string(),
            extension: "md".to_string(),
            header_marker: '#',
        }
    }
}
