//! Discovery of candidate documents under the scan root.

use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::types::config::RollupConfig;
use crate::types::errors::NotesError;

/// Whether `path` should be scanned for notes.
///
/// A candidate carries `config.extension` and does not contain
/// `config.skip_marker` anywhere in its path, which keeps previously
/// generated rollups out of the scan.
pub fn is_candidate(path: &Path, config: &RollupConfig) -> bool {
    if !config.skip_marker.is_empty() && path.to_string_lossy().contains(&config.skip_marker) {
        return false;
    }
    path.extension().and_then(|s| s.to_str()) == Some(config.extension.as_str())
}

/// All candidate files under `config.directory`, in file-name order per directory.
///
/// Entries that cannot be read are logged and skipped.
pub fn candidate_files(config: &RollupConfig) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(&config.directory).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) => {
                warn!("Skipping: {}", NotesError::Walk { source });
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path: &Path = entry.path();
        if is_candidate(path, config) {
            paths.push(path.to_path_buf());
        } else {
            debug!("Ignoring {}", path.display());
        }
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn extension_and_marker_filter() {
        let config = RollupConfig::default();
        assert!(is_candidate(Path::new("notes/2022.md"), &config));
        assert!(!is_candidate(Path::new("notes/2022.txt"), &config));
        assert!(!is_candidate(Path::new("notes/README"), &config));
        assert!(!is_candidate(Path::new("notes/2022 Jan 03-rollup.md"), &config));
        assert!(!is_candidate(Path::new("rollups/week.md"), &config));
    }

    #[test]
    fn walk_is_sorted_and_recursive() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("b/nested")).unwrap();
        fs::write(dir.path().join("c.md"), "").unwrap();
        fs::write(dir.path().join("a.md"), "").unwrap();
        fs::write(dir.path().join("b/nested/z.md"), "").unwrap();
        fs::write(dir.path().join("b/skip.txt"), "").unwrap();
        fs::write(dir.path().join("old-rollup.md"), "").unwrap();

        let config = RollupConfig {
            directory: dir.path().to_path_buf(),
            ..RollupConfig::default()
        };
        let found: Vec<PathBuf> = candidate_files(&config)
            .into_iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            found,
            vec![
                PathBuf::from("a.md"),
                PathBuf::from("b/nested/z.md"),
                PathBuf::from("c.md"),
            ]
        );
    }
}
