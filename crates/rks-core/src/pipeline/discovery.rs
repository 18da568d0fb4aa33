use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Regular files directly under `dir` whose name ends with `.{extension}`.
///
/// Sorted by name; subdirectories are not searched.
pub fn discover_inputs(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let suffix = format!(".{}", extension.trim_start_matches('.'));
    let mut inputs = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(&suffix) {
            inputs.push(entry.path());
        }
    }

    inputs.sort();
    debug!("Found {} input file(s) in {}", inputs.len(), dir.display());
    Ok(inputs)
}

/// File name with the first occurrence of `marker` removed, if present.
pub fn strip_marker(file_name: &str, marker: &str) -> Option<String> {
    if marker.is_empty() || !file_name.contains(marker) {
        return None;
    }
    Some(file_name.replacen(marker, "", 1))
}

/// Strip `marker` from the file name and rename the file on disk.
///
/// Returns the path to read from: the renamed path, or `path` itself when the
/// name does not contain the marker.
pub fn normalize_file_name(path: &Path, marker: &str) -> Result<PathBuf> {
    let Some(new_name) = path
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| strip_marker(n, marker))
    else {
        return Ok(path.to_path_buf());
    };

    let target = path.with_file_name(new_name);
    if target.exists() {
        return Err(Error::RenameTargetExists(target));
    }

    fs::rename(path, &target)?;
    debug!("Renamed {} -> {}", path.display(), target.display());
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_strip_marker() {
        assert_eq!(
            strip_marker("song_combined.csv", "_combined").as_deref(),
            Some("song.csv")
        );
        assert_eq!(strip_marker("song.csv", "_combined"), None);
        assert_eq!(
            strip_marker("a_combined_combined.csv", "_combined").as_deref(),
            Some("a_combined.csv")
        );
        assert_eq!(strip_marker("song.csv", ""), None);
    }

    #[test]
    fn test_discover_only_matching_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.csv"), "x").unwrap();
        fs::write(dir.path().join("a.csv"), "x").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        fs::write(dir.path().join("a.csv.bak"), "x").unwrap();
        fs::create_dir(dir.path().join("dir.csv")).unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("c.csv"), "x").unwrap();

        let found = discover_inputs(dir.path(), "csv").unwrap();
        assert_eq!(
            found,
            vec![dir.path().join("a.csv"), dir.path().join("b.csv")]
        );
    }

    #[test]
    fn test_normalize_renames_on_disk() {
        let dir = TempDir::new().unwrap();
        let original = dir.path().join("Airglow_combined.csv");
        fs::write(&original, "data").unwrap();

        let renamed = normalize_file_name(&original, "_combined").unwrap();

        assert_eq!(renamed, dir.path().join("Airglow.csv"));
        assert!(!original.exists());
        assert_eq!(fs::read_to_string(&renamed).unwrap(), "data");
    }

    #[test]
    fn test_normalize_without_marker_is_noop() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Airglow.csv");
        fs::write(&path, "data").unwrap();

        assert_eq!(normalize_file_name(&path, "_combined").unwrap(), path);
        assert!(path.exists());
    }

    #[test]
    fn test_normalize_existing_target_fails() {
        let dir = TempDir::new().unwrap();
        let original = dir.path().join("Airglow_combined.csv");
        fs::write(&original, "new").unwrap();
        fs::write(dir.path().join("Airglow.csv"), "old").unwrap();

        let result = normalize_file_name(&original, "_combined");
        assert!(matches!(result, Err(Error::RenameTargetExists(_))));
        assert!(original.exists());
    }

    #[test]
    fn test_normalize_missing_source_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone_combined.csv");
        assert!(matches!(
            normalize_file_name(&missing, "_combined"),
            Err(Error::Io(_))
        ));
    }
}
