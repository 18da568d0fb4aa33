use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Reject identifiers that cannot be used as a single folder name.
pub fn validate_song_id(song: &str) -> Result<()> {
    if song.is_empty() || song == "." || song == ".." || song.contains(['/', '\\']) {
        return Err(Error::InvalidSongId(song.to_string()));
    }
    Ok(())
}

/// Create `<output_root>/<song>` if missing and return it.
pub fn create_song_folder(output_root: &Path, song: &str) -> Result<PathBuf> {
    validate_song_id(song)?;
    let folder = output_root.join(song);
    fs::create_dir_all(&folder)?;
    Ok(folder)
}

/// Move `file` into `folder`, replacing a same-named file there.
pub fn relocate(file: &Path, folder: &Path) -> Result<PathBuf> {
    let name = file
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;
    let target = folder.join(name);

    match fs::rename(file, &target) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            fs::copy(file, &target)?;
            fs::remove_file(file)?;
        }
        Err(e) => return Err(e.into()),
    }

    debug!("Moved {} -> {}", file.display(), target.display());
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_song_id() {
        assert!(validate_song_id("Airglow").is_ok());
        assert!(validate_song_id("Glaciaxion.SunsetRay").is_ok());
        assert!(validate_song_id("Rrhar'il").is_ok());
        for bad in ["", ".", "..", "a/b", "a\\b"] {
            assert!(
                matches!(validate_song_id(bad), Err(Error::InvalidSongId(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_create_song_folder_idempotent() {
        let dir = TempDir::new().unwrap();
        let first = create_song_folder(dir.path(), "Airglow").unwrap();
        let second = create_song_folder(dir.path(), "Airglow").unwrap();
        assert_eq!(first, second);
        assert!(first.is_dir());
    }

    #[test]
    fn test_relocate_overwrites() {
        let dir = TempDir::new().unwrap();
        let folder = create_song_folder(dir.path(), "Airglow").unwrap();
        fs::write(folder.join("Airglow.csv"), "old").unwrap();
        let source = dir.path().join("Airglow.csv");
        fs::write(&source, "new").unwrap();

        let moved = relocate(&source, &folder).unwrap();

        assert_eq!(moved, folder.join("Airglow.csv"));
        assert!(!source.exists());
        assert_eq!(fs::read_to_string(&moved).unwrap(), "new");
    }
}
