//! Spreadsheet and CSV writers for score tables.

mod csv;
mod xlsx;

pub use self::csv::write_csv;
pub use self::xlsx::{CellValue, write_xlsx};

use std::path::{Path, PathBuf};

use crate::score::Difficulty;

pub const CSV_EXTENSION: &str = "csv";
pub const XLSX_EXTENSION: &str = "xlsx";

/// `{song}.{ext}` or `{song}_{TIER}.{ext}`
pub fn artifact_name(song: &str, difficulty: Option<Difficulty>, extension: &str) -> String {
    match difficulty {
        Some(d) => format!("{}_{}.{}", song, d.short_name(), extension),
        None => format!("{}.{}", song, extension),
    }
}

pub fn artifact_path(
    folder: &Path,
    song: &str,
    difficulty: Option<Difficulty>,
    extension: &str,
) -> PathBuf {
    folder.join(artifact_name(song, difficulty, extension))
}
