use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::export::{CSV_EXTENSION, XLSX_EXTENSION, artifact_path, write_csv, write_xlsx};
use crate::score::{Difficulty, ScoreTable};

/// Files written for one non-empty tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyExport {
    pub difficulty: Difficulty,
    pub rows: usize,
    pub csv: PathBuf,
    pub xlsx: PathBuf,
}

/// Write `{song}_{TIER}.csv` and `.xlsx` for every tier that has rows.
///
/// Tiers are visited in `Difficulty::ALL` order; empty tiers write nothing.
pub fn split_by_difficulty(
    table: &ScoreTable,
    song: &str,
    folder: &Path,
    song_column: &str,
    difficulty_column: &str,
) -> Result<Vec<DifficultyExport>> {
    let mut exports = Vec::new();

    for (difficulty, partition) in table.partition_by_difficulty(difficulty_column)? {
        if partition.is_empty() {
            debug!("{}: no {} rows", song, difficulty);
            continue;
        }

        let projected = partition.without_column(song_column);
        let csv = artifact_path(folder, song, Some(difficulty), CSV_EXTENSION);
        let xlsx = artifact_path(folder, song, Some(difficulty), XLSX_EXTENSION);
        write_csv(&projected, &csv)?;
        write_xlsx(&projected, &xlsx)?;

        exports.push(DifficultyExport {
            difficulty,
            rows: projected.len(),
            csv,
            xlsx,
        });
    }

    Ok(exports)
}

/// Write the whole table, minus the song column, as `{song}.xlsx`.
pub fn export_whole_song(
    table: &ScoreTable,
    song: &str,
    folder: &Path,
    song_column: &str,
) -> Result<PathBuf> {
    let path = artifact_path(folder, song, None, XLSX_EXTENSION);
    write_xlsx(&table.without_column(song_column), &path)?;
    Ok(path)
}
