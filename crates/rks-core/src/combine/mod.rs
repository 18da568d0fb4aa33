//! Combined score exports built from per-player save data.
//!
//! Each subdirectory of the save directory holds one `save.json`. Rows for the
//! same song across all saves are gathered into `{song}{suffix}.csv` and
//! `.xlsx`, the files the split pipeline takes as input.

mod save;

pub use save::{
    CombinedRecord, RecordEntry, SAVE_FILE_NAME, SaveData, SaveInfo, Summary, song_name_from_id,
};

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::CombineConfig;
use crate::error::Result;
use crate::export::{write_csv, write_xlsx};
use crate::pipeline::validate_song_id;
use crate::score::ScoreTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedSong {
    pub song: String,
    pub rows: usize,
    pub csv: PathBuf,
    pub xlsx: PathBuf,
}

/// Save files found directly under `save_dir`, in directory name order.
pub fn find_save_files(save_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut saves = Vec::new();
    for entry in fs::read_dir(save_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let save_file = entry.path().join(SAVE_FILE_NAME);
        if save_file.is_file() {
            saves.push(save_file);
        } else {
            debug!("No {} in {}", SAVE_FILE_NAME, entry.path().display());
        }
    }
    saves.sort();
    Ok(saves)
}

/// Read every save and group the rows by song name.
///
/// Saves that fail to load are skipped with a warning.
pub fn collect_records(save_dir: &Path) -> Result<BTreeMap<String, Vec<CombinedRecord>>> {
    let mut by_song: BTreeMap<String, Vec<CombinedRecord>> = BTreeMap::new();

    for save_file in find_save_files(save_dir)? {
        let save = match SaveData::load(&save_file) {
            Ok(save) => save,
            Err(e) => {
                warn!("Skipping {}: {}", save_file.display(), e);
                continue;
            }
        };
        for record in save.records() {
            by_song
                .entry(record.song_name.clone())
                .or_default()
                .push(record);
        }
    }

    Ok(by_song)
}

pub fn records_to_table(records: &[CombinedRecord]) -> ScoreTable {
    ScoreTable::new(
        CombinedRecord::HEADERS.map(String::from).to_vec(),
        records.iter().map(CombinedRecord::to_row).collect(),
    )
}

/// Write one CSV/XLSX pair per song found in the save directory.
pub fn combine_save_data(config: &CombineConfig) -> Result<Vec<CombinedSong>> {
    let by_song = collect_records(&config.save_dir)?;
    info!(
        "Combining {} song(s) from {}",
        by_song.len(),
        config.save_dir.display()
    );
    fs::create_dir_all(&config.output_dir)?;

    let mut written = Vec::new();
    for (song, records) in by_song {
        validate_song_id(&song)?;
        let table = records_to_table(&records);
        let stem = format!("{}{}", song, config.suffix);
        let csv = config.output_dir.join(format!("{}.csv", stem));
        let xlsx = config.output_dir.join(format!("{}.xlsx", stem));

        write_csv(&table, &csv)?;
        write_xlsx(&table, &xlsx)?;

        written.push(CombinedSong {
            song,
            rows: table.len(),
            csv,
            xlsx,
        });
    }

    Ok(written)
}
