//! Split pipeline: discover → normalize → load → place → partition → export.
//!
//! Files are processed one at a time. The first error aborts the run; files
//! already finished stay on disk.

mod discovery;
mod placement;
mod split;

pub use discovery::{discover_inputs, normalize_file_name, strip_marker};
pub use placement::{create_song_folder, relocate, validate_song_id};
pub use split::{DifficultyExport, export_whole_song, split_by_difficulty};

use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use tracing::{info, warn};

use crate::config::SplitConfig;
use crate::error::{Error, Result};
use crate::score::{Difficulty, load_score_table, resolve_encoding};

/// Progress notifications emitted while a run is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    FileStarted {
        path: PathBuf,
    },
    FileRenamed {
        from: PathBuf,
        to: PathBuf,
    },
    FilePlaced {
        song: String,
        path: PathBuf,
    },
    DifficultyExported {
        song: String,
        difficulty: Difficulty,
        rows: usize,
        csv: PathBuf,
        xlsx: PathBuf,
    },
    SongExported {
        song: String,
        path: PathBuf,
    },
    FileFinished {
        song: String,
    },
}

pub trait ProgressReporter {
    fn report(&mut self, event: PipelineEvent);
}

/// Discards every event.
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn report(&mut self, _event: PipelineEvent) {}
}

impl ProgressReporter for Vec<PipelineEvent> {
    fn report(&mut self, event: PipelineEvent) {
        self.push(event);
    }
}

/// Outcome of processing one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub input: PathBuf,
    pub song: String,
    pub folder: PathBuf,
    pub song_export: PathBuf,
    pub difficulty_exports: Vec<DifficultyExport>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files: Vec<FileReport>,
}

impl RunSummary {
    pub fn artifact_count(&self) -> usize {
        self.files
            .iter()
            .map(|f| 1 + f.difficulty_exports.len() * 2)
            .sum()
    }
}

/// Process every input file under `config.work_dir`.
pub fn run(config: &SplitConfig, reporter: &mut dyn ProgressReporter) -> Result<RunSummary> {
    let encoding = resolve_encoding(&config.encoding)?;
    let output_root = config.output_root();
    fs::create_dir_all(&output_root)?;

    let inputs = discover_inputs(&config.work_dir, &config.input_extension)?;
    info!(
        "Processing {} file(s) from {}",
        inputs.len(),
        config.work_dir.display()
    );

    let mut summary = RunSummary::default();
    for input in inputs {
        let report = process_file(&input, config, encoding, &output_root, reporter)?;
        summary.files.push(report);
    }

    Ok(summary)
}

/// Run the full per-file sequence for one input.
pub fn process_file(
    path: &Path,
    config: &SplitConfig,
    encoding: &'static Encoding,
    output_root: &Path,
    reporter: &mut dyn ProgressReporter,
) -> Result<FileReport> {
    info!("Processing file: {}", path.display());
    reporter.report(PipelineEvent::FileStarted {
        path: path.to_path_buf(),
    });

    let input = normalize_file_name(path, &config.marker)?;
    if input != path {
        reporter.report(PipelineEvent::FileRenamed {
            from: path.to_path_buf(),
            to: input.clone(),
        });
    }

    let table = load_score_table(&input, encoding)?;
    let song = table.song_id(&config.song_column)?.to_string();
    validate_song_id(&song)?;

    let mismatched = table.count_mismatched(&config.song_column, &song)?;
    if mismatched > 0 {
        if config.reject_mixed_songs {
            return Err(Error::MixedSongIds {
                path: input,
                expected: song,
                count: mismatched,
            });
        }
        warn!(
            "{}: {} row(s) have a song identifier other than {:?}; grouping all under it",
            input.display(),
            mismatched,
            song
        );
    }

    let folder = create_song_folder(output_root, &song)?;
    let placed = relocate(&input, &folder)?;
    reporter.report(PipelineEvent::FilePlaced {
        song: song.clone(),
        path: placed,
    });

    let difficulty_exports = split_by_difficulty(
        &table,
        &song,
        &folder,
        &config.song_column,
        &config.difficulty_column,
    )?;
    for export in &difficulty_exports {
        reporter.report(PipelineEvent::DifficultyExported {
            song: song.clone(),
            difficulty: export.difficulty,
            rows: export.rows,
            csv: export.csv.clone(),
            xlsx: export.xlsx.clone(),
        });
    }

    let song_export = export_whole_song(&table, &song, &folder, &config.song_column)?;
    reporter.report(PipelineEvent::SongExported {
        song: song.clone(),
        path: song_export.clone(),
    });

    reporter.report(PipelineEvent::FileFinished { song: song.clone() });

    Ok(FileReport {
        input,
        song,
        folder,
        song_export,
        difficulty_exports,
    })
}
