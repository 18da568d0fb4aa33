//! Run configuration.
//!
//! `SplitConfig` drives the split pipeline and can be loaded from a TOML file:
//!
//! ```toml
//! work_dir = "."
//! output_dir = "generated_files"
//! marker = "_combined"
//! encoding = "gbk"
//! reject_mixed_songs = true
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_OUTPUT_DIR: &str = "generated_files";
pub const DEFAULT_MARKER: &str = "_combined";
pub const DEFAULT_SAVE_DIR: &str = "saveData";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Directory scanned for input files
    pub work_dir: PathBuf,
    /// Output root, relative to `work_dir` unless absolute
    pub output_dir: PathBuf,
    /// Input extension without the dot
    pub input_extension: String,
    /// Substring stripped from input file names before loading
    pub marker: String,
    pub song_column: String,
    pub difficulty_column: String,
    /// Text encoding label of the input files
    pub encoding: String,
    /// Fail instead of warn when rows disagree on the song identifier
    pub reject_mixed_songs: bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from("."),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            input_extension: "csv".to_string(),
            marker: DEFAULT_MARKER.to_string(),
            song_column: "song_name".to_string(),
            difficulty_column: "difficulty".to_string(),
            encoding: "utf-8".to_string(),
            reject_mixed_songs: false,
        }
    }
}

impl SplitConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Resolved output root
    pub fn output_root(&self) -> PathBuf {
        self.work_dir.join(&self.output_dir)
    }
}

/// Settings for building combined score exports from save data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombineConfig {
    /// Directory whose subdirectories each hold a `save.json`
    pub save_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Appended to the song name of each written file
    pub suffix: String,
}

impl Default for CombineConfig {
    fn default() -> Self {
        Self {
            save_dir: PathBuf::from(DEFAULT_SAVE_DIR),
            output_dir: PathBuf::from("."),
            suffix: DEFAULT_MARKER.to_string(),
        }
    }
}
