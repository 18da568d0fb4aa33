use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Score table is empty: {0}")]
    EmptyTable(PathBuf),

    #[error("Invalid song identifier: {0:?}")]
    InvalidSongId(String),

    #[error("Mixed song identifiers in {path}: expected {expected:?}, {count} row(s) differ")]
    MixedSongIds {
        path: PathBuf,
        expected: String,
        count: usize,
    },

    #[error("Unknown difficulty {value:?} at row {row}")]
    UnknownDifficulty { value: String, row: usize },

    #[error("Rename target already exists: {0}")]
    RenameTargetExists(PathBuf),

    #[error("Unknown text encoding: {0}")]
    UnknownEncoding(String),

    #[error("Invalid {encoding} text in {path}")]
    Decode { path: PathBuf, encoding: String },

    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParse(e.to_string())
    }
}
