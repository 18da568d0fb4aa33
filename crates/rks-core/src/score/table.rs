use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::score::Difficulty;

/// Rows loaded from one score export, cell text kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    source: PathBuf,
}

impl ScoreTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            headers,
            rows,
            source: PathBuf::new(),
        }
    }

    pub fn with_source<P: Into<PathBuf>>(mut self, source: P) -> Self {
        self.source = source.into();
        self
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// File the table was loaded from (empty for in-memory tables)
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| Error::MissingColumn(name.to_string()))
    }

    /// Cell text, or `None` when the row is short or out of range.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(|s| s.as_str())
    }

    /// Song identifier taken from the first row.
    pub fn song_id(&self, column: &str) -> Result<&str> {
        let index = self.require_column(column)?;
        if self.rows.is_empty() {
            return Err(Error::EmptyTable(self.source.clone()));
        }
        Ok(self.cell(0, index).unwrap_or("").trim())
    }

    /// Number of rows whose song identifier differs from `expected`.
    pub fn count_mismatched(&self, column: &str, expected: &str) -> Result<usize> {
        let index = self.require_column(column)?;
        Ok((0..self.rows.len())
            .filter(|&row| self.cell(row, index).unwrap_or("").trim() != expected)
            .count())
    }

    /// Copy of the table without `name`; unchanged copy if the column is absent.
    pub fn without_column(&self, name: &str) -> ScoreTable {
        let Some(index) = self.column_index(name) else {
            return self.clone();
        };

        let mut headers = self.headers.clone();
        headers.remove(index);
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut row = row.clone();
                if index < row.len() {
                    row.remove(index);
                }
                row
            })
            .collect();

        Self {
            headers,
            rows,
            source: self.source.clone(),
        }
    }

    /// Split rows by tier, one entry per tier in `Difficulty::ALL` order.
    ///
    /// Every row lands in exactly one partition. A value outside the four
    /// tiers fails with `UnknownDifficulty` (row numbers are 1-based).
    pub fn partition_by_difficulty(&self, column: &str) -> Result<Vec<(Difficulty, ScoreTable)>> {
        let index = self.require_column(column)?;
        let mut buckets: [Vec<Vec<String>>; 4] = Default::default();

        for (row_index, row) in self.rows.iter().enumerate() {
            let value = row.get(index).map(|s| s.as_str()).unwrap_or("");
            let difficulty =
                Difficulty::parse_cell(value).ok_or_else(|| Error::UnknownDifficulty {
                    value: value.trim().to_string(),
                    row: row_index + 1,
                })?;
            buckets[difficulty as usize].push(row.clone());
        }

        Ok(Difficulty::ALL
            .into_iter()
            .zip(buckets)
            .map(|(difficulty, rows)| {
                let table = Self {
                    headers: self.headers.clone(),
                    rows,
                    source: self.source.clone(),
                };
                (difficulty, table)
            })
            .collect())
    }
}
