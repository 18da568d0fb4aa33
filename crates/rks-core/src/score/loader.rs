//! Delimited score export loading.

use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use encoding_rs::Encoding;
use tracing::debug;

use crate::error::{Error, Result};
use crate::score::ScoreTable;

/// Resolve an encoding label such as `utf-8`, `gbk` or `shift_jis`.
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| Error::UnknownEncoding(label.to_string()))
}

/// Load a score table from a CSV file with a header row.
pub fn load_score_table<P: AsRef<Path>>(path: P, encoding: &'static Encoding) -> Result<ScoreTable> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    // decode() sniffs and strips a BOM, overriding `encoding` when present
    let (text, used, had_errors) = encoding.decode(&bytes);
    if had_errors {
        return Err(Error::Decode {
            path: path.to_path_buf(),
            encoding: used.name().to_string(),
        });
    }

    let table = parse_score_table(&text)?.with_source(path);
    debug!(
        "Loaded {} rows x {} columns from {}",
        table.len(),
        table.headers().len(),
        path.display()
    );
    Ok(table)
}

/// Parse CSV text into a table. Header names are trimmed, cells are kept
/// verbatim, and blank rows are skipped.
pub fn parse_score_table(text: &str) -> Result<ScoreTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Vec<String> = record.iter().map(String::from).collect();
        if row.iter().all(|v| v.trim().is_empty()) {
            continue;
        }
        rows.push(row);
    }

    Ok(ScoreTable::new(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic() {
        let table = parse_score_table("song_name,difficulty,score\nA,EZ,100\nA,HD,200\n").unwrap();
        assert_eq!(table.headers(), ["song_name", "difficulty", "score"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(1, 2), Some("200"));
    }

    #[test]
    fn test_parse_header_only() {
        let table = parse_score_table("song_name,difficulty\n").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.headers().len(), 2);
    }

    #[test]
    fn test_parse_trims_headers_and_skips_blank_rows() {
        let table = parse_score_table(" song_name , difficulty \n A , IN \n , \n").unwrap();
        assert_eq!(table.headers(), ["song_name", "difficulty"]);
        assert_eq!(table.rows(), [vec![" A ".to_string(), " IN ".to_string()]]);
    }

    #[test]
    fn test_parse_keeps_cells_verbatim() {
        let table = parse_score_table("song_name,difficulty,acc,note\nA,EZ, 99.50,trailing \n").unwrap();
        assert_eq!(table.cell(0, 2), Some(" 99.50"));
        assert_eq!(table.cell(0, 3), Some("trailing "));
    }

    #[test]
    fn test_parse_ragged_rows_fail() {
        assert!(matches!(
            parse_score_table("a,b\n1,2,3\n"),
            Err(Error::Csv(_))
        ));
    }

    #[test]
    fn test_load_strips_bom() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"\xEF\xBB\xBFsong_name,difficulty\nA,AT\n")
            .unwrap();
        let table = load_score_table(file.path(), encoding_rs::UTF_8).unwrap();
        assert_eq!(table.column_index("song_name"), Some(0));
        assert_eq!(table.source(), file.path());
    }

    #[test]
    fn test_load_gbk() {
        let (encoded, _, _) = encoding_rs::GBK.encode("song_name,difficulty\n歌曲,EZ\n");
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&encoded).unwrap();
        let table = load_score_table(file.path(), resolve_encoding("gbk").unwrap()).unwrap();
        assert_eq!(table.cell(0, 0), Some("歌曲"));
    }

    #[test]
    fn test_load_invalid_bytes_fail() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"song_name,difficulty,score\nAir\xffglow,EZ,1\n")
            .unwrap();
        match load_score_table(file.path(), encoding_rs::UTF_8) {
            Err(Error::Decode { path, encoding }) => {
                assert_eq!(path, file.path());
                assert_eq!(encoding, "UTF-8");
            }
            other => panic!("Expected Decode error, got {:?}", other.map(|t| t.len())),
        }
    }

    #[test]
    fn test_resolve_unknown_encoding() {
        assert!(matches!(
            resolve_encoding("klingon"),
            Err(Error::UnknownEncoding(_))
        ));
        assert_eq!(resolve_encoding("UTF-8").unwrap(), encoding_rs::UTF_8);
    }
}
