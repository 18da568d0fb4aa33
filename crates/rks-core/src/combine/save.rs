use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::score::Difficulty;

pub const SAVE_FILE_NAME: &str = "save.json";

#[derive(Debug, Clone, Deserialize)]
pub struct SaveData {
    #[serde(rename = "gameRecord")]
    pub game_record: BTreeMap<String, Vec<Option<RecordEntry>>>,
    #[serde(rename = "saveInfo")]
    pub save_info: SaveInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaveInfo {
    pub summary: Summary,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Summary {
    #[serde(rename = "rankingScore")]
    pub ranking_score: f64,
    #[serde(rename = "gameVersion")]
    pub game_version: i32,
}

/// Best result for one chart slot.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RecordEntry {
    pub score: i32,
    pub acc: f64,
    pub fc: bool,
}

/// One exported row of the combined table.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedRecord {
    pub song_name: String,
    pub difficulty: Difficulty,
    pub score: i32,
    pub acc: f64,
    pub fc: bool,
    pub ranking_score: f64,
    pub game_version: i32,
}

impl CombinedRecord {
    pub const HEADERS: [&'static str; 7] = [
        "song_name",
        "difficulty",
        "score",
        "acc",
        "fc",
        "ranking_score",
        "game_version",
    ];

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.song_name.clone(),
            self.difficulty.short_name().to_string(),
            self.score.to_string(),
            // Debug formatting keeps whole floats as `100.0`
            format!("{:?}", self.acc),
            self.fc.to_string(),
            format!("{:?}", self.ranking_score),
            self.game_version.to_string(),
        ]
    }
}

/// Song name for a record key: a trailing `.<digits>` is dropped.
///
/// `Glaciaxion.SunsetRay.0` → `Glaciaxion.SunsetRay`
pub fn song_name_from_id(song_id: &str) -> &str {
    match song_id.rsplit_once('.') {
        Some((base, suffix)) if suffix.chars().all(|c| c.is_ascii_digit()) => base,
        _ => song_id,
    }
}

impl SaveData {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Flatten into rows, one per filled slot among the first four.
    pub fn records(&self) -> Vec<CombinedRecord> {
        let summary = &self.save_info.summary;
        let mut records = Vec::new();

        for (song_id, slots) in &self.game_record {
            let song_name = song_name_from_id(song_id);
            for (index, slot) in slots.iter().enumerate().take(Difficulty::ALL.len()) {
                let (Some(entry), Some(difficulty)) = (slot, Difficulty::from_index(index)) else {
                    continue;
                };
                records.push(CombinedRecord {
                    song_name: song_name.to_string(),
                    difficulty,
                    score: entry.score,
                    acc: entry.acc,
                    fc: entry.fc,
                    ranking_score: summary.ranking_score,
                    game_version: summary.game_version,
                });
            }
        }

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAVE: &str = r#"{
        "gameRecord": {
            "Glaciaxion.SunsetRay.0": [
                {"score": 1000000, "acc": 100.0, "fc": true},
                null,
                {"score": 954321, "acc": 98.2, "fc": false}
            ],
            "Spasmodic.Lime": [null, null, null, {"score": 880000, "acc": 95.5, "fc": false}, {"score": 1, "acc": 1.0, "fc": false}]
        },
        "saveInfo": {"summary": {"rankingScore": 15.75, "gameVersion": 90}}
    }"#;

    #[test]
    fn test_song_name_from_id() {
        assert_eq!(song_name_from_id("Glaciaxion.SunsetRay.0"), "Glaciaxion.SunsetRay");
        assert_eq!(song_name_from_id("Spasmodic.Lime"), "Spasmodic.Lime");
        assert_eq!(song_name_from_id("Song.12"), "Song");
        assert_eq!(song_name_from_id("Song"), "Song");
    }

    #[test]
    fn test_records_skip_empty_and_extra_slots() {
        let save = SaveData::parse(SAVE).unwrap();
        let records = save.records();

        let keys: Vec<(&str, Difficulty)> = records
            .iter()
            .map(|r| (r.song_name.as_str(), r.difficulty))
            .collect();
        assert_eq!(
            keys,
            [
                ("Glaciaxion.SunsetRay", Difficulty::Ez),
                ("Glaciaxion.SunsetRay", Difficulty::In),
                ("Spasmodic.Lime", Difficulty::At),
            ]
        );
        assert!(records.iter().all(|r| r.ranking_score == 15.75));
        assert!(records.iter().all(|r| r.game_version == 90));
    }

    #[test]
    fn test_to_row() {
        let save = SaveData::parse(SAVE).unwrap();
        assert_eq!(
            save.records()[0].to_row(),
            ["Glaciaxion.SunsetRay", "EZ", "1000000", "100.0", "true", "15.75", "90"]
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(SaveData::parse("{\"gameRecord\": {}}").is_err());
    }
}
