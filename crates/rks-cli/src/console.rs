//! Status lines for pipeline progress.

use std::path::Path;

use owo_colors::OwoColorize;
use rks_core::{Difficulty, PipelineEvent, ProgressReporter};

/// Prints one line per file and per generated artifact to stdout.
pub struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn report(&mut self, event: PipelineEvent) {
        if let Some(line) = format_event(&event) {
            println!("{}", line);
        }
    }
}

pub fn format_colored_difficulty(difficulty: Difficulty) -> String {
    let name = difficulty.short_name();
    match difficulty {
        Difficulty::Ez => name.green().to_string(),
        Difficulty::Hd => name.blue().to_string(),
        Difficulty::In => name.red().to_string(),
        Difficulty::At => name.bright_black().bold().to_string(),
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn format_event(event: &PipelineEvent) -> Option<String> {
    let line = match event {
        PipelineEvent::FileStarted { path } => {
            format!("Processing file: {}", file_name(path).bold())
        }
        PipelineEvent::FileRenamed { from, to } => {
            format!("  Renamed {} -> {}", file_name(from), file_name(to))
        }
        PipelineEvent::FilePlaced { song, path } => {
            format!("  Moved into {}: {}", song.bold(), path.display())
        }
        PipelineEvent::DifficultyExported {
            song,
            difficulty,
            rows,
            csv,
            xlsx,
        } => format!(
            "  Generated {} file for {} ({} rows): {} and {}",
            format_colored_difficulty(*difficulty),
            song,
            rows,
            csv.display(),
            xlsx.display()
        ),
        PipelineEvent::SongExported { song, path } => {
            format!("  Generated song workbook for {}: {}", song, path.display())
        }
        PipelineEvent::FileFinished { .. } => return None,
    };
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_difficulty_event() {
        let line = format_event(&PipelineEvent::DifficultyExported {
            song: "Airglow".to_string(),
            difficulty: Difficulty::Hd,
            rows: 2,
            csv: PathBuf::from("Airglow_HD.csv"),
            xlsx: PathBuf::from("Airglow_HD.xlsx"),
        })
        .unwrap();

        assert!(line.contains("HD"));
        assert!(line.contains("for Airglow (2 rows)"));
        assert!(line.ends_with("Airglow_HD.csv and Airglow_HD.xlsx"));
    }

    #[test]
    fn test_format_rename_uses_file_names() {
        let line = format_event(&PipelineEvent::FileRenamed {
            from: PathBuf::from("scores").join("Airglow_combined.csv"),
            to: PathBuf::from("scores").join("Airglow.csv"),
        })
        .unwrap();
        assert_eq!(line, "  Renamed Airglow_combined.csv -> Airglow.csv");
    }

    #[test]
    fn test_file_finished_is_silent() {
        assert!(
            format_event(&PipelineEvent::FileFinished {
                song: "Airglow".to_string()
            })
            .is_none()
        );
    }
}
