pub mod combine;
pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod score;

pub use combine::{CombinedSong, combine_save_data};
pub use config::{CombineConfig, SplitConfig};
pub use error::{Error, Result};
pub use pipeline::{
    FileReport, NoopReporter, PipelineEvent, ProgressReporter, RunSummary, process_file, run,
};
pub use score::{Difficulty, ScoreTable, load_score_table};
