//! Score tables and difficulty tiers.

mod difficulty;
mod loader;
mod table;

pub use difficulty::Difficulty;
pub use loader::{load_score_table, parse_score_table, resolve_encoding};
pub use table::ScoreTable;
