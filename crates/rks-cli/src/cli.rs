//! CLI argument definitions for rks.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rks")]
#[command(about = "Split rhythm game score exports by difficulty", version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Options for the default split run
    #[command(flatten)]
    pub split: SplitArgs,
}

#[derive(Subcommand)]
pub enum Command {
    /// Split score exports into per-song, per-difficulty spreadsheets (default)
    Split(SplitArgs),
    /// Build combined score exports from save data directories
    Combine(CombineArgs),
}

#[derive(ClapArgs, Debug, Clone, PartialEq)]
pub struct SplitArgs {
    /// Path to config file
    #[arg(short, long, default_value = "rks.toml")]
    pub config: PathBuf,

    /// Directory containing the score exports
    #[arg(short, long, env = "RKS_WORK_DIR")]
    pub dir: Option<PathBuf>,

    /// Output folder name (relative to the working directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Marker stripped from input file names
    #[arg(long)]
    pub marker: Option<String>,

    /// Text encoding of the input files (e.g. utf-8, gbk)
    #[arg(long)]
    pub encoding: Option<String>,

    /// Fail when a file mixes several song identifiers
    #[arg(long, overrides_with = "allow_mixed_songs")]
    pub reject_mixed_songs: bool,

    /// Group mixed song identifiers under the first one, even if the config rejects them
    #[arg(long, overrides_with = "reject_mixed_songs")]
    pub allow_mixed_songs: bool,
}

#[derive(ClapArgs, Debug, Clone, PartialEq)]
pub struct CombineArgs {
    /// Directory whose subdirectories each contain a save.json
    #[arg(short, long, default_value = "saveData")]
    pub save_dir: PathBuf,

    /// Directory the combined files are written to
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Suffix appended to each song name
    #[arg(long, default_value = "_combined")]
    pub suffix: String,
}
