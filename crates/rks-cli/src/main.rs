mod cli;
mod commands;
mod console;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (warn by default; status lines go through the console reporter)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("rks_cli=warn,rks_core=warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match args.command {
        Some(Command::Split(split)) => commands::split::run(&split),
        Some(Command::Combine(combine)) => commands::combine::run(&combine),
        None => commands::split::run(&args.split),
    }
}
