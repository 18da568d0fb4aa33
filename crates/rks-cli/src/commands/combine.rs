//! Combine command: build per-song score exports from save data.

use anyhow::{Context, Result};
use rks_core::{CombineConfig, combine_save_data};

use crate::cli::CombineArgs;

pub fn run(args: &CombineArgs) -> Result<()> {
    let config = CombineConfig {
        save_dir: args.save_dir.clone(),
        output_dir: args.output.clone(),
        suffix: args.suffix.clone(),
    };

    let written = combine_save_data(&config).with_context(|| {
        format!(
            "Failed to combine save data from {}",
            config.save_dir.display()
        )
    })?;

    for song in &written {
        println!(
            "Combined {} ({} rows): {} and {}",
            song.song,
            song.rows,
            song.csv.display(),
            song.xlsx.display()
        );
    }
    println!("Combined {} song(s)", written.len());
    Ok(())
}
