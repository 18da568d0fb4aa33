//! Split command: turn score exports into per-song folders.

use std::path::Path;

use anyhow::{Context, Result};
use rks_core::{SplitConfig, run as run_pipeline};
use tracing::{info, warn};

use crate::cli::SplitArgs;
use crate::console::ConsoleReporter;

/// Load the config file, falling back to defaults when it is absent or unreadable.
fn load_config(path: &Path) -> SplitConfig {
    if !path.exists() {
        info!("No config file at {:?}, using defaults", path);
        return SplitConfig::default();
    }
    match SplitConfig::load(path) {
        Ok(config) => {
            info!("Loaded config from {:?}", path);
            config
        }
        Err(e) => {
            warn!("Failed to load config: {}, using defaults", e);
            SplitConfig::default()
        }
    }
}

/// Command-line flags take precedence over the config file.
pub fn resolve_config(args: &SplitArgs) -> SplitConfig {
    let mut config = load_config(&args.config);
    if let Some(dir) = &args.dir {
        config.work_dir = dir.clone();
    }
    if let Some(output) = &args.output {
        config.output_dir = output.clone();
    }
    if let Some(marker) = &args.marker {
        config.marker = marker.clone();
    }
    if let Some(encoding) = &args.encoding {
        config.encoding = encoding.clone();
    }
    if args.reject_mixed_songs {
        config.reject_mixed_songs = true;
    } else if args.allow_mixed_songs {
        config.reject_mixed_songs = false;
    }
    config
}

pub fn run(args: &SplitArgs) -> Result<()> {
    let config = resolve_config(args);

    let summary = run_pipeline(&config, &mut ConsoleReporter)
        .with_context(|| format!("Split failed in {}", config.work_dir.display()))?;

    println!(
        "Processing and file generation completed! {} file(s), {} artifact(s) in {}",
        summary.files.len(),
        summary.artifact_count(),
        config.output_root().display()
    );
    Ok(())
}
