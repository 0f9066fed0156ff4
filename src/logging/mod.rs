// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use log::LevelFilter;

use crate::core::Config;

/// Initialise the global logger.
///
/// Records go to the configured log file so they never interleave with the
/// interactive prompts. `RUST_LOG` overrides the configured level. When the
/// file cannot be opened, records go to stderr capped at warnings.
pub fn init(config: &Config) {
    let file = open_log_file(&config.log_file);

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(effective_level(config.log_level, file.is_ok()))
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);

    match file {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(e) => {
            eprintln!(
                "Could not open log file {}: {}. Logging warnings to stderr.",
                config.log_file.display(),
                e
            );
            builder.target(env_logger::Target::Stderr);
        }
    }

    builder.parse_default_env();

    if builder.try_init().is_err() {
        log::debug!("Logger already initialised");
    }
}

/// Level applied before `RUST_LOG`; stderr output never gets chattier than warn.
fn effective_level(configured: LevelFilter, to_file: bool) -> LevelFilter {
    if to_file {
        configured
    } else {
        configured.min(LevelFilter::Warn)
    }
}

fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}
