// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

pub const DEFAULT_VAULT_FILE: &str = "passwords.json";

// Configuration for the password tool
#[derive(Debug, Clone)]
pub struct Config {
    // Storage
    pub vault_file: PathBuf,

    // Password Generation
    pub default_password_length: usize,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: PathBuf,

    // Problems found while loading, reported once logging is up
    pub load_warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vault_file: PathBuf::from(DEFAULT_VAULT_FILE),
            default_password_length: 12,
            log_level: LevelFilter::Info,
            log_file: crate::utils::default_log_file(),
            load_warnings: Vec::new(),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup, falling back to defaults
    /// for missing or unparsable values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = lookup("VAULT_FILE") {
            if !path.trim().is_empty() {
                config.vault_file = PathBuf::from(path);
            }
        }

        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.trim().parse::<usize>() {
                Ok(length) if length > 0 => config.default_password_length = length,
                _ => config
                    .load_warnings
                    .push(format!("Ignoring invalid DEFAULT_PASSWORD_LENGTH '{}'", val)),
            }
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                "off" => config.log_level = LevelFilter::Off,
                _ => config
                    .load_warnings
                    .push(format!("Ignoring unknown LOG_LEVEL '{}'", level)),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            config.log_file = PathBuf::from(file);
        }

        config
    }
}
