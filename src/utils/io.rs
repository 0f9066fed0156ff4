// src/utils/io.rs
use std::path::PathBuf;

/// Get the application data directory
pub fn get_app_data_dir() -> Option<PathBuf> {
    match directories::ProjectDirs::from("com", "passtool", "passtool") {
        Some(proj_dirs) => Some(proj_dirs.data_local_dir().to_path_buf()),
        None => {
            log::warn!("Could not determine data directory");
            None
        }
    }
}

/// Default log file location; the directory is created when logging starts.
pub fn default_log_file() -> PathBuf {
    get_app_data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("logs")
        .join("passtool.log")
}
