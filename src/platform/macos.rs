// macOS paths.
// Config: ~/Library/Preferences/WinState
// Data:   ~/Library/Application Support/WinState

use std::env;
use std::path::PathBuf;

use super::APP_DISPLAY_NAME;

fn library_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp"))).join("Library")
}

/// `~/Library/Preferences/WinState`
pub fn get_config_dir() -> PathBuf {
    library_dir().join("Preferences").join(APP_DISPLAY_NAME)
}

/// `~/Library/Application Support/WinState`
pub fn get_data_dir() -> PathBuf {
    library_dir().join("Application Support").join(APP_DISPLAY_NAME)
}
