// Windows paths.
// Config: %APPDATA%/WinState (roams with the profile)
// Data:   %LOCALAPPDATA%/WinState (window geometry is machine-specific)

use std::env;
use std::path::PathBuf;

use super::APP_DISPLAY_NAME;

/// `%APPDATA%/WinState`
pub fn get_config_dir() -> PathBuf {
    let appdata = env::var("APPDATA")
        .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join(APP_DISPLAY_NAME)
}

/// `%LOCALAPPDATA%/WinState`
pub fn get_data_dir() -> PathBuf {
    let local_appdata = env::var("LOCALAPPDATA")
        .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Local"));
    PathBuf::from(local_appdata).join(APP_DISPLAY_NAME)
}
