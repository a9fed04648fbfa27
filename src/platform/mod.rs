// Platform path resolution for the window shell.
//
// Settings live in the per-user config directory, the SQLite store that backs
// persisted window geometry lives in the per-user data directory.

use std::path::{Path, PathBuf};

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Directory name used on case-sensitive platforms.
pub const APP_DIR_NAME: &str = "winstate";

/// Directory name used where the platform convention is title case.
pub const APP_DISPLAY_NAME: &str = "WinState";

/// Returns the configuration directory holding `settings.json`.
///
/// - **Linux**: `$XDG_CONFIG_HOME/winstate` or `~/.config/winstate`
/// - **macOS**: `~/Library/Preferences/WinState`
/// - **Windows**: `%APPDATA%/WinState`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the data directory holding the window-state database.
///
/// - **Linux**: `$XDG_DATA_HOME/winstate` or `~/.local/share/winstate`
/// - **macOS**: `~/Library/Application Support/WinState`
/// - **Windows**: `%LOCALAPPDATA%/WinState`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}

/// Resolves a database file name against the data directory.
/// Absolute paths are returned unchanged.
pub fn resolve_data_file(file: &str) -> PathBuf {
    let path = Path::new(file);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        get_data_dir().join(path)
    }
}
