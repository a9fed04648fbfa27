use std::fmt;

// === StoreError ===

/// Errors raised by a flat string-keyed backing store.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Reading a physical key failed.
    Read(String),
    /// Writing a physical key failed (quota, I/O, locked database).
    Write(String),
    /// Deleting a physical key failed.
    Delete(String),
    /// Enumerating physical keys failed.
    List(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Read(msg) => write!(f, "Backing store read failed: {}", msg),
            StoreError::Write(msg) => write!(f, "Backing store write failed: {}", msg),
            StoreError::Delete(msg) => write!(f, "Backing store delete failed: {}", msg),
            StoreError::List(msg) => write!(f, "Backing store key listing failed: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

// === KvError ===

/// Failure kinds of the key-value store's internal `try_*` operations.
///
/// The public `get`/`set`/`remove` surface never returns these; it logs them
/// and falls back to the caller's default.
#[derive(Debug, Clone, PartialEq)]
pub enum KvError {
    /// The backing store rejected the operation.
    Backing(StoreError),
    /// The value could not be serialized into an envelope.
    Serialization(String),
    /// The stored payload under `key` is not a valid envelope for the requested type.
    Deserialization { key: String, message: String },
}

impl fmt::Display for KvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KvError::Backing(err) => write!(f, "{}", err),
            KvError::Serialization(msg) => write!(f, "Failed to serialize value: {}", msg),
            KvError::Deserialization { key, message } => {
                write!(f, "Malformed entry '{}': {}", key, message)
            }
        }
    }
}

impl std::error::Error for KvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KvError::Backing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for KvError {
    fn from(err: StoreError) -> Self {
        KvError::Backing(err)
    }
}

// === HostError ===

/// Errors reported by the host windowing capability.
#[derive(Debug, Clone, PartialEq)]
pub enum HostError {
    /// The host refused or failed to create a native window.
    CreateFailed(String),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::CreateFailed(msg) => write!(f, "Host failed to create window: {}", msg),
        }
    }
}

impl std::error::Error for HostError {}

// === WindowError ===

/// Errors from window creation. Operations on unknown ids are no-ops, not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowError {
    /// A window with this id is still tracked (open or closing).
    AlreadyExists(String),
    /// The host could not produce a handle.
    Host(HostError),
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowError::AlreadyExists(id) => write!(f, "Window already exists: {}", id),
            WindowError::Host(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for WindowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WindowError::Host(err) => Some(err),
            WindowError::AlreadyExists(_) => None,
        }
    }
}

impl From<HostError> for WindowError {
    fn from(err: HostError) -> Self {
        WindowError::Host(err)
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
        }
    }
}

impl std::error::Error for SettingsError {}

// === AppError ===

/// Errors that abort shell start-up.
#[derive(Debug)]
pub enum AppError {
    /// The window-state database could not be opened or migrated.
    Database(String),
    /// The data directory could not be created.
    Io(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Database(msg) => write!(f, "Window-state database error: {}", msg),
            AppError::Io(msg) => write!(f, "Data directory error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
