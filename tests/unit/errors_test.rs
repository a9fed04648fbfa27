use std::error::Error;

use winstate::types::errors::*;

// === StoreError Tests ===

#[test]
fn store_error_display_variants() {
    assert_eq!(
        StoreError::Read("disk".to_string()).to_string(),
        "Backing store read failed: disk"
    );
    assert_eq!(
        StoreError::Write("quota".to_string()).to_string(),
        "Backing store write failed: quota"
    );
    assert_eq!(
        StoreError::Delete("locked".to_string()).to_string(),
        "Backing store delete failed: locked"
    );
    assert_eq!(
        StoreError::List("io".to_string()).to_string(),
        "Backing store key listing failed: io"
    );
}

// === KvError Tests ===

#[test]
fn kv_error_wraps_store_error_as_source() {
    let err: KvError = StoreError::Write("quota".to_string()).into();
    assert_eq!(err.to_string(), "Backing store write failed: quota");
    assert!(err.source().is_some());
}

#[test]
fn kv_error_deserialization_names_key() {
    let err = KvError::Deserialization {
        key: "app:windows".to_string(),
        message: "expected value".to_string(),
    };
    assert_eq!(err.to_string(), "Malformed entry 'app:windows': expected value");
    assert!(err.source().is_none());
}

#[test]
fn kv_error_serialization_display() {
    let err = KvError::Serialization("key must be a string".to_string());
    assert_eq!(err.to_string(), "Failed to serialize value: key must be a string");
}

// === WindowError Tests ===

#[test]
fn window_error_display_variants() {
    assert_eq!(
        WindowError::AlreadyExists("w1".to_string()).to_string(),
        "Window already exists: w1"
    );
    let host: WindowError = HostError::CreateFailed("no display".to_string()).into();
    assert_eq!(host.to_string(), "Host failed to create window: no display");
    assert!(host.source().is_some());
}

// === SettingsError / AppError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("denied".to_string()).to_string(),
        "Settings I/O error: denied"
    );
    assert_eq!(
        SettingsError::SerializationError("eof".to_string()).to_string(),
        "Settings serialization error: eof"
    );
    assert_eq!(
        SettingsError::InvalidKey("a.b".to_string()).to_string(),
        "Invalid settings key: a.b"
    );
}

#[test]
fn app_error_display_variants() {
    assert_eq!(
        AppError::Database("locked".to_string()).to_string(),
        "Window-state database error: locked"
    );
    assert_eq!(
        AppError::Io("read-only".to_string()).to_string(),
        "Data directory error: read-only"
    );
}

#[test]
fn errors_are_boxable() {
    let errors: Vec<Box<dyn Error>> = vec![
        Box::new(StoreError::Read("x".to_string())),
        Box::new(KvError::Serialization("x".to_string())),
        Box::new(HostError::CreateFailed("x".to_string())),
        Box::new(WindowError::AlreadyExists("x".to_string())),
        Box::new(SettingsError::InvalidKey("x".to_string())),
        Box::new(AppError::Io("x".to_string())),
    ];
    assert_eq!(errors.len(), 6);
}
