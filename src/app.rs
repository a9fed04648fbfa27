//! Process-start wiring.
//!
//! Builds the window session manager once, from settings, and hands it to
//! whatever issues window operations. There is no global instance.

use std::fs;
use std::sync::Arc;

use log::info;

use crate::database::connection::Database;
use crate::host::WindowHost;
use crate::managers::window_manager::WindowManager;
use crate::platform;
use crate::services::backing_store::SqliteBackingStore;
use crate::services::geometry_store::GeometryStore;
use crate::services::kv_store::KvStore;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::errors::AppError;

/// Central application struct: settings plus the window session manager.
pub struct App<H: WindowHost> {
    pub db: Arc<Database>,
    pub settings_engine: SettingsEngine,
    pub window_manager: WindowManager<H, SqliteBackingStore>,
}

impl<H: WindowHost> App<H> {
    /// Loads settings (defaults if missing or unreadable), opens the
    /// window-state database in the data directory and builds the manager.
    ///
    /// # Errors
    /// `AppError::Io` if the data directory cannot be created,
    /// `AppError::Database` if the database cannot be opened.
    pub fn new(host: H, config_path: Option<String>) -> Result<Self, AppError> {
        let mut settings_engine = SettingsEngine::new(config_path);
        let settings = settings_engine.load_or_default();

        let db_path = platform::resolve_data_file(&settings.storage.database_file);
        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent).map_err(|e| AppError::Io(e.to_string()))?;
        }
        let db = Database::open(&db_path).map_err(|e| AppError::Database(e.to_string()))?;

        Ok(Self::with_database(host, settings_engine, Arc::new(db)))
    }

    /// Builds the manager over an already opened database.
    pub fn with_database(host: H, settings_engine: SettingsEngine, db: Arc<Database>) -> Self {
        let settings = settings_engine.get_settings().clone();

        let mut kv = KvStore::new(SqliteBackingStore::new(db.clone()), &settings.storage.prefix);
        if settings.storage.sweep_on_startup {
            let purged = kv.sweep_expired();
            if purged > 0 {
                info!("Purged {} expired entries", purged);
            }
        }

        let window_manager = WindowManager::new(
            host,
            GeometryStore::new(kv),
            settings.default_window.clone(),
            settings.content.source(),
        );

        Self {
            db,
            settings_engine,
            window_manager,
        }
    }
}
