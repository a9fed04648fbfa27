//! Geometry persistence for windows.
//!
//! All saved states live in one KV record, `"windows"`, holding an ordered
//! list of [`WindowState`]. Saving upserts by id: an existing record is
//! replaced in place, a new one is appended, and every other record keeps its
//! value and position.

use log::warn;

use crate::services::backing_store::BackingStore;
use crate::services::kv_store::KvStore;
use crate::types::errors::KvError;
use crate::types::window::WindowState;

/// KV key holding the saved window list.
pub const WINDOWS_KEY: &str = "windows";

/// Trait defining geometry persistence operations.
pub trait GeometryStoreTrait {
    fn load(&mut self, id: &str) -> Option<WindowState>;
    fn save(&mut self, state: WindowState);
    fn all(&mut self) -> Vec<WindowState>;
}

/// Geometry persistence backed by a [`KvStore`].
pub struct GeometryStore<B: BackingStore> {
    kv: KvStore<B>,
}

impl<B: BackingStore> GeometryStore<B> {
    pub fn new(kv: KvStore<B>) -> Self {
        Self { kv }
    }

    pub fn kv(&self) -> &KvStore<B> {
        &self.kv
    }

    pub fn kv_mut(&mut self) -> &mut KvStore<B> {
        &mut self.kv
    }

    /// Reads the saved list.
    ///
    /// # Errors
    /// Propagates malformed-record and backend failures.
    pub fn try_all(&mut self) -> Result<Vec<WindowState>, KvError> {
        Ok(self.kv.try_get(WINDOWS_KEY)?.unwrap_or_default())
    }

    /// Upserts `state` by id.
    ///
    /// A malformed list is replaced rather than preserved, so corruption
    /// heals on the next successful write. A backend read failure aborts the
    /// save and leaves the stored list untouched.
    ///
    /// # Errors
    /// Propagates backend read and write failures.
    pub fn try_save(&mut self, state: WindowState) -> Result<(), KvError> {
        let mut windows = match self.try_all() {
            Ok(windows) => windows,
            Err(err @ KvError::Deserialization { .. }) => {
                warn!("Discarding unreadable window list: {}", err);
                Vec::new()
            }
            Err(err) => return Err(err),
        };

        match windows.iter_mut().find(|w| w.id == state.id) {
            Some(existing) => *existing = state,
            None => windows.push(state),
        }

        self.kv.try_set(WINDOWS_KEY, &windows, None)
    }
}

impl<B: BackingStore> GeometryStoreTrait for GeometryStore<B> {
    fn load(&mut self, id: &str) -> Option<WindowState> {
        self.all().into_iter().find(|w| w.id == id)
    }

    fn save(&mut self, state: WindowState) {
        let id = state.id.clone();
        if let Err(err) = self.try_save(state) {
            warn!("Failed to persist geometry for window '{}': {}", id, err);
        }
    }

    fn all(&mut self) -> Vec<WindowState> {
        self.kv.get(WINDOWS_KEY, Some(Vec::new())).unwrap_or_default()
    }
}
