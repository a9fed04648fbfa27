//! Namespaced key-value store with lazy TTL expiry.
//!
//! Every logical key is prefixed before it reaches the backing store, so
//! several stores can share one backend. Values are wrapped in a
//! [`StorageItem`] envelope; an envelope whose expiry has passed is purged the
//! next time it is read.
//!
//! Two layers are exposed:
//! - `try_get` / `try_set` / `try_remove` return [`KvError`] so callers and
//!   tests can inspect the failure kind.
//! - `get` / `set` / `remove` never fail: errors are logged and the caller's
//!   default is returned.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::services::backing_store::BackingStore;
use crate::types::errors::KvError;
use crate::types::storage::StorageItem;

/// Source of the current time in epoch milliseconds.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }
}

/// Result of looking up one physical key.
enum Lookup {
    Missing,
    /// The entry had expired and has been deleted.
    Purged,
    Present(serde_json::Value),
}

/// Key-value store over a [`BackingStore`].
pub struct KvStore<B: BackingStore> {
    backing: B,
    prefix: String,
    clock: Box<dyn Clock>,
}

impl<B: BackingStore> KvStore<B> {
    pub fn new(backing: B, prefix: &str) -> Self {
        Self::with_clock(backing, prefix, Box::new(SystemClock))
    }

    pub fn with_clock(backing: B, prefix: &str, clock: Box<dyn Clock>) -> Self {
        Self {
            backing,
            prefix: prefix.to_string(),
            clock,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn backing(&self) -> &B {
        &self.backing
    }

    pub fn backing_mut(&mut self) -> &mut B {
        &mut self.backing
    }

    /// Physical key for a logical key.
    pub fn full_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    fn lookup(&mut self, full_key: &str) -> Result<Lookup, KvError> {
        let raw = match self.backing.read(full_key)? {
            Some(raw) => raw,
            None => return Ok(Lookup::Missing),
        };

        let item: StorageItem<serde_json::Value> =
            serde_json::from_str(&raw).map_err(|e| KvError::Deserialization {
                key: full_key.to_string(),
                message: e.to_string(),
            })?;

        if item.is_expired(self.clock.now_millis()) {
            self.backing.delete(full_key)?;
            debug!("Purged expired entry '{}'", full_key);
            return Ok(Lookup::Purged);
        }

        Ok(Lookup::Present(item.value))
    }

    /// Reads `key`, purging it if expired.
    ///
    /// # Errors
    /// `KvError::Deserialization` if the payload is not an envelope holding a
    /// `T`; `KvError::Backing` if the backend fails.
    pub fn try_get<T: DeserializeOwned>(&mut self, key: &str) -> Result<Option<T>, KvError> {
        let full_key = self.full_key(key);
        match self.lookup(&full_key)? {
            Lookup::Missing | Lookup::Purged => Ok(None),
            Lookup::Present(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| KvError::Deserialization {
                    key: full_key,
                    message: e.to_string(),
                }),
        }
    }

    /// Reads `key`, returning `default` when it is absent, expired or unreadable.
    pub fn get<T: DeserializeOwned>(&mut self, key: &str, default: Option<T>) -> Option<T> {
        match self.try_get(key) {
            Ok(Some(value)) => Some(value),
            Ok(None) => default,
            Err(err) => {
                warn!("Failed to read '{}': {}", key, err);
                default
            }
        }
    }

    /// Writes `value` under `key`. A `ttl` of `None` or zero never expires.
    ///
    /// # Errors
    /// `KvError::Serialization` or `KvError::Backing`.
    pub fn try_set<T: Serialize>(
        &mut self,
        key: &str,
        value: &T,
        ttl: Option<Duration>,
    ) -> Result<(), KvError> {
        let expiry = ttl.filter(|ttl| !ttl.is_zero()).map(|ttl| {
            let ttl_millis = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
            self.clock.now_millis().saturating_add(ttl_millis)
        });

        let item = StorageItem { value, expiry };
        let payload =
            serde_json::to_string(&item).map_err(|e| KvError::Serialization(e.to_string()))?;

        let full_key = self.full_key(key);
        self.backing.write(&full_key, &payload)?;
        Ok(())
    }

    /// Writes `value` under `key`; failures are logged and dropped.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T, ttl: Option<Duration>) {
        if let Err(err) = self.try_set(key, value, ttl) {
            warn!("Failed to write '{}': {}", key, err);
        }
    }

    /// # Errors
    /// `KvError::Backing` if the backend fails. Removing an absent key is not an error.
    pub fn try_remove(&mut self, key: &str) -> Result<(), KvError> {
        let full_key = self.full_key(key);
        self.backing.delete(&full_key)?;
        Ok(())
    }

    /// Deletes `key` unconditionally. Idempotent.
    pub fn remove(&mut self, key: &str) {
        if let Err(err) = self.try_remove(key) {
            warn!("Failed to remove '{}': {}", key, err);
        }
    }

    /// Reads every entry under this store's prefix, purging the expired ones.
    ///
    /// Returns the number of entries purged. Malformed entries are logged and
    /// left in place.
    pub fn sweep_expired(&mut self) -> usize {
        let keys = match self.backing.keys() {
            Ok(keys) => keys,
            Err(err) => {
                warn!("Expiry sweep skipped: {}", err);
                return 0;
            }
        };

        let prefix = self.prefix.clone();
        let mut purged = 0;
        for full_key in keys.iter().filter(|k| k.starts_with(&prefix)) {
            match self.lookup(full_key) {
                Ok(Lookup::Purged) => purged += 1,
                Ok(_) => {}
                Err(err) => warn!("Expiry sweep could not read '{}': {}", full_key, err),
            }
        }
        purged
    }
}
