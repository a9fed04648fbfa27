use serde::{Deserialize, Serialize};

/// Envelope written for every key-value entry.
///
/// `expiry` is an absolute timestamp in epoch milliseconds. An entry whose
/// expiry lies in the past is logically absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageItem<T> {
    pub value: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<i64>,
}

impl<T> StorageItem<T> {
    pub fn is_expired(&self, now_millis: i64) -> bool {
        matches!(self.expiry, Some(expiry) if now_millis > expiry)
    }
}
