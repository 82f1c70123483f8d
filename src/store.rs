use std::collections::HashMap;
use std::sync::RwLock;

use tracing::{debug, error};

use crate::device::Device;
use crate::error::StoreError;

/// DeviceStore holds the authoritative in-memory set of device records.
///
/// One reader/writer lock guards the whole map: reads (`get`,
/// `collection`) take the shared lock, writes (`put`, `delete`) the
/// exclusive lock. Payload decode and encode happen outside the lock,
/// so the lock is only ever held for the map step itself.
///
/// Records cross the boundary as JSON documents (see [`Device`] for the
/// field mapping). Returned values are owned copies — nothing handed
/// out aliases store-internal state.
///
/// Construct one per process (or per test) and share it by reference;
/// there is no global instance.
pub struct DeviceStore {
    inner: RwLock<HashMap<String, Device>>,
}

impl DeviceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Decode `payload` and insert the record under `key`, replacing any
    /// prior entry for that key.
    ///
    /// The record is indexed by `key` alone; its own `id` field is not
    /// consulted and the two need not match. Decode happens before the
    /// write lock is taken, so a malformed payload never touches store
    /// state. Empty keys are accepted.
    pub fn put(&self, key: &str, payload: &str) -> Result<(), StoreError> {
        let device: Device =
            serde_json::from_str(payload).map_err(StoreError::Decode)?;

        let mut map = self.inner.write().unwrap();
        map.insert(key.to_string(), device);
        drop(map);

        debug!(key, "device stored");
        Ok(())
    }

    /// Fetch the record under `key`, encoded as a JSON document.
    ///
    /// An absent key is `StoreError::NotFound`. Encoding a stored record
    /// cannot ordinarily fail; if it does, the failure is logged and
    /// returned as `StoreError::Encode`.
    pub fn get(&self, key: &str) -> Result<String, StoreError> {
        // Clone under the read lock, encode after releasing it.
        let device = {
            let map = self.inner.read().unwrap();
            map.get(key)
                .cloned()
                .ok_or_else(|| StoreError::NotFound(key.to_string()))?
        };

        serde_json::to_string(&device).map_err(|e| {
            error!(key, %e, "stored device failed to encode");
            StoreError::Encode(e)
        })
    }

    /// Point-in-time snapshot of every key/record pair.
    ///
    /// The snapshot is an owned copy: later `put`/`delete` calls do not
    /// change it, and mutating it cannot corrupt the store. It may be
    /// stale the instant it is returned — the store is linearizable per
    /// call, not across calls.
    pub fn collection(&self) -> HashMap<String, Device> {
        let map = self.inner.read().unwrap();
        map.clone()
    }

    /// Remove the entry under `key`, if any. Deleting an absent key is a
    /// no-op, not an error.
    pub fn delete(&self, key: &str) {
        let mut map = self.inner.write().unwrap();
        map.remove(key);
        drop(map);

        debug!(key, "device deleted");
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().unwrap().is_empty()
    }
}

impl Default for DeviceStore {
    fn default() -> Self {
        Self::new()
    }
}
