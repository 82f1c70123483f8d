use thiserror::Error;

/// Errors returned by [`DeviceStore`](crate::DeviceStore) operations.
///
/// Callers match on the variant — `NotFound` is the expected "key absent"
/// condition (a 404-equivalent for an HTTP layer), while `Decode` and
/// `Encode` carry the underlying serde failure.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Get on a key with no entry.
    #[error("no such key: {0}")]
    NotFound(String),

    /// Put given a payload that does not decode as a device document.
    /// The store is left unchanged.
    #[error("decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// A stored record failed to serialize. Stored values are always
    /// well-formed, so this indicates an internal invariant violation.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),
}

impl StoreError {
    /// True for the "key absent" condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
