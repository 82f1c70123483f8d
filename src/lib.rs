//! In-process store for device inventory records.
//!
//! A [`DeviceStore`] maps opaque string keys to [`Device`] records behind a
//! reader/writer lock. Records cross the store boundary as JSON documents;
//! the store itself is process-lifetime only — no persistence, no eviction.

pub mod device;
pub mod error;
pub mod store;

pub use device::Device;
pub use error::StoreError;
pub use store::DeviceStore;
