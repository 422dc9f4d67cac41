//! Avatar object-storage adapters.
//!
//! `S3AvatarStore` targets any S3-compatible endpoint (OCI Object Storage in
//! production). `InMemoryAvatarStore` backs tests, and
//! `UnconfiguredAvatarStore` answers when the `OCI_*` settings are absent.

mod config;
mod in_memory_avatar_store;
mod s3_avatar_store;
mod unconfigured_avatar_store;

pub use config::{StorageConfigError, StorageSettings};
pub use in_memory_avatar_store::InMemoryAvatarStore;
pub use s3_avatar_store::S3AvatarStore;
pub use unconfigured_avatar_store::UnconfiguredAvatarStore;
