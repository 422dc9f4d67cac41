//! Port abstraction for avatar object storage.

use std::fmt;

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::stream::BoxStream;

use crate::domain::{AvatarKey, AvatarUpload};

use super::define_port_error;

define_port_error! {
    /// Errors raised by object-store adapters.
    pub enum AvatarStoreError {
        /// No object-store client was configured at startup.
        MissingClient => "object storage client is not configured",
        /// The bucket holds no object under the key.
        NotFound { key: String } => "avatar {key} not found",
        /// The store rejected or failed the request.
        Storage { message: String } => "{message}",
    }
}

/// Streamed object body; dropping it releases the underlying connection.
pub type AvatarBody = BoxStream<'static, Result<Bytes, AvatarStoreError>>;

/// Avatar object opened for streaming.
pub struct AvatarStream {
    /// MIME type recorded with the object.
    pub content_type: String,
    /// Object size when the store reports one.
    pub content_length: Option<u64>,
    /// Object bytes.
    pub body: AvatarBody,
}

impl fmt::Debug for AvatarStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvatarStream")
            .field("content_type", &self.content_type)
            .field("content_length", &self.content_length)
            .finish_non_exhaustive()
    }
}

/// Driven port over a single configured bucket.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AvatarStore: Send + Sync {
    /// Write an object, replacing any existing one under the same key.
    async fn upload(&self, upload: &AvatarUpload) -> Result<(), AvatarStoreError>;

    /// Read a whole object into memory.
    async fn download(&self, key: &AvatarKey) -> Result<Bytes, AvatarStoreError>;

    /// Open an object for streaming.
    async fn get_stream(&self, key: &AvatarKey) -> Result<AvatarStream, AvatarStoreError>;
}
