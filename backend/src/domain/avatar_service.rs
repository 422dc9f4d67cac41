//! Avatar domain service backed by an [`AvatarStore`].

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{AvatarCommand, AvatarQuery, AvatarStore, AvatarStoreError, AvatarStream};
use crate::domain::{AvatarKey, AvatarUpload, Error};

/// Message returned when no object exists under the requested key.
pub const AVATAR_NOT_FOUND_MESSAGE: &str = "Avatar not found.";

/// Message returned when uploads fail inside the store.
pub const AVATAR_UPLOAD_FAILED_MESSAGE: &str = "Could not upload avatar";

/// Implements the avatar driving ports.
#[derive(Clone)]
pub struct AvatarService<S> {
    store: Arc<S>,
}

impl<S> AvatarService<S> {
    /// Create a service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

fn missing_client() -> Error {
    Error::service_unavailable("avatar storage is not configured")
}

#[async_trait]
impl<S> AvatarCommand for AvatarService<S>
where
    S: AvatarStore,
{
    async fn upload_avatar(&self, upload: AvatarUpload) -> Result<(), Error> {
        self.store.upload(&upload).await.map_err(|err| match err {
            AvatarStoreError::MissingClient => missing_client(),
            other => {
                tracing::error!(key = %upload.key(), error = %other, "avatar upload failed");
                Error::internal(AVATAR_UPLOAD_FAILED_MESSAGE)
            }
        })
    }
}

#[async_trait]
impl<S> AvatarQuery for AvatarService<S>
where
    S: AvatarStore,
{
    async fn open_avatar(&self, key: &AvatarKey) -> Result<AvatarStream, Error> {
        self.store.get_stream(key).await.map_err(|err| match err {
            AvatarStoreError::MissingClient => missing_client(),
            AvatarStoreError::NotFound { .. } => Error::not_found(AVATAR_NOT_FOUND_MESSAGE),
            AvatarStoreError::Storage { message } => {
                tracing::error!(%key, %message, "avatar lookup failed");
                Error::internal(format!("avatar storage error: {message}"))
            }
        })
    }
}
