//! Stand-in `AvatarStore` used when no object storage is configured.

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::ports::{AvatarStore, AvatarStoreError, AvatarStream};
use crate::domain::{AvatarKey, AvatarUpload};

/// Rejects every call with [`AvatarStoreError::MissingClient`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredAvatarStore;

#[async_trait]
impl AvatarStore for UnconfiguredAvatarStore {
    async fn upload(&self, _upload: &AvatarUpload) -> Result<(), AvatarStoreError> {
        Err(AvatarStoreError::missing_client())
    }

    async fn download(&self, _key: &AvatarKey) -> Result<Bytes, AvatarStoreError> {
        Err(AvatarStoreError::missing_client())
    }

    async fn get_stream(&self, _key: &AvatarKey) -> Result<AvatarStream, AvatarStoreError> {
        Err(AvatarStoreError::missing_client())
    }
}
