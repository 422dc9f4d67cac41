//! In-process `AvatarStore` used by tests and local runs.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::{StreamExt, stream};

use crate::domain::ports::{AvatarStore, AvatarStoreError, AvatarStream};
use crate::domain::{AvatarKey, AvatarUpload};

#[derive(Debug, Clone)]
struct StoredObject {
    bytes: Bytes,
    content_type: String,
}

/// Object map keyed by avatar key.
#[derive(Debug, Default)]
pub struct InMemoryAvatarStore {
    objects: Mutex<HashMap<AvatarKey, StoredObject>>,
}

impl InMemoryAvatarStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lookup(&self, key: &AvatarKey) -> Result<StoredObject, AvatarStoreError> {
        let objects = self
            .objects
            .lock()
            .map_err(|_| AvatarStoreError::storage("avatar map lock poisoned"))?;
        objects
            .get(key)
            .cloned()
            .ok_or_else(|| AvatarStoreError::not_found(key.as_str()))
    }
}

#[async_trait]
impl AvatarStore for InMemoryAvatarStore {
    async fn upload(&self, upload: &AvatarUpload) -> Result<(), AvatarStoreError> {
        let mut objects = self
            .objects
            .lock()
            .map_err(|_| AvatarStoreError::storage("avatar map lock poisoned"))?;
        objects.insert(
            upload.key().clone(),
            StoredObject {
                bytes: upload.bytes().clone(),
                content_type: upload.content_type().to_owned(),
            },
        );
        Ok(())
    }

    async fn download(&self, key: &AvatarKey) -> Result<Bytes, AvatarStoreError> {
        self.lookup(key).map(|object| object.bytes)
    }

    async fn get_stream(&self, key: &AvatarKey) -> Result<AvatarStream, AvatarStoreError> {
        let StoredObject {
            bytes,
            content_type,
        } = self.lookup(key)?;
        Ok(AvatarStream {
            content_type,
            content_length: u64::try_from(bytes.len()).ok(),
            body: stream::once(async move { Ok(bytes) }).boxed(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactId;
    use rstest::rstest;

    fn upload(bytes: &'static [u8]) -> AvatarUpload {
        AvatarUpload::new(
            AvatarKey::for_contact(ContactId::new(1)),
            Bytes::from_static(bytes),
            Some("image/png".to_owned()),
        )
        .expect("valid upload")
    }

    #[rstest]
    #[tokio::test]
    async fn uploaded_bytes_can_be_downloaded() {
        let store = InMemoryAvatarStore::new();
        store.upload(&upload(b"first")).await.expect("upload");
        store.upload(&upload(b"second")).await.expect("overwrite");

        let bytes = store
            .download(&AvatarKey::new("1").expect("key"))
            .await
            .expect("download");
        assert_eq!(bytes, Bytes::from_static(b"second"));
    }

    #[rstest]
    #[tokio::test]
    async fn stream_reports_metadata() {
        let store = InMemoryAvatarStore::new();
        store.upload(&upload(b"png")).await.expect("upload");

        let opened = store
            .get_stream(&AvatarKey::new("1").expect("key"))
            .await
            .expect("stream");
        assert_eq!(opened.content_type, "image/png");
        assert_eq!(opened.content_length, Some(3));
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_keys_are_not_found() {
        let store = InMemoryAvatarStore::new();
        let err = store
            .download(&AvatarKey::new("missing").expect("key"))
            .await
            .expect_err("nothing stored");
        assert_eq!(err, AvatarStoreError::not_found("missing"));
    }
}
