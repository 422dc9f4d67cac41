//! `AvatarStore` backed by an S3-compatible bucket via `aws-sdk-s3`.

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::error::{DisplayErrorContext, SdkError};
use aws_sdk_s3::operation::get_object::{GetObjectError, GetObjectOutput};
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use futures_util::StreamExt;
use futures_util::stream;
use tracing::debug;

use crate::domain::ports::{AvatarBody, AvatarStore, AvatarStoreError, AvatarStream};
use crate::domain::{AvatarKey, AvatarUpload, DEFAULT_AVATAR_CONTENT_TYPE};

use super::StorageSettings;

const CREDENTIALS_PROVIDER_NAME: &str = "contacts-static";

/// Avatar store talking to one bucket with static credentials and
/// path-style addressing.
#[derive(Clone, Debug)]
pub struct S3AvatarStore {
    client: Client,
    bucket: String,
}

impl S3AvatarStore {
    /// Build a client for the configured endpoint.
    pub fn new(settings: &StorageSettings) -> Self {
        let credentials = Credentials::new(
            settings.access_key(),
            settings.secret_key(),
            None,
            None,
            CREDENTIALS_PROVIDER_NAME,
        );
        let config = aws_sdk_s3::config::Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(settings.region().to_owned()))
            .credentials_provider(credentials)
            .endpoint_url(settings.endpoint())
            .force_path_style(true)
            .build();
        Self {
            client: Client::from_conf(config),
            bucket: settings.bucket().to_owned(),
        }
    }

    /// Bucket this store writes to.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    async fn get_object(&self, key: &AvatarKey) -> Result<GetObjectOutput, AvatarStoreError> {
        self.client
            .get_object()
            .bucket(&self.bucket)
            .key(key.as_str())
            .send()
            .await
            .map_err(|err| map_get_error(key, &err))
    }
}

fn map_get_error(key: &AvatarKey, err: &SdkError<GetObjectError>) -> AvatarStoreError {
    if err
        .as_service_error()
        .is_some_and(GetObjectError::is_no_such_key)
    {
        return AvatarStoreError::not_found(key.as_str());
    }
    storage_error(err)
}

fn storage_error<E>(err: &E) -> AvatarStoreError
where
    E: std::error::Error,
{
    let message = DisplayErrorContext(err).to_string();
    debug!(%message, "object storage request failed");
    AvatarStoreError::storage(message)
}

fn body_stream(body: ByteStream) -> AvatarBody {
    stream::unfold(body, |mut body| async move {
        let chunk = body.next().await?;
        let item = chunk.map_err(|err| storage_error(&err));
        Some((item, body))
    })
    .boxed()
}

#[async_trait]
impl AvatarStore for S3AvatarStore {
    async fn upload(&self, upload: &AvatarUpload) -> Result<(), AvatarStoreError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(upload.key().as_str())
            .content_type(upload.content_type())
            .body(ByteStream::from(upload.bytes().clone()))
            .send()
            .await
            .map_err(|err| storage_error(&err))?;
        Ok(())
    }

    async fn download(&self, key: &AvatarKey) -> Result<Bytes, AvatarStoreError> {
        let output = self.get_object(key).await?;
        let data = output
            .body
            .collect()
            .await
            .map_err(|err| storage_error(&err))?;
        Ok(data.into_bytes())
    }

    async fn get_stream(&self, key: &AvatarKey) -> Result<AvatarStream, AvatarStoreError> {
        let output = self.get_object(key).await?;
        let content_type = output
            .content_type()
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_AVATAR_CONTENT_TYPE)
            .to_owned();
        let content_length = output
            .content_length()
            .and_then(|length| u64::try_from(length).ok());
        Ok(AvatarStream {
            content_type,
            content_length,
            body: body_stream(output.body),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockable::MockEnv;
    use rstest::rstest;

    fn settings() -> StorageSettings {
        let mut env = MockEnv::new();
        env.expect_string().returning(|name| {
            let value = match name {
                "OCI_S3_ENDPOINT" => "http://127.0.0.1:9",
                "OCI_S3_REGION" => "eu-frankfurt-1",
                "OCI_S3_ACCESS_KEY" => "access",
                "OCI_S3_SECRET_KEY" => "secret",
                "OCI_BUCKET_NAME" => "avatars",
                _ => return None,
            };
            Some(value.to_owned())
        });
        StorageSettings::from_env(&env).expect("complete settings")
    }

    #[rstest]
    fn store_targets_configured_bucket() {
        let store = S3AvatarStore::new(&settings());
        assert_eq!(store.bucket(), "avatars");
    }

    #[rstest]
    #[tokio::test]
    async fn body_stream_yields_all_bytes() {
        let mut body = body_stream(ByteStream::from_static(b"avatar-bytes"));
        let mut collected = Vec::new();
        while let Some(chunk) = body.next().await {
            collected.extend_from_slice(&chunk.expect("chunk"));
        }
        assert_eq!(collected, b"avatar-bytes");
    }
}
