//! Driving port for avatar uploads.

use async_trait::async_trait;

use crate::domain::{AvatarUpload, Error};

/// Domain use-case port for storing avatar images.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AvatarCommand: Send + Sync {
    /// Store an avatar, replacing any previous image under the same key.
    async fn upload_avatar(&self, upload: AvatarUpload) -> Result<(), Error>;
}
