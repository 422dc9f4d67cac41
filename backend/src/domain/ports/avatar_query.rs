//! Driving port for avatar downloads.

use async_trait::async_trait;

use crate::domain::{AvatarKey, Error};

use super::AvatarStream;

/// Domain use-case port for reading avatar images.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AvatarQuery: Send + Sync {
    /// Open an avatar for streaming to the client.
    async fn open_avatar(&self, key: &AvatarKey) -> Result<AvatarStream, Error>;
}
