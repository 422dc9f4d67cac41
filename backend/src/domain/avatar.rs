//! Avatar image primitives.

use std::fmt;

use bytes::Bytes;
use thiserror::Error;

use super::ContactId;

/// Largest accepted avatar upload in bytes (10 MiB).
pub const MAX_AVATAR_BYTES: usize = 10 * 1024 * 1024;

/// Content type used when the client or the store does not supply one.
pub const DEFAULT_AVATAR_CONTENT_TYPE: &str = "application/octet-stream";

/// Validation errors for avatar keys and uploads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AvatarValidationError {
    /// Object keys must not be blank.
    #[error("avatar key must not be empty")]
    EmptyKey,
    /// Uploaded file contains no bytes.
    #[error("Avatar file is empty")]
    EmptyFile,
    /// Uploaded file exceeds [`MAX_AVATAR_BYTES`].
    #[error("Avatar size cannot exceed 10MB")]
    TooLarge { size: usize },
}

/// Object-store key under which an avatar is kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AvatarKey(String);

impl AvatarKey {
    /// Validate and wrap a raw key.
    pub fn new(key: impl Into<String>) -> Result<Self, AvatarValidationError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(AvatarValidationError::EmptyKey);
        }
        Ok(Self(key))
    }

    /// Key for a contact's avatar: the decimal contact id.
    ///
    /// # Examples
    /// ```
    /// use contacts::domain::{AvatarKey, ContactId};
    ///
    /// assert_eq!(AvatarKey::for_contact(ContactId::new(12)).as_str(), "12");
    /// ```
    pub fn for_contact(id: ContactId) -> Self {
        Self(id.to_string())
    }

    /// Borrow the key.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for AvatarKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Avatar bytes ready to be written to the object store.
///
/// ## Invariants
/// - `bytes` is non-empty and at most [`MAX_AVATAR_BYTES`] long.
/// - `content_type` is never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarUpload {
    key: AvatarKey,
    bytes: Bytes,
    content_type: String,
}

impl AvatarUpload {
    /// Validate an upload. A missing or blank content type falls back to
    /// [`DEFAULT_AVATAR_CONTENT_TYPE`].
    pub fn new(
        key: AvatarKey,
        bytes: Bytes,
        content_type: Option<String>,
    ) -> Result<Self, AvatarValidationError> {
        if bytes.is_empty() {
            return Err(AvatarValidationError::EmptyFile);
        }
        if bytes.len() > MAX_AVATAR_BYTES {
            return Err(AvatarValidationError::TooLarge { size: bytes.len() });
        }
        let content_type = content_type
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_AVATAR_CONTENT_TYPE.to_owned());
        Ok(Self {
            key,
            bytes,
            content_type,
        })
    }

    /// Destination key.
    pub fn key(&self) -> &AvatarKey {
        &self.key
    }

    /// File contents.
    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// MIME type sent to the store.
    pub fn content_type(&self) -> &str {
        self.content_type.as_str()
    }

    /// Split into owned parts.
    pub fn into_parts(self) -> (AvatarKey, Bytes, String) {
        (self.key, self.bytes, self.content_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn key() -> AvatarKey {
        AvatarKey::for_contact(ContactId::new(1))
    }

    #[rstest]
    fn blank_keys_are_rejected() {
        assert_eq!(AvatarKey::new(" "), Err(AvatarValidationError::EmptyKey));
    }

    #[rstest]
    fn empty_files_are_rejected(key: AvatarKey) {
        let result = AvatarUpload::new(key, Bytes::new(), None);
        assert_eq!(result, Err(AvatarValidationError::EmptyFile));
    }

    #[rstest]
    fn files_at_the_limit_are_accepted(key: AvatarKey) {
        let bytes = Bytes::from(vec![0_u8; MAX_AVATAR_BYTES]);
        assert!(AvatarUpload::new(key, bytes, None).is_ok());
    }

    #[rstest]
    fn files_over_the_limit_are_rejected(key: AvatarKey) {
        let bytes = Bytes::from(vec![0_u8; MAX_AVATAR_BYTES + 1]);
        let result = AvatarUpload::new(key, bytes, None);
        assert_eq!(
            result,
            Err(AvatarValidationError::TooLarge {
                size: MAX_AVATAR_BYTES + 1
            })
        );
    }

    #[rstest]
    #[case(None, DEFAULT_AVATAR_CONTENT_TYPE)]
    #[case(Some(String::new()), DEFAULT_AVATAR_CONTENT_TYPE)]
    #[case(Some("image/png".to_owned()), "image/png")]
    fn content_type_defaults_when_missing(
        key: AvatarKey,
        #[case] supplied: Option<String>,
        #[case] expected: &str,
    ) {
        let upload =
            AvatarUpload::new(key, Bytes::from_static(b"png"), supplied).expect("valid upload");
        assert_eq!(upload.content_type(), expected);
    }
}
