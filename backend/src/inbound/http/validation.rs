//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every helper returns an `invalid_request` [`Error`] whose details carry
//! the offending field and a stable machine-readable code.

use serde_json::json;

use crate::domain::{AvatarValidationError, ContactId, ContactValidationError, Error};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    EmptyName,
    InvalidPhone,
    InvalidContactId,
    MissingAvatar,
    EmptyAvatar,
    AvatarTooLarge,
    InvalidAvatarKey,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::EmptyName => "empty_name",
            ErrorCode::InvalidPhone => "invalid_phone",
            ErrorCode::InvalidContactId => "invalid_contact_id",
            ErrorCode::MissingAvatar => "missing_avatar",
            ErrorCode::EmptyAvatar => "empty_avatar",
            ErrorCode::AvatarTooLarge => "avatar_too_large",
            ErrorCode::InvalidAvatarKey => "invalid_avatar_key",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) const NAME_FIELD: FieldName = FieldName::new("name");
pub(crate) const PHONE_FIELD: FieldName = FieldName::new("phone");
pub(crate) const ID_FIELD: FieldName = FieldName::new("id");
pub(crate) const AVATAR_FIELD: FieldName = FieldName::new("avatar");

/// Builder for validation errors with field context.
struct ValidationError {
    field: FieldName,
    message: String,
}

impl ValidationError {
    fn new(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field.as_str(),
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: &str) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field.as_str(),
            "value": value,
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    ValidationError::new(field, format!("missing required field: {name}"))
        .with_code(ErrorCode::MissingField)
}

/// Parse a path segment into a [`ContactId`].
pub(crate) fn parse_contact_id(raw: &str) -> Result<ContactId, Error> {
    raw.parse::<ContactId>().map_err(|_| {
        ValidationError::new(ID_FIELD, "Invalid contact ID")
            .with_value(ErrorCode::InvalidContactId, raw)
    })
}

pub(crate) fn map_contact_validation_error(err: ContactValidationError) -> Error {
    match err {
        ContactValidationError::EmptyName => {
            ValidationError::new(NAME_FIELD, err.to_string()).with_code(ErrorCode::EmptyName)
        }
        ContactValidationError::EmptyPhone => missing_field_error(PHONE_FIELD),
        ContactValidationError::InvalidPhone => {
            ValidationError::new(PHONE_FIELD, err.to_string()).with_code(ErrorCode::InvalidPhone)
        }
        ContactValidationError::InvalidId { ref value } => {
            ValidationError::new(ID_FIELD, "Invalid contact ID")
                .with_value(ErrorCode::InvalidContactId, value)
        }
    }
}

pub(crate) fn missing_avatar_error() -> Error {
    ValidationError::new(AVATAR_FIELD, "Invalid avatar file provided")
        .with_code(ErrorCode::MissingAvatar)
}

pub(crate) fn map_avatar_validation_error(err: AvatarValidationError) -> Error {
    match err {
        AvatarValidationError::EmptyKey => {
            ValidationError::new(ID_FIELD, "Invalid avatar key").with_code(ErrorCode::InvalidAvatarKey)
        }
        AvatarValidationError::EmptyFile => {
            ValidationError::new(AVATAR_FIELD, err.to_string()).with_code(ErrorCode::EmptyAvatar)
        }
        AvatarValidationError::TooLarge { .. } => {
            ValidationError::new(AVATAR_FIELD, err.to_string())
                .with_code(ErrorCode::AvatarTooLarge)
        }
    }
}
