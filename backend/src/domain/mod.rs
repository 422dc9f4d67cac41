//! Domain primitives, ports and services.
//!
//! Purpose: keep contact and avatar rules independent of HTTP, Diesel and the
//! object-store SDK. Inbound adapters call the driving ports implemented by
//! the services here; outbound adapters implement the driven ports.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic failure payload.
//! - `Contact`, `ContactDraft` and their validated fields.
//! - `AvatarKey` / `AvatarUpload`: object-store addressing and upload rules.
//! - `ContactsService` / `AvatarService`: driving-port implementations.

pub mod avatar;
pub mod avatar_service;
pub mod contact;
pub mod contacts_service;
pub mod error;
pub mod phone;
pub mod ports;
pub mod trace_id;

pub use self::avatar::{
    AvatarKey, AvatarUpload, AvatarValidationError, DEFAULT_AVATAR_CONTENT_TYPE, MAX_AVATAR_BYTES,
};
pub use self::avatar_service::{
    AVATAR_NOT_FOUND_MESSAGE, AVATAR_UPLOAD_FAILED_MESSAGE, AvatarService,
};
pub use self::contact::{
    Contact, ContactDraft, ContactId, ContactName, ContactValidationError, OwnerId, PhoneNumber,
};
pub use self::contacts_service::{CONTACT_NOT_FOUND_MESSAGE, ContactsService};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::phone::{DEFAULT_REGION, is_valid_phone_number};
pub use self::trace_id::TraceId;

/// Convenient result alias for domain operations.
///
/// # Examples
/// ```
/// use contacts::domain::{DomainResult, Error};
///
/// fn lookup() -> DomainResult<()> {
///     Err(Error::not_found("Contact not found"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type DomainResult<T> = Result<T, Error>;
