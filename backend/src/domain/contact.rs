//! Contact data model.
//!
//! A contact is the only persisted business entity: a display name, a phone
//! number and an optional owner reference. Identifiers are assigned by the
//! store on insert and never change afterwards.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::phone::is_valid_phone_number;

/// Validation errors raised while building contact primitives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactValidationError {
    /// Name is empty once surrounding whitespace is removed.
    #[error("name must not be empty")]
    EmptyName,
    /// Phone is absent or blank.
    #[error("phone must not be empty")]
    EmptyPhone,
    /// Phone does not pass the numbering-plan checks.
    #[error("phone must be a valid phone number")]
    InvalidPhone,
    /// Identifier is not a base-10 32-bit signed integer.
    #[error("contact id must be an integer: {value}")]
    InvalidId { value: String },
}

/// Store-assigned contact identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactId(i32);

impl ContactId {
    /// Wrap a raw identifier.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw integer value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl FromStr for ContactId {
    type Err = ContactValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i32>()
            .map(Self)
            .map_err(|_| ContactValidationError::InvalidId {
                value: s.to_owned(),
            })
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Identifier of the owning account, when a contact has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnerId(i32);

impl OwnerId {
    /// Wrap a raw owner identifier.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw integer value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

/// Contact display name; never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactName(String);

impl ContactName {
    /// Validate and wrap a name. The value is stored as given.
    ///
    /// # Examples
    /// ```
    /// use contacts::domain::ContactName;
    ///
    /// assert!(ContactName::new("Anna Nowak").is_ok());
    /// assert!(ContactName::new("  ").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, ContactValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ContactValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    /// Borrow the name.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<ContactName> for String {
    fn from(value: ContactName) -> Self {
        value.0
    }
}

/// Contact phone number in the form the caller supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate a phone number for writing.
    ///
    /// # Examples
    /// ```
    /// use contacts::domain::PhoneNumber;
    ///
    /// assert!(PhoneNumber::new("+48123456789").is_ok());
    /// assert!(PhoneNumber::new("abc").is_err());
    /// ```
    pub fn new(phone: impl Into<String>) -> Result<Self, ContactValidationError> {
        let phone = phone.into();
        if phone.trim().is_empty() {
            return Err(ContactValidationError::EmptyPhone);
        }
        if !is_valid_phone_number(&phone) {
            return Err(ContactValidationError::InvalidPhone);
        }
        Ok(Self(phone))
    }

    /// Wrap a number read back from storage.
    ///
    /// Stored numbers passed validation when written and are not re-checked.
    pub fn from_stored(phone: impl Into<String>) -> Result<Self, ContactValidationError> {
        let phone = phone.into();
        if phone.trim().is_empty() {
            return Err(ContactValidationError::EmptyPhone);
        }
        Ok(Self(phone))
    }

    /// Borrow the number.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}

/// Validated write payload shared by create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    name: ContactName,
    phone: PhoneNumber,
}

impl ContactDraft {
    /// Build a draft from already validated parts.
    pub fn new(name: ContactName, phone: PhoneNumber) -> Self {
        Self { name, phone }
    }

    /// Validate raw name and phone values. The name is checked first.
    pub fn try_from_parts(
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<Self, ContactValidationError> {
        let name = ContactName::new(name)?;
        let phone = PhoneNumber::new(phone)?;
        Ok(Self { name, phone })
    }

    /// Contact name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Contact phone.
    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    /// Split into owned parts.
    pub fn into_parts(self) -> (ContactName, PhoneNumber) {
        (self.name, self.phone)
    }
}

/// Persisted contact record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    id: ContactId,
    name: ContactName,
    phone: PhoneNumber,
    owner_id: Option<OwnerId>,
}

impl Contact {
    /// Assemble a contact from its parts.
    pub fn new(
        id: ContactId,
        name: ContactName,
        phone: PhoneNumber,
        owner_id: Option<OwnerId>,
    ) -> Self {
        Self {
            id,
            name,
            phone,
            owner_id,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> ContactId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Phone number.
    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    /// Owning account, if any.
    pub fn owner_id(&self) -> Option<OwnerId> {
        self.owner_id
    }

    /// Replace name and phone, keeping `id` and `owner_id`.
    pub fn apply(self, draft: ContactDraft) -> Self {
        let (name, phone) = draft.into_parts();
        Self {
            name,
            phone,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", 1)]
    #[case("42", 42)]
    #[case("-7", -7)]
    #[case("2147483647", i32::MAX)]
    fn contact_id_parses_base_ten(#[case] raw: &str, #[case] expected: i32) {
        let id: ContactId = raw.parse().expect("valid id");
        assert_eq!(id.get(), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("")]
    #[case("1.5")]
    #[case("2147483648")]
    #[case("0x10")]
    fn contact_id_rejects_non_integers(#[case] raw: &str) {
        let err = raw.parse::<ContactId>().expect_err("invalid id");
        assert_eq!(
            err,
            ContactValidationError::InvalidId {
                value: raw.to_owned()
            }
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_names_are_rejected(#[case] raw: &str) {
        assert_eq!(ContactName::new(raw), Err(ContactValidationError::EmptyName));
    }

    #[rstest]
    fn names_keep_their_original_spacing() {
        let name = ContactName::new(" Anna ").expect("valid name");
        assert_eq!(name.as_str(), " Anna ");
    }

    #[rstest]
    #[case("", ContactValidationError::EmptyPhone)]
    #[case("abc", ContactValidationError::InvalidPhone)]
    fn invalid_phones_are_rejected(#[case] raw: &str, #[case] expected: ContactValidationError) {
        assert_eq!(PhoneNumber::new(raw), Err(expected));
    }

    #[rstest]
    fn stored_phones_skip_numbering_checks() {
        let phone = PhoneNumber::from_stored("abc").expect("stored phone");
        assert_eq!(phone.as_str(), "abc");
    }

    #[rstest]
    fn draft_reports_name_before_phone() {
        let err = ContactDraft::try_from_parts("", "abc").expect_err("invalid draft");
        assert_eq!(err, ContactValidationError::EmptyName);
    }

    #[rstest]
    fn apply_replaces_name_and_phone_only() {
        let contact = Contact::new(
            ContactId::new(3),
            ContactName::new("Old").expect("name"),
            PhoneNumber::new("+48123456789").expect("phone"),
            Some(OwnerId::new(9)),
        );
        let draft = ContactDraft::try_from_parts("New", "888-999-000").expect("draft");

        let updated = contact.apply(draft);

        assert_eq!(updated.id(), ContactId::new(3));
        assert_eq!(updated.name().as_str(), "New");
        assert_eq!(updated.phone().as_str(), "888-999-000");
        assert_eq!(updated.owner_id(), Some(OwnerId::new(9)));
    }
}
