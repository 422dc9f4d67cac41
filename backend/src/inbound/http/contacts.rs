//! Contacts API handlers.
//!
//! ```text
//! GET    /api/contacts
//! GET    /api/contacts/{id}
//! POST   /api/contacts        {"name":"Anna Nowak","phone":"+48123456789"}
//! PUT    /api/contacts/{id}   {"name":"Anna Nowak","phone":"+48123456789"}
//! DELETE /api/contacts/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Contact, ContactDraft, ContactName, Error, PhoneNumber};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    NAME_FIELD, PHONE_FIELD, map_contact_validation_error, missing_field_error, parse_contact_id,
};

/// Contact as returned by the API. `owner_id` is omitted when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContactResponse {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    pub id: i32,
    /// Display name.
    #[schema(example = "Anna Nowak")]
    pub name: String,
    /// Phone number as supplied on write.
    #[schema(example = "+48123456789")]
    pub phone: String,
    /// Owning account, when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<i32>,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id().get(),
            name: contact.name().as_str().to_owned(),
            phone: contact.phone().as_str().to_owned(),
            owner_id: contact.owner_id().map(|owner| owner.get()),
        }
    }
}

/// Body for create and update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ContactRequest {
    /// Display name; must not be blank.
    #[schema(required = true, value_type = String, example = "testName")]
    pub name: Option<String>,
    /// Phone number; parsed for region PL unless prefixed with `+`.
    #[schema(required = true, value_type = String, example = "+48 123 123 123")]
    pub phone: Option<String>,
}

impl TryFrom<ContactRequest> for ContactDraft {
    type Error = Error;

    fn try_from(value: ContactRequest) -> Result<Self, Self::Error> {
        let name = value.name.ok_or_else(|| missing_field_error(NAME_FIELD))?;
        let phone = value.phone.ok_or_else(|| missing_field_error(PHONE_FIELD))?;
        let name = ContactName::new(name).map_err(map_contact_validation_error)?;
        let phone = PhoneNumber::new(phone).map_err(map_contact_validation_error)?;
        Ok(ContactDraft::new(name, phone))
    }
}

/// List every contact.
#[utoipa::path(
    get,
    path = "/api/contacts",
    responses(
        (status = 200, description = "Contacts, possibly empty", body = [ContactResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["contacts"],
    operation_id = "listContacts"
)]
#[get("")]
pub async fn list_contacts(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<ContactResponse>>> {
    let contacts = state.contacts.list_contacts().await?;
    Ok(web::Json(
        contacts.into_iter().map(ContactResponse::from).collect(),
    ))
}

/// Fetch one contact.
#[utoipa::path(
    get,
    path = "/api/contacts/{id}",
    params(("id" = String, Path, description = "Contact identifier (base-10 integer)")),
    responses(
        (status = 200, description = "Contact", body = ContactResponse),
        (status = 400, description = "Invalid contact ID", body = ErrorSchema),
        (status = 404, description = "Contact not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["contacts"],
    operation_id = "getContact"
)]
#[get("/{id}")]
pub async fn get_contact(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ContactResponse>> {
    let id = parse_contact_id(&path)?;
    let contact = state.contacts.get_contact(id).await?;
    Ok(web::Json(contact.into()))
}

/// Create a contact.
#[utoipa::path(
    post,
    path = "/api/contacts",
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Created", body = ContactResponse),
        (status = 400, description = "Malformed JSON or invalid fields", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["contacts"],
    operation_id = "createContact"
)]
#[post("")]
pub async fn create_contact(
    state: web::Data<HttpState>,
    payload: web::Json<ContactRequest>,
) -> ApiResult<HttpResponse> {
    let draft = ContactDraft::try_from(payload.into_inner())?;
    let contact = state.contacts_command.create_contact(draft).await?;
    Ok(HttpResponse::Created().json(ContactResponse::from(contact)))
}

/// Replace a contact's name and phone.
///
/// Updating an unknown id fails with 500.
#[utoipa::path(
    put,
    path = "/api/contacts/{id}",
    params(("id" = String, Path, description = "Contact identifier (base-10 integer)")),
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Updated", body = ContactResponse),
        (status = 400, description = "Invalid id or body", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["contacts"],
    operation_id = "updateContact"
)]
#[put("/{id}")]
pub async fn update_contact(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<ContactRequest>,
) -> ApiResult<web::Json<ContactResponse>> {
    let id = parse_contact_id(&path)?;
    let draft = ContactDraft::try_from(payload.into_inner())?;
    let contact = state.contacts_command.update_contact(id, draft).await?;
    Ok(web::Json(contact.into()))
}

/// Delete a contact.
#[utoipa::path(
    delete,
    path = "/api/contacts/{id}",
    params(("id" = String, Path, description = "Contact identifier (base-10 integer)")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Invalid contact ID", body = ErrorSchema),
        (status = 404, description = "Contact not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["contacts"],
    operation_id = "deleteContact"
)]
#[delete("/{id}")]
pub async fn delete_contact(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_contact_id(&path)?;
    state.contacts_command.delete_contact(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "contacts_tests.rs"]
mod tests;
