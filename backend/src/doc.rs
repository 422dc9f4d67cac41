//! OpenAPI document for the contacts API.
//!
//! Registers every handler under `inbound::http` plus the schema wrappers for
//! domain types ([`ErrorSchema`], [`ErrorCodeSchema`]) so the domain stays
//! free of `utoipa`. Served by Swagger UI in debug builds and printed by the
//! `openapi-dump` binary.

use crate::inbound::http::avatars::{AvatarUploadForm, AvatarUploadResponse};
use crate::inbound::http::contacts::{ContactRequest, ContactResponse};
use crate::inbound::http::health::{AvatarBackend, ContactsBackend, HealthReport};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Contacts API",
        description = "Contact records with phone validation and avatar images."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::contacts::list_contacts,
        crate::inbound::http::contacts::get_contact,
        crate::inbound::http::contacts::create_contact,
        crate::inbound::http::contacts::update_contact,
        crate::inbound::http::contacts::delete_contact,
        crate::inbound::http::avatars::upload_avatar,
        crate::inbound::http::avatars::download_avatar,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ContactResponse,
        ContactRequest,
        AvatarUploadResponse,
        AvatarUploadForm,
        HealthReport,
        ContactsBackend,
        AvatarBackend,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "contacts", description = "Contact CRUD"),
        (name = "avatars", description = "Contact avatar images"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
