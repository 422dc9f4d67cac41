//! Avatar upload and download handlers.
//!
//! ```text
//! PUT /api/contacts/{id}/avatar   multipart/form-data, file field `avatar`
//! GET /api/contacts/{id}/avatar
//! ```
//!
//! Uploads are buffered up to [`MAX_AVATAR_BYTES`] and stored under the
//! contact's decimal id. Downloads use the raw path segment as the object key
//! and stream the object straight from the store.

use actix_multipart::{Field, Multipart};
use actix_web::body::SizedStream;
use actix_web::http::header;
use actix_web::{HttpResponse, get, put, web};
use bytes::{Bytes, BytesMut};
use futures_util::{Stream, TryStreamExt};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use utoipa::ToSchema;

use crate::domain::ports::{AvatarBody, AvatarStoreError, AvatarStream};
use crate::domain::{
    AvatarKey, AvatarUpload, AvatarValidationError, Error, MAX_AVATAR_BYTES,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    map_avatar_validation_error, missing_avatar_error, parse_contact_id,
};

const AVATAR_FORM_FIELD: &str = "avatar";
const AVATAR_UPLOADED_MESSAGE: &str = "Avatar uploaded";
const READ_FAILED_MESSAGE: &str = "Failed to read avatar file";

/// Acknowledgement returned after a successful upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AvatarUploadResponse {
    #[schema(example = "Avatar uploaded")]
    pub message: String,
}

/// Multipart form accepted by the upload endpoint.
#[derive(ToSchema)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct AvatarUploadForm {
    /// Image file, at most 10 MiB.
    #[schema(value_type = String, format = Binary)]
    avatar: Vec<u8>,
}

struct AvatarFile {
    bytes: Bytes,
    content_type: Option<String>,
}

fn read_failed(err: impl std::fmt::Display) -> Error {
    error!(error = %err, "reading avatar upload failed");
    Error::internal(READ_FAILED_MESSAGE)
}

/// Find the `avatar` field, skipping any others.
async fn read_avatar_file(mut payload: Multipart) -> Result<AvatarFile, Error> {
    loop {
        let field = match payload.try_next().await {
            Ok(Some(field)) => field,
            Ok(None) => return Err(missing_avatar_error()),
            Err(err) => {
                debug!(error = %err, "multipart body rejected");
                return Err(missing_avatar_error());
            }
        };
        if field.name() == Some(AVATAR_FORM_FIELD) {
            return read_field(field).await;
        }
        drain(field).await?;
    }
}

async fn drain(mut field: Field) -> Result<(), Error> {
    while field
        .try_next()
        .await
        .map_err(|err| {
            debug!(error = %err, "multipart field rejected");
            missing_avatar_error()
        })?
        .is_some()
    {}
    Ok(())
}

async fn read_field(mut field: Field) -> Result<AvatarFile, Error> {
    let content_type = field.content_type().map(ToString::to_string);
    let mut buffer = BytesMut::new();
    while let Some(chunk) = field.try_next().await.map_err(read_failed)? {
        let size = buffer.len() + chunk.len();
        if size > MAX_AVATAR_BYTES {
            return Err(map_avatar_validation_error(
                AvatarValidationError::TooLarge { size },
            ));
        }
        buffer.extend_from_slice(&chunk);
    }
    Ok(AvatarFile {
        bytes: buffer.freeze(),
        content_type,
    })
}

/// Upload or replace a contact's avatar.
#[utoipa::path(
    put,
    path = "/api/contacts/{id}/avatar",
    params(("id" = String, Path, description = "Contact identifier (base-10 integer)")),
    request_body(content = AvatarUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Avatar stored", body = AvatarUploadResponse),
        (status = 400, description = "Bad id or missing, empty or oversized file", body = ErrorSchema),
        (status = 500, description = "Reading or storing the file failed", body = ErrorSchema),
        (status = 503, description = "Object storage not configured", body = ErrorSchema)
    ),
    tags = ["avatars"],
    operation_id = "uploadAvatar"
)]
#[put("/{id}/avatar")]
pub async fn upload_avatar(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: Multipart,
) -> ApiResult<web::Json<AvatarUploadResponse>> {
    let id = parse_contact_id(&path)?;
    let file = read_avatar_file(payload).await?;
    let upload = AvatarUpload::new(AvatarKey::for_contact(id), file.bytes, file.content_type)
        .map_err(map_avatar_validation_error)?;
    state.avatars_command.upload_avatar(upload).await?;
    Ok(web::Json(AvatarUploadResponse {
        message: AVATAR_UPLOADED_MESSAGE.to_owned(),
    }))
}

fn log_stream_errors(
    key: AvatarKey,
    body: AvatarBody,
) -> impl Stream<Item = Result<Bytes, AvatarStoreError>> + 'static {
    body.inspect_err(move |err| {
        error!(%key, error = %err, "avatar stream interrupted");
    })
}

/// Stream a contact's avatar.
#[utoipa::path(
    get,
    path = "/api/contacts/{id}/avatar",
    params(("id" = String, Path, description = "Object key; contact ids are stored in decimal")),
    responses(
        (status = 200, description = "Avatar bytes", content_type = "application/octet-stream"),
        (status = 400, description = "Blank object key", body = ErrorSchema),
        (status = 404, description = "Avatar not found", body = ErrorSchema),
        (status = 500, description = "Object storage failure", body = ErrorSchema),
        (status = 503, description = "Object storage not configured", body = ErrorSchema)
    ),
    tags = ["avatars"],
    operation_id = "downloadAvatar"
)]
#[get("/{id}/avatar")]
pub async fn download_avatar(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let key = AvatarKey::new(path.into_inner()).map_err(map_avatar_validation_error)?;
    let AvatarStream {
        content_type,
        content_length,
        body,
    } = state.avatars.open_avatar(&key).await?;

    let body = log_stream_errors(key, body);
    let mut response = HttpResponse::Ok();
    response
        .content_type(content_type)
        .insert_header((header::CONTENT_DISPOSITION, "inline"));
    Ok(match content_length {
        Some(length) => response.body(SizedStream::new(length, body)),
        None => response.streaming(body),
    })
}

#[cfg(test)]
#[path = "avatars_tests.rs"]
mod tests;
