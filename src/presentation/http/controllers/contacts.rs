// src/presentation/http/controllers/contacts.rs
use crate::application::{dto::ContactDto, forms::ContactForm};
use crate::presentation::http::{
    controllers::{IdParams, MessageResponse},
    error::{HttpResult, IntoHttpResult},
    extractors::AdminSession,
    state::HttpState,
};
use axum::{
    Extension, Json,
    extract::Query,
    http::StatusCode,
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactCreatedResponse {
    pub message: String,
    pub data: ContactDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactListResponse {
    pub contactos: Vec<ContactDto>,
}

/// The admin inbox lists the same rows under a second name.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProposalListResponse {
    pub propuestas: Vec<ContactDto>,
}

#[utoipa::path(
    post,
    path = "/api/contacto",
    request_body = ContactForm,
    responses(
        (status = 201, description = "Lead stored.", body = ContactCreatedResponse),
        (status = 400, description = "Invalid form.", body = crate::presentation::http::error::ErrorResponse),
        (status = 429, description = "Too many requests.")
    ),
    security(()),
    tag = "Contacto"
)]
pub async fn submit_contact(
    Extension(state): Extension<HttpState>,
    Json(form): Json<ContactForm>,
) -> HttpResult<(StatusCode, Json<ContactCreatedResponse>)> {
    let data = state
        .services
        .contact_commands
        .submit_contact(form)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(ContactCreatedResponse {
            message: "Mensaje enviado exitosamente".into(),
            data,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/contactos",
    responses(
        (status = 200, description = "Leads, newest first.", body = ContactListResponse),
        (status = 401, description = "No admin session.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Contacto"
)]
pub async fn list_contacts(
    Extension(state): Extension<HttpState>,
    AdminSession(_): AdminSession,
) -> HttpResult<Json<ContactListResponse>> {
    let contactos = state
        .services
        .contact_queries
        .list_contacts()
        .await
        .into_http()?;
    Ok(Json(ContactListResponse { contactos }))
}

#[utoipa::path(
    delete,
    path = "/api/contactos",
    params(IdParams),
    responses(
        (status = 200, description = "Lead deleted.", body = MessageResponse),
        (status = 400, description = "Missing or malformed id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "No admin session.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such lead.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Contacto"
)]
pub async fn delete_contact(
    Extension(state): Extension<HttpState>,
    AdminSession(_): AdminSession,
    Query(params): Query<IdParams>,
) -> HttpResult<Json<MessageResponse>> {
    let id = params.uuid()?;
    state
        .services
        .contact_commands
        .delete_contact(id)
        .await
        .into_http()?;
    Ok(Json(MessageResponse::new("Contacto eliminado exitosamente")))
}

#[utoipa::path(
    get,
    path = "/api/propuestas",
    responses(
        (status = 200, description = "Leads, newest first.", body = ProposalListResponse),
        (status = 401, description = "No admin session.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Contacto"
)]
pub async fn list_proposals(
    Extension(state): Extension<HttpState>,
    AdminSession(_): AdminSession,
) -> HttpResult<Json<ProposalListResponse>> {
    let propuestas = state
        .services
        .contact_queries
        .list_contacts()
        .await
        .into_http()?;
    Ok(Json(ProposalListResponse { propuestas }))
}

#[utoipa::path(
    delete,
    path = "/api/propuestas",
    params(IdParams),
    responses(
        (status = 200, description = "Lead deleted.", body = MessageResponse),
        (status = 400, description = "Missing or malformed id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "No admin session.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such lead.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Contacto"
)]
pub async fn delete_proposal(
    Extension(state): Extension<HttpState>,
    AdminSession(_): AdminSession,
    Query(params): Query<IdParams>,
) -> HttpResult<Json<MessageResponse>> {
    let id = params.uuid()?;
    state
        .services
        .contact_commands
        .delete_contact(id)
        .await
        .into_http()?;
    Ok(Json(MessageResponse::new("Propuesta eliminada exitosamente")))
}
