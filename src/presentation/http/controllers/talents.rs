// src/presentation/http/controllers/talents.rs
use crate::application::{
    commands::talents::{
        CreateTalentCommand, DeleteTalentCommand, ReorderTalentsCommand, UpdateTalentCommand,
    },
    dto::{TalentDto, TalentStatsDto},
    forms::{
        TalentForm, blank_to_none,
        talent::{parse_blocks, parse_index},
    },
    queries::talents::{GetTalentQuery, ListTalentsQuery},
};
use crate::domain::{ordering::ReorderItem, talent::TalentKind};
use crate::presentation::http::{
    controllers::MessageResponse,
    error::{HttpError, HttpResult, IntoHttpResult},
    extractors::AdminSession,
    multipart::MultipartForm,
    state::HttpState,
};
use axum::{
    Extension, Json,
    extract::{Multipart, Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListTalentsParams {
    pub tipo: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TalentListResponse {
    pub talentos: Vec<TalentDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TalentMutationResponse {
    pub message: String,
    pub data: TalentDto,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReorderTalentsRequest {
    pub tipo: String,
    pub items: Vec<ReorderTalentItem>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReorderTalentItem {
    pub id: i64,
    pub orden: i32,
}

/// Category named in the URL path. Unknown categories do not exist.
fn path_kind(raw: &str) -> HttpResult<TalentKind> {
    raw.parse()
        .map_err(|_| HttpError::not_found(format!("talent category '{raw}' not found")))
}

/// Category named in a query string or body. Unknown values are bad input.
fn input_kind(raw: &str) -> HttpResult<TalentKind> {
    raw.trim()
        .parse::<TalentKind>()
        .map_err(|err| HttpError::bad_request(err.to_string()))
}

fn path_id(raw: &str) -> HttpResult<i64> {
    raw.parse()
        .map_err(|_| HttpError::not_found(format!("talent {raw} not found")))
}

fn talent_form(form: &MultipartForm) -> TalentForm {
    TalentForm {
        nombre: form.text("nombre").unwrap_or_default().trim().to_owned(),
        video_url: blank_to_none(form.text("videoUrl").map(str::to_owned)),
        bloques: parse_blocks(form.text("bloques")),
        imagen_principal: parse_index(form.text("imagenPrincipal")),
    }
}

async fn create(
    state: &HttpState,
    kind: TalentKind,
    mut form: MultipartForm,
) -> HttpResult<(StatusCode, Json<TalentMutationResponse>)> {
    let command = CreateTalentCommand {
        kind,
        form: talent_form(&form),
        imagen_portada: form.text("imagenPortada").map(str::to_owned),
        images: form.take_files("imagenes"),
    };

    let data = state
        .services
        .talent_commands
        .create_talent(command)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(TalentMutationResponse {
            message: "Talento agregado exitosamente".into(),
            data,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/talentos/list",
    params(ListTalentsParams),
    responses(
        (status = 200, description = "Talents of one category by position.", body = TalentListResponse),
        (status = 400, description = "Unknown category.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Talentos"
)]
pub async fn list_talents(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListTalentsParams>,
) -> HttpResult<Json<TalentListResponse>> {
    let kind = input_kind(&params.tipo)?;
    let talentos = state
        .services
        .talent_queries
        .list_talents(ListTalentsQuery { kind })
        .await
        .into_http()?;
    Ok(Json(TalentListResponse { talentos }))
}

#[utoipa::path(
    get,
    path = "/api/talentos/{tipo}/{key}",
    params(
        ("tipo" = String, Path, description = "Talent category"),
        ("key" = String, Path, description = "Slug, or numeric id as fallback")
    ),
    responses(
        (status = 200, description = "Talent profile.", body = TalentDto),
        (status = 404, description = "No such talent.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Talentos"
)]
pub async fn get_talent(
    Extension(state): Extension<HttpState>,
    Path((tipo, key)): Path<(String, String)>,
) -> HttpResult<Json<TalentDto>> {
    let kind = path_kind(&tipo)?;
    state
        .services
        .talent_queries
        .get_talent(GetTalentQuery {
            kind,
            slug_or_id: key,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/talentos/{tipo}",
    params(("tipo" = String, Path, description = "Talent category")),
    request_body(content_type = "multipart/form-data", description = "nombre, videoUrl, bloques (JSON), imagenPrincipal, imagenPortada and repeated imagenes files"),
    responses(
        (status = 201, description = "Talent created.", body = TalentMutationResponse),
        (status = 400, description = "Invalid form or files.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "No admin session.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Talentos"
)]
pub async fn create_talent(
    Extension(state): Extension<HttpState>,
    AdminSession(_): AdminSession,
    Path(tipo): Path<String>,
    multipart: Multipart,
) -> HttpResult<(StatusCode, Json<TalentMutationResponse>)> {
    let kind = path_kind(&tipo)?;
    let form = MultipartForm::read(multipart).await?;
    create(&state, kind, form).await
}

/// Create form that names the category in a `tipo` field.
#[utoipa::path(
    post,
    path = "/api/alta-talento",
    request_body(content_type = "multipart/form-data", description = "Same fields as the category create, plus tipo"),
    responses(
        (status = 201, description = "Talent created.", body = TalentMutationResponse),
        (status = 400, description = "Invalid form, files or category.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "No admin session.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Talentos"
)]
pub async fn create_talent_from_form(
    Extension(state): Extension<HttpState>,
    AdminSession(_): AdminSession,
    multipart: Multipart,
) -> HttpResult<(StatusCode, Json<TalentMutationResponse>)> {
    let form = MultipartForm::read(multipart).await?;
    let kind = input_kind(form.text("tipo").unwrap_or_default())?;
    create(&state, kind, form).await
}

#[utoipa::path(
    put,
    path = "/api/talentos/{tipo}/{key}",
    params(
        ("tipo" = String, Path, description = "Talent category"),
        ("key" = String, Path, description = "Numeric talent id")
    ),
    request_body(content_type = "multipart/form-data", description = "Create fields plus existingImages (JSON array of kept URLs)"),
    responses(
        (status = 200, description = "Talent updated.", body = TalentMutationResponse),
        (status = 400, description = "Invalid form or files.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "No admin session.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such talent.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Talentos"
)]
pub async fn update_talent(
    Extension(state): Extension<HttpState>,
    AdminSession(_): AdminSession,
    Path((tipo, key)): Path<(String, String)>,
    multipart: Multipart,
) -> HttpResult<Json<TalentMutationResponse>> {
    let kind = path_kind(&tipo)?;
    let id = path_id(&key)?;
    let mut form = MultipartForm::read(multipart).await?;

    let command = UpdateTalentCommand {
        kind,
        id,
        form: talent_form(&form),
        existing_images: form.text("existingImages").map(str::to_owned),
        imagen_portada: form.text("imagenPortada").map(str::to_owned),
        images: form.take_files("imagenes"),
    };

    let data = state
        .services
        .talent_commands
        .update_talent(command)
        .await
        .into_http()?;

    Ok(Json(TalentMutationResponse {
        message: "Talento actualizado exitosamente".into(),
        data,
    }))
}

#[utoipa::path(
    delete,
    path = "/api/talentos/{tipo}/{key}",
    params(
        ("tipo" = String, Path, description = "Talent category"),
        ("key" = String, Path, description = "Numeric talent id")
    ),
    responses(
        (status = 200, description = "Talent deleted.", body = MessageResponse),
        (status = 401, description = "No admin session.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such talent.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Talentos"
)]
pub async fn delete_talent(
    Extension(state): Extension<HttpState>,
    AdminSession(_): AdminSession,
    Path((tipo, key)): Path<(String, String)>,
) -> HttpResult<Json<MessageResponse>> {
    let kind = path_kind(&tipo)?;
    let id = path_id(&key)?;
    state
        .services
        .talent_commands
        .delete_talent(DeleteTalentCommand { kind, id })
        .await
        .into_http()?;
    Ok(Json(MessageResponse::new("Talento eliminado exitosamente")))
}

#[utoipa::path(
    put,
    path = "/api/talentos/reorder",
    request_body = ReorderTalentsRequest,
    responses(
        (status = 200, description = "Positions written.", body = MessageResponse),
        (status = 400, description = "Unknown category or empty item list.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "No admin session.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "A write failed; earlier writes are kept.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Talentos"
)]
pub async fn reorder_talents(
    Extension(state): Extension<HttpState>,
    AdminSession(_): AdminSession,
    Json(payload): Json<ReorderTalentsRequest>,
) -> HttpResult<Json<MessageResponse>> {
    let kind = input_kind(&payload.tipo)?;
    let items = payload
        .items
        .into_iter()
        .map(|item| ReorderItem::new(item.id, item.orden))
        .collect();

    state
        .services
        .talent_commands
        .reorder_talents(ReorderTalentsCommand { kind, items })
        .await
        .into_http()?;
    Ok(Json(MessageResponse::new("Orden actualizado exitosamente")))
}

#[utoipa::path(
    get,
    path = "/api/talentos/stats",
    responses(
        (status = 200, description = "Row counts for the dashboard.", body = TalentStatsDto),
        (status = 401, description = "No admin session.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Talentos"
)]
pub async fn talent_stats(
    Extension(state): Extension<HttpState>,
    AdminSession(_): AdminSession,
) -> HttpResult<Json<TalentStatsDto>> {
    state
        .services
        .stats_queries
        .dashboard_stats()
        .await
        .into_http()
        .map(Json)
}
