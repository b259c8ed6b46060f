// src/presentation/http/controllers/materials.rs
use crate::application::{
    commands::materials::SubmitMaterialCommand, dto::MaterialDto, forms::MaterialForm,
};
use crate::presentation::http::{
    controllers::{IdParams, MessageResponse},
    error::{HttpError, HttpResult, IntoHttpResult},
    extractors::AdminSession,
    multipart::MultipartForm,
    state::HttpState,
};
use axum::{
    Extension, Json,
    extract::{Multipart, Query},
    http::StatusCode,
};
use serde::Serialize;
use tracing::debug;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct MaterialCreatedResponse {
    pub message: String,
    pub data: MaterialDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MaterialListResponse {
    pub materiales: Vec<MaterialDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CvUploadResponse {
    pub message: String,
    pub url: String,
}

#[utoipa::path(
    post,
    path = "/api/envia-material",
    request_body(content_type = "multipart/form-data", description = "Applicant fields (camelCase), optional cvPdf file and up to 10 imagenes files"),
    responses(
        (status = 201, description = "Application stored.", body = MaterialCreatedResponse),
        (status = 400, description = "Invalid form or files.", body = crate::presentation::http::error::ErrorResponse),
        (status = 429, description = "Too many requests.")
    ),
    security(()),
    tag = "Material"
)]
pub async fn submit_material(
    Extension(state): Extension<HttpState>,
    multipart: Multipart,
) -> HttpResult<(StatusCode, Json<MaterialCreatedResponse>)> {
    let mut form = MultipartForm::read(multipart).await?;

    let mut fields = MaterialForm::default();
    for (name, value) in form.texts() {
        if !fields.set_field(name, value) {
            debug!(field = name, "ignoring unknown material field");
        }
    }

    let command = SubmitMaterialCommand {
        form: fields,
        cv: form.take_file("cvPdf"),
        images: form.take_files("imagenes"),
    };

    let data = state
        .services
        .material_commands
        .submit_material(command)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(MaterialCreatedResponse {
            message: "Formulario enviado exitosamente".into(),
            data,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/upload-cv",
    request_body(content_type = "multipart/form-data", description = "PDF in the file field"),
    responses(
        (status = 200, description = "CV stored.", body = CvUploadResponse),
        (status = 400, description = "Missing or invalid file.", body = crate::presentation::http::error::ErrorResponse),
        (status = 429, description = "Too many requests.")
    ),
    security(()),
    tag = "Material"
)]
pub async fn upload_cv(
    Extension(state): Extension<HttpState>,
    multipart: Multipart,
) -> HttpResult<Json<CvUploadResponse>> {
    let mut form = MultipartForm::read(multipart).await?;
    let file = form
        .take_file("file")
        .ok_or_else(|| HttpError::bad_request("No se proporcionó ningún archivo"))?;

    let url = state
        .services
        .material_commands
        .upload_cv(file)
        .await
        .into_http()?;

    Ok(Json(CvUploadResponse {
        message: "Archivo subido exitosamente".into(),
        url,
    }))
}

#[utoipa::path(
    get,
    path = "/api/material",
    responses(
        (status = 200, description = "Applications, newest first.", body = MaterialListResponse),
        (status = 401, description = "No admin session.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Material"
)]
pub async fn list_materials(
    Extension(state): Extension<HttpState>,
    AdminSession(_): AdminSession,
) -> HttpResult<Json<MaterialListResponse>> {
    let materiales = state
        .services
        .material_queries
        .list_materials()
        .await
        .into_http()?;
    Ok(Json(MaterialListResponse { materiales }))
}

#[utoipa::path(
    delete,
    path = "/api/material",
    params(IdParams),
    responses(
        (status = 200, description = "Application deleted.", body = MessageResponse),
        (status = 400, description = "Missing or malformed id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "No admin session.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such application.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Material"
)]
pub async fn delete_material(
    Extension(state): Extension<HttpState>,
    AdminSession(_): AdminSession,
    Query(params): Query<IdParams>,
) -> HttpResult<Json<MessageResponse>> {
    let id = params.uuid()?;
    state
        .services
        .material_commands
        .delete_material(id)
        .await
        .into_http()?;
    Ok(Json(MessageResponse::new("Material eliminado exitosamente")))
}
