// src/presentation/http/controllers/slider.rs
use crate::application::{
    commands::slider::{AddSliderImageCommand, UploadSliderImageCommand},
    dto::SliderImageDto,
    forms::blank_to_none,
};
use crate::presentation::http::{
    controllers::{IdParams, MessageResponse},
    error::{HttpResult, IntoHttpResult},
    extractors::AdminSession,
    multipart::MultipartForm,
    state::HttpState,
};
use axum::{
    Extension, Json,
    extract::{Multipart, Query},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema)]
pub struct SliderListResponse {
    pub imagenes: Vec<SliderImageDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SliderImageResponse {
    pub message: String,
    pub imagen: SliderImageDto,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddSliderImageRequest {
    pub imagen_url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReorderSliderRequest {
    pub ids: Vec<Uuid>,
}

fn created(imagen: SliderImageDto) -> (StatusCode, Json<SliderImageResponse>) {
    (
        StatusCode::CREATED,
        Json(SliderImageResponse {
            message: "Imagen del slider creada exitosamente".into(),
            imagen,
        }),
    )
}

#[utoipa::path(
    get,
    path = "/api/slider",
    responses(
        (status = 200, description = "Slider images by position.", body = SliderListResponse)
    ),
    security(()),
    tag = "Slider"
)]
pub async fn list_images(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<SliderListResponse>> {
    let imagenes = state
        .services
        .slider_queries
        .list_images()
        .await
        .into_http()?;
    Ok(Json(SliderListResponse { imagenes }))
}

#[utoipa::path(
    post,
    path = "/api/slider",
    request_body = AddSliderImageRequest,
    responses(
        (status = 201, description = "Image appended.", body = SliderImageResponse),
        (status = 400, description = "Missing image URL.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "No admin session.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Slider"
)]
pub async fn add_image(
    Extension(state): Extension<HttpState>,
    AdminSession(_): AdminSession,
    Json(payload): Json<AddSliderImageRequest>,
) -> HttpResult<(StatusCode, Json<SliderImageResponse>)> {
    let imagen = state
        .services
        .slider_commands
        .add_image(AddSliderImageCommand {
            imagen_url: payload.imagen_url,
            alt_text: payload.alt_text,
        })
        .await
        .into_http()?;
    Ok(created(imagen))
}

#[utoipa::path(
    post,
    path = "/api/slider/upload",
    request_body(content_type = "multipart/form-data", description = "imagen file and optional alt_text"),
    responses(
        (status = 201, description = "Image stored and appended.", body = SliderImageResponse),
        (status = 400, description = "Missing or invalid image.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "No admin session.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Slider"
)]
pub async fn upload_image(
    Extension(state): Extension<HttpState>,
    AdminSession(_): AdminSession,
    multipart: Multipart,
) -> HttpResult<(StatusCode, Json<SliderImageResponse>)> {
    let mut form = MultipartForm::read(multipart).await?;
    let command = UploadSliderImageCommand {
        alt_text: blank_to_none(form.text("alt_text").map(str::to_owned)),
        file: form.take_file("imagen"),
    };

    let imagen = state
        .services
        .slider_commands
        .upload_image(command)
        .await
        .into_http()?;
    Ok(created(imagen))
}

#[utoipa::path(
    delete,
    path = "/api/slider",
    params(IdParams),
    responses(
        (status = 200, description = "Image removed from the slider.", body = MessageResponse),
        (status = 400, description = "Missing or malformed id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "No admin session.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such image.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Slider"
)]
pub async fn delete_image(
    Extension(state): Extension<HttpState>,
    AdminSession(_): AdminSession,
    Query(params): Query<IdParams>,
) -> HttpResult<Json<MessageResponse>> {
    let id = params.uuid()?;
    state
        .services
        .slider_commands
        .delete_image(id)
        .await
        .into_http()?;
    Ok(Json(MessageResponse::new(
        "Imagen del slider eliminada exitosamente",
    )))
}

#[utoipa::path(
    put,
    path = "/api/slider/reorder",
    request_body = ReorderSliderRequest,
    responses(
        (status = 200, description = "Positions written.", body = MessageResponse),
        (status = 400, description = "Empty id list.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "No admin session.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "A write failed; earlier writes are kept.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Slider"
)]
pub async fn reorder_images(
    Extension(state): Extension<HttpState>,
    AdminSession(_): AdminSession,
    Json(payload): Json<ReorderSliderRequest>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .slider_commands
        .reorder_images(payload.ids)
        .await
        .into_http()?;
    Ok(Json(MessageResponse::new(
        "Orden de imágenes actualizado exitosamente",
    )))
}
