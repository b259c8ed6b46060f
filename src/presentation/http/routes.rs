// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{auth, contacts, materials, slider, talents},
    middleware::rate_limit::rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, true)
}

pub fn build_router_with_rate_limiter(state: HttpState, rate_limited: bool) -> Router {
    let cors = cors_layer(&state.settings.allowed_origins);
    let body_limit = DefaultBodyLimit::max(state.settings.max_request_bytes);

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(public_form_routes(rate_limited))
        .merge(talent_routes())
        .merge(inbox_routes())
        .merge(slider_routes())
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .layer(body_limit)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

/// Unauthenticated writes. These are the routes worth throttling.
fn public_form_routes(rate_limited: bool) -> Router {
    let routes = Router::new()
        .route("/api/contacto", post(contacts::submit_contact))
        .route("/api/envia-material", post(materials::submit_material))
        .route("/api/upload-cv", post(materials::upload_cv))
        .route("/api/auth/login", post(auth::login));

    match rate_limited.then(rate_limit_layer).flatten() {
        Some(layer) => routes.layer(layer),
        None => routes,
    }
}

fn talent_routes() -> Router {
    Router::new()
        .route("/api/talentos/list", get(talents::list_talents))
        .route("/api/talentos/reorder", put(talents::reorder_talents))
        .route("/api/talentos/stats", get(talents::talent_stats))
        .route("/api/talentos/{tipo}", post(talents::create_talent))
        .route(
            "/api/talentos/{tipo}/{key}",
            get(talents::get_talent)
                .put(talents::update_talent)
                .delete(talents::delete_talent),
        )
        .route("/api/alta-talento", post(talents::create_talent_from_form))
}

fn inbox_routes() -> Router {
    Router::new()
        .route(
            "/api/contactos",
            get(contacts::list_contacts).delete(contacts::delete_contact),
        )
        .route(
            "/api/propuestas",
            get(contacts::list_proposals).delete(contacts::delete_proposal),
        )
        .route(
            "/api/material",
            get(materials::list_materials).delete(materials::delete_material),
        )
}

fn slider_routes() -> Router {
    Router::new()
        .route(
            "/api/slider",
            get(slider::list_images)
                .post(slider::add_image)
                .delete(slider::delete_image),
        )
        .route("/api/slider/upload", post(slider::upload_image))
        .route("/api/slider/reorder", put(slider::reorder_images))
}

/// Session cookies need credentialed requests, so origins are listed
/// explicitly. Unparsable entries are skipped.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    security(()),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
