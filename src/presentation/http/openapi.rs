// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{ApiKey, ApiKeyValue, Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use super::extractors::ACCESS_TOKEN_COOKIE;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::talents::list_talents,
        crate::presentation::http::controllers::talents::get_talent,
        crate::presentation::http::controllers::talents::create_talent,
        crate::presentation::http::controllers::talents::create_talent_from_form,
        crate::presentation::http::controllers::talents::update_talent,
        crate::presentation::http::controllers::talents::delete_talent,
        crate::presentation::http::controllers::talents::reorder_talents,
        crate::presentation::http::controllers::talents::talent_stats,
        crate::presentation::http::controllers::contacts::submit_contact,
        crate::presentation::http::controllers::contacts::list_contacts,
        crate::presentation::http::controllers::contacts::delete_contact,
        crate::presentation::http::controllers::contacts::list_proposals,
        crate::presentation::http::controllers::contacts::delete_proposal,
        crate::presentation::http::controllers::materials::submit_material,
        crate::presentation::http::controllers::materials::upload_cv,
        crate::presentation::http::controllers::materials::list_materials,
        crate::presentation::http::controllers::materials::delete_material,
        crate::presentation::http::controllers::slider::list_images,
        crate::presentation::http::controllers::slider::add_image,
        crate::presentation::http::controllers::slider::upload_image,
        crate::presentation::http::controllers::slider::delete_image,
        crate::presentation::http::controllers::slider::reorder_images,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::logout,
        crate::presentation::http::controllers::auth::me,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::MessageResponse,
            crate::presentation::http::controllers::talents::TalentListResponse,
            crate::presentation::http::controllers::talents::TalentMutationResponse,
            crate::presentation::http::controllers::talents::ReorderTalentsRequest,
            crate::presentation::http::controllers::talents::ReorderTalentItem,
            crate::presentation::http::controllers::contacts::ContactCreatedResponse,
            crate::presentation::http::controllers::contacts::ContactListResponse,
            crate::presentation::http::controllers::contacts::ProposalListResponse,
            crate::presentation::http::controllers::materials::MaterialCreatedResponse,
            crate::presentation::http::controllers::materials::MaterialListResponse,
            crate::presentation::http::controllers::materials::CvUploadResponse,
            crate::presentation::http::controllers::slider::SliderListResponse,
            crate::presentation::http::controllers::slider::SliderImageResponse,
            crate::presentation::http::controllers::slider::AddSliderImageRequest,
            crate::presentation::http::controllers::slider::ReorderSliderRequest,
            crate::presentation::http::controllers::auth::LoginResponse,
            crate::presentation::http::controllers::auth::CurrentUserResponse,
            crate::application::forms::LoginForm,
            crate::application::forms::ContactForm,
            crate::application::dto::TalentDto,
            crate::application::dto::ContactDto,
            crate::application::dto::MaterialDto,
            crate::application::dto::SliderImageDto,
            crate::application::dto::TalentStatsDto,
            crate::application::dto::SessionUser,
            crate::domain::material::ApplicantProfile,
            crate::domain::talent::Block,
            crate::domain::talent::BlockKind,
            crate::domain::talent::TalentKind
        )
    ),
    tags(
        (name = "Talentos", description = "Talent profiles per category"),
        (name = "Contacto", description = "Contact form and admin inbox"),
        (name = "Material", description = "Applicant submissions and CV uploads"),
        (name = "Slider", description = "Home page slider"),
        (name = "Auth", description = "Admin session endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("sessionCookie" = []), ("bearerAuth" = [])),
    info(
        title = "Talentos Back Office API",
        description = "Talent agency site back end",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "sessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(ACCESS_TOKEN_COOKIE))),
        );
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("JWT".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            urls.push("http://localhost:8080".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

/// Swagger UI at `/docs` (which also serves `/openapi.json`) and ReDoc at
/// `/redoc`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot(output_path: &Path) -> std::io::Result<()> {
    let doc = ApiDoc::openapi();
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &doc)?;
    Ok(())
}
