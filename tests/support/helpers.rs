// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use std::sync::Arc;
use talentos_backoffice::application::services::{ApplicationServices, ServiceDependencies};
use talentos_backoffice::infrastructure::util::DefaultSlugGenerator;
use talentos_backoffice::presentation::http::{
    routes::build_router_with_rate_limiter,
    state::{HttpSettings, HttpState},
};

/// Router wired to in-memory adapters, plus handles on those adapters so
/// tests can seed and inspect them.
pub struct TestApp {
    pub router: axum::Router,
    pub talents: Arc<mocks::MemoryTalentRepo>,
    pub contacts: Arc<mocks::MemoryContactRepo>,
    pub materials: Arc<mocks::MemoryMaterialRepo>,
    pub slider: Arc<mocks::MemorySliderRepo>,
    pub storage: Arc<mocks::MemoryStorage>,
    pub auth: Arc<mocks::StubAuth>,
}

impl TestApp {
    pub fn new() -> Self {
        let talents = Arc::new(mocks::MemoryTalentRepo::default());
        let contacts = Arc::new(mocks::MemoryContactRepo::default());
        let materials = Arc::new(mocks::MemoryMaterialRepo::default());
        let slider = Arc::new(mocks::MemorySliderRepo::default());
        let storage = Arc::new(mocks::MemoryStorage::default());
        let auth = Arc::new(mocks::StubAuth::default());

        let services = Arc::new(ApplicationServices::new(ServiceDependencies {
            talent_write_repo: talents.clone(),
            talent_read_repo: talents.clone(),
            contact_repo: contacts.clone(),
            material_repo: materials.clone(),
            slider_repo: slider.clone(),
            storage: storage.clone(),
            auth_provider: auth.clone(),
            clock: Arc::new(mocks::FixedClock),
            slugger: Arc::new(DefaultSlugGenerator),
        }));

        let state = HttpState {
            services,
            settings: HttpSettings {
                cookie_secure: false,
                ..HttpSettings::default()
            },
        };

        Self {
            router: build_router_with_rate_limiter(state, false),
            talents,
            contacts,
            materials,
            slider,
            storage,
            auth,
        }
    }
}

pub fn make_test_router() -> axum::Router {
    TestApp::new().router
}

/// `Cookie` header value carrying the stub admin session.
pub fn admin_cookie() -> String {
    format!("sb-access-token={}", mocks::ADMIN_TOKEN)
}

pub fn json_request(method: Method, uri: &str, body: &Value, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: Method, uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_owned();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    json
}

const BOUNDARY: &str = "talentos-test-boundary";

/// Hand-assembled multipart/form-data body.
#[derive(Default)]
pub struct MultipartBuilder {
    body: Vec<u8>,
}

impl MultipartBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, data: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn png(self, name: &str, file_name: &str) -> Self {
        self.file(name, file_name, "image/png", b"\x89PNG fake image bytes")
    }

    pub fn build(mut self, method: Method, uri: &str, cookie: Option<&str>) -> Request<Body> {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        let mut builder = Request::builder().method(method).uri(uri).header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::from(self.body)).unwrap()
    }
}
