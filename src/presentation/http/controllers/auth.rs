// src/presentation/http/controllers/auth.rs
use crate::application::{dto::SessionUser, forms::LoginForm};
use crate::presentation::http::{
    controllers::MessageResponse,
    error::{HttpError, HttpResult, IntoHttpResult},
    extractors::{ACCESS_TOKEN_COOKIE, AdminSession, REFRESH_TOKEN_COOKIE, SessionToken},
    state::HttpState,
};
use axum::{
    Extension, Json,
    http::{HeaderMap, HeaderValue, header::SET_COOKIE},
};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

/// Refresh cookies outlive the access token; the hosted service decides when
/// the refresh token itself expires.
const REFRESH_COOKIE_MAX_AGE: i64 = 60 * 60 * 24 * 30;

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub user: SessionUser,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CurrentUserResponse {
    pub user: SessionUser,
}

fn session_cookie(name: &str, value: &str, max_age: i64, secure: bool) -> HttpResult<HeaderValue> {
    let mut cookie = format!("{name}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}");
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
        .map_err(|_| HttpError::bad_request("session token is not a valid cookie value"))
}

fn cookie_headers(cookies: [HeaderValue; 2]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for cookie in cookies {
        headers.append(SET_COOKIE, cookie);
    }
    headers
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginForm,
    responses(
        (status = 200, description = "Signed in; session cookies set.", body = LoginResponse),
        (status = 400, description = "Invalid form.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Wrong credentials.", body = crate::presentation::http::error::ErrorResponse),
        (status = 429, description = "Too many requests.")
    ),
    security(()),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(form): Json<LoginForm>,
) -> HttpResult<(HeaderMap, Json<LoginResponse>)> {
    let session = state.services.auth.login(form).await.into_http()?;

    let secure = state.settings.cookie_secure;
    let headers = cookie_headers([
        session_cookie(
            ACCESS_TOKEN_COOKIE,
            &session.access_token,
            session.expires_in,
            secure,
        )?,
        session_cookie(
            REFRESH_TOKEN_COOKIE,
            &session.refresh_token,
            REFRESH_COOKIE_MAX_AGE,
            secure,
        )?,
    ]);

    Ok((
        headers,
        Json(LoginResponse {
            message: "Login exitoso".into(),
            user: session.user,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Session cookies cleared.", body = MessageResponse)
    ),
    tag = "Auth"
)]
pub async fn logout(
    Extension(state): Extension<HttpState>,
    SessionToken(token): SessionToken,
) -> HttpResult<(HeaderMap, Json<MessageResponse>)> {
    if let Some(token) = token {
        if let Err(err) = state.services.auth.logout(&token).await {
            warn!(error = %err, "remote sign-out failed, clearing cookies anyway");
        }
    }

    let secure = state.settings.cookie_secure;
    let headers = cookie_headers([
        session_cookie(ACCESS_TOKEN_COOKIE, "", 0, secure)?,
        session_cookie(REFRESH_TOKEN_COOKIE, "", 0, secure)?,
    ]);
    Ok((headers, Json(MessageResponse::new("Logout exitoso"))))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "The signed-in user.", body = CurrentUserResponse),
        (status = 401, description = "No session.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn me(AdminSession(user): AdminSession) -> Json<CurrentUserResponse> {
    Json(CurrentUserResponse { user })
}
