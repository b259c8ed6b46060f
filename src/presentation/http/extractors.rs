// src/presentation/http/extractors.rs
use crate::{
    application::{dto::SessionUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, Cookie, HeaderMapExt, authorization::Bearer};
use std::convert::Infallible;

use super::error::{HttpError, IntoHttpResult};

pub const ACCESS_TOKEN_COOKIE: &str = "sb-access-token";
pub const REFRESH_TOKEN_COOKIE: &str = "sb-refresh-token";

/// Access token from the session cookie, or a bearer header for API clients.
fn access_token(parts: &Parts) -> Option<String> {
    let from_cookie = parts.headers.typed_get::<Cookie>().and_then(|cookie| {
        cookie
            .get(ACCESS_TOKEN_COOKIE)
            .filter(|token| !token.is_empty())
            .map(str::to_owned)
    });
    from_cookie.or_else(|| {
        parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .map(|header| header.token().to_owned())
    })
}

/// Token of the caller's session, if any. Never rejects.
#[derive(Debug, Clone)]
pub struct SessionToken(pub Option<String>);

impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(access_token(parts)))
    }
}

/// A signed-in back-office user.
#[derive(Debug, Clone)]
pub struct AdminSession(pub SessionUser);

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::infrastructure(
                    "application state missing",
                ))
            })?;

        let token = access_token(parts).ok_or_else(|| {
            HttpError::from_error(ApplicationError::unauthorized("No autorizado"))
        })?;

        let user = app_state
            .services
            .auth
            .current_user(&token)
            .await
            .into_http()?;

        Ok(Self(user))
    }
}
