use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

use super::{SupabaseClient, SupabaseError};
use crate::application::{
    dto::{AuthSession, SessionUser},
    error::{ApplicationError, ApplicationResult},
    ports::auth::AuthProvider,
};

/// Password auth against the hosted auth API (GoTrue).
pub struct SupabaseAuthProvider {
    client: SupabaseClient,
}

impl SupabaseAuthProvider {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct UserPayload {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl From<UserPayload> for SessionUser {
    fn from(user: UserPayload) -> Self {
        SessionUser {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenPayload {
    access_token: String,
    refresh_token: String,
    #[serde(default)]
    expires_in: i64,
    user: UserPayload,
}

fn is_auth_rejection(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
    )
}

#[async_trait]
impl AuthProvider for SupabaseAuthProvider {
    async fn sign_in(&self, email: &str, password: &str) -> ApplicationResult<AuthSession> {
        let response = self
            .client
            .http
            .post(self.client.url("/auth/v1/token?grant_type=password"))
            .header("apikey", &self.client.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(SupabaseError::from)?;

        if is_auth_rejection(response.status()) {
            return Err(ApplicationError::unauthorized("invalid email or password"));
        }
        let payload: TokenPayload = SupabaseClient::ensure_success(response)
            .await?
            .json()
            .await
            .map_err(SupabaseError::from)?;

        Ok(AuthSession {
            access_token: payload.access_token,
            refresh_token: payload.refresh_token,
            expires_in: payload.expires_in,
            user: payload.user.into(),
        })
    }

    async fn sign_out(&self, access_token: &str) -> ApplicationResult<()> {
        let response = self
            .client
            .http
            .post(self.client.url("/auth/v1/logout"))
            .header("apikey", &self.client.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(SupabaseError::from)?;

        // An already expired session is as good as signed out.
        if is_auth_rejection(response.status()) {
            return Ok(());
        }
        SupabaseClient::ensure_success(response).await?;
        Ok(())
    }

    async fn current_user(&self, access_token: &str) -> ApplicationResult<SessionUser> {
        let response = self
            .client
            .http
            .get(self.client.url("/auth/v1/user"))
            .header("apikey", &self.client.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(SupabaseError::from)?;

        if is_auth_rejection(response.status()) {
            return Err(ApplicationError::unauthorized("session expired or invalid"));
        }
        let user: UserPayload = SupabaseClient::ensure_success(response)
            .await?
            .json()
            .await
            .map_err(SupabaseError::from)?;
        Ok(user.into())
    }
}
