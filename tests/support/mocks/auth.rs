// tests/support/mocks/auth.rs
use async_trait::async_trait;
use std::sync::Mutex;
use talentos_backoffice::application::{
    dto::{AuthSession, SessionUser},
    error::{ApplicationError, ApplicationResult},
    ports::auth::AuthProvider,
};

pub const ADMIN_EMAIL: &str = "admin@agencia.test";
pub const ADMIN_PASSWORD: &str = "correct-horse";
pub const ADMIN_TOKEN: &str = "admin-token";
pub const REFRESH_TOKEN: &str = "refresh-token";

/// Accepts one admin account and one access token.
#[derive(Default)]
pub struct StubAuth {
    signed_out: Mutex<Vec<String>>,
}

impl StubAuth {
    pub fn admin() -> SessionUser {
        SessionUser {
            id: "00000000-0000-0000-0000-000000000001".into(),
            email: Some(ADMIN_EMAIL.into()),
            created_at: None,
        }
    }

    pub fn signed_out(&self) -> Vec<String> {
        self.signed_out.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthProvider for StubAuth {
    async fn sign_in(&self, email: &str, password: &str) -> ApplicationResult<AuthSession> {
        if email != ADMIN_EMAIL || password != ADMIN_PASSWORD {
            return Err(ApplicationError::unauthorized("Credenciales inválidas"));
        }
        Ok(AuthSession {
            access_token: ADMIN_TOKEN.into(),
            refresh_token: REFRESH_TOKEN.into(),
            expires_in: 3600,
            user: Self::admin(),
        })
    }

    async fn sign_out(&self, access_token: &str) -> ApplicationResult<()> {
        self.signed_out.lock().unwrap().push(access_token.to_owned());
        Ok(())
    }

    async fn current_user(&self, access_token: &str) -> ApplicationResult<SessionUser> {
        if access_token == ADMIN_TOKEN {
            Ok(Self::admin())
        } else {
            Err(ApplicationError::unauthorized("invalid session"))
        }
    }
}
