// src/application/commands/auth.rs
use std::sync::Arc;

use validator::Validate;

use crate::application::{
    dto::{AuthSession, SessionUser},
    error::ApplicationResult,
    forms::LoginForm,
    ports::auth::AuthProvider,
};

/// Admin sign-in, sign-out and session lookup, delegated to the hosted auth
/// service.
pub struct AuthService {
    provider: Arc<dyn AuthProvider>,
}

impl AuthService {
    pub fn new(provider: Arc<dyn AuthProvider>) -> Self {
        Self { provider }
    }

    pub async fn login(&self, form: LoginForm) -> ApplicationResult<AuthSession> {
        form.validate()?;
        self.provider
            .sign_in(form.email.trim(), &form.password)
            .await
    }

    pub async fn logout(&self, access_token: &str) -> ApplicationResult<()> {
        self.provider.sign_out(access_token).await
    }

    pub async fn current_user(&self, access_token: &str) -> ApplicationResult<SessionUser> {
        self.provider.current_user(access_token).await
    }
}
