// src/application/ports/auth.rs
use async_trait::async_trait;

use crate::application::{
    dto::{AuthSession, SessionUser},
    error::ApplicationResult,
};

/// Delegated authentication against the hosted backend.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Password sign-in. Bad credentials surface as `Unauthorized`.
    async fn sign_in(&self, email: &str, password: &str) -> ApplicationResult<AuthSession>;

    async fn sign_out(&self, access_token: &str) -> ApplicationResult<()>;

    /// Resolves the user behind an access token. Expired or unknown tokens
    /// surface as `Unauthorized`.
    async fn current_user(&self, access_token: &str) -> ApplicationResult<SessionUser>;
}
