//! Login, logout and the current user.

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument};

use crate::client::{HttpClient, RequestOptions};
use crate::domain::{LoginCredentials, LoginResponse, User};
use crate::error::{MockError, Result};
use crate::fixtures;
use crate::gateway::simulate_latency;
use crate::session::Session;

#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn login(&self, credentials: &LoginCredentials) -> Result<User>;

    async fn logout(&self) -> Result<()>;

    async fn current_user(&self) -> Result<Option<User>>;
}

/// Authentication against `/auth/*`.
pub struct LiveAuth {
    http: HttpClient,
}

impl LiveAuth {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl AuthBackend for LiveAuth {
    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    async fn login(&self, credentials: &LoginCredentials) -> Result<User> {
        let response: LoginResponse = self
            .http
            .post("/auth/login", credentials, RequestOptions::new())
            .await?;

        let (user, token) = response.into_parts();
        if let Some(token) = token {
            self.http.set_token(Some(&token))?;
        }
        Ok(user)
    }

    async fn logout(&self) -> Result<()> {
        self.http
            .request(Method::POST, "/auth/logout", RequestOptions::new())
            .await?;
        Ok(())
    }

    async fn current_user(&self) -> Result<Option<User>> {
        match self.http.get("/auth/me", RequestOptions::new()).await {
            Ok(user) => Ok(Some(user)),
            // No session on the server side
            Err(e) if matches!(e.status(), Some(StatusCode::UNAUTHORIZED | StatusCode::NOT_FOUND)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Fixture authentication: a single demo administrator.
pub struct FixtureAuth {
    session: Session,
    latency: Duration,
}

impl FixtureAuth {
    pub fn new(session: Session, latency: Duration) -> Self {
        Self { session, latency }
    }
}

#[async_trait]
impl AuthBackend for FixtureAuth {
    async fn login(&self, credentials: &LoginCredentials) -> Result<User> {
        simulate_latency(self.latency).await;

        if credentials.email == fixtures::ADMIN_EMAIL && credentials.password == fixtures::ADMIN_PASSWORD {
            Ok(fixtures::admin_user())
        } else {
            Err(MockError::InvalidCredentials.into())
        }
    }

    async fn logout(&self) -> Result<()> {
        simulate_latency(self.latency).await;
        Ok(())
    }

    async fn current_user(&self) -> Result<Option<User>> {
        simulate_latency(self.latency).await;
        self.session.user()
    }
}

/// Auth facade. Keeps the signed-in user in the [`Session`] and always
/// clears it on logout.
#[derive(Clone)]
pub struct AuthService {
    backend: Arc<dyn AuthBackend>,
    session: Session,
}

impl AuthService {
    pub fn new(backend: Arc<dyn AuthBackend>, session: Session) -> Self {
        Self { backend, session }
    }

    pub fn live(http: HttpClient) -> Self {
        let session = http.session().clone();
        Self::new(Arc::new(LiveAuth::new(http)), session)
    }

    pub fn fixture(session: Session, latency: Duration) -> Self {
        Self::new(Arc::new(FixtureAuth::new(session.clone(), latency)), session)
    }

    pub async fn login(&self, credentials: &LoginCredentials) -> Result<User> {
        let user = self.backend.login(credentials).await?;
        self.session.set_user(Some(&user))?;

        info!(user_id = %user.id, role = ?user.role, "User signed in");
        Ok(user)
    }

    /// Ends the session. Local state is cleared even when the remote call fails;
    /// that failure is still returned.
    pub async fn logout(&self) -> Result<()> {
        let outcome = self.backend.logout().await;
        self.session.clear()?;

        info!("User signed out");
        outcome
    }

    pub async fn current_user(&self) -> Result<Option<User>> {
        self.backend.current_user().await
    }

    /// Whether a token or a cached user is present locally.
    pub fn is_authenticated(&self) -> Result<bool> {
        Ok(self.session.token()?.is_some() || self.session.user()?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;
    use rstest::rstest;

    fn service() -> AuthService {
        AuthService::fixture(Session::in_memory("auth_token"), Duration::ZERO)
    }

    #[tokio::test]
    async fn admin_credentials_resolve_admin_user() {
        let auth = service();

        let user = auth
            .login(&LoginCredentials::new("admin@opjengenharia.com.br", "admin123"))
            .await
            .unwrap();

        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.name, "Administrador OPJ");
        assert_eq!(auth.current_user().await.unwrap(), Some(user));
        assert!(auth.is_authenticated().unwrap());
    }

    #[rstest]
    #[case("admin@opjengenharia.com.br", "wrong")]
    #[case("joao.silva@opjengenharia.com.br", "admin123")]
    #[case("", "")]
    #[tokio::test]
    async fn any_other_pair_is_rejected(#[case] email: &str, #[case] password: &str) {
        let auth = service();

        let err = auth
            .login(&LoginCredentials::new(email, password))
            .await
            .unwrap_err();

        assert!(err.is_invalid_credentials());
        assert_eq!(err.to_string(), "Credenciais inválidas");
        assert!(!auth.is_authenticated().unwrap());
    }

    #[tokio::test]
    async fn logout_clears_session_state() {
        let session = Session::in_memory("auth_token");
        let auth = AuthService::fixture(session.clone(), Duration::ZERO);
        auth.login(&LoginCredentials::new("admin@opjengenharia.com.br", "admin123"))
            .await
            .unwrap();
        session.set_token(Some("left-over")).unwrap();

        auth.logout().await.unwrap();

        assert_eq!(session.token().unwrap(), None);
        assert_eq!(auth.current_user().await.unwrap(), None);
    }
}
