//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tavola::users::Role;
use uuid::Uuid;

use crate::auth::{AuthError, MIN_PASSWORD_LEN, NewAccount, Session};

/// Configuration for connecting to the managed auth gateway.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Gateway base address, e.g. `"https://project.example.co"`.
    pub base_url: String,

    /// Per-project API key sent with every request.
    pub api_key: String,
}

/// HTTP client for the managed auth gateway.
#[derive(Debug, Clone)]
pub struct RestAuthService {
    config: AuthConfig,
    http: Client,
}

impl RestAuthService {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.config.base_url)
    }

    async fn parse_session(response: reqwest::Response) -> Result<Session, AuthError> {
        if matches!(
            response.status(),
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::UNPROCESSABLE_ENTITY
        ) {
            return Err(AuthError::InvalidCredentials);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(AuthError::UnexpectedResponse(format!(
                "auth request failed with status {status}: {text}"
            )));
        }

        let parsed: SessionResponse = response.json().await?;
        let role: Role = parsed.user.user_metadata.role.parse()?;

        Ok(Session {
            uid: parsed.user.id,
            email: parsed.user.email,
            role,
        })
    }
}

#[async_trait]
impl AuthService for RestAuthService {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let body = serde_json::json!({ "email": email, "password": password });

        let response = self
            .http
            .post(self.url("token"))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        Self::parse_session(response).await
    }

    async fn sign_up(&self, account: NewAccount) -> Result<Session, AuthError> {
        if account.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword);
        }

        let body = serde_json::json!({
            "email": account.email,
            "password": account.password,
            "data": { "name": account.name, "role": account.role },
        });

        let response = self
            .http
            .post(self.url("signup"))
            .header("apikey", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        Self::parse_session(response).await
    }

    async fn reset_password(&self, email: &str) -> Result<(), AuthError> {
        let body = serde_json::json!({ "email": email });

        let response = self
            .http
            .post(self.url("recover"))
            .header("apikey", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(AuthError::UnexpectedResponse(format!(
                "recover request failed with status {status}: {text}"
            )));
        }

        Ok(())
    }

    async fn logout(&self) -> Result<(), AuthError> {
        let response = self
            .http
            .post(self.url("logout"))
            .header("apikey", &self.config.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(AuthError::UnexpectedResponse(format!(
                "logout request failed with status {status}: {text}"
            )));
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchange credentials for a session.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Register a new account and return its first session.
    async fn sign_up(&self, account: NewAccount) -> Result<Session, AuthError>;

    /// Send a password-reset email.
    async fn reset_password(&self, email: &str) -> Result<(), AuthError>;

    /// End the current session.
    async fn logout(&self) -> Result<(), AuthError>;
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    user: SessionUser,
}

#[derive(Debug, Deserialize)]
struct SessionUser {
    id: Uuid,
    email: String,
    #[serde(default)]
    user_metadata: SessionMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct SessionMetadata {
    #[serde(default)]
    role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> RestAuthService {
        // Never dialled in these tests; local validation rejects first.
        RestAuthService::new(AuthConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            api_key: "test-key".to_string(),
        })
    }

    #[tokio::test]
    async fn sign_up_rejects_short_passwords_before_any_network_call() {
        let result = service()
            .sign_up(NewAccount {
                email: "gino@example.com".to_string(),
                password: "short".to_string(),
                name: "Gino".to_string(),
                role: Role::Customer,
            })
            .await;

        assert!(
            matches!(result, Err(AuthError::WeakPassword)),
            "expected WeakPassword, got {result:?}"
        );
    }

    #[test]
    fn session_dashboard_follows_role() {
        let session = Session {
            uid: Uuid::now_v7(),
            email: "gino@example.com".to_string(),
            role: Role::Rider,
        };

        assert_eq!(session.dashboard_path(), "/dashboard/rider");
    }
}
