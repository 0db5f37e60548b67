//! Auth API Client
//!
//! GoTrue-compatible endpoints of the hosted backend.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::session::{Credentials, Session, User};
use crate::config::BackendConfig;
use crate::domain::DomainResult;
use crate::http;

/// Sign-up either signs the user in or waits for email confirmation
#[derive(Debug, Clone, PartialEq)]
pub enum SignUpOutcome {
    SignedIn(Session),
    ConfirmationSent(User),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(Session),
    User(User),
}

#[async_trait(?Send)]
pub trait AuthApi {
    async fn sign_in_with_password(&self, credentials: &Credentials) -> DomainResult<Session>;

    /// Exchange a refresh token for a new session
    async fn refresh_session(&self, refresh_token: &str) -> DomainResult<Session>;

    /// `email_redirect_to` is where the verification link lands
    async fn sign_up(
        &self,
        credentials: &Credentials,
        email_redirect_to: Option<&str>,
    ) -> DomainResult<SignUpOutcome>;

    /// Resolve the user behind an access token
    async fn get_user(&self, access_token: &str) -> DomainResult<User>;

    async fn sign_out(&self, access_token: &str) -> DomainResult<()>;

    /// Resend the "signup" verification email
    async fn resend_signup_email(&self, email: &str) -> DomainResult<()>;
}

pub struct GoTrueClient {
    client: Client,
    config: BackendConfig,
}

impl GoTrueClient {
    pub fn new(config: BackendConfig) -> Self {
        Self { client: Client::new(), config }
    }
}

#[async_trait(?Send)]
impl AuthApi for GoTrueClient {
    async fn sign_in_with_password(&self, credentials: &Credentials) -> DomainResult<Session> {
        log::debug!("[AUTH] Signing in {}", credentials.email);
        let builder = self
            .client
            .post(self.config.auth_url("token"))
            .query(&[("grant_type", "password")])
            .json(credentials);
        let response = http::send(http::authorize(builder, &self.config, None)).await?;
        http::json(response).await
    }

    async fn refresh_session(&self, refresh_token: &str) -> DomainResult<Session> {
        log::debug!("[AUTH] Refreshing session");
        let builder = self
            .client
            .post(self.config.auth_url("token"))
            .query(&[("grant_type", "refresh_token")])
            .json(&json!({ "refresh_token": refresh_token }));
        let response = http::send(http::authorize(builder, &self.config, None)).await?;
        http::json(response).await
    }

    async fn sign_up(
        &self,
        credentials: &Credentials,
        email_redirect_to: Option<&str>,
    ) -> DomainResult<SignUpOutcome> {
        log::debug!("[AUTH] Signing up {}", credentials.email);
        let mut builder = self.client.post(self.config.auth_url("signup")).json(credentials);
        if let Some(redirect) = email_redirect_to {
            builder = builder.query(&[("redirect_to", redirect)]);
        }
        let response = http::send(http::authorize(builder, &self.config, None)).await?;
        Ok(match http::json::<SignUpResponse>(response).await? {
            SignUpResponse::Session(session) => SignUpOutcome::SignedIn(session),
            SignUpResponse::User(user) => SignUpOutcome::ConfirmationSent(user),
        })
    }

    async fn get_user(&self, access_token: &str) -> DomainResult<User> {
        let builder = self.client.get(self.config.auth_url("user"));
        let response = http::send(http::authorize(builder, &self.config, Some(access_token))).await?;
        http::json(response).await
    }

    async fn sign_out(&self, access_token: &str) -> DomainResult<()> {
        let builder = self.client.post(self.config.auth_url("logout"));
        http::send(http::authorize(builder, &self.config, Some(access_token))).await?;
        Ok(())
    }

    async fn resend_signup_email(&self, email: &str) -> DomainResult<()> {
        log::debug!("[AUTH] Resending verification email to {}", email);
        let builder = self
            .client
            .post(self.config.auth_url("resend"))
            .json(&json!({ "type": "signup", "email": email }));
        http::send(http::authorize(builder, &self.config, None)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_signup_response_variants() {
        let pending: SignUpResponse =
            serde_json::from_str(r#"{"id":"u1","email":"a@example.com","confirmation_sent_at":"2024-01-01T00:00:00Z"}"#)
                .unwrap();
        assert!(matches!(pending, SignUpResponse::User(u) if !u.is_verified()));

        let signed_in: SignUpResponse = serde_json::from_str(
            r#"{"access_token":"jwt","refresh_token":"r","expires_at":1,"user":{"id":"u1"}}"#,
        )
        .unwrap();
        assert!(matches!(signed_in, SignUpResponse::Session(_)));
    }

    fn token_body(access: &str) -> serde_json::Value {
        json!({
            "access_token": access,
            "token_type": "bearer",
            "expires_in": 3600,
            "expires_at": 1700003600,
            "refresh_token": "r2",
            "user": {
                "id": "u1",
                "email": "a@example.com",
                "email_confirmed_at": "2024-01-01T00:00:00Z"
            }
        })
    }

    fn client(server: &MockServer) -> GoTrueClient {
        GoTrueClient::new(BackendConfig::new(server.uri(), "anon").unwrap())
    }

    #[tokio::test]
    async fn test_password_sign_in() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .and(query_param("grant_type", "password"))
            .and(header("apikey", "anon"))
            .and(body_json(json!({ "email": "a@example.com", "password": "hunter2" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("jwt")))
            .expect(1)
            .mount(&server)
            .await;

        let credentials = Credentials::new("a@example.com", "hunter2").unwrap();
        let session = client(&server).sign_in_with_password(&credentials).await.unwrap();
        assert_eq!(session.access_token, "jwt");
        assert!(session.user.is_verified());
    }

    #[tokio::test]
    async fn test_bad_credentials_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "invalid_grant",
                "error_description": "Invalid login credentials"
            })))
            .mount(&server)
            .await;

        let credentials = Credentials::new("a@example.com", "wrong").unwrap();
        assert_eq!(
            client(&server).sign_in_with_password(&credentials).await,
            Err(crate::DomainError::Backend {
                status: 400,
                message: "Invalid login credentials".into()
            })
        );
    }

    #[tokio::test]
    async fn test_refresh_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .and(query_param("grant_type", "refresh_token"))
            .and(body_json(json!({ "refresh_token": "r1" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("jwt-2")))
            .expect(1)
            .mount(&server)
            .await;

        let session = client(&server).refresh_session("r1").await.unwrap();
        assert_eq!(session.access_token, "jwt-2");
        assert_eq!(session.refresh_token(), Some("r2"));
    }

    #[tokio::test]
    async fn test_sign_up_awaiting_confirmation() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/signup"))
            .and(query_param("redirect_to", "http://localhost:1420/dashboard"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "u1",
                "email": "a@example.com",
                "confirmation_sent_at": "2024-01-01T00:00:00Z"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let credentials = Credentials::new("a@example.com", "hunter2").unwrap();
        let outcome = client(&server)
            .sign_up(&credentials, Some("http://localhost:1420/dashboard"))
            .await
            .unwrap();
        assert!(matches!(outcome, SignUpOutcome::ConfirmationSent(u) if !u.is_verified()));
    }

    #[tokio::test]
    async fn test_get_user_and_sign_out_use_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .and(header("Authorization", "Bearer jwt"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "u1" })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/logout"))
            .and(header("Authorization", "Bearer jwt"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server);
        assert_eq!(client.get_user("jwt").await.unwrap().id, crate::UserId("u1".into()));
        assert_eq!(client.sign_out("jwt").await, Ok(()));
    }

    #[tokio::test]
    async fn test_resend_posts_signup_type() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/resend"))
            .and(header("apikey", "anon"))
            .and(header("Authorization", "Bearer anon"))
            .and(body_json(json!({ "type": "signup", "email": "a@example.com" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        assert_eq!(client(&server).resend_signup_email("a@example.com").await, Ok(()));
    }
}
