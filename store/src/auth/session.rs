//! Session and user as issued by the auth API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult, UserId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_confirmed_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn is_verified(&self) -> bool {
        self.email_confirmed_at.is_some()
    }

    pub fn email_or_empty(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Unix seconds
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: User,
}

impl Session {
    /// Sessions without an expiry are trusted until the backend rejects them
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now.timestamp())
    }

    /// Refresh token, when the backend issued a usable one
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn to_json(&self) -> DomainResult<String> {
        serde_json::to_string(self).map_err(|e| DomainError::Decode(e.to_string()))
    }

    pub fn from_json(raw: &str) -> DomainResult<Self> {
        serde_json::from_str(raw).map_err(|e| DomainError::Decode(e.to_string()))
    }
}

/// Next step after the backend rejected an access token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Renewal {
    /// The session already moved on to another token; just retry
    Retry,
    /// Exchange this refresh token for a new session
    Refresh(String),
    SignOut,
}

/// Decide how to recover from a rejected `rejected_token`.
pub fn plan_renewal(current: Option<&Session>, rejected_token: &str) -> Renewal {
    match current {
        None => Renewal::SignOut,
        Some(session) if session.access_token != rejected_token => Renewal::Retry,
        Some(session) => match session.refresh_token() {
            Some(token) => Renewal::Refresh(token.to_string()),
            None => Renewal::SignOut,
        },
    }
}

/// Email/password pair submitted by the login and signup forms
#[derive(Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> DomainResult<Self> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::InvalidInput("Please enter a valid email address.".into()));
        }
        if password.is_empty() {
            return Err(DomainError::InvalidInput("Please enter your password.".into()));
        }
        Ok(Self { email: email.to_string(), password: password.to_string() })
    }
}

// Keep passwords out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}
