//! Backend Connection Configuration
//!
//! Project URL and public (anon) key of the hosted auth/data backend.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// Table holding the goal rows
pub const LIST_ITEMS_TABLE: &str = "list_items";

/// Connection settings for the hosted backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Project base URL, e.g. `https://xyz.supabase.co`
    pub url: String,
    /// Public API key sent as `apikey`
    pub anon_key: String,
}

impl BackendConfig {
    /// Validate and normalize connection settings.
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> DomainResult<Self> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let anon_key = anon_key.into().trim().to_string();

        if url.is_empty() {
            return Err(DomainError::Config("backend URL is empty".into()));
        }
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(DomainError::Config(format!("backend URL must be http(s): {}", url)));
        }
        if anon_key.is_empty() {
            return Err(DomainError::Config("backend anon key is empty".into()));
        }

        Ok(Self { url, anon_key })
    }

    /// Build from optional values (e.g. compile-time env); names the missing one.
    pub fn from_parts(url: Option<&str>, anon_key: Option<&str>) -> DomainResult<Self> {
        let url = url.ok_or_else(|| DomainError::Config("GOAL_LIST_BACKEND_URL is not set".into()))?;
        let anon_key = anon_key
            .ok_or_else(|| DomainError::Config("GOAL_LIST_BACKEND_ANON_KEY is not set".into()))?;
        Self::new(url, anon_key)
    }

    /// PostgREST endpoint for a table
    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }

    /// GoTrue endpoint; `path` has no leading slash
    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let cfg = BackendConfig::new("https://demo.supabase.co/", "anon").unwrap();
        assert_eq!(cfg.rest_url(LIST_ITEMS_TABLE), "https://demo.supabase.co/rest/v1/list_items");
        assert_eq!(cfg.auth_url("user"), "https://demo.supabase.co/auth/v1/user");
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(BackendConfig::new("", "anon").is_err());
        assert!(BackendConfig::new("demo.supabase.co", "anon").is_err());
        assert!(BackendConfig::new("https://demo.supabase.co", "  ").is_err());
    }

    #[test]
    fn test_from_parts_names_missing_value() {
        let err = BackendConfig::from_parts(None, Some("anon")).unwrap_err();
        assert!(err.to_string().contains("GOAL_LIST_BACKEND_URL"));
        let err = BackendConfig::from_parts(Some("https://x.co"), None).unwrap_err();
        assert!(err.to_string().contains("GOAL_LIST_BACKEND_ANON_KEY"));
    }
}
