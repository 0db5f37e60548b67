//! PostgREST Request Builders
//!
//! The four query shapes used against `list_items`. Builders are pure so the
//! wire contract can be checked without a network.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Method;
use serde_json::Value;

use crate::config::{BackendConfig, LIST_ITEMS_TABLE};
use crate::domain::{DomainError, DomainResult, ItemId, ItemPatch, NewListItem, UserId};

/// Characters left as-is in query values (unreserved + PostgREST `*`)
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'*');

/// Ask PostgREST to echo affected rows
pub const RETURN_REPRESENTATION: &str = "return=representation";

/// A fully described PostgREST call
#[derive(Debug, Clone, PartialEq)]
pub struct RestRequest {
    pub method: Method,
    /// Table endpoint without query string
    pub endpoint: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Value>,
    pub prefer: Option<&'static str>,
}

impl RestRequest {
    fn new(method: Method, config: &BackendConfig) -> Self {
        Self {
            method,
            endpoint: config.rest_url(LIST_ITEMS_TABLE),
            query: Vec::new(),
            body: None,
            prefer: None,
        }
    }

    fn param(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    /// Endpoint plus percent-encoded query string
    pub fn url(&self) -> String {
        if self.query.is_empty() {
            return self.endpoint.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", k, utf8_percent_encode(v, QUERY_VALUE)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.endpoint, query)
    }
}

fn to_body<T: serde::Serialize>(value: &T) -> DomainResult<Value> {
    serde_json::to_value(value).map_err(|e| DomainError::Decode(e.to_string()))
}

/// `select * where user_id = owner order by created_at desc`
pub fn list_by_owner(config: &BackendConfig, owner: &UserId) -> RestRequest {
    RestRequest::new(Method::GET, config)
        .param("select", "*")
        .param("user_id", format!("eq.{}", owner))
        .param("order", "created_at.desc")
}

/// `insert {user_id, content}` returning the stored row
pub fn insert(config: &BackendConfig, item: &NewListItem) -> DomainResult<RestRequest> {
    let mut request = RestRequest::new(Method::POST, config);
    request.body = Some(to_body(item)?);
    request.prefer = Some(RETURN_REPRESENTATION);
    Ok(request)
}

/// `update ... where id = id` returning the stored row
pub fn update_by_id(config: &BackendConfig, id: &ItemId, patch: &ItemPatch) -> DomainResult<RestRequest> {
    let mut request = RestRequest::new(Method::PATCH, config).param("id", format!("eq.{}", id));
    request.body = Some(to_body(patch)?);
    request.prefer = Some(RETURN_REPRESENTATION);
    Ok(request)
}

/// `delete where id = id`, echoing deleted rows so a miss is detectable
pub fn delete_by_id(config: &BackendConfig, id: &ItemId) -> RestRequest {
    let mut request = RestRequest::new(Method::DELETE, config).param("id", format!("eq.{}", id));
    request.prefer = Some(RETURN_REPRESENTATION);
    request
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn config() -> BackendConfig {
        BackendConfig::new("https://demo.supabase.co", "anon").unwrap()
    }

    #[test]
    fn test_list_by_owner_shape() {
        let req = list_by_owner(&config(), &UserId("9f1c-42".into()));
        assert_eq!(req.method, Method::GET);
        assert_eq!(
            req.url(),
            "https://demo.supabase.co/rest/v1/list_items?select=*&user_id=eq.9f1c-42&order=created_at.desc"
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn test_filter_values_are_encoded() {
        let req = list_by_owner(&config(), &UserId("a&b=c".into()));
        assert!(req.url().contains("user_id=eq.a%26b%3Dc"));
    }

    #[test]
    fn test_insert_shape() {
        let new = NewListItem::new(UserId("u1".into()), "  Run a marathon  ").unwrap();
        let req = insert(&config(), &new).unwrap();
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.url(), "https://demo.supabase.co/rest/v1/list_items");
        assert_eq!(req.body, Some(json!({"user_id": "u1", "content": "Run a marathon"})));
        assert_eq!(req.prefer, Some(RETURN_REPRESENTATION));
    }

    #[test]
    fn test_update_and_delete_target_one_id() {
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let id = ItemId("row-7".into());

        let req = update_by_id(&config(), &id, &ItemPatch::completion(true, now)).unwrap();
        assert_eq!(req.method, Method::PATCH);
        assert_eq!(req.query, vec![("id", "eq.row-7".to_string())]);
        let body = req.body.unwrap();
        assert_eq!(body["is_completed"], true);
        assert_eq!(body["completed_at"], body["updated_at"]);

        let req = delete_by_id(&config(), &id);
        assert_eq!(req.method, Method::DELETE);
        assert_eq!(req.url(), "https://demo.supabase.co/rest/v1/list_items?id=eq.row-7");
    }
}
