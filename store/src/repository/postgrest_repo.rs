//! Item Repository - PostgREST implementation
//!
//! Executes the request builders against the hosted data API with the
//! signed-in user's token. Row ownership is enforced server-side.

use async_trait::async_trait;
use reqwest::Client;

use super::requests::{self, RestRequest};
use super::traits::ListItemRepository;
use crate::config::BackendConfig;
use crate::domain::{DomainError, DomainResult, ItemId, ItemPatch, ListItem, NewListItem, UserId};
use crate::http;

/// HTTP implementation of the list-item repository
pub struct PostgrestItemRepository {
    client: Client,
    config: BackendConfig,
    access_token: String,
}

impl PostgrestItemRepository {
    pub fn new(config: BackendConfig, access_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            config,
            access_token: access_token.into(),
        }
    }

    async fn execute(&self, request: RestRequest) -> DomainResult<Vec<ListItem>> {
        log::debug!("[REPO] {} {}", request.method, request.url());

        let mut builder = self.client.request(request.method.clone(), request.url());
        builder = http::authorize(builder, &self.config, Some(&self.access_token));
        if let Some(prefer) = request.prefer {
            builder = builder.header("Prefer", prefer);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = http::send(builder).await?;
        http::json::<Vec<ListItem>>(response).await
    }
}

/// Representation responses are arrays; mutations by id expect exactly one row.
fn single_row(rows: Vec<ListItem>, id: &str) -> DomainResult<ListItem> {
    rows.into_iter()
        .next()
        .ok_or_else(|| DomainError::NotFound(format!("list item {}", id)))
}

#[async_trait(?Send)]
impl ListItemRepository for PostgrestItemRepository {
    async fn list_by_owner(&self, owner: &UserId) -> DomainResult<Vec<ListItem>> {
        self.execute(requests::list_by_owner(&self.config, owner)).await
    }

    async fn create(&self, item: &NewListItem) -> DomainResult<ListItem> {
        let rows = self.execute(requests::insert(&self.config, item)?).await?;
        single_row(rows, "(new)")
    }

    async fn update(&self, id: &ItemId, patch: &ItemPatch) -> DomainResult<ListItem> {
        let rows = self.execute(requests::update_by_id(&self.config, id, patch)?).await?;
        single_row(rows, id.as_str())
    }

    async fn delete(&self, id: &ItemId) -> DomainResult<()> {
        let rows = self.execute(requests::delete_by_id(&self.config, id)).await?;
        single_row(rows, id.as_str()).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::{json, Value};
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TABLE_PATH: &str = "/rest/v1/list_items";

    fn row(id: &str, content: &str, created_at: &str) -> Value {
        json!({
            "id": id,
            "user_id": "u1",
            "content": content,
            "is_completed": false,
            "completed_at": null,
            "created_at": created_at,
            "updated_at": created_at
        })
    }

    fn repo(server: &MockServer) -> PostgrestItemRepository {
        let config = BackendConfig::new(server.uri(), "anon").unwrap();
        PostgrestItemRepository::new(config, "tok")
    }

    #[tokio::test]
    async fn test_list_sends_owner_filter_and_keys() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(TABLE_PATH))
            .and(query_param("select", "*"))
            .and(query_param("user_id", "eq.u1"))
            .and(query_param("order", "created_at.desc"))
            .and(header("apikey", "anon"))
            .and(header("Authorization", "Bearer tok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                row("b2", "Learn to sail", "2024-02-01T00:00:00Z"),
                row("a1", "Run a marathon", "2024-01-01T00:00:00Z"),
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let items = repo(&server).list_by_owner(&UserId("u1".into())).await.unwrap();
        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b2", "a1"]);
    }

    #[tokio::test]
    async fn test_create_posts_trimmed_row() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(TABLE_PATH))
            .and(header("Prefer", "return=representation"))
            .and(body_json(json!({ "user_id": "u1", "content": "Run a marathon" })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!([row("a1", "Run a marathon", "2024-01-01T00:00:00Z")])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let new_item = NewListItem::new(UserId("u1".into()), "  Run a marathon  ").unwrap();
        let created = repo(&server).create(&new_item).await.unwrap();
        assert_eq!(created.id, ItemId("a1".into()));
        assert!(!created.is_completed);
    }

    #[tokio::test]
    async fn test_update_sends_completion_patch() {
        let server = MockServer::start().await;
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        let mut stored = row("a1", "Run a marathon", "2024-01-01T00:00:00Z");
        stored["is_completed"] = json!(true);
        stored["completed_at"] = json!("2024-03-01T10:00:00Z");
        stored["updated_at"] = json!("2024-03-01T10:00:00Z");

        Mock::given(method("PATCH"))
            .and(path(TABLE_PATH))
            .and(query_param("id", "eq.a1"))
            .and(header("Prefer", "return=representation"))
            .and(body_json(json!({
                "is_completed": true,
                "completed_at": "2024-03-01T10:00:00Z",
                "updated_at": "2024-03-01T10:00:00Z"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([stored])))
            .expect(1)
            .mount(&server)
            .await;

        let updated = repo(&server)
            .update(&ItemId("a1".into()), &ItemPatch::completion(true, now))
            .await
            .unwrap();
        assert!(updated.is_completed);
        assert_eq!(updated.completed_at, Some(now));
    }

    #[tokio::test]
    async fn test_zero_rows_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path(TABLE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path(TABLE_PATH))
            .and(query_param("id", "eq.a1"))
            .and(header("Prefer", "return=representation"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let repo = repo(&server);
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        let patch = ItemPatch::content("Sail", now).unwrap();
        assert!(matches!(
            repo.update(&ItemId("a1".into()), &patch).await,
            Err(DomainError::NotFound(_))
        ));
        assert!(matches!(repo.delete(&ItemId("a1".into())).await, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_one_row() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path(TABLE_PATH))
            .and(query_param("id", "eq.a1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([row("a1", "Run a marathon", "2024-01-01T00:00:00Z")])),
            )
            .expect(1)
            .mount(&server)
            .await;

        assert_eq!(repo(&server).delete(&ItemId("a1".into())).await, Ok(()));
    }

    #[tokio::test]
    async fn test_error_bodies_map_to_domain_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("user_id", "eq.u1"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "boom" })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(query_param("user_id", "eq.u2"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({ "message": "JWT expired" })),
            )
            .mount(&server)
            .await;

        let repo = repo(&server);
        assert_eq!(
            repo.list_by_owner(&UserId("u1".into())).await,
            Err(DomainError::Backend { status: 500, message: "boom".into() })
        );
        assert_eq!(
            repo.list_by_owner(&UserId("u2".into())).await,
            Err(DomainError::Unauthorized("JWT expired".into()))
        );
    }
}
