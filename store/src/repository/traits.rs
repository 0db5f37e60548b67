//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for list-item data access.
//! Implementations: PostgREST over HTTP, in-memory.

use async_trait::async_trait;

use crate::domain::{DomainResult, ItemId, ItemPatch, ListItem, NewListItem, UserId};

/// CRUD over the `list_items` table
///
/// Every method is exactly one backend round trip: no retry, no batching.
/// Futures are `?Send` because browser fetch is single-threaded.
#[async_trait(?Send)]
pub trait ListItemRepository {
    /// All rows of `owner`, newest first
    async fn list_by_owner(&self, owner: &UserId) -> DomainResult<Vec<ListItem>>;

    /// Insert; the backend assigns id and timestamps
    async fn create(&self, item: &NewListItem) -> DomainResult<ListItem>;

    /// Update one row by id and return the stored row
    async fn update(&self, id: &ItemId, patch: &ItemPatch) -> DomainResult<ListItem>;

    /// Delete one row by id
    async fn delete(&self, id: &ItemId) -> DomainResult<()>;
}
