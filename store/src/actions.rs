//! Item Actions
//!
//! Creator and editor operations over a `ListItemRepository`. Each action is at
//! most one backend call; blank or unchanged input short-circuits before any
//! call is issued. Failures of mutations are logged, never retried.

use crate::domain::{
    normalize_content, Clock, DomainResult, ItemPatch, ListItem, NewListItem, SystemClock, UserId,
};
use crate::repository::ListItemRepository;

/// Result of committing the edit buffer of one item
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// Blank or unchanged; edit mode closes and the buffer resets to `content`
    Unchanged { content: String },
    Saved(ListItem),
    /// Backend refused; the buffer rolls back to the last known server value
    RolledBack { content: String },
}

impl EditOutcome {
    /// Text the edit buffer should hold afterwards
    pub fn buffer(&self) -> &str {
        match self {
            EditOutcome::Unchanged { content } | EditOutcome::RolledBack { content } => content,
            EditOutcome::Saved(item) => &item.content,
        }
    }

    /// Edit mode stays open only after a failed save
    pub fn closes_editor(&self) -> bool {
        !matches!(self, EditOutcome::RolledBack { .. })
    }
}

/// Decide what an edit commit should send, if anything.
pub fn plan_content_edit(item: &ListItem, buffer: &str, now: chrono::DateTime<chrono::Utc>) -> Option<ItemPatch> {
    match normalize_content(buffer) {
        Some(content) if content != item.content => ItemPatch::content(&content, now).ok(),
        _ => None,
    }
}

/// Repository-backed operations for the creator form and each item row
pub struct ItemActions<'a, R: ListItemRepository + ?Sized, C: Clock = SystemClock> {
    repo: &'a R,
    clock: C,
}

impl<'a, R: ListItemRepository + ?Sized> ItemActions<'a, R, SystemClock> {
    pub fn new(repo: &'a R) -> Self {
        Self { repo, clock: SystemClock }
    }
}

impl<'a, R: ListItemRepository + ?Sized, C: Clock> ItemActions<'a, R, C> {
    pub fn with_clock(repo: &'a R, clock: C) -> Self {
        Self { repo, clock }
    }

    /// Fetch the owner's items, newest first
    pub async fn load(&self, owner: &UserId) -> DomainResult<Vec<ListItem>> {
        let result = self.repo.list_by_owner(owner).await;
        match &result {
            Ok(items) => log::info!("[LIST] Loaded {} items", items.len()),
            Err(e) => log::error!("[LIST] Error fetching items: {}", e),
        }
        result
    }

    /// Submit the creator form. `Ok(None)` when the input is blank (no call).
    pub async fn create(&self, owner: &UserId, raw: &str) -> DomainResult<Option<ListItem>> {
        let Ok(new_item) = NewListItem::new(owner.clone(), raw) else {
            return Ok(None);
        };
        match self.repo.create(&new_item).await {
            Ok(item) => {
                log::info!("[LIST] Added item {}", item.id);
                Ok(Some(item))
            }
            Err(e) => {
                log::error!("[LIST] Error adding item: {}", e);
                Err(e)
            }
        }
    }

    /// Commit the edit buffer of `item`.
    pub async fn save_content(&self, item: &ListItem, buffer: &str) -> EditOutcome {
        let Some(patch) = plan_content_edit(item, buffer, self.clock.now()) else {
            return EditOutcome::Unchanged { content: item.content.clone() };
        };
        match self.repo.update(&item.id, &patch).await {
            Ok(saved) => EditOutcome::Saved(saved),
            Err(e) => {
                log::error!("[LIST] Error updating item {}: {}", item.id, e);
                EditOutcome::RolledBack { content: item.content.clone() }
            }
        }
    }

    /// Flip the completion flag; `completed_at` follows it.
    pub async fn toggle_completion(&self, item: &ListItem) -> DomainResult<ListItem> {
        let patch = ItemPatch::completion(!item.is_completed, self.clock.now());
        self.repo.update(&item.id, &patch).await.map_err(|e| {
            log::error!("[LIST] Error updating item {}: {}", item.id, e);
            e
        })
    }

    /// Delete after the user confirmed. Irreversible.
    pub async fn delete(&self, item: &ListItem) -> DomainResult<()> {
        self.repo.delete(&item.id).await.map_err(|e| {
            log::error!("[LIST] Error deleting item {}: {}", item.id, e);
            e
        })
    }
}
