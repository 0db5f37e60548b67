//! Item Repository - In-memory implementation
//!
//! Same contract as the PostgREST repository, backed by a `Vec`. Counts calls
//! and can be told to fail, so callers can be checked for "no call issued" and
//! for their failure paths.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use super::traits::ListItemRepository;
use crate::domain::{
    remove_by_id, Clock, DomainError, DomainResult, ItemId, ItemPatch, ListItem, NewListItem,
    SystemClock, UserId,
};

pub struct MemoryItemRepository<C: Clock = SystemClock> {
    rows: RefCell<Vec<ListItem>>,
    next_id: Cell<u64>,
    calls: Cell<usize>,
    failure: RefCell<Option<DomainError>>,
    clock: C,
}

impl MemoryItemRepository<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for MemoryItemRepository<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> MemoryItemRepository<C> {
    /// Server-side clock for `created_at` / default `updated_at`
    pub fn with_clock(clock: C) -> Self {
        Self {
            rows: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            calls: Cell::new(0),
            failure: RefCell::new(None),
            clock,
        }
    }

    /// Every following call fails with `error` until cleared with `None`
    pub fn fail_with(&self, error: Option<DomainError>) {
        *self.failure.borrow_mut() = error;
    }

    /// Number of backend calls issued so far
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Snapshot of stored rows in insertion order
    pub fn rows(&self) -> Vec<ListItem> {
        self.rows.borrow().clone()
    }

    fn begin_call(&self) -> DomainResult<()> {
        self.calls.set(self.calls.get() + 1);
        match self.failure.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl<C: Clock> ListItemRepository for MemoryItemRepository<C> {
    async fn list_by_owner(&self, owner: &UserId) -> DomainResult<Vec<ListItem>> {
        self.begin_call()?;
        let mut items: Vec<ListItem> = self
            .rows
            .borrow()
            .iter()
            .filter(|row| &row.user_id == owner)
            .cloned()
            .collect();
        // Stable sort keeps later inserts first among equal timestamps.
        items.reverse();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn create(&self, item: &NewListItem) -> DomainResult<ListItem> {
        self.begin_call()?;
        if item.content.trim().is_empty() {
            return Err(DomainError::Backend {
                status: 400,
                message: "content must not be blank".into(),
            });
        }

        let now = self.clock.now();
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let row = ListItem {
            id: ItemId(format!("item-{}", id)),
            user_id: item.user_id.clone(),
            content: item.content.clone(),
            is_completed: false,
            completed_at: None,
            created_at: now,
            updated_at: now,
        };
        self.rows.borrow_mut().push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: &ItemId, patch: &ItemPatch) -> DomainResult<ListItem> {
        self.begin_call()?;
        let mut rows = self.rows.borrow_mut();
        let row = rows
            .iter_mut()
            .find(|row| &row.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("list item {}", id)))?;
        row.apply(patch);
        Ok(row.clone())
    }

    async fn delete(&self, id: &ItemId) -> DomainResult<()> {
        self.begin_call()?;
        let mut rows = self.rows.borrow_mut();
        match remove_by_id(&mut *rows, id) {
            0 => Err(DomainError::NotFound(format!("list item {}", id))),
            _ => Ok(()),
        }
    }
}
