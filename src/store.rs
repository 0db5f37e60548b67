//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The list view is
//! owned here and only mutated through the helpers below.

use leptos::prelude::*;
use reactive_stores::Store;

use goal_store::view::{Filter, ListView};
use goal_store::{DomainResult, ItemId, ListItem};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current user's items plus load state
    pub list: ListView,
    /// Active filter tab
    pub filter: Filter,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_begin_load(store: &AppStore) {
    store.list().write().begin_load();
}

/// Settle a fetch; a failure keeps the previous items
pub fn store_finish_load(store: &AppStore, result: DomainResult<Vec<ListItem>>) {
    store.list().write().finish_load(result);
}

/// Update an item in the store by ID
pub fn store_update_item(store: &AppStore, updated_item: ListItem) {
    store.list().write().replace_item(updated_item);
}

/// Remove an item from the store by ID
pub fn store_remove_item(store: &AppStore, item_id: &ItemId) {
    store.list().write().remove_item(item_id);
}

pub fn store_set_filter(store: &AppStore, filter: Filter) {
    store.filter().set(filter);
}
