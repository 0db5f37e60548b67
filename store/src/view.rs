//! List View Model
//!
//! The full, unfiltered collection of the current user's items plus the
//! presentation state layered over it. Filters are pure predicates over the
//! already-fetched collection; switching never refetches.

use crate::domain::{remove_by_id, replace_by_id, DomainResult, ItemId, ListItem};

/// Banner shown when the list fetch fails
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load your list items. Please try again.";

/// Client-side view restriction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Tab order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn matches(&self, item: &ListItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !item.is_completed,
            Filter::Completed => item.is_completed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemCounts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl ItemCounts {
    pub fn for_filter(&self, filter: Filter) -> usize {
        match filter {
            Filter::All => self.total,
            Filter::Active => self.active,
            Filter::Completed => self.completed,
        }
    }
}

/// Loading and failure are mutually exclusive
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Failed(String),
    Ready,
}

/// Copy shown when the filtered view is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Nothing stored at all
    NoItems,
    NoActive,
    NoCompleted,
}

impl EmptyState {
    pub fn headline(&self) -> &'static str {
        match self {
            EmptyState::NoItems => "You haven't added any items to your list yet.",
            EmptyState::NoActive => "You don't have any active items.",
            EmptyState::NoCompleted => "You don't have any completed items.",
        }
    }

    pub fn hint(&self) -> Option<&'static str> {
        match self {
            EmptyState::NoItems => Some("What's something challenging you want to accomplish?"),
            _ => None,
        }
    }
}

/// What the list area renders, in priority order
#[derive(Debug, Clone, PartialEq)]
pub enum Presentation {
    Loading,
    Failed(String),
    Empty(EmptyState),
    Items(Vec<ListItem>),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListView {
    items: Vec<ListItem>,
    state: LoadState,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Enter loading; clears any previous banner
    pub fn begin_load(&mut self) {
        self.state = LoadState::Loading;
    }

    /// Settle a fetch. On failure the collection keeps its previous value.
    ///
    /// Only transport/service failures raise the banner. A rejected session
    /// leaves the view loading while the session holder signs out.
    pub fn finish_load(&mut self, result: DomainResult<Vec<ListItem>>) {
        match result {
            Ok(items) => {
                self.items = items;
                self.state = LoadState::Ready;
            }
            Err(e) if e.is_transport_or_service() => {
                self.state = LoadState::Failed(LOAD_FAILED_MESSAGE.to_string());
            }
            Err(_) => {}
        }
    }

    pub fn filtered(&self, filter: Filter) -> Vec<ListItem> {
        self.items.iter().filter(|item| filter.matches(item)).cloned().collect()
    }

    pub fn counts(&self) -> ItemCounts {
        let completed = self.items.iter().filter(|item| item.is_completed).count();
        ItemCounts {
            total: self.items.len(),
            active: self.items.len() - completed,
            completed,
        }
    }

    /// Patch one item in place after a successful mutation
    pub fn replace_item(&mut self, item: ListItem) -> bool {
        replace_by_id(&mut self.items, item)
    }

    pub fn remove_item(&mut self, id: &ItemId) -> bool {
        remove_by_id(&mut self.items, id) > 0
    }

    pub fn presentation(&self, filter: Filter) -> Presentation {
        match &self.state {
            LoadState::Loading => return Presentation::Loading,
            LoadState::Failed(msg) => return Presentation::Failed(msg.clone()),
            LoadState::Ready => {}
        }

        let visible = self.filtered(filter);
        if !visible.is_empty() {
            return Presentation::Items(visible);
        }
        let empty = if self.items.is_empty() {
            EmptyState::NoItems
        } else if filter == Filter::Active {
            EmptyState::NoActive
        } else {
            EmptyState::NoCompleted
        };
        Presentation::Empty(empty)
    }
}
