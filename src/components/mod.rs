//! UI Components
//!
//! Reusable Leptos components.

mod auth_form;
mod delete_confirm_button;
mod filter_tabs;
mod item_list_view;
mod list_item_row;
mod new_item_form;

pub use auth_form::{AuthForm, AuthMode};
pub use delete_confirm_button::DeleteConfirmButton;
pub use filter_tabs::FilterTabs;
pub use item_list_view::ItemListView;
pub use list_item_row::ListItemRow;
pub use new_item_form::NewItemForm;
