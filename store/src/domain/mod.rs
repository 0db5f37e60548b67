//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde and chrono).

mod clock;
mod entity;
mod item;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entity::{remove_by_id, replace_by_id, DomainError, DomainResult, Entity};
pub use item::{normalize_content, ItemId, ItemPatch, ListItem, NewListItem, UserId};
