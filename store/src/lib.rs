//! Goal List Core
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - auth: Backend auth API client and session gating
//! - route: Page paths and redirects
//! - view: In-memory list view model (filters, counts, load state)
//! - actions: Item creator/editor operations on top of a repository

pub mod actions;
pub mod auth;
pub mod config;
pub mod domain;
mod http;
pub mod repository;
pub mod route;
pub mod view;

pub use config::BackendConfig;
pub use domain::{DomainError, DomainResult, ItemId, ItemPatch, ListItem, NewListItem, UserId};
