//! Backend Command Wrappers
//!
//! Frontend bindings to the hosted backend, organized by domain. Each wrapper
//! is one network round trip built from the current context.

mod auth;
mod item;

// Re-export all public items
pub use auth::*;
pub use item::*;
