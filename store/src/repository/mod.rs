//! Repository Layer
//!
//! Data access abstractions and implementations.

mod memory_repo;
mod postgrest_repo;
pub mod requests;
mod traits;


pub use memory_repo::MemoryItemRepository;
pub use postgrest_repo::PostgrestItemRepository;
pub use requests::RestRequest;
pub use traits::ListItemRepository;
