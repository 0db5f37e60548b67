//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all domain entities.

use serde::{Deserialize, Serialize};

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Replace the entity with the same ID in place. Returns false when absent.
pub fn replace_by_id<T: Entity>(entities: &mut [T], updated: T) -> bool {
    match entities.iter_mut().find(|e| e.id() == updated.id()) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Remove every entity carrying `id`. Returns how many were removed.
pub fn remove_by_id<T: Entity>(entities: &mut Vec<T>, id: &T::Id) -> usize {
    let before = entities.len();
    entities.retain(|e| e.id() != id);
    before - entities.len()
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainError {
    NotFound(String),
    InvalidInput(String),
    /// Missing or rejected session
    Unauthorized(String),
    /// Network failure before a response arrived
    Transport(String),
    /// Backend answered with a non-success status
    Backend { status: u16, message: String },
    /// Response body did not match the expected shape
    Decode(String),
    Config(String),
}

impl DomainError {
    /// Transport and service failures are the only kind the UI tells apart.
    pub fn is_transport_or_service(&self) -> bool {
        matches!(
            self,
            DomainError::Transport(_)
                | DomainError::Backend { .. }
                | DomainError::Decode(_)
                | DomainError::NotFound(_)
        )
    }

    /// The access token is missing, expired or revoked
    pub fn is_session_rejected(&self) -> bool {
        matches!(self, DomainError::Unauthorized(_))
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            DomainError::Transport(msg) => write!(f, "Transport error: {}", msg),
            DomainError::Backend { status, message } => {
                write!(f, "Backend error ({}): {}", status, message)
            }
            DomainError::Decode(msg) => write!(f, "Decode error: {}", msg),
            DomainError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
