//! Domain Layer - Core Entity Traits
//!
//! Every record in a schedule snapshot carries a string identity.
//! Hierarchical records also expose their children, so one projection
//! walks both the bill of quantities and the formula editor's quantity tree.

use std::sync::Arc;

/// Core trait for all domain entities
pub trait Entity {
    /// Returns the entity's unique identifier
    fn id(&self) -> &str;
}

/// An entity that owns an ordered sequence of child entities
pub trait TreeNode: Entity + Sized {
    fn children(&self) -> &[Arc<Self>];

    /// Leaves never show an expand affordance
    fn has_children(&self) -> bool {
        !self.children().is_empty()
    }
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
