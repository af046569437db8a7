//! Domain errors

use thiserror::Error;

use crate::domain::{GroupKey, NavItemId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Navigation item not found: {0}")]
    NotFound(NavItemId),

    #[error("Parent navigation item not found: {0}")]
    ParentNotFound(NavItemId),

    #[error("Navigation item {id} has {child_count} child item(s); delete or move the children first")]
    HasChildren { id: NavItemId, child_count: usize },

    #[error("Cannot move {moved} under {target}: the target is the item itself or one of its descendants")]
    Cycle { moved: NavItemId, target: NavItemId },

    #[error("Navigation item {id} belongs to group {actual}, not {expected}")]
    GroupMismatch {
        id: NavItemId,
        expected: GroupKey,
        actual: GroupKey,
    },

    #[error("Navigation depth would exceed the maximum of {max_depth} levels")]
    DepthExceeded { max_depth: u32 },

    #[error("Duplicate navigation item id: {0}")]
    DuplicateId(NavItemId),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    /// Errors that mean the caller's view of the store is out of sync,
    /// rather than a rule the user tripped over.
    pub fn is_programming_fault(&self) -> bool {
        matches!(
            self,
            DomainError::NotFound(_) | DomainError::ParentNotFound(_) | DomainError::GroupMismatch { .. }
        )
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(errors.to_string())
    }
}
