//! Navigation item repository trait (port)

use async_trait::async_trait;

use crate::domain::NavItem;
use crate::error::DomainError;

/// Backing collection for the navigation menu.
///
/// The editor always writes the whole collection at once, so the port is a
/// load / replace pair rather than per-item CRUD.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NavItemRepository: Send + Sync {
    async fn load_all(&self) -> Result<Vec<NavItem>, DomainError>;
    async fn replace_all(&self, items: Vec<NavItem>) -> Result<(), DomainError>;
}
