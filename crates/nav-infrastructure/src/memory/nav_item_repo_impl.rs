// ============================================================================
// Nav Infrastructure - In-Memory Navigation Repository
// File: crates/nav-infrastructure/src/memory/nav_item_repo_impl.rs
// ============================================================================

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use nav_core::domain::NavItem;
use nav_core::error::DomainError;
use nav_core::repositories::NavItemRepository;
use nav_shared::config::PersistenceSettings;

/// Keeps the navigation collection in process memory.
///
/// Writes wait `simulated_latency_ms` first, standing in for a backend round
/// trip.
pub struct InMemoryNavItemRepository {
    items: RwLock<Vec<NavItem>>,
    latency: Duration,
    writes: AtomicU64,
}

impl InMemoryNavItemRepository {
    pub fn new(settings: &PersistenceSettings) -> Self {
        Self::with_items(settings, Vec::new())
    }

    pub fn with_items(settings: &PersistenceSettings, items: Vec<NavItem>) -> Self {
        Self {
            items: RwLock::new(items),
            latency: Duration::from_millis(settings.simulated_latency_ms),
            writes: AtomicU64::new(0),
        }
    }

    /// Loads a collection serialized as a JSON array of items.
    pub fn from_json(settings: &PersistenceSettings, json: &str) -> anyhow::Result<Self> {
        let items: Vec<NavItem> = serde_json::from_str(json)?;
        Ok(Self::with_items(settings, items))
    }

    /// Number of completed `replace_all` calls.
    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }

    pub async fn snapshot(&self) -> Vec<NavItem> {
        self.items.read().await.clone()
    }
}

#[async_trait]
impl NavItemRepository for InMemoryNavItemRepository {
    async fn load_all(&self) -> Result<Vec<NavItem>, DomainError> {
        let items = self.items.read().await.clone();
        debug!(items = items.len(), "Loaded navigation collection");
        Ok(items)
    }

    async fn replace_all(&self, items: Vec<NavItem>) -> Result<(), DomainError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let count = items.len();
        *self.items.write().await = items;
        self.writes.fetch_add(1, Ordering::Relaxed);
        info!(items = count, "Navigation collection replaced");
        Ok(())
    }
}
