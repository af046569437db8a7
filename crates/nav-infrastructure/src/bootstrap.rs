//! Wires configuration, repository, and service together.

use std::sync::Arc;

use nav_core::error::DomainError;
use nav_core::NavigationService;
use nav_shared::config::AppConfig;
use nav_shared::telemetry::init_telemetry;
use tracing::info;

use crate::memory::InMemoryNavItemRepository;

pub type InMemoryNavigationService = NavigationService<InMemoryNavItemRepository>;

/// Opens an editing session backed by a fresh in-memory repository.
pub async fn bootstrap(config: &AppConfig) -> Result<(InMemoryNavigationService, Arc<InMemoryNavItemRepository>), DomainError> {
    info!(
        app = %config.app.name,
        env = %config.app.env,
        max_depth = config.navigation.max_depth,
        "Starting navigation editor"
    );
    let repo = Arc::new(InMemoryNavItemRepository::new(&config.persistence));
    let service = NavigationService::load(repo.clone(), config.navigation.clone()).await?;
    Ok((service, repo))
}

/// Loads `AppConfig` from files and environment, installs the tracing
/// subscriber, then opens the session.
pub async fn bootstrap_from_env() -> anyhow::Result<(InMemoryNavigationService, Arc<InMemoryNavItemRepository>)> {
    let config = AppConfig::load()?;
    init_telemetry(&config.logging)?;
    let session = bootstrap(&config).await?;
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nav_core::VisibilityFilter;

    #[tokio::test]
    async fn test_bootstrap_seeds_and_saves() {
        let config = AppConfig::from_toml_str("[navigation]\nmax_depth = 4\n").unwrap();
        let (mut service, repo) = bootstrap(&config).await.unwrap();
        assert_eq!(service.menu_tree(VisibilityFilter::VisibleOnly).len(), 8);
        assert!(service.has_unsaved_changes());

        service.save().await.unwrap();
        assert_eq!(repo.snapshot().await.len(), 22);
    }

    #[tokio::test]
    async fn test_bootstrap_from_env_loads_config_and_logging() {
        let (service, repo) = bootstrap_from_env().await.unwrap();
        assert_eq!(service.store().len(), 22);
        assert_eq!(repo.write_count(), 0);
        assert!(tracing::dispatcher::has_been_set());
    }

    #[tokio::test]
    async fn test_bootstrap_without_seed() {
        let config = AppConfig::from_toml_str("[navigation]\nseed_defaults = false\n").unwrap();
        let (service, _repo) = bootstrap(&config).await.unwrap();
        assert!(service.store().is_empty());
    }
}
