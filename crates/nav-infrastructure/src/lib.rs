//! # Nav Infrastructure
//! 
//! Repository implementations (adapters) for the navigation store.

pub mod memory;
pub mod bootstrap;

pub use memory::InMemoryNavItemRepository;
pub use bootstrap::{bootstrap, bootstrap_from_env, InMemoryNavigationService};
