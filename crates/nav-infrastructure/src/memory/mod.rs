//! Process-resident adapters

pub mod nav_item_repo_impl;

pub use nav_item_repo_impl::InMemoryNavItemRepository;
