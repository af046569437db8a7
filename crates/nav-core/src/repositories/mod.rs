//! Repository traits (ports)

pub mod nav_item_repository;

pub use nav_item_repository::NavItemRepository;

#[cfg(test)]
pub use nav_item_repository::MockNavItemRepository;
