//! # Nav Core - Domain Module
//! 
//! Domain entities for the navigation editor.

pub mod nav_item;
pub mod group_key;

pub use nav_item::{NavItem, NavItemId, NewNavItem, NavItemChanges};
pub use group_key::GroupKey;
