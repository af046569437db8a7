//! # Nav Core
//! 
//! Navigation menu entities, the flat item store, tree views over it, the
//! drag-and-drop reorder engine, and the editing service.

pub mod domain;
pub mod error;
pub mod store;
pub mod tree;
pub mod reorder;
pub mod guard;
pub mod seed;
pub mod repositories;
pub mod services;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
pub use store::NavStore;
pub use tree::{NavTreeNode, VisibilityFilter};
pub use reorder::{DragOutcome, DropLocation, MovePlan, MoveRequest, Placement};
pub use services::NavigationService;
