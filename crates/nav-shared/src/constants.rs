//! Application-wide constants

/// Droppable id the drag-and-drop layer uses for the top-level list.
pub const ROOT_DROPPABLE_ID: &str = "main";
/// Prefix for ids generated at runtime.
pub const GENERATED_ID_PREFIX: &str = "nav-";
/// Href given to new items created without one.
pub const PLACEHOLDER_HREF: &str = "#";
pub const DEFAULT_MAX_DEPTH: u32 = 5;
