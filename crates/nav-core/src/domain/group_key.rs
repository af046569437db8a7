//! Sibling group addressing

use std::fmt;

use nav_shared::constants::ROOT_DROPPABLE_ID;
use serde::{Deserialize, Serialize};

use super::NavItemId;

/// Identifies a sibling group: the top-level list, or the children of one item.
///
/// Serializes as the parent id, with `null` for the top-level group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Option<NavItemId>", into = "Option<NavItemId>")]
pub enum GroupKey {
    Root,
    Parent(NavItemId),
}

impl GroupKey {
    /// Maps a drag-and-drop list id to a group; `"main"` is the top-level list.
    pub fn from_droppable(droppable_id: &str) -> Self {
        if droppable_id == ROOT_DROPPABLE_ID {
            GroupKey::Root
        } else {
            GroupKey::Parent(NavItemId::from(droppable_id))
        }
    }

    pub fn droppable_id(&self) -> &str {
        match self {
            GroupKey::Root => ROOT_DROPPABLE_ID,
            GroupKey::Parent(id) => id.as_str(),
        }
    }

    pub fn parent_id(&self) -> Option<&NavItemId> {
        match self {
            GroupKey::Root => None,
            GroupKey::Parent(id) => Some(id),
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, GroupKey::Root)
    }
}

impl From<Option<NavItemId>> for GroupKey {
    fn from(parent: Option<NavItemId>) -> Self {
        match parent {
            Some(id) => GroupKey::Parent(id),
            None => GroupKey::Root,
        }
    }
}

impl From<GroupKey> for Option<NavItemId> {
    fn from(group: GroupKey) -> Self {
        match group {
            GroupKey::Root => None,
            GroupKey::Parent(id) => Some(id),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Root => f.write_str("<root>"),
            GroupKey::Parent(id) => write!(f, "{}", id),
        }
    }
}
