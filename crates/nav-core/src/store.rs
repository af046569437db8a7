//! Flat arena of navigation items keyed by id.
//!
//! Hierarchy lives only in each item's `parent_id` and `order`; nested views
//! are derived on demand (see [`crate::tree`]) and never stored.

use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use crate::domain::{GroupKey, NavItem, NavItemId, NewNavItem};
use crate::error::DomainError;
use crate::reorder::MovePlan;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavStore {
    items: BTreeMap<NavItemId, NavItem>,
}

impl NavStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a loaded collection.
    ///
    /// Rejects duplicate ids, dangling parents, and parent cycles, then
    /// renumbers every sibling group to `0..n-1` keeping the relative order.
    pub fn from_items(items: impl IntoIterator<Item = NavItem>) -> Result<Self, DomainError> {
        let mut map = BTreeMap::new();
        for item in items {
            if map.contains_key(&item.id) {
                return Err(DomainError::DuplicateId(item.id));
            }
            map.insert(item.id.clone(), item);
        }

        for item in map.values() {
            if let Some(parent) = &item.parent_id {
                if !map.contains_key(parent) {
                    return Err(DomainError::ParentNotFound(parent.clone()));
                }
            }
        }

        for item in map.values() {
            let mut seen = HashSet::new();
            seen.insert(&item.id);
            let mut cursor = item.parent_id.as_ref();
            while let Some(parent) = cursor {
                if !seen.insert(parent) {
                    return Err(DomainError::Cycle {
                        moved: item.id.clone(),
                        target: parent.clone(),
                    });
                }
                cursor = map.get(parent).and_then(|p| p.parent_id.as_ref());
            }
        }

        let mut store = Self { items: map };
        store.normalize_orders();
        Ok(store)
    }

    fn normalize_orders(&mut self) {
        let mut groups: BTreeMap<GroupKey, Vec<(u32, NavItemId)>> = BTreeMap::new();
        for item in self.items.values() {
            groups
                .entry(item.group())
                .or_default()
                .push((item.order, item.id.clone()));
        }
        for (group, mut members) in groups {
            members.sort();
            for (index, (order, id)) in members.into_iter().enumerate() {
                let index = index as u32;
                if order != index {
                    debug!(%group, %id, from = order, to = index, "normalizing order");
                    if let Some(item) = self.items.get_mut(&id) {
                        item.order = index;
                    }
                }
            }
        }
    }

    pub fn get(&self, id: &NavItemId) -> Option<&NavItem> {
        self.items.get(id)
    }

    pub fn require(&self, id: &NavItemId) -> Result<&NavItem, DomainError> {
        self.items
            .get(id)
            .ok_or_else(|| DomainError::NotFound(id.clone()))
    }

    pub fn contains(&self, id: &NavItemId) -> bool {
        self.items.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items in id order.
    pub fn iter(&self) -> impl Iterator<Item = &NavItem> {
        self.items.values()
    }

    /// Snapshot of the whole collection, for the persistence call.
    pub fn items(&self) -> Vec<NavItem> {
        self.items.values().cloned().collect()
    }

    /// Inserts a new item at the end of its parent's group.
    pub fn create(&mut self, new_item: NewNavItem, max_depth: u32) -> Result<&NavItem, DomainError> {
        let group = GroupKey::from(new_item.parent_id.clone());
        let depth = match group.parent_id() {
            Some(parent) => {
                self.require(parent)
                    .map_err(|_| DomainError::ParentNotFound(parent.clone()))?;
                self.depth_of(parent)? + 1
            }
            None => 1,
        };
        if depth > max_depth {
            return Err(DomainError::DepthExceeded { max_depth });
        }

        let order = self.group(&group).len() as u32;
        let mut item = NavItem::new(new_item.title, new_item.href, new_item.parent_id, order)?;
        item.is_visible = new_item.is_visible;
        item.is_external = new_item.is_external;
        item.open_in_new_tab = new_item.open_in_new_tab;

        let id = item.id.clone();
        self.insert(item)?;
        self.require(&id)
    }

    pub(crate) fn insert(&mut self, item: NavItem) -> Result<(), DomainError> {
        if self.items.contains_key(&item.id) {
            return Err(DomainError::DuplicateId(item.id));
        }
        self.items.insert(item.id.clone(), item);
        Ok(())
    }

    pub(crate) fn get_mut(&mut self, id: &NavItemId) -> Option<&mut NavItem> {
        self.items.get_mut(id)
    }

    pub(crate) fn remove(&mut self, id: &NavItemId) -> Option<NavItem> {
        self.items.remove(id)
    }

    /// Writes every placement of `plan` in one step. Returns how many items
    /// were rewritten.
    pub fn apply(&mut self, plan: &MovePlan) -> usize {
        let mut written = 0;
        for placement in plan.placements() {
            if let Some(item) = self.items.get_mut(&placement.id) {
                item.order = placement.order;
                item.parent_id = placement.parent_id.clone();
                item.touch();
                written += 1;
            }
        }
        written
    }
}
