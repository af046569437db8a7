//! Read-only views derived from the flat store.
//!
//! Nothing here is cached: every call recomputes from the current items.

use serde::Serialize;

use crate::domain::{GroupKey, NavItem, NavItemId};
use crate::error::DomainError;
use crate::store::NavStore;

/// Which items a nested menu includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityFilter {
    /// Every item; the admin editor view.
    All,
    /// Visible items only. A hidden item hides its whole subtree.
    VisibleOnly,
}

/// One node of the nested menu rendered by the site header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavTreeNode {
    pub id: NavItemId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    pub is_external: bool,
    pub open_in_new_tab: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavTreeNode>,
}

impl NavStore {
    /// Top-level items sorted by `order`.
    pub fn top_level(&self) -> Vec<&NavItem> {
        self.group(&GroupKey::Root)
    }

    /// Direct children of `id` sorted by `order`. Unknown ids have no children.
    pub fn children_of(&self, id: &NavItemId) -> Vec<&NavItem> {
        self.group(&GroupKey::Parent(id.clone()))
    }

    /// Members of a sibling group sorted by `order`, ties broken by id.
    pub fn group(&self, group: &GroupKey) -> Vec<&NavItem> {
        let parent = group.parent_id();
        let mut members: Vec<&NavItem> = self
            .iter()
            .filter(|item| item.parent_id.as_ref() == parent)
            .collect();
        // iter() is already in id order, so a stable sort breaks ties by id.
        members.sort_by_key(|item| item.order);
        members
    }

    /// Index of `id` within its own sibling group.
    pub fn position_of(&self, id: &NavItemId) -> Result<usize, DomainError> {
        let item = self.require(id)?;
        self.group(&item.group())
            .iter()
            .position(|sibling| sibling.id == *id)
            .ok_or_else(|| DomainError::NotFound(id.clone()))
    }

    /// Parent chain of `id`, nearest first.
    pub fn ancestors_of(&self, id: &NavItemId) -> Result<Vec<&NavItem>, DomainError> {
        let item = self.require(id)?;
        let mut chain = Vec::new();
        let mut cursor = item.parent_id.as_ref();
        while let Some(parent_id) = cursor {
            // The store is acyclic, so the chain can never outgrow the store.
            if chain.len() >= self.len() {
                break;
            }
            let parent = self
                .get(parent_id)
                .ok_or_else(|| DomainError::ParentNotFound(parent_id.clone()))?;
            chain.push(parent);
            cursor = parent.parent_id.as_ref();
        }
        Ok(chain)
    }

    /// Level of `id` in the menu; top-level items are level 1.
    pub fn depth_of(&self, id: &NavItemId) -> Result<u32, DomainError> {
        Ok(self.ancestors_of(id)?.len() as u32 + 1)
    }

    /// Levels spanned by `id` and everything below it (a leaf spans 1).
    pub fn subtree_height(&self, id: &NavItemId) -> u32 {
        1 + self
            .children_of(id)
            .iter()
            .map(|child| self.subtree_height(&child.id))
            .max()
            .unwrap_or(0)
    }

    /// Whether `ancestor` appears on the parent chain of `candidate`.
    pub fn is_descendant_of(&self, candidate: &NavItemId, ancestor: &NavItemId) -> Result<bool, DomainError> {
        Ok(self
            .ancestors_of(candidate)?
            .iter()
            .any(|item| item.id == *ancestor))
    }

    /// Ids of every item below `id`, depth first.
    pub fn descendants_of(&self, id: &NavItemId) -> Vec<NavItemId> {
        let mut out = Vec::new();
        for child in self.children_of(id) {
            out.push(child.id.clone());
            out.extend(self.descendants_of(&child.id));
        }
        out
    }

    /// Nested menu built from the flat store.
    pub fn menu_tree(&self, filter: VisibilityFilter) -> Vec<NavTreeNode> {
        self.build_nodes(&GroupKey::Root, filter)
    }

    fn build_nodes(&self, group: &GroupKey, filter: VisibilityFilter) -> Vec<NavTreeNode> {
        self.group(group)
            .into_iter()
            .filter(|item| filter == VisibilityFilter::All || item.is_visible)
            .map(|item| NavTreeNode {
                id: item.id.clone(),
                title: item.title.clone(),
                href: item.href.clone(),
                is_external: item.is_external,
                open_in_new_tab: item.open_in_new_tab,
                children: self.build_nodes(&GroupKey::Parent(item.id.clone()), filter),
            })
            .collect()
    }
}
