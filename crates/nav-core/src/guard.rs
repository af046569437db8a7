//! Deletion guard.
//!
//! An item with children cannot be removed; the children must be deleted or
//! moved first. A successful delete renumbers the remaining siblings so the
//! group stays contiguous.

use crate::domain::{NavItem, NavItemId};
use crate::error::DomainError;
use crate::reorder::MovePlan;
use crate::store::NavStore;

impl NavStore {
    /// True iff `id` has no children.
    pub fn can_delete(&self, id: &NavItemId) -> bool {
        self.children_of(id).is_empty()
    }

    /// Checks that `id` may be removed and computes the sibling compaction.
    pub fn plan_delete(&self, id: &NavItemId) -> Result<MovePlan, DomainError> {
        let item = self.require(id)?;
        let child_count = self.children_of(id).len();
        if child_count > 0 {
            return Err(DomainError::HasChildren {
                id: id.clone(),
                child_count,
            });
        }

        let group = item.group();
        let remaining: Vec<&NavItem> = self
            .group(&group)
            .into_iter()
            .filter(|sibling| sibling.id != *id)
            .collect();
        let mut plan = MovePlan::empty();
        plan.renumber(&remaining, &group);
        Ok(plan)
    }

    /// Removes a childless item and compacts its former siblings.
    pub fn delete(&mut self, id: &NavItemId) -> Result<NavItem, DomainError> {
        let plan = self.plan_delete(id)?;
        let removed = self
            .remove(id)
            .ok_or_else(|| DomainError::NotFound(id.clone()))?;
        self.apply(&plan);
        Ok(removed)
    }
}
