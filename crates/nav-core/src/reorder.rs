// ============================================================================
// Nav Core - Reorder / Reparent Engine
// File: crates/nav-core/src/reorder.rs
// Description: Applies one drag-and-drop move to the flat store
// ============================================================================
//! Moves are planned against an immutable store and written back in a single
//! [`NavStore::apply`] call. Every check runs before anything is written, so a
//! rejected move leaves the store untouched.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{GroupKey, NavItem, NavItemId};
use crate::error::DomainError;
use crate::store::NavStore;

/// One end of a drag gesture: a list and a position in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropLocation {
    pub droppable_id: String,
    pub index: usize,
}

impl DropLocation {
    pub fn new(droppable_id: impl Into<String>, index: usize) -> Self {
        Self {
            droppable_id: droppable_id.into(),
            index,
        }
    }
}

/// Raw result of a drag-and-drop gesture. `destination` is `None` when the
/// item was dropped outside every list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragOutcome {
    pub dragged_id: NavItemId,
    pub source: DropLocation,
    pub destination: Option<DropLocation>,
}

impl DragOutcome {
    pub fn into_move(self) -> Option<MoveRequest> {
        let destination = self.destination?;
        Some(MoveRequest {
            moved_id: self.dragged_id,
            source_group: GroupKey::from_droppable(&self.source.droppable_id),
            source_index: self.source.index,
            dest_group: GroupKey::from_droppable(&destination.droppable_id),
            dest_index: destination.index,
        })
    }
}

/// Engine input: move `moved_id` from `source_group[source_index]` to
/// `dest_group[dest_index]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub moved_id: NavItemId,
    pub source_group: GroupKey,
    pub source_index: usize,
    pub dest_group: GroupKey,
    pub dest_index: usize,
}

impl MoveRequest {
    pub fn is_same_position(&self) -> bool {
        self.source_group == self.dest_group && self.source_index == self.dest_index
    }

    pub fn is_reparent(&self) -> bool {
        self.source_group != self.dest_group
    }
}

/// New coordinates for one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub id: NavItemId,
    pub order: u32,
    pub parent_id: Option<NavItemId>,
}

/// Every coordinate change a move (or a compaction) needs.
///
/// Items already sitting at their target coordinates are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovePlan {
    placements: Vec<Placement>,
}

impl MovePlan {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Adds placements that renumber `sequence` to `0..n-1` under `group`.
    pub(crate) fn renumber(&mut self, sequence: &[&NavItem], group: &GroupKey) {
        let parent = group.parent_id();
        for (index, item) in sequence.iter().enumerate() {
            let order = index as u32;
            if item.order != order || item.parent_id.as_ref() != parent {
                self.placements.push(Placement {
                    id: item.id.clone(),
                    order,
                    parent_id: parent.cloned(),
                });
            }
        }
    }
}

/// Checks `request` against `store` and computes the resulting placements.
pub fn plan_move(store: &NavStore, request: &MoveRequest, max_depth: u32) -> Result<MovePlan, DomainError> {
    let moved = store.require(&request.moved_id)?;

    if let Some(parent) = request.source_group.parent_id() {
        if !store.contains(parent) {
            return Err(DomainError::ParentNotFound(parent.clone()));
        }
    }

    let actual = moved.group();
    if actual != request.source_group {
        return Err(DomainError::GroupMismatch {
            id: moved.id.clone(),
            expected: request.source_group.clone(),
            actual,
        });
    }

    if let Some(target) = request.dest_group.parent_id() {
        if !store.contains(target) {
            return Err(DomainError::ParentNotFound(target.clone()));
        }
        if *target == moved.id || store.is_descendant_of(target, &moved.id)? {
            return Err(DomainError::Cycle {
                moved: moved.id.clone(),
                target: target.clone(),
            });
        }
    }

    if request.is_same_position() {
        return Ok(MovePlan::empty());
    }

    let mut plan = MovePlan::empty();

    if !request.is_reparent() {
        let mut sequence: Vec<&NavItem> = store
            .group(&request.source_group)
            .into_iter()
            .filter(|item| item.id != moved.id)
            .collect();
        let index = request.dest_index.min(sequence.len());
        sequence.insert(index, moved);
        plan.renumber(&sequence, &request.source_group);
    } else {
        let dest_depth = match request.dest_group.parent_id() {
            Some(parent) => store.depth_of(parent)?,
            None => 0,
        };
        if dest_depth + store.subtree_height(&moved.id) > max_depth {
            return Err(DomainError::DepthExceeded { max_depth });
        }

        let remaining: Vec<&NavItem> = store
            .group(&request.source_group)
            .into_iter()
            .filter(|item| item.id != moved.id)
            .collect();
        plan.renumber(&remaining, &request.source_group);

        let mut destination = store.group(&request.dest_group);
        let index = request.dest_index.min(destination.len());
        destination.insert(index, moved);
        plan.renumber(&destination, &request.dest_group);
    }

    debug!(
        moved = %request.moved_id,
        from = %request.source_group,
        to = %request.dest_group,
        placements = plan.len(),
        "planned move"
    );
    Ok(plan)
}

impl NavStore {
    /// Plans and applies one move. Returns the applied plan.
    pub fn move_item(&mut self, request: &MoveRequest, max_depth: u32) -> Result<MovePlan, DomainError> {
        let plan = plan_move(self, request, max_depth)?;
        self.apply(&plan);
        Ok(plan)
    }
}
