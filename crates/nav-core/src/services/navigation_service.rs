// ============================================================================
// Nav Core - Navigation Service
// File: crates/nav-core/src/services/navigation_service.rs
// ============================================================================
//! Navigation editor service: CRUD, drag-and-drop moves, and save

use std::collections::HashSet;
use std::sync::Arc;

use nav_shared::config::NavigationSettings;
use tracing::{error, info, warn};
use validator::Validate;

use crate::domain::{GroupKey, NavItem, NavItemChanges, NavItemId, NewNavItem};
use crate::error::DomainError;
use crate::reorder::{plan_move, DragOutcome, MovePlan, MoveRequest};
use crate::repositories::NavItemRepository;
use crate::seed::default_nav_items;
use crate::store::NavStore;
use crate::tree::{NavTreeNode, VisibilityFilter};

/// Single-writer editing session over the navigation menu.
///
/// All mutations run synchronously against the in-process store; only
/// [`load`](Self::load) and [`save`](Self::save) touch the repository.
pub struct NavigationService<R: NavItemRepository> {
    repo: Arc<R>,
    store: NavStore,
    settings: NavigationSettings,
    unsaved_changes: bool,
}

impl<R: NavItemRepository> NavigationService<R> {
    /// Loads the menu from the repository, seeding the default menu when the
    /// repository is empty and `seed_defaults` is set.
    pub async fn load(repo: Arc<R>, settings: NavigationSettings) -> Result<Self, DomainError> {
        let items = repo.load_all().await?;
        let (items, seeded) = if items.is_empty() && settings.seed_defaults {
            info!("Navigation repository empty, installing default menu");
            (default_nav_items(), true)
        } else {
            (items, false)
        };

        let store = NavStore::from_items(items).map_err(|e| {
            error!("Stored navigation is inconsistent: {}", e);
            e
        })?;
        info!(items = store.len(), seeded, "Navigation loaded");

        Ok(Self {
            repo,
            store,
            settings,
            unsaved_changes: seeded,
        })
    }

    pub fn store(&self) -> &NavStore {
        &self.store
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved_changes
    }

    pub fn top_level(&self) -> Vec<&NavItem> {
        self.store.top_level()
    }

    pub fn children_of(&self, id: &NavItemId) -> Vec<&NavItem> {
        self.store.children_of(id)
    }

    pub fn menu_tree(&self, filter: VisibilityFilter) -> Vec<NavTreeNode> {
        self.store.menu_tree(filter)
    }

    /// Adds an item at the end of its parent's group.
    pub fn create(&mut self, new_item: NewNavItem) -> Result<NavItem, DomainError> {
        let title = new_item.title.clone();
        match self.store.create(new_item, self.settings.max_depth) {
            Ok(item) => {
                let item = item.clone();
                self.unsaved_changes = true;
                info!(id = %item.id, group = %item.group(), order = item.order, "Navigation item added: {}", title);
                Ok(item)
            }
            Err(e) => Err(log_rejection("create", e)),
        }
    }

    /// Edits an item. Parent/order changes are routed through the reorder
    /// engine; nothing is written unless every check passes.
    pub fn update(&mut self, id: &NavItemId, changes: NavItemChanges) -> Result<NavItem, DomainError> {
        match self.try_update(id, &changes) {
            Ok(item) => {
                info!(id = %id, top_level = item.group().is_root(), "Navigation item updated");
                Ok(item)
            }
            Err(e) => Err(log_rejection("update", e)),
        }
    }

    fn try_update(&mut self, id: &NavItemId, changes: &NavItemChanges) -> Result<NavItem, DomainError> {
        let current = self.store.require(id)?.clone();
        let mut patched = current.clone();
        changes.apply_fields(&mut patched);
        patched.validate()?;

        let plan = if changes.is_structural() {
            let source_group = current.group();
            let source_index = self.store.position_of(id)?;
            let dest_group = changes.parent.clone().unwrap_or_else(|| source_group.clone());
            let dest_index = match changes.order {
                Some(order) => order as usize,
                None if dest_group != source_group => self.store.group(&dest_group).len(),
                None => source_index,
            };
            let request = MoveRequest {
                moved_id: id.clone(),
                source_group,
                source_index,
                dest_group,
                dest_index,
            };
            plan_move(&self.store, &request, self.settings.max_depth)?
        } else {
            MovePlan::empty()
        };

        let fields_changed = patched != current;
        if fields_changed {
            if let Some(item) = self.store.get_mut(id) {
                changes.apply_fields(item);
                item.touch();
            }
        }
        self.store.apply(&plan);
        if fields_changed || !plan.is_empty() {
            self.unsaved_changes = true;
        }

        Ok(self.store.require(id)?.clone())
    }

    pub fn can_delete(&self, id: &NavItemId) -> bool {
        self.store.can_delete(id)
    }

    /// Deletes a childless item.
    pub fn delete(&mut self, id: &NavItemId) -> Result<NavItem, DomainError> {
        match self.store.delete(id) {
            Ok(item) => {
                self.unsaved_changes = true;
                info!(id = %id, "Navigation item deleted: {}", item.title);
                Ok(item)
            }
            Err(e) => Err(log_rejection("delete", e)),
        }
    }

    /// Applies one reorder/reparent move.
    pub fn move_item(&mut self, request: &MoveRequest) -> Result<MovePlan, DomainError> {
        match self.store.move_item(request, self.settings.max_depth) {
            Ok(plan) => {
                if !plan.is_empty() {
                    self.unsaved_changes = true;
                }
                info!(
                    moved = %request.moved_id,
                    from = %request.source_group,
                    to = %request.dest_group,
                    index = request.dest_index,
                    updated = plan.len(),
                    "Navigation item moved"
                );
                Ok(plan)
            }
            Err(e) => Err(log_rejection("move", e)),
        }
    }

    /// Applies a raw drag-and-drop result. Drops outside any list do nothing.
    pub fn apply_drag(&mut self, outcome: DragOutcome) -> Result<Option<MovePlan>, DomainError> {
        match outcome.into_move() {
            Some(request) => self.move_item(&request).map(Some),
            None => Ok(None),
        }
    }

    /// Items `id` could be re-parented under without creating a cycle or
    /// breaking the depth limit, in menu order.
    pub fn parent_candidates(&self, id: &NavItemId) -> Result<Vec<&NavItem>, DomainError> {
        self.store.require(id)?;
        let height = self.store.subtree_height(id);
        let mut excluded: HashSet<NavItemId> = self.store.descendants_of(id).into_iter().collect();
        excluded.insert(id.clone());

        let mut out = Vec::new();
        self.collect_candidates(&GroupKey::Root, 1, height, &excluded, &mut out);
        Ok(out)
    }

    fn collect_candidates<'a>(
        &'a self,
        group: &GroupKey,
        depth: u32,
        height: u32,
        excluded: &HashSet<NavItemId>,
        out: &mut Vec<&'a NavItem>,
    ) {
        for item in self.store.group(group) {
            if excluded.contains(&item.id) {
                continue;
            }
            if depth + height <= self.settings.max_depth {
                out.push(item);
            }
            self.collect_candidates(&GroupKey::Parent(item.id.clone()), depth + 1, height, excluded, out);
        }
    }

    /// Writes the whole collection back to the repository.
    pub async fn save(&mut self) -> Result<usize, DomainError> {
        let items = self.store.items();
        let count = items.len();
        match self.repo.replace_all(items).await {
            Ok(()) => {
                self.unsaved_changes = false;
                info!(items = count, "Navigation saved");
                Ok(count)
            }
            Err(e) => {
                error!("Failed to save navigation: {}", e);
                Err(e)
            }
        }
    }
}

fn log_rejection(operation: &str, err: DomainError) -> DomainError {
    if err.is_programming_fault() {
        error!(operation, "Navigation operation aborted: {}", err);
    } else {
        warn!(operation, "Navigation operation rejected: {}", err);
    }
    err
}
