//! Invariants of the navigation store over sequences of edits.

use std::collections::BTreeSet;

use nav_core::reorder::plan_move;
use nav_core::seed::default_nav_items;
use nav_core::{DomainError, GroupKey, MoveRequest, NavItem, NavItemId, NavStore, NewNavItem};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MAX_DEPTH: u32 = 5;

fn seeded_store() -> NavStore {
    NavStore::from_items(default_nav_items()).unwrap()
}

fn item(id: &str, title: &str, parent: Option<&str>, order: u32) -> NavItem {
    NavItem::with_id(id.into(), title.into(), Some(format!("/{}", id)), parent.map(NavItemId::from), order).unwrap()
}

fn all_groups(store: &NavStore) -> Vec<GroupKey> {
    let mut groups: Vec<GroupKey> = store.iter().map(|i| GroupKey::Parent(i.id.clone())).collect();
    groups.push(GroupKey::Root);
    groups
}

fn assert_contiguous(store: &NavStore) {
    for group in all_groups(store) {
        let orders: Vec<u32> = store.group(&group).iter().map(|i| i.order).collect();
        let expected: Vec<u32> = (0..orders.len() as u32).collect();
        assert_eq!(orders, expected, "group {} is not contiguous", group);
    }
}

fn assert_acyclic(store: &NavStore) {
    for item in store.iter() {
        let chain = store.ancestors_of(&item.id).unwrap();
        assert!(chain.len() < store.len(), "{} sits on a cycle", item.id);
        assert!(chain.iter().all(|a| a.id != item.id));
    }
}

fn group_ids(store: &NavStore, group: &GroupKey) -> Vec<String> {
    store.group(group).iter().map(|i| i.id.to_string()).collect()
}

fn random_move(store: &NavStore, rng: &mut StdRng) -> MoveRequest {
    let items: Vec<&NavItem> = store.iter().collect();
    let moved = items[rng.random_range(0..items.len())];
    let mut groups = all_groups(store);
    let dest_group = groups.swap_remove(rng.random_range(0..groups.len()));
    let dest_len = store.group(&dest_group).len();
    MoveRequest {
        moved_id: moved.id.clone(),
        source_group: moved.group(),
        source_index: store.position_of(&moved.id).unwrap(),
        dest_index: rng.random_range(0..=dest_len + 1),
        dest_group,
    }
}

#[test]
fn example_reorder_top_level() {
    let mut store = NavStore::from_items(vec![
        item("home", "Home", None, 0),
        item("about", "About", None, 1),
        item("training", "Training", None, 2),
    ])
    .unwrap();

    store
        .move_item(
            &MoveRequest {
                moved_id: "training".into(),
                source_group: GroupKey::Root,
                source_index: 2,
                dest_group: GroupKey::Root,
                dest_index: 0,
            },
            MAX_DEPTH,
        )
        .unwrap();

    let top: Vec<(String, u32)> = store.top_level().iter().map(|i| (i.title.clone(), i.order)).collect();
    assert_eq!(
        top,
        vec![("Training".into(), 0), ("Home".into(), 1), ("About".into(), 2)]
    );
}

#[test]
fn example_reparent_between_parents() {
    let mut store = NavStore::from_items(vec![
        item("about", "About", None, 0),
        item("story", "Story", Some("about"), 0),
        item("team", "Team", Some("about"), 1),
        item("training", "Training", None, 1),
    ])
    .unwrap();

    store
        .move_item(
            &MoveRequest {
                moved_id: "team".into(),
                source_group: GroupKey::Parent("about".into()),
                source_index: 1,
                dest_group: GroupKey::Parent("training".into()),
                dest_index: 0,
            },
            MAX_DEPTH,
        )
        .unwrap();

    let about: Vec<(String, u32)> = store.children_of(&"about".into()).iter().map(|i| (i.title.clone(), i.order)).collect();
    let training: Vec<(String, u32)> =
        store.children_of(&"training".into()).iter().map(|i| (i.title.clone(), i.order)).collect();
    assert_eq!(about, vec![("Story".into(), 0)]);
    assert_eq!(training, vec![("Team".into(), 0)]);
    assert_eq!(store.get(&"team".into()).unwrap().parent_id, Some("training".into()));
}

#[test]
fn random_moves_keep_invariants() {
    let mut rng = StdRng::seed_from_u64(0x6e61_7669);
    let mut store = seeded_store();
    let total = store.len();
    let mut applied = 0;

    for _ in 0..500 {
        let request = random_move(&store, &mut rng);
        let before = store.clone();
        let source_before: BTreeSet<String> = group_ids(&store, &request.source_group).into_iter().collect();
        let dest_len_before = store.group(&request.dest_group).len();

        match store.move_item(&request, MAX_DEPTH) {
            Ok(_) => {
                applied += 1;
                if request.is_reparent() {
                    assert_eq!(store.group(&request.source_group).len(), source_before.len() - 1);
                    assert_eq!(store.group(&request.dest_group).len(), dest_len_before + 1);
                    assert_eq!(store.get(&request.moved_id).unwrap().group(), request.dest_group);
                } else {
                    let after: BTreeSet<String> = group_ids(&store, &request.source_group).into_iter().collect();
                    assert_eq!(after, source_before);
                }
                // Nothing outside the two affected groups changes.
                for item in before.iter() {
                    let in_affected = item.group() == request.source_group || item.group() == request.dest_group;
                    if !in_affected {
                        assert_eq!(store.get(&item.id), Some(item));
                    }
                }
            }
            Err(DomainError::Cycle { .. }) | Err(DomainError::DepthExceeded { .. }) => {
                assert_eq!(store, before, "rejected move must not write");
            }
            Err(other) => panic!("unexpected error {:?} for {:?}", other, request),
        }

        assert_eq!(store.len(), total);
        assert_contiguous(&store);
        assert_acyclic(&store);
    }

    assert!(applied > 100, "only {} of 500 moves applied", applied);
}

#[test]
fn same_coordinates_leave_store_unchanged() {
    let mut store = seeded_store();
    for item in store.clone().iter() {
        let index = store.position_of(&item.id).unwrap();
        let before = store.clone();
        let plan = store
            .move_item(
                &MoveRequest {
                    moved_id: item.id.clone(),
                    source_group: item.group(),
                    source_index: index,
                    dest_group: item.group(),
                    dest_index: index,
                },
                MAX_DEPTH,
            )
            .unwrap();
        assert!(plan.is_empty());
        assert_eq!(store, before);
    }
}

#[test]
fn moving_under_any_descendant_is_a_cycle() {
    let store = seeded_store();
    let root = NavItemId::from("executive-training");
    let descendants = store.descendants_of(&root);
    assert_eq!(descendants.len(), 3);

    for target in descendants.iter().chain(std::iter::once(&root)) {
        let err = plan_move(
            &store,
            &MoveRequest {
                moved_id: root.clone(),
                source_group: GroupKey::Root,
                source_index: 3,
                dest_group: GroupKey::Parent(target.clone()),
                dest_index: 0,
            },
            MAX_DEPTH,
        )
        .unwrap_err();
        assert_eq!(err, DomainError::Cycle { moved: root.clone(), target: target.clone() });
    }
}

#[test]
fn deleting_parents_never_mutates() {
    let mut store = seeded_store();
    for parent in ["about", "training", "executive-training", "executive-ceo", "consulting"] {
        let before = store.clone();
        let err = store.delete(&parent.into()).unwrap_err();
        assert!(matches!(err, DomainError::HasChildren { .. }));
        assert_eq!(store, before);
    }
}

#[test]
fn mixed_edit_session_stays_contiguous() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut store = seeded_store();

    for step in 0..300 {
        match rng.random_range(0..3) {
            0 => {
                let parents: Vec<Option<NavItemId>> = std::iter::once(None)
                    .chain(store.iter().map(|i| Some(i.id.clone())))
                    .collect();
                let parent = parents[rng.random_range(0..parents.len())].clone();
                let mut new_item = NewNavItem::new(format!("Page {}", step), format!("/page-{}", step));
                new_item.parent_id = parent;
                match store.create(new_item, MAX_DEPTH) {
                    Ok(_) | Err(DomainError::DepthExceeded { .. }) => {}
                    Err(other) => panic!("unexpected create error {:?}", other),
                }
            }
            1 => {
                if store.is_empty() {
                    continue;
                }
                let items: Vec<NavItemId> = store.iter().map(|i| i.id.clone()).collect();
                let id = &items[rng.random_range(0..items.len())];
                let deletable = store.can_delete(id);
                match store.delete(id) {
                    Ok(_) => assert!(deletable),
                    Err(DomainError::HasChildren { .. }) => assert!(!deletable),
                    Err(other) => panic!("unexpected delete error {:?}", other),
                }
            }
            _ => {
                if store.is_empty() {
                    continue;
                }
                let request = random_move(&store, &mut rng);
                let _ = store.move_item(&request, MAX_DEPTH);
            }
        }

        assert_contiguous(&store);
        assert_acyclic(&store);
        for item in store.iter() {
            assert!(store.depth_of(&item.id).unwrap() <= MAX_DEPTH);
        }
    }
}
