// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Entity set algebra verification tests

use anyhow::Result;
use meshkernel::config::EntitySetConfig;
use meshkernel::entity::{
    complement, intersect, make_entity_set, merge, subtract, EntityId, EntityKind, EntitySelector,
    EntitySet, EntityTable, Mesh,
};
use std::sync::Arc;

/// Cells 1..=5, all owned by this process
fn universe() -> Arc<dyn Mesh> {
    Arc::new(EntityTable::new().with_entities(EntityKind::Cell, vec![1, 2, 3, 4, 5], vec![]))
}

fn members(set: &EntitySet) -> Vec<EntityId> {
    let mut ids = set.entities(EntitySelector::All).to_vec();
    ids.sort_unstable();
    ids
}

#[test]
fn test_owned_and_ghost_counts() {
    let mesh: Arc<dyn Mesh> = Arc::new(EntityTable::new().with_range(EntityKind::Cell, 4, 2));
    let set = make_entity_set("material", mesh, EntityKind::Cell, vec![1, 2, 3], vec![4, 5], true);

    assert_eq!(set.entities(EntitySelector::All), &[1, 2, 3, 4, 5]);
    assert_eq!(set.num_entities(EntitySelector::Owned), 3);
    assert_eq!(set.num_entities(EntitySelector::Ghost), 2);
    assert_eq!(set.num_entities(EntitySelector::All), 5);
}

#[test]
fn test_two_set_algebra() -> Result<()> {
    let mesh = universe();
    let a = make_entity_set("A", mesh.clone(), EntityKind::Cell, vec![1, 2, 3], vec![], true);
    let b = make_entity_set("B", mesh, EntityKind::Cell, vec![3, 4], vec![], true);

    let union = merge(&[a.clone(), b.clone()], true)?;
    let common = intersect(&[a.clone(), b.clone()], true)?;
    let difference = subtract(&a, &[b.clone()], true)?;
    let rest = complement(&[a, b], true)?;

    println!("{} = {:?}", union.name(), members(&union));
    println!("{} = {:?}", common.name(), members(&common));
    println!("{} = {:?}", difference.name(), members(&difference));
    println!("{} = {:?}", rest.name(), members(&rest));

    assert_eq!(members(&union), vec![1, 2, 3, 4]);
    assert_eq!(members(&common), vec![3]);
    assert_eq!(members(&difference), vec![1, 2]);
    assert_eq!(members(&rest), vec![5]);
    assert!(union.is_temporary());
    Ok(())
}

#[test]
fn test_double_complement_restores_membership() -> Result<()> {
    let mesh: Arc<dyn Mesh> = Arc::new(
        EntityTable::new().with_entities(EntityKind::Face, vec![0, 1, 2, 3, 4, 5], vec![6, 7, 8]),
    );
    let set = make_entity_set("wall", mesh, EntityKind::Face, vec![1, 4], vec![7], true);

    let outside = complement(&[set.clone()], true)?;
    let back = complement(&[outside.clone()], false)?;

    assert_eq!(members(&outside), vec![0, 2, 3, 5, 6, 8]);
    assert_eq!(members(&back), members(&set));
    assert_eq!(back.entities(EntitySelector::Owned), set.entities(EntitySelector::Owned));
    assert_eq!(back.entities(EntitySelector::Ghost), set.entities(EntitySelector::Ghost));
    Ok(())
}

#[test]
fn test_merge_ownership_comes_from_mesh() -> Result<()> {
    // Process owns 0..4, holds ghosts 4..6
    let mesh: Arc<dyn Mesh> = Arc::new(EntityTable::new().with_range(EntityKind::Node, 4, 2));
    // A set that (wrongly) lists an owned node as a ghost
    let a = make_entity_set("a", mesh.clone(), EntityKind::Node, vec![], vec![3, 5], true);
    let b = make_entity_set("b", mesh, EntityKind::Node, vec![0, 3], vec![], true);

    let ab = merge(&[a.clone(), b.clone()], false)?;
    let ba = merge(&[b, a], false)?;

    assert_eq!(ab.entities(EntitySelector::Owned), &[0, 3]);
    assert_eq!(ab.entities(EntitySelector::Ghost), &[5]);
    assert_eq!(ab.entities(EntitySelector::All), ba.entities(EntitySelector::All));
    Ok(())
}

#[test]
fn test_config_controls_reverse_map() {
    let mesh: Arc<dyn Mesh> = Arc::new(EntityTable::new().with_range(EntityKind::Cell, 10, 0));
    let lean = EntitySetConfig {
        build_reverse_map: false,
    };
    let set = EntitySet::with_config("lean", mesh, EntityKind::Cell, vec![2, 9], vec![], &lean);

    assert!(!set.has_reverse_map());
    assert_eq!(set.index_in_set(9), None);
    assert!(set.contains(9));
}

#[test]
fn test_reverse_map_ignores_ids_beyond_mesh() {
    let mesh: Arc<dyn Mesh> = Arc::new(EntityTable::new().with_range(EntityKind::Cell, 4, 0));
    let set = EntitySet::new("stray", mesh, EntityKind::Cell, vec![1, usize::MAX], vec![], true);

    assert_eq!(set.index_in_set(1), Some(0));
    assert_eq!(set.index_in_set(usize::MAX), None);
    assert!(set.contains(usize::MAX));
    assert_eq!(set.num_entities(EntitySelector::Owned), 2);
}

#[cfg(feature = "state-access")]
#[test]
fn test_state_access_sees_raw_storage() {
    use meshkernel::entity::{SetStorage, StateAccess};

    let mesh: Arc<dyn Mesh> = Arc::new(EntityTable::new().with_range(EntityKind::Cell, 3, 1));
    let set = make_entity_set("fluid", mesh, EntityKind::Cell, vec![0, 2], vec![3], true);

    let access = StateAccess::grant();
    let storage: SetStorage<'_> = set.storage(&access);
    assert_eq!(storage.all, &[0, 2, 3]);
    assert_eq!(storage.reverse_map, &[Some(0), None, Some(1), Some(2)]);

    let density = [1.0, 2.0, 3.0, 4.0];
    assert_eq!(
        storage.gather(&density, EntitySelector::All),
        Some(vec![1.0, 3.0, 4.0])
    );
}
