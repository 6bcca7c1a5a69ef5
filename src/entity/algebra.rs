// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Set algebra over entity sets of one kind
//!
//! Every operation takes the mesh handle from its first input and returns
//! a new shared set. Results list owned ids before ghost ids, each part in
//! ascending id order, so repeated calls on the same inputs agree exactly.
//! Where an entity's ownership has to be decided (union, intersection,
//! complement) it is taken from the mesh's ownership oracle rather than
//! from whichever input happened to carry the id first.

use super::{EntityId, EntityKind, EntitySelector, EntitySet, Mesh};
use crate::error::{EntitySetError, EntitySetResult};
use ahash::AHashSet;
use std::sync::Arc;
use tracing::debug;

/// Union of sets
///
/// An entity the mesh reports as owned is owned in the result even if some
/// input only carried it as a ghost.
pub fn merge(sets: &[Arc<EntitySet>], temporary: bool) -> EntitySetResult<Arc<EntitySet>> {
    let first = check_kinds("merge", sets)?;

    let ids = union_of(sets);
    let (owned, ghost) = split_by_owner(first.mesh().as_ref(), first.kind(), ids);

    let name = joined_names(sets, "+");
    Ok(finish("merge", name, first, owned, ghost, temporary))
}

/// Entities of `set1` not present in any of `sets`
///
/// Survivors keep the partition they had in `set1`.
pub fn subtract(
    set1: &Arc<EntitySet>,
    sets: &[Arc<EntitySet>],
    temporary: bool,
) -> EntitySetResult<Arc<EntitySet>> {
    for other in sets {
        check_pair(set1, other)?;
    }

    let removed = union_of(sets);
    let keep = |selector| -> Vec<EntityId> {
        set1.entities(selector)
            .iter()
            .copied()
            .filter(|id| !removed.contains(id))
            .collect()
    };
    let owned = canonical(keep(EntitySelector::Owned));
    let ghost = canonical(keep(EntitySelector::Ghost));

    let mut name = set1.name().to_string();
    for other in sets {
        name.push('-');
        name.push_str(other.name());
    }
    Ok(finish("subtract", name, set1, owned, ghost, temporary))
}

/// Entities present in every input set
pub fn intersect(sets: &[Arc<EntitySet>], temporary: bool) -> EntitySetResult<Arc<EntitySet>> {
    let first = check_kinds("intersect", sets)?;

    let members: Vec<AHashSet<EntityId>> = sets[1..].iter().map(|s| membership(s)).collect();
    let common: AHashSet<EntityId> = first
        .entities(EntitySelector::All)
        .iter()
        .copied()
        .filter(|id| members.iter().all(|m| m.contains(id)))
        .collect();
    let (owned, ghost) = split_by_owner(first.mesh().as_ref(), first.kind(), common);

    let name = joined_names(sets, "*");
    Ok(finish("intersect", name, first, owned, ghost, temporary))
}

/// Every mesh entity of the shared kind that is in none of the sets
///
/// Owned and ghost entities of the mesh stay owned and ghost.
pub fn complement(sets: &[Arc<EntitySet>], temporary: bool) -> EntitySetResult<Arc<EntitySet>> {
    let first = check_kinds("complement", sets)?;
    let mesh = first.mesh();
    let kind = first.kind();

    let excluded = union_of(sets);
    let outside = |selector| -> Vec<EntityId> {
        mesh.entity_ids(kind, selector)
            .into_iter()
            .filter(|id| !excluded.contains(id))
            .collect()
    };
    let owned = canonical(outside(EntitySelector::Owned));
    let ghost = canonical(outside(EntitySelector::Ghost));

    let name = format!("!({})", joined_names(sets, "+"));
    Ok(finish("complement", name, first, owned, ghost, temporary))
}

/// Validate a non-empty input list of one kind; returns the first set
fn check_kinds<'a>(
    operation: &'static str,
    sets: &'a [Arc<EntitySet>],
) -> EntitySetResult<&'a Arc<EntitySet>> {
    let first = sets.first().ok_or(EntitySetError::EmptyInput { operation })?;
    for other in &sets[1..] {
        check_pair(first, other)?;
    }
    Ok(first)
}

fn check_pair(first: &EntitySet, other: &EntitySet) -> EntitySetResult<()> {
    if first.kind() != other.kind() {
        return Err(EntitySetError::MixedKinds {
            first: first.kind(),
            first_name: first.name().to_string(),
            other: other.kind(),
            other_name: other.name().to_string(),
        });
    }
    Ok(())
}

fn membership(set: &EntitySet) -> AHashSet<EntityId> {
    set.entities(EntitySelector::All).iter().copied().collect()
}

fn union_of(sets: &[Arc<EntitySet>]) -> AHashSet<EntityId> {
    sets.iter()
        .flat_map(|s| s.entities(EntitySelector::All).iter().copied())
        .collect()
}

fn split_by_owner(
    mesh: &dyn Mesh,
    kind: EntityKind,
    ids: impl IntoIterator<Item = EntityId>,
) -> (Vec<EntityId>, Vec<EntityId>) {
    let (owned, ghost): (Vec<_>, Vec<_>) = ids.into_iter().partition(|&id| mesh.is_owned(kind, id));
    (canonical(owned), canonical(ghost))
}

fn canonical(mut ids: Vec<EntityId>) -> Vec<EntityId> {
    ids.sort_unstable();
    ids.dedup();
    ids
}

fn joined_names(sets: &[Arc<EntitySet>], sep: &str) -> String {
    sets.iter().map(|s| s.name()).collect::<Vec<_>>().join(sep)
}

fn finish(
    operation: &'static str,
    name: String,
    template: &EntitySet,
    owned: Vec<EntityId>,
    ghost: Vec<EntityId>,
    temporary: bool,
) -> Arc<EntitySet> {
    debug!(
        operation,
        result = %name,
        owned = owned.len(),
        ghost = ghost.len(),
        temporary,
        "entity set algebra"
    );
    let set = EntitySet::new(
        name,
        Arc::clone(template.mesh()),
        template.kind(),
        owned,
        ghost,
        template.has_reverse_map(),
    );
    Arc::new(set.into_temporary(temporary))
}
