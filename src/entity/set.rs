// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Entity set storage and queries

use super::{EntityId, EntityKind, EntitySelector, Mesh};
use crate::config::EntitySetConfig;
use crate::error::{EntitySetError, EntitySetResult};
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// A named group of mesh entities of one kind
///
/// Ids are split into the entities this process owns and the ghost copies
/// it holds; `entities(All)` is always owned followed by ghost. The mesh
/// handle and the kind are fixed at construction. Cloning copies the id
/// lists and shares the mesh handle.
#[derive(Clone)]
pub struct EntitySet {
    name: String,
    mesh: Arc<dyn Mesh>,
    kind: EntityKind,
    owned: Vec<EntityId>,
    ghost: Vec<EntityId>,
    all: Vec<EntityId>,
    /// Mesh id -> position in `all`, one slot per mesh entity of `kind`
    reverse_map: Option<Vec<Option<usize>>>,
    temporary: bool,
}

impl EntitySet {
    /// Create a set from externally assigned owned and ghost ids
    ///
    /// The reverse map costs one slot per mesh entity of `kind`; skip it
    /// when memory is tight and `index_in_set` is not needed. Ids at or
    /// beyond the mesh's entity count stay in the set but are left out of
    /// the map.
    pub fn new(
        name: impl Into<String>,
        mesh: Arc<dyn Mesh>,
        kind: EntityKind,
        owned: Vec<EntityId>,
        ghost: Vec<EntityId>,
        build_reverse_map: bool,
    ) -> Self {
        let all: Vec<EntityId> = owned.iter().chain(&ghost).copied().collect();
        let reverse_map =
            build_reverse_map.then(|| build_reverse_map_for(mesh.as_ref(), kind, &all));

        Self {
            name: name.into(),
            mesh,
            kind,
            owned,
            ghost,
            all,
            reverse_map,
            temporary: false,
        }
    }

    /// Create a set, taking the reverse map choice from configuration
    pub fn with_config(
        name: impl Into<String>,
        mesh: Arc<dyn Mesh>,
        kind: EntityKind,
        owned: Vec<EntityId>,
        ghost: Vec<EntityId>,
        config: &EntitySetConfig,
    ) -> Self {
        Self::new(name, mesh, kind, owned, ghost, config.build_reverse_map)
    }

    pub(super) fn raw_parts(&self) -> (&[EntityId], &[EntityId], &[EntityId], &[Option<usize>]) {
        let reverse_map = self.reverse_map.as_deref().unwrap_or(&[]);
        (&self.owned, &self.ghost, &self.all, reverse_map)
    }

    pub(super) fn into_temporary(mut self, temporary: bool) -> Self {
        self.temporary = temporary;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the set; names are labels, not identities
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// The mesh this set belongs to
    pub fn mesh(&self) -> &Arc<dyn Mesh> {
        &self.mesh
    }

    /// Whether the set was produced as a temporary by the set algebra
    ///
    /// Temporary sets are not meant to be registered with the mesh by name.
    pub fn is_temporary(&self) -> bool {
        self.temporary
    }

    pub fn num_entities(&self, selector: EntitySelector) -> usize {
        self.entities(selector).len()
    }

    /// Count for a kind-qualified query
    ///
    /// # Panics
    ///
    /// Panics if `kind` is not the kind of this set. Asking a set for a
    /// kind it does not hold is a programming error.
    pub fn num_entities_of_kind(&self, kind: EntityKind, selector: EntitySelector) -> usize {
        assert_eq!(
            self.kind, kind,
            "entity set '{}' holds {:?} entities, queried as {:?}",
            self.name, self.kind, kind
        );
        self.num_entities(selector)
    }

    /// Non-panicking form of [`EntitySet::num_entities_of_kind`]
    pub fn try_num_entities_of_kind(
        &self,
        kind: EntityKind,
        selector: EntitySelector,
    ) -> EntitySetResult<usize> {
        if self.kind != kind {
            return Err(EntitySetError::KindMismatch {
                set: self.name.clone(),
                actual: self.kind,
                requested: kind,
            });
        }
        Ok(self.num_entities(selector))
    }

    /// Ids in the requested partition, borrowed from the set
    pub fn entities(&self, selector: EntitySelector) -> &[EntityId] {
        match selector {
            EntitySelector::Owned => &self.owned,
            EntitySelector::Ghost => &self.ghost,
            EntitySelector::All => &self.all,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    pub fn has_reverse_map(&self) -> bool {
        self.reverse_map.is_some()
    }

    /// Position of a mesh entity in `entities(All)`
    ///
    /// `None` when the entity is not in the set, lies beyond the mesh's
    /// entity count, or no reverse map was built.
    pub fn index_in_set(&self, id: EntityId) -> Option<usize> {
        self.reverse_map.as_ref()?.get(id).copied().flatten()
    }

    /// Membership test; linear when the id is not covered by a reverse map
    pub fn contains(&self, id: EntityId) -> bool {
        match &self.reverse_map {
            Some(map) if id < map.len() => map[id].is_some(),
            _ => self.all.contains(&id),
        }
    }
}

impl fmt::Debug for EntitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntitySet")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("owned", &self.owned)
            .field("ghost", &self.ghost)
            .field("reverse_map", &self.has_reverse_map())
            .field("temporary", &self.temporary)
            .finish()
    }
}

/// Create a shared entity set
pub fn make_entity_set(
    name: impl Into<String>,
    mesh: Arc<dyn Mesh>,
    kind: EntityKind,
    owned: Vec<EntityId>,
    ghost: Vec<EntityId>,
    build_reverse_map: bool,
) -> Arc<EntitySet> {
    Arc::new(EntitySet::new(name, mesh, kind, owned, ghost, build_reverse_map))
}

fn build_reverse_map_for(mesh: &dyn Mesh, kind: EntityKind, all: &[EntityId]) -> Vec<Option<usize>> {
    let len = mesh.num_entities(kind, EntitySelector::All);

    let mut map = vec![None; len];
    let mut unmapped = 0usize;
    for (pos, &id) in all.iter().enumerate() {
        match map.get_mut(id) {
            // First occurrence wins if the caller passed duplicates
            Some(slot) => {
                slot.get_or_insert(pos);
            }
            None => unmapped += 1,
        }
    }
    if unmapped > 0 {
        warn!(
            ?kind,
            unmapped,
            mesh_entities = len,
            "set ids beyond the mesh entity count are left out of the reverse map"
        );
    }
    map
}
