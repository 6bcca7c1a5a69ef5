// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! In-memory entity table implementing [`Mesh`]
//!
//! Useful when a backend already knows its owned and ghost id lists and
//! only needs to hand them to the set algebra.

use super::{EntityId, EntityKind, EntitySelector, Mesh};
use ahash::{AHashMap, AHashSet};

#[derive(Debug, Clone, Default)]
struct KindEntry {
    owned: Vec<EntityId>,
    ghost: Vec<EntityId>,
    owned_lookup: AHashSet<EntityId>,
}

/// Owned and ghost id lists per entity kind
#[derive(Debug, Clone, Default)]
pub struct EntityTable {
    kinds: AHashMap<EntityKind, KindEntry>,
}

impl EntityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the entities of one kind, replacing any previous lists
    pub fn insert(&mut self, kind: EntityKind, owned: Vec<EntityId>, ghost: Vec<EntityId>) {
        let owned_lookup = owned.iter().copied().collect();
        self.kinds.insert(
            kind,
            KindEntry {
                owned,
                ghost,
                owned_lookup,
            },
        );
    }

    /// Builder form of [`EntityTable::insert`]
    pub fn with_entities(mut self, kind: EntityKind, owned: Vec<EntityId>, ghost: Vec<EntityId>) -> Self {
        self.insert(kind, owned, ghost);
        self
    }

    /// Contiguous numbering: owned ids `0..num_owned`, ghosts after them
    pub fn with_range(self, kind: EntityKind, num_owned: usize, num_ghost: usize) -> Self {
        let owned = (0..num_owned).collect();
        let ghost = (num_owned..num_owned + num_ghost).collect();
        self.with_entities(kind, owned, ghost)
    }
}

impl Mesh for EntityTable {
    fn entity_ids(&self, kind: EntityKind, selector: EntitySelector) -> Vec<EntityId> {
        let Some(entry) = self.kinds.get(&kind) else {
            return Vec::new();
        };
        match selector {
            EntitySelector::Owned => entry.owned.clone(),
            EntitySelector::Ghost => entry.ghost.clone(),
            EntitySelector::All => entry.owned.iter().chain(&entry.ghost).copied().collect(),
        }
    }

    fn is_owned(&self, kind: EntityKind, id: EntityId) -> bool {
        self.kinds
            .get(&kind)
            .is_some_and(|entry| entry.owned_lookup.contains(&id))
    }

    fn num_entities(&self, kind: EntityKind, selector: EntitySelector) -> usize {
        self.kinds.get(&kind).map_or(0, |entry| match selector {
            EntitySelector::Owned => entry.owned.len(),
            EntitySelector::Ghost => entry.ghost.len(),
            EntitySelector::All => entry.owned.len() + entry.ghost.len(),
        })
    }
}
