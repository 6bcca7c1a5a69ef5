// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Entity sets - named groups of mesh entities on one process
//!
//! Sets describe materials and boundary regions. Each holds the ids of
//! the entities the process owns and of the ghost copies it keeps, and new
//! regions are derived from existing ones through the set algebra. The
//! mesh itself is an external collaborator reached through the [`Mesh`]
//! trait; nothing here communicates between processes.

mod algebra;
mod set;
mod state;
mod table;

pub use algebra::{complement, intersect, merge, subtract};
pub use set::{make_entity_set, EntitySet};
pub use state::{SetStorage, StateAccess};
pub use table::EntityTable;

use serde::{Deserialize, Serialize};

/// Mesh-local entity identifier
pub type EntityId = usize;

/// Kind of mesh entity a set groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Node,
    Edge,
    Face,
    Side,
    Wedge,
    Corner,
    Facet,
    Cell,
    BoundaryFace,
}

/// Parallel partition of a set or mesh to query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntitySelector {
    /// Entities this process owns
    Owned,
    /// Local copies of entities owned elsewhere
    Ghost,
    /// Owned followed by ghost
    #[default]
    All,
}

/// Process-local view of a distributed mesh
///
/// Implemented by the mesh backend. The ownership oracle `is_owned` is
/// the only source of truth the set algebra uses to decide whether an
/// entity lands in the owned or the ghost part of a result.
pub trait Mesh: Send + Sync {
    /// Ids of entities of `kind`; `All` lists owned ids before ghost ids
    fn entity_ids(&self, kind: EntityKind, selector: EntitySelector) -> Vec<EntityId>;

    /// Whether this process owns the entity
    fn is_owned(&self, kind: EntityKind, id: EntityId) -> bool;

    fn num_entities(&self, kind: EntityKind, selector: EntitySelector) -> usize {
        self.entity_ids(kind, selector).len()
    }
}
