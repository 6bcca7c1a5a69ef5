// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Raw storage access for field-state management
//!
//! A state manager that stores fields restricted to entity sets needs the
//! id lists and the reverse map directly. It gets them through a
//! [`StateAccess`] capability instead of through public fields, so the
//! rest of the code only ever sees the query interface of [`EntitySet`].
//!
//! Outside this crate the capability can only be obtained with the
//! `state-access` cargo feature, which the state manager's crate enables.

use super::{EntityId, EntitySet, EntitySelector};

/// Capability to read the raw storage of entity sets
#[derive(Debug)]
pub struct StateAccess {
    _sealed: (),
}

impl StateAccess {
    #[cfg_attr(not(feature = "state-access"), allow(dead_code))]
    pub(crate) fn new() -> Self {
        Self { _sealed: () }
    }

    /// Grant storage access to the field-state manager
    #[cfg(feature = "state-access")]
    pub fn grant() -> Self {
        Self::new()
    }
}

/// Borrowed view of an entity set's storage
#[derive(Debug, Clone, Copy)]
pub struct SetStorage<'a> {
    pub owned: &'a [EntityId],
    pub ghost: &'a [EntityId],
    pub all: &'a [EntityId],
    /// Mesh id -> position in `all`; empty when the set has no reverse map
    pub reverse_map: &'a [Option<usize>],
}

impl<'a> SetStorage<'a> {
    fn ids(&self, selector: EntitySelector) -> &'a [EntityId] {
        match selector {
            EntitySelector::Owned => self.owned,
            EntitySelector::Ghost => self.ghost,
            EntitySelector::All => self.all,
        }
    }

    /// Pick the values of set members out of a mesh-indexed field
    ///
    /// Returns `None` if the field is too short for some member id.
    pub fn gather<T: Clone>(&self, mesh_field: &[T], selector: EntitySelector) -> Option<Vec<T>> {
        self.ids(selector)
            .iter()
            .map(|&id| mesh_field.get(id).cloned())
            .collect()
    }

    /// Write set-ordered values back into a mesh-indexed field
    ///
    /// `set_values` follows the order of `entities(selector)`. Returns
    /// false, leaving the field untouched, if lengths or ids do not fit.
    pub fn scatter<T: Clone>(
        &self,
        set_values: &[T],
        mesh_field: &mut [T],
        selector: EntitySelector,
    ) -> bool {
        let ids = self.ids(selector);
        if ids.len() != set_values.len() || ids.iter().any(|&id| id >= mesh_field.len()) {
            return false;
        }
        for (&id, value) in ids.iter().zip(set_values) {
            mesh_field[id] = value.clone();
        }
        true
    }
}

impl EntitySet {
    /// Raw storage view for holders of a [`StateAccess`] capability
    pub fn storage(&self, _access: &StateAccess) -> SetStorage<'_> {
        let (owned, ghost, all, reverse_map) = self.raw_parts();
        SetStorage {
            owned,
            ghost,
            all,
            reverse_map,
        }
    }
}
