// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for the kernel subsystems
//!
//! Degenerate or inverted geometry is never an error here: the geometry
//! routines report it through the `valid` flag of their measures. These
//! enums cover malformed descriptors, misuse of the set algebra and
//! infeasible partition requests.

use crate::entity::EntityKind;
use thiserror::Error;

/// Result type for geometry descriptor construction
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Result type for entity set operations
pub type EntitySetResult<T> = Result<T, EntitySetError>;

/// Result type for block partitioning
pub type PartitionResult<T> = Result<T, PartitionError>;

/// Errors raised while building geometric descriptors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    /// Per-face node counts do not add up to the flattened vertex list
    #[error("face node counts sum to {expected} but {actual} face vertices were given")]
    FaceVertexCountMismatch { expected: usize, actual: usize },

    /// A face has fewer than three nodes
    #[error("face {face} has {nodes} nodes, at least 3 are required")]
    DegenerateFace { face: usize, nodes: usize },

    /// A face references a node index outside the node list
    #[error("face {face} references node {node} but only {num_nodes} nodes exist")]
    NodeOutOfRange {
        face: usize,
        node: usize,
        num_nodes: usize,
    },

    /// Points of different dimension were mixed
    #[error("expected {expected}-D coordinates, got {actual}-D")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Coordinate tuple of unsupported length
    #[error("points must have 2 or 3 coordinates, got {0}")]
    UnsupportedDimension(usize),
}

/// Errors raised by entity set queries and set algebra
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EntitySetError {
    /// A kind-qualified query named a kind other than the set's own
    #[error("set '{set}' holds {actual:?} entities, queried as {requested:?}")]
    KindMismatch {
        set: String,
        actual: EntityKind,
        requested: EntityKind,
    },

    /// Set algebra was asked to combine sets of different kinds
    #[error("cannot combine {first:?} set '{first_name}' with {other:?} set '{other_name}'")]
    MixedKinds {
        first: EntityKind,
        first_name: String,
        other: EntityKind,
        other_name: String,
    },

    /// Set algebra was given no input sets
    #[error("{operation} needs at least one input set")]
    EmptyInput { operation: &'static str },
}

/// Errors raised by the regular-domain block partitioner
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PartitionError {
    /// Domain must have one to three axes
    #[error("domain must have 1 to 3 axes, got {0}")]
    InvalidAxisCount(usize),

    /// Upper bound not strictly above the lower bound on an axis
    #[error("axis {axis} has empty extent [{lower}, {upper}]")]
    InvalidDomain { axis: usize, lower: f64, upper: f64 },

    /// Number of cell counts does not match the number of axes
    #[error("domain has {axes} axes but {counts} cell counts were given")]
    CellCountMismatch { axes: usize, counts: usize },

    /// An active axis has no cells
    #[error("axis {0} has zero cells")]
    ZeroCells(usize),

    /// Zero blocks requested
    #[error("at least one block must be requested")]
    ZeroBlocks,

    /// More blocks than cells
    #[error("{requested} blocks requested but the domain only has {cells} cells")]
    TooManyBlocks { requested: usize, cells: usize },

    /// No factorization of the requested count fits the cell grid
    #[error("{requested} blocks cannot be laid out on the cell grid, at most {feasible} fit")]
    NoExactFactorization { requested: usize, feasible: usize },
}
