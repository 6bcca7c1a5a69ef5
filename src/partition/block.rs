// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Blocks and block partitions

use serde::{Deserialize, Serialize};

/// Which face of a block along an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Lower,
    Upper,
}

/// One axis-aligned block of a partitioned domain
///
/// Only the first `dim` entries of each array are meaningful. Inactive
/// axes have zero bounds, one cell and offset zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub lower: [f64; 3],
    pub upper: [f64; 3],
    /// Cells of the structured grid covered by this block, per axis
    pub num_cells: [usize; 3],
    /// Global index of the block's first cell, per axis
    pub cell_offset: [usize; 3],
    /// Position of the block in the block grid
    pub grid_index: [usize; 3],
    pub dim: usize,
}

impl Block {
    pub fn extent(&self, axis: usize) -> f64 {
        self.upper[axis] - self.lower[axis]
    }

    pub fn volume(&self) -> f64 {
        (0..self.dim).map(|axis| self.extent(axis)).product()
    }

    pub fn total_cells(&self) -> usize {
        self.num_cells[..self.dim].iter().product()
    }

    /// Interleaved limits `[lo0, hi0, lo1, hi1, lo2, hi2]`
    pub fn limits(&self) -> [f64; 6] {
        [
            self.lower[0],
            self.upper[0],
            self.lower[1],
            self.upper[1],
            self.lower[2],
            self.upper[2],
        ]
    }

    /// Closed containment test over the active axes
    pub fn contains(&self, coords: &[f64]) -> bool {
        (0..self.dim).all(|axis| {
            coords
                .get(axis)
                .is_some_and(|&x| x >= self.lower[axis] && x <= self.upper[axis])
        })
    }

    fn face_coordinate(&self, axis: usize, side: Side) -> f64 {
        match side {
            Side::Lower => self.lower[axis],
            Side::Upper => self.upper[axis],
        }
    }
}

/// Whether the requested block count was honored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartitionStatus {
    Exact,
    /// Fewer blocks than requested were produced
    Approximate { requested: usize, produced: usize },
}

/// Result of partitioning a box domain into blocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockPartition {
    /// Blocks with axis 0 varying fastest
    pub blocks: Vec<Block>,
    /// Number of blocks along each axis
    pub multiplicity: [usize; 3],
    /// Block count the caller asked for
    pub requested: usize,
    pub status: PartitionStatus,
}

impl BlockPartition {
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn is_exact(&self) -> bool {
        self.status == PartitionStatus::Exact
    }

    pub fn total_volume(&self) -> f64 {
        self.blocks.iter().map(Block::volume).sum()
    }

    pub fn total_cells(&self) -> usize {
        self.blocks.iter().map(Block::total_cells).sum()
    }

    /// Position in `blocks` of the block at a block-grid index
    pub fn block_at(&self, grid_index: [usize; 3]) -> Option<usize> {
        let m = self.multiplicity;
        if (0..3).any(|axis| grid_index[axis] >= m[axis]) {
            return None;
        }
        Some(grid_index[0] + m[0] * (grid_index[1] + m[1] * grid_index[2]))
    }

    /// Block sharing the given face of `block`
    ///
    /// Neighbors are found by exact comparison of face coordinates, which
    /// holds because adjacent blocks are built from the same boundary
    /// values. Returns `None` on the domain boundary.
    pub fn face_neighbor(&self, block: usize, axis: usize, side: Side) -> Option<usize> {
        let this = self.blocks.get(block)?;
        if axis >= this.dim {
            return None;
        }
        let face = this.face_coordinate(axis, side);
        let facing = match side {
            Side::Lower => Side::Upper,
            Side::Upper => Side::Lower,
        };

        self.blocks.iter().position(|other| {
            other.face_coordinate(axis, facing) == face
                && (0..this.dim)
                    .filter(|&a| a != axis)
                    .all(|a| other.lower[a] == this.lower[a] && other.upper[a] == this.upper[a])
        })
    }

    /// First block whose closed bounds contain the point
    pub fn locate(&self, coords: &[f64]) -> Option<usize> {
        self.blocks.iter().position(|b| b.contains(coords))
    }
}
