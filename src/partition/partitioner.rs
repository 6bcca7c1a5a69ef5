// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Regular block partitioning of box domains
//!
//! The domain carries a structured grid of `cells_per_axis` cells. The
//! block count is factored into per-axis multiplicities, each axis is cut
//! on cell boundaries, and the resulting tensor-product blocks are
//! returned with axis 0 varying fastest. Cells that do not divide evenly
//! go one each to the leading blocks along an axis.

use super::block::{Block, BlockPartition, PartitionStatus};
use super::domain::BoxDomain;
use crate::config::PartitionConfig;
use crate::error::{PartitionError, PartitionResult};
use crate::utils::math::{cumulative_offsets, split_evenly};
use tracing::{debug, warn};

/// Partition a box domain into `num_blocks` blocks
///
/// Equivalent to [`partition_with_config`] with the default
/// (non-strict) configuration.
pub fn block_partition_regular_mesh(
    domain: &BoxDomain,
    cells_per_axis: &[usize],
    num_blocks: usize,
) -> PartitionResult<BlockPartition> {
    partition_with_config(domain, cells_per_axis, num_blocks, &PartitionConfig::default())
}

/// Partition a box domain into `num_blocks` blocks
///
/// When no factorization of `num_blocks` fits the cell grid, the largest
/// smaller count that does is used and the status reports it. With
/// `config.strict` that case is an error instead.
pub fn partition_with_config(
    domain: &BoxDomain,
    cells_per_axis: &[usize],
    num_blocks: usize,
    config: &PartitionConfig,
) -> PartitionResult<BlockPartition> {
    let cells = validate(domain, cells_per_axis, num_blocks)?;

    let (multiplicity, status) = match choose_multiplicities(domain, &cells, num_blocks) {
        Some(m) => (m, PartitionStatus::Exact),
        None => {
            let (produced, m) = (1..num_blocks)
                .rev()
                .find_map(|n| choose_multiplicities(domain, &cells, n).map(|m| (n, m)))
                .unwrap_or((1, [1, 1, 1]));
            if config.strict {
                return Err(PartitionError::NoExactFactorization {
                    requested: num_blocks,
                    feasible: produced,
                });
            }
            warn!(
                requested = num_blocks,
                produced, "block count does not fit the cell grid, using fewer blocks"
            );
            (
                m,
                PartitionStatus::Approximate {
                    requested: num_blocks,
                    produced,
                },
            )
        }
    };

    debug!(?multiplicity, ?cells, dim = domain.dim(), "block multiplicities");

    let blocks = build_blocks(domain, &cells, multiplicity);
    Ok(BlockPartition {
        blocks,
        multiplicity,
        requested: num_blocks,
        status,
    })
}

/// Best per-axis block multiplicities for exactly `num_blocks` blocks
///
/// Considers every factorization with at most as many blocks as cells on
/// each axis and inactive axes fixed to one. Minimizes the interior
/// interface area, then the spread of cells per block, then compares the
/// multiplicities lexicographically. `None` if no factorization fits.
pub fn choose_multiplicities(
    domain: &BoxDomain,
    cells: &[usize; 3],
    num_blocks: usize,
) -> Option<[usize; 3]> {
    let dim = domain.dim();
    let volume = domain.volume();

    factorizations(num_blocks, dim, cells)
        .into_iter()
        .map(|m| {
            let interface: f64 = (0..dim)
                .map(|axis| (m[axis] - 1) as f64 * volume / domain.extent(axis))
                .sum();
            (interface, imbalance(cells, &m, dim), m)
        })
        .min_by(|a, b| {
            a.0.total_cmp(&b.0)
                .then(a.1.cmp(&b.1))
                .then(a.2.cmp(&b.2))
        })
        .map(|(_, _, m)| m)
}

fn validate(
    domain: &BoxDomain,
    cells_per_axis: &[usize],
    num_blocks: usize,
) -> PartitionResult<[usize; 3]> {
    let dim = domain.dim();
    if cells_per_axis.len() != dim {
        return Err(PartitionError::CellCountMismatch {
            axes: dim,
            counts: cells_per_axis.len(),
        });
    }

    let mut cells = [1usize; 3];
    for (axis, &count) in cells_per_axis.iter().enumerate() {
        if count == 0 {
            return Err(PartitionError::ZeroCells(axis));
        }
        cells[axis] = count;
    }

    if num_blocks == 0 {
        return Err(PartitionError::ZeroBlocks);
    }
    let total: usize = cells.iter().product();
    if num_blocks > total {
        return Err(PartitionError::TooManyBlocks {
            requested: num_blocks,
            cells: total,
        });
    }
    Ok(cells)
}

/// Ordered factorizations of `n` into `dim` factors bounded by `caps`
fn factorizations(n: usize, dim: usize, caps: &[usize; 3]) -> Vec<[usize; 3]> {
    let mut out = Vec::new();
    for m0 in divisors(n) {
        if m0 > caps[0] {
            continue;
        }
        let rest = n / m0;
        match dim {
            1 => {
                if rest == 1 {
                    out.push([m0, 1, 1]);
                }
            }
            2 => {
                if rest <= caps[1] {
                    out.push([m0, rest, 1]);
                }
            }
            _ => {
                for m1 in divisors(rest) {
                    let m2 = rest / m1;
                    if m1 <= caps[1] && m2 <= caps[2] {
                        out.push([m0, m1, m2]);
                    }
                }
            }
        }
    }
    out
}

fn divisors(n: usize) -> Vec<usize> {
    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut d = 1;
    while d * d <= n {
        if n % d == 0 {
            small.push(d);
            if d * d != n {
                large.push(n / d);
            }
        }
        d += 1;
    }
    small.extend(large.into_iter().rev());
    small
}

/// Difference between the largest and smallest block, in cells
fn imbalance(cells: &[usize; 3], m: &[usize; 3], dim: usize) -> usize {
    let largest: usize = (0..dim).map(|a| cells[a].div_ceil(m[a])).product();
    let smallest: usize = (0..dim).map(|a| cells[a] / m[a]).product();
    largest - smallest
}

/// Per-axis cut positions shared by adjacent blocks
struct AxisCuts {
    counts: Vec<usize>,
    offsets: Vec<usize>,
    /// `counts.len() + 1` boundary coordinates, last one exactly the upper bound
    bounds: Vec<f64>,
}

fn axis_cuts(domain: &BoxDomain, axis: usize, cells: usize, blocks: usize) -> AxisCuts {
    let counts = split_evenly(cells, blocks);
    let offsets = cumulative_offsets(&counts);

    let lower = domain.lower(axis);
    let upper = domain.upper(axis);
    let spacing = domain.extent(axis) / cells as f64;

    let mut bounds: Vec<f64> = offsets
        .iter()
        .map(|&offset| lower + offset as f64 * spacing)
        .collect();
    bounds.push(upper);

    AxisCuts {
        counts,
        offsets,
        bounds,
    }
}

fn build_blocks(domain: &BoxDomain, cells: &[usize; 3], m: [usize; 3]) -> Vec<Block> {
    let dim = domain.dim();
    let cuts: Vec<AxisCuts> = (0..dim)
        .map(|axis| axis_cuts(domain, axis, cells[axis], m[axis]))
        .collect();

    let mut blocks = Vec::with_capacity(m.iter().product());
    for k in 0..m[2] {
        for j in 0..m[1] {
            for i in 0..m[0] {
                let grid_index = [i, j, k];
                let mut block = Block {
                    lower: [0.0; 3],
                    upper: [0.0; 3],
                    num_cells: [1; 3],
                    cell_offset: [0; 3],
                    grid_index,
                    dim,
                };
                for (axis, cut) in cuts.iter().enumerate() {
                    let g = grid_index[axis];
                    block.lower[axis] = cut.bounds[g];
                    block.upper[axis] = cut.bounds[g + 1];
                    block.num_cells[axis] = cut.counts[g];
                    block.cell_offset[axis] = cut.offsets[g];
                }
                blocks.push(block);
            }
        }
    }
    blocks
}
