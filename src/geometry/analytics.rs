// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Bulk cell measures and summary statistics
//!
//! The geometry routines are pure, so whole cell lists are measured in
//! parallel with rayon. Invalid cells do not stop the sweep; they are
//! collected for later inspection.

use super::{PolyhedronMeasure, Point, Polyhedron};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary of a set of measured cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellStats {
    /// Number of cells measured
    pub cell_count: usize,
    /// Sum of unsigned cell volumes
    pub total_volume: f64,
    /// Smallest unsigned cell volume
    pub min_volume: f64,
    /// Largest unsigned cell volume
    pub max_volume: f64,
    /// Volume-weighted centroid of all cells [x, y, z]
    pub centroid: [f64; 3],
    /// Indices of cells flagged invalid
    pub invalid_cells: Vec<usize>,
}

impl CellStats {
    pub fn empty() -> Self {
        Self {
            cell_count: 0,
            total_volume: 0.0,
            min_volume: 0.0,
            max_volume: 0.0,
            centroid: [0.0; 3],
            invalid_cells: Vec::new(),
        }
    }

    pub fn all_valid(&self) -> bool {
        self.invalid_cells.is_empty()
    }
}

impl fmt::Display for CellStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "╔══════════════════════════════════════════╗")?;
        writeln!(f, "║              CELL MEASURES               ║")?;
        writeln!(f, "╠══════════════════════════════════════════╣")?;
        writeln!(f, "║ Cells:          {:>12}             ║", self.cell_count)?;
        writeln!(f, "║ Total volume:   {:>12.6}             ║", self.total_volume)?;
        writeln!(f, "║ Min volume:     {:>12.6}             ║", self.min_volume)?;
        writeln!(f, "║ Max volume:     {:>12.6}             ║", self.max_volume)?;
        writeln!(
            f,
            "║ Centroid:       ({:>7.3}, {:>7.3}, {:>7.3}) ║",
            self.centroid[0], self.centroid[1], self.centroid[2]
        )?;
        writeln!(f, "║ Invalid cells:  {:>12}             ║", self.invalid_cells.len())?;
        write!(f, "╚══════════════════════════════════════════╝")
    }
}

/// Measure every cell in parallel, preserving input order
pub fn measure_cells(cells: &[Polyhedron<'_>]) -> Vec<PolyhedronMeasure> {
    cells.par_iter().map(|cell| cell.volume_centroid()).collect()
}

/// Count the cells containing `point`
pub fn count_containing(cells: &[Polyhedron<'_>], point: &Point) -> usize {
    cells.par_iter().filter(|cell| cell.contains(point)).count()
}

/// Measure cells and summarize the result
pub fn analyze_cells(cells: &[Polyhedron<'_>]) -> CellStats {
    summarize(&measure_cells(cells))
}

/// Summarize measures produced elsewhere
pub fn summarize(measures: &[PolyhedronMeasure]) -> CellStats {
    if measures.is_empty() {
        return CellStats::empty();
    }

    let mut stats = CellStats {
        cell_count: measures.len(),
        min_volume: f64::MAX,
        max_volume: f64::MIN,
        ..CellStats::empty()
    };
    let mut moment = [0.0; 3];

    for (i, m) in measures.iter().enumerate() {
        let volume = m.magnitude();
        stats.total_volume += volume;
        stats.min_volume = stats.min_volume.min(volume);
        stats.max_volume = stats.max_volume.max(volume);
        for (axis, acc) in moment.iter_mut().enumerate() {
            *acc += volume * m.centroid.coord(axis);
        }
        if !m.valid {
            stats.invalid_cells.push(i);
        }
    }

    if stats.total_volume > 0.0 {
        stats.centroid = moment.map(|c| c / stats.total_volume);
    }
    stats
}
