// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Axis-aligned box domains

use crate::error::{PartitionError, PartitionResult};
use serde::{Deserialize, Serialize};

/// Axis-aligned box with one to three axes
///
/// Axes beyond `dim` are inactive and have zero bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxDomain {
    lower: [f64; 3],
    upper: [f64; 3],
    dim: usize,
}

impl BoxDomain {
    /// Box from per-axis lower and upper bounds
    pub fn new(lower: &[f64], upper: &[f64]) -> PartitionResult<Self> {
        let dim = lower.len();
        if dim == 0 || dim > 3 || upper.len() != dim {
            return Err(PartitionError::InvalidAxisCount(dim.max(upper.len())));
        }

        let mut domain = Self {
            lower: [0.0; 3],
            upper: [0.0; 3],
            dim,
        };
        for axis in 0..dim {
            // Rejects NaN bounds as well
            if !(upper[axis] > lower[axis]) {
                return Err(PartitionError::InvalidDomain {
                    axis,
                    lower: lower[axis],
                    upper: upper[axis],
                });
            }
            domain.lower[axis] = lower[axis];
            domain.upper[axis] = upper[axis];
        }
        Ok(domain)
    }

    /// Box from interleaved limits `[lo0, hi0, lo1, hi1, ...]`
    pub fn from_limits(limits: &[f64]) -> PartitionResult<Self> {
        if limits.len() % 2 != 0 {
            return Err(PartitionError::InvalidAxisCount(limits.len() / 2 + 1));
        }
        let lower: Vec<f64> = limits.iter().step_by(2).copied().collect();
        let upper: Vec<f64> = limits.iter().skip(1).step_by(2).copied().collect();
        Self::new(&lower, &upper)
    }

    /// Unit box [0, 1]^dim
    pub fn unit(dim: usize) -> PartitionResult<Self> {
        Self::new(&vec![0.0; dim], &vec![1.0; dim])
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn lower(&self, axis: usize) -> f64 {
        self.lower[axis]
    }

    pub fn upper(&self, axis: usize) -> f64 {
        self.upper[axis]
    }

    pub fn extent(&self, axis: usize) -> f64 {
        self.upper[axis] - self.lower[axis]
    }

    /// Length, area or volume depending on the number of axes
    pub fn volume(&self) -> f64 {
        (0..self.dim).map(|axis| self.extent(axis)).product()
    }

    /// Closed containment test over the active axes
    pub fn contains(&self, coords: &[f64]) -> bool {
        (0..self.dim).all(|axis| {
            coords
                .get(axis)
                .is_some_and(|&x| x >= self.lower[axis] && x <= self.upper[axis])
        })
    }
}
