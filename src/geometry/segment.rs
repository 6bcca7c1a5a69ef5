// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Measures of one-dimensional cells and faces
//!
//! A 1-D cell is a segment between two nodes and a 1-D face is a single
//! node. In spherical coordinates the x coordinate is the radius and the
//! measures become shell volumes and sphere surfaces.

use super::Point;
use crate::config::GeometryConfig;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::warn;

/// Coordinate system used to interpret 1-D coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeomType {
    #[default]
    Cartesian,
    Spherical,
}

impl GeomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeomType::Cartesian => "cartesian",
            GeomType::Spherical => "spherical",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cartesian" => Some(GeomType::Cartesian),
            "spherical" => Some(GeomType::Spherical),
            _ => None,
        }
    }
}

/// Volume and centroid of a 1-D cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentMeasure {
    pub volume: f64,
    pub centroid: Point,
}

/// Measure of a two-node segment cell
///
/// Cartesian: length and midpoint. Spherical: volume of the shell between
/// the two radii; the centroid is still the coordinate midpoint, not the
/// mass-weighted radius.
pub fn segment_volume_centroid(nodes: &[Point], geom: GeomType) -> SegmentMeasure {
    let [p0, p1] = nodes else {
        warn!(nodes = nodes.len(), "segment needs exactly two nodes");
        return SegmentMeasure {
            volume: 0.0,
            centroid: Point::origin(nodes.first().map_or(3, Point::dim)),
        };
    };

    if p0.dim() != p1.dim() {
        warn!(first = p0.dim(), second = p1.dim(), "segment mixes 2-D and 3-D nodes");
        return SegmentMeasure {
            volume: 0.0,
            centroid: Point::origin(p0.dim()),
        };
    }

    let centroid = (*p0 + *p1) * 0.5;
    let volume = match geom {
        GeomType::Cartesian => (*p1 - *p0).norm(),
        GeomType::Spherical => 4.0 * PI * (p1.x().powi(3) - p0.x().powi(3)) / 3.0,
    };
    SegmentMeasure { volume, centroid }
}

/// Area of a single-node 1-D face
///
/// Cartesian faces have unit area; spherical faces are the sphere of
/// radius `x`.
pub fn face1d_area(nodes: &[Point], geom: GeomType) -> f64 {
    let Some(node) = nodes.first() else {
        warn!("1-D face without a node, area is zero");
        return 0.0;
    };
    match geom {
        GeomType::Cartesian => 1.0,
        GeomType::Spherical => 4.0 * PI * node.x().powi(2),
    }
}

/// Segment measure in the configured coordinate system
pub fn segment_measure_with_config(nodes: &[Point], config: &GeometryConfig) -> SegmentMeasure {
    segment_volume_centroid(nodes, config.coordinate_system)
}

/// 1-D face area in the configured coordinate system
pub fn face1d_area_with_config(nodes: &[Point], config: &GeometryConfig) -> f64 {
    face1d_area(nodes, config.coordinate_system)
}
