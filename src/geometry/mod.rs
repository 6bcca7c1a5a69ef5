// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - cell and face measures and containment tests
//!
//! Every routine here is a pure function of caller-owned coordinates and
//! may be called from any number of threads at once.

mod point;
mod predicates;
mod polyhedron;
mod polygon;
mod segment;
pub mod analytics;

pub use point::Point;
pub use predicates::{tet_centroid, tet_volume6, triangle_area_vector};
pub use polyhedron::{point_in_polyhedron, polyhedron_volume_centroid, Polyhedron, PolyhedronMeasure};
pub use polygon::{
    point_in_planar_polygon, point_in_polygon, polygon_area_centroid_normal, polygon_normal,
    PolygonMeasure,
};
pub use segment::{
    face1d_area, face1d_area_with_config, segment_measure_with_config, segment_volume_centroid,
    GeomType, SegmentMeasure,
};
pub use analytics::{analyze_cells, count_containing, measure_cells, summarize, CellStats};
