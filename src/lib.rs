// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Mesh Kernel
//!
//! Geometry and bookkeeping building blocks for unstructured-mesh physics
//! codes: cell and face measures with inversion detection, owned/ghost
//! entity sets with set algebra, and block partitioning of box domains.

pub mod config;
pub mod entity;
pub mod error;
pub mod geometry;
pub mod partition;
pub mod utils;

pub use config::KernelConfig;
pub use entity::{
    complement, intersect, make_entity_set, merge, subtract, EntityId, EntityKind, EntitySelector,
    EntitySet, EntityTable, Mesh,
};
pub use error::{EntitySetError, GeometryError, PartitionError};
pub use geometry::{
    face1d_area, point_in_polygon, point_in_polyhedron, polygon_area_centroid_normal,
    polyhedron_volume_centroid, segment_volume_centroid, GeomType, Point, Polyhedron,
};
pub use partition::{block_partition_regular_mesh, BlockPartition, BoxDomain};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_cube_volume() {
        let cube = Polyhedron::from_indexed(
            &[
                Point::new3(0.0, 0.0, 0.0),
                Point::new3(1.0, 0.0, 0.0),
                Point::new3(1.0, 1.0, 0.0),
                Point::new3(0.0, 1.0, 0.0),
                Point::new3(0.0, 0.0, 1.0),
                Point::new3(1.0, 0.0, 1.0),
                Point::new3(1.0, 1.0, 1.0),
                Point::new3(0.0, 1.0, 1.0),
            ],
            &[
                [0, 3, 2, 1],
                [4, 5, 6, 7],
                [0, 1, 5, 4],
                [1, 2, 6, 5],
                [2, 3, 7, 6],
                [3, 0, 4, 7],
            ],
        )
        .unwrap();
        let m = cube.volume_centroid();
        assert!(m.valid);
        assert!((m.volume - 1.0).abs() < 1e-12);
    }
}
