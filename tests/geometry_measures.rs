// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Cell and face measure verification tests

use anyhow::Result;
use approx::assert_relative_eq;
use meshkernel::geometry::{
    analyze_cells, count_containing, face1d_area, point_in_planar_polygon, point_in_polygon, point_in_polyhedron,
    polygon_area_centroid_normal, polygon_normal, polyhedron_volume_centroid, segment_volume_centroid, GeomType,
    Point, Polyhedron,
};
use std::f64::consts::PI;

const HEX_FACES: [[usize; 4]; 6] = [
    [0, 3, 2, 1],
    [4, 5, 6, 7],
    [0, 1, 5, 4],
    [1, 2, 6, 5],
    [2, 3, 7, 6],
    [3, 0, 4, 7],
];

fn hex(lower: [f64; 3], size: [f64; 3]) -> Result<Polyhedron<'static>> {
    let [x0, y0, z0] = lower;
    let [x1, y1, z1] = [x0 + size[0], y0 + size[1], z0 + size[2]];
    let nodes = [
        Point::new3(x0, y0, z0),
        Point::new3(x1, y0, z0),
        Point::new3(x1, y1, z0),
        Point::new3(x0, y1, z0),
        Point::new3(x0, y0, z1),
        Point::new3(x1, y0, z1),
        Point::new3(x1, y1, z1),
        Point::new3(x0, y1, z1),
    ];
    Ok(Polyhedron::from_indexed(&nodes, &HEX_FACES)?)
}

#[test]
fn test_structured_hex_mesh_volume() -> Result<()> {
    let n = 4;
    let h = 0.25;
    let mut cells = Vec::new();
    for k in 0..n {
        for j in 0..n {
            for i in 0..n {
                cells.push(hex([i as f64 * h, j as f64 * h, k as f64 * h], [h; 3])?);
            }
        }
    }

    let stats = analyze_cells(&cells);
    println!("{stats}");

    assert_eq!(stats.cell_count, 64);
    assert!(stats.all_valid());
    assert_relative_eq!(stats.total_volume, 1.0, epsilon = 1e-12);
    assert_relative_eq!(stats.min_volume, h.powi(3), epsilon = 1e-14);
    for axis in 0..3 {
        assert_relative_eq!(stats.centroid[axis], 0.5, epsilon = 1e-12);
    }

    assert_eq!(count_containing(&cells, &Point::new3(0.1, 0.6, 0.9)), 1);
    assert_eq!(count_containing(&cells, &Point::new3(1.5, 0.5, 0.5)), 0);
    Ok(())
}

#[test]
fn test_flattened_form_matches_descriptor() -> Result<()> {
    let cell = hex([1.0, 2.0, 3.0], [2.0, 1.0, 0.5])?;
    let flat = polyhedron_volume_centroid(cell.corners(), cell.face_node_counts(), cell.face_vertices());
    let method = cell.volume_centroid();

    assert!(flat.valid);
    assert_relative_eq!(flat.volume, 1.0, epsilon = 1e-12);
    assert_eq!(flat, method);
    assert_relative_eq!(flat.centroid.x(), 2.0, epsilon = 1e-12);
    assert_relative_eq!(flat.centroid.y(), 2.5, epsilon = 1e-12);
    assert_relative_eq!(flat.centroid.z(), 3.25, epsilon = 1e-12);

    let inside = Point::new3(2.9, 2.1, 3.4);
    let outside = Point::new3(3.1, 2.1, 3.4);
    assert!(point_in_polyhedron(&inside, cell.corners(), cell.face_node_counts(), cell.face_vertices()));
    assert!(!point_in_polyhedron(&outside, cell.corners(), cell.face_node_counts(), cell.face_vertices()));
    Ok(())
}

#[test]
fn test_regular_hexagon() {
    let vertices: Vec<Point> = (0..6)
        .map(|i| {
            let angle = i as f64 * PI / 3.0;
            Point::new2(angle.cos(), angle.sin())
        })
        .collect();
    let m = polygon_area_centroid_normal(&vertices);

    println!("Hexagon area: {:.6} (expected {:.6})", m.area, 1.5 * 3f64.sqrt());
    assert!(m.valid);
    assert_relative_eq!(m.area, 1.5 * 3f64.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(m.centroid.x(), 0.0, epsilon = 1e-12);
    assert_relative_eq!(m.normal.z, m.area, epsilon = 1e-12);

    assert!(point_in_polygon(&Point::new2(0.5, 0.5), &vertices));
    assert!(!point_in_polygon(&Point::new2(0.9, 0.9), &vertices));
}

#[test]
fn test_hex_face_in_3d() {
    // Outward x face of the unit cube
    let face = [
        Point::new3(1.0, 0.0, 0.0),
        Point::new3(1.0, 1.0, 0.0),
        Point::new3(1.0, 1.0, 1.0),
        Point::new3(1.0, 0.0, 1.0),
    ];
    let m = polygon_area_centroid_normal(&face);
    assert_relative_eq!(m.area, 1.0, epsilon = 1e-12);
    assert_relative_eq!(m.normal.x, 1.0, epsilon = 1e-12);
    assert_eq!(polygon_normal(&face), m.normal);
    assert!(point_in_planar_polygon(&Point::new3(1.0, 0.5, 0.5), &face));
    assert!(!point_in_planar_polygon(&Point::new3(1.0, 1.5, 0.5), &face));
}

#[test]
fn test_spherical_shells_sum_to_ball() {
    let radii = [0.0, 0.5, 1.0, 1.5, 2.0];
    let total: f64 = radii
        .windows(2)
        .map(|r| {
            let nodes = [Point::new2(r[0], 0.0), Point::new2(r[1], 0.0)];
            segment_volume_centroid(&nodes, GeomType::Spherical).volume
        })
        .sum();
    assert_relative_eq!(total, 4.0 / 3.0 * PI * 8.0, epsilon = 1e-12);

    let outer = [Point::new2(2.0, 0.0)];
    assert_relative_eq!(face1d_area(&outer, GeomType::Spherical), 16.0 * PI);
    assert_relative_eq!(face1d_area(&outer, GeomType::Cartesian), 1.0);
}
