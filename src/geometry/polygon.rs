// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Area, centroid, normal and containment for polygons
//!
//! Polygons are closed vertex loops. In 2-D they are planar by
//! construction; in 3-D they may be warped, which is why the area is
//! accumulated over a fan of triangles around the vertex mean instead of
//! using a contour integral. A contour integral would give a positive area
//! to a self-intersecting polygon, and such polygons do show up transiently
//! in moving meshes.

use super::predicates::triangle_area_vector;
use super::Point;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Relative distance from the polygon plane still counted as on the plane
const PLANE_TOLERANCE: f64 = 1e-8;

/// Area, centroid and area-weighted normal of a polygon
///
/// `normal` has the length of the polygon area. For 2-D polygons it is
/// `(0, 0, signed_area)`. An inverted 2-D polygon is reported with a
/// negative `area` and `valid == false`; 3-D polygons are never flagged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolygonMeasure {
    pub area: f64,
    pub centroid: Point,
    pub normal: Vector3<f64>,
    pub valid: bool,
}

impl PolygonMeasure {
    pub fn degenerate(dim: usize) -> Self {
        Self {
            area: 0.0,
            centroid: Point::origin(dim),
            normal: Vector3::zeros(),
            valid: false,
        }
    }

    /// Best estimate of the unsigned area
    pub fn magnitude(&self) -> f64 {
        self.area.abs()
    }

    /// Unit normal, if the polygon has non-zero area
    pub fn unit_normal(&self) -> Option<Vector3<f64>> {
        self.normal.try_normalize(f64::EPSILON)
    }
}

/// Area, centroid and normal of a closed polygon
///
/// Fewer than three vertices, or vertices of mixed dimension, give the
/// degenerate measure.
pub fn polygon_area_centroid_normal(vertices: &[Point]) -> PolygonMeasure {
    let np = vertices.len();
    let dim = vertices.first().map_or(3, Point::dim);
    if np < 3 {
        warn!(vertices = np, "degenerate polygon, area is zero");
        return PolygonMeasure::degenerate(dim);
    }
    if let Some(odd) = vertices.iter().find(|p| p.dim() != dim) {
        warn!(expected = dim, actual = odd.dim(), "polygon mixes 2-D and 3-D vertices");
        return PolygonMeasure::degenerate(dim);
    }
    let planar = dim == 2;

    let (area, centroid, normal, inverted) = if np == 3 {
        // Evaluated directly at the middle vertex
        let normal = triangle_area_vector(&vertices[1], &vertices[2], &vertices[0]);
        let centroid = (vertices[0] + vertices[1] + vertices[2]) / 3.0;
        (normal.norm(), centroid, normal, planar && normal.z <= 0.0)
    } else {
        let Some(center) = Point::mean(vertices) else {
            return PolygonMeasure::degenerate(dim);
        };

        let mut area = 0.0;
        let mut first = Point::origin(dim);
        let mut normal = Vector3::zeros();
        let mut inverted = false;

        for i in 0..np {
            let a = vertices[i];
            let b = vertices[(i + 1) % np];
            let tri = triangle_area_vector(&center, &a, &b);
            let tri_area = tri.norm();

            // Orientation of a warped 3-D polygon has no local definition
            if planar && tri.z <= 0.0 {
                inverted = true;
            }

            normal += tri;
            area += tri_area;
            first += (a + b + center) * (tri_area / 3.0);
        }

        if area == 0.0 {
            warn!(vertices = np, "polygon has zero area");
            return PolygonMeasure {
                centroid: center,
                ..PolygonMeasure::degenerate(dim)
            };
        }
        (area, first / area, normal, inverted)
    };

    PolygonMeasure {
        area: if inverted && area > 0.0 { -area } else { area },
        centroid,
        normal,
        valid: !inverted,
    }
}

/// Area-weighted normal of a polygon
pub fn polygon_normal(vertices: &[Point]) -> Vector3<f64> {
    polygon_area_centroid_normal(vertices).normal
}

/// Crossing-number containment test in the XY plane
///
/// A horizontal ray is cast from the test point towards +x; the point is
/// inside when the ray crosses the boundary an odd number of times. Points
/// exactly on the boundary are not classified consistently.
pub fn point_in_polygon(point: &Point, vertices: &[Point]) -> bool {
    crossing_test(point.x(), point.y(), vertices.iter().map(|v| (v.x(), v.y())))
}

/// Containment test for a 3-D polygon
///
/// The polygon and the point are projected onto the coordinate plane that
/// drops the dominant component of the polygon normal. Points off the
/// polygon plane are outside.
pub fn point_in_planar_polygon(point: &Point, vertices: &[Point]) -> bool {
    if point.dim() == 2 {
        return point_in_polygon(point, vertices);
    }

    if vertices.first().is_some_and(|v| v.dim() != point.dim()) {
        return false;
    }
    let measure = polygon_area_centroid_normal(vertices);
    let Some(unit) = measure.unit_normal() else {
        return false;
    };

    let offset = (*point - vertices[0]).coords().dot(&unit);
    if offset.abs() > PLANE_TOLERANCE * measure.magnitude().sqrt().max(1.0) {
        return false;
    }

    let eliminated = unit.iamax();
    let (u, v) = match eliminated {
        0 => (1, 2),
        1 => (0, 2),
        _ => (0, 1),
    };
    crossing_test(
        point.coord(u),
        point.coord(v),
        vertices.iter().map(|p| (p.coord(u), p.coord(v))),
    )
}

fn crossing_test(x: f64, y: f64, loop_xy: impl Iterator<Item = (f64, f64)> + Clone) -> bool {
    let next = loop_xy.clone().cycle().skip(1);
    let mut inside = false;

    for ((xi, yi), (xj, yj)) in loop_xy.zip(next) {
        let straddles = (yi > y && yj <= y) || (yj > y && yi <= y);
        if straddles && x <= xi + (y - yi) * (xj - xi) / (yj - yi) {
            inside = !inside;
        }
    }
    inside
}
