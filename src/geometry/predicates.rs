// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Orientation predicates for elementary simplices

use super::Point;
use nalgebra::Vector3;

/// Six times the signed volume of tetrahedron (apex, a, b, c)
///
/// Computed as `((a - apex) x (b - apex)) . (c - apex)`. Positive when
/// `a, b, c` wind counterclockwise as seen from outside, i.e. the apex lies
/// on the inner side of the oriented triangle.
pub fn tet_volume6(apex: &Point, a: &Point, b: &Point, c: &Point) -> f64 {
    let v1 = *a - *apex;
    let v2 = *b - *apex;
    let v3 = *c - *apex;
    v1.cross(&v2).dot(v3.coords())
}

/// Centroid of tetrahedron (a, b, c, d)
pub fn tet_centroid(a: &Point, b: &Point, c: &Point, d: &Point) -> Point {
    (*a + *b + *c + *d) / 4.0
}

/// Area vector of triangle (center, a, b): half the cross product of the edges
///
/// For 2-D input the vector is `(0, 0, signed_area)`.
pub fn triangle_area_vector(center: &Point, a: &Point, b: &Point) -> Vector3<f64> {
    let v1 = *a - *center;
    let v2 = *b - *center;
    0.5 * v1.cross(&v2)
}
