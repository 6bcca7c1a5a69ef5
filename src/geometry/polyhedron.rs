// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Volume, centroid and containment for general polyhedra
//!
//! A polyhedron is described by its corner points (any order), the number
//! of nodes on each face, and the face vertices flattened face after face.
//! Each face is listed counterclockwise as seen from outside the cell, so
//! that its normal points outward.
//!
//! Faces with more than three nodes are never assumed planar. They are
//! fanned around their own vertex mean, and every sub-triangle is closed
//! into a tetrahedron with a common apex (the cell center for measures,
//! the query point for containment). No face normal is ever needed.

use super::predicates::{tet_centroid, tet_volume6};
use super::Point;
use crate::error::{GeometryError, GeometryResult};
use crate::utils::math::cumulative_offsets;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::warn;

/// Volume and centroid of a polyhedral cell
///
/// `volume` keeps the signed convention of mesh codes: an element with any
/// inverted or flat sub-tetrahedron is reported with a negative volume.
/// `valid` states the same thing explicitly and should be checked first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolyhedronMeasure {
    pub volume: f64,
    pub centroid: Point,
    pub valid: bool,
}

impl PolyhedronMeasure {
    /// Neutral result for input that is not a polyhedron
    pub fn degenerate() -> Self {
        Self {
            volume: 0.0,
            centroid: Point::origin(3),
            valid: false,
        }
    }

    /// Best estimate of the unsigned volume
    pub fn magnitude(&self) -> f64 {
        self.volume.abs()
    }
}

/// Polyhedron descriptor in flattened-face form
#[derive(Debug, Clone, PartialEq)]
pub struct Polyhedron<'a> {
    corners: Cow<'a, [Point]>,
    face_node_counts: Cow<'a, [usize]>,
    face_vertices: Cow<'a, [Point]>,
}

impl<'a> Polyhedron<'a> {
    /// Borrow caller-owned descriptor arrays
    ///
    /// Fails if the node counts do not cover the flattened vertex list
    /// exactly, a face has fewer than three nodes, or the points mix 2-D
    /// and 3-D coordinates.
    pub fn new(
        corners: &'a [Point],
        face_node_counts: &'a [usize],
        face_vertices: &'a [Point],
    ) -> GeometryResult<Self> {
        check_faces(face_node_counts, face_vertices.len())?;
        check_dimensions(corners, face_vertices)?;
        Ok(Self {
            corners: Cow::Borrowed(corners),
            face_node_counts: Cow::Borrowed(face_node_counts),
            face_vertices: Cow::Borrowed(face_vertices),
        })
    }

    pub fn corners(&self) -> &[Point] {
        &self.corners
    }

    pub fn face_node_counts(&self) -> &[usize] {
        &self.face_node_counts
    }

    pub fn face_vertices(&self) -> &[Point] {
        &self.face_vertices
    }

    pub fn num_faces(&self) -> usize {
        self.face_node_counts.len()
    }

    /// Start of each face in the flattened vertex list
    pub fn face_offsets(&self) -> Vec<usize> {
        cumulative_offsets(&self.face_node_counts)
    }

    /// Vertex slice of every face in order
    pub fn faces(&self) -> impl Iterator<Item = &[Point]> + '_ {
        self.face_node_counts
            .iter()
            .scan(0usize, move |offset, &n| {
                let face = &self.face_vertices[*offset..*offset + n];
                *offset += n;
                Some(face)
            })
    }

    /// Volume and centroid by decomposition into elementary tetrahedra
    pub fn volume_centroid(&self) -> PolyhedronMeasure {
        let corners = self.corners();
        match corners.len() {
            0..=3 => {
                warn!(corners = corners.len(), "not a polyhedron, returning zero volume");
                PolyhedronMeasure::degenerate()
            }
            4 => {
                let volume6 = tet_volume6(&corners[0], &corners[1], &corners[2], &corners[3]);
                PolyhedronMeasure {
                    volume: volume6 / 6.0,
                    centroid: tet_centroid(&corners[0], &corners[1], &corners[2], &corners[3]),
                    valid: volume6 > 0.0,
                }
            }
            _ => self.general_volume_centroid(),
        }
    }

    fn general_volume_centroid(&self) -> PolyhedronMeasure {
        // Checked by the match in volume_centroid
        let center = Point::mean(self.corners()).unwrap_or_else(|| Point::origin(3));

        let mut zeroth = 0.0;
        let mut first = Point::origin(center.dim());
        let mut inverted = false;

        for face in self.faces() {
            for [a, b, c] in sub_triangles(face) {
                let volume6 = tet_volume6(&center, &a, &b, &c);
                if volume6 <= 0.0 {
                    inverted = true;
                }
                first += tet_centroid(&center, &a, &b, &c) * volume6;
                zeroth += volume6;
            }
        }

        if zeroth == 0.0 {
            warn!(faces = self.num_faces(), "polyhedron has zero volume");
            return PolyhedronMeasure {
                volume: 0.0,
                centroid: center,
                valid: false,
            };
        }

        // The factor 1/6 is applied once for the whole cell
        let mut volume = zeroth / 6.0;
        if inverted && volume > 0.0 {
            volume = -volume;
        }

        PolyhedronMeasure {
            volume,
            centroid: first / zeroth,
            valid: !inverted,
        }
    }

    /// True when `point` forms a non-negative volume with every sub-face
    ///
    /// A tetrahedron given by its corners alone uses the faces opposite
    /// each corner. Points on the boundary may be classified either way.
    pub fn contains(&self, point: &Point) -> bool {
        let corners = self.corners();
        if corners.len() < 4 {
            warn!(corners = corners.len(), "not a polyhedron, nothing is inside");
            return false;
        }
        if point.dim() != corners[0].dim() {
            warn!(
                expected = corners[0].dim(),
                actual = point.dim(),
                "query point dimension differs from the polyhedron"
            );
            return false;
        }
        if self.face_node_counts.is_empty() {
            if corners.len() == 4 {
                return tet_contains(point, corners);
            }
            warn!(corners = corners.len(), "polyhedron has no faces, nothing is inside");
            return false;
        }

        self.faces().all(|face| {
            sub_triangles(face).all(|[a, b, c]| tet_volume6(point, &a, &b, &c) >= 0.0)
        })
    }
}

impl Polyhedron<'static> {
    /// Build the flattened form from a node list and per-face node indices
    ///
    /// Every node becomes a corner; faces must already be oriented outward.
    pub fn from_indexed<F: AsRef<[usize]>>(nodes: &[Point], faces: &[F]) -> GeometryResult<Self> {
        check_dimensions(nodes, &[])?;
        let mut face_node_counts = Vec::with_capacity(faces.len());
        let mut face_vertices = Vec::new();

        for (f, face) in faces.iter().enumerate() {
            let face = face.as_ref();
            for &node in face {
                let p = nodes.get(node).ok_or(GeometryError::NodeOutOfRange {
                    face: f,
                    node,
                    num_nodes: nodes.len(),
                })?;
                face_vertices.push(*p);
            }
            face_node_counts.push(face.len());
        }
        check_faces(&face_node_counts, face_vertices.len())?;

        Ok(Self {
            corners: Cow::Owned(nodes.to_vec()),
            face_node_counts: Cow::Owned(face_node_counts),
            face_vertices: Cow::Owned(face_vertices),
        })
    }
}

fn check_faces(face_node_counts: &[usize], num_vertices: usize) -> GeometryResult<()> {
    if let Some((face, &nodes)) = face_node_counts.iter().enumerate().find(|(_, &n)| n < 3) {
        return Err(GeometryError::DegenerateFace { face, nodes });
    }
    let expected: usize = face_node_counts.iter().sum();
    if expected != num_vertices {
        return Err(GeometryError::FaceVertexCountMismatch {
            expected,
            actual: num_vertices,
        });
    }
    Ok(())
}

/// All points must share the dimension of the first one
fn check_dimensions(corners: &[Point], face_vertices: &[Point]) -> GeometryResult<()> {
    let mut points = corners.iter().chain(face_vertices);
    let Some(expected) = points.next().map(Point::dim) else {
        return Ok(());
    };
    match points.find(|p| p.dim() != expected) {
        Some(p) => Err(GeometryError::DimensionMismatch {
            expected,
            actual: p.dim(),
        }),
        None => Ok(()),
    }
}

/// Containment in a tetrahedron given by its four corners
///
/// The faces opposite each corner are oriented outward according to the
/// sign of the tetrahedron's own volume.
fn tet_contains(point: &Point, c: &[Point]) -> bool {
    let volume6 = tet_volume6(&c[0], &c[1], &c[2], &c[3]);
    if volume6 == 0.0 {
        warn!("flat tetrahedron, nothing is inside");
        return false;
    }
    let sign = volume6.signum();

    // Outward for a positively oriented tetrahedron
    let faces = [
        [c[1], c[2], c[3]],
        [c[0], c[3], c[2]],
        [c[0], c[1], c[3]],
        [c[0], c[2], c[1]],
    ];
    faces
        .iter()
        .all(|[a, b, d]| sign * tet_volume6(point, a, b, d) >= 0.0)
}

/// Triangles of a face: the face itself when it has three nodes, otherwise
/// a fan of (edge start, edge end, face center) around its vertex mean
fn sub_triangles(face: &[Point]) -> impl Iterator<Item = [Point; 3]> + '_ {
    let n = face.len();
    let fan_center = if n > 3 { Point::mean(face) } else { None };
    let count = if fan_center.is_some() { n } else { 1 };

    (0..count).map(move |j| match fan_center {
        Some(fc) => [face[j], face[(j + 1) % n], fc],
        None => [face[0], face[1], face[2]],
    })
}

/// Volume and centroid of a polyhedron given in flattened-face form
///
/// Inconsistent descriptors are reported as degenerate.
pub fn polyhedron_volume_centroid(
    corners: &[Point],
    face_node_counts: &[usize],
    face_vertices: &[Point],
) -> PolyhedronMeasure {
    if corners.len() == 4 {
        if let Err(err) = check_dimensions(corners, &[]) {
            warn!(%err, "malformed tetrahedron");
            return PolyhedronMeasure::degenerate();
        }
        // Face data plays no part for tetrahedra
        let tet = Polyhedron {
            corners: Cow::Borrowed(corners),
            face_node_counts: Cow::Borrowed(&[]),
            face_vertices: Cow::Borrowed(&[]),
        };
        return tet.volume_centroid();
    }
    match Polyhedron::new(corners, face_node_counts, face_vertices) {
        Ok(poly) => poly.volume_centroid(),
        Err(err) => {
            warn!(%err, "malformed polyhedron descriptor");
            PolyhedronMeasure::degenerate()
        }
    }
}

/// Point containment for a polyhedron given in flattened-face form
pub fn point_in_polyhedron(
    point: &Point,
    corners: &[Point],
    face_node_counts: &[usize],
    face_vertices: &[Point],
) -> bool {
    match Polyhedron::new(corners, face_node_counts, face_vertices) {
        Ok(poly) => poly.contains(point),
        Err(err) => {
            warn!(%err, "malformed polyhedron descriptor");
            false
        }
    }
}
