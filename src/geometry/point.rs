// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Coordinate value type shared by all geometry routines

use crate::error::{GeometryError, GeometryResult};
use nalgebra::{Point2, Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, Neg, Sub};

/// A 2-D or 3-D coordinate tuple
///
/// Coordinates are stored in a `Vector3<f64>`; 2-D points keep a zero z
/// component so that cross products of 2-D vectors land on the z axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    coords: Vector3<f64>,
    dim: u8,
}

impl Point {
    pub fn new2(x: f64, y: f64) -> Self {
        Self {
            coords: Vector3::new(x, y, 0.0),
            dim: 2,
        }
    }

    pub fn new3(x: f64, y: f64, z: f64) -> Self {
        Self {
            coords: Vector3::new(x, y, z),
            dim: 3,
        }
    }

    /// Zero point of the given dimension
    pub fn origin(dim: usize) -> Self {
        if dim == 2 {
            Self::new2(0.0, 0.0)
        } else {
            Self::new3(0.0, 0.0, 0.0)
        }
    }

    pub fn from_slice(values: &[f64]) -> GeometryResult<Self> {
        match *values {
            [x, y] => Ok(Self::new2(x, y)),
            [x, y, z] => Ok(Self::new3(x, y, z)),
            _ => Err(GeometryError::UnsupportedDimension(values.len())),
        }
    }

    pub fn dim(&self) -> usize {
        self.dim as usize
    }

    pub fn x(&self) -> f64 {
        self.coords.x
    }

    pub fn y(&self) -> f64 {
        self.coords.y
    }

    pub fn z(&self) -> f64 {
        self.coords.z
    }

    /// Component by axis index
    pub fn coord(&self, axis: usize) -> f64 {
        self.coords[axis]
    }

    pub fn coords(&self) -> &Vector3<f64> {
        &self.coords
    }

    pub fn dot(&self, other: &Point) -> f64 {
        self.coords.dot(&other.coords)
    }

    /// Cross product; for 2-D operands only the z component is non-zero
    pub fn cross(&self, other: &Point) -> Vector3<f64> {
        self.coords.cross(&other.coords)
    }

    pub fn norm(&self) -> f64 {
        self.coords.norm()
    }

    /// Arithmetic mean of a non-empty point list
    pub fn mean(points: &[Point]) -> Option<Point> {
        let first = points.first()?;
        let sum = points
            .iter()
            .fold(Point::origin(first.dim()), |acc, p| acc + *p);
        Some(sum / points.len() as f64)
    }

    fn with_coords(&self, coords: Vector3<f64>) -> Self {
        Self {
            coords,
            dim: self.dim,
        }
    }
}

impl From<Point2<f64>> for Point {
    fn from(p: Point2<f64>) -> Self {
        Self::new2(p.x, p.y)
    }
}

impl From<Point3<f64>> for Point {
    fn from(p: Point3<f64>) -> Self {
        Self::new3(p.x, p.y, p.z)
    }
}

impl From<Point> for Point3<f64> {
    fn from(p: Point) -> Self {
        Point3::from(p.coords)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        debug_assert_eq!(self.dim, rhs.dim);
        self.with_coords(self.coords + rhs.coords)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        debug_assert_eq!(self.dim, rhs.dim);
        self.coords += rhs.coords;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        debug_assert_eq!(self.dim, rhs.dim);
        self.with_coords(self.coords - rhs.coords)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        self.with_coords(self.coords * rhs)
    }
}

impl Mul<Point> for f64 {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        rhs * self
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        self.with_coords(self.coords / rhs)
    }
}

impl DivAssign<f64> for Point {
    fn div_assign(&mut self, rhs: f64) {
        self.coords /= rhs;
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        self.with_coords(-self.coords)
    }
}

impl<'a> Sum<&'a Point> for Point {
    fn sum<I: Iterator<Item = &'a Point>>(iter: I) -> Point {
        let mut iter = iter.peekable();
        let dim = iter.peek().map_or(3, |p| p.dim());
        iter.fold(Point::origin(dim), |acc, p| acc + *p)
    }
}
