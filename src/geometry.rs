//! Geometry primitives: points, polygons, hit tests and the regular-polygon generator.
//!
//! Everything here is pure. Coordinates are screen space with y pointing down,
//! so "angle-increasing" vertex order reads clockwise on screen.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

use crate::error::TrilemmaError;

/// Initial angle offset that puts vertex 0 straight up.
pub const DEFAULT_INIT_ANGLE: f64 = FRAC_PI_2;

/// A point in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[must_use]
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }
}

/// A closed polygon. The last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Wrap a vertex list.
    ///
    /// # Errors
    ///
    /// Returns [`TrilemmaError::DegeneratePolygon`] for fewer than three vertices.
    pub fn new(vertices: Vec<Point>) -> Result<Self, TrilemmaError> {
        if vertices.len() < 3 {
            return Err(TrilemmaError::DegeneratePolygon { sides: vertices.len() });
        }
        Ok(Self { vertices })
    }

    /// Four-vertex polygon, listed in winding order.
    #[must_use]
    pub fn quad(a: Point, b: Point, c: Point, d: Point) -> Self {
        Self { vertices: vec![a, b, c, d] }
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false: a polygon holds at least three vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex at `index`, wrapping around.
    #[must_use]
    pub fn vertex(&self, index: usize) -> Point {
        self.vertices[index % self.vertices.len()]
    }

    /// Consecutive vertex pairs, including the closing edge (last → first).
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Vertex average. For regular polygons this is the center.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn centroid(&self) -> Point {
        let n = self.vertices.len() as f64;
        let (sx, sy) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Point::new(sx / n, sy / n)
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point_in_polygon(point, self)
    }
}

/// Even-odd ray casting test.
///
/// Casts a ray from `point` toward +x and counts edge crossings. Each edge is
/// treated as the half-open interval `(yi > y) != (yj > y)`, so horizontal
/// edges never count and shared vertices count once. Points exactly on an
/// edge land on whichever side this rule gives them; nothing more is promised.
#[must_use]
pub fn point_in_polygon(point: Point, polygon: &Polygon) -> bool {
    let Point { x, y } = point;
    let mut inside = false;
    for (a, b) in polygon.edges() {
        if (a.y > y) != (b.y > y) {
            let cross_x = (b.x - a.x) * (y - a.y) / (b.y - a.y) + a.x;
            if x < cross_x {
                inside = !inside;
            }
        }
    }
    inside
}

/// Open-disk test: strictly closer than `radius` to `center`.
#[must_use]
pub fn point_in_circle(point: Point, center: Point, radius: f64) -> bool {
    point.distance(center) < radius
}

/// Vertices of a regular polygon.
///
/// Vertex `i` sits at angle `i·2π/sides − init_angle` around `center`, with
/// `cos` on x and `sin` on y.
///
/// # Errors
///
/// Returns [`TrilemmaError::DegeneratePolygon`] when `sides < 3`.
pub fn regular_polygon(radius: f64, center: Point, init_angle: f64, sides: usize) -> Result<Polygon, TrilemmaError> {
    if sides < 3 {
        return Err(TrilemmaError::DegeneratePolygon { sides });
    }
    Ok(Polygon { vertices: ring(radius, center, init_angle, sides) })
}

/// Point-up equilateral triangle around `center`.
#[must_use]
pub fn triangle(radius: f64, center: Point) -> Polygon {
    Polygon { vertices: ring(radius, center, DEFAULT_INIT_ANGLE, 3) }
}

#[allow(clippy::cast_precision_loss)]
fn ring(radius: f64, center: Point, init_angle: f64, sides: usize) -> Vec<Point> {
    let step = TAU / sides as f64;
    (0..sides)
        .map(|i| {
            let angle = step.mul_add(i as f64, -init_angle);
            Point::new(radius.mul_add(angle.cos(), center.x), radius.mul_add(angle.sin(), center.y))
        })
        .collect()
}

/// Midpoint of every edge, in edge order (edge `i` runs from vertex `i` to `i + 1`).
#[must_use]
pub fn edge_midpoints(polygon: &Polygon) -> Vec<Point> {
    polygon.edges().map(|(a, b)| a.midpoint(b)).collect()
}
