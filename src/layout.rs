//! Surface layout: dimensions and every fixed anchor derived from the configuration.
//!
//! Computed once at construction. The surface is sized so the base triangle
//! plus a `vertex_hit_radius` margin on every side fits exactly. When outer
//! edges are enabled it grows further to hold the whole outer triangle, since
//! the marker may be dragged anywhere inside it.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use serde::Serialize;

use crate::config::TrilemmaConfig;
use crate::consts::{ARROW_RING_OFFSET, RATE_RING_OFFSET};
use crate::geometry::{Point, Polygon, edge_midpoints, triangle};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Surface width in pixels.
    pub width: f64,
    /// Surface height in pixels.
    pub height: f64,
    /// Centroid of the base triangle; the marker's home.
    pub center: Point,
    /// The drawn triangle.
    pub base: Polygon,
    /// Axis label anchors, one per edge.
    pub label_anchors: Vec<Point>,
    /// Percentage label anchors, one per edge, outside the triangle.
    pub rate_anchors: Vec<Point>,
    /// Arrow image anchors, one per edge. Drawn by the host.
    pub arrow_anchors: Vec<Point>,
}

impl Layout {
    #[must_use]
    pub fn new(config: &TrilemmaConfig) -> Self {
        let r = config.radius;
        let margin = config.vertex_hit_radius;
        let bound = config.outer_radius().unwrap_or(r);
        // Extents from the center: half the width, above, below.
        let half_width = (half_side(r) + margin).max(half_side(bound));
        let above = (r + margin).max(bound);
        let below = r.mul_add(0.5, margin).max(bound / 2.0);
        let center = Point::new(half_width, above);

        Self {
            width: half_width * 2.0,
            height: above + below,
            center,
            base: triangle(r, center),
            label_anchors: edge_midpoints(&triangle(r - margin, center)),
            rate_anchors: edge_midpoints(&triangle(r + margin + RATE_RING_OFFSET, center)),
            arrow_anchors: edge_midpoints(&triangle(r + margin + ARROW_RING_OFFSET, center)),
        }
    }
}

/// Rotation in degrees for text laid along edge `index` (labels and rates).
#[must_use]
pub fn label_rotation(index: usize) -> f64 {
    60.0 - 60.0 * edge_factor(index)
}

/// Rotation in degrees for the arrow along edge `index`.
#[must_use]
pub fn arrow_rotation(index: usize) -> f64 {
    120.0f64.mul_add(edge_factor(index), 60.0)
}

/// Zero-padded vertex badge text: `"01"`, `"02"`, `"03"`.
#[must_use]
pub fn vertex_badge(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// Half the side length of an equilateral triangle with circumradius `radius`.
fn half_side(radius: f64) -> f64 {
    radius.mul_add(radius, -(radius / 2.0).powi(2)).sqrt()
}

fn edge_factor(index: usize) -> f64 {
    f64::from(u8::try_from(index % 3).unwrap_or(0))
}
