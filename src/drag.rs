//! Drag model: the grab/release state machine and the legal zone candidates must satisfy.
//!
//! `DragState` only records whether a gesture is active. The marker point
//! itself lives in the engine because it outlives individual gestures.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::config::{ConstraintMode, TrilemmaConfig};
use crate::geometry::{Point, Polygon, point_in_circle, triangle};

/// Gesture state between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No gesture; waiting for a pointer-down on the marker.
    #[default]
    Idle,
    /// The marker follows legal pointer moves.
    Dragging,
}

impl DragState {
    #[must_use]
    pub fn is_dragging(self) -> bool {
        self == Self::Dragging
    }
}

/// Whether a pointer-down at `pointer` grabs a marker at `marker`.
///
/// The hit circle is closed: a press exactly on the rim counts.
#[must_use]
pub fn hits_marker(pointer: Point, marker: Point, marker_radius: f64) -> bool {
    pointer.distance(marker) <= marker_radius
}

/// The set of positions the marker may occupy.
///
/// A triangle shrunk by the marker diameter, optionally minus open disks
/// around its vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct LegalZone {
    polygon: Polygon,
    exclusion_radius: f64,
    mode: ConstraintMode,
}

impl LegalZone {
    /// Build the zone for `config` around `center`.
    ///
    /// The bounding triangle is the base triangle, or the outer band triangle
    /// when outer edges are enabled so those bands stay reachable.
    #[must_use]
    pub fn new(center: Point, config: &TrilemmaConfig) -> Self {
        let bound = config.outer_radius().unwrap_or(config.radius);
        Self {
            polygon: triangle(config.marker_radius.mul_add(-2.0, bound), center),
            exclusion_radius: config.vertex_hit_radius,
            mode: config.constraint,
        }
    }

    #[must_use]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    #[must_use]
    pub fn mode(&self) -> ConstraintMode {
        self.mode
    }

    /// Whether the marker may move to `candidate`.
    #[must_use]
    pub fn contains(&self, candidate: Point) -> bool {
        if self.mode == ConstraintMode::ExcludeVertices
            && self
                .polygon
                .vertices()
                .iter()
                .any(|&v| point_in_circle(candidate, v, self.exclusion_radius))
        {
            return false;
        }
        self.polygon.contains(candidate)
    }
}
