//! Construction-time configuration for the trilemma widget.
//!
//! Hosts pass configuration as JSON (camelCase keys). Every field is
//! optional; missing fields take the defaults in [`crate::consts`]. The value
//! is validated once in [`crate::engine::EngineCore::new`] and is immutable
//! afterwards.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MARKER_RADIUS, DEFAULT_RADIUS, DEFAULT_VERTEX_HIT_RADIUS};
use crate::error::TrilemmaError;

/// How the legal drag zone is carved out of the triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConstraintMode {
    /// Inside the shrunk triangle and outside the open disks around its vertices.
    #[default]
    ExcludeVertices,
    /// Inside the shrunk triangle only.
    ShrunkTriangle,
}

/// Whether (and how wide) the outer edge bands are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OuterEdges {
    /// No outer regions.
    #[default]
    Disabled,
    /// Outer triangle radius is `radius + 1.5 · tip_radius`.
    TipScaled,
    /// Outer triangle radius is `radius + 2 · vertex_hit_radius`.
    VertexMargin,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrilemmaConfig {
    /// Circumradius of the base triangle.
    pub radius: f64,
    /// Radius of the exclusion disks at the vertices; also the surface margin.
    pub vertex_hit_radius: f64,
    /// Marker radius and pointer-down hit radius.
    pub marker_radius: f64,
    /// Fill every classification region when drawing.
    pub debug_overlay: bool,
    pub constraint: ConstraintMode,
    pub outer_edges: OuterEdges,
}

impl Default for TrilemmaConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            vertex_hit_radius: DEFAULT_VERTEX_HIT_RADIUS,
            marker_radius: DEFAULT_MARKER_RADIUS,
            debug_overlay: false,
            constraint: ConstraintMode::default(),
            outer_edges: OuterEdges::default(),
        }
    }
}

impl TrilemmaConfig {
    /// Parse a JSON document. Missing keys take their defaults; the result is validated.
    ///
    /// # Errors
    ///
    /// Returns [`TrilemmaError::ConfigParse`] for malformed JSON and
    /// [`TrilemmaError::InvalidConfig`] when validation fails.
    pub fn from_json(raw: &str) -> Result<Self, TrilemmaError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the geometric preconditions.
    ///
    /// # Errors
    ///
    /// Returns [`TrilemmaError::InvalidConfig`] naming the first bad field, or
    /// when the vertex exclusion disks would leave the marker nowhere to go.
    pub fn validate(&self) -> Result<(), TrilemmaError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(TrilemmaError::InvalidConfig(format!("radius must be positive, got {}", self.radius)));
        }
        if !self.marker_radius.is_finite() || self.marker_radius <= 0.0 {
            return Err(TrilemmaError::InvalidConfig(format!(
                "markerRadius must be positive, got {}",
                self.marker_radius
            )));
        }
        if !self.vertex_hit_radius.is_finite() || self.vertex_hit_radius < 0.0 {
            return Err(TrilemmaError::InvalidConfig(format!(
                "vertexHitRadius must be non-negative, got {}",
                self.vertex_hit_radius
            )));
        }
        if self.radius <= self.marker_radius * 2.0 {
            return Err(TrilemmaError::InvalidConfig(format!(
                "radius {} leaves no room for a marker of radius {}",
                self.radius, self.marker_radius
            )));
        }
        if self.constraint == ConstraintMode::ExcludeVertices {
            // At this size the vertex disks cover the legal triangle's centroid.
            let legal_radius = self.marker_radius.mul_add(-2.0, self.outer_radius().unwrap_or(self.radius));
            if self.vertex_hit_radius >= legal_radius {
                return Err(TrilemmaError::InvalidConfig(format!(
                    "vertexHitRadius {} must be below the legal triangle radius {legal_radius}",
                    self.vertex_hit_radius
                )));
            }
        }
        Ok(())
    }

    /// Radius of each tip region.
    #[must_use]
    pub fn tip_radius(&self) -> f64 {
        self.radius / 3.0
    }

    /// Radius of the triangle bounding the outer edge bands, if enabled.
    #[must_use]
    pub fn outer_radius(&self) -> Option<f64> {
        match self.outer_edges {
            OuterEdges::Disabled => None,
            OuterEdges::TipScaled => Some(self.tip_radius().mul_add(1.5, self.radius)),
            OuterEdges::VertexMargin => Some(self.vertex_hit_radius.mul_add(2.0, self.radius)),
        }
    }
}
