//! Shared constants for the trilemma crate.

// ── Geometry defaults ───────────────────────────────────────────

/// Default circumradius of the base triangle, in surface pixels.
pub const DEFAULT_RADIUS: f64 = 220.0;

/// Default radius of the vertex exclusion disks (and surface margin).
pub const DEFAULT_VERTEX_HIT_RADIUS: f64 = 50.0;

/// Default marker radius.
pub const DEFAULT_MARKER_RADIUS: f64 = 5.0;

// ── Layout offsets ──────────────────────────────────────────────

/// Extra radius (beyond the vertex margin) of the triangle whose edge midpoints anchor the arrows.
pub const ARROW_RING_OFFSET: f64 = 10.0;

/// Extra radius (beyond the vertex margin) of the triangle whose edge midpoints anchor the rate labels.
pub const RATE_RING_OFFSET: f64 = 100.0;

/// Gap added between lines of multi-line text.
pub const TEXT_LINE_GAP: f64 = 10.0;

// ── Colors and fonts ────────────────────────────────────────────

pub const TRIANGLE_FILL: &str = "#9fc3f5";
pub const TITLE_COLOR: &str = "#005eca";
pub const LABEL_COLOR: &str = "#00469b";
pub const MARKER_FILL: &str = "#e44d46";
pub const MARKER_HALO: &str = "#fca7aa";

/// Width of the halo stroke around a marker being dragged.
pub const MARKER_HALO_WIDTH: f64 = 5.0;

pub const TITLE_FONT: &str = "bold 30px sans-serif";
pub const LABEL_FONT: &str = "bold 20px sans-serif";
pub const RATE_FONT: &str = "bold 18px sans-serif";
pub const BADGE_FONT: &str = "bold 14px sans-serif";

pub const TITLE_TEXT: &str = "ENERGY\nTRILEMMA";

// ── Debug overlay ───────────────────────────────────────────────

pub const DEBUG_TIP_FILL: &str = "rgba(228, 77, 70, 0.35)";
pub const DEBUG_EDGE_FILL: &str = "rgba(0, 94, 202, 0.25)";
pub const DEBUG_OUTER_FILL: &str = "rgba(60, 160, 90, 0.25)";
