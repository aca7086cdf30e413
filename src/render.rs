//! Rendering: draws the trilemma scene through a [`RenderSink`].
//!
//! This module never touches a real drawing surface. It receives a read-only
//! [`Scene`] view of engine state and issues the four primitives the host
//! surface implements: clear, fill a polygon, draw rotated text, draw the
//! marker. Layers are painted bottom first:
//!
//! 1. clear
//! 2. base triangle
//! 3. region overlay (debug only)
//! 4. title, axis labels, rate labels, vertex badges
//! 5. marker
//!
//! All sink calls propagate errors via `Result<(), S::Error>`.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::Serialize;

use crate::consts::{
    BADGE_FONT, DEBUG_EDGE_FILL, DEBUG_OUTER_FILL, DEBUG_TIP_FILL, LABEL_COLOR, LABEL_FONT, RATE_FONT, TITLE_COLOR,
    TITLE_FONT, TITLE_TEXT, TRIANGLE_FILL,
};
use crate::geometry::Point;
use crate::layout::{Layout, label_rotation, vertex_badge};
use crate::ratio::{Axis, Ratios, format_percent};
use crate::regions::{RegionCatalogue, RegionKind};

/// Color and font for a text draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle<'a> {
    /// CSS color string.
    pub color: &'a str,
    /// CSS font shorthand, e.g. `"bold 20px sans-serif"`.
    pub font: &'a str,
}

/// Drawing collaborator supplied by the host.
pub trait RenderSink {
    type Error;

    /// Erase the whole surface.
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Fill the closed polygon through `points` with `color`.
    fn fill_polygon(&mut self, points: &[Point], color: &str) -> Result<(), Self::Error>;

    /// Draw `text` centered on `anchor`, rotated by `angle_deg` degrees.
    ///
    /// `'\n'` separates lines; lines stack downward from the anchor.
    fn draw_text(&mut self, text: &str, style: TextStyle<'_>, angle_deg: f64, anchor: Point) -> Result<(), Self::Error>;

    /// Draw the marker disk. `highlighted` is set while the marker is being dragged.
    fn draw_marker(&mut self, center: Point, radius: f64, highlighted: bool) -> Result<(), Self::Error>;
}

/// Read-only view of everything the scene depends on.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub layout: &'a Layout,
    pub regions: &'a RegionCatalogue,
    pub marker: Point,
    pub marker_radius: f64,
    pub ratios: Ratios,
    pub dragging: bool,
    pub debug_overlay: bool,
}

/// Draw the full scene.
///
/// # Errors
///
/// Returns the first error reported by the sink; later layers are skipped.
pub fn draw<S: RenderSink + ?Sized>(sink: &mut S, scene: &Scene<'_>) -> Result<(), S::Error> {
    let layout = scene.layout;

    // Layer 1 + 2: clear and paint the triangle.
    sink.clear()?;
    sink.fill_polygon(layout.base.vertices(), TRIANGLE_FILL)?;

    // Layer 3: classification regions.
    if scene.debug_overlay {
        draw_regions(sink, scene.regions)?;
    }

    // Layer 4: text.
    sink.draw_text(TITLE_TEXT, TextStyle { color: TITLE_COLOR, font: TITLE_FONT }, 0.0, layout.center)?;
    draw_axis_text(sink, layout, &scene.ratios)?;
    for (i, vertex) in layout.base.vertices().iter().enumerate() {
        sink.draw_text(&vertex_badge(i), TextStyle { color: LABEL_COLOR, font: BADGE_FONT }, 0.0, *vertex)?;
    }

    // Layer 5: marker.
    sink.draw_marker(scene.marker, scene.marker_radius, scene.dragging)
}

fn draw_regions<S: RenderSink + ?Sized>(sink: &mut S, regions: &RegionCatalogue) -> Result<(), S::Error> {
    for region in regions.regions() {
        let color = match region.id.kind() {
            RegionKind::Tip => DEBUG_TIP_FILL,
            RegionKind::InnerEdge => DEBUG_EDGE_FILL,
            RegionKind::OuterEdge => DEBUG_OUTER_FILL,
            RegionKind::Center => continue,
        };
        sink.fill_polygon(region.polygon.vertices(), color)?;
    }
    Ok(())
}

fn draw_axis_text<S: RenderSink + ?Sized>(sink: &mut S, layout: &Layout, ratios: &Ratios) -> Result<(), S::Error> {
    for axis in Axis::ALL {
        let i = axis.edge_index();
        let angle = label_rotation(i);
        if let Some(anchor) = layout.label_anchors.get(i) {
            sink.draw_text(axis.label(), TextStyle { color: LABEL_COLOR, font: LABEL_FONT }, angle, *anchor)?;
        }
        if let Some(anchor) = layout.rate_anchors.get(i) {
            let text = format_percent(ratios.get(axis), 0);
            sink.draw_text(&text, TextStyle { color: LABEL_COLOR, font: RATE_FONT }, angle, *anchor)?;
        }
    }
    Ok(())
}

// =============================================================
// Display list
// =============================================================

/// One recorded sink call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawCommand {
    Clear,
    FillPolygon { points: Vec<Point>, color: String },
    Text { text: String, color: String, font: String, angle_deg: f64, anchor: Point },
    Marker { center: Point, radius: f64, highlighted: bool },
}

/// A sink that records draw calls instead of painting.
///
/// Useful for hosts that replay commands on their own surface, and for
/// asserting on what a frame would draw.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Text of every `Text` command, in draw order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl RenderSink for DisplayList {
    type Error = std::convert::Infallible;

    fn clear(&mut self) -> Result<(), Self::Error> {
        // A clear discards everything drawn before it.
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[Point], color: &str) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::FillPolygon { points: points.to_vec(), color: color.to_owned() });
        Ok(())
    }

    fn draw_text(&mut self, text: &str, style: TextStyle<'_>, angle_deg: f64, anchor: Point) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            color: style.color.to_owned(),
            font: style.font.to_owned(),
            angle_deg,
            anchor,
        });
        Ok(())
    }

    fn draw_marker(&mut self, center: Point, radius: f64, highlighted: bool) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Marker { center, radius, highlighted });
        Ok(())
    }
}
