//! Canvas surface: paints trilemma draw calls onto a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::f64::consts::PI;

use trilemma::Point;
use trilemma::consts::{MARKER_FILL, MARKER_HALO, MARKER_HALO_WIDTH, TEXT_LINE_GAP};
use trilemma::render::{RenderSink, TextStyle};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// A `<canvas>` element and its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the 2D context of `canvas`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// Set the backing store size in pixels, rounding up.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn resize(&self, width: f64, height: f64) {
        self.canvas.set_width(width.ceil().max(0.0) as u32);
        self.canvas.set_height(height.ceil().max(0.0) as u32);
    }

    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Convert client (viewport) coordinates into surface coordinates.
    #[must_use]
    pub fn client_to_surface(&self, client_x: f64, client_y: f64) -> Point {
        let rect = self.canvas.get_bounding_client_rect();
        Point::new(client_x - rect.left(), client_y - rect.top())
    }
}

impl RenderSink for CanvasSurface {
    type Error = JsValue;

    fn clear(&mut self) -> Result<(), JsValue> {
        let w = f64::from(self.canvas.width());
        let h = f64::from(self.canvas.height());
        self.ctx.clear_rect(0.0, 0.0, w, h);
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[Point], color: &str) -> Result<(), JsValue> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for p in rest {
            self.ctx.line_to(p.x, p.y);
        }
        self.ctx.close_path();
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        Ok(())
    }

    fn draw_text(&mut self, text: &str, style: TextStyle<'_>, angle_deg: f64, anchor: Point) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.save();
        ctx.translate(anchor.x, anchor.y)?;
        ctx.rotate(angle_deg.to_radians())?;
        ctx.set_font(style.font);
        ctx.set_fill_style_str(style.color);
        ctx.set_text_align("center");

        // One measurement of the whole block sets the line height for every line.
        let metrics = ctx.measure_text(text)?;
        let h = metrics.actual_bounding_box_ascent() + metrics.actual_bounding_box_descent();
        let lines: Vec<&str> = text.split('\n').collect();
        for (line, y) in lines.iter().zip(line_offsets(lines.len(), h)) {
            ctx.fill_text(line, 0.0, y)?;
        }

        ctx.restore();
        Ok(())
    }

    fn draw_marker(&mut self, center: Point, radius: f64, highlighted: bool) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI)?;
        for pass in marker_passes(highlighted) {
            match pass {
                MarkerPass::Halo => {
                    ctx.set_stroke_style_str(MARKER_HALO);
                    ctx.set_line_width(MARKER_HALO_WIDTH);
                    ctx.stroke();
                }
                MarkerPass::Fill => {
                    ctx.set_fill_style_str(MARKER_FILL);
                    ctx.fill();
                }
            }
        }
        Ok(())
    }
}

/// One paint operation on the marker path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarkerPass {
    Halo,
    Fill,
}

/// Paint order for the marker. The fill goes last so it covers the inner half
/// of the halo stroke.
fn marker_passes(highlighted: bool) -> &'static [MarkerPass] {
    if highlighted { &[MarkerPass::Halo, MarkerPass::Fill] } else { &[MarkerPass::Fill] }
}

/// Baselines for `lines` rows of height `h`: row i sits at `h/2 + i·h`, with
/// [`TEXT_LINE_GAP`] added to every row after the first.
fn line_offsets(lines: usize, h: f64) -> Vec<f64> {
    let mut offsets = Vec::with_capacity(lines);
    let mut row: f64 = 0.0;
    for _ in 0..lines {
        let gap = if offsets.is_empty() { 0.0 } else { TEXT_LINE_GAP };
        offsets.push(row.mul_add(h, h / 2.0) + gap);
        row += 1.0;
    }
    offsets
}
