use tracing::{debug, trace, warn};

use crate::classify::classify;
use crate::config::TrilemmaConfig;
use crate::drag::{DragState, LegalZone, hits_marker};
use crate::error::TrilemmaError;
use crate::geometry::Point;
use crate::layout::Layout;
use crate::ratio::{Ratios, ratio_for};
use crate::regions::{RegionCatalogue, RegionId};
use crate::render::{self, RenderSink, Scene};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// The marker entered a region with a different target; replace the stored ratios.
    RatiosChanged(Ratios),
    /// The scene changed and should be redrawn.
    RenderNeeded,
}

/// Core engine state: all logic that doesn't depend on a drawing surface.
///
/// Separated from `Engine` so it can be tested without a host.
#[derive(Debug, Clone)]
pub struct EngineCore {
    config: TrilemmaConfig,
    layout: Layout,
    regions: RegionCatalogue,
    legal: LegalZone,
    drag: DragState,
    marker: Point,
    region: RegionId,
    ratios: Ratios,
}

impl EngineCore {
    /// Validate `config` and build the fixed geometry.
    ///
    /// # Errors
    ///
    /// Returns [`TrilemmaError::InvalidConfig`] if the configuration is rejected.
    pub fn new(config: TrilemmaConfig) -> Result<Self, TrilemmaError> {
        config.validate()?;
        let layout = Layout::new(&config);
        let regions = RegionCatalogue::build(layout.center, config.radius, config.outer_radius());
        let legal = LegalZone::new(layout.center, &config);
        debug!(
            radius = config.radius,
            width = layout.width,
            height = layout.height,
            regions = regions.regions().len(),
            constraint = ?legal.mode(),
            "trilemma engine built"
        );
        Ok(Self {
            config,
            marker: layout.center,
            layout,
            regions,
            legal,
            drag: DragState::Idle,
            region: RegionId::Center,
            ratios: Ratios::EVEN,
        })
    }

    // --- Input events ---

    /// Start a drag if `pt` lands on the marker.
    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        if self.drag.is_dragging() || !hits_marker(pt, self.marker, self.config.marker_radius) {
            return Vec::new();
        }
        self.drag = DragState::Dragging;
        trace!(x = pt.x, y = pt.y, "marker grabbed");
        vec![Action::RenderNeeded]
    }

    /// Move the marker to `pt` if a drag is active and `pt` is legal.
    ///
    /// Illegal candidates are dropped; the drag stays active.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        if !self.drag.is_dragging() {
            return Vec::new();
        }
        if !self.legal.contains(pt) {
            trace!(x = pt.x, y = pt.y, "move rejected outside legal zone");
            return Vec::new();
        }

        self.marker = pt;
        let mut actions = Vec::with_capacity(2);
        let region = classify(pt, &self.regions);
        self.region = region;
        let ratios = ratio_for(region);
        if ratios != self.ratios {
            self.ratios = ratios;
            debug!(?region, ?ratios, "target ratios changed");
            actions.push(Action::RatiosChanged(ratios));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// End the drag. The marker stays where it is.
    pub fn on_pointer_up(&mut self, _pt: Point) -> Vec<Action> {
        if !self.drag.is_dragging() {
            return Vec::new();
        }
        self.drag = DragState::Idle;
        trace!(x = self.marker.x, y = self.marker.y, "marker released");
        vec![Action::RenderNeeded]
    }

    // --- Render ---

    /// Draw the current state through `sink`.
    ///
    /// # Errors
    ///
    /// Propagates the first sink error.
    pub fn render<S: RenderSink + ?Sized>(&self, sink: &mut S) -> Result<(), S::Error> {
        render::draw(sink, &self.scene())
    }

    #[must_use]
    pub fn scene(&self) -> Scene<'_> {
        Scene {
            layout: &self.layout,
            regions: &self.regions,
            marker: self.marker,
            marker_radius: self.config.marker_radius,
            ratios: self.ratios,
            dragging: self.drag.is_dragging(),
            debug_overlay: self.config.debug_overlay,
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &TrilemmaConfig {
        &self.config
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[must_use]
    pub fn regions(&self) -> &RegionCatalogue {
        &self.regions
    }

    #[must_use]
    pub fn legal_zone(&self) -> &LegalZone {
        &self.legal
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    #[must_use]
    pub fn marker(&self) -> Point {
        self.marker
    }

    /// Region the marker currently sits in.
    #[must_use]
    pub fn region(&self) -> RegionId {
        self.region
    }

    #[must_use]
    pub fn ratios(&self) -> Ratios {
        self.ratios
    }
}

/// The full engine. Wraps `EngineCore` and owns the drawing surface once attached.
pub struct Engine<S> {
    surface: Option<S>,
    pub core: EngineCore,
}

impl<S: RenderSink> Engine<S>
where
    S::Error: std::fmt::Debug,
{
    /// Create an engine with no surface attached.
    ///
    /// # Errors
    ///
    /// Returns [`TrilemmaError::InvalidConfig`] if the configuration is rejected.
    pub fn new(config: TrilemmaConfig) -> Result<Self, TrilemmaError> {
        Ok(Self { surface: None, core: EngineCore::new(config)? })
    }

    // --- Surface ---

    /// Take ownership of `surface` and draw the current state onto it.
    ///
    /// Replaces (and drops) any previously attached surface.
    pub fn attach(&mut self, surface: S) {
        self.surface = Some(surface);
        debug!("surface attached");
        self.render();
    }

    /// Release the surface. Later redraws are no-ops until the next `attach`.
    pub fn detach(&mut self) -> Option<S> {
        debug!("surface detached");
        self.surface.take()
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        let actions = self.core.on_pointer_down(pt);
        self.apply(&actions);
        actions
    }

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        let actions = self.core.on_pointer_move(pt);
        self.apply(&actions);
        actions
    }

    pub fn on_pointer_up(&mut self, pt: Point) -> Vec<Action> {
        let actions = self.core.on_pointer_up(pt);
        self.apply(&actions);
        actions
    }

    // --- Render ---

    /// Draw the current state. A no-op without a surface.
    pub fn render(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            debug!("render skipped: no surface attached");
            return;
        };
        if let Err(e) = self.core.render(surface) {
            warn!(error = ?e, "render failed");
        }
    }

    fn apply(&mut self, actions: &[Action]) {
        if actions.contains(&Action::RenderNeeded) {
            self.render();
        }
    }
}
