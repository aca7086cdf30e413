#![allow(clippy::float_cmp)]

use super::*;
use crate::config::{ConstraintMode, OuterEdges};
use crate::render::{DisplayList, DrawCommand, TextStyle};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().with_max_level(tracing::Level::TRACE).try_init();
}

fn new_core() -> EngineCore {
    EngineCore::new(TrilemmaConfig::default()).unwrap()
}

fn offset(core: &EngineCore, dx: f64, dy: f64) -> Point {
    let c = core.layout().center;
    Point::new(c.x + dx, c.y + dy)
}

fn centroid_of(core: &EngineCore, id: RegionId) -> Point {
    core.regions().get(id).unwrap().polygon.centroid()
}

/// Grab the marker where it currently sits.
fn grab(core: &mut EngineCore) {
    let at = core.marker();
    assert_eq!(core.on_pointer_down(at), vec![Action::RenderNeeded]);
}

/// Sink that rejects every call.
#[derive(Default)]
struct BrokenSink {
    calls: usize,
}

impl RenderSink for BrokenSink {
    type Error = String;

    fn clear(&mut self) -> Result<(), String> {
        self.calls += 1;
        Err("surface lost".into())
    }

    fn fill_polygon(&mut self, _points: &[Point], _color: &str) -> Result<(), String> {
        self.calls += 1;
        Err("surface lost".into())
    }

    fn draw_text(&mut self, _text: &str, _style: TextStyle<'_>, _angle: f64, _anchor: Point) -> Result<(), String> {
        self.calls += 1;
        Err("surface lost".into())
    }

    fn draw_marker(&mut self, _center: Point, _radius: f64, _highlighted: bool) -> Result<(), String> {
        self.calls += 1;
        Err("surface lost".into())
    }
}

fn marker_command(list: &DisplayList) -> Option<&DrawCommand> {
    list.commands().iter().rev().find(|c| matches!(c, DrawCommand::Marker { .. }))
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_starts_idle_at_center_with_even_ratios() {
    let core = new_core();
    assert_eq!(core.drag_state(), DragState::Idle);
    assert_eq!(core.marker(), core.layout().center);
    assert_eq!(core.region(), RegionId::Center);
    assert_eq!(core.ratios(), Ratios::EVEN);
}

#[test]
fn new_rejects_invalid_config() {
    let err = EngineCore::new(TrilemmaConfig { radius: -5.0, ..Default::default() }).unwrap_err();
    assert!(matches!(err, TrilemmaError::InvalidConfig(_)));
}

#[test]
fn new_rejects_vertex_disks_covering_the_legal_zone() {
    let cfg = TrilemmaConfig { vertex_hit_radius: 250.0, ..Default::default() };
    let err = EngineCore::new(cfg).unwrap_err();
    assert!(matches!(err, TrilemmaError::InvalidConfig(_)));

    let loose = TrilemmaConfig { constraint: ConstraintMode::ShrunkTriangle, ..cfg };
    let core = EngineCore::new(loose).unwrap();
    assert_eq!(core.legal_zone().mode(), ConstraintMode::ShrunkTriangle);
    assert!(core.legal_zone().contains(core.marker()));
}

#[test]
fn legal_zone_carries_the_configured_mode() {
    assert_eq!(new_core().legal_zone().mode(), ConstraintMode::ExcludeVertices);
}

#[test]
fn regions_follow_outer_edge_setting() {
    assert!(!new_core().regions().has_outer_edges());
    let cfg = TrilemmaConfig { outer_edges: OuterEdges::VertexMargin, ..Default::default() };
    assert!(EngineCore::new(cfg).unwrap().regions().has_outer_edges());
}

// =============================================================
// End-to-end gestures
// =============================================================

#[test]
fn drag_within_center_keeps_even_ratios() {
    init_tracing();
    let mut core = new_core();
    grab(&mut core);
    let actions = core.on_pointer_move(offset(&core, 0.0, 0.0));
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert_eq!(core.ratios(), Ratios::EVEN);
    assert_eq!(core.region(), RegionId::Center);
}

#[test]
fn drag_into_tip1_reports_tip_ratios() {
    init_tracing();
    let mut core = new_core();
    let target = centroid_of(&core, RegionId::Tip1);
    grab(&mut core);

    let actions = core.on_pointer_move(target);
    let expected = Ratios { economics: 0.5, reliability: 0.0, sustainability: 0.5 };
    assert_eq!(actions, vec![Action::RatiosChanged(expected), Action::RenderNeeded]);
    assert_eq!(core.marker(), target);
    assert_eq!(core.region(), RegionId::Tip1);
    assert_eq!(core.ratios(), expected);
}

#[test]
fn drag_outside_legal_zone_is_ignored() {
    init_tracing();
    let mut core = new_core();
    grab(&mut core);
    let before = core.marker();

    let outside = offset(&core, 0.0, 150.0);
    assert!(core.on_pointer_move(outside).is_empty());
    assert_eq!(core.marker(), before);
    assert_eq!(core.ratios(), Ratios::EVEN);
    assert_eq!(core.drag_state(), DragState::Dragging);

    // The gesture survives the rejected move.
    let inside = centroid_of(&core, RegionId::Edge2);
    assert!(!core.on_pointer_move(inside).is_empty());
    assert_eq!(core.marker(), inside);
}

#[test]
fn press_off_marker_does_not_start_a_drag() {
    let mut core = new_core();
    let miss = offset(&core, 20.0, 0.0);
    assert!(core.on_pointer_down(miss).is_empty());
    assert_eq!(core.drag_state(), DragState::Idle);

    let elsewhere = centroid_of(&core, RegionId::Tip2);
    assert!(core.on_pointer_move(elsewhere).is_empty());
    assert_eq!(core.marker(), core.layout().center);
    assert_eq!(core.ratios(), Ratios::EVEN);
}

#[test]
fn press_on_marker_rim_grabs() {
    let mut core = new_core();
    let rim = offset(&core, 5.0, 0.0);
    assert_eq!(core.on_pointer_down(rim), vec![Action::RenderNeeded]);
    assert!(core.drag_state().is_dragging());
}

#[test]
fn vertex_exclusion_blocks_corner_moves() {
    let mut core = new_core();
    grab(&mut core);
    let near_top = offset(&core, 0.0, -180.0);
    assert!(core.on_pointer_move(near_top).is_empty());

    let cfg = TrilemmaConfig { constraint: ConstraintMode::ShrunkTriangle, ..Default::default() };
    let mut loose = EngineCore::new(cfg).unwrap();
    grab(&mut loose);
    let actions = loose.on_pointer_move(near_top);
    assert_eq!(actions.len(), 2);
    assert_eq!(loose.region(), RegionId::Tip1);
}

#[test]
fn moving_within_a_region_only_redraws() {
    let mut core = new_core();
    grab(&mut core);
    let tip = centroid_of(&core, RegionId::Tip3);
    assert_eq!(core.on_pointer_move(tip).len(), 2);

    let nudged = Point::new(tip.x + 1.0, tip.y);
    assert_eq!(core.on_pointer_move(nudged), vec![Action::RenderNeeded]);
    assert_eq!(core.marker(), nudged);
    assert_eq!(core.region(), RegionId::Tip3);
}

#[test]
fn returning_to_center_restores_even_ratios() {
    let mut core = new_core();
    grab(&mut core);
    core.on_pointer_move(centroid_of(&core, RegionId::Tip1));
    let back = core.layout().center;
    let actions = core.on_pointer_move(back);
    assert_eq!(actions, vec![Action::RatiosChanged(Ratios::EVEN), Action::RenderNeeded]);
}

#[test]
fn drag_into_inner_edge_leans_toward_its_axis() {
    let mut core = new_core();
    grab(&mut core);
    core.on_pointer_move(centroid_of(&core, RegionId::Edge1));
    assert_eq!(core.region(), RegionId::Edge1);
    assert!((core.ratios().economics - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn outer_bands_reachable_when_enabled() {
    let cfg = TrilemmaConfig { outer_edges: OuterEdges::TipScaled, ..Default::default() };
    let mut core = EngineCore::new(cfg).unwrap();
    grab(&mut core);
    let target = centroid_of(&core, RegionId::Outer1);
    let actions = core.on_pointer_move(target);
    let pure = Ratios { economics: 1.0, reliability: 0.0, sustainability: 0.0 };
    assert_eq!(actions, vec![Action::RatiosChanged(pure), Action::RenderNeeded]);
}

#[test]
fn release_keeps_marker_and_ends_drag() {
    let mut core = new_core();
    grab(&mut core);
    let target = centroid_of(&core, RegionId::Edge3);
    core.on_pointer_move(target);
    assert_eq!(core.on_pointer_up(target), vec![Action::RenderNeeded]);
    assert_eq!(core.drag_state(), DragState::Idle);
    assert_eq!(core.marker(), target);

    // Moves after release do nothing.
    assert!(core.on_pointer_move(core.layout().center).is_empty());
    assert_eq!(core.marker(), target);
}

#[test]
fn release_while_idle_is_a_no_op() {
    let mut core = new_core();
    assert!(core.on_pointer_up(core.layout().center).is_empty());
}

#[test]
fn second_press_while_dragging_is_ignored() {
    let mut core = new_core();
    grab(&mut core);
    assert!(core.on_pointer_down(core.marker()).is_empty());
    assert!(core.drag_state().is_dragging());
}

#[test]
fn marker_can_be_regrabbed_where_it_was_left() {
    let mut core = new_core();
    grab(&mut core);
    let target = centroid_of(&core, RegionId::Tip2);
    core.on_pointer_move(target);
    core.on_pointer_up(target);

    // The old home no longer hits.
    assert!(core.on_pointer_down(core.layout().center).is_empty());
    assert_eq!(core.on_pointer_down(target), vec![Action::RenderNeeded]);
}

// =============================================================
// Scene
// =============================================================

#[test]
fn scene_reflects_core_state() {
    let mut core = new_core();
    grab(&mut core);
    let scene = core.scene();
    assert!(scene.dragging);
    assert_eq!(scene.marker, core.marker());
    assert_eq!(scene.marker_radius, 5.0);
    assert!(!scene.debug_overlay);
}

#[test]
fn core_render_draws_into_display_list() {
    let core = new_core();
    let mut list = DisplayList::new();
    let Ok(()) = core.render(&mut list);
    assert_eq!(list.commands().first(), Some(&DrawCommand::Clear));
    assert!(list.texts().contains(&"33%"));
}

// =============================================================
// Engine with an attached surface
// =============================================================

#[test]
fn engine_without_surface_still_tracks_state() {
    init_tracing();
    let mut engine: Engine<DisplayList> = Engine::new(TrilemmaConfig::default()).unwrap();
    assert!(!engine.is_attached());
    engine.render();

    let home = engine.core.marker();
    engine.on_pointer_down(home);
    let target = centroid_of(&engine.core, RegionId::Tip1);
    let actions = engine.on_pointer_move(target);
    assert_eq!(actions.len(), 2);
    assert_eq!(engine.core.region(), RegionId::Tip1);
}

#[test]
fn attach_draws_immediately() {
    let mut engine: Engine<DisplayList> = Engine::new(TrilemmaConfig::default()).unwrap();
    engine.attach(DisplayList::new());
    assert!(engine.is_attached());
    let list = engine.surface().unwrap();
    assert_eq!(list.commands().len(), 13);
}

#[test]
fn grabbing_redraws_highlighted_marker() {
    let mut engine: Engine<DisplayList> = Engine::new(TrilemmaConfig::default()).unwrap();
    engine.attach(DisplayList::new());
    let home = engine.core.marker();
    engine.on_pointer_down(home);
    let list = engine.surface().unwrap();
    assert!(matches!(marker_command(list), Some(DrawCommand::Marker { highlighted: true, .. })));

    engine.on_pointer_up(home);
    let list = engine.surface().unwrap();
    assert!(matches!(marker_command(list), Some(DrawCommand::Marker { highlighted: false, .. })));
}

#[test]
fn redraw_shows_new_ratios() {
    let mut engine: Engine<DisplayList> = Engine::new(TrilemmaConfig::default()).unwrap();
    engine.attach(DisplayList::new());
    let home = engine.core.marker();
    engine.on_pointer_down(home);
    let target = centroid_of(&engine.core, RegionId::Tip1);
    engine.on_pointer_move(target);

    let texts = engine.surface().unwrap().texts();
    assert_eq!(texts[2], "50%");
    assert_eq!(texts[4], "0%");
    assert_eq!(texts[6], "50%");
    assert!(matches!(marker_command(engine.surface().unwrap()), Some(DrawCommand::Marker { center, .. }) if *center == target));
}

#[test]
fn detach_returns_surface_and_stops_drawing() {
    let mut engine: Engine<DisplayList> = Engine::new(TrilemmaConfig::default()).unwrap();
    engine.attach(DisplayList::new());
    let list = engine.detach().unwrap();
    assert_eq!(list.commands().len(), 13);
    assert!(!engine.is_attached());
    assert!(engine.detach().is_none());

    let home = engine.core.marker();
    assert_eq!(engine.on_pointer_down(home), vec![Action::RenderNeeded]);
}

#[test]
fn sink_errors_do_not_disturb_state() {
    init_tracing();
    let mut engine: Engine<BrokenSink> = Engine::new(TrilemmaConfig::default()).unwrap();
    engine.attach(BrokenSink::default());
    assert_eq!(engine.surface().unwrap().calls, 1);

    let home = engine.core.marker();
    engine.on_pointer_down(home);
    let target = centroid_of(&engine.core, RegionId::Edge2);
    let actions = engine.on_pointer_move(target);
    assert_eq!(actions.len(), 2);
    assert_eq!(engine.core.marker(), target);
    assert_eq!(engine.surface().unwrap().calls, 3);
}
