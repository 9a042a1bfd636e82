#![allow(clippy::float_cmp)]

use super::*;
use crate::element::{Rectangle, Shape};
use crate::surface::RecordingSurface;

// =============================================================
// Helpers
// =============================================================

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn key(name: &str) -> Key {
    Key(name.to_owned())
}

fn wheel(dy: f64) -> WheelDelta {
    WheelDelta { dx: 0.0, dy }
}

fn core() -> GraphCore {
    GraphCore::from_config(&GraphConfig {
        pan_step: 10.0,
        zoom_factor: 1.05,
        view: ViewRect::new(0.0, 200.0, 0.0, 400.0),
        size: Size::new(800.0, 600.0),
    })
}

// =============================================================
// Construction
// =============================================================

#[test]
fn default_core_uses_default_config() {
    let core = GraphCore::new();
    assert_eq!(core.view(), ViewRect::new(0.0, 200.0, 0.0, 400.0));
    assert_eq!(core.viewport.size(), Size::new(800.0, 600.0));
    assert!(!core.is_panning());
}

// =============================================================
// Keyboard
// =============================================================

#[test]
fn arrow_up_moves_view_up() {
    let mut core = core();
    let action = core.on_key_down(&key("ArrowUp"));
    assert_eq!(core.view(), ViewRect::new(0.0, 200.0, -10.0, 390.0));
    assert_eq!(action, Action::ViewChanged(core.view()));
}

#[test]
fn arrow_right_moves_view_right() {
    let mut core = core();
    core.on_key_down(&key("ArrowRight"));
    assert_eq!(core.view(), ViewRect::new(10.0, 210.0, 0.0, 400.0));
}

#[test]
fn opposite_arrows_cancel() {
    let mut core = core();
    let before = core.view();
    core.on_key_down(&key("ArrowLeft"));
    core.on_key_down(&key("ArrowDown"));
    core.on_key_down(&key("ArrowRight"));
    core.on_key_down(&key("ArrowUp"));
    assert_eq!(core.view(), before);
}

#[test]
fn non_arrow_key_is_ignored() {
    let mut core = core();
    let before = core.view();
    assert_eq!(core.on_key_down(&key("Enter")), Action::None);
    assert_eq!(core.view(), before);
}

#[test]
fn pan_step_is_configurable() {
    let mut core = core();
    core.pan_step = 2.5;
    core.on_key_down(&key("ArrowLeft"));
    assert_eq!(core.view().left, -2.5);
}

// =============================================================
// Wheel
// =============================================================

#[test]
fn wheel_up_zooms_in_about_cursor() {
    let mut core = core();
    let cursor = pt(200.0, 150.0);
    let anchor = core.viewport.surface_to_world(cursor).unwrap();

    let action = core.on_wheel(cursor, wheel(-100.0));
    assert!(matches!(action, Action::ViewChanged(_)));
    assert!(approx_eq(core.view().width(), 200.0 / 1.05));

    let after = core.viewport.surface_to_world(cursor).unwrap();
    assert!(approx_eq(anchor.x, after.x));
    assert!(approx_eq(anchor.y, after.y));
}

#[test]
fn wheel_down_zooms_out() {
    let mut core = core();
    core.on_wheel(pt(400.0, 300.0), wheel(100.0));
    assert!(approx_eq(core.view().width(), 210.0));
    assert!(approx_eq(core.view().height(), 420.0));
}

#[test]
fn horizontal_wheel_is_ignored() {
    let mut core = core();
    let before = core.view();
    let action = core.on_wheel(pt(400.0, 300.0), WheelDelta { dx: 50.0, dy: 0.0 });
    assert_eq!(action, Action::None);
    assert_eq!(core.view(), before);
}

#[test]
fn wheel_on_empty_surface_is_ignored() {
    let mut core = core();
    core.on_resize(Size::ZERO);
    let before = core.view();
    assert_eq!(core.on_wheel(pt(0.0, 0.0), wheel(-1.0)), Action::None);
    assert_eq!(core.view(), before);
}

// =============================================================
// Drag pan
// =============================================================

#[test]
fn primary_drag_pans_with_pointer() {
    let mut core = core();
    core.on_pointer_down(pt(400.0, 300.0), Button::Primary);
    assert!(core.is_panning());

    // 80px right on an 800px surface showing 200 world units = 20 units.
    let action = core.on_pointer_move(pt(480.0, 300.0));
    assert!(matches!(action, Action::ViewChanged(_)));
    assert!(approx_eq(core.view().left, -20.0));
    assert!(approx_eq(core.view().right, 180.0));
    assert!(approx_eq(core.view().top, 0.0));
}

#[test]
fn drag_deltas_are_incremental() {
    let mut core = core();
    core.on_pointer_down(pt(0.0, 0.0), Button::Primary);
    core.on_pointer_move(pt(0.0, 150.0));
    core.on_pointer_move(pt(0.0, 300.0));
    // 300px of 600px surface showing 400 world units = 200 units.
    assert!(approx_eq(core.view().top, -200.0));
}

#[test]
fn content_under_pointer_follows_drag() {
    let mut core = core();
    let start = pt(123.0, 456.0);
    let end = pt(321.0, 54.0);
    let grabbed = core.viewport.surface_to_world(start).unwrap();

    core.on_pointer_down(start, Button::Primary);
    core.on_pointer_move(end);

    let under_pointer = core.viewport.surface_to_world(end).unwrap();
    assert!(approx_eq(grabbed.x, under_pointer.x));
    assert!(approx_eq(grabbed.y, under_pointer.y));
}

#[test]
fn move_without_button_does_nothing() {
    let mut core = core();
    let before = core.view();
    assert_eq!(core.on_pointer_move(pt(50.0, 50.0)), Action::None);
    assert_eq!(core.view(), before);
}

#[test]
fn secondary_button_does_not_pan() {
    let mut core = core();
    core.on_pointer_down(pt(0.0, 0.0), Button::Secondary);
    assert!(!core.is_panning());
}

#[test]
fn pointer_up_ends_pan() {
    let mut core = core();
    core.on_pointer_down(pt(0.0, 0.0), Button::Primary);
    core.on_pointer_up(Button::Primary);
    assert!(!core.is_panning());
    let before = core.view();
    core.on_pointer_move(pt(100.0, 100.0));
    assert_eq!(core.view(), before);
}

// =============================================================
// Resize / render
// =============================================================

#[test]
fn resize_updates_size() {
    let mut core = core();
    assert!(matches!(core.on_resize(Size::new(1024.0, 768.0)), Action::ViewChanged(_)));
    assert_eq!(core.viewport.size(), Size::new(1024.0, 768.0));
}

#[test]
fn resize_to_same_size_is_noop() {
    let mut core = core();
    assert_eq!(core.on_resize(Size::new(800.0, 600.0)), Action::None);
}

#[test]
fn render_uses_current_view() {
    let mut core = core();
    core.on_key_down(&key("ArrowRight"));

    let shapes: Vec<Shape> = vec![Rectangle::new(Point::new(10.0, 0.0), 20.0, 40.0).into()];
    let mut surface = RecordingSurface::new();
    let stats = core.render(&mut surface, &shapes).unwrap();
    assert_eq!(stats.drawn, 1);

    let (rect, _) = surface.fills().next().unwrap();
    assert!(approx_eq(rect.x, 0.0));
    assert!(approx_eq(rect.width, 80.0));
    assert!(approx_eq(rect.height, 60.0));
}
