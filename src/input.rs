//! Input model: keys, buttons, wheel deltas, and the drag-to-pan gesture.
//!
//! The host decodes raw DOM (or windowing) events into these types. The
//! functions here turn them into the arguments of the viewport's pan and zoom
//! calls; none of them touch a viewport themselves, except through
//! [`crate::engine::GraphCore`].

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::{Point, Size, ViewRect};

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key, named as the browser reports it (e.g. `"ArrowUp"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Arrow keys that pan the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanKey {
    Up,
    Down,
    Left,
    Right,
}

impl PanKey {
    /// Recognise an arrow key by name. Any other key yields `None`.
    #[must_use]
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            _ => None,
        }
    }

    /// World translation `(dx, dy)` for one press, `step` world units long.
    #[must_use]
    pub fn delta(self, step: f64) -> (f64, f64) {
        match self {
            Self::Up => (0.0, -step),
            Self::Down => (0.0, step),
            Self::Left => (-step, 0.0),
            Self::Right => (step, 0.0),
        }
    }
}

/// Zoom factor for a vertical wheel delta.
///
/// Scrolling up (`delta_y < 0`) zooms in by `1 / factor`, scrolling down
/// zooms out by `factor`. A purely horizontal scroll does not zoom.
#[must_use]
pub fn wheel_zoom_factor(delta_y: f64, factor: f64) -> Option<f64> {
    if delta_y < 0.0 {
        Some(1.0 / factor)
    } else if delta_y > 0.0 {
        Some(factor)
    } else {
        None
    }
}

/// World translation that makes the content follow a pointer drag of
/// `(screen_dx, screen_dy)` pixels.
///
/// Returns `None` on an empty surface.
#[must_use]
pub fn drag_pan_delta(screen_dx: f64, screen_dy: f64, view: &ViewRect, size: Size) -> Option<(f64, f64)> {
    if size.is_empty() {
        return None;
    }
    let world_dx = screen_dx / size.width * view.width();
    let world_dy = screen_dy / size.height * view.height();
    Some((-world_dx, -world_dy))
}

/// Drag gesture tracked between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is panning the view by dragging.
    Panning {
        /// Screen-space position of the previous pointer event, used to compute pan delta.
        last_screen: Point,
    },
}
