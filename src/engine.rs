use crate::config::GraphConfig;
use crate::element::SceneElement;
use crate::geom::{Point, Size, ViewRect};
use crate::input::{Button, DragState, Key, PanKey, WheelDelta, drag_pan_delta, wheel_zoom_factor};
use crate::render::{self, RenderStats};
use crate::surface::{Surface, SurfaceError};
use crate::viewport::Viewport;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    None,
    /// The view changed; the host should redraw (and may persist the new view).
    ViewChanged(ViewRect),
}

/// Controller state: the viewport plus the input tuning and drag gesture
/// that drive it.
///
/// Holds no reference to the drawing surface or the element list, so it can
/// be tested without a browser.
#[derive(Debug, Clone)]
pub struct GraphCore {
    pub viewport: Viewport,
    pub drag: DragState,
    pub pan_step: f64,
    pub zoom_factor: f64,
}

impl Default for GraphCore {
    fn default() -> Self {
        Self::from_config(&GraphConfig::default())
    }
}

impl GraphCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(config: &GraphConfig) -> Self {
        Self {
            viewport: Viewport::new(config.view, config.size),
            drag: DragState::Idle,
            pan_step: config.pan_step,
            zoom_factor: config.zoom_factor,
        }
    }

    fn changed(&self) -> Action {
        Action::ViewChanged(self.viewport.view())
    }

    // --- Surface ---

    /// Record the new surface size after a resize.
    pub fn on_resize(&mut self, size: Size) -> Action {
        if self.viewport.size() == size {
            return Action::None;
        }
        self.viewport.set_size(size);
        self.changed()
    }

    // --- Input events ---

    /// Arrow keys pan by `pan_step` world units; other keys are ignored.
    pub fn on_key_down(&mut self, key: &Key) -> Action {
        let Some(pan) = PanKey::from_key_name(&key.0) else {
            return Action::None;
        };
        let (dx, dy) = pan.delta(self.pan_step);
        self.viewport.move_view(dx, dy);
        self.changed()
    }

    /// Zoom about the cursor. Scrolling up zooms in.
    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Action {
        let Some(factor) = wheel_zoom_factor(delta.dy, self.zoom_factor) else {
            return Action::None;
        };
        if self.viewport.scale_view_with_origin(factor, screen_pt) {
            self.changed()
        } else {
            Action::None
        }
    }

    /// Start a pan when the primary button goes down.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Action {
        if button == Button::Primary {
            self.drag = DragState::Panning { last_screen: screen_pt };
        }
        Action::None
    }

    /// Pan by the pointer movement since the previous event, if dragging.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Action {
        let DragState::Panning { last_screen } = self.drag else {
            return Action::None;
        };
        self.drag = DragState::Panning { last_screen: screen_pt };

        let delta = drag_pan_delta(
            screen_pt.x - last_screen.x,
            screen_pt.y - last_screen.y,
            &self.viewport.view(),
            self.viewport.size(),
        );
        let Some((dx, dy)) = delta else {
            return Action::None;
        };
        self.viewport.move_view(dx, dy);
        self.changed()
    }

    /// End the pan when the primary button is released.
    pub fn on_pointer_up(&mut self, button: Button) -> Action {
        if button == Button::Primary {
            self.drag = DragState::Idle;
        }
        Action::None
    }

    // --- Render ---

    /// Draw `elements` against the current viewport.
    ///
    /// # Errors
    ///
    /// Propagates the first surface failure.
    pub fn render<'a, E, I>(&self, surface: &mut dyn Surface, elements: I) -> Result<RenderStats, SurfaceError>
    where
        E: SceneElement + ?Sized + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        render::draw_scene(surface, &self.viewport, elements)
    }

    // --- Queries ---

    /// The current view rectangle.
    #[must_use]
    pub fn view(&self) -> ViewRect {
        self.viewport.view()
    }

    /// Whether a drag-pan is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self.drag, DragState::Panning { .. })
    }
}
