//! The viewport: the visible world rectangle plus the surface it is shown on.
//!
//! `Viewport` is the only mutable state in the core. Pan and zoom operations
//! change the view rectangle in place; elements only ever read a copy of it.
//! No zoom limits or pan bounds are applied.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::geom::{Point, Size, ViewRect};
use crate::mapper::map_to_view;

/// Visible world rectangle and drawing surface size for one rendering session.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    view: ViewRect,
    size: Size,
}

impl Viewport {
    #[must_use]
    pub fn new(view: ViewRect, size: Size) -> Self {
        Self { view, size }
    }

    /// Snapshot of the current view rectangle.
    #[must_use]
    pub fn view(&self) -> ViewRect {
        self.view
    }

    /// Snapshot of the current surface size in pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Replace the view rectangle.
    pub fn set_view(&mut self, view: ViewRect) {
        tracing::trace!(?view, "set view");
        self.view = view;
    }

    /// Replace the surface size, typically after the surface was resized.
    pub fn set_size(&mut self, size: Size) {
        tracing::trace!(?size, "set surface size");
        self.size = size;
    }

    /// Pan by `(dx, dy)` world units. Width and height are unchanged.
    pub fn move_view(&mut self, dx: f64, dy: f64) {
        self.view.left += dx;
        self.view.right += dx;
        self.view.top += dy;
        self.view.bottom += dy;
    }

    /// Zoom about the view center. `factor < 1` zooms in, `factor > 1` out.
    pub fn scale_view(&mut self, factor: f64) {
        let center = self.view.center();
        let half_w = self.view.width() * factor / 2.0;
        let half_h = self.view.height() * factor / 2.0;

        self.view = ViewRect {
            left: center.x - half_w,
            right: center.x + half_w,
            top: center.y - half_h,
            bottom: center.y + half_h,
        };
    }

    /// Zoom so that the world point under `origin` (surface pixels) stays
    /// under it.
    ///
    /// Returns `false` and leaves the view untouched when the surface has no
    /// area.
    pub fn scale_view_with_origin(&mut self, factor: f64, origin: Point) -> bool {
        if self.size.is_empty() {
            tracing::debug!(size = ?self.size, "zoom ignored on empty surface");
            return false;
        }

        let fx = origin.x / self.size.width;
        let fy = origin.y / self.size.height;
        let anchor_x = self.view.left + fx * self.view.width();
        let anchor_y = self.view.top + fy * self.view.height();

        let new_width = self.view.width() * factor;
        let new_height = self.view.height() * factor;
        let left = anchor_x - fx * new_width;
        let top = anchor_y - fy * new_height;

        self.set_view(ViewRect { left, right: left + new_width, top, bottom: top + new_height });
        true
    }

    /// World position under a surface point, or `None` on an empty surface.
    #[must_use]
    pub fn surface_to_world(&self, surface: Point) -> Option<Point> {
        if self.size.is_empty() {
            return None;
        }
        Some(Point {
            x: self.view.left + surface.x / self.size.width * self.view.width(),
            y: self.view.top + surface.y / self.size.height * self.view.height(),
        })
    }

    /// Surface pixel position of a world point.
    #[must_use]
    pub fn world_to_surface(&self, world: Point) -> Point {
        let n = map_to_view(world, &self.view);
        Point { x: n.x * self.size.width, y: n.y * self.size.height }
    }
}
