//! World → normalized view mapping.
//!
//! Every coordinate conversion in the crate goes through [`map_to_view`], so
//! positions, extents and visibility always agree with each other.

#[cfg(test)]
#[path = "mapper_test.rs"]
mod mapper_test;

use crate::geom::{Point, ViewRect};

/// Map a world position to view-relative coordinates.
///
/// `(0, 0)` is the view's top-left corner and `(1, 1)` its bottom-right.
/// The result is not clamped; anything outside `[0, 1]` lies outside the
/// view.
///
/// The view must have non-zero width and height. For a degenerate view the
/// result is whatever IEEE division produces (`NaN` or an infinity).
#[must_use]
pub fn map_to_view(position: Point, view: &ViewRect) -> Point {
    Point {
        x: (position.x - view.left) / view.width(),
        y: (position.y - view.top) / view.height(),
    }
}
