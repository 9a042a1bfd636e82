//! Scene elements: things that know their world geometry and can paint
//! themselves against a viewport.
//!
//! [`SceneElement`] supplies the shared behavior as default methods built on
//! [`map_to_view`]; a variant only has to report its world position and, if
//! it has one, its world size. [`Shape`] is the closed set of variants that
//! scene files can describe.

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_FILL;
use crate::geom::{PixelRect, Point, Size, ViewRect};
use crate::mapper::map_to_view;
use crate::surface::{Surface, SurfaceError};
use crate::viewport::Viewport;

/// Geometry and drawing capability shared by every scene element.
pub trait SceneElement {
    /// Position of the element's top-left corner in world units.
    fn world_position(&self) -> Point;

    /// Extent in world units. Point-like elements have none.
    fn world_size(&self) -> Size {
        Size::ZERO
    }

    /// Position relative to `view`, `(0, 0)` = top-left, `(1, 1)` = bottom-right.
    fn graph_position(&self, view: &ViewRect) -> Point {
        map_to_view(self.world_position(), view)
    }

    /// Extent relative to `view`, measured as the distance between the mapped
    /// position and the mapped far corner.
    fn graph_size(&self, view: &ViewRect) -> Size {
        let origin = self.world_position();
        let extent = self.world_size();
        let near = map_to_view(origin, view);
        let far = map_to_view(Point::new(origin.x + extent.width, origin.y + extent.height), view);
        Size::new(far.x - near.x, far.y - near.y)
    }

    /// Whether the element's position lies inside `view` (edges included).
    fn is_in_view(&self, view: &ViewRect) -> bool {
        let p = self.graph_position(view);
        (0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y)
    }

    /// Paint the element onto `surface`.
    ///
    /// Returns `Ok(true)` if something was painted and `Ok(false)` if the
    /// element was culled. Elements without a visual representation never
    /// paint.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a surface primitive fails.
    fn draw(&self, _surface: &mut dyn Surface, _viewport: &Viewport) -> Result<bool, SurfaceError> {
        Ok(false)
    }
}

// =============================================================
// Marker
// =============================================================

/// A point in the world with no extent and no paint of its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub position: Point,
}

impl Marker {
    #[must_use]
    pub fn new(position: Point) -> Self {
        Self { position }
    }
}

impl SceneElement for Marker {
    fn world_position(&self) -> Point {
        self.position
    }
}

// =============================================================
// Rectangle
// =============================================================

/// Filled axis-aligned rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    position: Point,
    width: f64,
    height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<String>,
}

impl Rectangle {
    /// Rectangle with its top-left corner at `position`, filled with [`DEFAULT_FILL`].
    #[must_use]
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self { position, width, height, color: None }
    }

    /// Set the fill color (any CSS color string).
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Fill color. An unset or empty color falls back to [`DEFAULT_FILL`].
    #[must_use]
    pub fn fill(&self) -> &str {
        self.color
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_FILL)
    }

    /// Pixel rectangle this element covers on the viewport's surface.
    #[must_use]
    pub fn surface_rect(&self, viewport: &Viewport) -> PixelRect {
        let view = viewport.view();
        let surface = viewport.size();
        let pos = self.graph_position(&view);
        let size = self.graph_size(&view);
        PixelRect {
            x: pos.x * surface.width,
            y: pos.y * surface.height,
            width: size.width * surface.width,
            height: size.height * surface.height,
        }
    }
}

impl SceneElement for Rectangle {
    fn world_position(&self) -> Point {
        self.position
    }

    fn world_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Bounding-box overlap: both the mapped x and y intervals must touch
    /// `[0, 1]`.
    fn is_in_view(&self, view: &ViewRect) -> bool {
        let pos = self.graph_position(view);
        let size = self.graph_size(view);
        overlaps_unit(pos.x, pos.x + size.width) && overlaps_unit(pos.y, pos.y + size.height)
    }

    fn draw(&self, surface: &mut dyn Surface, viewport: &Viewport) -> Result<bool, SurfaceError> {
        if viewport.size().is_empty() || !self.is_in_view(&viewport.view()) {
            return Ok(false);
        }
        surface.fill_rect(self.surface_rect(viewport), self.fill())?;
        Ok(true)
    }
}

/// Whether the interval between `a` and `b` (either order) intersects `[0, 1]`.
fn overlaps_unit(a: f64, b: f64) -> bool {
    a.min(b) <= 1.0 && a.max(b) >= 0.0
}

// =============================================================
// Shape
// =============================================================

/// Closed set of element kinds, as stored in scene files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Rect(Rectangle),
    Point(Marker),
}

impl SceneElement for Shape {
    fn world_position(&self) -> Point {
        match self {
            Self::Rect(r) => r.world_position(),
            Self::Point(m) => m.world_position(),
        }
    }

    fn world_size(&self) -> Size {
        match self {
            Self::Rect(r) => r.world_size(),
            Self::Point(m) => m.world_size(),
        }
    }

    fn is_in_view(&self, view: &ViewRect) -> bool {
        match self {
            Self::Rect(r) => r.is_in_view(view),
            Self::Point(m) => m.is_in_view(view),
        }
    }

    fn draw(&self, surface: &mut dyn Surface, viewport: &Viewport) -> Result<bool, SurfaceError> {
        match self {
            Self::Rect(r) => r.draw(surface, viewport),
            Self::Point(m) => m.draw(surface, viewport),
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Self::Rect(rect)
    }
}

impl From<Marker> for Shape {
    fn from(marker: Marker) -> Self {
        Self::Point(marker)
    }
}
