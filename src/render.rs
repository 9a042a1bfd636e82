//! Rendering: one pass of the scene onto a drawing surface.
//!
//! A pass clears the whole surface and asks every element, in order, to draw
//! itself against the same viewport. It reads the viewport and never mutates
//! it. Scheduling passes (animation frames, resize) belongs to the host.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::element::SceneElement;
use crate::geom::PixelRect;
use crate::surface::{Surface, SurfaceError};
use crate::viewport::Viewport;

/// Counts from a single render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Elements that painted something.
    pub drawn: usize,
    /// Elements skipped because they were outside the view (or had nothing to paint).
    pub culled: usize,
}

/// Clear the surface and draw `elements` bottom-first.
///
/// # Errors
///
/// Returns the first [`SurfaceError`] raised by the surface; elements after
/// the failing one are not drawn.
pub fn draw_scene<'a, E, I>(surface: &mut dyn Surface, viewport: &Viewport, elements: I) -> Result<RenderStats, SurfaceError>
where
    E: SceneElement + ?Sized + 'a,
    I: IntoIterator<Item = &'a E>,
{
    surface.clear(PixelRect::covering(viewport.size()))?;

    let mut stats = RenderStats::default();
    for element in elements {
        if element.draw(surface, viewport)? {
            stats.drawn += 1;
        } else {
            stats.culled += 1;
        }
    }

    tracing::debug!(drawn = stats.drawn, culled = stats.culled, view = ?viewport.view(), "render pass");
    Ok(stats)
}
