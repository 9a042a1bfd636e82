//! HTML canvas surface.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! Surface coordinates are CSS pixels; the device pixel ratio is applied as a
//! base transform at the start of every pass so elements never see it.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::geom::{PixelRect, Size};
use crate::surface::{Surface, SurfaceError};

impl From<JsValue> for SurfaceError {
    fn from(value: JsValue) -> Self {
        Self::Backend(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// [`Surface`] backed by a canvas 2D context.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    dpr: f64,
}

impl CanvasSurface {
    /// Wrap an existing 2D context.
    #[must_use]
    pub fn new(ctx: CanvasRenderingContext2d, dpr: f64) -> Self {
        Self { ctx, dpr }
    }

    /// Acquire the 2D context of `canvas`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context.
    pub fn from_canvas(canvas: &HtmlCanvasElement, dpr: f64) -> Result<Self, SurfaceError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| SurfaceError::Backend("canvas has no 2d context".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::Backend("context is not CanvasRenderingContext2d".into()))?;
        Ok(Self::new(ctx, dpr))
    }

    /// Size the canvas backing store for `css_size` at this surface's pixel
    /// ratio. Returns the size to hand to the viewport.
    #[must_use]
    pub fn resize(&self, canvas: &HtmlCanvasElement, css_size: Size) -> Size {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            canvas.set_width((css_size.width * self.dpr).round().max(0.0) as u32);
            canvas.set_height((css_size.height * self.dpr).round().max(0.0) as u32);
        }
        css_size
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, rect: PixelRect) -> Result<(), SurfaceError> {
        self.ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0)?;
        self.ctx.clear_rect(rect.x, rect.y, rect.width, rect.height);
        Ok(())
    }

    fn fill_rect(&mut self, rect: PixelRect, color: &str) -> Result<(), SurfaceError> {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
        Ok(())
    }
}
