//! Drawing primitives consumed by the core.
//!
//! Elements only need two operations from a drawing surface: fill an
//! axis-aligned pixel rectangle with a solid color, and clear a region.
//! [`RecordingSurface`] captures those calls as [`DrawCommand`]s for headless
//! rendering and tests.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use serde::{Deserialize, Serialize};

use crate::geom::PixelRect;

/// Error returned by a drawing backend.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SurfaceError {
    /// The backend rejected a drawing call.
    #[error("drawing backend failed: {0}")]
    Backend(String),
}

/// A target that can fill and clear pixel rectangles.
pub trait Surface {
    /// Clear `rect` to transparent.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the backend rejects the call.
    fn clear(&mut self, rect: PixelRect) -> Result<(), SurfaceError>;

    /// Fill `rect` with a CSS color string.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the backend rejects the call.
    fn fill_rect(&mut self, rect: PixelRect, color: &str) -> Result<(), SurfaceError>;
}

/// A single recorded drawing call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear { rect: PixelRect },
    FillRect { rect: PixelRect, color: String },
}

/// Surface that stores every call instead of drawing it.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded so far, oldest first.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Only the fill calls, in order.
    pub fn fills(&self) -> impl Iterator<Item = (&PixelRect, &str)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::FillRect { rect, color } => Some((rect, color.as_str())),
            DrawCommand::Clear { .. } => None,
        })
    }

    /// Take the recorded calls, leaving the surface empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, rect: PixelRect) -> Result<(), SurfaceError> {
        self.commands.push(DrawCommand::Clear { rect });
        Ok(())
    }

    fn fill_rect(&mut self, rect: PixelRect, color: &str) -> Result<(), SurfaceError> {
        self.commands.push(DrawCommand::FillRect { rect, color: color.to_owned() });
        Ok(())
    }
}
