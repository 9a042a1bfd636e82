//! Shared numeric constants and defaults for the graphview crate.

use crate::geom::{Size, ViewRect};

// ── Rendering ───────────────────────────────────────────────────

/// Fill color for rectangles created without one.
pub const DEFAULT_FILL: &str = "#3498db";

// ── Input ───────────────────────────────────────────────────────

/// World units moved per arrow-key press.
pub const DEFAULT_PAN_STEP: f64 = 10.0;

/// Multiplicative zoom step per wheel notch (> 1 zooms out).
pub const DEFAULT_ZOOM_FACTOR: f64 = 1.05;

// ── Session ─────────────────────────────────────────────────────

/// World rectangle shown when a session starts.
pub const DEFAULT_VIEW: ViewRect = ViewRect { left: 0.0, right: 200.0, top: 0.0, bottom: 400.0 };

/// Surface size assumed until the first resize notification.
pub const DEFAULT_SURFACE: Size = Size { width: 800.0, height: 600.0 };
