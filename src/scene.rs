//! Scene description: the list of shapes a host renders each frame.
//!
//! Scenes are plain data. They are deserialized from JSON files, built from
//! the demo layout, or generated randomly; the crate does not store or index
//! them beyond the `Vec` the caller owns.
//!
//! ```json
//! { "shapes": [
//!     { "kind": "rect", "position": { "x": 0, "y": 150 }, "width": 400, "height": 200, "color": "#3498db" }
//! ] }
//! ```

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::path::{Path, PathBuf};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::element::{Rectangle, Shape};
use crate::geom::Point;

/// Error returned while loading a scene.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// The scene file could not be read.
    #[error("failed to read scene {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The document could not be parsed or serialized.
    #[error("scene JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// An ordered list of shapes; earlier shapes are drawn beneath later ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

impl Scene {
    /// Parse a scene document.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Json`] if `json` is not a valid scene.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a scene file.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Io`] if the file cannot be read and
    /// [`SceneError::Json`] if its contents are invalid.
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let json = std::fs::read_to_string(path).map_err(|source| SceneError::Io { path: path.to_path_buf(), source })?;
        let scene = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), shapes = scene.shapes.len(), "scene loaded");
        Ok(scene)
    }

    /// The four-rectangle demo layout.
    #[must_use]
    pub fn demo() -> Self {
        let rect = |x, y, w, h, color: &str| Shape::from(Rectangle::new(Point::new(x, y), w, h).with_color(color));
        Self {
            shapes: vec![
                rect(0.0, 150.0, 400.0, 200.0, "#3498db"),
                rect(75.0, 125.0, 40.0, 20.0, "#e74c3c"),
                rect(150.0, 100.0, 40.0, 20.0, "#2ecc71"),
                rect(100.0, 50.0, 40.0, 20.0, "#f1c40f"),
            ],
        }
    }

    /// `count` 40×20 rectangles spaced 50 units apart along x, at random
    /// heights in `[0, 100)` and random fully saturated hues.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Self {
        let shapes = (0..count)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let x = i as f64 * 50.0;
                let y = rng.random_range(0.0..100.0);
                let hue: f64 = rng.random_range(0.0..360.0);
                Shape::from(Rectangle::new(Point::new(x, y), 40.0, 20.0).with_color(format!("hsl({hue:.1}, 100%, 50%)")))
            })
            .collect();
        Self { shapes }
    }

    /// Serialize as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
