//! Session configuration parsed from environment variables.

use crate::consts::{DEFAULT_PAN_STEP, DEFAULT_SURFACE, DEFAULT_VIEW, DEFAULT_ZOOM_FACTOR};
use crate::geom::{Point, Size, ViewRect};

pub const ENV_PAN_STEP: &str = "GRAPH_PAN_STEP";
pub const ENV_ZOOM_FACTOR: &str = "GRAPH_ZOOM_FACTOR";
pub const ENV_VIEW: &str = "GRAPH_VIEW";
pub const ENV_SIZE: &str = "GRAPH_SIZE";

/// Error returned when a configuration value cannot be used.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid number for {var}: {value:?}")]
    InvalidNumber { var: String, value: String },
    #[error("invalid view {0:?} (expected left,right,top,bottom with right > left and bottom > top)")]
    InvalidView(String),
    #[error("invalid size {0:?} (expected WIDTHxHEIGHT, non-negative)")]
    InvalidSize(String),
    #[error("invalid point {0:?} (expected X,Y)")]
    InvalidPair(String),
    #[error("invalid zoom factor {0} (must be finite and greater than zero)")]
    InvalidZoomFactor(f64),
}

/// Initial view, surface size and input tuning for a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphConfig {
    /// World units moved per arrow-key press.
    pub pan_step: f64,
    /// Zoom step per wheel notch; scrolling down multiplies the view extent by it.
    pub zoom_factor: f64,
    pub view: ViewRect,
    pub size: Size,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            pan_step: DEFAULT_PAN_STEP,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            view: DEFAULT_VIEW,
            size: DEFAULT_SURFACE,
        }
    }
}

impl GraphConfig {
    /// Build config from environment variables.
    ///
    /// All optional:
    /// - `GRAPH_PAN_STEP`: default 10
    /// - `GRAPH_ZOOM_FACTOR`: default 1.05
    /// - `GRAPH_VIEW`: `left,right,top,bottom`, default `0,200,0,400`
    /// - `GRAPH_SIZE`: `WIDTHxHEIGHT`, default `800x600`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a value is present but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(raw) = lookup(ENV_PAN_STEP) {
            cfg.pan_step = parse_number(ENV_PAN_STEP, &raw)?;
        }
        if let Some(raw) = lookup(ENV_ZOOM_FACTOR) {
            cfg.zoom_factor = parse_zoom_factor(&raw)?;
        }
        if let Some(raw) = lookup(ENV_VIEW) {
            cfg.view = parse_view(&raw)?;
        }
        if let Some(raw) = lookup(ENV_SIZE) {
            cfg.size = parse_size(&raw)?;
        }
        Ok(cfg)
    }
}

fn env_lookup(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(value) => Some(value),
        Err(std::env::VarError::NotPresent) => None,
        Err(std::env::VarError::NotUnicode(_)) => {
            tracing::warn!(var = key, "ignoring non-unicode environment value");
            None
        }
    }
}

fn parse_number(var: &str, raw: &str) -> Result<f64, ConfigError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ConfigError::InvalidNumber { var: var.to_owned(), value: raw.to_owned() }),
    }
}

fn parse_list(raw: &str, sep: &[char]) -> Option<Vec<f64>> {
    let parsed = raw
        .split(sep)
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>();
    match parsed {
        Ok(values) if values.iter().all(|v| v.is_finite()) => Some(values),
        _ => None,
    }
}

/// Parse `left,right,top,bottom`; the rectangle must have positive extent.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidView`] on malformed or degenerate input.
pub fn parse_view(raw: &str) -> Result<ViewRect, ConfigError> {
    let invalid = || ConfigError::InvalidView(raw.to_owned());
    let Some(values) = parse_list(raw, &[',']) else {
        return Err(invalid());
    };
    let [left, right, top, bottom] = values[..] else {
        return Err(invalid());
    };
    let view = ViewRect { left, right, top, bottom };
    if view.is_valid() { Ok(view) } else { Err(invalid()) }
}

/// Parse `WIDTHxHEIGHT` (either `x` or `X`); zero is allowed, negatives are not.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidSize`] on malformed or negative input.
pub fn parse_size(raw: &str) -> Result<Size, ConfigError> {
    let invalid = || ConfigError::InvalidSize(raw.to_owned());
    let Some(values) = parse_list(raw, &['x', 'X']) else {
        return Err(invalid());
    };
    let [width, height] = values[..] else {
        return Err(invalid());
    };
    if width < 0.0 || height < 0.0 {
        return Err(invalid());
    }
    Ok(Size { width, height })
}

/// Parse `X,Y`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidPair`] on malformed input.
pub fn parse_pair(raw: &str) -> Result<Point, ConfigError> {
    let invalid = || ConfigError::InvalidPair(raw.to_owned());
    let Some(values) = parse_list(raw, &[',']) else {
        return Err(invalid());
    };
    let [x, y] = values[..] else {
        return Err(invalid());
    };
    Ok(Point { x, y })
}

/// Parse a zoom factor; it must be finite and positive.
///
/// # Errors
///
/// Returns [`ConfigError`] if the value is not a number or not positive.
pub fn parse_zoom_factor(raw: &str) -> Result<f64, ConfigError> {
    let factor = parse_number(ENV_ZOOM_FACTOR, raw)?;
    if factor > 0.0 { Ok(factor) } else { Err(ConfigError::InvalidZoomFactor(factor)) }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
