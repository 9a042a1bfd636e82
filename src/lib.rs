//! Viewport transform engine for pan/zoom rendering of 2D scenes.
//!
//! The crate maps a logical world-space rectangle (the "view") onto a
//! fixed-resolution drawing surface and keeps pan and zoom numerically
//! consistent under repeated application. Scene elements convert their own
//! world geometry through the single [`mapper::map_to_view`] function and
//! paint themselves through the [`surface::Surface`] primitives. The host is
//! responsible for wiring input listeners and scheduling frames; it feeds
//! pre-decoded events to [`engine::GraphCore`] or calls the
//! [`viewport::Viewport`] directly.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geom`] | Point, size, view rectangle and pixel rectangle value types |
//! | [`mapper`] | World → normalized view mapping |
//! | [`viewport`] | View rectangle + surface size, pan/zoom operations |
//! | [`element`] | Scene element trait, rectangles, markers, [`element::Shape`] |
//! | [`surface`] | Drawing primitives and the recording surface |
//! | [`render`] | One render pass over a list of elements |
//! | [`input`] | Translating key/wheel/drag input into viewport calls |
//! | [`engine`] | Controller that owns a viewport and a drag gesture |
//! | [`scene`] | Scene files, the demo scene and random scenes |
//! | [`config`] | Environment configuration |
//! | [`consts`] | Shared numeric and color defaults |
//! | `web` | HTML canvas surface (feature `web`) |

pub mod config;
pub mod consts;
pub mod element;
pub mod engine;
pub mod geom;
pub mod input;
pub mod mapper;
pub mod render;
pub mod scene;
pub mod surface;
pub mod viewport;
#[cfg(feature = "web")]
pub mod web;
