//! Autotile engine crate.
//!
//! This crate owns the drawing primitives used by the tile generator:
//! geometry, colors, path descriptions, the draw stream and its SVG and
//! PNG back ends.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod path;
pub mod raster;
pub mod scene;
pub mod svg;
