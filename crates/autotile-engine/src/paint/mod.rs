//! Paint model shared between the scene and its back ends.
//!
//! Scope:
//! - color representation (opaque 8-bit sRGB)
//! - paint modes (fill, stroke)
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;

/// Outline drawn along a path without filling it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    #[inline]
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// How a path is painted.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Paint {
    Fill(Color),
    Stroke(Stroke),
}
