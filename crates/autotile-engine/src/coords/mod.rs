//! Coordinate and geometry types shared by the path builder and the generator.
//!
//! Canonical space:
//! - Document units (one unit is one pixel at scale 1)
//! - Origin top-left
//! - +X right, +Y down

mod corner_radii;
mod rect;
mod vec2;

pub use corner_radii::CornerRadii;
pub use rect::Rect;
pub use vec2::Vec2;
