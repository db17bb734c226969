//! Path descriptions in SVG `d` attribute syntax.
//!
//! Only the commands the tile outlines need are supported: absolute move,
//! horizontal and vertical lines, quarter-circle corner arcs and close.

mod builder;
mod number;

pub use builder::{corner_arc, PathBuilder, PathData};
pub(crate) use number::fmt_num;
