//! PNG previews of SVG documents.
//!
//! Documents are parsed with `usvg`, rendered with `tiny-skia` (both bundled
//! by `resvg`) and encoded with `image`. Parsing doubles as a well-formedness
//! check for generated documents.

mod error;
mod png;

pub use error::RasterError;
pub use png::{rasterize_png, rasterize_rgba};
