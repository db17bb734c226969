//! SVG document writer.
//!
//! Serializes a [`DrawList`](crate::scene::DrawList) into a standalone SVG
//! document. Output is a pure function of the draw list: identical input
//! always produces identical bytes.

mod document;

pub use document::SvgDocument;
