//! Station wall autotile generator.
//!
//! Produces one SVG sprite per [`WallTile`]: a rounded outline filled with
//! the base color, highlight and shadow edge strokes, a 4×4 rivet grid and,
//! for the panel preset, an inset panel with cross accents.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`tiles`] | `WallTile`, the fixed tile table |
//! | [`config`] | `Palette`, `GeneratorConfig` and its presets |
//! | [`geometry`] | pure path and marker geometry |
//! | [`generator`] | `build_tile`, `render_tile`, `generate` |
//! | [`error`] | `GenError` |
//!
//! # Quick start
//!
//! ```rust
//! use autotile_gen::{render_tile, GeneratorConfig, WallTile};
//!
//! let svg = render_tile(WallTile::Cross, &GeneratorConfig::station());
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod tiles;

pub use config::{GeneratorConfig, InnerPanel, Palette, PreviewConfig};
pub use error::GenError;
pub use generator::{build_tile, generate, render_tile};
pub use tiles::WallTile;
