use std::path::PathBuf;

use autotile_engine::coords::Vec2;
use autotile_engine::paint::Color;

/// The four colors of a tile.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Outline fill.
    pub base: Color,
    /// Upper-left edge stroke.
    pub highlight: Color,
    /// Lower-right edge stroke.
    pub shadow: Color,
    pub rivet: Color,
}

impl Palette {
    /// Plain station walls.
    pub const STATION: Palette = Palette {
        base: Color::rgb(0x0E, 0x1B, 0x35),
        highlight: Color::rgb(0x1A, 0x2F, 0x55),
        shadow: Color::rgb(0x23, 0x34, 0x5C),
        rivet: Color::rgb(0x1C, 0x2E, 0x52),
    };

    /// Paneled station walls. Higher contrast so the inset panel reads.
    pub const STATION_PANEL: Palette = Palette {
        base: Color::rgb(0x12, 0x22, 0x3F),
        highlight: Color::rgb(0x2B, 0x46, 0x77),
        shadow: Color::rgb(0x0A, 0x15, 0x29),
        rivet: Color::rgb(0x24, 0x39, 0x5F),
    };
}

/// Inset decorative panel with plus and X accents.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InnerPanel {
    /// Distance from every tile edge to the panel edge.
    pub offset: f32,
}

/// Optional PNG previews written next to the SVG output.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewConfig {
    pub dir: PathBuf,
    /// Integer upscale factor.
    pub scale: u32,
}

/// Generator parameters. All presets are compiled in; nothing is read from
/// the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub output_dir: PathBuf,
    /// Side length of the square tile.
    pub tile_size: f32,
    /// Radius applied to every rounded corner.
    pub corner_radius: f32,
    pub palette: Palette,
    pub inner_panel: Option<InnerPanel>,
    pub preview: Option<PreviewConfig>,
}

impl GeneratorConfig {
    pub const OUTPUT_DIR: &'static str = "assets/images";
    pub const TILE_SIZE: f32 = 32.0;
    pub const CORNER_RADIUS: f32 = 5.0;
    pub const PANEL_OFFSET: f32 = 6.0;

    /// Plain walls: outline, edges and rivets.
    pub fn station() -> Self {
        Self {
            output_dir: PathBuf::from(Self::OUTPUT_DIR),
            tile_size: Self::TILE_SIZE,
            corner_radius: Self::CORNER_RADIUS,
            palette: Palette::STATION,
            inner_panel: None,
            preview: None,
        }
    }

    /// Paneled walls: the plain set plus an inset panel and cross accents.
    pub fn station_panel() -> Self {
        Self {
            palette: Palette::STATION_PANEL,
            inner_panel: Some(InnerPanel { offset: Self::PANEL_OFFSET }),
            ..Self::station()
        }
    }

    /// Redirects SVG output, keeping everything else.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Enables PNG previews at `scale` into `dir`.
    pub fn with_preview(mut self, dir: impl Into<PathBuf>, scale: u32) -> Self {
        self.preview = Some(PreviewConfig { dir: dir.into(), scale });
        self
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.tile_size, self.tile_size)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::station()
    }
}
