use std::fs;
use std::path::PathBuf;

use autotile_engine::paint::Stroke;
use autotile_engine::raster::rasterize_png;
use autotile_engine::scene::DrawList;
use autotile_engine::svg::SvgDocument;

use crate::config::GeneratorConfig;
use crate::error::GenError;
use crate::geometry;
use crate::tiles::WallTile;

const EDGE_WIDTH: f32 = 1.0;
const PANEL_WIDTH: f32 = 0.5;

/// Records the draw stream of one tile.
///
/// Paint order: base fill, highlight edge, shadow edge, inner panel and its
/// four accent lines (when configured), then the rivets.
pub fn build_tile(tile: WallTile, config: &GeneratorConfig) -> DrawList {
    let size = config.size();
    let radii = tile.radii(config.corner_radius);
    let palette = config.palette;

    let outline = geometry::outline(size, radii);
    log::debug!("{}: outline {} ({} arcs)", tile.name(), outline, outline.arc_count());

    let mut list = DrawList::new();
    list.push_filled_path(outline, palette.base);
    list.push_stroked_path(
        geometry::highlight_edge(size, radii),
        Stroke::new(EDGE_WIDTH, palette.highlight),
    );
    list.push_stroked_path(
        geometry::shadow_edge(size, radii),
        Stroke::new(EDGE_WIDTH, palette.shadow),
    );

    if let Some(panel) = config.inner_panel {
        list.push_stroked_path(
            geometry::inner_panel(config.tile_size, panel.offset),
            Stroke::new(PANEL_WIDTH, palette.shadow),
        );
        let lines = geometry::cross_lines(config.tile_size, panel.offset);
        for (i, (from, to)) in lines.into_iter().enumerate() {
            let color = if i % 2 == 0 { palette.highlight } else { palette.shadow };
            list.push_line(from, to, Stroke::new(PANEL_WIDTH, color));
        }
    }

    for rect in geometry::rivet_rects() {
        list.push_solid_rect(rect, palette.rivet);
    }

    list
}

/// Renders one tile as SVG text.
pub fn render_tile(tile: WallTile, config: &GeneratorConfig) -> String {
    let list = build_tile(tile, config);
    SvgDocument::new(config.tile_size, config.tile_size).render(&list)
}

/// Writes every tile to `<output_dir>/<name>.svg`, overwriting existing
/// files, and returns the written paths in table order.
///
/// The first error aborts the run.
pub fn generate(config: &GeneratorConfig) -> Result<Vec<PathBuf>, GenError> {
    fs::create_dir_all(&config.output_dir).map_err(GenError::io(&config.output_dir))?;
    if let Some(preview) = &config.preview {
        fs::create_dir_all(&preview.dir).map_err(GenError::io(&preview.dir))?;
    }

    let mut written = Vec::with_capacity(WallTile::ALL.len());
    for tile in WallTile::ALL {
        let svg = render_tile(tile, config);
        let path = config.output_dir.join(tile.file_name());
        fs::write(&path, &svg).map_err(GenError::io(&path))?;
        log::info!("wrote {}", path.display());

        if let Some(preview) = &config.preview {
            let png = rasterize_png(&svg, preview.scale)
                .map_err(|source| GenError::Preview { tile: tile.name(), source })?;
            let png_path = preview.dir.join(format!("{}.png", tile.name()));
            fs::write(&png_path, png).map_err(GenError::io(&png_path))?;
            log::info!("wrote preview {}", png_path.display());
        }

        written.push(path);
    }

    log::info!("generated {} tiles in {}", written.len(), config.output_dir.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use autotile_engine::paint::Paint;
    use autotile_engine::scene::DrawCmd;

    fn kinds(list: &DrawList) -> Vec<&'static str> {
        list.items()
            .iter()
            .map(|cmd| match cmd {
                DrawCmd::Path(p) if matches!(p.paint, Paint::Fill(_)) => "fill",
                DrawCmd::Path(_) => "stroke",
                DrawCmd::Line(_) => "line",
                DrawCmd::Rect(_) => "rivet",
            })
            .collect()
    }

    #[test]
    fn plain_tile_order() {
        let list = build_tile(WallTile::End, &GeneratorConfig::station());
        let k = kinds(&list);
        assert_eq!(&k[..3], ["fill", "stroke", "stroke"]);
        assert_eq!(k[3..].len(), 16);
        assert!(k[3..].iter().all(|&s| s == "rivet"));
    }

    #[test]
    fn panel_tile_order() {
        let list = build_tile(WallTile::End, &GeneratorConfig::station_panel());
        let k = kinds(&list);
        assert_eq!(&k[..8], ["fill", "stroke", "stroke", "stroke", "line", "line", "line", "line"]);
        assert_eq!(list.items().len(), 8 + 16);
    }

    #[test]
    fn cross_lines_alternate_colors() {
        let config = GeneratorConfig::station_panel();
        let list = build_tile(WallTile::Cross, &config);
        let colors: Vec<_> = list
            .items()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Line(l) => Some(l.stroke.color),
                _ => None,
            })
            .collect();
        let (h, s) = (config.palette.highlight, config.palette.shadow);
        assert_eq!(colors, vec![h, s, h, s]);
    }

    #[test]
    fn panel_uses_shadow_half_width() {
        let config = GeneratorConfig::station_panel();
        let list = build_tile(WallTile::Straight, &config);
        match &list.items()[3] {
            DrawCmd::Path(p) => assert_eq!(p.paint, Paint::Stroke(Stroke::new(0.5, config.palette.shadow))),
            other => panic!("expected panel path, got {other:?}"),
        }
    }

    #[test]
    fn rendered_document_shape() {
        let svg = render_tile(WallTile::Cross, &GeneratorConfig::station());
        let lines: Vec<&str> = svg.lines().collect();
        assert_eq!(lines[0], "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"32\" height=\"32\">");
        assert_eq!(lines[1], "  <path d=\"M0 0 H32 V32 H0 V0 Z\" fill=\"#0E1B35\"/>");
        assert_eq!(lines[2], "  <path d=\"M0 32 V0 H32\" fill=\"none\" stroke=\"#1A2F55\" stroke-width=\"1\"/>");
        assert_eq!(lines[3], "  <path d=\"M32 0 V32 H0\" fill=\"none\" stroke=\"#23345C\" stroke-width=\"1\"/>");
        assert_eq!(lines[4], "  <rect x=\"4\" y=\"4\" width=\"1\" height=\"1\" fill=\"#1C2E52\"/>");
        assert_eq!(lines.last(), Some(&"</svg>"));
        assert_eq!(lines.len(), 1 + 3 + 16 + 1);
    }
}
