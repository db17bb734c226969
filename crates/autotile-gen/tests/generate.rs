use std::fs;

use autotile_engine::raster::{rasterize_rgba, RasterError};
use autotile_gen::{generate, render_tile, GenError, GeneratorConfig, WallTile};
use tempfile::TempDir;

fn plain(dir: &TempDir) -> GeneratorConfig {
    GeneratorConfig::station().with_output_dir(dir.path().join("assets/images"))
}

fn panel(dir: &TempDir) -> GeneratorConfig {
    GeneratorConfig::station_panel().with_output_dir(dir.path().join("assets/images"))
}

fn lines_with<'a>(svg: &'a str, tag: &str) -> Vec<&'a str> {
    svg.lines().filter(|l| l.trim_start().starts_with(tag)).collect()
}

fn outline_d(svg: &str) -> String {
    let line = svg.lines().nth(1).unwrap();
    let start = line.find("d=\"").unwrap() + 3;
    let end = start + line[start..].find('"').unwrap();
    line[start..end].to_string()
}

// ── files ─────────────────────────────────────────────────────────────────

#[test]
fn writes_one_file_per_tile() {
    let dir = TempDir::new().unwrap();
    let config = plain(&dir);
    let written = generate(&config).unwrap();

    assert_eq!(written.len(), WallTile::ALL.len());
    for tile in WallTile::ALL {
        let path = config.output_dir.join(format!("{}.svg", tile.name()));
        assert!(path.is_file(), "missing {}", path.display());
        assert!(written.contains(&path));
    }
    assert_eq!(fs::read_dir(&config.output_dir).unwrap().count(), 5);
}

#[test]
fn rerun_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let config = plain(&dir);
    let first: Vec<_> = generate(&config).unwrap().iter().map(|p| fs::read(p).unwrap()).collect();
    let second: Vec<_> = generate(&config).unwrap().iter().map(|p| fs::read(p).unwrap()).collect();
    assert_eq!(first, second);
}

#[test]
fn overwrites_existing_files() {
    let dir = TempDir::new().unwrap();
    let config = plain(&dir);
    fs::create_dir_all(&config.output_dir).unwrap();
    let target = config.output_dir.join("station_wall_cross.svg");
    fs::write(&target, "stale").unwrap();

    generate(&config).unwrap();
    let text = fs::read_to_string(&target).unwrap();
    assert_eq!(text, render_tile(WallTile::Cross, &config));
}

#[test]
fn err_output_dir_is_a_file() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("assets");
    fs::write(&blocker, "not a directory").unwrap();

    let err = generate(&plain(&dir)).unwrap_err();
    assert!(matches!(err, GenError::Io { .. }), "unexpected {err}");
}

// ── outlines ──────────────────────────────────────────────────────────────

#[test]
fn cross_outline_has_no_arcs() {
    let svg = render_tile(WallTile::Cross, &GeneratorConfig::station());
    assert!(!outline_d(&svg).contains('A'));
}

#[test]
fn straight_outline_has_four_arcs() {
    let svg = render_tile(WallTile::Straight, &GeneratorConfig::station());
    assert_eq!(outline_d(&svg).matches("A5 5 0 0 1").count(), 4);
}

#[test]
fn corner_outline_rounds_left_corners_only() {
    let svg = render_tile(WallTile::Corner, &GeneratorConfig::station());
    assert_eq!(
        outline_d(&svg),
        "M5 0 H32 V32 H5 A5 5 0 0 1 0 27 V5 A5 5 0 0 1 5 0 Z"
    );
}

// ── shared decoration ─────────────────────────────────────────────────────

#[test]
fn rivets_identical_across_tiles() {
    let config = GeneratorConfig::station();
    let reference = render_tile(WallTile::End, &config);
    let expected = lines_with(&reference, "<rect");
    assert_eq!(expected.len(), 16);
    for tile in WallTile::ALL {
        let svg = render_tile(tile, &config);
        assert_eq!(lines_with(&svg, "<rect"), expected, "{tile:?}");
    }
}

#[test]
fn panel_identical_across_tiles() {
    let config = GeneratorConfig::station_panel();
    let reference = render_tile(WallTile::Cross, &config);
    let panel_line = reference.lines().nth(4).unwrap().to_string();
    assert!(panel_line.contains("d=\"M6 6 H26 V26 H6 Z\""));
    assert!(panel_line.contains("stroke-width=\"0.5\""));
    let expected_lines = lines_with(&reference, "<line");
    assert_eq!(expected_lines.len(), 4);

    for tile in WallTile::ALL {
        let svg = render_tile(tile, &config);
        assert_eq!(svg.lines().nth(4).unwrap(), panel_line, "{tile:?}");
        assert_eq!(lines_with(&svg, "<line"), expected_lines, "{tile:?}");
    }
}

#[test]
fn plain_preset_has_no_panel() {
    let svg = render_tile(WallTile::Straight, &GeneratorConfig::station());
    assert!(lines_with(&svg, "<line").is_empty());
    assert_eq!(lines_with(&svg, "<path").len(), 3);
}

// ── previews ──────────────────────────────────────────────────────────────

#[test]
fn every_tile_parses_and_renders() {
    let dir = TempDir::new().unwrap();
    for config in [plain(&dir), panel(&dir)] {
        for tile in WallTile::ALL {
            let img = rasterize_rgba(&render_tile(tile, &config), 1).unwrap();
            assert_eq!((img.width(), img.height()), (32, 32));
            // Tile center is always covered by the base fill.
            assert_eq!(img.get_pixel(16, 16).0[3], 255, "{tile:?}");
        }
    }
}

#[test]
fn sharp_corner_is_opaque_rounded_corner_is_clear() {
    let config = GeneratorConfig::station();
    let corner = rasterize_rgba(&render_tile(WallTile::Corner, &config), 1).unwrap();
    // Top-left rounded, top-right sharp.
    assert_eq!(corner.get_pixel(0, 0).0[3], 0);
    assert_eq!(corner.get_pixel(31, 0).0[3], 255);
}

#[test]
fn writes_previews_when_enabled() {
    let dir = TempDir::new().unwrap();
    let preview_dir = dir.path().join("previews");
    let config = plain(&dir).with_preview(&preview_dir, 2);
    generate(&config).unwrap();

    for tile in WallTile::ALL {
        let png = fs::read(preview_dir.join(format!("{}.png", tile.name()))).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }
}

#[test]
fn err_preview_scale_too_large() {
    let dir = TempDir::new().unwrap();
    let config = plain(&dir).with_preview(dir.path().join("previews"), 1 << 28);

    let err = generate(&config).unwrap_err();
    assert!(
        matches!(err, GenError::Preview { source: RasterError::Pixmap { .. }, .. }),
        "unexpected {err}"
    );
    // The first SVG was already written before its preview failed.
    assert!(config.output_dir.join("station_wall_end.svg").is_file());
}
