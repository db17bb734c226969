//! Tile geometry. Every function here is pure.
//!
//! Outlines are traced clockwise starting on the top edge. A zero radius
//! drops the arc entirely so the adjacent edges meet at a right angle.

use autotile_engine::coords::{CornerRadii, Rect, Vec2};
use autotile_engine::path::{PathBuilder, PathData};

/// Rivets per row and per column.
pub const RIVET_GRID: usize = 4;
/// Distance between neighbouring rivets.
pub const RIVET_PITCH: f32 = 8.0;
/// Offset of the first rivet from the top-left corner.
pub const RIVET_MARGIN: f32 = 4.0;
/// Side length of a rivet mark.
pub const RIVET_SIZE: f32 = 1.0;

/// Closed outline of a `size` tile with per-corner rounding.
pub fn outline(size: Vec2, r: CornerRadii) -> PathData {
    let (w, h) = (size.x, size.y);
    PathBuilder::new()
        .move_to(Vec2::new(r.top_left, 0.0))
        .horizontal_to(w - r.top_right)
        .corner_arc(r.top_right, Vec2::new(w, r.top_right))
        .vertical_to(h - r.bottom_right)
        .corner_arc(r.bottom_right, Vec2::new(w - r.bottom_right, h))
        .horizontal_to(r.bottom_left)
        .corner_arc(r.bottom_left, Vec2::new(0.0, h - r.bottom_left))
        .vertical_to(r.top_left)
        .corner_arc(r.top_left, Vec2::new(r.top_left, 0.0))
        .close()
        .build()
}

/// Open path up the left edge and along the top edge.
pub fn highlight_edge(size: Vec2, r: CornerRadii) -> PathData {
    PathBuilder::new()
        .move_to(Vec2::new(0.0, size.y - r.bottom_left))
        .vertical_to(r.top_left)
        .corner_arc(r.top_left, Vec2::new(r.top_left, 0.0))
        .horizontal_to(size.x - r.top_right)
        .build()
}

/// Open path down the right edge and along the bottom edge.
pub fn shadow_edge(size: Vec2, r: CornerRadii) -> PathData {
    PathBuilder::new()
        .move_to(Vec2::new(size.x, r.top_right))
        .vertical_to(size.y - r.bottom_right)
        .corner_arc(r.bottom_right, Vec2::new(size.x - r.bottom_right, size.y))
        .horizontal_to(r.bottom_left)
        .build()
}

/// Top-left corners of the rivet marks, row by row.
pub fn rivet_positions() -> Vec<Vec2> {
    (0..RIVET_GRID)
        .flat_map(|row| {
            (0..RIVET_GRID).map(move |col| {
                Vec2::new(
                    RIVET_MARGIN + col as f32 * RIVET_PITCH,
                    RIVET_MARGIN + row as f32 * RIVET_PITCH,
                )
            })
        })
        .collect()
}

/// Rivet marks as unit rectangles.
pub fn rivet_rects() -> Vec<Rect> {
    rivet_positions()
        .into_iter()
        .map(|p| Rect::new(p.x, p.y, RIVET_SIZE, RIVET_SIZE))
        .collect()
}

/// Bounds of the panel inset into a square tile of side `side`.
pub fn panel_rect(side: f32, offset: f32) -> Rect {
    Rect::square(side).inset(offset)
}

/// Closed rectangle inset by `offset` from every edge.
pub fn inner_panel(side: f32, offset: f32) -> PathData {
    let rect = panel_rect(side, offset);
    let (min, max) = (rect.min(), rect.max());
    PathBuilder::new()
        .move_to(min)
        .horizontal_to(max.x)
        .vertical_to(max.y)
        .horizontal_to(min.x)
        .close()
        .build()
}

/// Accent lines inside the panel: vertical and horizontal (the plus), then
/// the two diagonals (the X).
pub fn cross_lines(side: f32, offset: f32) -> [(Vec2, Vec2); 4] {
    let rect = panel_rect(side, offset);
    let (min, max, c) = (rect.min(), rect.max(), rect.center());
    [
        (Vec2::new(c.x, min.y), Vec2::new(c.x, max.y)),
        (Vec2::new(min.x, c.y), Vec2::new(max.x, c.y)),
        (min, max),
        (Vec2::new(max.x, min.y), Vec2::new(min.x, max.y)),
    ]
}
