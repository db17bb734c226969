/// Per-corner rounding radii for a tile outline (document units).
///
/// Corners follow CSS convention: top-left, top-right, bottom-right, bottom-left.
/// A radius of zero (or less) produces a sharp corner.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }
}
