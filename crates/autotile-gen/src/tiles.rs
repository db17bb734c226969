use autotile_engine::coords::CornerRadii;

/// One wall-segment shape of the autotile set.
///
/// Every corner is either sharp or rounded by the same radius, so these five
/// variants are the only outlines that exist.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum WallTile {
    End,
    Straight,
    Corner,
    T,
    Cross,
}

impl WallTile {
    /// All tiles in generation order.
    pub const ALL: [WallTile; 5] = [
        WallTile::End,
        WallTile::Straight,
        WallTile::Corner,
        WallTile::T,
        WallTile::Cross,
    ];

    /// Asset name without extension.
    pub const fn name(self) -> &'static str {
        match self {
            WallTile::End => "station_wall_end",
            WallTile::Straight => "station_wall_straight",
            WallTile::Corner => "station_wall_corner",
            WallTile::T => "station_wall_t",
            WallTile::Cross => "station_wall_cross",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.svg", self.name())
    }

    /// Which corners are rounded, clockwise from top-left.
    const fn rounded(self) -> [bool; 4] {
        match self {
            WallTile::End => [true, true, false, false],
            WallTile::Straight => [true, true, true, true],
            WallTile::Corner => [true, false, false, true],
            WallTile::T => [false, false, true, true],
            WallTile::Cross => [false, false, false, false],
        }
    }

    /// Corner radii for this tile with rounded corners set to `radius`.
    pub fn radii(self, radius: f32) -> CornerRadii {
        let [tl, tr, br, bl] = self.rounded().map(|on| if on { radius } else { 0.0 });
        CornerRadii::new(tl, tr, br, bl)
    }
}
