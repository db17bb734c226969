use crate::coords::Vec2;
use crate::paint::Stroke;
use crate::scene::{DrawCmd, DrawList};

/// Straight line segment payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub stroke: Stroke,
}

impl DrawList {
    /// Records a stroked line segment.
    #[inline]
    pub fn push_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.push(DrawCmd::Line(LineCmd { from, to, stroke }));
    }
}
