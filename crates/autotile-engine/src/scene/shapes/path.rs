use crate::paint::{Color, Paint, Stroke};
use crate::path::PathData;
use crate::scene::{DrawCmd, DrawList};

/// Path draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCmd {
    pub data: PathData,
    pub paint: Paint,
}

impl PathCmd {
    #[inline]
    pub fn new(data: PathData, paint: Paint) -> Self {
        Self { data, paint }
    }
}

impl DrawList {
    /// Records a path draw command.
    #[inline]
    pub fn push_path(&mut self, data: PathData, paint: Paint) {
        self.push(DrawCmd::Path(PathCmd::new(data, paint)));
    }

    /// Records a filled path.
    #[inline]
    pub fn push_filled_path(&mut self, data: PathData, color: Color) {
        self.push_path(data, Paint::Fill(color));
    }

    /// Records an unfilled, stroked path.
    #[inline]
    pub fn push_stroked_path(&mut self, data: PathData, stroke: Stroke) {
        self.push_path(data, Paint::Stroke(stroke));
    }
}
