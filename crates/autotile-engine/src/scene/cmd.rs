use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::path::PathCmd;
use crate::scene::shapes::rect::RectCmd;

/// Back-end-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach `svg::SvgDocument` to write the new element
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Path(PathCmd),
    Line(LineCmd),
    Rect(RectCmd),
}
