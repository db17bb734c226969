use crate::coords::Vec2;
use crate::paint::Paint;
use crate::path::fmt_num;
use crate::scene::shapes::{LineCmd, PathCmd, RectCmd};
use crate::scene::{DrawCmd, DrawList};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// An SVG document of fixed size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SvgDocument {
    pub size: Vec2,
}

impl SvgDocument {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { size: Vec2::new(width, height) }
    }

    /// Writes every command of `list` in paint order, one element per line.
    pub fn render(&self, list: &DrawList) -> String {
        let mut out = format!(
            "<svg xmlns=\"{SVG_NS}\" width=\"{}\" height=\"{}\">\n",
            fmt_num(self.size.x),
            fmt_num(self.size.y),
        );
        for cmd in list.items() {
            out.push_str("  ");
            out.push_str(&element(cmd));
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }
}

fn element(cmd: &DrawCmd) -> String {
    match cmd {
        DrawCmd::Path(p) => path_element(p),
        DrawCmd::Line(l) => line_element(l),
        DrawCmd::Rect(r) => rect_element(r),
    }
}

fn path_element(cmd: &PathCmd) -> String {
    match cmd.paint {
        Paint::Fill(color) => format!("<path d=\"{}\" fill=\"{color}\"/>", cmd.data),
        Paint::Stroke(s) => format!(
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
            cmd.data,
            s.color,
            fmt_num(s.width),
        ),
    }
}

fn line_element(cmd: &LineCmd) -> String {
    format!(
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
        fmt_num(cmd.from.x),
        fmt_num(cmd.from.y),
        fmt_num(cmd.to.x),
        fmt_num(cmd.to.y),
        cmd.stroke.color,
        fmt_num(cmd.stroke.width),
    )
}

fn rect_element(cmd: &RectCmd) -> String {
    format!(
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
        fmt_num(cmd.rect.origin.x),
        fmt_num(cmd.rect.origin.y),
        fmt_num(cmd.rect.size.x),
        fmt_num(cmd.rect.size.y),
        cmd.color,
    )
}
