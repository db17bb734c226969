use std::fmt;

use crate::coords::Vec2;

use super::fmt_num;

/// A finished path description. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PathData(String);

impl PathData {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of arc (`A`) commands in the description.
    pub fn arc_count(&self) -> usize {
        self.0.split(' ').filter(|cmd| cmd.starts_with('A')).count()
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Quarter-circle arc command ending at `end`, or an empty string when
/// `radius` is zero or negative.
///
/// An empty fragment turns the corner into a right angle: the surrounding
/// line commands meet directly. A zero-radius `A` command is never written.
pub fn corner_arc(radius: f32, end: Vec2) -> String {
    if radius <= 0.0 {
        return String::new();
    }
    let r = fmt_num(radius);
    format!("A{r} {r} 0 0 1 {} {}", fmt_num(end.x), fmt_num(end.y))
}

/// Incremental builder for [`PathData`].
///
/// Commands are space separated. All coordinates are absolute.
///
/// ```
/// use autotile_engine::coords::Vec2;
/// use autotile_engine::path::PathBuilder;
///
/// let d = PathBuilder::new()
///     .move_to(Vec2::new(0.0, 0.0))
///     .horizontal_to(32.0)
///     .vertical_to(32.0)
///     .close()
///     .build();
/// assert_eq!(d.as_str(), "M0 0 H32 V32 Z");
/// ```
#[derive(Debug, Default)]
pub struct PathBuilder {
    cmds: Vec<String>,
}

impl PathBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, p: Vec2) -> Self {
        self.cmds.push(format!("M{} {}", fmt_num(p.x), fmt_num(p.y)));
        self
    }

    pub fn horizontal_to(mut self, x: f32) -> Self {
        self.cmds.push(format!("H{}", fmt_num(x)));
        self
    }

    pub fn vertical_to(mut self, y: f32) -> Self {
        self.cmds.push(format!("V{}", fmt_num(y)));
        self
    }

    /// Appends a rounded corner ending at `end`. Nothing is appended for a
    /// sharp corner; see [`corner_arc`].
    pub fn corner_arc(mut self, radius: f32, end: Vec2) -> Self {
        let arc = corner_arc(radius, end);
        if !arc.is_empty() {
            self.cmds.push(arc);
        }
        self
    }

    pub fn close(mut self) -> Self {
        self.cmds.push("Z".to_string());
        self
    }

    pub fn build(self) -> PathData {
        PathData(self.cmds.join(" "))
    }
}
