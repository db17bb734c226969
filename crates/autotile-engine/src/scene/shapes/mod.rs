pub(crate) mod line;
pub(crate) mod path;
pub(crate) mod rect;

pub use line::LineCmd;
pub use path::PathCmd;
pub use rect::RectCmd;
