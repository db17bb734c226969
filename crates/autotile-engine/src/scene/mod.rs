//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store back-end-agnostic draw commands
//! - preserve insertion order, which is paint order (back-to-front)
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
