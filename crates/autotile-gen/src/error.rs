use std::fmt;
use std::io;
use std::path::PathBuf;

use autotile_engine::raster::RasterError;

/// A failed generator run. Files written before the failure are kept.
#[derive(Debug)]
pub enum GenError {
    /// Creating a directory or writing a file failed.
    Io { path: PathBuf, source: io::Error },
    /// Rendering a PNG preview failed.
    Preview { tile: &'static str, source: RasterError },
}

impl GenError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| GenError::Io { path, source }
    }
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::Io { path, source } => write!(f, "{}: {source}", path.display()),
            GenError::Preview { tile, source } => write!(f, "preview of {tile}: {source}"),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenError::Io { source, .. } => Some(source),
            GenError::Preview { source, .. } => Some(source),
        }
    }
}
