use std::fmt;

/// Failure while turning an SVG document into pixels.
#[derive(Debug)]
pub enum RasterError {
    /// The document is not valid SVG.
    Parse(resvg::usvg::Error),
    /// The requested pixmap (document size times scale) has a zero or
    /// oversized dimension.
    Pixmap { width: u64, height: u64 },
    /// PNG encoding failed.
    Encode(image::ImageError),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::Parse(e) => write!(f, "svg parse error: {e}"),
            RasterError::Pixmap { width, height } => {
                write!(f, "cannot allocate a {width}x{height} pixmap")
            }
            RasterError::Encode(e) => write!(f, "png encode error: {e}"),
        }
    }
}

impl std::error::Error for RasterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RasterError::Parse(e) => Some(e),
            RasterError::Pixmap { .. } => None,
            RasterError::Encode(e) => Some(e),
        }
    }
}

impl From<resvg::usvg::Error> for RasterError {
    fn from(e: resvg::usvg::Error) -> Self {
        RasterError::Parse(e)
    }
}

impl From<image::ImageError> for RasterError {
    fn from(e: image::ImageError) -> Self {
        RasterError::Encode(e)
    }
}
