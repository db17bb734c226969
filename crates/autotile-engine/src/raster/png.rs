use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use resvg::{tiny_skia, usvg};

use super::RasterError;

/// Renders `svg` at an integer `scale` into a straight-alpha RGBA image.
///
/// A `scale` of zero is treated as one.
pub fn rasterize_rgba(svg: &str, scale: u32) -> Result<RgbaImage, RasterError> {
    let scale = scale.max(1);
    let tree = usvg::Tree::from_str(svg, &usvg::Options::default())?;

    let size = tree.size().to_int_size();
    let too_large = || RasterError::Pixmap {
        width: u64::from(size.width()) * u64::from(scale),
        height: u64::from(size.height()) * u64::from(scale),
    };
    let width = size.width().checked_mul(scale).ok_or_else(too_large)?;
    let height = size.height().checked_mul(scale).ok_or_else(too_large)?;
    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(too_large)?;

    let s = scale as f32;
    resvg::render(&tree, tiny_skia::Transform::from_scale(s, s), &mut pixmap.as_mut());

    // tiny-skia stores premultiplied pixels; PNG wants straight alpha.
    let mut buf = Vec::with_capacity(pixmap.pixels().len() * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        buf.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    RgbaImage::from_raw(width, height, buf).ok_or_else(too_large)
}

/// Renders `svg` at an integer `scale` and encodes the result as PNG bytes.
pub fn rasterize_png(svg: &str, scale: u32) -> Result<Vec<u8>, RasterError> {
    let img = rasterize_rgba(svg, scale)?;
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    log::debug!("rasterized {}x{} preview ({} bytes)", img.width(), img.height(), bytes.len());
    Ok(bytes)
}
