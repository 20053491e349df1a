use std::path::{Path, PathBuf};

use image::ImageEncoder as _;

use crate::{
    encode::{flatten::flatten_to_opaque_rgba8, output::write_staged},
    foundation::{
        core::Rgb8,
        error::{SpiroError, SpiroResult},
    },
    render::backend::FrameRGBA,
};

/// Flatten `frame` over `background` and encode it as an RGBA PNG.
pub fn encode_png(frame: &FrameRGBA, background: Rgb8) -> SpiroResult<Vec<u8>> {
    let mut rgba = vec![0u8; frame.data.len()];
    flatten_to_opaque_rgba8(&mut rgba, &frame.data, frame.premultiplied, background)?;

    let mut out = Vec::new();
    image::codecs::png::PngEncoder::new(&mut out)
        .write_image(
            &rgba,
            frame.width,
            frame.height,
            image::ExtendedColorType::Rgba8,
        )
        .map_err(|e| SpiroError::encode(format!("png encoding failed: {e}")))?;
    Ok(out)
}

pub fn write_png(path: &Path, frame: &FrameRGBA, background: Rgb8) -> SpiroResult<PathBuf> {
    let bytes = encode_png(frame, background)?;
    write_staged(path, &bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
