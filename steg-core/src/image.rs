use std::io::Cursor;

use image::ImageReader;
pub use image::{ImageFormat, RgbImage};

use super::error::StegResult;

/// Decodes any raster format `image` can read into an 8-bit RGB buffer,
/// guessing the format from content rather than trusting a file extension.
pub(crate) fn decode(bytes: &[u8]) -> StegResult<RgbImage> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    Ok(reader.decode()?.to_rgb8())
}

/// Encodes an RGB buffer as PNG, the only output format this codec emits,
/// since stego images must round-trip losslessly.
pub(crate) fn encode_png(image: &RgbImage) -> StegResult<Vec<u8>> {
    let mut output = Vec::new();
    let mut cursor = Cursor::new(&mut output);
    image.write_to(&mut cursor, ImageFormat::Png)?;
    Ok(output)
}
