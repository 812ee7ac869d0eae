//! Bounded image decoding shared by uploads and reference images.

use std::io::Cursor;

use image::io::Reader;
use image::RgbImage;

/// Largest pixel count accepted for decoding (50 megapixels).
///
/// Decoders allocate the whole pixel buffer from the header's declared size,
/// so the header is checked against this before any pixel data is read.
pub const MAX_IMAGE_PIXELS: u64 = 50_000_000;

#[derive(Debug, thiserror::Error)]
pub enum ImageDecodeError {
    #[error("empty image data")]
    Empty,
    #[error("unrecognized image format")]
    UnknownFormat,
    #[error("image is {width}x{height}, larger than the {max} pixel limit")]
    TooLarge { width: u32, height: u32, max: u64 },
    #[error("{0}")]
    Image(#[from] image::ImageError),
}

fn reader(bytes: &[u8]) -> Result<Reader<Cursor<&[u8]>>, ImageDecodeError> {
    let reader = Reader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| ImageDecodeError::Image(image::ImageError::IoError(e)))?;
    if reader.format().is_none() {
        return Err(ImageDecodeError::UnknownFormat);
    }
    Ok(reader)
}

/// Decodes `bytes` into 8-bit RGB after checking the declared dimensions
/// against [`MAX_IMAGE_PIXELS`].
pub fn decode_rgb_bounded(bytes: &[u8]) -> Result<RgbImage, ImageDecodeError> {
    if bytes.is_empty() {
        return Err(ImageDecodeError::Empty);
    }

    let (width, height) = reader(bytes)?.into_dimensions()?;
    if u64::from(width) * u64::from(height) > MAX_IMAGE_PIXELS {
        return Err(ImageDecodeError::TooLarge {
            width,
            height,
            max: MAX_IMAGE_PIXELS,
        });
    }

    Ok(reader(bytes)?.decode()?.into_rgb8())
}
