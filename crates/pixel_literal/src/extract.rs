//! Pixel extraction: PNG bytes in, raster-ordered opaque pixels out.
//!
//! Decoding, the size check and the transparency filter happen in one call,
//! so a caller gets either the complete pixel sequence or exactly one error.

use crate::{Pixel, PixelError, Result, BYTES_PER_PIXEL, IMAGE_SIZE};
use image::{GenericImageView, ImageFormat};
use log::debug;

/// Extract the opaque pixels of a 32x32 PNG.
///
/// # Arguments
/// * `bytes` - Raw file contents
/// * `declared` - The format the file claims to be (from its extension or MIME type)
///
/// # Errors
/// * [`PixelError::UnsupportedFormat`] if `declared` is not PNG. Nothing is decoded in that case.
/// * [`PixelError::Decode`] if the stream is not a readable PNG
/// * [`PixelError::InvalidDimensions`] if the image is not exactly 32x32
///
/// # Example
/// ```ignore
/// use image::ImageFormat;
/// use pixel_literal::extract;
///
/// let bytes = std::fs::read("coin.png")?;
/// let pixels = extract(&bytes, Some(ImageFormat::Png))?;
/// ```
pub fn extract(bytes: &[u8], declared: Option<ImageFormat>) -> Result<Vec<Pixel>> {
    if declared != Some(ImageFormat::Png) {
        return Err(PixelError::UnsupportedFormat);
    }
    extract_png(bytes)
}

/// Decode `bytes` as PNG and extract the opaque pixels, without looking at a declared format.
pub fn extract_png(bytes: &[u8]) -> Result<Vec<Pixel>> {
    let img = image::load_from_memory_with_format(bytes, ImageFormat::Png)
        .map_err(|e| PixelError::Decode(e.to_string()))?;

    let (width, height) = img.dimensions();
    check_dimensions(width, height)?;

    // Palette, grayscale and 16 bit PNGs all end up as 8 bit RGBA here.
    let rgba = img.to_rgba8();
    extract_rgba(rgba.as_raw(), width, height)
}

/// Extract the opaque pixels from an already decoded RGBA8 buffer.
///
/// # Arguments
/// * `rgba` - Raw RGBA pixel data (4 bytes per pixel: R, G, B, A), row-major
/// * `width` - Image width in pixels, must be 32
/// * `height` - Image height in pixels, must be 32
///
/// Pixels with alpha 0 are skipped entirely. The rest are returned in raster
/// order: rows top to bottom, left to right within a row.
pub fn extract_rgba(rgba: &[u8], width: u32, height: u32) -> Result<Vec<Pixel>> {
    check_dimensions(width, height)?;

    let expected = (width * height) as usize * BYTES_PER_PIXEL;
    if rgba.len() != expected {
        return Err(PixelError::BufferSizeMismatch {
            expected,
            actual: rgba.len(),
        });
    }

    let side = IMAGE_SIZE as usize;
    let pixels: Vec<Pixel> = rgba
        .chunks_exact(BYTES_PER_PIXEL)
        .enumerate()
        .filter(|(_, c)| c[3] > 0)
        .map(|(i, c)| Pixel::new((i % side) as u8, (i / side) as u8, c[0], c[1], c[2]))
        .collect();

    debug!(
        "extracted {} opaque pixels out of {}",
        pixels.len(),
        side * side
    );
    Ok(pixels)
}

#[inline]
fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width != IMAGE_SIZE || height != IMAGE_SIZE {
        return Err(PixelError::InvalidDimensions { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank() -> Vec<u8> {
        vec![0u8; 32 * 32 * 4]
    }

    fn set(rgba: &mut [u8], x: usize, y: usize, px: [u8; 4]) {
        let idx = (y * 32 + x) * 4;
        rgba[idx..idx + 4].copy_from_slice(&px);
    }

    #[test]
    fn test_fully_transparent_is_empty() {
        let pixels = extract_rgba(&blank(), 32, 32).unwrap();
        assert!(pixels.is_empty());
    }

    #[test]
    fn test_raster_order() {
        let mut rgba = blank();
        set(&mut rgba, 5, 2, [1, 2, 3, 255]);
        set(&mut rgba, 31, 0, [4, 5, 6, 1]);
        set(&mut rgba, 0, 2, [7, 8, 9, 128]);

        let pixels = extract_rgba(&rgba, 32, 32).unwrap();
        assert_eq!(
            pixels,
            vec![
                Pixel::new(31, 0, 4, 5, 6),
                Pixel::new(0, 2, 7, 8, 9),
                Pixel::new(5, 2, 1, 2, 3),
            ]
        );
    }

    #[test]
    fn test_transparent_color_is_ignored() {
        let mut rgba = blank();
        // alpha 0 with a colour still counts as transparent
        set(&mut rgba, 1, 1, [255, 255, 255, 0]);
        assert!(extract_rgba(&rgba, 32, 32).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_dimensions() {
        let rgba = vec![0u8; 16 * 16 * 4];
        let err = extract_rgba(&rgba, 16, 16).unwrap_err();
        assert!(matches!(
            err,
            PixelError::InvalidDimensions {
                width: 16,
                height: 16
            }
        ));
        assert_eq!(err.to_string(), "Image must be 32x32 pixels");
    }

    #[test]
    fn test_buffer_size_mismatch() {
        let rgba = vec![0u8; 100];
        assert!(matches!(
            extract_rgba(&rgba, 32, 32),
            Err(PixelError::BufferSizeMismatch {
                expected: 4096,
                actual: 100
            })
        ));
    }

    #[test]
    fn test_declared_format_checked_before_decode() {
        // garbage bytes: a decode attempt would yield Decode, not UnsupportedFormat
        let garbage = [1u8, 2, 3];
        assert!(matches!(
            extract(&garbage, Some(ImageFormat::Jpeg)),
            Err(PixelError::UnsupportedFormat)
        ));
        assert!(matches!(
            extract(&garbage, None),
            Err(PixelError::UnsupportedFormat)
        ));
        assert!(matches!(
            extract(&garbage, Some(ImageFormat::Png)),
            Err(PixelError::Decode(_))
        ));
    }
}
