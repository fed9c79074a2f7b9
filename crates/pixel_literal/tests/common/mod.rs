// shared test fixtures: PNG files built in memory

#![allow(dead_code)]

use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// Encodes `img` as PNG.
pub fn to_png(img: &RgbaImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .expect("Failed to encode PNG fixture");
    buf.into_inner()
}

/// A fully transparent image with the given pixels set.
pub fn png_with(width: u32, height: u32, pixels: &[(u32, u32, [u8; 4])]) -> Vec<u8> {
    let mut img = RgbaImage::new(width, height);
    for &(x, y, px) in pixels {
        img.put_pixel(x, y, Rgba(px));
    }
    to_png(&img)
}

/// 32x32, a single opaque red pixel at (0,0).
pub fn single_red() -> Vec<u8> {
    png_with(32, 32, &[(0, 0, [255, 0, 0, 255])])
}

/// 32x32 with a deterministic mix of transparent, translucent and opaque pixels.
pub fn checker() -> RgbaImage {
    RgbaImage::from_fn(32, 32, |x, y| {
        let alpha = match (x + y) % 3 {
            0 => 0,
            1 => 1,
            _ => 255,
        };
        Rgba([(x * 8) as u8, (y * 8) as u8, ((x ^ y) * 4) as u8, alpha])
    })
}
