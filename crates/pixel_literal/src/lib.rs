//! # pixel_literal
//!
//! Turns 32x32 PNG sprites into compact text that can be pasted into source
//! code or smart-contract literals.
//!
//! ## Features
//!
//! - **Extraction**: decodes a PNG and keeps every pixel with alpha > 0, in raster order
//! - **Encoding**: decimal (`x,y,r,g,b,...`) or packed hex (10 nibbles per pixel)
//! - **Solidity**: assembles `bytes(hex"...")` and name arrays for a whole batch
//! - **Sessions**: sequence-numbered requests so a stale result never wins
//!
//! ## Quick Start
//!
//! ```ignore
//! use pixel_literal::{process, EncodeOptions, OutputMode, SourceFile};
//!
//! let png = std::fs::read("coin.png")?;
//! let files = vec![SourceFile::png("coin.png", png)];
//! let text = process(&files, OutputMode::Hex, &EncodeOptions::default())?;
//! println!("{}", text); // coin.png = 0000ff0000...
//! ```
//!
//! ### Decoding text back into pixels
//!
//! ```
//! use pixel_literal::{parse_decimal, Pixel};
//!
//! let pixels = parse_decimal("0,0,255,0,0,1,0,0,255,0")?;
//! assert_eq!(pixels[1], Pixel::new(1, 0, 0, 255, 0));
//! # Ok::<(), pixel_literal::PixelError>(())
//! ```

use thiserror::Error;

pub mod batch;
pub mod decoder;
pub mod encoder;
pub mod extract;
pub mod pixel;
pub mod session;
pub mod solidity;

pub use batch::{process, render_error, strip_png_suffix, SourceFile};
pub use decoder::{parse_decimal, parse_hex};
pub use encoder::{encode, encode_with, pad_hex, EncodeOptions, OutputMode, PixelEncoding};
pub use extract::{extract, extract_png, extract_rgba};
pub use pixel::Pixel;
pub use session::{Session, Ticket};
pub use solidity::{assemble, EncodedImage};

/// Width and height every source image must have.
pub const IMAGE_SIZE: u32 = 32;

/// Errors that can occur while converting images or parsing encoded text.
#[derive(Debug, Error)]
pub enum PixelError {
    /// Source image is not exactly 32x32
    #[error("Image must be 32x32 pixels")]
    InvalidDimensions { width: u32, height: u32 },

    /// File does not claim to be a PNG
    #[error("Please select PNG files only.")]
    UnsupportedFormat,

    /// PNG stream could not be decoded
    #[error("Error loading image: {0}")]
    Decode(String),

    /// RGBA buffer size doesn't match expected size for dimensions
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Encoded text could not be parsed back into pixels
    #[error("invalid pixel data: {0}")]
    InvalidData(String),
}

/// Result type for pixel_literal operations.
pub type Result<T> = core::result::Result<T, PixelError>;

/// Bytes per decoded pixel (R, G, B, A).
pub(crate) const BYTES_PER_PIXEL: usize = 4;
