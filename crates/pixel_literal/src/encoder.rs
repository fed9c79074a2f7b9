//! Text encoders for pixel sequences.
//!
//! Two encodings exist for a single image: comma separated decimal and packed
//! lowercase hex. The Solidity output of a batch is built on top of the hex
//! encoding, see [`crate::solidity`].

use crate::Pixel;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Hex nibbles per encoded pixel (x, y, r, g, b at two digits each).
pub const HEX_NIBBLES_PER_PIXEL: usize = 10;

/// How a single image is rendered to text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelEncoding {
    /// `x,y,r,g,b,x,y,r,g,b,...`
    Decimal,
    /// `xxyyrrggbb` per pixel, lowercase, no separators
    Hex,
}

/// What a whole batch is turned into.
///
/// Exactly one mode is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One `name = x,y,r,g,b,...` line per file
    #[default]
    Decimal,
    /// One `name = <packed hex>` line per file
    Hex,
    /// A `bytes(hex"...")` array plus a matching names array
    Solidity,
}

impl OutputMode {
    /// The per-image encoding this mode is built from.
    #[inline]
    pub fn encoding(self) -> PixelEncoding {
        match self {
            OutputMode::Decimal => PixelEncoding::Decimal,
            OutputMode::Hex | OutputMode::Solidity => PixelEncoding::Hex,
        }
    }

    /// Result of pressing the toggle for `pressed` while `self` is active.
    ///
    /// Pressing the active toggle switches it off again, which falls back to
    /// decimal output. Pressing any other toggle selects it and clears the rest.
    #[must_use]
    pub fn toggle(self, pressed: OutputMode) -> OutputMode {
        if self == pressed {
            OutputMode::Decimal
        } else {
            pressed
        }
    }
}

/// Options for the text encoders.
#[derive(Clone, Debug, Default)]
pub struct EncodeOptions {
    /// Pad hex output with trailing `0` nibbles up to a whole pixel group.
    ///
    /// This is the alternative hex layout of the standalone pixel reader
    /// script. Each pixel already takes exactly ten nibbles, so the padding is
    /// empty for any extracted sequence; it only kicks in for hand-built
    /// strings passed to [`pad_hex`]. Off by default.
    pub pad_hex: bool,
}

/// Encode a pixel sequence with default options.
///
/// An empty sequence encodes to an empty string in both encodings.
///
/// # Example
/// ```
/// use pixel_literal::{encode, Pixel, PixelEncoding};
///
/// let pixels = [Pixel::new(0, 0, 255, 0, 0), Pixel::new(1, 0, 0, 255, 0)];
/// assert_eq!(encode(&pixels, PixelEncoding::Decimal), "0,0,255,0,0,1,0,0,255,0");
/// assert_eq!(encode(&pixels, PixelEncoding::Hex), "0000ff0000010000ff00");
/// ```
#[inline]
#[must_use = "this returns the encoded string"]
pub fn encode(pixels: &[Pixel], encoding: PixelEncoding) -> String {
    encode_with(pixels, encoding, &EncodeOptions::default())
}

/// Encode a pixel sequence.
///
/// The encoder neither filters nor reorders; it writes pixels exactly as the
/// extractor produced them.
#[must_use = "this returns the encoded string"]
pub fn encode_with(pixels: &[Pixel], encoding: PixelEncoding, opts: &EncodeOptions) -> String {
    match encoding {
        PixelEncoding::Decimal => encode_decimal(pixels),
        PixelEncoding::Hex => {
            let mut out = encode_hex(pixels);
            if opts.pad_hex {
                pad_hex(&mut out);
            }
            out
        }
    }
}

fn encode_decimal(pixels: &[Pixel]) -> String {
    // worst case "255," for every field
    let mut out = String::with_capacity(pixels.len() * 5 * 4);
    for (i, p) in pixels.iter().enumerate() {
        for (j, v) in p.fields().into_iter().enumerate() {
            if i > 0 || j > 0 {
                out.push(',');
            }
            write_decimal(&mut out, v);
        }
    }
    out
}

fn encode_hex(pixels: &[Pixel]) -> String {
    let mut out = String::with_capacity(pixels.len() * HEX_NIBBLES_PER_PIXEL);
    for p in pixels {
        for v in p.fields() {
            write_hex_byte(&mut out, v);
        }
    }
    out
}

/// Append `0` nibbles until `hex` is a whole number of pixel groups.
pub fn pad_hex(hex: &mut String) {
    let rem = hex.len() % HEX_NIBBLES_PER_PIXEL;
    if rem != 0 {
        hex.extend(std::iter::repeat('0').take(HEX_NIBBLES_PER_PIXEL - rem));
    }
}

/// Decimal digits of a byte, no allocation
#[inline]
fn write_decimal(out: &mut String, n: u8) {
    if n >= 100 {
        out.push((b'0' + n / 100) as char);
    }
    if n >= 10 {
        out.push((b'0' + (n / 10) % 10) as char);
    }
    out.push((b'0' + n % 10) as char);
}

#[inline]
fn write_hex_byte(out: &mut String, n: u8) {
    out.push(HEX_DIGITS[(n >> 4) as usize] as char);
    out.push(HEX_DIGITS[(n & 0x0f) as usize] as char);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_single_red() {
        let pixels = [Pixel::new(0, 0, 255, 0, 0)];
        assert_eq!(encode(&pixels, PixelEncoding::Decimal), "0,0,255,0,0");
        assert_eq!(encode(&pixels, PixelEncoding::Hex), "0000ff0000");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&[], PixelEncoding::Decimal), "");
        assert_eq!(encode(&[], PixelEncoding::Hex), "");
    }

    #[test]
    fn test_decimal_digits() {
        let mut s = String::new();
        for n in [0u8, 7, 10, 99, 100, 255] {
            s.clear();
            write_decimal(&mut s, n);
            assert_eq!(s, n.to_string());
        }
    }

    #[test]
    fn test_hex_is_zero_padded_lowercase() {
        let pixels = [Pixel::new(31, 9, 0xab, 0x0c, 0xf0)];
        assert_eq!(encode(&pixels, PixelEncoding::Hex), "1f09ab0cf0");
    }

    #[test]
    fn test_pad_hex() {
        let mut s = String::from("0102");
        pad_hex(&mut s);
        assert_eq!(s, "0102000000");

        let mut s = String::from("0000ff0000");
        pad_hex(&mut s);
        assert_eq!(s, "0000ff0000");
    }

    #[test]
    fn test_padded_variant_matches_packed_for_real_pixels() {
        let pixels = [Pixel::new(1, 2, 3, 4, 5), Pixel::new(6, 7, 8, 9, 10)];
        let opts = EncodeOptions { pad_hex: true };
        assert_eq!(
            encode_with(&pixels, PixelEncoding::Hex, &opts),
            encode(&pixels, PixelEncoding::Hex)
        );
    }

    #[test]
    fn test_mode_toggle() {
        assert_eq!(OutputMode::default(), OutputMode::Decimal);
        assert_eq!(OutputMode::Decimal.toggle(OutputMode::Hex), OutputMode::Hex);
        assert_eq!(OutputMode::Hex.toggle(OutputMode::Solidity), OutputMode::Solidity);
        assert_eq!(OutputMode::Solidity.toggle(OutputMode::Solidity), OutputMode::Decimal);
        assert_eq!(OutputMode::Hex.toggle(OutputMode::Hex), OutputMode::Decimal);
    }

    #[test]
    fn test_mode_encoding() {
        assert_eq!(OutputMode::Decimal.encoding(), PixelEncoding::Decimal);
        assert_eq!(OutputMode::Hex.encoding(), PixelEncoding::Hex);
        assert_eq!(OutputMode::Solidity.encoding(), PixelEncoding::Hex);
    }
}
