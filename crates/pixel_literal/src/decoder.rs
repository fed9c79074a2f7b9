//! Parsers turning encoded text back into pixels.

use crate::encoder::HEX_NIBBLES_PER_PIXEL;
use crate::{Pixel, PixelError, Result};

const FIELDS_PER_PIXEL: usize = 5;

/// Parse `x,y,r,g,b,...` text.
///
/// Leading and trailing whitespace is ignored and an empty string yields no
/// pixels. Every value must fit in a byte and the value count must be a
/// multiple of five.
pub fn parse_decimal(text: &str) -> Result<Vec<Pixel>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let values = text
        .split(',')
        .enumerate()
        .map(|(i, v)| {
            v.trim().parse::<u8>().map_err(|e| {
                PixelError::InvalidData(format!("value #{} ({:?}): {}", i, v, e))
            })
        })
        .collect::<Result<Vec<u8>>>()?;

    if values.len() % FIELDS_PER_PIXEL != 0 {
        return Err(PixelError::InvalidData(format!(
            "{} values is not a multiple of {}",
            values.len(),
            FIELDS_PER_PIXEL
        )));
    }

    Ok(values
        .chunks_exact(FIELDS_PER_PIXEL)
        .map(|c| Pixel::new(c[0], c[1], c[2], c[3], c[4]))
        .collect())
}

/// Parse packed hex text, ten nibbles per pixel.
///
/// Upper case digits are accepted as well.
pub fn parse_hex(text: &str) -> Result<Vec<Pixel>> {
    let bytes = text.trim().as_bytes();
    if bytes.len() % HEX_NIBBLES_PER_PIXEL != 0 {
        return Err(PixelError::InvalidData(format!(
            "hex length {} is not a multiple of {}",
            bytes.len(),
            HEX_NIBBLES_PER_PIXEL
        )));
    }

    let mut pixels = Vec::with_capacity(bytes.len() / HEX_NIBBLES_PER_PIXEL);
    for (p, group) in bytes.chunks_exact(HEX_NIBBLES_PER_PIXEL).enumerate() {
        let mut fields = [0u8; FIELDS_PER_PIXEL];
        for (i, pair) in group.chunks_exact(2).enumerate() {
            let offset = p * HEX_NIBBLES_PER_PIXEL + i * 2;
            fields[i] = (nibble(pair[0], offset)? << 4) | nibble(pair[1], offset + 1)?;
        }
        pixels.push(Pixel::from_fields(fields));
    }
    Ok(pixels)
}

#[inline]
fn nibble(c: u8, offset: usize) -> Result<u8> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(PixelError::InvalidData(format!(
            "invalid hex digit {:?} at offset {}",
            c as char, offset
        ))),
    }
}
