#![no_main]

use libfuzzer_sys::fuzz_target;
use pixel_literal::{encode, extract_rgba, parse_decimal, parse_hex, PixelEncoding};
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    pixels: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let expected_size = 32 * 32 * 4;
    if input.pixels.len() < expected_size {
        return;
    }

    let rgba = &input.pixels[..expected_size];
    let pixels = match extract_rgba(rgba, 32, 32) {
        Ok(p) => p,
        Err(_) => return,
    };

    let opaque = rgba.chunks_exact(4).filter(|c| c[3] > 0).count();
    assert_eq!(pixels.len(), opaque);

    let hex = encode(&pixels, PixelEncoding::Hex);
    assert_eq!(hex.len(), pixels.len() * 10);
    assert_eq!(parse_hex(&hex).expect("hex should parse"), pixels);

    let decimal = encode(&pixels, PixelEncoding::Decimal);
    assert_eq!(parse_decimal(&decimal).expect("decimal should parse"), pixels);
});
