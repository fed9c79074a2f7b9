#![no_main]

use libfuzzer_sys::fuzz_target;
use pixel_literal::{parse_decimal, parse_hex};

fuzz_target!(|text: &str| {
    let _ = parse_decimal(text);
    let _ = parse_hex(text);
});
