#![no_main]

use libfuzzer_sys::fuzz_target;
use pixel_literal::extract_png;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must give pixels or an error, never a panic
    let _ = extract_png(data);
});
