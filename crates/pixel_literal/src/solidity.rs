//! Solidity literal assembly.
//!
//! A batch in Solidity mode becomes two parallel arrays: the hex encoding of
//! every image wrapped as `bytes(hex"...")`, and the matching file names.
//! Index `i` of both arrays always refers to the `i`-th selected file.

/// One image's identifier together with its encoded pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    /// File name with the `.png` suffix stripped
    pub name: String,
    /// Encoded pixel string, hex for Solidity output
    pub data: String,
}

impl EncodedImage {
    pub fn new(name: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}

/// Build the two-array Solidity block for `entries`, keeping their order.
///
/// ```
/// use pixel_literal::{assemble, EncodedImage};
///
/// let text = assemble(&[EncodedImage::new("a", "0000ff0000")]);
/// assert_eq!(
///     text,
///     "// Hex values array:\n[\nbytes(hex\"0000ff0000\")\n]\n\n// Names array:\n[\n\"a\"\n]"
/// );
/// ```
#[must_use = "this returns the assembled Solidity text"]
pub fn assemble(entries: &[EncodedImage]) -> String {
    let hex_array = entries
        .iter()
        .map(|e| format!("bytes(hex\"{}\")", e.data))
        .collect::<Vec<_>>()
        .join(",\n");
    let names_array = entries
        .iter()
        .map(|e| format!("\"{}\"", e.name))
        .collect::<Vec<_>>()
        .join(",\n");

    format!("// Hex values array:\n[\n{hex_array}\n]\n\n// Names array:\n[\n{names_array}\n]")
}
