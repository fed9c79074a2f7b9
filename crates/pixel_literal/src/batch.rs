//! Batch conversion of a selection of files.

use crate::{
    assemble, encode_with, extract, EncodeOptions, EncodedImage, OutputMode, PixelError, Result,
};
use image::ImageFormat;
use log::{debug, error, info};
use std::path::Path;

/// A selected file: its name, raw contents and the format it claims to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// File name as selected, including extension
    pub name: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
    /// Format derived from the extension or MIME type; `None` if unknown
    pub declared_format: Option<ImageFormat>,
}

impl SourceFile {
    pub fn new(
        name: impl Into<String>,
        bytes: Vec<u8>,
        declared_format: Option<ImageFormat>,
    ) -> Self {
        Self {
            name: name.into(),
            bytes,
            declared_format,
        }
    }

    /// A file declared as PNG.
    pub fn png(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::new(name, bytes, Some(ImageFormat::Png))
    }

    /// A file whose declared format is taken from the extension of `name`.
    pub fn from_name(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let declared_format = ImageFormat::from_path(Path::new(&name)).ok();
        Self::new(name, bytes, declared_format)
    }

    /// Name used in Solidity output.
    pub fn identifier(&self) -> &str {
        strip_png_suffix(&self.name)
    }
}

/// Strip a trailing, lowercase `.png` from `name`. Nothing else is removed.
///
/// ```
/// use pixel_literal::strip_png_suffix;
///
/// assert_eq!(strip_png_suffix("coin.png"), "coin");
/// assert_eq!(strip_png_suffix("coin.PNG"), "coin.PNG");
/// assert_eq!(strip_png_suffix("coin.png.bak"), "coin.png.bak");
/// ```
pub fn strip_png_suffix(name: &str) -> &str {
    name.strip_suffix(".png").unwrap_or(name)
}

/// Convert `files` in selection order.
///
/// * `Decimal` / `Hex`: one `"<file name> = <encoded>"` line per file, joined with `\n`.
/// * `Solidity`: the two-array block from [`assemble`], using stripped identifiers.
///
/// Files are handled one at a time. The first failure aborts the whole batch
/// and no partial output is returned. An empty selection gives an empty string.
pub fn process(files: &[SourceFile], mode: OutputMode, opts: &EncodeOptions) -> Result<String> {
    if files.is_empty() {
        return Ok(String::new());
    }
    info!("converting {} file(s) as {:?}", files.len(), mode);

    let encoding = mode.encoding();
    let mut encoded = Vec::with_capacity(files.len());
    for file in files {
        let pixels = extract(&file.bytes, file.declared_format).map_err(|e| {
            error!("'{}' failed, aborting batch: {}", file.name, e);
            e
        })?;
        debug!("'{}': {} opaque pixels", file.name, pixels.len());
        encoded.push(encode_with(&pixels, encoding, opts));
    }

    let out = match mode {
        OutputMode::Solidity => {
            let entries: Vec<EncodedImage> = files
                .iter()
                .zip(encoded)
                .map(|(f, data)| EncodedImage::new(f.identifier(), data))
                .collect();
            assemble(&entries)
        }
        OutputMode::Decimal | OutputMode::Hex => files
            .iter()
            .zip(encoded)
            .map(|(f, data)| format!("{} = {}", f.name, data))
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(out)
}

/// The single line shown in place of the output when a batch fails.
///
/// ```
/// use pixel_literal::{render_error, PixelError};
///
/// let err = PixelError::InvalidDimensions { width: 16, height: 16 };
/// assert_eq!(render_error(&err), "Error: Image must be 32x32 pixels");
/// ```
pub fn render_error(err: &PixelError) -> String {
    format!("Error: {err}")
}
