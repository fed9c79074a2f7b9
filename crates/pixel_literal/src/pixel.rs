use std::fmt;

/// One opaque pixel of a source image.
///
/// Alpha is only used to decide whether a pixel is kept at all, so it is not
/// part of the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
    /// Column, 0..32
    pub x: u8,
    /// Row, 0..32
    pub y: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    #[inline]
    pub const fn new(x: u8, y: u8, r: u8, g: u8, b: u8) -> Self {
        Self { x, y, r, g, b }
    }

    /// The five encoded fields in wire order: x, y, r, g, b.
    #[inline]
    pub const fn fields(&self) -> [u8; 5] {
        [self.x, self.y, self.r, self.g, self.b]
    }

    /// Builds a pixel from fields in wire order.
    #[inline]
    pub const fn from_fields(f: [u8; 5]) -> Self {
        Self::new(f[0], f[1], f[2], f[3], f[4])
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{} -> #{:02x}{:02x}{:02x}",
            self.x, self.y, self.r, self.g, self.b
        )
    }
}
