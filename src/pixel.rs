use rgb::RGBA8;

/// On-disk pixel layout of a decodable image.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelLayout {
    /// Single channel, 8-bit grayscale.
    Gray8,
    /// 3 channels, 8-bit BGR (TGA 24-bit on-disk order).
    Bgr8,
    /// 4 channels, 8-bit BGRA (TGA 32-bit on-disk order).
    Bgra8,
}

impl PixelLayout {
    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Gray8 => 1,
            Self::Bgr8 => 3,
            Self::Bgra8 => 4,
        }
    }

    /// Normalize one stored pixel to RGBA. Missing alpha becomes opaque.
    ///
    /// `px` must hold exactly [`Self::bytes_per_pixel`] bytes.
    #[inline]
    pub(crate) fn to_rgba(self, px: &[u8]) -> RGBA8 {
        match self {
            Self::Gray8 => RGBA8::new(px[0], px[0], px[0], 255),
            Self::Bgr8 => RGBA8::new(px[2], px[1], px[0], 255),
            Self::Bgra8 => RGBA8::new(px[2], px[1], px[0], px[3]),
        }
    }
}

/// Color model of decoded frames, whatever the on-disk layout.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorModel {
    /// 8-bit R, G, B, A.
    #[default]
    Rgba8,
}

impl ColorModel {
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Rgba8 => 4,
        }
    }
}
