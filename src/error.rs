use alloc::string::String;

use crate::header::ImageType;

/// Errors from TGA decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TgaError {
    /// Malformed or short input.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Valid TGA that uses a feature this decoder does not implement.
    #[error(transparent)]
    Unsupported(#[from] Unsupported),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    /// Error returned by the underlying reader, unchanged.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Coarse classification of a [`TgaError`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Format,
    Unsupported,
    LimitExceeded,
    Io,
}

impl TgaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TgaError::Format(_) => ErrorKind::Format,
            TgaError::Unsupported(_) => ErrorKind::Unsupported,
            TgaError::DimensionsTooLarge { .. } | TgaError::LimitExceeded(_) => {
                ErrorKind::LimitExceeded
            }
            TgaError::Io(_) => ErrorKind::Io,
        }
    }
}

/// The input is truncated or structurally invalid.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FormatError {
    /// Fewer than 18 header bytes were available.
    #[error("unexpected end of input")]
    TruncatedHeader,

    #[error("truncated image id: expected {expected} bytes")]
    TruncatedImageId { expected: usize },

    #[error("truncated color map: expected {expected} bytes")]
    TruncatedColorMap { expected: usize },

    #[error("truncated pixel data")]
    TruncatedPixelData,

    /// An RLE packet would write past the last pixel of the image.
    #[error("pixel stream overrun: packet of {count} pixels at index {index} exceeds {total}")]
    PixelStreamOverrun {
        index: usize,
        count: usize,
        total: usize,
    },
}

/// Recognized TGA configurations this decoder refuses to guess at.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Unsupported {
    #[error("unsupported image type: {0}")]
    ImageType(ImageType),

    #[error("unsupported pixel depth {bits_per_pixel} for {image_type}")]
    Depth {
        image_type: ImageType,
        bits_per_pixel: u8,
    },

    #[error("right-to-left scanline order is not supported")]
    RightToLeft,

    #[error("interleaved scanlines (mode {0}) are not supported")]
    Interleave(u8),
}
