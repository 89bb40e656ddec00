//! Fixed 18-byte TGA header.
//!
//! TGA has no magic bytes, so the header is the only thing that identifies
//! the stream. All multi-byte fields are little-endian.

use core::fmt;
use std::io::Read;

use crate::error::{FormatError, TgaError};
use crate::source::Source;

/// Size of the fixed header in bytes.
pub const HEADER_LEN: usize = 18;

/// Datatype code from header byte 2.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageType {
    /// 0: no image data.
    NoImageData,
    /// 1: uncompressed, color-mapped.
    ColorMapped,
    /// 2: uncompressed true-color.
    TrueColor,
    /// 3: uncompressed grayscale.
    Grayscale,
    /// 9: run-length encoded, color-mapped.
    RleColorMapped,
    /// 10: run-length encoded true-color.
    RleTrueColor,
    /// 11: compressed grayscale.
    RleGrayscale,
    /// 32: Huffman/Delta/RLE compressed color-mapped.
    HuffmanDelta,
    /// 33: Huffman/Delta/RLE compressed color-mapped, 4-pass quadtree.
    HuffmanDeltaQuadtree,
    /// Any code not defined by the format.
    Unknown(u8),
}

impl ImageType {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::NoImageData,
            1 => Self::ColorMapped,
            2 => Self::TrueColor,
            3 => Self::Grayscale,
            9 => Self::RleColorMapped,
            10 => Self::RleTrueColor,
            11 => Self::RleGrayscale,
            32 => Self::HuffmanDelta,
            33 => Self::HuffmanDeltaQuadtree,
            other => Self::Unknown(other),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::NoImageData => 0,
            Self::ColorMapped => 1,
            Self::TrueColor => 2,
            Self::Grayscale => 3,
            Self::RleColorMapped => 9,
            Self::RleTrueColor => 10,
            Self::RleGrayscale => 11,
            Self::HuffmanDelta => 32,
            Self::HuffmanDeltaQuadtree => 33,
            Self::Unknown(code) => code,
        }
    }

    /// Human-readable description, for diagnostics only.
    pub fn description(self) -> &'static str {
        match self {
            Self::NoImageData => "No image data included.",
            Self::ColorMapped => "Uncompressed, color-mapped images.",
            Self::TrueColor => "Uncompressed, RGB images.",
            Self::Grayscale => "Uncompressed, black and white images.",
            Self::RleColorMapped => "Runlength encoded color-mapped images.",
            Self::RleTrueColor => "Runlength encoded RGB images.",
            Self::RleGrayscale => "Compressed, black and white images.",
            Self::HuffmanDelta => {
                "Compressed color-mapped data, using Huffman, Delta, and runlength encoding."
            }
            Self::HuffmanDeltaQuadtree => {
                "Compressed color-mapped data, using Huffman, Delta, and runlength encoding. \
                 4-pass quadtree-type process."
            }
            Self::Unknown(_) => "Unknown image type.",
        }
    }

    /// Whether this decoder can produce pixels for the type (depth permitting).
    pub fn is_supported(self) -> bool {
        matches!(self, Self::TrueColor | Self::Grayscale | Self::RleTrueColor)
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type {} ({})", self.code(), self.description())
    }
}

/// View of the image descriptor byte (header byte 17).
///
/// | bits | meaning |
/// |------|---------|
/// | 0–3  | alpha channel depth hint |
/// | 4    | horizontal order, 1 = right-to-left |
/// | 5    | vertical order, 1 = top-to-bottom |
/// | 6–7  | interleave mode |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DescriptorFlags(u8);

impl DescriptorFlags {
    pub fn new(raw: u8) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u8 {
        self.0
    }

    /// Attribute bits per pixel. Reported, never used for decoding.
    pub fn alpha_bits(self) -> u8 {
        self.0 & 0x0F
    }

    pub fn right_to_left(self) -> bool {
        self.0 >> 4 & 1 == 1
    }

    pub fn top_to_bottom(self) -> bool {
        self.0 >> 5 & 1 == 1
    }

    /// 0 = none, 1 = two-way, 2 = four-way, 3 = reserved.
    pub fn interleave(self) -> u8 {
        self.0 >> 6 & 0x03
    }
}

/// Parsed TGA header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub id_length: u8,
    pub color_map_type: u8,
    pub datatype_code: u8,
    pub color_map_origin: u16,
    pub color_map_length: u16,
    pub color_map_depth: u8,
    pub x_origin: u16,
    pub y_origin: u16,
    pub width: u16,
    pub height: u16,
    pub bits_per_pixel: u8,
    pub descriptor: DescriptorFlags,
}

impl Header {
    /// Decode the fixed layout. Field ranges are not validated.
    pub fn from_bytes(b: &[u8; HEADER_LEN]) -> Self {
        let le = |i: usize| u16::from_le_bytes([b[i], b[i + 1]]);
        Self {
            id_length: b[0],
            color_map_type: b[1],
            datatype_code: b[2],
            color_map_origin: le(3),
            color_map_length: le(5),
            color_map_depth: b[7],
            x_origin: le(8),
            y_origin: le(10),
            width: le(12),
            height: le(14),
            bits_per_pixel: b[16],
            descriptor: DescriptorFlags(b[17]),
        }
    }

    pub fn image_type(&self) -> ImageType {
        ImageType::from_code(self.datatype_code)
    }

    /// Size in bytes of the color-map table that follows the image id.
    pub fn color_map_bytes(&self) -> usize {
        if self.color_map_type == 0 {
            return 0;
        }
        usize::from(self.color_map_length) * usize::from(self.color_map_depth).div_ceil(8)
    }
}

/// Read exactly [`HEADER_LEN`] bytes and decode them.
///
/// End of stream anywhere inside the header, including before the first
/// byte, is reported as [`FormatError::TruncatedHeader`].
pub(crate) fn read_header<R: Read>(src: &mut Source<R>) -> Result<Header, TgaError> {
    let mut raw = [0u8; HEADER_LEN];
    src.read_exact_or(&mut raw, FormatError::TruncatedHeader)?;
    Ok(Header::from_bytes(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> [u8; HEADER_LEN] {
        [
            5, // id length
            1, // color map type
            10, // datatype
            0x02, 0x01, // cmap origin = 0x0102
            0x10, 0x00, // cmap length = 16
            24,   // cmap depth
            0x34, 0x12, // x origin = 0x1234
            0x78, 0x56, // y origin = 0x5678
            0x80, 0x02, // width = 640
            0xE0, 0x01, // height = 480
            32,   // bpp
            0x28, // descriptor
        ]
    }

    #[test]
    fn parses_little_endian_fields() {
        let h = Header::from_bytes(&sample());
        assert_eq!(h.id_length, 5);
        assert_eq!(h.color_map_type, 1);
        assert_eq!(h.image_type(), ImageType::RleTrueColor);
        assert_eq!(h.color_map_origin, 0x0102);
        assert_eq!(h.color_map_length, 16);
        assert_eq!(h.color_map_depth, 24);
        assert_eq!(h.x_origin, 0x1234);
        assert_eq!(h.y_origin, 0x5678);
        assert_eq!(h.width, 640);
        assert_eq!(h.height, 480);
        assert_eq!(h.bits_per_pixel, 32);
        assert_eq!(h.descriptor.alpha_bits(), 8);
        assert!(h.descriptor.top_to_bottom());
        assert!(!h.descriptor.right_to_left());
        assert_eq!(h.descriptor.interleave(), 0);
    }

    #[test]
    fn color_map_size_rounds_depth_up() {
        let mut raw = sample();
        raw[7] = 15;
        let h = Header::from_bytes(&raw);
        assert_eq!(h.color_map_bytes(), 16 * 2);

        raw[1] = 0;
        assert_eq!(Header::from_bytes(&raw).color_map_bytes(), 0);
    }

    #[test]
    fn every_truncation_point_is_a_format_error() {
        let raw = sample();
        for len in 0..HEADER_LEN {
            let mut src = Source::new(&raw[..len]);
            match read_header(&mut src) {
                Err(TgaError::Format(FormatError::TruncatedHeader)) => {}
                other => panic!("len {len}: expected TruncatedHeader, got {other:?}"),
            }
        }
    }

    #[test]
    fn truncated_header_message() {
        let mut src = Source::new(&[][..]);
        let err = read_header(&mut src).unwrap_err();
        assert_eq!(err.to_string(), "unexpected end of input");
    }

    #[test]
    fn image_type_table() {
        for code in [0u8, 1, 2, 3, 9, 10, 11, 32, 33, 7, 255] {
            assert_eq!(ImageType::from_code(code).code(), code);
        }
        assert!(ImageType::TrueColor.is_supported());
        assert!(ImageType::Grayscale.is_supported());
        assert!(ImageType::RleTrueColor.is_supported());
        assert!(!ImageType::RleColorMapped.is_supported());
        assert!(!ImageType::Unknown(4).is_supported());
        assert_eq!(
            ImageType::RleTrueColor.description(),
            "Runlength encoded RGB images."
        );
    }

    #[test]
    fn interleave_bits() {
        assert_eq!(DescriptorFlags::new(0x40).interleave(), 1);
        assert_eq!(DescriptorFlags::new(0x80).interleave(), 2);
        assert_eq!(DescriptorFlags::new(0xC0).interleave(), 3);
        assert!(DescriptorFlags::new(0x10).right_to_left());
    }
}
