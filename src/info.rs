use std::io::Read;

use crate::decode::native_layout;
use crate::error::TgaError;
use crate::header::{DescriptorFlags, Header, ImageType, read_header};
use crate::pixel::{ColorModel, PixelLayout};
use crate::source::Source;

/// Dimensions and color model, as reported by the header-only config path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub width: u16,
    pub height: u16,
    pub color_model: ColorModel,
}

impl Config {
    pub(crate) fn from_header(header: &Header) -> Self {
        Self {
            width: header.width,
            height: header.height,
            color_model: ColorModel::Rgba8,
        }
    }
}

/// Everything the header says about an image, without decoding pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u16,
    pub height: u16,
    pub image_type: ImageType,
    pub bits_per_pixel: u8,
    pub descriptor: DescriptorFlags,
    /// On-disk pixel layout, `None` when the type/depth pair can't be decoded.
    pub native_layout: Option<PixelLayout>,
    /// Color model of decoded frames.
    pub color_model: ColorModel,
}

impl ImageInfo {
    /// Read the 18-byte header and nothing else.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TgaError> {
        let header = read_header(&mut Source::new(reader))?;
        Ok(Self::from_header(&header))
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, TgaError> {
        Self::from_reader(data)
    }

    pub(crate) fn from_header(header: &Header) -> Self {
        Self {
            width: header.width,
            height: header.height,
            image_type: header.image_type(),
            bits_per_pixel: header.bits_per_pixel,
            descriptor: header.descriptor,
            native_layout: native_layout(header.image_type(), header.bits_per_pixel).ok(),
            color_model: ColorModel::Rgba8,
        }
    }

    /// Header-level check only; scan order flags and truncation are
    /// discovered during the full decode.
    pub fn is_decodable(&self) -> bool {
        self.native_layout.is_some()
    }
}
