//! Decode pipeline.
//!
//! `ReadHeader -> ResolveOrientation -> DecodePixels -> Done`. Every error
//! aborts the machine immediately and the partially filled frame is dropped.
//! Nothing in here logs; the entry points in [`crate::request`] do.

mod raw;
mod rle;

use std::io::Read;

use crate::error::{FormatError, TgaError, Unsupported};
use crate::frame::FrameBuffer;
use crate::header::{Header, ImageType, read_header};
use crate::limits::Limits;
use crate::orientation::Orientation;
use crate::pixel::PixelLayout;
use crate::source::Source;

/// Pixel-stream strategy, chosen once from the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PixelStrategy {
    /// Datatypes 2 and 3: whole scanlines of packed pixels.
    Raw(PixelLayout),
    /// Datatype 10: run-length packets over a flat pixel index.
    RunLength(PixelLayout),
}

impl PixelStrategy {
    pub(crate) fn select(header: &Header) -> Result<Self, Unsupported> {
        let layout = native_layout(header.image_type(), header.bits_per_pixel)?;
        match header.image_type() {
            ImageType::RleTrueColor => Ok(Self::RunLength(layout)),
            _ => Ok(Self::Raw(layout)),
        }
    }
}

/// On-disk pixel layout for a header, or why it cannot be decoded.
///
/// Types other than 2, 3 and 10 are rejected here, before any pixel loop.
pub(crate) fn native_layout(
    image_type: ImageType,
    bits_per_pixel: u8,
) -> Result<PixelLayout, Unsupported> {
    match (image_type, bits_per_pixel) {
        (ImageType::TrueColor | ImageType::Grayscale | ImageType::RleTrueColor, 24) => {
            Ok(PixelLayout::Bgr8)
        }
        (ImageType::TrueColor | ImageType::Grayscale | ImageType::RleTrueColor, 32) => {
            Ok(PixelLayout::Bgra8)
        }
        (ImageType::Grayscale, 8) => Ok(PixelLayout::Gray8),
        (ImageType::TrueColor | ImageType::Grayscale | ImageType::RleTrueColor, _) => {
            Err(Unsupported::Depth {
                image_type,
                bits_per_pixel,
            })
        }
        (other, _) => Err(Unsupported::ImageType(other)),
    }
}

enum Stage {
    ReadHeader,
    ResolveOrientation(Header),
    DecodePixels {
        header: Header,
        orientation: Orientation,
        strategy: PixelStrategy,
    },
    Done(Header, FrameBuffer),
}

/// Run the full pipeline against `src`.
///
/// Returns the header alongside the frame so callers can report on it.
pub(crate) fn decode_frame<R: Read>(
    src: &mut Source<R>,
    limits: Option<&Limits>,
) -> Result<(Header, FrameBuffer), TgaError> {
    let mut stage = Stage::ReadHeader;
    loop {
        stage = match stage {
            Stage::ReadHeader => Stage::ResolveOrientation(read_header(src)?),
            Stage::ResolveOrientation(header) => {
                let strategy = PixelStrategy::select(&header)?;
                let orientation = Orientation::resolve(header.descriptor, header.height)?;
                if let Some(limits) = limits {
                    limits.check_header(&header)?;
                }
                Stage::DecodePixels {
                    header,
                    orientation,
                    strategy,
                }
            }
            Stage::DecodePixels {
                header,
                orientation,
                strategy,
            } => {
                skip_preamble(src, &header)?;
                let mut frame = FrameBuffer::new(header.width, header.height, &orientation)?;
                match strategy {
                    PixelStrategy::Raw(layout) => {
                        raw::decode_raw(src, layout, &orientation, &mut frame)?
                    }
                    PixelStrategy::RunLength(layout) => {
                        rle::decode_rle(src, layout, &orientation, &mut frame)?
                    }
                }
                frame.finish();
                Stage::Done(header, frame)
            }
            Stage::Done(header, frame) => return Ok((header, frame)),
        };
    }
}

/// Image id and color-map table sit between the header and the pixels.
fn skip_preamble<R: Read>(src: &mut Source<R>, header: &Header) -> Result<(), TgaError> {
    let id_len = usize::from(header.id_length);
    src.skip_or(id_len, FormatError::TruncatedImageId { expected: id_len })?;
    let cmap_len = header.color_map_bytes();
    src.skip_or(
        cmap_len,
        FormatError::TruncatedColorMap { expected: cmap_len },
    )?;
    Ok(())
}
