//! Run-length encoded true-color stream (datatype 10).
//!
//! Each packet starts with a control byte: bit 7 set means one pixel
//! repeated, clear means that many literal pixels; bits 0-6 hold the
//! count minus one. Packets are not aligned to scanlines, so placement is
//! driven by a flat pixel index over the whole image rather than by rows.

use std::io::Read;

use rgb::RGBA8;

use crate::error::{FormatError, TgaError};
use crate::frame::FrameBuffer;
use crate::orientation::Orientation;
use crate::pixel::PixelLayout;
use crate::source::Source;

const RUN_FLAG: u8 = 0x80;
const COUNT_MASK: u8 = 0x7F;
const MAX_PACKET_PIXELS: usize = 128;

/// Write position in stream order.
struct DecodeCursor<'a> {
    index: usize,
    width: usize,
    orientation: &'a Orientation,
}

impl DecodeCursor<'_> {
    #[inline]
    fn put(&mut self, frame: &mut FrameBuffer, pixel: RGBA8) {
        let x = self.index % self.width;
        let y = self.orientation.output_row(self.index / self.width);
        frame.set(x, y, pixel);
        self.index += 1;
    }
}

pub(super) fn decode_rle<R: Read>(
    src: &mut Source<R>,
    layout: PixelLayout,
    orientation: &Orientation,
    frame: &mut FrameBuffer,
) -> Result<(), TgaError> {
    let bpp = layout.bytes_per_pixel();
    let total = frame.width() as usize * frame.height() as usize;
    let mut packet = [0u8; MAX_PACKET_PIXELS * 4];
    let mut cursor = DecodeCursor {
        index: 0,
        width: frame.width() as usize,
        orientation,
    };

    while cursor.index < total {
        let control = src.read_u8_or(FormatError::TruncatedPixelData)?;
        let count = usize::from(control & COUNT_MASK) + 1;

        if count > total - cursor.index {
            return Err(FormatError::PixelStreamOverrun {
                index: cursor.index,
                count,
                total,
            }
            .into());
        }

        if control & RUN_FLAG != 0 {
            let px = &mut packet[..bpp];
            src.read_exact_or(px, FormatError::TruncatedPixelData)?;
            let pixel = layout.to_rgba(px);
            for _ in 0..count {
                cursor.put(frame, pixel);
            }
        } else {
            let pixels = &mut packet[..count * bpp];
            src.read_exact_or(pixels, FormatError::TruncatedPixelData)?;
            for px in pixels.chunks_exact(bpp) {
                cursor.put(frame, layout.to_rgba(px));
            }
        }
    }
    Ok(())
}
