//! Uncompressed pixel stream (datatypes 2 and 3).

use alloc::vec;
use std::io::Read;

use crate::error::{FormatError, TgaError};
use crate::frame::FrameBuffer;
use crate::orientation::Orientation;
use crate::pixel::PixelLayout;
use crate::source::Source;

/// Read one scanline at a time in stream order and place it at the
/// output row the orientation maps it to.
pub(super) fn decode_raw<R: Read>(
    src: &mut Source<R>,
    layout: PixelLayout,
    orientation: &Orientation,
    frame: &mut FrameBuffer,
) -> Result<(), TgaError> {
    let bpp = layout.bytes_per_pixel();
    let mut scanline = vec![0u8; frame.width() as usize * bpp];

    for y in orientation.rows() {
        src.read_exact_or(&mut scanline, FormatError::TruncatedPixelData)?;
        for (x, px) in scanline.chunks_exact(bpp).enumerate() {
            frame.set(x, y, layout.to_rgba(px));
        }
    }
    Ok(())
}
