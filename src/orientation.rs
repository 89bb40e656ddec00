//! Scanline order from the descriptor byte.
//!
//! Pure function of header flags and height; no I/O.

use crate::error::Unsupported;
use crate::header::DescriptorFlags;

/// Where stream scanlines land in the top-left-origin output.
///
/// Stream row `r` is written to output row `start_y + step_y * r`; the
/// walk ends when it reaches `limit_y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Orientation {
    pub start_y: i64,
    pub limit_y: i64,
    pub step_y: i64,
    /// Always true for a resolved orientation; right-to-left is rejected.
    pub left_to_right: bool,
}

impl Orientation {
    pub fn resolve(flags: DescriptorFlags, height: u16) -> Result<Self, Unsupported> {
        if flags.interleave() != 0 {
            return Err(Unsupported::Interleave(flags.interleave()));
        }
        if flags.right_to_left() {
            return Err(Unsupported::RightToLeft);
        }
        let height = i64::from(height);
        let (start_y, limit_y, step_y) = if flags.top_to_bottom() {
            (0, height, 1)
        } else {
            (height - 1, -1, -1)
        };
        Ok(Self {
            start_y,
            limit_y,
            step_y,
            left_to_right: true,
        })
    }

    /// Output row for the `stream_row`-th scanline of the stream.
    #[inline]
    pub fn output_row(&self, stream_row: usize) -> usize {
        let y = self.start_y + self.step_y * stream_row as i64;
        debug_assert!(y >= 0 && y != self.limit_y, "stream row {stream_row} out of range");
        y as usize
    }

    /// Output rows in the order scanlines appear in the stream.
    pub fn rows(&self) -> impl Iterator<Item = usize> {
        let Self {
            start_y,
            limit_y,
            step_y,
            ..
        } = *self;
        let mut y = start_y;
        core::iter::from_fn(move || {
            if y == limit_y {
                return None;
            }
            let row = y as usize;
            y += step_y;
            Some(row)
        })
    }
}
