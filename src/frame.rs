use alloc::vec::Vec;

use rgb::{ComponentBytes, RGBA8};

use crate::error::TgaError;
use crate::orientation::Orientation;

/// Decoded RGBA raster, top-left origin, row-major.
///
/// Produced only by a fully successful decode; a failed decode never
/// hands out a partially filled frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<RGBA8>,
    /// Rows are stored in stream order until [`FrameBuffer::finish`].
    bottom_up: bool,
}

impl FrameBuffer {
    /// Reserve a `width` x `height` raster for a stream in `orientation`.
    ///
    /// Capacity is reserved up front, but rows only become backed by
    /// initialized memory as the stream delivers them, so a header that
    /// overstates its dimensions costs no more than the input it carries.
    pub(crate) fn new(
        width: u16,
        height: u16,
        orientation: &Orientation,
    ) -> Result<Self, TgaError> {
        let (width, height) = (usize::from(width), usize::from(height));
        let too_large = || TgaError::DimensionsTooLarge {
            width: width as u32,
            height: height as u32,
        };
        let len = width.checked_mul(height).ok_or_else(too_large)?;
        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len).map_err(|_| too_large())?;
        Ok(Self {
            width,
            height,
            pixels,
            bottom_up: orientation.step_y < 0,
        })
    }

    pub fn width(&self) -> u32 {
        self.width as u32
    }

    pub fn height(&self) -> u32 {
        self.height as u32
    }

    /// All pixels, row-major from the top-left corner.
    pub fn pixels(&self) -> &[RGBA8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<RGBA8> {
        self.pixels
    }

    /// One output row. Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &[RGBA8] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<RGBA8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Write one pixel at output coordinates.
    ///
    /// Decoders derive every coordinate from the orientation, so an
    /// out-of-range write is a bug, not bad input. Pixels arrive in stream
    /// order, which keeps the backing rows growing from the front.
    #[inline]
    pub(crate) fn set(&mut self, x: usize, y: usize, pixel: RGBA8) {
        assert!(
            x < self.width && y < self.height,
            "({x}, {y}) outside {}x{} frame",
            self.width,
            self.height
        );
        let row = if self.bottom_up {
            self.height - 1 - y
        } else {
            y
        };
        let i = row * self.width + x;
        if i >= self.pixels.len() {
            self.pixels.resize(i + 1, RGBA8::default());
        }
        self.pixels[i] = pixel;
    }

    /// Back every row and put them in top-left-origin order.
    pub(crate) fn finish(&mut self) {
        self.pixels.resize(self.width * self.height, RGBA8::default());
        if self.bottom_up {
            self.pixels.reverse();
            for row in self.pixels.chunks_exact_mut(self.width.max(1)) {
                row.reverse();
            }
            self.bottom_up = false;
        }
    }

    /// Flat R,G,B,A bytes.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.as_bytes().to_vec()
    }

    /// Copy into an [`imgref::ImgVec`].
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<RGBA8> {
        imgref::ImgVec::new(self.pixels.clone(), self.width, self.height)
    }

    /// Convert into an [`imgref::ImgVec`] without copying.
    #[cfg(feature = "imgref")]
    pub fn into_imgvec(self) -> imgref::ImgVec<RGBA8> {
        imgref::ImgVec::new(self.pixels, self.width, self.height)
    }
}
