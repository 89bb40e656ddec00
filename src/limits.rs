use alloc::format;

use crate::error::TgaError;
use crate::header::Header;
use crate::pixel::ColorModel;

/// Resource limits for decoding.
///
/// All fields default to `None` (no limit). Header dimensions are checked
/// before the image id is skipped and before the raster is allocated, so a
/// hostile header costs 18 bytes of input and nothing else.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size of the decoded RGBA raster in bytes.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// First bound the header's dimensions exceed, if any.
    pub(crate) fn check_header(&self, header: &Header) -> Result<(), TgaError> {
        let width = u64::from(header.width);
        let height = u64::from(header.height);
        let pixels = width * height;
        let raster_bytes = pixels * ColorModel::Rgba8.bytes_per_pixel() as u64;

        let bounds = [
            ("width", width, self.max_width),
            ("height", height, self.max_height),
            ("pixel count", pixels, self.max_pixels),
            ("raster size in bytes", raster_bytes, self.max_memory_bytes),
        ];
        for (what, actual, limit) in bounds {
            if let Some(limit) = limit {
                if actual > limit {
                    return Err(TgaError::LimitExceeded(format!(
                        "{what} {actual} exceeds limit {limit} ({}x{} image)",
                        header.width, header.height
                    )));
                }
            }
        }
        Ok(())
    }
}
