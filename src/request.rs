//! Public decode entry points.
//!
//! This is the only layer that logs; the decode core stays side-effect free.

use std::io::Read;

use crate::decode::decode_frame;
use crate::error::TgaError;
use crate::frame::FrameBuffer;
use crate::header::{Header, read_header};
use crate::info::Config;
use crate::limits::Limits;
use crate::source::Source;

/// Decode request builder.
///
/// ```no_run
/// use zentga::{DecodeRequest, Limits};
///
/// let file = std::io::BufReader::new(std::fs::File::open("image.tga")?);
/// let limits = Limits { max_pixels: Some(64 * 1024 * 1024), ..Default::default() };
/// let frame = DecodeRequest::new(file).with_limits(&limits).decode()?;
/// println!("{}x{}", frame.width(), frame.height());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct DecodeRequest<'a, R> {
    reader: R,
    limits: Option<&'a Limits>,
}

impl<'a, R: Read> DecodeRequest<'a, R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            limits: None,
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode the whole image into an RGBA frame.
    ///
    /// The reader is consumed up to the last pixel byte and not rewound on
    /// failure.
    pub fn decode(self) -> Result<FrameBuffer, TgaError> {
        let mut src = Source::new(self.reader);
        match decode_frame(&mut src, self.limits) {
            Ok((header, frame)) => {
                log_header(&header);
                log::debug!(
                    "tga: decoded {}x{} frame from {} bytes",
                    frame.width(),
                    frame.height(),
                    src.consumed()
                );
                Ok(frame)
            }
            Err(e) => {
                log::debug!("tga: decode failed after {} bytes: {e}", src.consumed());
                Err(e)
            }
        }
    }

    /// Read only the 18-byte header and report dimensions and color model.
    pub fn decode_config(self) -> Result<Config, TgaError> {
        let header = read_header(&mut Source::new(self.reader))?;
        log_header(&header);
        Ok(Config::from_header(&header))
    }
}

fn log_header(header: &Header) {
    let image_type = header.image_type();
    log::debug!(
        "tga: {}x{}, {} bpp, datatype {}: {}",
        header.width,
        header.height,
        header.bits_per_pixel,
        image_type.code(),
        image_type.description()
    );
    let d = header.descriptor;
    log::trace!(
        "tga: descriptor {:#04x}: alpha bits {}, right-to-left {}, top-to-bottom {}, interleave {}",
        d.raw(),
        d.alpha_bits(),
        d.right_to_left(),
        d.top_to_bottom(),
        d.interleave()
    );
    log::trace!(
        "tga: id length {}, color map type {} (origin {}, length {}, depth {}), origin ({}, {})",
        header.id_length,
        header.color_map_type,
        header.color_map_origin,
        header.color_map_length,
        header.color_map_depth,
        header.x_origin,
        header.y_origin
    );
}
