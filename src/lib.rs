//! # zentga
//!
//! Targa (TGA) image decoder.
//!
//! Reads the fixed 18-byte header, resolves scanline order from the
//! descriptor byte and produces a top-left-origin RGBA frame from any
//! [`std::io::Read`] source.
//!
//! ## Supported Images
//!
//! - **Type 2**: uncompressed true-color, 24-bit (BGR) and 32-bit (BGRA)
//! - **Type 3**: uncompressed grayscale, 8-bit, or 24/32-bit treated as true-color
//! - **Type 10**: run-length encoded true-color, 24-bit and 32-bit
//! - Bottom-to-top (default) and top-to-bottom scanline order
//!
//! Image id and color-map tables between the header and the pixels are
//! skipped.
//!
//! ## Non-Goals
//!
//! - Color-mapped images (types 1 and 9) and compressed grayscale (type 11)
//! - Huffman/Delta/quadtree compression (types 32 and 33)
//! - Right-to-left or interleaved scanlines (rejected as unsupported)
//! - TGA 2.0 extension area and footer
//! - Encoding
//!
//! ## No Magic Bytes
//!
//! TGA has no leading signature. When registering with a format-sniffing
//! registry, use [`TgaFormat`]: it has an empty signature and must be tried
//! after every other format. If you already know the input is TGA, call
//! [`decode`] directly.
//!
//! ## Usage
//!
//! ```no_run
//! use zentga::{decode, decode_config};
//!
//! let data: &[u8] = &[]; // your TGA bytes
//!
//! // Header only
//! let config = decode_config(data)?;
//! println!("{}x{}", config.width, config.height);
//!
//! // Full decode
//! let frame = decode(data)?;
//! let rgba: Vec<u8> = frame.to_rgba_bytes();
//! # Ok::<(), zentga::TgaError>(())
//! ```

#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod error;
mod frame;
mod header;
mod info;
mod limits;
mod orientation;
mod pixel;
mod probe;
mod request;
mod source;

use std::io::Read;

// Re-exports
pub use error::{ErrorKind, FormatError, TgaError, Unsupported};
pub use frame::FrameBuffer;
pub use header::{DescriptorFlags, HEADER_LEN, Header, ImageType};
pub use info::{Config, ImageInfo};
pub use limits::Limits;
pub use orientation::Orientation;
pub use pixel::{ColorModel, PixelLayout};
pub use probe::{FormatHandler, TgaFormat};
pub use request::DecodeRequest;
pub use rgb::RGBA8;

/// Decode a TGA image into an RGBA frame.
pub fn decode<R: Read>(reader: R) -> Result<FrameBuffer, TgaError> {
    DecodeRequest::new(reader).decode()
}

/// Decode a TGA image, enforcing resource limits before allocation.
pub fn decode_with_limits<R: Read>(reader: R, limits: &Limits) -> Result<FrameBuffer, TgaError> {
    DecodeRequest::new(reader).with_limits(limits).decode()
}

/// Read the header and report dimensions and color model.
///
/// Consumes exactly [`HEADER_LEN`] bytes on success.
pub fn decode_config<R: Read>(reader: R) -> Result<Config, TgaError> {
    DecodeRequest::new(reader).decode_config()
}
