//! Registration surface for format-sniffing registries.
//!
//! TGA files carry no magic bytes at the start (the TGA 2.0 footer sits at
//! the end of the file, out of reach of a prefix sniffer). The format is
//! therefore registered with an empty signature, which matches every
//! input. A registry must try every signature-bearing format first and
//! fall back to TGA last; the 18-byte header is the only validation.

use std::io::Read;

use crate::error::TgaError;
use crate::frame::FrameBuffer;
use crate::info::Config;
use crate::limits::Limits;
use crate::request::DecodeRequest;

/// What a sniffing registry needs from one image format.
pub trait FormatHandler {
    /// Short lowercase name, e.g. `"tga"`.
    fn name(&self) -> &'static str;

    /// Leading bytes that identify the format. Empty means "no signature".
    fn magic(&self) -> &'static [u8];

    /// Handlers without a signature match anything and must be tried last.
    fn is_fallback(&self) -> bool {
        self.magic().is_empty()
    }

    fn matches(&self, prefix: &[u8]) -> bool {
        prefix.starts_with(self.magic())
    }

    fn decode(&self, reader: &mut dyn Read) -> Result<FrameBuffer, TgaError>;

    /// Header-only path; never touches the pixel stream.
    fn decode_config(&self, reader: &mut dyn Read) -> Result<Config, TgaError>;
}

/// The TGA handler. Zero-signature, fallback-only.
#[derive(Clone, Debug, Default)]
pub struct TgaFormat {
    limits: Option<Limits>,
}

impl TgaFormat {
    pub const NAME: &'static str = "tga";
    pub const MAGIC: &'static [u8] = b"";
    /// Try after every signature-bearing format.
    pub const IS_FALLBACK: bool = true;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = Some(limits);
        self
    }
}

impl FormatHandler for TgaFormat {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn magic(&self) -> &'static [u8] {
        Self::MAGIC
    }

    fn is_fallback(&self) -> bool {
        Self::IS_FALLBACK
    }

    fn decode(&self, reader: &mut dyn Read) -> Result<FrameBuffer, TgaError> {
        let request = DecodeRequest::new(reader);
        match &self.limits {
            Some(limits) => request.with_limits(limits).decode(),
            None => request.decode(),
        }
    }

    fn decode_config(&self, reader: &mut dyn Read) -> Result<Config, TgaError> {
        DecodeRequest::new(reader).decode_config()
    }
}
