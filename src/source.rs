//! Sequential byte source over any [`std::io::Read`].
//!
//! Reads go straight to the inner reader with no read-ahead, so a
//! header-only probe leaves the stream positioned right after the header.

use std::io::{self, Read};

use crate::error::{FormatError, TgaError};

pub(crate) struct Source<R> {
    inner: R,
    consumed: u64,
}

impl<R: Read> Source<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self { inner, consumed: 0 }
    }

    /// Fill as much of `buf` as the stream allows.
    ///
    /// Returns fewer than `buf.len()` bytes only at end of stream.
    /// Interrupted reads are retried; other I/O errors pass through.
    pub(crate) fn read_full(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        self.consumed += filled as u64;
        Ok(filled)
    }

    /// Fill all of `buf`, reporting a short stream as `truncated`.
    pub(crate) fn read_exact_or(
        &mut self,
        buf: &mut [u8],
        truncated: FormatError,
    ) -> Result<(), TgaError> {
        if self.read_full(buf)? != buf.len() {
            return Err(truncated.into());
        }
        Ok(())
    }

    pub(crate) fn read_u8_or(&mut self, truncated: FormatError) -> Result<u8, TgaError> {
        let mut b = [0u8; 1];
        self.read_exact_or(&mut b, truncated)?;
        Ok(b[0])
    }

    /// Discard exactly `n` bytes.
    pub(crate) fn skip_or(&mut self, n: usize, truncated: FormatError) -> Result<(), TgaError> {
        if n == 0 {
            return Ok(());
        }
        let copied = io::copy(&mut (&mut self.inner).take(n as u64), &mut io::sink())?;
        self.consumed += copied;
        if copied != n as u64 {
            return Err(truncated.into());
        }
        Ok(())
    }

    /// Total bytes consumed from the inner reader.
    pub(crate) fn consumed(&self) -> u64 {
        self.consumed
    }
}
