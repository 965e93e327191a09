//! Byte output capability for reports.
//!
//! The suite never prints directly. Everything it emits goes through a [`ByteSink`],
//! which on bare metal wraps the write syscall and on a host wraps any
//! `std::io::Write`.

use alloc::vec::Vec;
use core::str::Utf8Error;

use crate::error::SinkError;

/// Destination for report bytes
pub trait ByteSink {
    /// Write all of `bytes` or fail
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), SinkError>;

    /// Write a UTF-8 string
    fn write_str(&mut self, s: &str) -> Result<(), SinkError> {
        self.write_bytes(s.as_bytes())
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), SinkError> {
        (**self).write_bytes(bytes)
    }
}

/// In-memory sink, optionally bounded
#[derive(Debug, Default, Clone)]
pub struct VecSink {
    buf: Vec<u8>,
    limit: Option<usize>,
}

impl VecSink {
    /// Create an unbounded sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink that fails once more than `limit` bytes are written
    pub fn with_limit(limit: usize) -> Self {
        Self {
            buf: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Bytes written so far
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Written bytes as text
    pub fn as_str(&self) -> Result<&str, Utf8Error> {
        core::str::from_utf8(&self.buf)
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}

impl ByteSink for VecSink {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), SinkError> {
        if let Some(capacity) = self.limit {
            if self.buf.len() + bytes.len() > capacity {
                return Err(SinkError::Overflow { capacity });
            }
        }
        self.buf.extend_from_slice(bytes);
        Ok(())
    }
}

/// Adapter from any `std::io::Write` to [`ByteSink`]
#[cfg(feature = "std")]
pub struct IoSink<W: std::io::Write> {
    writer: W,
}

#[cfg(feature = "std")]
impl<W: std::io::Write> IoSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Flush the underlying writer
    pub fn flush(&mut self) -> Result<(), SinkError> {
        self.writer.flush().map_err(io_error)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> ByteSink for IoSink<W> {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), SinkError> {
        self.writer.write_all(bytes).map_err(io_error)
    }
}

#[cfg(feature = "std")]
fn io_error(err: std::io::Error) -> SinkError {
    use alloc::string::ToString;

    match err.kind() {
        std::io::ErrorKind::BrokenPipe => SinkError::Closed,
        _ => SinkError::Io(err.to_string()),
    }
}
