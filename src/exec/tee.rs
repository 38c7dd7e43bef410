// src/exec/tee.rs

//! Capture-and-forward writer used to relay child process output.
//!
//! Every byte written through a [`TeeWriter`] is appended to an in-memory
//! buffer and then forwarded to the destination writer, so callers see the
//! child's output live while the invocation still ends up with a full
//! capture. The buffer grows for the lifetime of one process invocation;
//! output here is test-run logs, which stay small.

use std::io::{self, Write};

/// Writer that remembers everything written to it while passing the bytes
/// through to an inner destination.
///
/// There is no reset; a `TeeWriter` lives for exactly one invocation.
#[derive(Debug)]
pub struct TeeWriter<W> {
    buf: Vec<u8>,
    inner: W,
}

impl<W: Write> TeeWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            buf: Vec::new(),
            inner,
        }
    }

    /// All bytes captured so far, in write order.
    pub fn captured(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the tee, keeping only the captured bytes.
    pub fn into_captured(self) -> Vec<u8> {
        self.buf
    }

    /// The destination writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }
}

impl<W: Write> Write for TeeWriter<W> {
    /// Buffer first, then forward, returning the destination's result.
    /// Forwarding is synchronous and ordered identically to buffering.
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        self.inner.write(data)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_and_forwards_in_order() {
        let mut tee = TeeWriter::new(Vec::new());

        tee.write_all(b"hello ").unwrap();
        tee.write_all(b"world").unwrap();

        assert_eq!(tee.captured(), b"hello world");
        assert_eq!(tee.inner, b"hello world");
    }

    #[test]
    fn returns_destination_write_result() {
        let mut tee = TeeWriter::new(Vec::new());

        let n = tee.write(b"abc").unwrap();
        assert_eq!(n, 3);
    }

    #[test]
    fn empty_write_is_a_noop() {
        let mut tee = TeeWriter::new(Vec::new());

        tee.write_all(b"").unwrap();
        assert!(tee.captured().is_empty());
        assert!(tee.inner.is_empty());
    }

    #[test]
    fn into_captured_returns_full_buffer() {
        let mut tee = TeeWriter::new(Vec::new());
        tee.write_all(b"line one\n").unwrap();
        tee.write_all(b"line two\n").unwrap();

        assert_eq!(tee.into_captured(), b"line one\nline two\n".to_vec());
    }
}
