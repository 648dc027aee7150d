//! Password composition and output.

pub mod compose;
mod generate;
pub mod pool;
mod request;

use std::io::{self, Write};

use zeroize::Zeroize;

pub use compose::{compose, compose_with, ComposeError};
pub use generate::{generate_batch, Sink};
pub use request::GenerationRequest;

const BUF_CAP: usize = 8 * 1024;

/// Buffered writer that zeroizes its internal buffer whenever it drains,
/// so generated passwords never linger in freed heap memory.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        SecureBufWriter {
            inner,
            buf: Vec::with_capacity(BUF_CAP),
        }
    }

    fn drain(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            self.inner.write_all(&self.buf)?;
            self.buf.zeroize();
        }
        Ok(())
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > BUF_CAP {
            self.drain()?;
        }
        if data.len() >= BUF_CAP {
            self.inner.write_all(data)?;
        } else {
            self.buf.extend_from_slice(data);
        }
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.drain()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.drain();
        self.buf.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_delivers_all_bytes_on_drop() {
        let mut sink = Vec::new();
        {
            let mut w = SecureBufWriter::new(&mut sink);
            w.write_all(b"abc\n").unwrap();
            w.write_all(b"defg\n").unwrap();
        }
        assert_eq!(sink, b"abc\ndefg\n");
    }

    #[test]
    fn writer_handles_oversized_payloads() {
        let big = vec![b'x'; BUF_CAP * 2];
        let mut sink = Vec::new();
        {
            let mut w = SecureBufWriter::new(&mut sink);
            w.write_all(b"head").unwrap();
            w.write_all(&big).unwrap();
            w.write_all(b"tail").unwrap();
        }
        assert_eq!(sink.len(), 4 + big.len() + 4);
        assert!(sink.starts_with(b"head"));
        assert!(sink.ends_with(b"tail"));
    }
}
