//! Batch generation to stdout, file, or clipboard buffer.

use std::fs::File;
use std::io::Write;

use zeroize::Zeroize;

use crate::rand::{EntropyRng, IndexSource};

use super::compose::ComposeError;
use super::pool;
use super::request::GenerationRequest;
use super::SecureBufWriter;

/// Where a batch of passwords goes.
pub enum Sink {
    Stdout,
    File(File),
    /// Accumulate into a string for the clipboard.
    Clipboard,
}

/// Generate `count` passwords into `sink`, one per line.
///
/// The pool is built once and reused; each password is zeroized from the
/// working buffer after it is written out. Returns the accumulated string
/// for the clipboard sink, `None` otherwise.
pub fn generate_batch(
    request: &GenerationRequest,
    count: usize,
    sink: Sink,
) -> Result<Option<String>, ComposeError> {
    let pool = pool::build(request);
    if pool.is_empty() {
        return Err(ComposeError::EmptyPool);
    }

    let mut rng = EntropyRng;
    let mut buf = Vec::with_capacity(request.length + 1);

    match sink {
        Sink::Clipboard => {
            let mut passwords = String::new();
            for _ in 0..count {
                fill(&pool, request.length, &mut rng, &mut buf);
                // Safety: pool bytes are all ASCII
                passwords.push_str(unsafe { std::str::from_utf8_unchecked(&buf) });
                passwords.push('\n');
                buf.zeroize();
            }
            Ok(Some(passwords))
        }
        Sink::File(file) => {
            let mut out = SecureBufWriter::new(file);
            write_lines(request, count, &pool, &mut rng, &mut buf, &mut out);
            Ok(None)
        }
        Sink::Stdout => {
            let stdout = std::io::stdout();
            let mut out = SecureBufWriter::new(stdout.lock());
            write_lines(request, count, &pool, &mut rng, &mut buf, &mut out);
            Ok(None)
        }
    }
}

fn write_lines<W: Write>(
    request: &GenerationRequest,
    count: usize,
    pool: &[u8],
    rng: &mut dyn IndexSource,
    buf: &mut Vec<u8>,
    out: &mut SecureBufWriter<W>,
) {
    for _ in 0..count {
        fill(pool, request.length, rng, buf);
        buf.push(b'\n');
        let _ = out.write_all(buf);
        buf.zeroize();
    }
}

#[inline]
fn fill(pool: &[u8], length: usize, rng: &mut dyn IndexSource, buf: &mut Vec<u8>) {
    buf.clear();
    buf.extend((0..length).map(|_| pool[rng.next_index(pool.len())]));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipboard_sink_collects_one_line_per_password() {
        let request = GenerationRequest {
            length: 16,
            ..GenerationRequest::default()
        };
        let out = generate_batch(&request, 3, Sink::Clipboard).unwrap().unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in lines {
            assert_eq!(line.len(), 16);
        }
    }

    #[test]
    fn empty_pool_propagates() {
        let request = GenerationRequest {
            include_uppercase: false,
            include_lowercase: false,
            include_digits: false,
            include_special: false,
            ..GenerationRequest::default()
        };
        assert!(generate_batch(&request, 1, Sink::Clipboard).is_err());
    }
}
