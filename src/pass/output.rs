//! Writing generated values to a terminal, file or clipboard buffer.
//!
//! Every value is wiped from memory once written.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use zeroize::Zeroize;

const BUF_CAPACITY: usize = 64 * 1024;

/// Buffered writer that zeroes its buffer each time it is drained.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(BUF_CAPACITY),
        }
    }

    fn drain(&mut self) -> io::Result<()> {
        let res = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        res
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > BUF_CAPACITY {
            self.drain()?;
        }
        self.buf.extend_from_slice(data);
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
    }
}

/// Write `count` values, one per line. Stops at the first value that fails.
pub fn to_writer<W, F, E>(out: W, count: usize, mut next: F) -> Result<(), E>
where
    W: Write,
    F: FnMut() -> Result<String, E>,
    E: From<io::Error>,
{
    let mut out = SecureBufWriter::new(out);
    for _ in 0..count {
        let mut value = next()?;
        value.push('\n');
        let res = out.write_all(value.as_bytes());
        value.zeroize();
        res?;
    }
    out.flush()?;
    Ok(())
}

/// Append `count` values to the file at `path`, creating it if needed.
pub fn to_file<F, E>(path: &Path, count: usize, next: F) -> Result<(), E>
where
    F: FnMut() -> Result<String, E>,
    E: From<io::Error>,
{
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    to_writer(file, count, next)
}

pub fn to_stdout<F, E>(count: usize, next: F) -> Result<(), E>
where
    F: FnMut() -> Result<String, E>,
    E: From<io::Error>,
{
    let stdout = io::stdout();
    to_writer(stdout.lock(), count, next)
}

/// Collect `count` values into one newline-separated string (clipboard).
pub fn collect<F, E>(count: usize, mut next: F) -> Result<String, E>
where
    F: FnMut() -> Result<String, E>,
{
    let mut joined = String::new();
    for i in 0..count {
        let mut value = match next() {
            Ok(value) => value,
            Err(e) => {
                joined.zeroize();
                return Err(e);
            }
        };
        if i > 0 {
            joined.push('\n');
        }
        joined.push_str(&value);
        value.zeroize();
    }
    Ok(joined)
}
