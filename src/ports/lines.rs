//! Line Port - Line-oriented Source and Sink
//!
//! The codec reads and writes whole lines and nothing else.
//! Any `BufRead` is a source and any `Write` is a sink, so files,
//! in-memory buffers and test fixtures all plug in unchanged.
//! Sources hand out raw bytes; checking that a line is UTF-8 text is
//! the codec's job, so a bad byte is reported against its line.

use std::io::{self, BufRead, Write};

/// A finite, lazily produced sequence of text lines.
pub trait LineSource {
  /// Bytes of the next line without its terminator, or `None` at end of input.
  fn next_line(&mut self) -> io::Result<Option<Vec<u8>>>;
}

/// Accepts lines and terminates each one.
pub trait LineSink {
  /// Write `line` followed by `\n`, then flush.
  fn write_line(&mut self, line: &str) -> io::Result<()>;
}

impl<R: BufRead> LineSource for R {
  fn next_line(&mut self) -> io::Result<Option<Vec<u8>>> {
    let mut buf = Vec::new();
    if self.read_until(b'\n', &mut buf)? == 0 {
      return Ok(None);
    }
    if buf.ends_with(b"\n") {
      buf.pop();
      if buf.ends_with(b"\r") {
        buf.pop();
      }
    }
    Ok(Some(buf))
  }
}

impl<W: Write> LineSink for W {
  fn write_line(&mut self, line: &str) -> io::Result<()> {
    self.write_all(line.as_bytes())?;
    self.write_all(b"\n")?;
    self.flush()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_source_strips_terminators() {
    let mut src: &[u8] = b"one\r\ntwo\nthree";
    assert_eq!(src.next_line().unwrap().as_deref(), Some(&b"one"[..]));
    assert_eq!(src.next_line().unwrap().as_deref(), Some(&b"two"[..]));
    assert_eq!(src.next_line().unwrap().as_deref(), Some(&b"three"[..]));
    assert_eq!(src.next_line().unwrap(), None);
  }

  #[test]
  fn test_source_passes_invalid_utf8_through() {
    let mut src: &[u8] = b"ok\n\xff\xfe\n";
    assert_eq!(src.next_line().unwrap().as_deref(), Some(&b"ok"[..]));
    assert_eq!(src.next_line().unwrap().as_deref(), Some(&b"\xff\xfe"[..]));
  }

  #[test]
  fn test_sink_terminates_lines() {
    let mut out = Vec::new();
    out.write_line("a").unwrap();
    out.write_line("").unwrap();
    assert_eq!(out, b"a\n\n");
  }
}
