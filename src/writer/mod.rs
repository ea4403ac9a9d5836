use crate::codec;
use crate::error::CueResult;
use std::io::{BufWriter, Write};

/// The destination contract the sheet encoder requires: write a string,
/// flush. Nothing else.
pub trait StringWrite {
    fn write_str(&mut self, s: &str) -> CueResult<()>;

    fn flush(&mut self) -> CueResult<()>;
}

/// Buffered, encoding-aware sink over any byte writer.
///
/// Strings pass through as UTF-8. Raw byte input that is not valid UTF-8 is
/// assumed to be GBK and decoded before it is written, so callers holding
/// legacy-encoded field data can feed it through unchanged.
pub struct EncodingWriter<W: Write> {
    inner: BufWriter<W>,
}

impl<W: Write> EncodingWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner: BufWriter::new(inner),
        }
    }

    /// Writes bytes, fixing up GBK input to UTF-8 on the way through.
    pub fn write_raw(&mut self, src: &[u8]) -> CueResult<()> {
        if codec::is_utf8(src) {
            self.inner.write_all(src)?;
            return Ok(());
        }
        let decoded = codec::gbk_to_utf8(src)?;
        self.inner.write_all(decoded.as_bytes())?;
        Ok(())
    }

    /// Unwraps the sink, flushing buffered output first.
    pub fn into_inner(self) -> CueResult<W> {
        self.inner
            .into_inner()
            .map_err(|e| e.into_error().into())
    }
}

impl<W: Write> StringWrite for EncodingWriter<W> {
    fn write_str(&mut self, s: &str) -> CueResult<()> {
        self.inner.write_all(s.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> CueResult<()> {
        self.inner.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_str_passes_utf8_through() {
        let mut w = EncodingWriter::new(Vec::new());
        w.write_str("TRACK 01 AUDIO\n").unwrap();
        let out = w.into_inner().unwrap();
        assert_eq!(out, b"TRACK 01 AUDIO\n");
    }

    #[test]
    fn write_raw_decodes_gbk_input() {
        let mut w = EncodingWriter::new(Vec::new());
        // "中文" in GBK
        w.write_raw(&[0xD6, 0xD0, 0xCE, 0xC4]).unwrap();
        let out = w.into_inner().unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "中文");
    }

    #[test]
    fn write_raw_keeps_utf8_bytes_untouched() {
        let mut w = EncodingWriter::new(Vec::new());
        w.write_raw("TITLE \"中文\"\n".as_bytes()).unwrap();
        let out = w.into_inner().unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "TITLE \"中文\"\n");
    }

    #[test]
    fn write_raw_rejects_malformed_bytes() {
        let mut w = EncodingWriter::new(Vec::new());
        assert!(w.write_raw(&[0x81, 0x00]).is_err());
    }
}
