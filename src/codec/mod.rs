//! GBK/UTF-8 adapter. Some CUE sheet producers still emit GBK; everything in
//! this crate works on UTF-8 and converts at the byte boundary.

use crate::error::{CueError, CueResult};
use crate::util::write_atomic;
use encoding_rs::GBK;
use log::debug;
use std::fs;
use std::path::Path;

/// Whether a byte buffer is already valid UTF-8.
pub fn is_utf8(src: &[u8]) -> bool {
    std::str::from_utf8(src).is_ok()
}

/// Decodes a GBK byte buffer to a UTF-8 string. Fails on any malformed
/// sequence rather than substituting replacement characters.
pub fn gbk_to_utf8(src: &[u8]) -> CueResult<String> {
    GBK.decode_without_bom_handling_and_without_replacement(src)
        .map(|s| s.into_owned())
        .ok_or(CueError::MalformedBuffer)
}

/// Returns `src` as UTF-8 text, transcoding from GBK when necessary.
pub fn to_utf8(src: &[u8]) -> CueResult<String> {
    match std::str::from_utf8(src) {
        Ok(s) => Ok(s.to_string()),
        Err(_) => gbk_to_utf8(src),
    }
}

/// Rewrites a GBK-encoded text file as UTF-8 in place. A file that is
/// already valid UTF-8 is left untouched, so the pass is idempotent.
///
/// The buffer is fully decoded before the file is replaced; a decode error
/// never corrupts the original.
pub fn fix_encoding(path: impl AsRef<Path>) -> CueResult<()> {
    let path = path.as_ref();
    let data = fs::read(path)?;

    if is_utf8(&data) {
        debug!("Already valid UTF-8, skipping: {:?}", path);
        return Ok(());
    }

    let text = gbk_to_utf8(&data).map_err(|_| CueError::MalformedEncoding(path.to_path_buf()))?;

    debug!("Rewriting {:?} as UTF-8 ({} bytes in)", path, data.len());
    write_atomic(path, text.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    // "中文" in GBK
    const GBK_BYTES: &[u8] = &[0xD6, 0xD0, 0xCE, 0xC4];

    #[test]
    fn detects_utf8() {
        assert!(is_utf8("TITLE \"中文\"".as_bytes()));
        assert!(!is_utf8(GBK_BYTES));
    }

    #[test]
    fn decodes_gbk_bytes() {
        assert_eq!(gbk_to_utf8(GBK_BYTES).unwrap(), "中文");
    }

    #[test]
    fn rejects_malformed_gbk() {
        // 0x81 starts a double-byte sequence; 0x00 is not a valid trailer
        assert!(gbk_to_utf8(&[0x81, 0x00]).is_err());
    }

    #[test]
    fn to_utf8_passes_valid_input_through() {
        assert_eq!(to_utf8(b"PERFORMER \"Artist\"").unwrap(), "PERFORMER \"Artist\"");
    }

    #[test]
    fn fix_encoding_converts_then_becomes_noop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("disc.cue");

        let mut raw = b"TITLE \"".to_vec();
        raw.extend_from_slice(GBK_BYTES);
        raw.extend_from_slice(b"\"\n");
        std::fs::write(&path, &raw).unwrap();

        fix_encoding(&path).unwrap();
        let first = std::fs::read(&path).unwrap();
        assert!(is_utf8(&first));
        assert_eq!(String::from_utf8(first.clone()).unwrap(), "TITLE \"中文\"\n");

        // second run must not change the file
        fix_encoding(&path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), first);
    }

    #[test]
    fn fix_encoding_leaves_file_alone_on_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.cue");
        let raw = [0x81u8, 0x00, 0xFF];
        std::fs::write(&path, raw).unwrap();

        assert!(matches!(
            fix_encoding(&path),
            Err(CueError::MalformedEncoding(_))
        ));
        assert_eq!(std::fs::read(&path).unwrap(), raw);
    }
}
