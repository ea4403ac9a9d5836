use crate::error::CueResult;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Replaces `path`'s contents with `data` without a partial-write window:
/// the bytes go to a temp file in the same directory, are synced, and the
/// temp file is renamed over the original.
pub fn write_atomic(path: &Path, data: &[u8]) -> CueResult<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;

    tmp.write_all(data)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;

    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
